mod args_parse;
pub mod defaults;
mod error;
mod structures;
pub mod usage;
pub mod validate;


pub use args_parse::ProgramArgs;
pub use defaults::ERROR_ILLEGAL_ARGUMENTS;
pub use error::{ConfigError, ValidationError};
pub use structures::{ConfigBuilder, Configuration, ProxySettings, ProxyVersion};

use args_parse::{valued_in_order, ValuedOption};
use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches};
use std::ffi::OsString;
use std::io;
use std::iter;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use defaults::{DEFAULT_LOG_FILTER, IDENTITY_LABEL, LOG_ENV_VAR, PROGRAM_NAME, SSH_CONFIG_LABEL};


/// What a successful parse asks the caller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Configuration),
    /// `-h`/`--help` was seen: print usage, exit 0.
    Help,
}

/// Turns an argument vector (without the program name) into a validated
/// [`Configuration`].
///
/// Never prints and never exits; see [`configure_or_exit`] for that.
pub fn configure<I, T>(args: I) -> Result<Parsed, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = iter::once(OsString::from(PROGRAM_NAME)).chain(args.into_iter().map(Into::into));
    let matches = match ProgramArgs::command().try_get_matches_from(argv) {
        Ok(matches) => matches,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            debug!("help requested, skipping the rest of the arguments");
            return Ok(Parsed::Help);
        }
        Err(e) => return Err(e.into()),
    };
    let args = ProgramArgs::from_arg_matches(&matches)?;

    let mut builder = ConfigBuilder {
        force: args.force,
        preserve: args.preserve,
        quiet: args.quiet,
        verbose: args.verbose,
        recursive: args.recursive,
        operands: args.operands,
        ..ConfigBuilder::default()
    };

    // first offending value on the command line wins
    for option in valued_in_order(&matches) {
        match option {
            ValuedOption::Identity(raw) => {
                builder.private_key = Some(validate::existing_path(IDENTITY_LABEL, raw)?);
            }
            ValuedOption::ConfigFile(raw) => {
                builder.ssh_config_path = validate::existing_path(SSH_CONFIG_LABEL, raw)?;
            }
            ValuedOption::SshOption(raw) => {
                let (key, value) = validate::ssh_option(raw)?;
                debug!(%key, %value, "ssh option accepted");
                builder.ssh_options.insert(key, value);
            }
            ValuedOption::Proxy(raw) => {
                builder.proxy = Some(validate::proxy(raw)?);
            }
        }
    }

    match (builder.proxy.as_mut(), args.proxy_version.last()) {
        (Some(proxy), Some(version)) => proxy.version = *version,
        (None, Some(_)) => debug!("--proxy-version given without --proxy, ignoring"),
        _ => {}
    }

    let config = builder.build()?;
    debug!(?config, "configuration validated");
    Ok(Parsed::Run(config))
}

/// [`configure`], with the process-level contract: help exits 0, any failure
/// prints `ERROR: <message>` plus usage and exits with
/// [`ERROR_ILLEGAL_ARGUMENTS`].
///
/// Only a failed write to stdout/stderr comes back as an error.
pub fn configure_or_exit<I, T>(args: I) -> io::Result<Configuration>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    match configure(args) {
        Ok(Parsed::Run(config)) => Ok(config),
        Ok(Parsed::Help) => {
            usage::usage(None)?;
            process::exit(0);
        }
        Err(e) => {
            usage::usage(Some(&e.to_string()))?;
            process::exit(e.exit_code());
        }
    }
}

/// Installs the stderr `tracing` subscriber, filtered by `SFTPSYNC_LOG`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
