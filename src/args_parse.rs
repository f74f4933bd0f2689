use clap::{ArgAction, ArgMatches, ColorChoice, Parser};

use crate::structures::ProxyVersion;

/// Raw token grammar. Values are kept as written; `configure` validates them.
///
/// Help and version handling are ours, not clap's: `-h` must print the
/// hand-written usage text and exit 0 without validating anything.
#[derive(Parser, Debug)]
#[command(
    name = "sftpsync",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true,
    color = ColorChoice::Never
)]
pub struct ProgramArgs {
    /// Sync regardless of presence or timestamps
    #[arg(short, long)]
    pub force: bool,

    /// Print usage and exit; stops tokenizing where it appears
    #[arg(short, long, action = ArgAction::Help)]
    pub help: Option<bool>,

    // paths and -o may repeat; the last occurrence wins (per key for -o)

    /// Private key file for public key authentication
    #[arg(short, long, value_name = "IDENTITY_FILE", action = ArgAction::Append, allow_hyphen_values = true)]
    pub identity: Vec<String>,

    /// Alternative ssh configuration file
    #[arg(short = 'F', value_name = "SSH_CONFIG", action = ArgAction::Append, allow_hyphen_values = true)]
    pub config_file: Vec<String>,

    /// ssh_config(5) option as KEY=VALUE or "KEY VALUE"
    #[arg(short = 'o', value_name = "SSH_OPTION", action = ArgAction::Append, allow_hyphen_values = true)]
    pub ssh_option: Vec<String>,

    /// Keep modification times, access times and modes
    #[arg(short, long)]
    pub preserve: bool,

    /// SOCKS proxy endpoint
    #[arg(long, value_name = "[USER[:PASSWORD]@]HOST[:PORT]", action = ArgAction::Append)]
    pub proxy: Vec<String>,

    /// SOCKS protocol version
    #[arg(long, value_name = "SOCKS4|SOCKS5", ignore_case = true, action = ArgAction::Append)]
    pub proxy_version: Vec<ProxyVersion>,

    /// Silence progress and ssh diagnostics
    #[arg(short, long)]
    pub quiet: bool,

    /// Descend into directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Print debugging messages
    #[arg(short, long)]
    pub verbose: bool,

    //positionals:

    /// Push or pull endpoints
    #[arg(value_name = "SOURCE DESTINATION")]
    pub operands: Vec<String>,
}

/// An option occurrence whose value needs checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuedOption<'a> {
    Identity(&'a str),
    ConfigFile(&'a str),
    SshOption(&'a str),
    Proxy(&'a str),
}

/// Every valued occurrence, in the order it appeared on the command line.
pub fn valued_in_order<'m>(matches: &'m ArgMatches) -> Vec<ValuedOption<'m>> {
    let kinds: [(&str, fn(&'m str) -> ValuedOption<'m>); 4] = [
        ("identity", ValuedOption::Identity),
        ("config_file", ValuedOption::ConfigFile),
        ("ssh_option", ValuedOption::SshOption),
        ("proxy", ValuedOption::Proxy),
    ];

    let mut found: Vec<(usize, ValuedOption<'m>)> = Vec::new();
    for (id, wrap) in kinds {
        let (Some(indices), Some(values)) = (matches.indices_of(id), matches.get_many::<String>(id)) else {
            continue;
        };
        found.extend(indices.zip(values).map(|(index, value)| (index, wrap(value.as_str()))));
    }

    found.sort_by_key(|&(index, _)| index);
    found.into_iter().map(|(_, option)| option).collect()
}
