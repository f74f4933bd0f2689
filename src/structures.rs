use serde::Serialize;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::defaults::{DEFAULT_PROXY_PORT, DEFAULT_SSH_CONFIG};
use crate::error::ValidationError;
use crate::validate::expand_home;


#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, clap::ValueEnum)]
pub enum ProxyVersion {
    #[value(name = "SOCKS4")]
    #[serde(rename = "SOCKS4")]
    Socks4,
    #[default]
    #[value(name = "SOCKS5")]
    #[serde(rename = "SOCKS5")]
    Socks5,
}

/// SOCKS endpoint recorded for the transport; nothing here speaks SOCKS.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct ProxySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub host: String,
    pub port: u16,
    pub version: ProxyVersion,
}

impl ProxySettings {
    pub fn new(host: impl Into<String>) -> Self {
        ProxySettings {
            user: None,
            password: None,
            host: host.into(),
            port: DEFAULT_PROXY_PORT,
            version: ProxyVersion::default(),
        }
    }
}

// keep the password out of debug logs
impl fmt::Debug for ProxySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxySettings")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("version", &self.version)
            .finish()
    }
}


/// Validated settings handed to the sync engine.
///
/// Only [`ConfigBuilder::build`] creates one, and it is never changed afterwards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Configuration {
    force: bool,
    preserve: bool,
    quiet: bool,
    verbose: bool,
    recursive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_key: Option<PathBuf>,
    ssh_config_path: PathBuf,
    ssh_options: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    proxy: Option<ProxySettings>,
    source: String,
    destination: String,
}

impl Configuration {
    /// Bypass the presence/timestamp comparison.
    pub fn force(&self) -> bool {
        self.force
    }

    /// Propagate mtime, atime and mode.
    pub fn preserve(&self) -> bool {
        self.preserve
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    pub fn private_key(&self) -> Option<&Path> {
        self.private_key.as_deref()
    }

    pub fn ssh_config_path(&self) -> &Path {
        &self.ssh_config_path
    }

    pub fn ssh_options(&self) -> &BTreeMap<String, String> {
        &self.ssh_options
    }

    pub fn proxy(&self) -> Option<&ProxySettings> {
        self.proxy.as_ref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}


/// Mutable accumulator the parser fills in argument order.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    pub force: bool,
    pub preserve: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub recursive: bool,
    pub private_key: Option<PathBuf>,
    pub ssh_config_path: PathBuf,
    pub ssh_options: BTreeMap<String, String>,
    pub proxy: Option<ProxySettings>,
    pub operands: Vec<String>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder {
            force: false,
            preserve: false,
            quiet: false,
            verbose: false,
            recursive: false,
            private_key: None,
            ssh_config_path: expand_home(DEFAULT_SSH_CONFIG),
            ssh_options: BTreeMap::new(),
            proxy: None,
            operands: Vec::new(),
        }
    }
}

impl ConfigBuilder {
    /// Whole-record checks, then freeze.
    pub fn build(self) -> Result<Configuration, ValidationError> {
        if self.quiet && self.verbose {
            return Err(ValidationError::QuietAndVerbose);
        }

        let [source, destination]: [String; 2] = self
            .operands
            .try_into()
            .map_err(|rest: Vec<String>| ValidationError::Operands(rest.len()))?;

        Ok(Configuration {
            force: self.force,
            preserve: self.preserve,
            quiet: self.quiet,
            verbose: self.verbose,
            recursive: self.recursive,
            private_key: self.private_key,
            ssh_config_path: self.ssh_config_path,
            ssh_options: self.ssh_options,
            proxy: self.proxy,
            source,
            destination,
        })
    }
}
