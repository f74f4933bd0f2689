use std::path::PathBuf;

use thiserror::Error;

use crate::defaults::ERROR_ILLEGAL_ARGUMENTS;

/// Why a command line was rejected.
///
/// Both kinds end the run the same way: usage text, an `ERROR:` line and exit
/// status [`ERROR_ILLEGAL_ARGUMENTS`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The tokenizer could not make sense of the arguments (unknown flag,
    /// missing value, bad clustering).
    #[error("{0}")]
    Parse(String),

    /// A recognized option carried a value that failed a semantic check.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ConfigError {
    pub const fn exit_code(&self) -> i32 {
        ERROR_ILLEGAL_ARGUMENTS
    }
}

impl From<clap::Error> for ConfigError {
    fn from(err: clap::Error) -> Self {
        // clap renders "error: <what>\n\nUsage: ...": keep the first line only,
        // the full usage is printed by us.
        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        let message = first.strip_prefix("error: ").unwrap_or(first);
        ConfigError::Parse(message.trim().to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{option} path is empty or was not provided")]
    EmptyPath { option: &'static str },

    #[error("{option} '{}' does not exist", .path.display())]
    MissingPath { option: &'static str, path: PathBuf },

    #[error("Invalid SSH option '{0}': expected KEY=VALUE or 'KEY VALUE'")]
    InvalidSshOption(String),

    #[error("Unsupported SSH option '{key}'; supported options are: {supported}")]
    UnsupportedSshOption { key: String, supported: String },

    #[error("quiet and verbose modes are mutually exclusive; pick exactly one of -q/--quiet or -v/--verbose")]
    QuietAndVerbose,

    #[error("Invalid proxy '{0}': expected [user[:password]@]host[:port]")]
    InvalidProxy(String),

    #[error("expected SOURCE and DESTINATION, got {0} operand(s)")]
    Operands(usize),
}
