//! Static defaults and the accepted `-o` option table.
//!
//! Everything the parser treats as "the default" or "the allowed set" lives here,
//! so extending the tool means editing this file only.

/// Exit status for every parse or validation failure.
pub const ERROR_ILLEGAL_ARGUMENTS: i32 = 2;

/// Name used in usage text and as `argv[0]` when tokenizing.
pub const PROGRAM_NAME: &str = "sftpsync";

/// `ssh_config(5)` keywords accepted through `-o`.
pub const SUPPORTED_SSH_OPTIONS: &[&str] = &["ProxyCommand"];

pub const DEFAULT_SSH_CONFIG: &str = "~/.ssh/config";

pub const DEFAULT_PROXY_PORT: u16 = 1080;

// Endpoint defaults applied by the transport; shown in the help text only.
pub const DEFAULT_REMOTE_USER: &str = "anonymous";
pub const DEFAULT_REMOTE_PASSWORD: &str = "anonymous";
pub const DEFAULT_REMOTE_PORT: u16 = 22;
pub const DEFAULT_REMOTE_PATH: &str = "/";

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "SFTPSYNC_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Labels used in path diagnostics.
pub const IDENTITY_LABEL: &str = "identity file";
pub const SSH_CONFIG_LABEL: &str = "ssh config file";
