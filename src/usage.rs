use std::io::{self, Write};

use crate::defaults::{
    DEFAULT_PROXY_PORT, DEFAULT_REMOTE_PASSWORD, DEFAULT_REMOTE_PATH, DEFAULT_REMOTE_PORT,
    DEFAULT_REMOTE_USER, DEFAULT_SSH_CONFIG, PROGRAM_NAME, SUPPORTED_SSH_OPTIONS,
};


/// Prints the optional `ERROR:` line to stderr and the full usage to stdout.
pub fn usage(message: Option<&str>) -> io::Result<()> {
    write_usage(&mut io::stdout().lock(), &mut io::stderr().lock(), message)
}

pub fn write_usage(out: &mut impl Write, err: &mut impl Write, message: Option<&str>) -> io::Result<()> {
    if let Some(message) = message {
        writeln!(err, "ERROR: {message}")?;
        err.flush()?;
    }

    out.write_all(usage_text().as_bytes())?;
    out.flush()
}

/// Full help text: blocks are separated by two blank lines, and the text ends
/// with one.
pub fn usage_text() -> String {
    let ssh_options: String = SUPPORTED_SSH_OPTIONS
        .iter()
        .map(|name| format!("                    {name}\n"))
        .collect();

    format!(
        "\
Usage:
    {PROGRAM_NAME} [OPTION]... SOURCE DESTINATION
Pull:
    {PROGRAM_NAME} [OPTION]... [user[:password]@]host[:[port]/path] /path/to/local/copy
Push:
    {PROGRAM_NAME} [OPTION]... /path/to/local/copy [user[:password]@]host[:[port]/path]


Defaults:
    user:     {DEFAULT_REMOTE_USER}
    password: {DEFAULT_REMOTE_PASSWORD}
    port:     {DEFAULT_REMOTE_PORT}
    path:     {DEFAULT_REMOTE_PATH}


Options:
-f/--force      Force the synchronization regardless of files' presence or timestamps.
-h/--help       Prints this!
-i/--identity identity_file
                Selects the file from which the identity (private key) for public key authentication is read.
-F ssh_config
                Specifies an alternative per-user ssh configuration file. Default is {DEFAULT_SSH_CONFIG}.
-o ssh_option
                Can be used to pass options to ssh in the format used in ssh_config(5). This is useful for specifying options for which there is no separate {PROGRAM_NAME} command-line flag. For full details of the options listed below, and their possible values, see ssh_config(5).
{ssh_options}\
-p/--preserve:  Preserves modification times, access times, and modes from the original file.
--proxy [user[:password]@]host[:port]
                SOCKS proxy to use. If not provided, port will be defaulted to {DEFAULT_PROXY_PORT}.
--proxy-version SOCKS4|SOCKS5
                Version of the SOCKS protocol to use. Default is SOCKS5.
-q/--quiet:     Quiet mode: disables the progress meter as well as warning and diagnostic messages from ssh(1).
-r/--recursive: Recursively synchronize entire directories.
-v/--verbose:   Verbose mode. Causes {PROGRAM_NAME} to print debugging messages about their progress. This is helpful in debugging connection, authentication, and configuration problems.

"
    )
}
