use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::defaults::SUPPORTED_SSH_OPTIONS;
use crate::error::ValidationError;
use crate::structures::ProxySettings;


/// `~` and `~/...` resolve against `$HOME`; anything else is taken literally.
pub fn expand_home(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return PathBuf::from(raw),
    };
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest.trim_start_matches('/')),
        None => PathBuf::from(raw),
    }
}

/// Path option value that must name something on disk.
///
/// A failed stat is reported as "does not exist" whatever the cause
/// (permission denied reads the same as not found).
pub fn existing_path(option: &'static str, raw: &str) -> Result<PathBuf, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyPath { option });
    }

    let path = expand_home(raw);
    match fs::metadata(&path) {
        Ok(_) => Ok(path),
        Err(e) => {
            debug!(%option, path = %path.display(), error = %e, "path check failed");
            Err(ValidationError::MissingPath { option, path })
        }
    }
}

/// Splits a `-o` payload into a whitelisted `(key, value)` pair.
///
/// `KEY=VALUE` wins over `KEY VALUE` when both separators are present.
pub fn ssh_option(raw: &str) -> Result<(String, String), ValidationError> {
    let (key, value) = raw
        .split_once('=')
        .or_else(|| raw.split_once(' '))
        .ok_or_else(|| ValidationError::InvalidSshOption(raw.to_owned()))?;

    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return Err(ValidationError::InvalidSshOption(raw.to_owned()));
    }

    if !SUPPORTED_SSH_OPTIONS.contains(&key) {
        return Err(ValidationError::UnsupportedSshOption {
            key: key.to_owned(),
            supported: SUPPORTED_SSH_OPTIONS.join(", "),
        });
    }

    Ok((key.to_owned(), value.to_owned()))
}

/// Parses `[user[:password]@]host[:port]`.
pub fn proxy(raw: &str) -> Result<ProxySettings, ValidationError> {
    let invalid = || ValidationError::InvalidProxy(raw.to_owned());

    let (credentials, endpoint) = match raw.rsplit_once('@') {
        Some((credentials, endpoint)) => (Some(credentials), endpoint),
        None => (None, raw),
    };

    let (host, port) = match endpoint.rsplit_once(':') {
        Some((host, port)) => {
            let port: u16 = port.parse().map_err(|_| invalid())?;
            (host, Some(port))
        }
        None => (endpoint, None),
    };
    if host.is_empty() || port == Some(0) {
        return Err(invalid());
    }

    let mut settings = ProxySettings::new(host);
    if let Some(port) = port {
        settings.port = port;
    }

    if let Some(credentials) = credentials {
        let (user, password) = match credentials.split_once(':') {
            Some((user, password)) => (user, Some(password)),
            None => (credentials, None),
        };
        if user.is_empty() {
            return Err(invalid());
        }
        settings.user = Some(user.to_owned());
        settings.password = password.map(str::to_owned);
    }

    Ok(settings)
}
