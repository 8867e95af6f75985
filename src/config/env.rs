//! Configuration resolution from the process environment.
//!
//! Resolution never fails: unusable values fall back to defaults and are
//! reported back to the caller so they can be logged once logging is up.

use std::path::Path;

use crate::config::schema::{ServiceConfig, DEFAULT_PORT};

/// Environment variable holding the TCP port to bind.
pub const PORT_VAR: &str = "PORT";

/// Dotenv file read from the working directory at startup.
pub const DOTENV_FILE: &str = ".env";

/// A `PORT` value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid PORT value {value:?}: expected an integer between 1 and 65535")]
pub struct InvalidPort {
    pub value: String,
}

impl ServiceConfig {
    /// Build the configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first; variables
    /// already present in the environment take precedence over it.
    pub fn from_env() -> (Self, Option<InvalidPort>) {
        Self::from_env_file(Path::new(DOTENV_FILE))
    }

    /// Like [`ServiceConfig::from_env`], reading dotenv entries from `path`.
    ///
    /// A missing file is not an error. Variables already set win over the file.
    pub fn from_env_file(path: &Path) -> (Self, Option<InvalidPort>) {
        let _ = dotenvy::from_path(path);
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> (Self, Option<InvalidPort>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut rejected = None;

        match resolve_port(lookup(PORT_VAR)) {
            Ok(port) => config.listener.port = port,
            Err(e) => rejected = Some(e),
        }

        (config, rejected)
    }
}

/// Resolve a raw `PORT` value, defaulting to 8000 when absent.
pub fn resolve_port(raw: Option<String>) -> Result<u16, InvalidPort> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PORT);
    };

    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(InvalidPort { value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_port(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| match key {
            PORT_VAR => value.map(str::to_string),
            _ => None,
        }
    }

    #[test]
    fn port_from_environment() {
        let (config, rejected) = ServiceConfig::from_lookup(lookup_port(Some("9999")));
        assert_eq!(config.listener.port, 9999);
        assert!(rejected.is_none());
    }

    #[test]
    fn missing_port_defaults_to_8000() {
        let (config, rejected) = ServiceConfig::from_lookup(lookup_port(None));
        assert_eq!(config.listener.port, 8000);
        assert_eq!(config.listener.host, "0.0.0.0");
        assert!(rejected.is_none());
    }

    #[test]
    fn unusable_port_falls_back_to_default() {
        for bad in ["abc", "", "0", "-1", "70000", "80.5"] {
            let (config, rejected) = ServiceConfig::from_lookup(lookup_port(Some(bad)));
            assert_eq!(config.listener.port, DEFAULT_PORT, "value {bad:?}");
            assert_eq!(rejected, Some(InvalidPort { value: bad.to_string() }));
        }
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(resolve_port(Some(" 8080 ".into())), Ok(8080));
    }
}
