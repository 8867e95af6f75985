//! Configuration validation.
//!
//! Semantic checks run before a config is accepted into the system.
//! Validation is a pure function that reports every problem, not just the first.

use axum::http::HeaderValue;

use crate::config::schema::ServiceConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener host must not be empty")]
    EmptyHost,
    #[error("listener port must be non-zero")]
    ZeroPort,
    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
    #[error("cors.{0} must list at least one entry")]
    EmptyCorsList(&'static str),
    #[error("cors.{field} entry {value:?} is not a valid header value")]
    InvalidCorsEntry { field: &'static str, value: String },
}

/// Validate a configuration, collecting all errors.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }
    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let cors = &config.cors;
    for (name, list) in [
        ("allow_origins", &cors.allow_origins),
        ("allow_methods", &cors.allow_methods),
        ("allow_headers", &cors.allow_headers),
    ] {
        if list.is_empty() {
            errors.push(ValidationError::EmptyCorsList(name));
        }
        for value in list {
            if HeaderValue::from_str(value).is_err() {
                errors.push(ValidationError::InvalidCorsEntry {
                    field: name,
                    value: value.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn reports_every_problem() {
        let mut config = ServiceConfig::default();
        config.listener.host = " ".into();
        config.timeouts.request_secs = 0;
        config.cors.allow_headers.clear();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyHost,
                ValidationError::ZeroRequestTimeout,
                ValidationError::EmptyCorsList("allow_headers"),
            ]
        );
    }

    #[test]
    fn rejects_control_characters_in_cors_entries() {
        let mut config = ServiceConfig::default();
        config.cors.allow_origins = vec!["https://ok.example".into(), "bad\norigin".into()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidCorsEntry {
                field: "allow_origins",
                value: "bad\norigin".into(),
            }]
        );
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ValidationError::EmptyCorsList("allow_origins");
        assert_eq!(err.to_string(), "cors.allow_origins must list at least one entry");
    }
}
