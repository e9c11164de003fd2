//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0)
//! - Check the backend origin is an absolute http(s) URL
//! - Check the log level names a tracing level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ConsoleConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::str::FromStr;

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::config::schema::ConsoleConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("backend.base_url '{value}' is not a valid URL: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("backend.base_url '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("backend.timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("observability.log_level must not be empty")]
    EmptyLogLevel,

    #[error("observability.log_level '{0}' is not one of off, error, warn, info, debug, trace")]
    UnknownLogLevel(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ConsoleConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.backend.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UnsupportedScheme(config.backend.base_url.clone()));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            value: config.backend.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.backend.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let level = &config.observability.log_level;
    if level.trim().is_empty() {
        errors.push(ValidationError::EmptyLogLevel);
    } else if LevelFilter::from_str(level).is_err() {
        errors.push(ValidationError::UnknownLogLevel(level.clone()));
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
    fn test_default_config_is_valid() {
        assert!(validate_config(&ConsoleConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = ConsoleConfig::default();
        config.backend.base_url = "ftp://books.local".into();
        config.backend.timeout_ms = 0;
        config.observability.log_level = " ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::EmptyLogLevel));
        assert!(matches!(errors[0], ValidationError::UnsupportedScheme(_)));
    }

    #[test]
    fn test_unparseable_url() {
        let mut config = ConsoleConfig::default();
        config.backend.base_url = "not a url".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_log_level_must_be_known() {
        let mut config = ConsoleConfig::default();
        for level in ["off", "error", "WARN", "info", "debug", "trace"] {
            config.observability.log_level = level.into();
            assert!(validate_config(&config).is_ok(), "{} rejected", level);
        }

        config.observability.log_level = "verbos".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::UnknownLogLevel("verbos".into())]);
    }
}
