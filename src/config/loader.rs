//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `server.port`.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid {var} value `{value}`")]
    Env { var: &'static str, value: String },
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(PORT_ENV) {
        config.server.port = value.trim().parse().map_err(|_| ConfigError::Env {
            var: PORT_ENV,
            value,
        })?;
    }
    Ok(())
}

/// Parse a TOML document into a config without validating it.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load configuration from an optional TOML file, apply process environment
/// overrides, then validate.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config, |var| std::env::var(var).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, |var| (var == PORT_ENV).then(|| "8088".to_string()))
            .unwrap();
        assert_eq!(config.server.port, 8088);
    }

    #[test]
    fn test_missing_port_keeps_config() {
        let mut config = parse_config("[server]\nport = 4000").unwrap();
        apply_env_overrides(&mut config, |_| None).unwrap();
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut config = AppConfig::default();
        let err = apply_env_overrides(&mut config, |_| Some("http".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: PORT_ENV, .. }));
        assert_eq!(err.to_string(), "Invalid PORT value `http`");
    }

    #[test]
    fn test_parse_error_reported() {
        let err = parse_config("[server\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/risk.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_message_lists_all() {
        let err = ConfigError::Validation(vec![
            ValidationError::EmptyHost,
            ValidationError::ZeroBodyLimit,
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: server.host must not be empty, security.max_body_size must be greater than zero"
        );
    }
}
