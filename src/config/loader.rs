//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

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

/// Read configuration from a TOML file. Not validated.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Deserialize configuration from TOML text. Not validated.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Build the effective configuration: file (or defaults), then the bind
/// override, then a single validation pass over the result.
pub fn resolve_config(
    path: Option<&Path>,
    bind_override: Option<&str>,
) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind) = bind_override {
        config.listener.bind_address = bind.to_string();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "prediction-service-{}.toml",
            uuid::Uuid::new_v4()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.listener.bind_address, "0.0.0.0:5000");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse_config(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [observability]
            json_logs = true
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.observability.log_level, "info");
        assert!(config.observability.json_logs);
    }

    #[test]
    fn syntax_error_is_parse_error() {
        let err = parse_config("[listener\nbind_address = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn parse_does_not_validate() {
        let config = parse_config("[timeouts]\nrequest_secs = 0\n").unwrap();
        assert_eq!(config.timeouts.request_secs, 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("prediction-service-does-not-exist.toml");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));

        let err = resolve_config(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn resolve_without_file_uses_defaults() {
        let config = resolve_config(None, None).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn bind_override_replaces_default_address() {
        let config = resolve_config(None, Some("127.0.0.1:7000")).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:7000");
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn bind_override_wins_over_file() {
        let path = write_temp("[listener]\nbind_address = \"127.0.0.1:9000\"\n[timeouts]\nrequest_secs = 5\n");

        let config = resolve_config(Some(&path), Some("127.0.0.1:9100")).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.listener.bind_address, "127.0.0.1:9100");
        assert_eq!(config.timeouts.request_secs, 5);
    }

    #[test]
    fn bind_override_can_fix_an_invalid_file_address() {
        let path = write_temp("[listener]\nbind_address = \"not-an-address\"\n");

        let config = resolve_config(Some(&path), Some("127.0.0.1:9200"));
        let without_override = resolve_config(Some(&path), None);
        let _ = fs::remove_file(&path);

        assert_eq!(config.unwrap().listener.bind_address, "127.0.0.1:9200");
        assert!(matches!(without_override, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn invalid_bind_override_is_rejected() {
        let err = resolve_config(None, Some("localhost")).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(
                errors,
                vec![ValidationError::InvalidBindAddress("localhost".into())]
            ),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn semantic_errors_are_reported_together() {
        let path = write_temp(
            r#"
            [listener]
            bind_address = "not-an-address"

            [timeouts]
            request_secs = 0
            "#,
        );

        let err = resolve_config(Some(&path), None).unwrap_err();
        let _ = fs::remove_file(&path);

        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other}"),
        }
    }
}
