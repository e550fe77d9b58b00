use std::str::FromStr;

use crate::logging::LogFormat;

pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const PAGE_SIZE_VAR: &str = "SSM_PAGE_SIZE";
pub const WITH_DECRYPTION_VAR: &str = "SSM_WITH_DECRYPTION";

pub const DEFAULT_LOG_FILTER: &str = "info";
/// `GetParametersByPath` accepts at most ten results per call.
pub const MAX_PAGE_SIZE: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{variable} must be {expected}, got '{value}'")]
    InvalidValue {
        variable: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Process-wide settings read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub log_format: LogFormat,
    pub log_filter: String,
    pub page_size: Option<i32>,
    pub with_decryption: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            page_size: None,
            with_decryption: false,
        }
    }
}

impl LookupConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|variable| std::env::var(variable).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |variable: &str| {
            lookup(variable)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let log_format = match read(LOG_FORMAT_VAR) {
            Some(value) => LogFormat::from_str(&value).map_err(|_| ConfigError::InvalidValue {
                variable: LOG_FORMAT_VAR,
                expected: "one of json, compact, pretty",
                value,
            })?,
            None => LogFormat::Json,
        };

        let page_size = match read(PAGE_SIZE_VAR) {
            Some(value) => match value.parse::<i32>() {
                Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => Some(size),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        variable: PAGE_SIZE_VAR,
                        expected: "an integer between 1 and 10",
                        value,
                    })
                }
            },
            None => None,
        };

        let with_decryption = match read(WITH_DECRYPTION_VAR) {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        variable: WITH_DECRYPTION_VAR,
                        expected: "true or false",
                        value,
                    })
                }
            },
            None => false,
        };

        Ok(Self {
            log_format,
            log_filter: read(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            page_size,
            with_decryption,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<LookupConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        LookupConfig::from_lookup(|variable| env.get(variable).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), Ok(LookupConfig::default()));
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("LOG_FORMAT", "compact"),
            ("RUST_LOG", "debug,aws_config=warn"),
            ("SSM_PAGE_SIZE", "5"),
            ("SSM_WITH_DECRYPTION", "TRUE"),
        ])
        .expect("config should load");

        assert_eq!(config.log_format, LogFormat::Compact);
        assert_eq!(config.log_filter, "debug,aws_config=warn");
        assert_eq!(config.page_size, Some(5));
        assert!(config.with_decryption);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("SSM_PAGE_SIZE", "  "), ("RUST_LOG", "")])
            .expect("blank values should be ignored");
        assert_eq!(config.page_size, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn rejects_page_size_outside_backend_limit() {
        for value in ["0", "11", "ten"] {
            let error = config_from(&[("SSM_PAGE_SIZE", value)]).expect_err("must reject");
            assert!(error.to_string().starts_with("SSM_PAGE_SIZE must be"));
        }
    }

    #[test]
    fn rejects_unknown_log_format() {
        let error = config_from(&[("LOG_FORMAT", "xml")]).expect_err("must reject");
        assert_eq!(
            error,
            ConfigError::InvalidValue {
                variable: "LOG_FORMAT",
                expected: "one of json, compact, pretty",
                value: "xml".to_string(),
            }
        );
    }
}
