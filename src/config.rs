use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";

pub const LOG_LEVEL_ENV: &str = "DOTNET_DETECT_LOG_LEVEL";
pub const PLAN_FORMAT_ENV: &str = "DOTNET_DETECT_PLAN_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanFormat {
    #[default]
    Toml,
    Json,
}

impl FromStr for PlanFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(PlanFormat::Toml),
            "json" => Ok(PlanFormat::Json),
            other => Err(ConfigError::InvalidPlanFormat(other.to_string())),
        }
    }
}

impl fmt::Display for PlanFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanFormat::Toml => write!(f, "toml"),
            PlanFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid plan format: {0}. Valid options: toml, json")]
    InvalidPlanFormat(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone)]
pub struct DetectConfig {
    pub log_level: String,
    /// Raw value so an invalid setting is reported by `validate` instead of
    /// silently falling back.
    pub plan_format: String,
}

impl Default for DetectConfig {
    fn default() -> Self {
        let log_level = env::var(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let plan_format = env::var(PLAN_FORMAT_ENV)
            .unwrap_or_else(|_| PlanFormat::default().to_string())
            .to_lowercase();

        Self {
            log_level,
            plan_format,
        }
    }
}

impl DetectConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        self.plan_format()?;
        Ok(())
    }

    pub fn plan_format(&self) -> Result<PlanFormat, ConfigError> {
        self.plan_format.parse()
    }
}

impl fmt::Display for DetectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Detector Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Plan Format: {}", self.plan_format)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = [EnvGuard::unset(LOG_LEVEL_ENV), EnvGuard::unset(PLAN_FORMAT_ENV)];

        let config = DetectConfig::default();

        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.plan_format().unwrap(), PlanFormat::Toml);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = [
            EnvGuard::set(LOG_LEVEL_ENV, "DEBUG"),
            EnvGuard::set(PLAN_FORMAT_ENV, "Json"),
        ];

        let config = DetectConfig::default();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.plan_format().unwrap(), PlanFormat::Json);
    }

    #[test]
    #[serial]
    fn test_invalid_plan_format_from_env() {
        let _guard = EnvGuard::set(PLAN_FORMAT_ENV, "yaml");

        let err = DetectConfig::default().validate().unwrap_err();
        assert_eq!(err, ConfigError::InvalidPlanFormat("yaml".to_string()));
    }

    #[test]
    fn test_configuration_validation_invalid_log_level() {
        let config = DetectConfig {
            log_level: "loud".to_string(),
            plan_format: "toml".to_string(),
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("loud"));
    }

    #[test]
    fn test_plan_format_round_trip() {
        for format in [PlanFormat::Toml, PlanFormat::Json] {
            assert_eq!(format.to_string().parse::<PlanFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_config_display() {
        let config = DetectConfig {
            log_level: "warn".to_string(),
            plan_format: "json".to_string(),
        };
        let display = format!("{}", config);
        assert!(display.contains("Detector Configuration:"));
        assert!(display.contains("Log Level: warn"));
        assert!(display.contains("Plan Format: json"));
    }
}
