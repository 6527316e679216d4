use std::str::FromStr;

use tracing::Level;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("'{0}' is not a log level (expected one of trace, debug, info, warn, error).")]
    InvalidLogLevel(String),

    #[error("The router basename '{0}' must be an absolute path.")]
    InvalidBasename(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: Level,
    pub basename: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            basename: None,
        }
    }
}

impl AppConfig {
    /// Reads the values baked in at build time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("INTERVIEW_WEB_LOG"),
            option_env!("INTERVIEW_WEB_BASENAME"),
        )
    }

    pub fn from_values(log_level: Option<&str>, basename: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(level) = log_level.map(str::trim).filter(|l| !l.is_empty()) {
            config.log_level = Level::from_str(level)
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_owned()))?;
        }

        if let Some(basename) = basename.map(str::trim).filter(|b| !b.is_empty()) {
            if !basename.starts_with('/') {
                return Err(ConfigError::InvalidBasename(basename.to_owned()));
            }
            // "/" would mean no basename at all
            let basename = basename.trim_end_matches('/');
            config.basename = (!basename.is_empty()).then(|| basename.to_owned());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::{AppConfig, ConfigError};

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(AppConfig::from_values(None, None), Ok(AppConfig::default()));
        assert_eq!(AppConfig::from_values(Some(""), Some(" ")), Ok(AppConfig::default()));
    }

    #[test]
    fn parses_log_level() {
        let config = AppConfig::from_values(Some("debug"), None).unwrap();

        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert_eq!(
            AppConfig::from_values(Some("loud"), None),
            Err(ConfigError::InvalidLogLevel("loud".to_owned()))
        );
    }

    #[test]
    fn normalizes_basename() {
        let config = AppConfig::from_values(None, Some("/practice/")).unwrap();
        assert_eq!(config.basename.as_deref(), Some("/practice"));

        let config = AppConfig::from_values(None, Some("/")).unwrap();
        assert_eq!(config.basename, None);
    }

    #[test]
    fn rejects_relative_basename() {
        assert_eq!(
            AppConfig::from_values(None, Some("practice")),
            Err(ConfigError::InvalidBasename("practice".to_owned()))
        );
    }
}
