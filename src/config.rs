//! Configuration of the `xss-query` binary

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings read from a TOML file, all of them optional.
///
/// ```toml
/// display = ":1"
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// X display to query instead of the one in `$DISPLAY`
    pub display: Option<String>,
    /// flexi_logger log specification
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display: None,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Couldn't read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Config> {
        Ok(toml::from_str(contents)?)
    }

    /// Replace settings with the ones given on the command line
    pub fn override_with(mut self, display: Option<String>, log_level: Option<String>) -> Self {
        if display.is_some() {
            self.display = display;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        self
    }
}

#[cfg(test)]
mod test {
    use super::Config;

    #[test]
    fn test_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::default().log_level, "warn");
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse("display = \":3\"\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(config.display.as_deref(), Some(":3"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::parse("display = 3").is_err());
        assert!(Config::parse("timeout = 10").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::parse("display = \":3\"").unwrap();
        let unchanged = config.clone().override_with(None, None);
        assert_eq!(unchanged, config);
        let changed = config.override_with(Some(":7".to_owned()), Some("trace".to_owned()));
        assert_eq!(changed.display.as_deref(), Some(":7"));
        assert_eq!(changed.log_level, "trace");
    }
}
