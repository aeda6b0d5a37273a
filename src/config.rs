use anyhow::{Context, Result};

use crate::logger::LogLevel;

pub const MARKER_VAR: &str = "VARCALC_MARKER";
pub const LOG_VAR: &str = "VARCALC_LOG";

// Settings for the interactive front end
#[derive(Debug, Clone, PartialEq)]
pub struct ReplConfig {
    // printed before every result or error line
    pub output_marker: String,
    pub log_level: LogLevel
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            output_marker: String::from(">>>"),
            log_level: LogLevel::Warn
        }
    }
}

impl ReplConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Build a config from an arbitrary variable source; unset variables keep their defaults
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let mut config = ReplConfig::default();
        if let Some(marker) = lookup(MARKER_VAR) {
            config.output_marker = marker;
        }
        if let Some(level) = lookup(LOG_VAR) {
            config.log_level = level.parse::<LogLevel>().with_context(|| format!("reading {}", LOG_VAR))?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::{ReplConfig, LOG_VAR, MARKER_VAR};
    use crate::logger::LogLevel;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ReplConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, ReplConfig::default());
        assert_eq!(config.output_marker, ">>>");
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn reads_overrides() {
        let config = ReplConfig::from_lookup(lookup_in(&[(MARKER_VAR, "=>"), (LOG_VAR, "debug")])).unwrap();
        assert_eq!(config.output_marker, "=>");
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = ReplConfig::from_lookup(lookup_in(&[(LOG_VAR, "chatty")])).unwrap_err();
        assert!(format!("{:#}", err).contains(LOG_VAR));
    }
}
