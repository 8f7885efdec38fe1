//! Runtime settings for the planner UI.
//!
//! The page embeds them as JSON; every field is optional and falls back to
//! its default.

use crate::gesture::{GestureConfig, DEFAULT_THRESHOLD_PX};
use crate::progress::DEFAULT_STEP_INTERVAL_MS;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub log_level: String,
    /// Seed the planner with the built-in sample day
    pub load_sample_data: bool,
    pub gesture_threshold_px: f64,
    /// Step interval for goals that auto-advance
    pub default_step_interval_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            load_sample_data: true,
            gesture_threshold_px: DEFAULT_THRESHOLD_PX,
            default_step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.log_filter()?;
        Ok(config)
    }

    pub fn log_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn gesture(&self) -> GestureConfig {
        GestureConfig::with_threshold(self.gesture_threshold_px)
    }

    pub fn step_interval_ms(&self) -> u32 {
        self.default_step_interval_ms.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter().unwrap(), LevelFilter::Info);
        assert_eq!(config.gesture().threshold_px, DEFAULT_THRESHOLD_PX);
    }

    #[test]
    fn test_camel_case_fields() {
        let config = AppConfig::from_json(
            r#"{"logLevel": "debug", "loadSampleData": false, "gestureThresholdPx": 8, "defaultStepIntervalMs": 250}"#,
        )
        .unwrap();

        assert_eq!(config.log_filter().unwrap(), LevelFilter::Debug);
        assert!(!config.load_sample_data);
        assert_eq!(config.gesture().threshold_px, 8.0);
        assert_eq!(config.step_interval_ms(), 250);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(AppConfig::from_json("not json"), Err(ConfigError::Json(_))));

        let err = AppConfig::from_json(r#"{"logLevel": "loud"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Unknown log level 'loud'");

        // Nonsense thresholds fall back rather than fail
        let config = AppConfig::from_json(r#"{"gestureThresholdPx": -1, "defaultStepIntervalMs": 0}"#).unwrap();
        assert_eq!(config.gesture().threshold_px, DEFAULT_THRESHOLD_PX);
        assert_eq!(config.step_interval_ms(), 1);
    }
}
