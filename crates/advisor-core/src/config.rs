//! Configuration for advisor-core
//!
//! Holds the fallback value used for each absent feature and the thresholds
//! each rule compares against. The built-in values reproduce the standard
//! rule set; a TOML or JSON file may override any of them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_ATTENDANCE_PERCENTAGE: f64 = 100.0;
pub const DEFAULT_STUDY_HOURS: f64 = 10.0;
pub const DEFAULT_SUBJECT_SCORE: f64 = 100.0;
pub const DEFAULT_INTERNET_ACCESS: bool = true;

pub const MIN_ATTENDANCE_PERCENTAGE: f64 = 75.0;
pub const MIN_STUDY_HOURS: f64 = 5.0;
pub const WEAK_SUBJECT_SCORE: f64 = 50.0;

/// Advisor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Values substituted for absent features
    pub defaults: FeatureDefaults,
    /// Rule thresholds
    pub thresholds: Thresholds,
}

/// Fallback values for absent features
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureDefaults {
    pub attendance_percentage: f64,
    pub study_hours: f64,
    /// Applies to every subject score
    pub subject_score: f64,
    pub internet_access: bool,
}

impl Default for FeatureDefaults {
    fn default() -> Self {
        Self {
            attendance_percentage: DEFAULT_ATTENDANCE_PERCENTAGE,
            study_hours: DEFAULT_STUDY_HOURS,
            subject_score: DEFAULT_SUBJECT_SCORE,
            internet_access: DEFAULT_INTERNET_ACCESS,
        }
    }
}

/// Rule thresholds. Each rule fires when its value is strictly below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub min_attendance_percentage: f64,
    pub min_study_hours: f64,
    pub weak_subject_score: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_attendance_percentage: MIN_ATTENDANCE_PERCENTAGE,
            min_study_hours: MIN_STUDY_HOURS,
            weak_subject_score: WEAK_SUBJECT_SCORE,
        }
    }
}

impl AdvisorConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load and validate a config file. `.json` files are read as JSON,
    /// anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&text)?,
            _ => Self::from_toml(&text)?,
        };
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded advisor config");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_percentage(
            "defaults.attendance_percentage",
            self.defaults.attendance_percentage,
        )?;
        check_percentage("defaults.subject_score", self.defaults.subject_score)?;
        check_percentage(
            "thresholds.min_attendance_percentage",
            self.thresholds.min_attendance_percentage,
        )?;
        check_percentage(
            "thresholds.weak_subject_score",
            self.thresholds.weak_subject_score,
        )?;
        check_hours("defaults.study_hours", self.defaults.study_hours)?;
        check_hours("thresholds.min_study_hours", self.thresholds.min_study_hours)?;
        Ok(())
    }
}

fn check_percentage(name: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ConfigError::OutOfRange(format!(
            "{name} must be between 0 and 100, got {value}"
        )));
    }
    Ok(())
}

fn check_hours(name: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::OutOfRange(format!(
            "{name} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}
