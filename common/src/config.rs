//! Recognition settings: debounce timing and the confidence gate.
//!
//! Settings can be built in code, or loaded from TOML:
//!
//! ```toml
//! minimumInterval = 0.5
//! displayDuration = 2.0
//! confidenceThreshold = 0.3
//! ```
//!
//! Durations are seconds. Omitted keys keep their defaults.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_MINIMUM_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_secs(2);
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field} must be a non-negative number of seconds, got {value}")]
    InvalidSeconds { field: &'static str, value: f64 },
    #[error("displayDuration must be greater than zero")]
    ZeroDisplayDuration,
    #[error("confidenceThreshold must be within [0, 1), got {0}")]
    ThresholdOutOfRange(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecognitionConfig {
    /// Minimum time between two accepted classifications while a label is
    /// showing. Anything arriving sooner is ignored.
    pub minimum_interval: Duration,
    /// How long an accepted label stays visible without being refreshed.
    pub display_duration: Duration,
    /// Landmarks with confidence at or below this value are treated as absent.
    pub confidence_threshold: f64,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            minimum_interval: DEFAULT_MINIMUM_INTERVAL,
            display_duration: DEFAULT_DISPLAY_DURATION,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawConfig {
    minimum_interval: Option<f64>,
    display_duration: Option<f64>,
    confidence_threshold: Option<f64>,
}

impl RecognitionConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(secs) = raw.minimum_interval {
            config.minimum_interval = seconds("minimumInterval", secs)?;
        }
        if let Some(secs) = raw.display_duration {
            config.display_duration = seconds("displayDuration", secs)?;
        }
        if let Some(threshold) = raw.confidence_threshold {
            config.confidence_threshold = threshold;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_minimum_interval(mut self, interval: Duration) -> Self {
        self.minimum_interval = interval;
        self
    }

    pub fn with_display_duration(mut self, duration: Duration) -> Self {
        self.display_duration = duration;
        self
    }

    pub fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// A zero display duration would make a label expire on the tick that shows it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_duration.is_zero() {
            return Err(ConfigError::ZeroDisplayDuration);
        }
        let threshold = self.confidence_threshold;
        if !threshold.is_finite() || !(0.0..1.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }
        Ok(())
    }
}

/// Converts seconds to a [`Duration`], rejecting negative and non-finite values.
pub fn seconds(field: &'static str, value: f64) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(value).map_err(|_| ConfigError::InvalidSeconds { field, value })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
