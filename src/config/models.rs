use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::{Validate, ValidationError};

use crate::constants::{prices, station, time};

/// Configuration for a gas station price monitor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MonitorConfig {
    /// Station endpoint returning the tiered price JSON
    #[serde(default = "default_station_url")]
    #[validate(url)]
    pub station_url: String,

    /// Minutes between refreshes (default: 3)
    #[serde(default = "default_interval_minutes")]
    #[validate(custom = "validate_interval_minutes")]
    pub interval_minutes: f64,

    /// Timeout for a single station request in seconds (default: 30)
    #[serde(default = "default_request_timeout_secs")]
    #[validate(range(min = 1, max = 300))]
    pub request_timeout_secs: u64,

    /// Collapse Fastest onto Fast when both report the same wait (default: true)
    #[serde(default = "default_true")]
    pub optimization_enabled: bool,

    /// Silence informational log lines about price and selection changes
    #[serde(default)]
    pub suppress_logs: bool,

    /// Tier selected before any explicit selection, 1 (SafeLow) to 4 (Fastest)
    #[serde(default = "default_tier")]
    #[validate(range(min = 1, max = 4))]
    pub default_tier: u8,
}

impl MonitorConfig {
    /// Refresh interval as a duration
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval_minutes * 60.0)
    }

    /// Station request timeout as a duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            station_url: default_station_url(),
            interval_minutes: default_interval_minutes(),
            request_timeout_secs: default_request_timeout_secs(),
            optimization_enabled: true,
            suppress_logs: false,
            default_tier: default_tier(),
        }
    }
}

fn default_station_url() -> String {
    station::DEFAULT_STATION_URL.to_string()
}

fn default_interval_minutes() -> f64 {
    time::DEFAULT_REFRESH_INTERVAL_MINUTES
}

fn default_request_timeout_secs() -> u64 {
    time::HTTP_REQUEST_TIMEOUT_SECS
}

fn default_tier() -> u8 {
    prices::DEFAULT_TIER
}

fn default_true() -> bool {
    true
}

/// Validates that the refresh interval is a finite number of minutes that
/// converts to a non-zero timer period
fn validate_interval_minutes(minutes: f64) -> Result<(), ValidationError> {
    // Duration::from_secs_f64 panics on values it cannot represent
    if !minutes.is_finite() || minutes <= 0.0 || minutes * 60.0 > u32::MAX as f64 {
        return Err(ValidationError::new("interval_minutes must be positive"));
    }
    // tokio::time::interval panics on a zero period
    let period = Duration::from_secs_f64(minutes * 60.0);
    if period < Duration::from_millis(time::MIN_REFRESH_INTERVAL_MILLIS) {
        return Err(ValidationError::new("interval_minutes is too short"));
    }
    Ok(())
}
