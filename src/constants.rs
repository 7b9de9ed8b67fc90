//! Application-wide constants
//!
//! This module contains the magic numbers and default values used throughout
//! the crate, making them easy to find and modify.

/// Station-related constants
pub mod station {
    /// Default gas station endpoint
    pub const DEFAULT_STATION_URL: &str = "https://ethgasstation.info/json/ethgasAPI.json";

    /// The station reports prices in tenths of a gwei
    pub const DECI_GWEI_PER_GWEI: f64 = 10.0;
}

/// Unit conversion constants
pub mod units {
    /// Number of wei in one gwei
    pub const WEI_PER_GWEI: f64 = 1e9;
}

/// Time-related constants
pub mod time {
    /// Default refresh interval (in minutes)
    pub const DEFAULT_REFRESH_INTERVAL_MINUTES: f64 = 3.0;

    /// Shortest accepted refresh interval (in milliseconds)
    pub const MIN_REFRESH_INTERVAL_MILLIS: u64 = 1;

    /// Default timeout for station requests (in seconds)
    pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Price table constants
pub mod prices {
    /// Number of speed tiers reported by the station
    pub const TIER_COUNT: usize = 4;

    /// Table served before the first successful refresh, as (gwei, wait minutes)
    /// from SafeLow to Fastest
    pub const DEFAULT_PRICE_TABLE: [(f64, f64); TIER_COUNT] =
        [(1.0, 30.0), (2.0, 5.0), (4.0, 2.0), (8.0, 0.5)];

    /// Default selected tier (Average)
    pub const DEFAULT_TIER: u8 = 2;

    /// Capacity of the price change broadcast channel
    pub const CHANGE_CHANNEL_CAPACITY: usize = 16;
}
