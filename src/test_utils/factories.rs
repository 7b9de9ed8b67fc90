//! Factories for station documents and monitor configurations

use serde_json::{json, Value};

use crate::config::MonitorConfig;

/// Station document with the given deci-gwei prices and waits, SafeLow first
pub fn station_json(prices: [f64; 4], waits: [f64; 4]) -> Value {
    json!({
        "safeLow": prices[0],
        "average": prices[1],
        "fast": prices[2],
        "fastest": prices[3],
        "safeLowWait": waits[0],
        "avgWait": waits[1],
        "fastWait": waits[2],
        "fastestWait": waits[3],
        "block_time": 13.2,
        "blockNum": 10_000_000,
        "speed": 0.91,
        "gasPriceRange": { "4": 180.5, "10": 15.0, "80": 0.5 }
    })
}

/// A realistic document where Fast and Fastest promise the same wait
pub fn typical_station_json() -> Value {
    station_json([10.0, 40.0, 80.0, 350.0], [15.0, 3.0, 0.5, 0.5])
}

/// Quiet configuration with a long interval, so tests drive refreshes themselves
pub fn test_config() -> MonitorConfig {
    MonitorConfig {
        station_url: "http://station.test/json/ethgasAPI.json".to_string(),
        interval_minutes: 60.0,
        suppress_logs: true,
        ..Default::default()
    }
}
