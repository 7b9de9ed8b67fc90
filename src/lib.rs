//! Gas station client: polls a tiered gas price estimator and serves the
//! current SafeLow / Average / Fast / Fastest prices.

pub mod config;
pub mod constants;
pub mod error;
pub mod gas_price;
pub mod logging;
pub mod metrics;
pub mod station;

#[cfg(test)]
pub mod test_utils;

pub use config::MonitorConfig;
pub use error::GasStationError;
pub use gas_price::{
    MonitorError, PriceChangeObserver, PriceEntry, PriceMonitor, PriceTable, RefreshOutcome, Tier,
};
pub use station::{FetchError, HttpStationFetcher, StationFetcher, StationReport};
