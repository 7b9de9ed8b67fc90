pub mod models;
pub mod monitor;
pub mod observer;


pub use models::{MonitorError, PriceEntry, PriceTable, RefreshOutcome, Tier};
pub use monitor::PriceMonitor;
pub use observer::PriceChangeObserver;
