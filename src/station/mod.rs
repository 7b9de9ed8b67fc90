pub mod fetcher;
pub mod models;

pub use fetcher::{FetchError, HttpStationFetcher, StationFetcher};
pub use models::StationReport;
