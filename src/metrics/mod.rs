pub mod station_metrics;

pub use station_metrics::StationMetrics;
