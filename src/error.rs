use thiserror::Error;

#[derive(Debug, Error)]
pub enum GasStationError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::parser::ConfigError),

    #[error("Station error: {0}")]
    Station(#[from] crate::station::FetchError),

    #[error("Monitor error: {0}")]
    Monitor(#[from] crate::gas_price::MonitorError),
}
