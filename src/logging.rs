use tracing::debug;

/// Installs the default fmt subscriber for hosts that don't bring their own.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    if tracing_subscriber::fmt::try_init().is_err() {
        debug!("Global tracing subscriber already installed");
    }
}
