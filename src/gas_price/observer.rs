use super::models::PriceTable;

/// Receives the new price table whenever a refresh changes any tier price.
///
/// Implemented for any `Fn(&PriceTable)` closure, so hosts can pass a plain callback.
/// Observers run on the polling task; a panic is caught and logged, and polling
/// continues with the new table already stored.
pub trait PriceChangeObserver: Send + Sync {
    fn on_prices_changed(&self, table: &PriceTable);
}

impl<F> PriceChangeObserver for F
where
    F: Fn(&PriceTable) + Send + Sync,
{
    fn on_prices_changed(&self, table: &PriceTable) {
        self(table)
    }
}
