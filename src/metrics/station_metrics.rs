use lazy_static::lazy_static;
use prometheus::{register_counter_vec, register_gauge, register_gauge_vec, CounterVec, Gauge, GaugeVec};
use tracing::debug;

use crate::gas_price::models::{PriceTable, RefreshOutcome, Tier};

lazy_static! {
    /// Current price per tier in gwei
    pub static ref TIER_PRICE_GWEI: GaugeVec = register_gauge_vec!(
        "gasstation_tier_price_gwei",
        "Current gas price per station tier in gwei",
        &["tier"]
    ).expect("Failed to create tier_price_gwei metric");

    /// Expected wait per tier in minutes
    pub static ref TIER_WAIT_MINUTES: GaugeVec = register_gauge_vec!(
        "gasstation_tier_wait_minutes",
        "Expected confirmation wait per station tier in minutes",
        &["tier"]
    ).expect("Failed to create tier_wait_minutes metric");

    /// Currently selected tier ordinal
    pub static ref SELECTED_TIER: Gauge = register_gauge!(
        "gasstation_selected_tier",
        "Currently selected gas price tier (1 = safe_low, 4 = fastest)"
    ).expect("Failed to create selected_tier metric");

    /// Refresh cycles by outcome
    pub static ref REFRESH_TOTAL: CounterVec = register_counter_vec!(
        "gasstation_refresh_total",
        "Total number of station refresh cycles",
        &["outcome"]
    ).expect("Failed to create refresh_total metric");
}

/// Station metrics collector
pub struct StationMetrics;

impl StationMetrics {
    /// Record every tier of a freshly stored price table
    pub fn record_price_table(table: &PriceTable) {
        for (tier, entry) in table.iter() {
            TIER_PRICE_GWEI
                .with_label_values(&[tier.name()])
                .set(entry.price_gwei);
            TIER_WAIT_MINUTES
                .with_label_values(&[tier.name()])
                .set(entry.wait_minutes);
        }

        debug!("Recorded price table metrics");
    }

    pub fn record_selected_tier(tier: Tier) {
        SELECTED_TIER.set(f64::from(tier.as_u8()));
    }

    pub fn record_refresh(outcome: RefreshOutcome) {
        REFRESH_TOTAL.with_label_values(&[outcome.as_str()]).inc();
    }
}
