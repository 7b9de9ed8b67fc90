use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use crate::constants::{prices, station, units};
use crate::station::StationReport;

/// One of the four station speed tiers, ordered from cheapest to fastest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tier {
    SafeLow = 1,
    Average = 2,
    Fast = 3,
    Fastest = 4,
}

impl Tier {
    pub const ALL: [Tier; prices::TIER_COUNT] =
        [Tier::SafeLow, Tier::Average, Tier::Fast, Tier::Fastest];

    /// Ordinal value, 1 (SafeLow) to 4 (Fastest)
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Position of this tier in a price table
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// The next faster tier, wrapping from Fastest back to SafeLow
    pub fn next(self) -> Tier {
        match self {
            Tier::SafeLow => Tier::Average,
            Tier::Average => Tier::Fast,
            Tier::Fast => Tier::Fastest,
            Tier::Fastest => Tier::SafeLow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::SafeLow => "safe_low",
            Tier::Average => "average",
            Tier::Fast => "fast",
            Tier::Fastest => "fastest",
        }
    }
}

impl TryFrom<u8> for Tier {
    type Error = MonitorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Tier::SafeLow),
            2 => Ok(Tier::Average),
            3 => Ok(Tier::Fast),
            4 => Ok(Tier::Fastest),
            other => Err(MonitorError::InvalidTier(other)),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u8())
    }
}

/// Price and expected wait for a single tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Price in gwei
    pub price_gwei: f64,
    /// Expected confirmation wait in minutes
    pub wait_minutes: f64,
}

impl PriceEntry {
    pub fn new(price_gwei: f64, wait_minutes: f64) -> Self {
        Self {
            price_gwei,
            wait_minutes,
        }
    }

    /// Price in wei, rounded to the nearest wei
    pub fn price_wei(&self) -> u128 {
        gwei_to_wei(self.price_gwei)
    }
}

/// The four tier entries, SafeLow first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    entries: [PriceEntry; prices::TIER_COUNT],
}

impl PriceTable {
    pub fn new(entries: [PriceEntry; prices::TIER_COUNT]) -> Self {
        Self { entries }
    }

    /// Builds a table from a station report, converting deci-gwei prices to gwei
    pub fn from_report(report: &StationReport) -> Self {
        let entries = report.tiers().map(|(price, wait)| {
            PriceEntry::new(price / station::DECI_GWEI_PER_GWEI, wait)
        });
        Self { entries }
    }

    /// Replaces Fastest with Fast when both promise the same wait, so the
    /// table never charges more for an identical wait
    pub fn optimized(mut self) -> Self {
        let fast = self.entries[Tier::Fast.index()];
        if self.entries[Tier::Fastest.index()].wait_minutes == fast.wait_minutes {
            self.entries[Tier::Fastest.index()] = fast;
        }
        self
    }

    pub fn get(&self, tier: Tier) -> PriceEntry {
        self.entries[tier.index()]
    }

    pub fn entries(&self) -> &[PriceEntry; prices::TIER_COUNT] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, PriceEntry)> + '_ {
        Tier::ALL.iter().map(move |tier| (*tier, self.get(*tier)))
    }

    /// Whether every tier carries the same price as `other`; waits are ignored
    pub fn same_prices(&self, other: &PriceTable) -> bool {
        self.entries
            .iter()
            .zip(other.entries.iter())
            .all(|(a, b)| a.price_gwei == b.price_gwei)
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            entries: prices::DEFAULT_PRICE_TABLE.map(|(price, wait)| PriceEntry::new(price, wait)),
        }
    }
}

impl Index<Tier> for PriceTable {
    type Output = PriceEntry;

    fn index(&self, tier: Tier) -> &Self::Output {
        &self.entries[tier.index()]
    }
}

/// Result of a single refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Prices changed; the table was replaced and observers notified
    Changed,
    /// Prices matched the stored table
    Unchanged,
    /// The station could not be read; state left untouched
    FetchFailed,
    /// Another refresh was already in flight
    Skipped,
}

impl RefreshOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshOutcome::Changed => "changed",
            RefreshOutcome::Unchanged => "unchanged",
            RefreshOutcome::FetchFailed => "fetch_failed",
            RefreshOutcome::Skipped => "skipped",
        }
    }
}

/// Errors reported by the price monitor
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("Invalid tier {0}: expected 1 (SafeLow) to 4 (Fastest)")]
    InvalidTier(u8),

    #[error("Invalid monitor configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),
}

/// Converts a gwei amount to wei, rounded to the nearest wei
pub fn gwei_to_wei(gwei: f64) -> u128 {
    (gwei * units::WEI_PER_GWEI).round() as u128
}
