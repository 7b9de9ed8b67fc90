use chrono::{DateTime, Utc};
use serde_json::Value;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::{broadcast, Mutex};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};
use validator::Validate;

use super::models::{MonitorError, PriceTable, RefreshOutcome, Tier};
use super::observer::PriceChangeObserver;
use crate::config::{load_config, MonitorConfig};
use crate::constants::prices;
use crate::error::GasStationError;
use crate::metrics::StationMetrics;
use crate::station::{FetchError, HttpStationFetcher, StationFetcher, StationReport};

/// Mutable state shared between the refresh task and callers
struct MonitorState {
    table: PriceTable,
    selected: Tier,
    optimization_enabled: bool,
    last_raw: Option<Value>,
    last_report: Option<StationReport>,
    last_updated: Option<DateTime<Utc>>,
}

/// Polls the gas station and serves the current tiered prices
pub struct PriceMonitor {
    config: MonitorConfig,
    fetcher: Arc<dyn StationFetcher>,
    state: RwLock<MonitorState>,
    observer: RwLock<Option<Arc<dyn PriceChangeObserver>>>,
    changes: broadcast::Sender<PriceTable>,
    started: AtomicBool,
    refresh_guard: Mutex<()>,
}

impl PriceMonitor {
    /// Create a new monitor reading the station through `fetcher`
    pub fn new(
        config: MonitorConfig,
        fetcher: Arc<dyn StationFetcher>,
    ) -> Result<Self, MonitorError> {
        config.validate()?;
        let selected = Tier::try_from(config.default_tier)?;
        let (changes, _) = broadcast::channel(prices::CHANGE_CHANNEL_CAPACITY);

        let state = MonitorState {
            table: PriceTable::default(),
            selected,
            optimization_enabled: config.optimization_enabled,
            last_raw: None,
            last_report: None,
            last_updated: None,
        };

        Ok(Self {
            config,
            fetcher,
            state: RwLock::new(state),
            observer: RwLock::new(None),
            changes,
            started: AtomicBool::new(false),
            refresh_guard: Mutex::new(()),
        })
    }

    /// Create a monitor that reads the configured station over HTTP
    pub fn from_config(config: MonitorConfig) -> Result<Self, GasStationError> {
        let fetcher = HttpStationFetcher::from_config(&config)?;
        Ok(Self::new(config, Arc::new(fetcher))?)
    }

    /// Create an HTTP-backed monitor from a YAML configuration file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self, GasStationError> {
        let config = load_config(path)?;
        Self::from_config(config)
    }

    /// Start polling: one immediate refresh, then one every configured interval.
    ///
    /// Only the first call has any effect and returns `true`. The polling task
    /// ends once the last `Arc` to the monitor is dropped.
    pub async fn start(self: &Arc<Self>, observer: Option<Arc<dyn PriceChangeObserver>>) -> bool {
        if self
            .started
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Price monitor already started");
            return false;
        }

        if let Some(observer) = observer {
            *self.observer.write().unwrap_or_else(PoisonError::into_inner) = Some(observer);
        }

        if !self.config.suppress_logs {
            info!(
                "Starting gas station monitor for {} with {} minute refresh interval",
                self.config.station_url, self.config.interval_minutes
            );
        }

        self.refresh().await;

        let weak = Arc::downgrade(self);
        let period = self.config.refresh_interval();
        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker.tick().await; // Skip first tick, the initial refresh already ran

            loop {
                ticker.tick().await;
                let Some(monitor) = weak.upgrade() else {
                    debug!("Price monitor dropped, stopping refresh loop");
                    break;
                };
                monitor.refresh().await;
            }
        });

        true
    }

    /// Run one refresh cycle against the station.
    ///
    /// Fetch failures leave every piece of state untouched. If a refresh is
    /// already in flight this returns [`RefreshOutcome::Skipped`] without fetching.
    pub async fn refresh(&self) -> RefreshOutcome {
        let outcome = match self.refresh_guard.try_lock() {
            Ok(_guard) => match self.fetch_report().await {
                Ok((raw, report)) => self.apply_report(raw, report),
                Err(e) => {
                    debug!("Skipping refresh, station fetch via {} failed: {}", self.fetcher.name(), e);
                    RefreshOutcome::FetchFailed
                }
            },
            Err(_) => {
                debug!("Refresh already in flight, skipping");
                RefreshOutcome::Skipped
            }
        };

        StationMetrics::record_refresh(outcome);
        outcome
    }

    async fn fetch_report(&self) -> Result<(Value, StationReport), FetchError> {
        let raw = self.fetcher.fetch_json(&self.config.station_url).await?;
        let report = StationReport::from_value(&raw)?;
        Ok((raw, report))
    }

    fn apply_report(&self, raw: Value, report: StationReport) -> RefreshOutcome {
        let changed = {
            let mut state = self.write_state();

            let mut candidate = PriceTable::from_report(&report);
            if state.optimization_enabled {
                candidate = candidate.optimized();
            }

            state.last_raw = Some(raw);
            state.last_report = Some(report);
            state.last_updated = Some(Utc::now());

            if candidate.same_prices(&state.table) {
                None
            } else {
                state.table = candidate;
                Some(candidate)
            }
        };

        let Some(table) = changed else {
            return RefreshOutcome::Unchanged;
        };

        if !self.config.suppress_logs {
            info!(
                "Gas prices updated: safe_low={} gwei, average={} gwei, fast={} gwei, fastest={} gwei",
                table[Tier::SafeLow].price_gwei,
                table[Tier::Average].price_gwei,
                table[Tier::Fast].price_gwei,
                table[Tier::Fastest].price_gwei
            );
        }
        StationMetrics::record_price_table(&table);

        // Clone out of the lock so observers may call back into the monitor
        let observer = self
            .observer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        // A panicking observer must not take the polling task down with it
        if let Some(observer) = observer {
            if catch_unwind(AssertUnwindSafe(|| observer.on_prices_changed(&table))).is_err() {
                warn!("Price change observer panicked, continuing to poll");
            }
        }

        // Sending only fails when nobody is subscribed
        let _ = self.changes.send(table);

        RefreshOutcome::Changed
    }

    /// Select the default tier by its ordinal (1 to 4). Returns `false` and
    /// leaves the selection untouched for anything else.
    pub fn select(&self, tier: u8) -> bool {
        match Tier::try_from(tier) {
            Ok(tier) => {
                self.select_tier(tier);
                true
            }
            Err(e) => {
                debug!("Rejected tier selection: {}", e);
                false
            }
        }
    }

    pub fn select_tier(&self, tier: Tier) {
        self.write_state().selected = tier;

        if !self.config.suppress_logs {
            info!("Selected gas price tier {}", tier);
        }
        StationMetrics::record_selected_tier(tier);
    }

    /// Move the selection to the next tier, wrapping from Fastest to SafeLow
    pub fn advance_tier(&self) -> Tier {
        let tier = {
            let mut state = self.write_state();
            state.selected = state.selected.next();
            state.selected
        };

        if !self.config.suppress_logs {
            info!("Advanced gas price tier to {}", tier);
        }
        StationMetrics::record_selected_tier(tier);
        tier
    }

    pub fn current_tier(&self) -> Tier {
        self.read_state().selected
    }

    /// Expected wait in minutes for the selected tier
    pub fn current_wait_minutes(&self) -> f64 {
        let state = self.read_state();
        state.table[state.selected].wait_minutes
    }

    /// Price in gwei for `tier`, or for the selected tier when `None`
    pub fn price_in_gwei(&self, tier: Option<u8>) -> Result<f64, MonitorError> {
        let state = self.read_state();
        let tier = match tier {
            Some(value) => Tier::try_from(value)?,
            None => state.selected,
        };
        Ok(state.table[tier].price_gwei)
    }

    /// Price in wei for `tier`, or for the selected tier when `None`
    pub fn price_in_wei(&self, tier: Option<u8>) -> Result<u128, MonitorError> {
        let gwei = self.price_in_gwei(tier)?;
        Ok(super::models::gwei_to_wei(gwei))
    }

    /// Snapshot of the full price table
    pub fn all_tiers(&self) -> PriceTable {
        self.read_state().table
    }

    /// Toggle the Fastest/Fast collapse. Applies from the next refresh on.
    pub fn set_optimization(&self, enabled: bool) {
        self.write_state().optimization_enabled = enabled;

        if !self.config.suppress_logs {
            info!("Gas price optimization enabled: {}", enabled);
        }
    }

    pub fn optimization_enabled(&self) -> bool {
        self.read_state().optimization_enabled
    }

    /// The last successfully fetched station document, verbatim
    pub fn last_raw_response(&self) -> Option<Value> {
        self.read_state().last_raw.clone()
    }

    /// Typed view of the last successfully fetched station document
    pub fn last_report(&self) -> Option<StationReport> {
        self.read_state().last_report.clone()
    }

    /// When the station was last read successfully
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.read_state().last_updated
    }

    /// Subscribe to price table changes
    pub fn subscribe(&self) -> broadcast::Receiver<PriceTable> {
        self.changes.subscribe()
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    fn read_state(&self) -> RwLockReadGuard<'_, MonitorState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, MonitorState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
