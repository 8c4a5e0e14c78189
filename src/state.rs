//! # state
//!
//! [`AppState`] holds the one [`Dashboard`] behind an async `RwLock`, the
//! broadcast channel views subscribe to, and a tick counter.
//!
//! Every mutation (tick or user action) runs under a single write guard, so it
//! completes before the next one starts. Events are broadcast after the guard
//! is released.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};
use tracing::debug;

use crate::config::DashboardConfig;
use crate::dashboard::{Dashboard, TickReport};
use crate::engine::random::RandomSource;
use crate::error::DashboardError;
use crate::events::DashboardEvent;
use crate::models::notification::SUCCESS;
use crate::models::{AlertRule, Holding, NewAlert, NewHolding, Notification};

// ─── AppState ─────────────────────────────────────────────────────────────────

pub struct AppState {
    pub dashboard:    RwLock<Dashboard>,
    /// Pre-serialised `DashboardEvent` JSON for WebSocket subscribers.
    pub broadcast_tx: broadcast::Sender<String>,
    pub tick_count:   AtomicU64,
    pub config:       DashboardConfig,
}

impl AppState {
    pub fn new(dashboard: Dashboard, config: DashboardConfig) -> Self {
        let (broadcast_tx, _) = broadcast::channel(config.channel_capacity);
        Self {
            dashboard: RwLock::new(dashboard),
            broadcast_tx,
            tick_count: AtomicU64::new(0),
            config,
        }
    }

    // ── Broadcast ─────────────────────────────────────────────────────────────

    /// Sends to every subscriber. Having none is fine (headless mode).
    pub fn broadcast(&self, event: &DashboardEvent) {
        let _ = self.broadcast_tx.send(event.to_json());
    }

    pub fn notify(&self, notification: Notification) {
        self.broadcast(&DashboardEvent::Notification { notification });
    }

    pub fn ticks(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    // ── Simulation ────────────────────────────────────────────────────────────

    /// One tick: walk prices, check alerts, then tell views to refresh.
    pub async fn run_tick<R: RandomSource + Send>(&self, rng: &mut R) -> TickReport {
        let mut raised: Vec<Notification> = Vec::new();
        let report = {
            let mut dash = self.dashboard.write().await;
            dash.tick(rng, &mut raised)
        };
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;

        debug!(
            tick,
            triggered = report.alerts_triggered,
            active    = report.alerts_active,
            "tick complete"
        );

        for notification in raised {
            self.notify(notification);
        }
        self.broadcast(&DashboardEvent::Tick { tick, report });
        report
    }

    /// Alert check without a price move; run once at startup.
    pub async fn check_alerts<R: RandomSource + Send>(&self, rng: &mut R) -> usize {
        let mut raised: Vec<Notification> = Vec::new();
        let (triggered, total, active) = {
            let mut dash = self.dashboard.write().await;
            let triggered = dash.check_alerts(rng, &mut raised);
            (triggered, dash.alerts().len(), dash.active_alert_count())
        };
        for notification in raised {
            self.notify(notification);
        }
        if triggered > 0 {
            self.broadcast(&DashboardEvent::AlertsChanged { total, active });
        }
        triggered
    }

    // ── User actions ──────────────────────────────────────────────────────────

    pub async fn add_holding(&self, input: NewHolding) -> Result<Holding, DashboardError> {
        let (holding, count) = {
            let mut dash = self.dashboard.write().await;
            let holding = dash.add_holding(input)?.clone();
            (holding, dash.holdings().len())
        };
        self.broadcast(&DashboardEvent::PortfolioChanged { count });
        self.notify(Notification::new(SUCCESS, "Holding added to portfolio successfully"));
        Ok(holding)
    }

    pub async fn remove_holding(&self, index: usize) -> Result<Holding, DashboardError> {
        let (removed, count) = {
            let mut dash = self.dashboard.write().await;
            let removed = dash.remove_holding(index)?;
            (removed, dash.holdings().len())
        };
        self.broadcast(&DashboardEvent::PortfolioChanged { count });
        self.notify(Notification::new(SUCCESS, "Holding removed from portfolio"));
        Ok(removed)
    }

    pub async fn add_alert(&self, input: NewAlert) -> Result<AlertRule, DashboardError> {
        let (rule, total, active) = {
            let mut dash = self.dashboard.write().await;
            let rule = dash.add_alert(input)?.clone();
            (rule, dash.alerts().len(), dash.active_alert_count())
        };
        self.broadcast(&DashboardEvent::AlertsChanged { total, active });
        self.notify(Notification::new(SUCCESS, "Alert created successfully"));
        Ok(rule)
    }

    pub async fn remove_alert(&self, index: usize) -> Result<AlertRule, DashboardError> {
        let (rule, total, active) = {
            let mut dash = self.dashboard.write().await;
            let rule = dash.remove_alert(index)?;
            (rule, dash.alerts().len(), dash.active_alert_count())
        };
        self.broadcast(&DashboardEvent::AlertsChanged { total, active });
        Ok(rule)
    }

    pub async fn toggle_alert(&self, index: usize) -> Result<bool, DashboardError> {
        let (now_active, total, active) = {
            let mut dash = self.dashboard.write().await;
            let now_active = dash.toggle_alert(index)?;
            (now_active, dash.alerts().len(), dash.active_alert_count())
        };
        self.broadcast(&DashboardEvent::AlertsChanged { total, active });
        Ok(now_active)
    }

    pub async fn select_symbol(&self, symbol: &str) -> Result<String, DashboardError> {
        let selected = {
            let mut dash = self.dashboard.write().await;
            dash.select_symbol(symbol)?.to_string()
        };
        self.broadcast(&DashboardEvent::SymbolSelected { symbol: selected.clone() });
        Ok(selected)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Dashboard::default(), DashboardConfig::default())
    }
}

/// Convenience type alias
pub type SharedState = Arc<AppState>;

pub fn build_state(config: DashboardConfig) -> SharedState {
    Arc::new(AppState::new(Dashboard::with_sample_data(), config))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
