//! # dashboard
//!
//! [`Dashboard`] is the single application-state object. Owns the asset
//! registry, portfolio ledger, alert registry, static market metrics and the
//! currently selected symbol.
//!
//! Everything here is synchronous and presentation-free. Callers (the tick
//! driver and the HTTP handlers in `state`) hold an exclusive lock around each
//! call so a tick and a user action never interleave.

use serde::Serialize;
use tracing::debug;

use crate::engine::{
    alerts::AlertRegistry,
    market::AssetRegistry,
    portfolio::{PortfolioLedger, PortfolioSummary},
    random::RandomSource,
};
use crate::error::DashboardError;
use crate::models::{
    catalog, AlertRule, AssetRecord, Holding, MarketMetrics, NewAlert, NewHolding,
    NotificationSink,
};

/// What one tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub assets_updated:   usize,
    pub alerts_triggered: usize,
    pub alerts_active:    usize,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    assets:         AssetRegistry,
    portfolio:      PortfolioLedger,
    alerts:         AlertRegistry,
    metrics:        MarketMetrics,
    current_symbol: String,
}

impl Dashboard {
    /// Builds a dashboard. The selected symbol starts on the first asset.
    pub fn new(
        assets:    AssetRegistry,
        portfolio: PortfolioLedger,
        alerts:    AlertRegistry,
        metrics:   MarketMetrics,
    ) -> Self {
        let current_symbol = assets
            .list_all()
            .first()
            .map(|a| a.symbol.clone())
            .unwrap_or_default();
        Self { assets, portfolio, alerts, metrics, current_symbol }
    }

    /// The three built-in assets with the sample portfolio and alerts.
    pub fn with_sample_data() -> Self {
        Self::new(
            AssetRegistry::new(catalog::default_assets()),
            PortfolioLedger::new(catalog::sample_holdings()),
            AlertRegistry::new(catalog::sample_alerts()),
            MarketMetrics::default(),
        )
    }

    // ── Inbound ───────────────────────────────────────────────────────────────

    pub fn add_holding(&mut self, input: NewHolding) -> Result<&Holding, DashboardError> {
        self.portfolio.add(input)
    }

    pub fn remove_holding(&mut self, index: usize) -> Result<Holding, DashboardError> {
        self.portfolio.remove_at(index)
    }

    pub fn add_alert(&mut self, input: NewAlert) -> Result<&AlertRule, DashboardError> {
        self.alerts.add(input)
    }

    pub fn remove_alert(&mut self, index: usize) -> Result<AlertRule, DashboardError> {
        self.alerts.remove_at(index)
    }

    pub fn toggle_alert(&mut self, index: usize) -> Result<bool, DashboardError> {
        self.alerts.toggle_at(index)
    }

    /// Selects the symbol used by the single-asset views (case-insensitive).
    pub fn select_symbol(&mut self, symbol: &str) -> Result<&str, DashboardError> {
        let found = self
            .assets
            .find(symbol)
            .map(|a| a.symbol.clone())
            .ok_or_else(|| DashboardError::NotFound(self.unknown_symbol_message()))?;
        debug!(symbol = %found, "symbol selected");
        self.current_symbol = found;
        Ok(&self.current_symbol)
    }

    // ── Outbound ──────────────────────────────────────────────────────────────

    pub fn portfolio_summary(&self) -> PortfolioSummary {
        self.portfolio.summary(&self.assets)
    }

    pub fn holdings(&self) -> &[Holding] {
        self.portfolio.holdings()
    }

    pub fn alerts(&self) -> &[AlertRule] {
        self.alerts.rules()
    }

    pub fn active_alert_count(&self) -> usize {
        self.alerts.active_count()
    }

    pub fn asset(&self, symbol: &str) -> Option<&AssetRecord> {
        self.assets.get(symbol)
    }

    /// Case-insensitive lookup used by the research panel.
    pub fn research(&self, symbol: &str) -> Result<&AssetRecord, DashboardError> {
        self.assets
            .find(symbol)
            .ok_or_else(|| DashboardError::NotFound(self.unknown_symbol_message()))
    }

    pub fn all_assets(&self) -> &[AssetRecord] {
        self.assets.list_all()
    }

    pub fn market_metrics(&self) -> MarketMetrics {
        self.metrics
    }

    pub fn current_symbol(&self) -> &str {
        &self.current_symbol
    }

    pub fn current_asset(&self) -> Option<&AssetRecord> {
        self.assets.get(&self.current_symbol)
    }

    // ── Simulation ────────────────────────────────────────────────────────────

    /// Runs the alert check alone, as done once at startup.
    pub fn check_alerts(
        &mut self,
        rng:  &mut impl RandomSource,
        sink: &mut impl NotificationSink,
    ) -> usize {
        let before = self.alerts.active_count();
        self.alerts.evaluate(&self.assets, rng, sink);
        before - self.alerts.active_count()
    }

    /// One simulation step: move prices, then evaluate alerts.
    pub fn tick(
        &mut self,
        rng:  &mut impl RandomSource,
        sink: &mut impl NotificationSink,
    ) -> TickReport {
        self.assets.apply_periodic_update(rng);
        let alerts_triggered = self.check_alerts(rng, sink);

        TickReport {
            assets_updated: self.assets.list_all().len(),
            alerts_triggered,
            alerts_active: self.alerts.active_count(),
        }
    }

    fn unknown_symbol_message(&self) -> String {
        format!(
            "Cryptocurrency not found. Available symbols: {}",
            self.assets.symbols().join(", ")
        )
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
