//! # engine::portfolio
//!
//! **Portfolio Ledger**: ordered list of [`Holding`]s with valuation derived
//! by joining against the [`AssetRegistry`].
//!
//! Removal is positional, so indices handed to the view go stale after every
//! mutation; the view must re-read `holdings()` before the next action.

use serde::Serialize;
use tracing::{debug, warn};

use crate::engine::market::AssetRegistry;
use crate::error::DashboardError;
use crate::models::{Holding, NewHolding};

// ─── Summary ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortfolioSummary {
    /// Σ current_price × allocation/100 over holdings with a known symbol.
    pub total_value:    f64,
    /// Σ avg_buy_price × allocation/100 over the same holdings.
    pub total_invested: f64,
    /// Percent; `0` when nothing is invested.
    pub total_roi:      f64,
    /// Number of holdings in the ledger, known symbol or not.
    pub count:          usize,
}

// ─── Ledger ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct PortfolioLedger {
    holdings: Vec<Holding>,
}

impl PortfolioLedger {
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self { holdings }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Validates and appends. The ledger is untouched on error.
    pub fn add(&mut self, input: NewHolding) -> Result<&Holding, DashboardError> {
        let holding = input.validate().map_err(|e| {
            warn!(reason = %e, "holding rejected");
            e
        })?;
        debug!(symbol = %holding.symbol, allocation = holding.allocation, "holding added");
        self.holdings.push(holding);
        Ok(&self.holdings[self.holdings.len() - 1])
    }

    /// Removes the holding at `index`, shifting later entries down.
    pub fn remove_at(&mut self, index: usize) -> Result<Holding, DashboardError> {
        if index >= self.holdings.len() {
            return Err(DashboardError::IndexOutOfRange { index, len: self.holdings.len() });
        }
        let removed = self.holdings.remove(index);
        debug!(index, symbol = %removed.symbol, "holding removed");
        Ok(removed)
    }

    pub fn summary(&self, assets: &AssetRegistry) -> PortfolioSummary {
        let (total_value, total_invested) = self
            .holdings
            .iter()
            .filter_map(|h| assets.price_of(&h.symbol).map(|price| (h, price)))
            .fold((0.0, 0.0), |(value, invested), (h, price)| {
                (value + price * h.weight(), invested + h.avg_buy_price * h.weight())
            });

        let total_roi = if total_invested > 0.0 {
            (total_value - total_invested) / total_invested * 100.0
        } else {
            0.0
        };

        PortfolioSummary {
            total_value,
            total_invested,
            total_roi,
            count: self.holdings.len(),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
