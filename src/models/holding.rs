//! # models::holding
//!
//! Defines [`Holding`] (one line of the portfolio) and
//! [`NewHolding`], the unvalidated payload the view submits.
//!
//! A `Holding` only exists after [`NewHolding::validate`] has accepted the
//! input, so every stored holding has a positive average buy price and the
//! ROI formulas below never divide by zero.

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

// ─── NewHolding ───────────────────────────────────────────────────────────────

/// Raw form fields for a holding, as submitted by the add-holding dialog.
#[derive(Debug, Clone, Deserialize)]
pub struct NewHolding {
    pub symbol:        String,
    pub avg_buy_price: f64,
    /// Percent of the notional portfolio, `(0, 100]`.
    pub allocation:    f64,
    /// Free-text label such as `"8 months"`.
    pub holding_time:  String,
    pub target_price:  f64,
}

impl NewHolding {
    /// Checks every field and builds the stored [`Holding`].
    ///
    /// The symbol is upper-cased but not checked against the asset registry.
    pub fn validate(self) -> Result<Holding, DashboardError> {
        let symbol = self.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(DashboardError::Validation("Symbol is required".into()));
        }
        let holding_time = self.holding_time.trim().to_string();
        if holding_time.is_empty() {
            return Err(DashboardError::Validation("Holding time is required".into()));
        }
        if !is_positive(self.avg_buy_price) {
            return Err(DashboardError::Validation(
                "Average buy price must be a positive number".into(),
            ));
        }
        if !is_positive(self.target_price) {
            return Err(DashboardError::Validation(
                "Target price must be a positive number".into(),
            ));
        }
        if !(self.allocation.is_finite() && self.allocation > 0.0 && self.allocation <= 100.0) {
            return Err(DashboardError::Validation(
                "Allocation must be greater than 0 and at most 100 percent".into(),
            ));
        }

        Ok(Holding {
            symbol,
            avg_buy_price: self.avg_buy_price,
            allocation:    self.allocation,
            holding_time,
            target_price:  self.target_price,
        })
    }
}

pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// ─── Holding ──────────────────────────────────────────────────────────────────

/// A validated portfolio position. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol:        String,
    pub avg_buy_price: f64,
    pub allocation:    f64,
    pub holding_time:  String,
    pub target_price:  f64,
}

impl Holding {
    /// Weight of this holding in the notional portfolio, `allocation / 100`.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.allocation / 100.0
    }

    /// Return in percent at `current_price`.
    pub fn current_roi(&self, current_price: f64) -> f64 {
        (current_price - self.avg_buy_price) / self.avg_buy_price * 100.0
    }

    /// Return in percent if the target price is reached.
    pub fn target_roi(&self) -> f64 {
        (self.target_price - self.avg_buy_price) / self.avg_buy_price * 100.0
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
