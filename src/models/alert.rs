//! # models::alert
//!
//! Defines [`AlertRule`], a user threshold watched by the periodic alert
//! check, plus [`NewAlert`], the payload the create-alert dialog submits.
//!
//! ## State machine
//! ```text
//!            trigger / toggle
//!   Active ───────────────────▶ Inactive
//!     ▲                             │
//!     └──────────── toggle ─────────┘
//! ```
//! Inactive rules are never evaluated.

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::format::group_thousands;
use crate::models::holding::is_positive;

// ─── AlertKind / AlertCondition ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Price,
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCondition {
    /// Price at or above the threshold.
    Above,
    /// Price at or below the threshold.
    Below,
    /// Volume spike (simulated).
    Spike,
}

impl AlertCondition {
    /// Whether this condition can be used with `kind`.
    pub fn applies_to(self, kind: AlertKind) -> bool {
        matches!(
            (kind, self),
            (AlertKind::Price, AlertCondition::Above)
                | (AlertKind::Price, AlertCondition::Below)
                | (AlertKind::Volume, AlertCondition::Spike)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlertCondition::Above => "above",
            AlertCondition::Below => "below",
            AlertCondition::Spike => "spike",
        }
    }
}

// ─── NewAlert ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct NewAlert {
    pub kind:      AlertKind,
    pub symbol:    String,
    pub condition: AlertCondition,
    /// Price in currency units, or spike size in percent for volume alerts.
    pub threshold: f64,
}

impl NewAlert {
    /// Builds an Active [`AlertRule`] or explains why the input is rejected.
    pub fn validate(self) -> Result<AlertRule, DashboardError> {
        let symbol = self.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(DashboardError::Validation("Symbol is required".into()));
        }
        if !is_positive(self.threshold) {
            return Err(DashboardError::Validation(
                "Please enter a valid target value".into(),
            ));
        }
        if !self.condition.applies_to(self.kind) {
            return Err(DashboardError::Validation(format!(
                "Condition '{}' is not valid for a {:?} alert",
                self.condition.as_str(),
                self.kind,
            )));
        }

        Ok(AlertRule {
            kind:      self.kind,
            symbol,
            condition: self.condition,
            threshold: self.threshold,
            active:    true,
        })
    }
}

// ─── AlertRule ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    pub kind:      AlertKind,
    pub symbol:    String,
    pub condition: AlertCondition,
    pub threshold: f64,
    pub active:    bool,
}

impl AlertRule {
    /// Body of the notification raised when this rule fires.
    pub fn trigger_message(&self) -> String {
        match self.condition {
            AlertCondition::Above => format!(
                "{} has reached ${}!",
                self.symbol,
                group_thousands(self.threshold)
            ),
            AlertCondition::Below => format!(
                "{} has dropped below ${}!",
                self.symbol,
                group_thousands(self.threshold)
            ),
            AlertCondition::Spike => format!(
                "{} volume spike detected! +{}% volume increase",
                self.symbol, self.threshold
            ),
        }
    }

    /// One-line summary for the alert list, e.g. `"BTC above $120,000"`.
    pub fn describe(&self) -> String {
        match self.kind {
            AlertKind::Price => format!(
                "{} {} ${}",
                self.symbol,
                self.condition.as_str(),
                group_thousands(self.threshold)
            ),
            AlertKind::Volume => format!("{} volume spike {}%", self.symbol, self.threshold),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(kind: AlertKind, condition: AlertCondition, threshold: f64) -> AlertRule {
        NewAlert { kind, symbol: "btc".into(), condition, threshold }
            .validate()
            .unwrap()
    }

    #[test]
    fn new_rules_start_active() {
        let r = rule(AlertKind::Price, AlertCondition::Above, 120_000.0);
        assert!(r.active);
        assert_eq!(r.symbol, "BTC");
    }

    #[test]
    fn rejects_bad_thresholds() {
        for threshold in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let input = NewAlert {
                kind:      AlertKind::Price,
                symbol:    "BTC".into(),
                condition: AlertCondition::Below,
                threshold,
            };
            assert!(matches!(input.validate(), Err(DashboardError::Validation(_))));
        }
    }

    #[test]
    fn rejects_condition_kind_mismatch() {
        let input = NewAlert {
            kind:      AlertKind::Volume,
            symbol:    "ETH".into(),
            condition: AlertCondition::Above,
            threshold: 200.0,
        };
        assert!(input.validate().is_err());

        let input = NewAlert {
            kind:      AlertKind::Price,
            symbol:    "ETH".into(),
            condition: AlertCondition::Spike,
            threshold: 200.0,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn trigger_messages() {
        assert_eq!(
            rule(AlertKind::Price, AlertCondition::Above, 120_000.0).trigger_message(),
            "BTC has reached $120,000!"
        );
        assert_eq!(
            rule(AlertKind::Price, AlertCondition::Below, 1.45).trigger_message(),
            "BTC has dropped below $1.45!"
        );
        assert_eq!(
            rule(AlertKind::Volume, AlertCondition::Spike, 200.0).trigger_message(),
            "BTC volume spike detected! +200% volume increase"
        );
    }

    #[test]
    fn trigger_messages_keep_every_digit_of_huge_thresholds() {
        assert_eq!(
            rule(AlertKind::Price, AlertCondition::Above, 1e20).trigger_message(),
            "BTC has reached $100,000,000,000,000,000,000!"
        );
        assert_eq!(
            rule(AlertKind::Price, AlertCondition::Below, 1e17).describe(),
            "BTC below $100,000,000,000,000,000"
        );
    }

    #[test]
    fn fractional_spike_threshold_in_message() {
        assert_eq!(
            rule(AlertKind::Volume, AlertCondition::Spike, 150.5).trigger_message(),
            "BTC volume spike detected! +150.5% volume increase"
        );
    }

    #[test]
    fn descriptions() {
        assert_eq!(
            rule(AlertKind::Price, AlertCondition::Above, 120_000.0).describe(),
            "BTC above $120,000"
        );
        assert_eq!(
            rule(AlertKind::Volume, AlertCondition::Spike, 150.5).describe(),
            "BTC volume spike 150.5%"
        );
    }

    #[test]
    fn deserializes_lowercase_enums() {
        let input: NewAlert = serde_json::from_str(
            r#"{"kind":"volume","symbol":"eth","condition":"spike","threshold":200}"#,
        )
        .unwrap();
        assert_eq!(input.kind, AlertKind::Volume);
        assert_eq!(input.condition, AlertCondition::Spike);
    }
}
