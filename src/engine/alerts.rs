//! # engine::alerts
//!
//! **Alert Registry**: ordered list of [`AlertRule`]s evaluated once per
//! tick against the [`AssetRegistry`].
//!
//! ## Evaluation (active rules only, in list order)
//! ```text
//! rule.symbol not in registry   → skip (no draw, no error)
//! price / above                 → fire if price ≥ threshold
//! price / below                 → fire if price ≤ threshold
//! volume / spike                → fire with probability 0.10
//! fire                          → notify("Alert Triggered", message)
//!                                 then active = false
//! ```
//! The volume check is a simulated detector: it never looks at volume data.

use tracing::{debug, info, warn};

use crate::engine::market::AssetRegistry;
use crate::engine::random::RandomSource;
use crate::error::DashboardError;
use crate::models::notification::ALERT_TRIGGERED;
use crate::models::{AlertCondition, AlertRule, NewAlert, Notification, NotificationSink};

/// Chance that a volume-spike rule fires on a single evaluation.
pub const VOLUME_SPIKE_PROBABILITY: f64 = 0.10;

#[derive(Debug, Clone, Default)]
pub struct AlertRegistry {
    rules: Vec<AlertRule>,
}

impl AlertRegistry {
    pub fn new(rules: Vec<AlertRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[AlertRule] {
        &self.rules
    }

    pub fn active_count(&self) -> usize {
        self.rules.iter().filter(|r| r.active).count()
    }

    /// Validates and appends an Active rule. The registry is untouched on error.
    pub fn add(&mut self, input: NewAlert) -> Result<&AlertRule, DashboardError> {
        let rule = input.validate().map_err(|e| {
            warn!(reason = %e, "alert rejected");
            e
        })?;
        debug!(symbol = %rule.symbol, kind = ?rule.kind, threshold = rule.threshold, "alert added");
        self.rules.push(rule);
        Ok(&self.rules[self.rules.len() - 1])
    }

    pub fn remove_at(&mut self, index: usize) -> Result<AlertRule, DashboardError> {
        self.check_index(index)?;
        let removed = self.rules.remove(index);
        debug!(index, symbol = %removed.symbol, "alert removed");
        Ok(removed)
    }

    /// Flips the active flag and returns the new value.
    pub fn toggle_at(&mut self, index: usize) -> Result<bool, DashboardError> {
        self.check_index(index)?;
        let rule = &mut self.rules[index];
        rule.active = !rule.active;
        debug!(index, active = rule.active, "alert toggled");
        Ok(rule.active)
    }

    fn check_index(&self, index: usize) -> Result<(), DashboardError> {
        if index >= self.rules.len() {
            return Err(DashboardError::IndexOutOfRange { index, len: self.rules.len() });
        }
        Ok(())
    }

    /// Runs every active rule once; triggered rules notify `sink` and go
    /// inactive, so none can fire twice in one pass.
    pub fn evaluate(
        &mut self,
        assets: &AssetRegistry,
        rng:    &mut impl RandomSource,
        sink:   &mut impl NotificationSink,
    ) {
        for rule in self.rules.iter_mut().filter(|r| r.active) {
            let Some(price) = assets.price_of(&rule.symbol) else {
                continue;
            };

            let triggered = match rule.condition {
                AlertCondition::Above => price >= rule.threshold,
                AlertCondition::Below => price <= rule.threshold,
                AlertCondition::Spike => rng.next_unit() < VOLUME_SPIKE_PROBABILITY,
            };

            if triggered {
                let message = rule.trigger_message();
                info!(symbol = %rule.symbol, price, threshold = rule.threshold, "🔔 {message}");
                sink.notify(Notification::new(ALERT_TRIGGERED, message));
                rule.active = false;
            }
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::random::ScriptedRandom;
    use crate::models::catalog::default_assets;
    use crate::models::AlertKind;

    fn assets_with_price(symbol: &str, price: f64) -> AssetRegistry {
        let mut records = default_assets();
        for r in records.iter_mut().filter(|r| r.symbol == symbol) {
            r.current_price = price;
        }
        AssetRegistry::new(records)
    }

    fn price_alert(symbol: &str, condition: AlertCondition, threshold: f64) -> NewAlert {
        NewAlert { kind: AlertKind::Price, symbol: symbol.into(), condition, threshold }
    }

    fn spike_alert(symbol: &str) -> NewAlert {
        NewAlert {
            kind:      AlertKind::Volume,
            symbol:    symbol.into(),
            condition: AlertCondition::Spike,
            threshold: 200.0,
        }
    }

    #[test]
    fn above_fires_once_at_threshold() {
        let assets = assets_with_price("BTC", 120_000.0);
        let mut alerts = AlertRegistry::default();
        alerts.add(price_alert("BTC", AlertCondition::Above, 120_000.0)).unwrap();

        let mut sink = Vec::new();
        let mut rng = ScriptedRandom::constant(0.99);
        alerts.evaluate(&assets, &mut rng, &mut sink);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].title, "Alert Triggered");
        assert_eq!(sink[0].message, "BTC has reached $120,000!");
        assert!(!alerts.rules()[0].active);

        alerts.evaluate(&assets, &mut rng, &mut sink);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn below_is_inclusive() {
        let mut rng = ScriptedRandom::constant(0.99);

        let mut alerts = AlertRegistry::default();
        alerts.add(price_alert("ADA", AlertCondition::Below, 100.0)).unwrap();
        let mut sink = Vec::new();
        alerts.evaluate(&assets_with_price("ADA", 100.01), &mut rng, &mut sink);
        assert!(sink.is_empty());
        assert!(alerts.rules()[0].active);

        alerts.evaluate(&assets_with_price("ADA", 100.0), &mut rng, &mut sink);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].message, "ADA has dropped below $100!");
        assert!(!alerts.rules()[0].active);
    }

    #[test]
    fn unknown_symbol_is_skipped_without_drawing() {
        let assets = assets_with_price("BTC", 1.0);
        let mut alerts = AlertRegistry::default();
        alerts.add(price_alert("XRP", AlertCondition::Below, 10.0)).unwrap();
        alerts.add(spike_alert("XRP")).unwrap();

        let mut sink = Vec::new();
        let mut rng = ScriptedRandom::constant(0.0);
        alerts.evaluate(&assets, &mut rng, &mut sink);
        assert!(sink.is_empty());
        assert_eq!(alerts.active_count(), 2);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn volume_spike_uses_ten_percent_draw() {
        let assets = AssetRegistry::new(default_assets());
        let mut alerts = AlertRegistry::default();
        alerts.add(spike_alert("ETH")).unwrap();

        let mut sink = Vec::new();
        alerts.evaluate(&assets, &mut ScriptedRandom::constant(0.10), &mut sink);
        assert!(sink.is_empty());

        alerts.evaluate(&assets, &mut ScriptedRandom::constant(0.0999), &mut sink);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].message, "ETH volume spike detected! +200% volume increase");
        assert!(!alerts.rules()[0].active);
    }

    #[test]
    fn inactive_rules_are_inert() {
        let assets = assets_with_price("BTC", 200_000.0);
        let mut alerts = AlertRegistry::default();
        alerts.add(price_alert("BTC", AlertCondition::Above, 1.0)).unwrap();
        alerts.add(spike_alert("ETH")).unwrap();
        alerts.toggle_at(0).unwrap();
        alerts.toggle_at(1).unwrap();

        let mut sink = Vec::new();
        let mut rng = ScriptedRandom::constant(0.0);
        alerts.evaluate(&assets, &mut rng, &mut sink);
        assert!(sink.is_empty());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut alerts = AlertRegistry::default();
        alerts.add(spike_alert("ETH")).unwrap();
        assert!(!alerts.toggle_at(0).unwrap());
        assert!(alerts.toggle_at(0).unwrap());
        assert!(alerts.rules()[0].active);
    }

    #[test]
    fn toggle_reactivates_triggered_rule() {
        let assets = assets_with_price("BTC", 130_000.0);
        let mut alerts = AlertRegistry::default();
        alerts.add(price_alert("BTC", AlertCondition::Above, 120_000.0)).unwrap();

        let mut sink = Vec::new();
        let mut rng = ScriptedRandom::constant(0.5);
        alerts.evaluate(&assets, &mut rng, &mut sink);
        alerts.toggle_at(0).unwrap();
        alerts.evaluate(&assets, &mut rng, &mut sink);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn index_errors_leave_registry_unchanged() {
        let mut alerts = AlertRegistry::default();
        alerts.add(spike_alert("ETH")).unwrap();
        assert!(matches!(
            alerts.toggle_at(1),
            Err(DashboardError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(alerts.remove_at(5).is_err());
        assert_eq!(alerts.rules().len(), 1);
        assert!(alerts.rules()[0].active);
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        let mut alerts = AlertRegistry::default();
        assert!(alerts.add(price_alert("BTC", AlertCondition::Above, 0.0)).is_err());
        assert!(alerts.rules().is_empty());
    }
}
