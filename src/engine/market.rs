//! # engine::market
//!
//! **Asset Registry**: fixed set of [`AssetRecord`]s keyed by ticker, plus
//! the random-walk update that makes the mock prices move.
//!
//! ## Update rule (per record, per tick)
//! ```text
//! delta          = U(-0.01, +0.01)
//! current_price *= 1 + delta
//! change_24h    += delta × 100        (cumulative, no baseline)
//! rsi            = clamp(rsi + U(-1, +1), 0, 100)
//! ```

use tracing::debug;

use crate::engine::random::RandomSource;
use crate::models::AssetRecord;

/// Max relative price move per tick (±1 %).
const PRICE_STEP: f64 = 0.01;
/// Max RSI move per tick (±1 point).
const RSI_STEP: f64 = 1.0;

#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    /// Insertion order is display order.
    records: Vec<AssetRecord>,
}

impl AssetRegistry {
    /// Builds the registry. A repeated symbol keeps its first record.
    pub fn new(records: Vec<AssetRecord>) -> Self {
        let mut unique: Vec<AssetRecord> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|r| r.symbol == record.symbol) {
                debug!(symbol = %record.symbol, "duplicate asset ignored");
                continue;
            }
            unique.push(record);
        }
        Self { records: unique }
    }

    pub fn get(&self, symbol: &str) -> Option<&AssetRecord> {
        self.records.iter().find(|r| r.symbol == symbol)
    }

    /// Exact lookup first, then a case-insensitive one.
    pub fn find(&self, symbol: &str) -> Option<&AssetRecord> {
        self.get(symbol)
            .or_else(|| self.records.iter().find(|r| r.symbol.eq_ignore_ascii_case(symbol.trim())))
    }

    /// Current price for `symbol`, or `None` on a lookup miss.
    #[inline]
    pub fn price_of(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).map(|r| r.current_price)
    }

    pub fn list_all(&self) -> &[AssetRecord] {
        &self.records
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.symbol.as_str()).collect()
    }

    /// Applies one step of the random walk to every record.
    pub fn apply_periodic_update(&mut self, rng: &mut impl RandomSource) {
        for record in &mut self.records {
            let delta = rng.symmetric(PRICE_STEP);
            record.current_price *= 1.0 + delta;
            record.change_24h += delta * 100.0;

            record.rsi = (record.rsi + rng.symmetric(RSI_STEP)).clamp(0.0, 100.0);
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::random::ScriptedRandom;
    use crate::models::catalog::default_assets;
    use rand::{rngs::StdRng, SeedableRng};

    fn registry() -> AssetRegistry {
        AssetRegistry::new(default_assets())
    }

    #[test]
    fn lookup_and_order() {
        let reg = registry();
        assert_eq!(reg.symbols(), vec!["BTC", "ETH", "ADA"]);
        assert_eq!(reg.price_of("ETH"), Some(4_150.0));
        assert!(reg.get("DOGE").is_none());
        assert!(reg.get("btc").is_none());
        assert_eq!(reg.find(" btc ").map(|r| r.name.as_str()), Some("Bitcoin"));
    }

    #[test]
    fn duplicate_symbols_keep_first() {
        let mut records = default_assets();
        let mut dup = records[0].clone();
        dup.current_price = 1.0;
        records.push(dup);
        let reg = AssetRegistry::new(records);
        assert_eq!(reg.list_all().len(), 3);
        assert_eq!(reg.price_of("BTC"), Some(116_750.0));
    }

    #[test]
    fn max_up_move_applies_one_percent() {
        let mut reg = registry();
        // price draw → +1 %, rsi draw → +1 (draw 1.0 is the open upper bound)
        let mut rng = ScriptedRandom::constant(1.0);
        reg.apply_periodic_update(&mut rng);

        let btc = reg.get("BTC").unwrap();
        assert!((btc.current_price - 116_750.0 * 1.01).abs() < 1e-6);
        assert!((btc.change_24h - (-2.3 + 1.0)).abs() < 1e-9);
        assert!((btc.rsi - 46.2).abs() < 1e-9);
        assert_eq!(rng.consumed(), 6);
    }

    #[test]
    fn change_accumulates_across_ticks() {
        let mut reg = registry();
        let mut rng = ScriptedRandom::constant(0.25); // delta = -0.5 %
        reg.apply_periodic_update(&mut rng);
        reg.apply_periodic_update(&mut rng);

        let eth = reg.get("ETH").unwrap();
        assert!((eth.change_24h - (1.8 - 1.0)).abs() < 1e-9);
        assert!((eth.current_price - 4_150.0 * 0.995 * 0.995).abs() < 1e-9);
    }

    #[test]
    fn rsi_is_clamped() {
        let mut records = default_assets();
        records[0].rsi = 99.8;
        records[1].rsi = 0.3;
        let mut reg = AssetRegistry::new(records);

        reg.apply_periodic_update(&mut ScriptedRandom::new(&[0.5, 1.0, 0.5, 0.0, 0.5, 0.5]));
        assert_eq!(reg.get("BTC").unwrap().rsi, 100.0);
        assert_eq!(reg.get("ETH").unwrap().rsi, 0.0);
    }

    #[test]
    fn rsi_stays_bounded_over_many_ticks() {
        for seed in 0..16 {
            let mut reg = registry();
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..5_000 {
                reg.apply_periodic_update(&mut rng);
                for record in reg.list_all() {
                    assert!((0.0..=100.0).contains(&record.rsi), "rsi {} escaped", record.rsi);
                    assert!(record.current_price > 0.0);
                }
            }
        }
    }
}
