//! # models::asset
//!
//! Defines [`AssetRecord`] (one row of mock market data for a ticker) and
//! the static [`MarketMetrics`] shown in the market overview panel.
//!
//! Records are created once at startup. Only the periodic price walk
//! (`engine::market`) touches them afterwards, and only `current_price`,
//! `change_24h` and `rsi`.

use serde::{Deserialize, Serialize};

// ─── ProjectInfo ──────────────────────────────────────────────────────────────

/// Descriptive block used by the research panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub description: String,
    /// Reference link (whitepaper or research page).
    pub whitepaper:  String,
    pub exchanges:   Vec<String>,
    pub recent_news: String,
}

// ─── AssetRecord ──────────────────────────────────────────────────────────────

/// Market data for a single ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Unique key, e.g. `"BTC"`.
    pub symbol: String,
    pub name:   String,

    pub current_price: f64,
    /// Signed 24h change in percent. Accumulates across simulation ticks.
    pub change_24h:    f64,
    pub volume_24h:    f64,
    pub market_cap:    f64,

    // ── Technical indicators ──────────────────────────────────────────────────
    /// Always within `[0, 100]`.
    pub rsi:         f64,
    pub macd:        f64,
    pub macd_signal: f64,
    pub ma20:        f64,
    pub ma50:        f64,
    pub ma200:       f64,

    // ── Classification ────────────────────────────────────────────────────────
    pub wyckoff_phase: String,
    pub elliott_wave:  String,
    pub sentiment:     String,

    // ── On-chain ──────────────────────────────────────────────────────────────
    pub whale_activity: String,
    pub exchange_flow:  String,

    pub project: ProjectInfo,
}

// ─── MarketMetrics ────────────────────────────────────────────────────────────

/// Aggregate market figures. Static; not derived from the asset registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketMetrics {
    pub total_market_cap:   f64,
    /// BTC dominance in percent.
    pub btc_dominance:      f64,
    /// Fear & greed sentiment index, 0–100.
    pub fear_greed_index:   u32,
    pub active_addresses:   u64,
    pub transaction_volume: f64,
    pub defi_tvl:           f64,
}

impl Default for MarketMetrics {
    fn default() -> Self {
        Self {
            total_market_cap:   3_100_000_000_000.0,
            btc_dominance:      58.2,
            fear_greed_index:   42,
            active_addresses:   1_250_000,
            transaction_volume: 45_000_000_000.0,
            defi_tvl:           97_000_000_000.0,
        }
    }
}

// ─── Reference text ───────────────────────────────────────────────────────────

/// Explanation of a Wyckoff market phase label.
pub fn wyckoff_description(phase: &str) -> &'static str {
    match phase {
        "Accumulation" => "Smart money accumulating, sideways price action with low volume",
        "Markup"       => "Price trending upward with increasing volume and momentum",
        "Distribution" => "Smart money distributing, high volume but sideways price action",
        "Markdown"     => "Price declining with increasing volume as weak hands sell",
        _              => "Phase analysis in progress",
    }
}

/// Explanation of an Elliott wave-count label.
pub fn wave_description(wave: &str) -> &'static str {
    match wave {
        "Wave 1 Impulse"    => "Initial upward movement, often retraced significantly",
        "Wave 2 Correction" => "Sharp correction of Wave 1, typically 50-78.6% retracement",
        "Wave 3 Extension"  => "Strongest upward wave, typically 161.8% of Wave 1",
        "Wave 4 Correction" => "Sideways consolidation, typically 38.2% retracement",
        "Wave 5 Extension"  => "Final upward wave, often with divergence in indicators",
        _                   => "Wave count analysis in progress",
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_have_descriptions() {
        assert!(wyckoff_description("Markup").starts_with("Price trending upward"));
        assert!(wave_description("Wave 4 Correction").contains("38.2%"));
    }

    #[test]
    fn unknown_labels_fall_back() {
        assert_eq!(wyckoff_description("Reaccumulation"), "Phase analysis in progress");
        assert_eq!(wave_description("Wave C"), "Wave count analysis in progress");
    }
}
