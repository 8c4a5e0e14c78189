//! # models::catalog
//!
//! Hardcoded starting data: the three tracked assets plus the sample
//! portfolio and alerts the dashboard opens with.

use crate::models::alert::{AlertCondition, AlertKind, AlertRule};
use crate::models::asset::{AssetRecord, ProjectInfo};
use crate::models::holding::Holding;

pub fn default_assets() -> Vec<AssetRecord> {
    vec![
        AssetRecord {
            symbol:         "BTC".into(),
            name:           "Bitcoin".into(),
            current_price:  116_750.0,
            change_24h:     -2.3,
            volume_24h:     28_500_000_000.0,
            market_cap:     2_305_000_000_000.0,
            rsi:            45.2,
            macd:           -850.0,
            macd_signal:    -920.0,
            ma20:           118_200.0,
            ma50:           113_400.0,
            ma200:          105_800.0,
            wyckoff_phase:  "Accumulation".into(),
            elliott_wave:   "Wave 4 Correction".into(),
            sentiment:      "Neutral".into(),
            whale_activity: "High accumulation".into(),
            exchange_flow:  "Net outflows: 2,400 BTC".into(),
            project: ProjectInfo {
                description: "The first and largest cryptocurrency by market cap, created by Satoshi Nakamoto in 2009.".into(),
                whitepaper:  "https://bitcoin.org/bitcoin.pdf".into(),
                exchanges:   strings(&["Binance", "Coinbase", "Kraken", "Bitfinex"]),
                recent_news: "Bitcoin ETF inflows continue, institutional adoption growing".into(),
            },
        },
        AssetRecord {
            symbol:         "ETH".into(),
            name:           "Ethereum".into(),
            current_price:  4_150.0,
            change_24h:     1.8,
            volume_24h:     15_800_000_000.0,
            market_cap:     498_000_000_000.0,
            rsi:            52.8,
            macd:           12.0,
            macd_signal:    8.0,
            ma20:           4_090.0,
            ma50:           3_980.0,
            ma200:          3_650.0,
            wyckoff_phase:  "Markup".into(),
            elliott_wave:   "Wave 3 Extension".into(),
            sentiment:      "Bullish".into(),
            whale_activity: "Moderate buying".into(),
            exchange_flow:  "Net inflows: 15,600 ETH".into(),
            project: ProjectInfo {
                description: "Smart contract platform enabling decentralized applications and DeFi protocols.".into(),
                whitepaper:  "https://ethereum.org/whitepaper/".into(),
                exchanges:   strings(&["Binance", "Coinbase", "Uniswap", "Kraken"]),
                recent_news: "Ethereum 2.0 staking rewards increase, layer 2 adoption surging".into(),
            },
        },
        AssetRecord {
            symbol:         "ADA".into(),
            name:           "Cardano".into(),
            current_price:  1.45,
            change_24h:     3.2,
            volume_24h:     890_000_000.0,
            market_cap:     51_200_000_000.0,
            rsi:            58.3,
            macd:           0.015,
            macd_signal:    0.012,
            ma20:           1.38,
            ma50:           1.29,
            ma200:          1.15,
            wyckoff_phase:  "Markup".into(),
            elliott_wave:   "Wave 1 Impulse".into(),
            sentiment:      "Bullish".into(),
            whale_activity: "Strong accumulation".into(),
            exchange_flow:  "Net outflows: 45M ADA".into(),
            project: ProjectInfo {
                description: "Third-generation blockchain platform focused on sustainability and academic research.".into(),
                whitepaper:  "https://cardano.org/research/".into(),
                exchanges:   strings(&["Binance", "Coinbase", "Kraken", "KuCoin"]),
                recent_news: "Cardano smart contracts uptick, partnership with African governments".into(),
            },
        },
    ]
}

pub fn sample_holdings() -> Vec<Holding> {
    vec![
        Holding {
            symbol:        "BTC".into(),
            avg_buy_price: 89_500.0,
            allocation:    40.0,
            holding_time:  "8 months".into(),
            target_price:  150_000.0,
        },
        Holding {
            symbol:        "ETH".into(),
            avg_buy_price: 3_200.0,
            allocation:    35.0,
            holding_time:  "6 months".into(),
            target_price:  8_000.0,
        },
    ]
}

pub fn sample_alerts() -> Vec<AlertRule> {
    vec![
        AlertRule {
            kind:      AlertKind::Price,
            symbol:    "BTC".into(),
            condition: AlertCondition::Above,
            threshold: 120_000.0,
            active:    true,
        },
        AlertRule {
            kind:      AlertKind::Volume,
            symbol:    "ETH".into(),
            condition: AlertCondition::Spike,
            threshold: 200.0,
            active:    true,
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
