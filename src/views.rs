//! # views
//!
//! Rendering adapter: turns [`Dashboard`] snapshots into display-ready
//! structs for the browser panels. Pure functions, no locking, no I/O; the
//! route handlers call them under a read guard.

use chrono::{Duration, Local, NaiveDate};
use serde::Serialize;

use crate::dashboard::Dashboard;
use crate::engine::portfolio::PortfolioSummary;
use crate::engine::random::RandomSource;
use crate::format::{format_currency, format_percentage};
use crate::models::asset::{wave_description, wyckoff_description};
use crate::models::{AlertKind, AssetRecord, MarketMetrics};

// ─── Portfolio ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub summary:          PortfolioSummary,
    pub total_value_text: String,
    pub total_roi_text:   String,
    pub positive:         bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HoldingView {
    /// Position in the ledger; valid until the next mutation.
    pub index:         usize,
    pub symbol:        String,
    pub avg_buy_price: String,
    pub allocation:    f64,
    pub holding_time:  String,
    pub target_price:  String,
    pub target_roi:    String,
    pub current_price: String,
    pub current_roi:   String,
    pub positive:      bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioView {
    pub summary:  SummaryView,
    pub holdings: Vec<HoldingView>,
}

pub fn portfolio_view(dash: &Dashboard) -> PortfolioView {
    let summary = dash.portfolio_summary();

    // unknown symbols get no row; `index` keeps ledger positions intact
    let holdings = dash
        .holdings()
        .iter()
        .enumerate()
        .filter_map(|(index, h)| {
            let asset = dash.asset(&h.symbol)?;
            let current_roi = h.current_roi(asset.current_price);
            Some(HoldingView {
                index,
                symbol:        asset.symbol.clone(),
                avg_buy_price: format_currency(h.avg_buy_price, false),
                allocation:    h.allocation,
                holding_time:  h.holding_time.clone(),
                target_price:  format_currency(h.target_price, false),
                target_roi:    format_percentage(h.target_roi()),
                current_price: format_currency(asset.current_price, false),
                current_roi:   format_percentage(current_roi),
                positive:      current_roi >= 0.0,
            })
        })
        .collect();

    PortfolioView {
        summary: SummaryView {
            total_value_text: format_currency(summary.total_value, false),
            total_roi_text:   format_percentage(summary.total_roi),
            positive:         summary.total_roi >= 0.0,
            summary,
        },
        holdings,
    }
}

// ─── Price list ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct PriceRow {
    pub symbol:   String,
    pub name:     String,
    pub price:    String,
    pub change:   String,
    pub positive: bool,
}

pub fn price_list(dash: &Dashboard) -> Vec<PriceRow> {
    dash.all_assets()
        .iter()
        .map(|a| PriceRow {
            symbol:   a.symbol.clone(),
            name:     a.name.clone(),
            price:    format_currency(a.current_price, false),
            change:   format_percentage(a.change_24h),
            positive: a.change_24h >= 0.0,
        })
        .collect()
}

// ─── Market overview ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct OverviewView {
    pub metrics:          MarketMetrics,
    pub total_market_cap: String,
    pub btc_dominance:    String,
    pub fear_greed:       String,
    pub defi_tvl:         String,
}

pub fn overview(metrics: MarketMetrics) -> OverviewView {
    OverviewView {
        total_market_cap: format_currency(metrics.total_market_cap, true),
        btc_dominance:    format!("{}%", metrics.btc_dominance),
        fear_greed:       metrics.fear_greed_index.to_string(),
        defi_tvl:         format_currency(metrics.defi_tvl, true),
        metrics,
    }
}

// ─── Alerts ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct AlertView {
    pub index:       usize,
    pub kind:        AlertKind,
    pub label:       String,
    pub description: String,
    pub active:      bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertsView {
    pub active_count: usize,
    pub alerts:       Vec<AlertView>,
}

pub fn alerts_view(dash: &Dashboard) -> AlertsView {
    let alerts = dash
        .alerts()
        .iter()
        .enumerate()
        .map(|(index, rule)| AlertView {
            index,
            kind: rule.kind,
            label: match rule.kind {
                AlertKind::Price  => "price alert".to_string(),
                AlertKind::Volume => "volume alert".to_string(),
            },
            description: rule.describe(),
            active: rule.active,
        })
        .collect();

    AlertsView { active_count: dash.active_alert_count(), alerts }
}

// ─── Technical ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    pub fn of(rsi: f64) -> Self {
        if rsi > 70.0 {
            RsiZone::Overbought
        } else if rsi < 30.0 {
            RsiZone::Oversold
        } else {
            RsiZone::Neutral
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TechnicalView {
    pub symbol:   String,
    pub rsi:      String,
    pub rsi_fill: f64,
    pub rsi_zone: RsiZone,
    pub macd:     String,
    pub ma20:     String,
    pub ma50:     String,
    pub ma200:    String,
    pub volume:   String,
}

pub fn technical(asset: &AssetRecord) -> TechnicalView {
    TechnicalView {
        symbol:   asset.symbol.clone(),
        rsi:      format!("{:.1}", asset.rsi),
        rsi_fill: asset.rsi,
        rsi_zone: RsiZone::of(asset.rsi),
        macd:     format!("{:.0}", asset.macd),
        ma20:     format_currency(asset.ma20, false),
        ma50:     format_currency(asset.ma50, false),
        ma200:    format_currency(asset.ma200, false),
        volume:   format_currency(asset.volume_24h, true),
    }
}

// ─── Market analysis ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisView {
    pub symbol:              String,
    pub wyckoff_phase:       String,
    pub wyckoff_description: &'static str,
    pub trend_direction:     String,
    /// MA200.
    pub support:             String,
    /// MA20 + 5 %.
    pub resistance:          String,
    pub elliott_wave:        String,
    pub wave_description:    &'static str,
    pub whale_activity:      String,
    pub exchange_flow:       String,
}

pub fn analysis(asset: &AssetRecord) -> AnalysisView {
    AnalysisView {
        symbol:              asset.symbol.clone(),
        wyckoff_phase:       asset.wyckoff_phase.clone(),
        wyckoff_description: wyckoff_description(&asset.wyckoff_phase),
        trend_direction:     asset.sentiment.clone(),
        support:             format_currency(asset.ma200, false),
        resistance:          format_currency(asset.ma20 * 1.05, false),
        elliott_wave:        asset.elliott_wave.clone(),
        wave_description:    wave_description(&asset.elliott_wave),
        whale_activity:      asset.whale_activity.clone(),
        exchange_flow:       asset.exchange_flow.clone(),
    }
}

// ─── Research ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ResearchView {
    /// `"Bitcoin (BTC)"`.
    pub title:           String,
    pub description:     String,
    pub whitepaper:      String,
    pub price:           String,
    pub change:          String,
    pub positive:        bool,
    pub market_cap:      String,
    pub volume:          String,
    pub recent_news:     String,
    pub sentiment:       String,
    pub sentiment_class: &'static str,
    pub exchanges:       Vec<String>,
}

/// CSS class the view uses to colour a sentiment label.
pub fn sentiment_class(sentiment: &str) -> &'static str {
    match sentiment.to_lowercase().as_str() {
        "bullish" => "text-success",
        "bearish" => "text-error",
        "neutral" => "text-warning",
        _ => "",
    }
}

pub fn research(asset: &AssetRecord) -> ResearchView {
    ResearchView {
        title:           format!("{} ({})", asset.name, asset.symbol),
        description:     asset.project.description.clone(),
        whitepaper:      asset.project.whitepaper.clone(),
        price:           format_currency(asset.current_price, false),
        change:          format_percentage(asset.change_24h),
        positive:        asset.change_24h >= 0.0,
        market_cap:      format_currency(asset.market_cap, true),
        volume:          format_currency(asset.volume_24h, true),
        recent_news:     asset.project.recent_news.clone(),
        sentiment:       asset.sentiment.clone(),
        sentiment_class: sentiment_class(&asset.sentiment),
        exchanges:       asset.project.exchanges.clone(),
    }
}

// ─── Chart ────────────────────────────────────────────────────────────────────

/// Number of daily points in a synthesized chart.
pub const CHART_POINTS: usize = 30;
const CHART_START_RATIO: f64 = 0.9;
const CHART_STEP: f64 = 0.025;
const CHART_MA_WINDOW: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub symbol: String,
    pub label:  String,
    pub labels: Vec<String>,
    pub price:  Vec<f64>,
    pub ma20:   Vec<f64>,
    pub ma50:   Vec<f64>,
}

/// Synthesizes a 30-day chart ending `today`. Nothing is stored: every call
/// draws a fresh walk starting at 90 % of the current price.
pub fn chart(asset: &AssetRecord, today: NaiveDate, rng: &mut impl RandomSource) -> ChartSeries {
    let labels = (0..CHART_POINTS)
        .map(|i| {
            let back = (CHART_POINTS - 1 - i) as i64;
            (today - Duration::days(back)).format("%Y-%m-%d").to_string()
        })
        .collect();

    let mut level = asset.current_price * CHART_START_RATIO;
    let price: Vec<f64> = (0..CHART_POINTS)
        .map(|_| {
            level *= 1.0 + rng.symmetric(CHART_STEP);
            level
        })
        .collect();

    ChartSeries {
        symbol: asset.symbol.clone(),
        label:  format!("{} Price", asset.name),
        labels,
        ma20:   trailing_mean(&price, CHART_MA_WINDOW),
        ma50:   vec![asset.ma50; CHART_POINTS],
        price,
    }
}

/// Mean of up to `window` values ending at each index.
fn trailing_mean(values: &[f64], window: usize) -> Vec<f64> {
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
