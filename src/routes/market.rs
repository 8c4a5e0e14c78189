//! # routes::market
//!
//! Read-only market panels plus symbol selection.
//!
//! | Method | Path                             | Description                        |
//! |--------|----------------------------------|------------------------------------|
//! | GET    | `/api/market/overview`           | Static market metrics              |
//! | GET    | `/api/market/assets`             | Price list                         |
//! | GET    | `/api/market/assets/:symbol`     | Raw asset record                   |
//! | POST   | `/api/market/select`             | Select symbol for single-asset tabs|
//! | GET    | `/api/market/technical`          | Indicators (`?symbol=` optional)   |
//! | GET    | `/api/market/analysis`           | Wyckoff / Elliott / on-chain       |
//! | GET    | `/api/market/research/:symbol`   | Project research card              |
//! | GET    | `/api/market/chart`              | Synthesized 30-day chart           |

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{dashboard::Dashboard, error::DashboardError, state::SharedState, views};

#[derive(Deserialize)]
pub struct SymbolQuery {
    pub symbol: Option<String>,
}

#[derive(Deserialize)]
pub struct SelectBody {
    pub symbol: String,
}

/// `?symbol=` when given, the selected symbol otherwise.
fn resolve<'a>(
    dash:   &'a Dashboard,
    symbol: Option<&str>,
) -> Result<&'a crate::models::AssetRecord, DashboardError> {
    match symbol {
        Some(symbol) => dash.research(symbol),
        None => dash
            .current_asset()
            .ok_or_else(|| DashboardError::NotFound("No symbol selected".into())),
    }
}

/// GET /api/market/overview
pub async fn get_overview(State(state): State<SharedState>) -> impl IntoResponse {
    let metrics = state.dashboard.read().await.market_metrics();
    Json(json!({ "ok": true, "overview": views::overview(metrics) }))
}

/// GET /api/market/assets
pub async fn list_assets(State(state): State<SharedState>) -> impl IntoResponse {
    let dash = state.dashboard.read().await;
    Json(json!({ "ok": true, "assets": views::price_list(&dash) }))
}

/// GET /api/market/assets/:symbol: exact symbol match
pub async fn get_asset(
    State(state): State<SharedState>,
    Path(symbol): Path<String>,
) -> Result<impl IntoResponse, DashboardError> {
    let dash = state.dashboard.read().await;
    let asset = dash
        .asset(&symbol)
        .ok_or_else(|| DashboardError::NotFound(format!("Unknown symbol: {symbol}")))?;
    Ok(Json(json!({ "ok": true, "asset": asset })))
}

/// POST /api/market/select
pub async fn select_symbol(
    State(state): State<SharedState>,
    Json(body): Json<SelectBody>,
) -> Result<impl IntoResponse, DashboardError> {
    let symbol = state.select_symbol(&body.symbol).await?;
    Ok(Json(json!({ "ok": true, "symbol": symbol })))
}

/// GET /api/market/technical
pub async fn get_technical(
    State(state): State<SharedState>,
    Query(query): Query<SymbolQuery>,
) -> Result<impl IntoResponse, DashboardError> {
    let dash = state.dashboard.read().await;
    let asset = resolve(&dash, query.symbol.as_deref())?;
    Ok(Json(json!({ "ok": true, "technical": views::technical(asset) })))
}

/// GET /api/market/analysis: always the selected symbol
pub async fn get_analysis(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, DashboardError> {
    let dash = state.dashboard.read().await;
    let asset = resolve(&dash, None)?;
    Ok(Json(json!({ "ok": true, "analysis": views::analysis(asset) })))
}

/// GET /api/market/research/:symbol: case-insensitive
pub async fn get_research(
    State(state): State<SharedState>,
    Path(symbol): Path<String>,
) -> Result<impl IntoResponse, DashboardError> {
    let dash = state.dashboard.read().await;
    let asset = dash.research(&symbol)?;
    Ok(Json(json!({ "ok": true, "research": views::research(asset) })))
}

/// GET /api/market/chart: fresh random series on every call
pub async fn get_chart(
    State(state): State<SharedState>,
    Query(query): Query<SymbolQuery>,
) -> Result<impl IntoResponse, DashboardError> {
    let dash = state.dashboard.read().await;
    let asset = resolve(&dash, query.symbol.as_deref())?;
    let series = views::chart(asset, views::today(), &mut rand::thread_rng());
    Ok(Json(json!({ "ok": true, "chart": series })))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
