//! # routes::portfolio
//!
//! | Method | Path                              | Description                   |
//! |--------|-----------------------------------|-------------------------------|
//! | GET    | `/api/portfolio`                  | Summary + rendered holdings   |
//! | POST   | `/api/portfolio/holdings`         | Validate and append a holding |
//! | DELETE | `/api/portfolio/holdings/:index`  | Remove by position            |

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{error::DashboardError, models::NewHolding, state::SharedState, views};

/// GET /api/portfolio
pub async fn get_portfolio(State(state): State<SharedState>) -> impl IntoResponse {
    let dash = state.dashboard.read().await;
    Json(json!({ "ok": true, "portfolio": views::portfolio_view(&dash) }))
}

/// POST /api/portfolio/holdings
pub async fn add_holding(
    State(state): State<SharedState>,
    Json(input): Json<NewHolding>,
) -> Result<impl IntoResponse, DashboardError> {
    let holding = state.add_holding(input).await?;
    Ok((StatusCode::CREATED, Json(json!({ "ok": true, "holding": holding }))))
}

/// DELETE /api/portfolio/holdings/:index
pub async fn remove_holding(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
) -> Result<impl IntoResponse, DashboardError> {
    let removed = state.remove_holding(index).await?;
    Ok(Json(json!({ "ok": true, "removed": removed })))
}
