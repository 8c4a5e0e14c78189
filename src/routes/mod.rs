//! HTTP + WebSocket surface consumed by the browser view.

pub mod alerts;
pub mod market;
pub mod monitor;
pub mod portfolio;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::SharedState;

pub fn router(state: SharedState) -> Router {
    Router::new()
        // ── Monitor ───────────────────────────────────────────────────────────
        .route("/api/health",                    get(monitor::health))
        .route("/ws/events",                     get(monitor::ws_events))
        // ── Market ────────────────────────────────────────────────────────────
        .route("/api/market/overview",           get(market::get_overview))
        .route("/api/market/assets",             get(market::list_assets))
        .route("/api/market/assets/:symbol",     get(market::get_asset))
        .route("/api/market/select",             post(market::select_symbol))
        .route("/api/market/technical",          get(market::get_technical))
        .route("/api/market/analysis",           get(market::get_analysis))
        .route("/api/market/research/:symbol",   get(market::get_research))
        .route("/api/market/chart",              get(market::get_chart))
        // ── Portfolio ─────────────────────────────────────────────────────────
        .route("/api/portfolio",                 get(portfolio::get_portfolio))
        .route("/api/portfolio/holdings",        post(portfolio::add_holding))
        .route("/api/portfolio/holdings/:index", delete(portfolio::remove_holding))
        // ── Alerts ────────────────────────────────────────────────────────────
        .route("/api/alerts",                    get(alerts::list_alerts).post(alerts::add_alert))
        .route("/api/alerts/:index",             delete(alerts::remove_alert))
        .route("/api/alerts/:index/toggle",      post(alerts::toggle_alert))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}
