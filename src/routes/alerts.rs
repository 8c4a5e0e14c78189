//! # routes::alerts
//!
//! | Method | Path                        | Description                    |
//! |--------|-----------------------------|--------------------------------|
//! | GET    | `/api/alerts`               | Rendered rules + active count  |
//! | POST   | `/api/alerts`               | Create a rule (starts active)  |
//! | DELETE | `/api/alerts/:index`        | Remove by position             |
//! | POST   | `/api/alerts/:index/toggle` | Flip the active flag           |

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{error::DashboardError, models::NewAlert, state::SharedState, views};

/// GET /api/alerts
pub async fn list_alerts(State(state): State<SharedState>) -> impl IntoResponse {
    let dash = state.dashboard.read().await;
    Json(json!({ "ok": true, "alerts": views::alerts_view(&dash) }))
}

/// POST /api/alerts
pub async fn add_alert(
    State(state): State<SharedState>,
    Json(input): Json<NewAlert>,
) -> Result<impl IntoResponse, DashboardError> {
    let rule = state.add_alert(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "ok": true, "alert": rule, "description": rule.describe() })),
    ))
}

/// DELETE /api/alerts/:index
pub async fn remove_alert(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
) -> Result<impl IntoResponse, DashboardError> {
    let removed = state.remove_alert(index).await?;
    Ok(Json(json!({ "ok": true, "removed": removed })))
}

/// POST /api/alerts/:index/toggle
pub async fn toggle_alert(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
) -> Result<impl IntoResponse, DashboardError> {
    let active = state.toggle_alert(index).await?;
    Ok(Json(json!({ "ok": true, "index": index, "active": active })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::routes::{router, test_support::call};
    use crate::state::AppState;

    #[tokio::test]
    async fn sample_rules_are_listed() {
        let app = router(Arc::new(AppState::default()));
        let (status, body) = call(&app, Method::GET, "/api/alerts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["alerts"]["active_count"], 2);
        assert_eq!(body["alerts"]["alerts"][0]["description"], "BTC above $120,000");
        assert_eq!(body["alerts"]["alerts"][1]["label"], "volume alert");
    }

    #[tokio::test]
    async fn create_toggle_and_remove() {
        let state = Arc::new(AppState::default());
        let app = router(state.clone());

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/alerts",
            Some(json!({
                "kind":      "price",
                "symbol":    "ada",
                "condition": "below",
                "threshold": 0.5,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["alert"]["symbol"], "ADA");
        assert_eq!(body["alert"]["active"], true);
        assert_eq!(body["description"], "ADA below $0.5");

        let (_, body) = call(&app, Method::POST, "/api/alerts/2/toggle", None).await;
        assert_eq!(body["active"], false);
        let (_, body) = call(&app, Method::POST, "/api/alerts/2/toggle", None).await;
        assert_eq!(body["active"], true);

        let (status, body) = call(&app, Method::DELETE, "/api/alerts/0", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["removed"]["symbol"], "BTC");
        assert_eq!(state.dashboard.read().await.alerts().len(), 2);
    }

    #[tokio::test]
    async fn invalid_threshold_is_rejected() {
        let app = router(Arc::new(AppState::default()));
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/alerts",
            Some(json!({
                "kind":      "price",
                "symbol":    "BTC",
                "condition": "above",
                "threshold": -1.0,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please enter a valid target value");
    }

    #[tokio::test]
    async fn toggle_out_of_range_is_not_found() {
        let app = router(Arc::new(AppState::default()));
        let (status, _) = call(&app, Method::POST, "/api/alerts/5/toggle", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
