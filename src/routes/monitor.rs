//! # routes::monitor
//!
//! | Method    | Path          | Description                              |
//! |-----------|---------------|------------------------------------------|
//! | GET (WS)  | `/ws/events`  | Snapshot, then every `DashboardEvent`    |
//! | GET       | `/api/health` | Tick counter and symbol count            |

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    Json,
};
use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info};

use crate::{state::SharedState, views};

// ─── WebSocket Handler ────────────────────────────────────────────────────────

pub async fn ws_events(
    ws: WebSocketUpgrade,
    State(state): State<SharedState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Full view state, sent once on connect so the client can render before the
/// first event arrives.
async fn snapshot(state: &SharedState) -> String {
    let dash = state.dashboard.read().await;
    json!({
        "event":          "SNAPSHOT",
        "tick":           state.ticks(),
        "current_symbol": dash.current_symbol(),
        "prices":         views::price_list(&dash),
        "portfolio":      views::portfolio_view(&dash),
        "alerts":         views::alerts_view(&dash),
    })
    .to_string()
}

async fn handle_socket(socket: WebSocket, state: SharedState) {
    // subscribe before the snapshot so nothing falls between the two
    let mut rx = state.broadcast_tx.subscribe();
    let (mut sender, mut receiver) = socket.split();

    info!("🔌 WebSocket client connected");

    let snapshot = snapshot(&state).await;
    if sender.send(Message::Text(snapshot)).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            result = rx.recv() => {
                match result {
                    Ok(json_str) => {
                        if sender.send(Message::Text(json_str)).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(n)) => {
                        debug!("WS client lagged, skipped {n} events");
                    }
                    Err(RecvError::Closed) => break,
                }
            }

            result = receiver.next() => {
                match result {
                    Some(Ok(Message::Close(_))) | None | Some(Err(_)) => break,
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sender.send(Message::Pong(data)).await;
                    }
                    _ => {}
                }
            }
        }
    }

    info!("🔌 WebSocket client disconnected");
}

// ─── Health ───────────────────────────────────────────────────────────────────

/// GET /api/health
pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    let dash = state.dashboard.read().await;
    Json(json!({
        "ok":             true,
        "ticks":          state.ticks(),
        "assets":         dash.all_assets().len(),
        "holdings":       dash.holdings().len(),
        "active_alerts":  dash.active_alert_count(),
        "tick_interval":  state.config.tick_interval.as_secs(),
        "subscribers":    state.broadcast_tx.receiver_count(),
    }))
}
