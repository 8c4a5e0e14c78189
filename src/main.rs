//! # Cryptodash: Simulated Crypto Market Dashboard
//!
//! ```text
//!  ┌──────────────┐  every TICK_INTERVAL_SECS   ┌──────────────────────────────┐
//!  │ engine::     │ ──────────────────────────▶ │ AppState                     │
//!  │ ticker       │   price walk + alert check  │ ├─ dashboard (RwLock)        │
//!  └──────────────┘                             │ │  ├─ assets    📈            │
//!                                               │ │  ├─ portfolio 💼            │
//!  ┌──────────────┐  /api/portfolio/*          │ │  ├─ alerts    🔔            │
//!  │  Browser     │ ──────────────────────────▶ │ │  └─ current_symbol         │
//!  │  view        │  /api/alerts/*             │ └─ broadcast_tx ───────────┐ │
//!  │              │  /api/market/*             └────────────────────────────┘ │
//!  │              │ ◀── ws://host/ws/events ──────────────────────────────────┘
//!  └──────────────┘
//! ```

use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod dashboard;
mod engine;
mod error;
mod events;
mod format;
mod models;
mod routes;
mod state;
mod views;

use config::DashboardConfig;
use engine::ticker::{run_ticker, simulation_rng};
use state::build_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env ──────────────────────────────────────────────────────────
    dotenvy::dotenv().ok();

    // ── 2. Structured logging ─────────────────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("cryptodash=debug".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!(r#"

  ╔═══════════════════════════════════════════════════════╗
  ║              CRYPTODASH  Market Dashboard            ║
  ║     Prices · Portfolio · Alerts · Research · Chart    ║
  ╚═══════════════════════════════════════════════════════╝"#);

    // ── 3. Config & shared state ──────────────────────────────────────────────
    let config = DashboardConfig::from_env()?;
    info!(?config, "⚙️  Configuration loaded");

    let state = build_state(config.clone());
    let mut rng = simulation_rng(config.sim_seed);

    // rules already satisfied at startup fire before the first tick
    let triggered = state.check_alerts(&mut rng).await;
    if triggered > 0 {
        info!(triggered, "🔔 Alerts triggered at startup");
    }

    // ── 4. Tick driver ────────────────────────────────────────────────────────
    tokio::spawn(run_ticker(state.clone(), config.tick_interval, rng));

    // ── 5. Router ─────────────────────────────────────────────────────────────
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // ── 6. Bind & Serve ───────────────────────────────────────────────────────
    info!(addr = ?config.bind_addr, "🚀 Cryptodash server starting");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
