//! # engine::ticker
//!
//! Drives the simulation: one [`AppState::run_tick`] per interval for the
//! lifetime of the process. The tick logic itself lives in `Dashboard::tick`
//! so tests call it directly without waiting on a clock.

use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::state::SharedState;

/// Seeded generator when `seed` is set, entropy otherwise.
pub fn simulation_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Runs forever. The first tick fires one full `period` after start.
pub async fn run_ticker(state: SharedState, period: Duration, mut rng: StdRng) {
    info!(?period, "📈 Price simulation started");

    let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        state.run_tick(&mut rng).await;
    }
}
