//! # config: settings read from environment variables
//!
//! | Variable                 | Default          |
//! |--------------------------|------------------|
//! | `BIND_ADDR`              | `127.0.0.1:3000` |
//! | `TICK_INTERVAL_SECS`     | `5`              |
//! | `EVENT_CHANNEL_CAPACITY` | `256`            |
//! | `SIM_SEED`               | unset (entropy)  |

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{bail, Context};

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Where the view adapter listens. Loopback by default: one local session.
    pub bind_addr:        SocketAddr,
    /// Period of the price walk + alert check.
    pub tick_interval:    Duration,
    pub channel_capacity: usize,
    /// Fixed seed for a reproducible simulation.
    pub sim_seed:         Option<u64>,
}

impl DashboardConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr: SocketAddr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse()
            .context("BIND_ADDR must be a socket address like 127.0.0.1:3000")?;

        let interval_secs: u64 = lookup("TICK_INTERVAL_SECS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .context("TICK_INTERVAL_SECS must be a number")?;
        if interval_secs == 0 {
            bail!("TICK_INTERVAL_SECS must be greater than zero");
        }

        let channel_capacity = lookup("EVENT_CHANNEL_CAPACITY")
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(256);

        let sim_seed = match lookup("SIM_SEED") {
            Some(raw) => Some(raw.parse().context("SIM_SEED must be an unsigned integer")?),
            None => None,
        };

        Ok(Self {
            bind_addr,
            tick_interval: Duration::from_secs(interval_secs),
            channel_capacity,
            sim_seed,
        })
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_addr:        SocketAddr::from(([127, 0, 0, 1], 3000)),
            tick_interval:    Duration::from_secs(5),
            channel_capacity: 256,
            sim_seed:         None,
        }
    }
}
