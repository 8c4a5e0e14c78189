//! Simulation core: the asset registry and its price walk, the portfolio
//! ledger, alert evaluation, and the tick driver.

pub mod alerts;
pub mod market;
pub mod portfolio;
pub mod random;
pub mod ticker;
