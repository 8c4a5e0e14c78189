//! Domain models shared across the dashboard.

pub mod alert;
pub mod asset;
pub mod catalog;
pub mod holding;
pub mod notification;

pub use alert::{AlertCondition, AlertKind, AlertRule, NewAlert};
pub use asset::{AssetRecord, MarketMetrics};
pub use holding::{Holding, NewHolding};
pub use notification::{Notification, NotificationSink};
