//! # events
//!
//! Defines [`DashboardEvent`], every event broadcast to connected views over
//! `/ws/events`.
//!
//! Uses `tokio::sync::broadcast::Sender<String>`: events are serialised to
//! JSON once before sending so every subscriber gets the same frame.

use serde::Serialize;

use crate::dashboard::TickReport;
use crate::models::Notification;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashboardEvent {
    /// Toast for the view: alert triggered or user action succeeded.
    Notification {
        notification: Notification,
    },

    /// Prices moved and alerts were checked; views should re-read snapshots.
    Tick {
        tick:   u64,
        report: TickReport,
    },

    /// A holding was added or removed.
    PortfolioChanged {
        count: usize,
    },

    /// A rule was added, removed or toggled.
    AlertsChanged {
        total:  usize,
        active: usize,
    },

    /// The single-asset views switched symbol.
    SymbolSelected {
        symbol: String,
    },
}

impl DashboardEvent {
    #[inline]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"event":"SERIALIZATION_ERROR"}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged() {
        let json = DashboardEvent::SymbolSelected { symbol: "ETH".into() }.to_json();
        assert_eq!(json, r#"{"event":"SYMBOL_SELECTED","symbol":"ETH"}"#);

        let json = DashboardEvent::AlertsChanged { total: 2, active: 1 }.to_json();
        assert!(json.starts_with(r#"{"event":"ALERTS_CHANGED""#));
    }
}
