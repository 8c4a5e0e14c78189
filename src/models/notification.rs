//! # models::notification
//!
//! Defines [`Notification`] (the toast the view shows when an alert fires or
//! a user action succeeds) and the [`NotificationSink`] the core emits into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ALERT_TRIGGERED: &str = "Alert Triggered";
pub const SUCCESS: &str = "Success";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Lets the view dismiss a specific toast.
    pub id:        Uuid,
    pub title:     String,
    pub message:   String,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(title: &str, message: impl Into<String>) -> Self {
        Self {
            id:        Uuid::new_v4(),
            title:     title.to_string(),
            message:   message.into(),
            raised_at: Utc::now(),
        }
    }
}

/// Receiver for notifications raised by the core.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
