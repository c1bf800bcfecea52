//! Alert rendering
//!
//! The evaluator only produces [`Notification`] values. An [`AlertSink`]
//! decides how they reach the operator:
//!
//! - [`ConsoleAlert`] prints a localized message and blinks an indicator
//!   for critical notifications
//! - [`RecordingSink`] keeps notifications in memory, without delay
//! - [`AlertDispatcher`] renders on a background worker so evaluation is
//!   not held up by a blocking sink

pub mod console;
pub mod dispatcher;

pub use console::ConsoleAlert;
pub use dispatcher::AlertDispatcher;

use std::sync::Mutex;

use crate::error::{MonitorError, Result};
use crate::notification::Notification;

/// Something that can present a notification to an operator
///
/// Implementations may block (the console blinker sleeps between phases).
pub trait AlertSink: Send + Sync {
    /// Present a single notification
    fn deliver(&self, notification: &Notification) -> Result<()>;

    /// Short name used in logs
    fn name(&self) -> &str {
        "alert-sink"
    }
}

/// Sink that records notifications instead of presenting them
#[derive(Debug, Default)]
pub struct RecordingSink {
    delivered: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications delivered so far, in order
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.delivered.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AlertSink for RecordingSink {
    fn deliver(&self, notification: &Notification) -> Result<()> {
        self.delivered
            .lock()
            .map_err(|e| MonitorError::Internal(format!("Recording sink poisoned: {}", e)))?
            .push(notification.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Sink that drops everything, used when alerts are disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AlertSink for NullSink {
    fn deliver(&self, _notification: &Notification) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
