//! Background alert dispatcher
//!
//! Notifications are queued on a bounded channel and rendered by a worker
//! task. Sinks may block (the console blinker sleeps for seconds), so each
//! delivery runs on the blocking pool and the caller only waits for queue
//! space.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitals_monitor::alert::{AlertDispatcher, RecordingSink};
//! use vitals_monitor::engine::evaluate;
//! use vitals_monitor::vitals::TemperatureUnit;
//!
//! #[tokio::main]
//! async fn main() {
//!     let dispatcher = AlertDispatcher::spawn(Arc::new(RecordingSink::new()), 64);
//!
//!     let result = evaluate(94.0, 70.0, 98.0, TemperatureUnit::Fahrenheit);
//!     for notification in result.notifications {
//!         dispatcher.dispatch(notification).await.unwrap();
//!     }
//!
//!     let rendered = dispatcher.shutdown().await.unwrap();
//!     assert_eq!(rendered, 1);
//! }
//! ```

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::AlertSink;
use crate::error::{MonitorError, Result};
use crate::notification::Notification;

/// Renders notifications on a background worker
pub struct AlertDispatcher {
    sender: mpsc::Sender<Notification>,
    worker: JoinHandle<usize>,
}

impl AlertDispatcher {
    /// Start the worker on the current tokio runtime
    pub fn spawn(sink: Arc<dyn AlertSink>, capacity: usize) -> Self {
        let (sender, mut receiver) = mpsc::channel::<Notification>(capacity.max(1));

        let worker = tokio::spawn(async move {
            let mut rendered = 0usize;
            while let Some(notification) = receiver.recv().await {
                let sink = Arc::clone(&sink);
                let key = notification.key;
                let outcome =
                    tokio::task::spawn_blocking(move || sink.deliver(&notification)).await;

                match outcome {
                    Ok(Ok(())) => rendered += 1,
                    Ok(Err(e)) => {
                        tracing::warn!(key = %key, error = %e, "Failed to render alert");
                    }
                    Err(e) => {
                        tracing::warn!(key = %key, error = %e, "Alert render task panicked");
                    }
                }
            }
            tracing::debug!(rendered, "Alert dispatcher stopped");
            rendered
        });

        Self { sender, worker }
    }

    /// Queue a notification for rendering
    pub async fn dispatch(&self, notification: Notification) -> Result<()> {
        self.sender.send(notification).await.map_err(|e| {
            MonitorError::Dispatch(format!("Failed to queue notification: {}", e))
        })
    }

    /// Queue every notification of an evaluation, in order
    pub async fn dispatch_all(
        &self,
        notifications: impl IntoIterator<Item = Notification>,
    ) -> Result<()> {
        for notification in notifications {
            self.dispatch(notification).await?;
        }
        Ok(())
    }

    /// Close the queue, wait for pending alerts, and return how many rendered
    pub async fn shutdown(self) -> Result<usize> {
        drop(self.sender);
        self.worker
            .await
            .map_err(|e| MonitorError::Internal(format!("Alert dispatcher failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::RecordingSink;
    use crate::notification::MessageKey;
    use crate::vitals::VitalKind;

    struct FailingSink;

    impl AlertSink for FailingSink {
        fn deliver(&self, _notification: &Notification) -> Result<()> {
            Err(MonitorError::alert("display unplugged"))
        }
    }

    #[tokio::test]
    async fn test_dispatch_renders_in_order() {
        let sink = Arc::new(RecordingSink::new());
        let dispatcher = AlertDispatcher::spawn(sink.clone(), 4);

        dispatcher
            .dispatch_all(vec![
                Notification::warning(VitalKind::Temperature, MessageKey::ApproachingHyperthermia, 101.0),
                Notification::critical(VitalKind::PulseRate, 130.0),
            ])
            .await
            .unwrap();

        assert_eq!(dispatcher.shutdown().await.unwrap(), 2);
        let keys: Vec<_> = sink.delivered().iter().map(|n| n.key).collect();
        assert_eq!(
            keys,
            vec![
                MessageKey::ApproachingHyperthermia,
                MessageKey::PulseRateOutOfRange
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_render_does_not_stop_worker() {
        let dispatcher = AlertDispatcher::spawn(Arc::new(FailingSink), 1);
        dispatcher
            .dispatch(Notification::critical(VitalKind::Spo2, 80.0))
            .await
            .unwrap();
        dispatcher
            .dispatch(Notification::critical(VitalKind::Spo2, 81.0))
            .await
            .unwrap();
        assert_eq!(dispatcher.shutdown().await.unwrap(), 0);
    }
}
