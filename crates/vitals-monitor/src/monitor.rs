//! Monitor facade
//!
//! Couples the pure evaluator with an alert sink and optional metrics.

use std::sync::Arc;

use crate::alert::{AlertSink, ConsoleAlert, NullSink};
use crate::config::MonitorConfig;
use crate::engine::{EvaluationResult, VitalReadings, VitalsEvaluator};
use crate::telemetry::VitalsMetrics;

/// Evaluates readings and delivers the resulting notifications
pub struct Monitor {
    evaluator: VitalsEvaluator,
    sink: Arc<dyn AlertSink>,
    metrics: Option<Arc<VitalsMetrics>>,
}

impl Monitor {
    pub fn new(sink: Arc<dyn AlertSink>) -> Self {
        Self {
            evaluator: VitalsEvaluator::new(),
            sink,
            metrics: None,
        }
    }

    /// Monitor rendering to the console as configured
    pub fn from_config(config: &MonitorConfig) -> Self {
        let sink: Arc<dyn AlertSink> = if config.alert.enabled {
            Arc::new(ConsoleAlert::stdout(config.language, &config.alert))
        } else {
            Arc::new(NullSink)
        };
        Self::new(sink)
    }

    /// Record every evaluation in the given metrics
    pub fn with_metrics(mut self, metrics: Arc<VitalsMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn metrics(&self) -> Option<&Arc<VitalsMetrics>> {
        self.metrics.as_ref()
    }

    /// Evaluate readings and deliver their notifications in order
    ///
    /// Delivery failures are logged and do not stop the remaining
    /// notifications. The evaluation result is returned regardless.
    pub fn check(&self, readings: &VitalReadings) -> EvaluationResult {
        let result = self.evaluator.evaluate(readings);

        if let Some(metrics) = &self.metrics {
            metrics.record(&result);
        }

        let mut undelivered = 0usize;
        for notification in &result.notifications {
            if let Err(e) = self.sink.deliver(notification) {
                undelivered += 1;
                tracing::warn!(
                    sink = self.sink.name(),
                    key = %notification.key,
                    error = %e,
                    "Failed to deliver notification"
                );
            }
        }

        tracing::info!(
            ok = result.ok,
            failed = ?result.failed,
            notifications = result.notifications.len(),
            undelivered,
            "Vitals checked"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::RecordingSink;
    use crate::error::{MonitorError, Result};
    use crate::i18n::Language;
    use crate::notification::{MessageKey, Notification};
    use crate::vitals::VitalKind;
    use std::io::{self, Write};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[derive(Default)]
    struct RejectingSink {
        attempts: AtomicUsize,
    }

    impl AlertSink for RejectingSink {
        fn deliver(&self, _notification: &Notification) -> Result<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(MonitorError::alert("display unplugged"))
        }

        fn name(&self) -> &str {
            "rejecting"
        }
    }

    #[test]
    fn test_check_delivers_notifications() {
        let sink = Arc::new(RecordingSink::new());
        let monitor = Monitor::new(sink.clone());

        let result = monitor.check(&VitalReadings::new(95.1, 130.0, 98.0));
        assert!(!result.ok);

        let keys: Vec<_> = sink.delivered().iter().map(|n| n.key).collect();
        assert_eq!(
            keys,
            vec![
                MessageKey::ApproachingHypothermia,
                MessageKey::PulseRateOutOfRange
            ]
        );
    }

    #[test]
    fn test_check_records_metrics() {
        let metrics = Arc::new(VitalsMetrics::new().unwrap());
        let monitor = Monitor::new(Arc::new(RecordingSink::new())).with_metrics(metrics.clone());

        monitor.check(&VitalReadings::new(98.6, 72.0, 97.0));
        monitor.check(&VitalReadings::new(98.6, 72.0, 80.0));

        assert_eq!(metrics.evaluations("ok"), 1);
        assert_eq!(metrics.evaluations("critical"), 1);
    }

    #[test]
    fn test_disabled_alerts_use_null_sink() {
        let mut config = MonitorConfig::default();
        config.alert.enabled = false;
        let monitor = Monitor::from_config(&config);
        let result = monitor.check(&VitalReadings::new(90.0, 72.0, 97.0));
        assert_eq!(result.failed, Some(VitalKind::Temperature));
    }

    #[test]
    fn test_broken_console_keeps_critical_result() {
        let console = ConsoleAlert::new(ClosedPipe, Language::English)
            .with_blink(2, std::time::Duration::ZERO);
        let metrics = Arc::new(VitalsMetrics::new().unwrap());
        let monitor = Monitor::new(Arc::new(console)).with_metrics(metrics.clone());

        let result = monitor.check(&VitalReadings::new(94.0, 72.0, 97.0));
        assert!(!result.ok);
        assert_eq!(result.failed, Some(VitalKind::Temperature));
        assert_eq!(metrics.evaluations("critical"), 1);
    }

    #[test]
    fn test_failed_delivery_does_not_stop_later_notifications() {
        let sink = Arc::new(RejectingSink::default());
        let monitor = Monitor::new(sink.clone());

        let result = monitor.check(&VitalReadings::new(101.5, 120.0, 97.0));
        assert_eq!(result.failed, Some(VitalKind::PulseRate));
        assert_eq!(result.notifications.len(), 2);
        assert_eq!(sink.attempts.load(Ordering::SeqCst), 2);
    }
}
