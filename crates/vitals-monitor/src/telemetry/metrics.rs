//! Prometheus metrics for vitals evaluation
//!
//! - `vitals_monitor_evaluations_total` (counter) - evaluations by outcome
//! - `vitals_monitor_notifications_total` (counter) - notifications by severity and key
//! - `vitals_monitor_critical_by_kind_total` (counter) - failures by vital sign
//!
//! # Example
//!
//! ```rust,no_run
//! use vitals_monitor::telemetry::VitalsMetrics;
//! use vitals_monitor::engine::evaluate;
//! use vitals_monitor::vitals::TemperatureUnit;
//!
//! let metrics = VitalsMetrics::new().unwrap();
//! metrics.record(&evaluate(98.6, 72.0, 97.0, TemperatureUnit::Fahrenheit));
//! println!("{}", metrics.gather_text().unwrap());
//! ```

use prometheus::core::Collector;
use prometheus::{CounterVec, Encoder, Opts, Registry, TextEncoder};

use crate::engine::EvaluationResult;
use crate::error::{MonitorError, Result};

const NAMESPACE: &str = "vitals_monitor";

/// Outcome label for an evaluation
pub fn outcome_label(result: &EvaluationResult) -> &'static str {
    if !result.ok {
        "critical"
    } else if result.has_warnings() {
        "warning"
    } else {
        "ok"
    }
}

/// Counters for evaluations and the notifications they produce
pub struct VitalsMetrics {
    registry: Registry,
    evaluations_total: CounterVec,
    notifications_total: CounterVec,
    critical_by_kind_total: CounterVec,
}

impl VitalsMetrics {
    /// Create metrics on a fresh registry
    pub fn new() -> Result<Self> {
        Self::with_registry(Registry::new())
    }

    /// Create metrics and register them with the provided registry
    pub fn with_registry(registry: Registry) -> Result<Self> {
        let evaluations_total = CounterVec::new(
            Opts::new("evaluations_total", "Total number of vitals evaluations")
                .namespace(NAMESPACE),
            &["result"],
        )?;

        let notifications_total = CounterVec::new(
            Opts::new(
                "notifications_total",
                "Total number of notifications emitted by severity and key",
            )
            .namespace(NAMESPACE),
            &["severity", "key"],
        )?;

        let critical_by_kind_total = CounterVec::new(
            Opts::new(
                "critical_by_kind_total",
                "Total number of failed evaluations by vital sign",
            )
            .namespace(NAMESPACE),
            &["kind"],
        )?;

        registry.register(Box::new(evaluations_total.clone()))?;
        registry.register(Box::new(notifications_total.clone()))?;
        registry.register(Box::new(critical_by_kind_total.clone()))?;

        Ok(Self {
            registry,
            evaluations_total,
            notifications_total,
            critical_by_kind_total,
        })
    }

    /// Record one evaluation and its notifications
    pub fn record(&self, result: &EvaluationResult) {
        self.evaluations_total
            .with_label_values(&[outcome_label(result)])
            .inc();

        for notification in &result.notifications {
            let severity = notification.severity.to_string();
            self.notifications_total
                .with_label_values(&[severity.as_str(), notification.key.code()])
                .inc();
        }

        if let Some(kind) = result.failed {
            let kind = kind.to_string();
            self.critical_by_kind_total
                .with_label_values(&[kind.as_str()])
                .inc();
        }
    }

    /// Evaluations recorded with the given outcome label
    ///
    /// Reads the collected series, so asking about an outcome never
    /// creates one. Unseen outcomes count as 0.
    pub fn evaluations(&self, outcome: &str) -> u64 {
        self.evaluations_total
            .collect()
            .iter()
            .flat_map(|family| family.get_metric())
            .find(|metric| {
                metric
                    .get_label()
                    .iter()
                    .any(|label| label.get_name() == "result" && label.get_value() == outcome)
            })
            .map(|metric| metric.get_counter().get_value() as u64)
            .unwrap_or(0)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn gather_text(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| MonitorError::Metrics(e.to_string()))
    }
}
