//! Vitals evaluation engine
//!
//! The evaluator normalizes the temperature, then walks the vital signs in
//! [`VitalKind::ALL`] order. Each reading is first checked for an early
//! warning and then range checked. The first out-of-range reading ends the
//! evaluation; readings after it are not looked at.
//!
//! Evaluation is pure. Notifications are returned in the result and it is
//! up to the caller to render them.

pub mod warning;

pub use warning::{detect_warning, EarlyWarning, WarningSide};

use serde::{Deserialize, Serialize};

use crate::notification::{Notification, Severity};
use crate::vitals::{normalize_temperature, TemperatureUnit, VitalKind};

/// One set of readings to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalReadings {
    /// Body temperature in `unit`
    pub temperature: f64,
    /// Pulse rate in bpm
    pub pulse_rate: f64,
    /// Oxygen saturation in percent
    pub spo2: f64,
    /// Unit of `temperature`
    #[serde(default)]
    pub unit: TemperatureUnit,
}

impl VitalReadings {
    /// Readings with the temperature in Fahrenheit
    pub fn new(temperature: f64, pulse_rate: f64, spo2: f64) -> Self {
        Self {
            temperature,
            pulse_rate,
            spo2,
            unit: TemperatureUnit::Fahrenheit,
        }
    }

    /// Set the temperature unit
    pub fn with_unit(mut self, unit: TemperatureUnit) -> Self {
        self.unit = unit;
        self
    }
}

/// Outcome of evaluating one set of readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Whether every vital sign is within range
    pub ok: bool,
    /// First vital sign found out of range
    pub failed: Option<VitalKind>,
    /// Notifications in emission order
    pub notifications: Vec<Notification>,
    /// Temperature after normalization to Fahrenheit
    pub temperature_f: f64,
}

impl EvaluationResult {
    /// Whether any early warning was raised
    pub fn has_warnings(&self) -> bool {
        self.notifications
            .iter()
            .any(|n| n.severity == Severity::Warning)
    }

    /// Early-warning notifications only
    pub fn warnings(&self) -> impl Iterator<Item = &Notification> {
        self.notifications
            .iter()
            .filter(|n| n.severity == Severity::Warning)
    }

    /// The critical notification, if the evaluation failed
    pub fn critical(&self) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.is_critical())
    }
}

/// Stateless evaluator for vital sign readings
#[derive(Debug, Clone, Copy, Default)]
pub struct VitalsEvaluator;

impl VitalsEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a set of readings
    ///
    /// This method is deterministic: the same readings always produce the
    /// same result.
    pub fn evaluate(&self, readings: &VitalReadings) -> EvaluationResult {
        let temperature_f = normalize_temperature(readings.temperature, readings.unit);
        let mut builder = EvaluationBuilder::new(temperature_f);

        for kind in VitalKind::ALL {
            let value = match kind {
                VitalKind::Temperature => temperature_f,
                VitalKind::PulseRate => readings.pulse_rate,
                VitalKind::Spo2 => readings.spo2,
            };

            if let Some(warning) = detect_warning(kind, value) {
                tracing::debug!(
                    kind = %kind,
                    value,
                    side = ?warning.side,
                    "Vital sign approaching limit"
                );
                builder.push(Notification::warning(kind, warning.key, value));
            }

            if !kind.bounds().contains(value) {
                tracing::warn!(
                    kind = %kind,
                    value,
                    range = %kind.bounds().describe(),
                    "Vital sign out of range"
                );
                builder.push(Notification::critical(kind, value));
                return builder.fail(kind);
            }
        }

        builder.pass()
    }
}

/// Builder for EvaluationResult
struct EvaluationBuilder {
    temperature_f: f64,
    notifications: Vec<Notification>,
}

impl EvaluationBuilder {
    fn new(temperature_f: f64) -> Self {
        Self {
            temperature_f,
            notifications: Vec::new(),
        }
    }

    fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn fail(self, kind: VitalKind) -> EvaluationResult {
        self.finish(Some(kind))
    }

    fn pass(self) -> EvaluationResult {
        self.finish(None)
    }

    fn finish(self, failed: Option<VitalKind>) -> EvaluationResult {
        tracing::debug!(
            ok = failed.is_none(),
            notifications = self.notifications.len(),
            "Vitals evaluation complete"
        );
        EvaluationResult {
            ok: failed.is_none(),
            failed,
            notifications: self.notifications,
            temperature_f: self.temperature_f,
        }
    }
}

/// Evaluate readings with an explicit temperature unit
pub fn evaluate(
    temperature: f64,
    pulse_rate: f64,
    spo2: f64,
    unit: TemperatureUnit,
) -> EvaluationResult {
    let readings = VitalReadings::new(temperature, pulse_rate, spo2).with_unit(unit);
    VitalsEvaluator::new().evaluate(&readings)
}

/// Whether all vitals are in range, temperature in Fahrenheit
pub fn vitals_ok(temperature: f64, pulse_rate: f64, spo2: f64) -> bool {
    evaluate(temperature, pulse_rate, spo2, TemperatureUnit::Fahrenheit).ok
}
