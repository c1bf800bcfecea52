//! Notifications emitted by the vitals evaluator
//!
//! A [`Notification`] is an abstract advisory event. It carries a
//! [`MessageKey`] rather than display text; renderers localize it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vitals::VitalKind;

/// Severity level for notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// In range but close to a bound
    Warning,
    /// Out of range, fails the evaluation
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Message keys understood by the localization table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    TemperatureCritical,
    PulseRateOutOfRange,
    Spo2OutOfRange,
    ApproachingHypothermia,
    ApproachingHyperthermia,
    ApproachingBradycardia,
    ApproachingTachycardia,
    ApproachingHypoxemia,
}

impl MessageKey {
    pub const ALL: [MessageKey; 8] = [
        MessageKey::TemperatureCritical,
        MessageKey::PulseRateOutOfRange,
        MessageKey::Spo2OutOfRange,
        MessageKey::ApproachingHypothermia,
        MessageKey::ApproachingHyperthermia,
        MessageKey::ApproachingBradycardia,
        MessageKey::ApproachingTachycardia,
        MessageKey::ApproachingHypoxemia,
    ];

    /// Stable code used in machine-readable output and metric labels
    pub fn code(self) -> &'static str {
        match self {
            MessageKey::TemperatureCritical => "temperature_critical",
            MessageKey::PulseRateOutOfRange => "pulse_rate_out_of_range",
            MessageKey::Spo2OutOfRange => "spo2_out_of_range",
            MessageKey::ApproachingHypothermia => "approaching_hypothermia",
            MessageKey::ApproachingHyperthermia => "approaching_hyperthermia",
            MessageKey::ApproachingBradycardia => "approaching_bradycardia",
            MessageKey::ApproachingTachycardia => "approaching_tachycardia",
            MessageKey::ApproachingHypoxemia => "approaching_hypoxemia",
        }
    }

    /// Severity implied by the key
    pub fn severity(self) -> Severity {
        match self {
            MessageKey::TemperatureCritical
            | MessageKey::PulseRateOutOfRange
            | MessageKey::Spo2OutOfRange => Severity::Critical,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single advisory event produced during evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Message to show the operator
    pub key: MessageKey,
    /// Vital sign the notification is about
    pub kind: VitalKind,
    /// Severity level
    pub severity: Severity,
    /// Reading that triggered it, in canonical units
    pub value: f64,
}

impl Notification {
    /// Out-of-range notification for a kind
    pub fn critical(kind: VitalKind, value: f64) -> Self {
        Self {
            key: kind.profile().critical_key,
            kind,
            severity: Severity::Critical,
            value,
        }
    }

    /// Early-warning notification with an explicit key
    pub fn warning(kind: VitalKind, key: MessageKey, value: f64) -> Self {
        Self {
            key,
            kind,
            severity: Severity::Warning,
            value,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} at {}: {}{}",
            self.severity,
            self.key,
            self.kind,
            self.value,
            self.kind.unit_label()
        )
    }
}
