//! Early-warning detection
//!
//! A reading inside its range but within the tolerance band of a bound
//! raises an advisory. Detection never affects the pass/fail outcome.

use serde::{Deserialize, Serialize};

use crate::notification::MessageKey;
use crate::vitals::VitalKind;

/// Which bound a reading is approaching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSide {
    Low,
    High,
}

/// An early warning for a single reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarlyWarning {
    pub kind: VitalKind,
    pub side: WarningSide,
    pub key: MessageKey,
}

/// Detect whether a reading in canonical units is close to a bound
///
/// Low side: `lower <= value < lower + tolerance`.
/// High side: `upper - tolerance < value <= upper`, only when the kind has
/// an upper bound.
pub fn detect_warning(kind: VitalKind, value: f64) -> Option<EarlyWarning> {
    let profile = kind.profile();
    let tolerance = profile.tolerance();
    let lower = profile.bounds.lower;

    if value >= lower && value < lower + tolerance {
        return Some(EarlyWarning {
            kind,
            side: WarningSide::Low,
            key: profile.low_warning_key,
        });
    }

    if let (Some(upper), Some(key)) = (profile.bounds.upper, profile.high_warning_key) {
        if value > upper - tolerance && value <= upper {
            return Some(EarlyWarning {
                kind,
                side: WarningSide::High,
                key,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_low_side() {
        let warning = detect_warning(VitalKind::Temperature, 95.1).unwrap();
        assert_eq!(warning.side, WarningSide::Low);
        assert_eq!(warning.key, MessageKey::ApproachingHypothermia);
        assert!(detect_warning(VitalKind::Temperature, 95.0).is_some());
        assert!(detect_warning(VitalKind::Temperature, 96.6).is_none());
    }

    #[test]
    fn test_temperature_high_side() {
        let warning = detect_warning(VitalKind::Temperature, 101.0).unwrap();
        assert_eq!(warning.side, WarningSide::High);
        assert_eq!(warning.key, MessageKey::ApproachingHyperthermia);
        assert!(detect_warning(VitalKind::Temperature, 102.0).is_some());
        assert!(detect_warning(VitalKind::Temperature, 100.4).is_none());
    }

    #[test]
    fn test_pulse_bands() {
        assert_eq!(
            detect_warning(VitalKind::PulseRate, 61.0).map(|w| w.key),
            Some(MessageKey::ApproachingBradycardia)
        );
        assert_eq!(
            detect_warning(VitalKind::PulseRate, 99.0).map(|w| w.key),
            Some(MessageKey::ApproachingTachycardia)
        );
        // Band edges are exclusive on the inner side
        assert!(detect_warning(VitalKind::PulseRate, 61.5).is_none());
        assert!(detect_warning(VitalKind::PulseRate, 98.5).is_none());
        assert!(detect_warning(VitalKind::PulseRate, 80.0).is_none());
    }

    #[test]
    fn test_spo2_low_side_only() {
        assert_eq!(
            detect_warning(VitalKind::Spo2, 90.5).map(|w| w.key),
            Some(MessageKey::ApproachingHypoxemia)
        );
        assert!(detect_warning(VitalKind::Spo2, 99.5).is_none());
        assert!(detect_warning(VitalKind::Spo2, 100.0).is_none());
    }

    #[test]
    fn test_out_of_range_never_warns() {
        assert!(detect_warning(VitalKind::Temperature, 94.9).is_none());
        assert!(detect_warning(VitalKind::Temperature, 102.1).is_none());
        assert!(detect_warning(VitalKind::PulseRate, 59.0).is_none());
        assert!(detect_warning(VitalKind::Spo2, 89.0).is_none());
        assert!(detect_warning(VitalKind::Spo2, f64::NAN).is_none());
    }
}
