//! Vital sign kinds, acceptable ranges and unit normalization
//!
//! Each [`VitalKind`] owns a fixed [`VitalProfile`]: its inclusive bounds,
//! the reference value its early-warning tolerance is derived from, and
//! the message keys it reports with. Profiles live in a small constant
//! table that is always walked in [`VitalKind::ALL`] order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::notification::MessageKey;

/// Fraction of a range's reference value used as the early-warning band
pub const EARLY_WARNING_FRACTION: f64 = 0.015;

/// The monitored vital signs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    /// Body temperature, canonical unit degrees Fahrenheit
    Temperature,
    /// Pulse rate in beats per minute
    PulseRate,
    /// Blood oxygen saturation in percent
    Spo2,
}

impl VitalKind {
    /// Evaluation order. Short-circuiting follows this order.
    pub const ALL: [VitalKind; 3] = [VitalKind::Temperature, VitalKind::PulseRate, VitalKind::Spo2];

    /// The fixed profile for this kind
    pub fn profile(self) -> &'static VitalProfile {
        match self {
            VitalKind::Temperature => &PROFILES[0],
            VitalKind::PulseRate => &PROFILES[1],
            VitalKind::Spo2 => &PROFILES[2],
        }
    }

    /// Acceptable range for this kind
    pub fn bounds(self) -> VitalBounds {
        self.profile().bounds
    }

    /// Unit label used in human-readable output
    pub fn unit_label(self) -> &'static str {
        match self {
            VitalKind::Temperature => "°F",
            VitalKind::PulseRate => "bpm",
            VitalKind::Spo2 => "%",
        }
    }
}

impl fmt::Display for VitalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VitalKind::Temperature => write!(f, "temperature"),
            VitalKind::PulseRate => write!(f, "pulse_rate"),
            VitalKind::Spo2 => write!(f, "spo2"),
        }
    }
}

/// Inclusive acceptable range for a vital sign
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalBounds {
    /// Minimum acceptable value (inclusive)
    pub lower: f64,
    /// Maximum acceptable value (inclusive), `None` when unbounded above
    pub upper: Option<f64>,
}

impl VitalBounds {
    /// Check where a value falls relative to the bounds
    ///
    /// NaN is never within bounds and is reported as below the minimum.
    pub fn check(&self, value: f64) -> BoundsCheck {
        if value.is_nan() || value < self.lower {
            return BoundsCheck::BelowMinimum {
                value,
                min: self.lower,
            };
        }

        if let Some(max) = self.upper {
            if value > max {
                return BoundsCheck::AboveMaximum { value, max };
            }
        }

        BoundsCheck::WithinBounds
    }

    /// Whether a value lies inside the bounds
    pub fn contains(&self, value: f64) -> bool {
        matches!(self.check(value), BoundsCheck::WithinBounds)
    }

    /// Get a description of the bounds
    pub fn describe(&self) -> String {
        match self.upper {
            Some(max) => format!("[{}, {}]", self.lower, max),
            None => format!(">= {}", self.lower),
        }
    }
}

/// Result of a bounds check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundsCheck {
    WithinBounds,
    BelowMinimum { value: f64, min: f64 },
    AboveMaximum { value: f64, max: f64 },
}

/// Per-kind configuration record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalProfile {
    pub kind: VitalKind,
    pub bounds: VitalBounds,
    /// Value the early-warning tolerance is a fraction of
    pub tolerance_reference: f64,
    /// Reported when the value is out of range
    pub critical_key: MessageKey,
    /// Reported when approaching the lower bound
    pub low_warning_key: MessageKey,
    /// Reported when approaching the upper bound, if there is one
    pub high_warning_key: Option<MessageKey>,
}

impl VitalProfile {
    /// Width of the early-warning band at either bound
    pub fn tolerance(&self) -> f64 {
        EARLY_WARNING_FRACTION * self.tolerance_reference
    }
}

static PROFILES: [VitalProfile; 3] = [
    VitalProfile {
        kind: VitalKind::Temperature,
        bounds: VitalBounds {
            lower: 95.0,
            upper: Some(102.0),
        },
        tolerance_reference: 102.0,
        critical_key: MessageKey::TemperatureCritical,
        low_warning_key: MessageKey::ApproachingHypothermia,
        high_warning_key: Some(MessageKey::ApproachingHyperthermia),
    },
    VitalProfile {
        kind: VitalKind::PulseRate,
        bounds: VitalBounds {
            lower: 60.0,
            upper: Some(100.0),
        },
        tolerance_reference: 100.0,
        critical_key: MessageKey::PulseRateOutOfRange,
        low_warning_key: MessageKey::ApproachingBradycardia,
        high_warning_key: Some(MessageKey::ApproachingTachycardia),
    },
    VitalProfile {
        kind: VitalKind::Spo2,
        bounds: VitalBounds {
            lower: 90.0,
            upper: None,
        },
        tolerance_reference: 100.0,
        critical_key: MessageKey::Spo2OutOfRange,
        low_warning_key: MessageKey::ApproachingHypoxemia,
        high_warning_key: None,
    },
];

/// Unit a temperature reading is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureUnit::Fahrenheit => write!(f, "fahrenheit"),
            TemperatureUnit::Celsius => write!(f, "celsius"),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            _ => Err(format!("Unknown temperature unit: {}", s)),
        }
    }
}

/// Convert a temperature reading to Fahrenheit
pub fn normalize_temperature(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => value,
        TemperatureUnit::Celsius => value * 9.0 / 5.0 + 32.0,
    }
}

/// Whether a reading in canonical units is within the kind's range
pub fn is_in_range(kind: VitalKind, value: f64) -> bool {
    kind.bounds().contains(value)
}

/// Temperature in Fahrenheit within [95, 102]
pub fn is_temperature_ok(temperature: f64) -> bool {
    is_in_range(VitalKind::Temperature, temperature)
}

/// Pulse rate within [60, 100] bpm
pub fn is_pulse_ok(pulse_rate: f64) -> bool {
    is_in_range(VitalKind::PulseRate, pulse_rate)
}

/// SpO2 of at least 90%
pub fn is_spo2_ok(spo2: f64) -> bool {
    is_in_range(VitalKind::Spo2, spo2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_boundaries() {
        assert!(is_temperature_ok(95.0));
        assert!(is_temperature_ok(102.0));
        assert!(!is_temperature_ok(94.9));
        assert!(!is_temperature_ok(102.1));
    }

    #[test]
    fn test_pulse_boundaries() {
        assert!(is_pulse_ok(60.0));
        assert!(is_pulse_ok(100.0));
        assert!(!is_pulse_ok(59.0));
        assert!(!is_pulse_ok(101.0));
    }

    #[test]
    fn test_spo2_has_no_upper_bound() {
        assert!(is_spo2_ok(90.0));
        assert!(is_spo2_ok(100.0));
        assert!(is_spo2_ok(1000.0));
        assert!(!is_spo2_ok(89.9));
    }

    #[test]
    fn test_nan_is_out_of_range() {
        for kind in VitalKind::ALL {
            assert!(!is_in_range(kind, f64::NAN));
        }
    }

    #[test]
    fn test_bounds_check_reports_side() {
        let bounds = VitalKind::PulseRate.bounds();
        assert_eq!(
            bounds.check(59.0),
            BoundsCheck::BelowMinimum {
                value: 59.0,
                min: 60.0
            }
        );
        assert_eq!(
            bounds.check(101.0),
            BoundsCheck::AboveMaximum {
                value: 101.0,
                max: 100.0
            }
        );
        assert_eq!(bounds.check(80.0), BoundsCheck::WithinBounds);
    }

    #[test]
    fn test_bounds_describe() {
        assert_eq!(VitalKind::Temperature.bounds().describe(), "[95, 102]");
        assert_eq!(VitalKind::Spo2.bounds().describe(), ">= 90");
    }

    #[test]
    fn test_profile_tolerances() {
        assert!((VitalKind::Temperature.profile().tolerance() - 1.53).abs() < 1e-9);
        assert!((VitalKind::PulseRate.profile().tolerance() - 1.5).abs() < 1e-9);
        assert!((VitalKind::Spo2.profile().tolerance() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_profiles_match_kinds() {
        for kind in VitalKind::ALL {
            assert_eq!(kind.profile().kind, kind);
        }
    }

    #[test]
    fn test_normalize_celsius() {
        assert_eq!(normalize_temperature(35.0, TemperatureUnit::Celsius), 95.0);
        assert_eq!(normalize_temperature(100.0, TemperatureUnit::Celsius), 212.0);
        assert_eq!(normalize_temperature(98.6, TemperatureUnit::Fahrenheit), 98.6);
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("C".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
        assert_eq!(
            "fahrenheit".parse::<TemperatureUnit>(),
            Ok(TemperatureUnit::Fahrenheit)
        );
        assert!("kelvin".parse::<TemperatureUnit>().is_err());
    }
}
