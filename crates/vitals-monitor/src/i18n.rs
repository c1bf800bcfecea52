//! Localized operator messages
//!
//! Lookup is keyed by an explicit [`Language`]; there is no process-wide
//! current language.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::notification::MessageKey;

/// Languages operator messages are available in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    German,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::German];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "english"),
            Language::German => write!(f, "german"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "de" | "german" | "deutsch" => Ok(Language::German),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

/// Display text for a message key
pub fn localize(language: Language, key: MessageKey) -> &'static str {
    match language {
        Language::English => english(key),
        Language::German => german(key),
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::TemperatureCritical => "Temperature is critical!",
        MessageKey::PulseRateOutOfRange => "Pulse Rate is out of range!",
        MessageKey::Spo2OutOfRange => "Oxygen Saturation out of range!",
        MessageKey::ApproachingHypothermia => "Warning: Approaching hypothermia",
        MessageKey::ApproachingHyperthermia => "Warning: Approaching hyperthermia",
        MessageKey::ApproachingBradycardia => "Warning: Approaching bradycardia",
        MessageKey::ApproachingTachycardia => "Warning: Approaching tachycardia",
        MessageKey::ApproachingHypoxemia => "Warning: Approaching hypoxemia",
    }
}

fn german(key: MessageKey) -> &'static str {
    match key {
        MessageKey::TemperatureCritical => "Temperatur ist kritisch!",
        MessageKey::PulseRateOutOfRange => "Pulsfrequenz außerhalb des Bereichs!",
        MessageKey::Spo2OutOfRange => "Sauerstoffsättigung außerhalb des Bereichs!",
        MessageKey::ApproachingHypothermia => "Warnung: Annäherung an Unterkühlung",
        MessageKey::ApproachingHyperthermia => "Warnung: Annäherung an Überhitzung",
        MessageKey::ApproachingBradycardia => "Warnung: Annäherung an Bradykardie",
        MessageKey::ApproachingTachycardia => "Warnung: Annäherung an Tachykardie",
        MessageKey::ApproachingHypoxemia => "Warnung: Annäherung an Hypoxämie",
    }
}
