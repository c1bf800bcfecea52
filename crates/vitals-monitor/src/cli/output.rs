//! Output formatting for the Vitals Monitor CLI
//!
//! Provides JSON, YAML and human-readable table output for evaluation
//! results and the configured ranges.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::engine::{EvaluationResult, VitalReadings};
use crate::error::{MonitorError, Result};
use crate::i18n::{localize, Language};
use crate::notification::{Notification, Severity};
use crate::vitals::VitalKind;

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table format with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format
    Yaml,
}

/// Per-reading status in the check output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    Ok,
    Warning,
    Critical,
    /// Skipped because an earlier vital sign failed
    NotEvaluated,
}

impl ReadingStatus {
    fn label(self) -> colored::ColoredString {
        match self {
            ReadingStatus::Ok => "OK".green().bold(),
            ReadingStatus::Warning => "WARNING".yellow().bold(),
            ReadingStatus::Critical => "CRITICAL".red().bold(),
            ReadingStatus::NotEvaluated => "SKIPPED".dimmed(),
        }
    }
}

/// Check output structure for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutput {
    /// Whether all vitals are in range
    pub ok: bool,
    /// First vital sign out of range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<VitalKind>,
    /// One entry per vital sign, in evaluation order
    pub readings: Vec<ReadingOutput>,
    /// Notifications in emission order
    pub notifications: Vec<NotificationOutput>,
    /// Summary message
    pub summary: String,
}

/// A single reading in the check output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingOutput {
    pub kind: VitalKind,
    /// Value in canonical units
    pub value: f64,
    pub unit: String,
    pub range: String,
    pub status: ReadingStatus,
}

/// A single notification in the check output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationOutput {
    pub severity: Severity,
    pub code: String,
    pub kind: VitalKind,
    pub message: String,
}

impl NotificationOutput {
    fn from_notification(notification: &Notification, language: Language) -> Self {
        Self {
            severity: notification.severity,
            code: notification.key.code().to_string(),
            kind: notification.kind,
            message: localize(language, notification.key).to_string(),
        }
    }
}

impl CheckOutput {
    /// Create output from an evaluation
    pub fn from_result(
        readings: &VitalReadings,
        result: &EvaluationResult,
        language: Language,
    ) -> Self {
        let mut evaluated = true;
        let readings_out = VitalKind::ALL
            .iter()
            .map(|&kind| {
                let value = match kind {
                    VitalKind::Temperature => result.temperature_f,
                    VitalKind::PulseRate => readings.pulse_rate,
                    VitalKind::Spo2 => readings.spo2,
                };
                let status = if !evaluated {
                    ReadingStatus::NotEvaluated
                } else if result.failed == Some(kind) {
                    evaluated = false;
                    ReadingStatus::Critical
                } else if result.warnings().any(|n| n.kind == kind) {
                    ReadingStatus::Warning
                } else {
                    ReadingStatus::Ok
                };
                ReadingOutput {
                    kind,
                    value,
                    unit: kind.unit_label().to_string(),
                    range: kind.bounds().describe(),
                    status,
                }
            })
            .collect();

        let warning_count = result.warnings().count();
        let summary = match result.failed {
            Some(kind) => format!("Vitals check failed: {} is out of range", kind),
            None if warning_count > 0 => format!(
                "All vitals in range with {} early warning(s)",
                warning_count
            ),
            None => "All vitals in range".to_string(),
        };

        Self {
            ok: result.ok,
            failed: result.failed,
            readings: readings_out,
            notifications: result
                .notifications
                .iter()
                .map(|n| NotificationOutput::from_notification(n, language))
                .collect(),
            summary,
        }
    }

    /// Render output in the specified format
    pub fn render(&self, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => render_json(self),
            OutputFormat::Yaml => render_yaml(self),
            OutputFormat::Table => self.render_table(),
        }
    }

    fn render_table(&self) -> Result<()> {
        let mut stdout = io::stdout();

        writeln!(stdout).ok();
        writeln!(stdout, "{}", "Vitals Check".cyan().bold()).ok();
        writeln!(stdout, "{}", "=".repeat(60)).ok();
        writeln!(stdout).ok();

        let status_icon = if self.ok { "+".green() } else { "x".red() };
        writeln!(stdout, "{} {}", status_icon, self.summary).ok();
        writeln!(stdout).ok();

        writeln!(stdout, "{}", "Readings:".cyan().bold()).ok();
        writeln!(stdout, "{}", "-".repeat(60)).ok();
        for reading in &self.readings {
            writeln!(
                stdout,
                "  {:<12} {:>8.1} {:<4} {:<12} {}",
                reading.kind.to_string(),
                reading.value,
                reading.unit,
                reading.range.dimmed(),
                reading.status.label()
            )
            .ok();
        }

        if !self.notifications.is_empty() {
            writeln!(stdout).ok();
            writeln!(stdout, "{}", "Notifications:".cyan().bold()).ok();
            writeln!(stdout, "{}", "-".repeat(60)).ok();
            for notification in &self.notifications {
                let icon = match notification.severity {
                    Severity::Critical => "x".red(),
                    Severity::Warning => "!".yellow(),
                };
                writeln!(
                    stdout,
                    "{} [{}] {}",
                    icon,
                    notification.code.dimmed(),
                    notification.message
                )
                .ok();
            }
        }

        stdout.flush().ok();
        Ok(())
    }
}

/// Acceptable range and warning band of one vital sign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeOutput {
    pub kind: VitalKind,
    pub range: String,
    pub unit: String,
    pub tolerance: f64,
    pub low_warning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_warning: Option<String>,
}

impl RangeOutput {
    /// Every vital sign, in evaluation order
    pub fn all() -> Vec<Self> {
        VitalKind::ALL
            .iter()
            .map(|&kind| {
                let profile = kind.profile();
                Self {
                    kind,
                    range: profile.bounds.describe(),
                    unit: kind.unit_label().to_string(),
                    tolerance: profile.tolerance(),
                    low_warning: profile.low_warning_key.code().to_string(),
                    high_warning: profile.high_warning_key.map(|k| k.code().to_string()),
                }
            })
            .collect()
    }
}

/// Render the range table in the specified format
pub fn render_ranges(ranges: &[RangeOutput], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => render_json(&ranges),
        OutputFormat::Yaml => render_yaml(&ranges),
        OutputFormat::Table => {
            println!("{}", "Acceptable Ranges".cyan().bold());
            println!("{}", "=".repeat(60));
            for range in ranges {
                println!(
                    "  {:<12} {:<12} {:<4} warn within {:.2}",
                    range.kind.to_string(),
                    range.range,
                    range.unit,
                    range.tolerance
                );
            }
            Ok(())
        }
    }
}

fn render_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| MonitorError::Serialization(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn render_yaml<T: Serialize>(value: &T) -> Result<()> {
    let yaml =
        serde_yaml::to_string(value).map_err(|e| MonitorError::Serialization(e.to_string()))?;
    println!("{}", yaml);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::VitalsEvaluator;

    fn check(readings: VitalReadings) -> CheckOutput {
        let result = VitalsEvaluator::new().evaluate(&readings);
        CheckOutput::from_result(&readings, &result, Language::English)
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_all_ok_summary() {
        let output = check(VitalReadings::new(98.6, 72.0, 97.0));
        assert!(output.ok);
        assert_eq!(output.summary, "All vitals in range");
        assert!(output
            .readings
            .iter()
            .all(|r| r.status == ReadingStatus::Ok));
    }

    #[test]
    fn test_statuses_after_short_circuit() {
        let output = check(VitalReadings::new(98.6, 40.0, 50.0));
        let statuses: Vec<_> = output.readings.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                ReadingStatus::Ok,
                ReadingStatus::Critical,
                ReadingStatus::NotEvaluated
            ]
        );
        assert_eq!(output.summary, "Vitals check failed: pulse_rate is out of range");
        assert_eq!(output.notifications[0].message, "Pulse Rate is out of range!");
    }

    #[test]
    fn test_warning_summary() {
        let output = check(VitalReadings::new(95.1, 72.0, 97.0));
        assert!(output.ok);
        assert_eq!(output.readings[0].status, ReadingStatus::Warning);
        assert_eq!(output.summary, "All vitals in range with 1 early warning(s)");
    }

    #[test]
    fn test_json_shape() {
        let output = check(VitalReadings::new(94.0, 72.0, 97.0));
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["failed"], "temperature");
        assert_eq!(json["notifications"][0]["code"], "temperature_critical");
        assert_eq!(json["readings"][2]["status"], "not_evaluated");
    }

    #[test]
    fn test_ranges() {
        let ranges = RangeOutput::all();
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0].range, "[95, 102]");
        assert_eq!(ranges[2].high_warning, None);
    }
}
