//! CLI command definitions for the Vitals Monitor
//!
//! Provides Clap-based commands for checking a set of readings and
//! listing the acceptable ranges.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use super::output::{render_ranges, CheckOutput, OutputFormat, RangeOutput};
use super::ExitCode;
use crate::alert::NullSink;
use crate::config::MonitorConfig;
use crate::engine::VitalReadings;
use crate::error::{MonitorError, Result};
use crate::i18n::Language;
use crate::monitor::Monitor;
use crate::telemetry::VitalsMetrics;
use crate::vitals::TemperatureUnit;

/// Vitals Monitor CLI
///
/// Check patient vital signs against their acceptable ranges.
#[derive(Parser, Debug)]
#[command(name = "vitals-monitor")]
#[command(about = "Vitals Monitor - Check patient vitals against safe ranges", long_about = None)]
#[command(version)]
pub struct VitalsCli {
    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a configuration file (toml, yaml or json)
    #[arg(long, global = true, env = "VITALS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: VitalsCommands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum VitalsCommands {
    /// Check one set of readings
    ///
    /// Exits 0 when every vital is in range, 1 when one is critical and 2
    /// when all are in range but some are close to a limit.
    Check(CheckArgs),

    /// Show the acceptable range and warning band of every vital sign
    Ranges {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Arguments of the `check` command
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Body temperature
    #[arg(short, long, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Pulse rate in beats per minute
    #[arg(short, long, allow_negative_numbers = true)]
    pub pulse: f64,

    /// Blood oxygen saturation in percent
    #[arg(short, long, allow_negative_numbers = true)]
    pub spo2: f64,

    /// Unit of the temperature reading (fahrenheit, celsius)
    #[arg(short, long)]
    pub unit: Option<TemperatureUnit>,

    /// Language of operator messages (english, german)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Output format for the check result
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Print alert messages without the blinking indicator
    #[arg(long)]
    pub no_blink: bool,

    /// Print Prometheus metrics after the check
    #[arg(long)]
    pub metrics: bool,
}

impl CheckArgs {
    /// Reject readings that are not finite numbers
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("temperature", self.temperature),
            ("pulse", self.pulse),
            ("spo2", self.spo2),
        ] {
            if !value.is_finite() {
                return Err(MonitorError::invalid_input(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Readings in the unit chosen on the command line or in `config`
    pub fn readings(&self, config: &MonitorConfig) -> VitalReadings {
        VitalReadings::new(self.temperature, self.pulse, self.spo2)
            .with_unit(self.unit.unwrap_or(config.temperature_unit))
    }

    /// Whether metrics are collected and printed after the check
    ///
    /// `--quiet` wins over `--metrics`.
    pub fn prints_metrics(&self, quiet: bool) -> bool {
        self.metrics && !quiet
    }

    /// Apply command-line overrides on top of loaded configuration
    pub fn apply_to(&self, config: &mut MonitorConfig) {
        if let Some(unit) = self.unit {
            config.temperature_unit = unit;
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        if self.no_blink {
            config.alert.blink_phases = 0;
        }
        // Console alerts would corrupt machine-readable output
        if self.format != OutputFormat::Table {
            config.alert.enabled = false;
        }
    }
}

/// Execute the check command
pub fn execute_check(
    args: CheckArgs,
    config_path: Option<PathBuf>,
    quiet: bool,
) -> Result<ExitCode> {
    args.validate()?;
    let mut config = MonitorConfig::load(config_path.as_deref())?;
    args.apply_to(&mut config);
    if quiet {
        config.alert.enabled = false;
    }

    let metrics = if args.prints_metrics(quiet) {
        Some(Arc::new(VitalsMetrics::new()?))
    } else {
        None
    };

    let mut monitor = if config.alert.enabled {
        Monitor::from_config(&config)
    } else {
        Monitor::new(Arc::new(NullSink))
    };
    if let Some(metrics) = &metrics {
        monitor = monitor.with_metrics(Arc::clone(metrics));
    }

    let readings = args.readings(&config);
    let result = monitor.check(&readings);

    if !quiet {
        CheckOutput::from_result(&readings, &result, config.language).render(args.format)?;
    }

    if let Some(metrics) = &metrics {
        print!("{}", metrics.gather_text()?);
    }

    Ok(ExitCode::from_evaluation(&result))
}

/// Execute the ranges command
pub fn execute_ranges(format: OutputFormat) -> Result<ExitCode> {
    render_ranges(&RangeOutput::all(), format)?;
    Ok(ExitCode::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = VitalsCli::try_parse_from([
            "vitals-monitor",
            "check",
            "--temperature",
            "37",
            "--pulse",
            "72",
            "--spo2",
            "97",
            "--unit",
            "celsius",
            "--language",
            "de",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            VitalsCommands::Check(args) => {
                assert_eq!(args.temperature, 37.0);
                assert_eq!(args.unit, Some(TemperatureUnit::Celsius));
                assert_eq!(args.language, Some(Language::German));
                assert_eq!(args.format, OutputFormat::Json);
                assert!(!args.no_blink);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_short_flags_and_globals() {
        let cli = VitalsCli::try_parse_from([
            "vitals-monitor", "-vv", "check", "-t", "98.6", "-p", "72", "-s", "97", "-q",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_missing_reading_is_rejected() {
        let result =
            VitalsCli::try_parse_from(["vitals-monitor", "check", "--temperature", "98.6"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_unit_is_rejected() {
        let result = VitalsCli::try_parse_from([
            "vitals-monitor", "check", "-t", "300", "-p", "72", "-s", "97", "-u", "kelvin",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_finite_reading_is_invalid_input() {
        let cli = VitalsCli::try_parse_from([
            "vitals-monitor", "check", "-t", "NaN", "-p", "72", "-s", "97",
        ])
        .unwrap();
        let VitalsCommands::Check(args) = cli.command else {
            panic!("expected check command");
        };
        let err = execute_check(args, None, true).unwrap_err();
        assert!(matches!(err, MonitorError::InvalidInput(_)));
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let args = CheckArgs {
            temperature: 37.0,
            pulse: 72.0,
            spo2: 97.0,
            unit: Some(TemperatureUnit::Celsius),
            language: None,
            format: OutputFormat::Yaml,
            no_blink: true,
            metrics: false,
        };
        let mut config = MonitorConfig::default();
        args.apply_to(&mut config);

        assert_eq!(config.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(config.language, Language::English);
        assert_eq!(config.alert.blink_phases, 0);
        assert!(!config.alert.enabled);
        assert_eq!(args.readings(&config).unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn test_quiet_suppresses_metrics() {
        let cli = VitalsCli::try_parse_from([
            "vitals-monitor", "check", "-t", "98.6", "-p", "72", "-s", "97", "--metrics",
        ])
        .unwrap();
        let VitalsCommands::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert!(args.prints_metrics(false));
        assert!(!args.prints_metrics(true));
    }

    #[test]
    fn test_unit_falls_back_to_config() {
        let args = CheckArgs {
            temperature: 37.0,
            pulse: 72.0,
            spo2: 97.0,
            unit: None,
            language: None,
            format: OutputFormat::Table,
            no_blink: false,
            metrics: false,
        };
        let config = MonitorConfig {
            temperature_unit: TemperatureUnit::Celsius,
            ..Default::default()
        };
        assert_eq!(args.readings(&config).unit, TemperatureUnit::Celsius);
    }
}
