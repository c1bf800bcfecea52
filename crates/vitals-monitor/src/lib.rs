//! Vitals Monitor
//!
//! Checks patient vital signs (temperature, pulse rate and blood oxygen
//! saturation) against fixed safe ranges, raises early warnings for
//! readings close to a limit, and renders alerts for an operator.
//!
//! ## Architecture
//!
//! 1. **Vitals** (`vitals`): vital sign kinds, their ranges, unit
//!    normalization and per-kind range predicates.
//!
//! 2. **Engine** (`engine/`): the pure evaluator and early-warning
//!    detector. Evaluation short-circuits on the first out-of-range
//!    reading and returns notifications instead of printing them.
//!
//! 3. **Notification** (`notification`) and **i18n** (`i18n`): message
//!    keys, severities and their English and German text.
//!
//! 4. **Alert** (`alert/`): console blinker, recording sink and a
//!    background dispatcher that keeps rendering off the evaluation path.
//!
//! 5. **Config**, **Telemetry** and **CLI**: layered configuration,
//!    Prometheus counters and the `vitals-monitor` command.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Check readings, temperature in Fahrenheit
//! vitals-monitor check --temperature 98.6 --pulse 72 --spo2 97
//!
//! # Celsius, German messages, JSON output
//! vitals-monitor check -t 37 -p 72 -s 97 --unit celsius --language de --format json
//!
//! # Show the acceptable ranges
//! vitals-monitor ranges
//! ```
//!
//! ## Example
//!
//! ```rust
//! use vitals_monitor::{evaluate, TemperatureUnit, VitalKind};
//!
//! let result = evaluate(94.0, 101.0, 89.0, TemperatureUnit::Fahrenheit);
//! assert!(!result.ok);
//! assert_eq!(result.failed, Some(VitalKind::Temperature));
//! ```

pub mod alert;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod monitor;
pub mod notification;
pub mod telemetry;
pub mod vitals;

pub use alert::{AlertDispatcher, AlertSink, ConsoleAlert, NullSink, RecordingSink};
pub use cli::{ExitCode, OutputFormat, VitalsCli, VitalsCommands};
pub use config::{AlertConfig, MonitorConfig};
pub use engine::{
    detect_warning, evaluate, vitals_ok, EarlyWarning, EvaluationResult, VitalReadings,
    VitalsEvaluator, WarningSide,
};
pub use error::{MonitorError, Result};
pub use i18n::{localize, Language};
pub use monitor::Monitor;
pub use notification::{MessageKey, Notification, Severity};
pub use telemetry::VitalsMetrics;
pub use vitals::{
    is_in_range, is_pulse_ok, is_spo2_ok, is_temperature_ok, normalize_temperature,
    TemperatureUnit, VitalBounds, VitalKind,
};

/// Crate version (from Cargo.toml)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI application
///
/// This is the main entry point for the CLI binary.
pub fn run_cli(cli: VitalsCli) -> ExitCode {
    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from_error(&e)
        }
    }
}
