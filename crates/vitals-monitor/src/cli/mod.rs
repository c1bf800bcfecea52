//! CLI module for the Vitals Monitor
//!
//! Command-line host around the evaluator: checks a set of readings,
//! renders alerts on the console and reports the outcome through the
//! process exit code.

pub mod commands;
pub mod output;

pub use commands::{CheckArgs, VitalsCli, VitalsCommands};
pub use output::{CheckOutput, OutputFormat};

use crate::engine::EvaluationResult;
use crate::error::{MonitorError, Result};

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// All vitals in range
    Success = 0,
    /// A vital sign is out of range
    VitalsCritical = 1,
    /// All vitals in range, with early warnings
    VitalsWarning = 2,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// Configuration file missing or malformed
    ConfigError = 4,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from an evaluation
    pub fn from_evaluation(result: &EvaluationResult) -> Self {
        if !result.ok {
            ExitCode::VitalsCritical
        } else if result.has_warnings() {
            ExitCode::VitalsWarning
        } else {
            ExitCode::Success
        }
    }

    /// Determine exit code from an error
    pub fn from_error(error: &MonitorError) -> Self {
        match error {
            MonitorError::InvalidInput(_) => ExitCode::InvalidInput,
            MonitorError::Config(_) | MonitorError::Parse(_) => ExitCode::ConfigError,
            _ => ExitCode::InternalError,
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub fn run(cli: VitalsCli) -> Result<ExitCode> {
    match cli.command {
        VitalsCommands::Check(args) => commands::execute_check(args, cli.config, cli.quiet),
        VitalsCommands::Ranges { format } => commands::execute_ranges(format),
    }
}
