//! Vitals Monitor CLI
//!
//! # Exit Codes
//!
//! - 0: All vitals in range
//! - 1: A vital sign is out of range
//! - 2: All vitals in range, with early warnings
//! - 3: Invalid input or arguments
//! - 4: Configuration file missing or malformed
//! - 10: Internal error

use clap::Parser;
use tracing::Level;
use vitals_monitor::{run_cli, ExitCode, VitalsCli};

fn main() {
    // Clap's own exit status for bad arguments collides with the warning code
    let cli = match VitalsCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::InvalidInput
            } else {
                ExitCode::Success
            };
            std::process::exit(code.into());
        }
    };

    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}
