//! Console alert renderer
//!
//! Prints the localized message for every notification. Critical
//! notifications are followed by a blinking indicator that alternates
//! between `* ` and ` *` for a fixed number of phases, then the line is
//! cleared. The blink blocks the calling thread.

use colored::Colorize;
use std::io::{self, Write};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use super::AlertSink;
use crate::config::AlertConfig;
use crate::error::{MonitorError, Result};
use crate::i18n::{localize, Language};
use crate::notification::{Notification, Severity};

const PHASE_FRAMES: [&str; 2] = ["\r* ", "\r *"];
const CLEAR_LINE: &str = "\r  \r";

/// Console renderer writing to any [`Write`] target
pub struct ConsoleAlert<W: Write + Send> {
    writer: Mutex<W>,
    language: Language,
    blink_phases: u32,
    phase_duration: Duration,
}

impl ConsoleAlert<io::Stdout> {
    /// Renderer on standard output using the given alert settings
    pub fn stdout(language: Language, config: &AlertConfig) -> Self {
        Self::new(io::stdout(), language)
            .with_blink(config.blink_phases, config.phase_duration())
    }
}

impl<W: Write + Send> ConsoleAlert<W> {
    /// Renderer with the reference blink of 12 half-second phases
    pub fn new(writer: W, language: Language) -> Self {
        let defaults = AlertConfig::default();
        Self {
            writer: Mutex::new(writer),
            language,
            blink_phases: defaults.blink_phases,
            phase_duration: defaults.phase_duration(),
        }
    }

    /// Set the number of blink phases and the length of each
    pub fn with_blink(mut self, phases: u32, phase_duration: Duration) -> Self {
        self.blink_phases = phases;
        self.phase_duration = phase_duration;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Total time a critical alert blocks for, saturating at `Duration::MAX`
    pub fn blink_duration(&self) -> Duration {
        self.phase_duration.saturating_mul(self.blink_phases)
    }

    /// Take the writer back, e.g. to inspect captured output
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| MonitorError::Internal(format!("Console writer poisoned: {}", e)))
    }

    fn render(&self, out: &mut W, notification: &Notification) -> io::Result<()> {
        let text = localize(self.language, notification.key);
        match notification.severity {
            Severity::Critical => {
                writeln!(out, "{}", text.red().bold())?;
                self.blink(out)
            }
            Severity::Warning => {
                writeln!(out, "{}", text.yellow())?;
                out.flush()
            }
        }
    }

    fn blink(&self, out: &mut W) -> io::Result<()> {
        for phase in 0..self.blink_phases {
            write!(out, "{}", PHASE_FRAMES[(phase % 2) as usize])?;
            out.flush()?;
            if !self.phase_duration.is_zero() {
                thread::sleep(self.phase_duration);
            }
        }
        write!(out, "{}", CLEAR_LINE)?;
        out.flush()
    }
}

impl<W: Write + Send> AlertSink for ConsoleAlert<W> {
    fn deliver(&self, notification: &Notification) -> Result<()> {
        let mut out = self
            .writer
            .lock()
            .map_err(|e| MonitorError::Internal(format!("Console writer poisoned: {}", e)))?;

        self.render(&mut *out, notification).map_err(|e| {
            MonitorError::alert(format!("Failed to write {} alert: {}", notification.key, e))
        })?;

        tracing::debug!(
            key = %notification.key,
            severity = %notification.severity,
            "Rendered console alert"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
