//! Console emitter implementation

use crate::core::{Emitter, Result, Severity};
use colored::Colorize;
use std::error::Error;
use std::io::Write;

/// Writes `[LEVEL] message` lines, WARNING and ERROR to stderr and the rest
/// to stdout. An attached error is appended as `: <error>`.
pub struct ConsoleEmitter {
    use_colors: bool,
}

impl ConsoleEmitter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Render a line without writing it.
    pub fn format_line(
        &self,
        level: Severity,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) -> String {
        let level_str = if self.use_colors {
            format!("{:7}", level.to_str())
                .color(level.color_code())
                .to_string()
        } else {
            format!("{:7}", level.to_str())
        };

        match error {
            Some(err) => format!("[{}] {}: {}", level_str, message, err),
            None => format!("[{}] {}", level_str, message),
        }
    }
}

impl Default for ConsoleEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for ConsoleEmitter {
    fn emit(
        &self,
        level: Severity,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) -> Result<()> {
        let output = self.format_line(level, message, error);

        // Route Warning and Error levels to stderr, others to stdout
        match level {
            Severity::Warning | Severity::Error => {
                let mut stderr = std::io::stderr().lock();
                writeln!(stderr, "{}", output)?;
            }
            _ => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", output)?;
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
