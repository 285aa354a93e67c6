//! Bridge emitter forwarding into the `tracing` ecosystem

use crate::core::{Emitter, Result, Severity};
use std::error::Error;

/// Re-emits each line as a `tracing` event with target `tagged_logger`.
///
/// | Severity  | tracing level |
/// |-----------|---------------|
/// | `Verbose` | `TRACE`       |
/// | `Debug`   | `DEBUG`       |
/// | `Info`    | `INFO`        |
/// | `Warning` | `WARN`        |
/// | `Error`   | `ERROR`       |
///
/// The message is the event body; an attached error becomes the `error` field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEmitter;

impl TracingEmitter {
    pub fn new() -> Self {
        Self
    }
}

// event! needs the level as a constant, hence one expansion per level
macro_rules! forward {
    ($level:expr, $message:expr, $error:expr) => {
        match $error {
            Some(err) => {
                ::tracing::event!(target: "tagged_logger", $level, error = %err, "{}", $message)
            }
            None => ::tracing::event!(target: "tagged_logger", $level, "{}", $message),
        }
    };
}

impl Emitter for TracingEmitter {
    fn emit(
        &self,
        level: Severity,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) -> Result<()> {
        match level {
            Severity::Verbose => forward!(::tracing::Level::TRACE, message, error),
            Severity::Debug => forward!(::tracing::Level::DEBUG, message, error),
            Severity::Info => forward!(::tracing::Level::INFO, message, error),
            Severity::Warning => forward!(::tracing::Level::WARN, message, error),
            Severity::Error => forward!(::tracing::Level::ERROR, message, error),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "tracing"
    }
}
