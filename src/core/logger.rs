//! Named logger: filtering, message assembly and dispatch

use super::{
    buffer::with_buffer,
    config::LoggerConfig,
    error::{FormatError, Result},
    format_arg::FormatArg,
    format_policy::FormatErrorAction,
    metrics::LoggerMetrics,
    printf,
    severity::Severity,
};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// A named front end over a shared [`LoggerConfig`].
///
/// Every accepted call produces one line of the form
/// `"<name>: [WARNING: |ERROR: ]<formatted template>"` and hands it to each
/// configured emitter in order.
///
/// # Example
///
/// ```
/// use tagged_logger::prelude::*;
///
/// let config = LoggerConfig::builder()
///     .level(Severity::Debug)
///     .emitter(ConsoleEmitter::with_colors(false))
///     .build();
/// let logger = Logger::new("db", config);
///
/// logger.i("connected to %s:%d", &args!["localhost", 5432]).unwrap();
/// logger.v("dropped: below threshold", &[]).unwrap();
/// ```
#[derive(Clone)]
pub struct Logger {
    name: Arc<str>,
    config: Arc<LoggerConfig>,
    /// Shared with clones of this logger
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<String>, config: Arc<LoggerConfig>) -> Self {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            config,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &Arc<LoggerConfig> {
        &self.config
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Whether a message at `level` would pass the current threshold.
    #[inline]
    pub fn is_loggable(&self, level: Severity) -> bool {
        level >= self.config.level()
    }

    pub fn log(&self, level: Severity, message: &str, args: &[FormatArg<'_>]) -> Result<()> {
        self.dispatch(level, None, message, args)
    }

    /// Log with an attached error, passed through to every emitter untouched.
    pub fn log_with(
        &self,
        level: Severity,
        error: &(dyn Error + 'static),
        message: &str,
        args: &[FormatArg<'_>],
    ) -> Result<()> {
        self.dispatch(level, Some(error), message, args)
    }

    #[inline]
    pub fn v(&self, message: &str, args: &[FormatArg<'_>]) -> Result<()> {
        self.log(Severity::Verbose, message, args)
    }

    #[inline]
    pub fn v_with(
        &self,
        error: &(dyn Error + 'static),
        message: &str,
        args: &[FormatArg<'_>],
    ) -> Result<()> {
        self.log_with(Severity::Verbose, error, message, args)
    }

    #[inline]
    pub fn d(&self, message: &str, args: &[FormatArg<'_>]) -> Result<()> {
        self.log(Severity::Debug, message, args)
    }

    #[inline]
    pub fn d_with(
        &self,
        error: &(dyn Error + 'static),
        message: &str,
        args: &[FormatArg<'_>],
    ) -> Result<()> {
        self.log_with(Severity::Debug, error, message, args)
    }

    #[inline]
    pub fn i(&self, message: &str, args: &[FormatArg<'_>]) -> Result<()> {
        self.log(Severity::Info, message, args)
    }

    #[inline]
    pub fn i_with(
        &self,
        error: &(dyn Error + 'static),
        message: &str,
        args: &[FormatArg<'_>],
    ) -> Result<()> {
        self.log_with(Severity::Info, error, message, args)
    }

    #[inline]
    pub fn w(&self, message: &str, args: &[FormatArg<'_>]) -> Result<()> {
        self.log(Severity::Warning, message, args)
    }

    #[inline]
    pub fn w_with(
        &self,
        error: &(dyn Error + 'static),
        message: &str,
        args: &[FormatArg<'_>],
    ) -> Result<()> {
        self.log_with(Severity::Warning, error, message, args)
    }

    #[inline]
    pub fn e(&self, message: &str, args: &[FormatArg<'_>]) -> Result<()> {
        self.log(Severity::Error, message, args)
    }

    #[inline]
    pub fn e_with(
        &self,
        error: &(dyn Error + 'static),
        message: &str,
        args: &[FormatArg<'_>],
    ) -> Result<()> {
        self.log_with(Severity::Error, error, message, args)
    }

    fn dispatch(
        &self,
        level: Severity,
        error: Option<&(dyn Error + 'static)>,
        message: &str,
        args: &[FormatArg<'_>],
    ) -> Result<()> {
        if !self.is_loggable(level) {
            self.metrics.record_filtered();
            return Ok(());
        }

        let assembled = self.assemble(level, message, args)?;

        // One snapshot per call; a concurrent replacement applies to later calls
        let emitters = self.config.emitters();
        for emitter in emitters.iter() {
            if let Err(e) = emitter.emit(level, &assembled, error) {
                self.metrics.record_emitter_failure();
                return Err(e);
            }
        }

        self.metrics.record_emitted();
        Ok(())
    }

    /// Build `"<name>: [TAG: ]<formatted>"` in the per-thread buffer.
    fn assemble(&self, level: Severity, message: &str, args: &[FormatArg<'_>]) -> Result<String> {
        let action = self.config.format_error_action();

        with_buffer(|buf| {
            buf.push_str(&self.name);
            buf.push_str(": ");
            if let Some(tag) = level.tag() {
                buf.push_str(tag);
                buf.push_str(": ");
            }
            let prefix_len = buf.len();

            if let Err(err) = printf::format_into(buf, message, args) {
                self.metrics.record_format_failure();
                match action {
                    FormatErrorAction::Throw => return Err(err.into()),
                    FormatErrorAction::AppendAsString => {
                        buf.truncate(prefix_len);
                        append_as_string(buf, message, args);
                    }
                }
            }

            Ok(buf.clone())
        })
    }
}

/// `template (arg1, arg2, ...)`; an argument that fails to render is
/// replaced by the description of its failure.
fn append_as_string(buf: &mut String, template: &str, args: &[FormatArg<'_>]) {
    buf.push_str(template);
    buf.push_str(" (");
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            buf.push_str(", ");
        }
        let mark = buf.len();
        if let Err(err) = arg.write_plain(buf) {
            buf.truncate(mark);
            buf.push_str(&FormatError::Display(err).to_string());
        }
    }
    buf.push(')');
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("config", &self.config)
            .finish()
    }
}
