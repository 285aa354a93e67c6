//! Shared, live logger configuration

use super::{emitter::Emitter, format_policy::FormatErrorAction, severity::Severity};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Snapshot of the emitter list taken by a single log call.
pub type EmitterList = Arc<[Arc<dyn Emitter>]>;

/// Mutable configuration shared by every [`Logger`](super::Logger) built on it.
///
/// Each field sits behind its own lock, so readers never observe a torn
/// value. There is no atomicity across fields. Loggers read the fields on
/// every call, so changes apply to loggers that already exist.
///
/// # Example
///
/// ```
/// use tagged_logger::prelude::*;
///
/// let config = LoggerConfig::builder().level(Severity::Info).build();
/// let logger = Logger::new("net", config.clone());
///
/// config.set_level(Severity::Debug);
/// assert!(logger.is_loggable(Severity::Debug));
/// ```
pub struct LoggerConfig {
    level: RwLock<Severity>,
    emitters: RwLock<EmitterList>,
    format_error_action: RwLock<FormatErrorAction>,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: RwLock::new(Severity::Info),
            emitters: RwLock::new(Arc::from(Vec::<Arc<dyn Emitter>>::new())),
            format_error_action: RwLock::new(FormatErrorAction::Throw),
        }
    }

    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    #[inline]
    pub fn level(&self) -> Severity {
        *self.level.read()
    }

    pub fn set_level(&self, level: Severity) {
        *self.level.write() = level;
    }

    /// Current emitters; later replacements do not affect the returned list.
    #[inline]
    pub fn emitters(&self) -> EmitterList {
        Arc::clone(&self.emitters.read())
    }

    /// Replace the whole emitter list in one step.
    pub fn set_emitters(&self, emitters: Vec<Arc<dyn Emitter>>) {
        *self.emitters.write() = Arc::from(emitters);
    }

    /// Append an emitter; in-flight calls keep the list they started with.
    pub fn add_emitter(&self, emitter: Arc<dyn Emitter>) {
        let mut guard = self.emitters.write();
        let mut next: Vec<Arc<dyn Emitter>> = guard.iter().cloned().collect();
        next.push(emitter);
        *guard = Arc::from(next);
    }

    pub fn clear_emitters(&self) {
        self.set_emitters(Vec::new());
    }

    pub fn emitter_count(&self) -> usize {
        self.emitters.read().len()
    }

    #[inline]
    pub fn format_error_action(&self) -> FormatErrorAction {
        *self.format_error_action.read()
    }

    pub fn set_format_error_action(&self, action: FormatErrorAction) {
        *self.format_error_action.write() = action;
    }

    /// Apply deserialized settings on top of this config. Emitters are untouched.
    pub fn apply_settings(&self, settings: &LoggerSettings) {
        self.set_level(settings.level);
        self.set_format_error_action(settings.format_error_action);
    }

    /// Current scalar settings.
    pub fn settings(&self) -> LoggerSettings {
        LoggerSettings {
            level: self.level(),
            format_error_action: self.format_error_action(),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let emitters = self.emitters();
        let names: Vec<&str> = emitters.iter().map(|e| e.name()).collect();
        f.debug_struct("LoggerConfig")
            .field("level", &self.level())
            .field("emitters", &names)
            .field("format_error_action", &self.format_error_action())
            .finish()
    }
}

/// Serializable subset of [`LoggerConfig`] for embedding in application settings.
///
/// ```
/// use tagged_logger::{LoggerSettings, Severity, FormatErrorAction};
///
/// let settings = LoggerSettings::default();
/// assert_eq!(settings.level, Severity::Info);
/// assert_eq!(settings.format_error_action, FormatErrorAction::Throw);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    pub level: Severity,
    pub format_error_action: FormatErrorAction,
}

/// Builder for constructing a shared [`LoggerConfig`]
///
/// # Example
/// ```
/// use tagged_logger::prelude::*;
///
/// let config = LoggerConfig::builder()
///     .level(Severity::Debug)
///     .emitter(ConsoleEmitter::new())
///     .format_error_action(FormatErrorAction::AppendAsString)
///     .build();
///
/// assert_eq!(config.emitter_count(), 1);
/// ```
pub struct ConfigBuilder {
    level: Severity,
    emitters: Vec<Arc<dyn Emitter>>,
    format_error_action: FormatErrorAction,
}

impl ConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: Severity::Info,
            emitters: Vec::new(),
            format_error_action: FormatErrorAction::Throw,
        }
    }

    /// Set minimum level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Add an emitter
    #[must_use = "builder methods return a new value"]
    pub fn emitter<E: Emitter + 'static>(mut self, emitter: E) -> Self {
        self.emitters.push(Arc::new(emitter));
        self
    }

    /// Add an emitter that is also held elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_emitter(mut self, emitter: Arc<dyn Emitter>) -> Self {
        self.emitters.push(emitter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn format_error_action(mut self, action: FormatErrorAction) -> Self {
        self.format_error_action = action;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn settings(mut self, settings: LoggerSettings) -> Self {
        self.level = settings.level;
        self.format_error_action = settings.format_error_action;
        self
    }

    /// Build the shared config
    pub fn build(self) -> Arc<LoggerConfig> {
        Arc::new(LoggerConfig {
            level: RwLock::new(self.level),
            emitters: RwLock::new(Arc::from(self.emitters)),
            format_error_action: RwLock::new(self.format_error_action),
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;
    use std::error::Error;

    struct Named(&'static str);

    impl Emitter for Named {
        fn emit(&self, _: Severity, _: &str, _: Option<&(dyn Error + 'static)>) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            self.0
        }
    }

    fn names(list: &EmitterList) -> Vec<String> {
        list.iter().map(|e| e.name().to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.level(), Severity::Info);
        assert_eq!(config.emitter_count(), 0);
        assert_eq!(config.format_error_action(), FormatErrorAction::Throw);
    }

    #[test]
    fn test_builder() {
        let config = LoggerConfig::builder()
            .level(Severity::Verbose)
            .emitter(Named("a"))
            .shared_emitter(Arc::new(Named("b")))
            .format_error_action(FormatErrorAction::AppendAsString)
            .build();

        assert_eq!(config.level(), Severity::Verbose);
        assert_eq!(names(&config.emitters()), vec!["a", "b"]);
        assert_eq!(
            config.format_error_action(),
            FormatErrorAction::AppendAsString
        );
    }

    #[test]
    fn test_snapshot_unaffected_by_replacement() {
        let config = LoggerConfig::builder().emitter(Named("a")).build();
        let snapshot = config.emitters();

        config.set_emitters(vec![Arc::new(Named("x")) as Arc<dyn Emitter>, Arc::new(Named("y"))]);
        config.add_emitter(Arc::new(Named("z")));

        assert_eq!(names(&snapshot), vec!["a"]);
        assert_eq!(names(&config.emitters()), vec!["x", "y", "z"]);

        config.clear_emitters();
        assert_eq!(config.emitter_count(), 0);
    }

    #[test]
    fn test_settings_roundtrip() {
        let config = LoggerConfig::new();
        let settings = LoggerSettings {
            level: Severity::Warning,
            format_error_action: FormatErrorAction::AppendAsString,
        };
        config.apply_settings(&settings);
        assert_eq!(config.settings(), settings);
    }

    #[test]
    fn test_debug_lists_emitter_names() {
        let config = LoggerConfig::builder().emitter(Named("console")).build();
        let debug = format!("{:?}", config);
        assert!(debug.contains("console"));
        assert!(debug.contains("Info"));
    }
}
