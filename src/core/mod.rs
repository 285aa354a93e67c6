//! Core logger types and traits

pub mod buffer;
pub mod config;
pub mod emitter;
pub mod error;
pub mod format_arg;
pub mod format_policy;
pub mod logger;
pub mod metrics;
pub mod printf;
pub mod severity;

pub use buffer::MAX_RETAINED_BUFFER;
pub use config::{ConfigBuilder, EmitterList, LoggerConfig, LoggerSettings};
pub use emitter::Emitter;
pub use error::{FormatError, LoggerError, Result};
pub use format_arg::FormatArg;
pub use format_policy::FormatErrorAction;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use printf::{sprintf, MAX_FIELD_WIDTH};
pub use severity::Severity;
