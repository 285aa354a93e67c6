//! # Tagged Logger
//!
//! A lightweight named-logger facade. Each [`Logger`] filters by severity,
//! expands a printf-style template with positional arguments, prefixes the
//! result with its name (plus a `WARNING`/`ERROR` tag where relevant) and
//! hands the line to every emitter of a shared, live [`LoggerConfig`].
//!
//! ## Features
//!
//! - **Live configuration**: level, emitters and format-error policy can be
//!   changed while loggers are in use
//! - **printf templates**: `%s`, `%d`, `%f`, `%x`, date/time `%t` directives
//!   and more, with a per-thread reusable buffer
//! - **Configurable failure handling**: raise formatting errors or degrade to
//!   the raw template plus its arguments
//! - **Pluggable emitters**: console and `tracing` bridges included
//!
//! ```
//! use tagged_logger::prelude::*;
//!
//! let config = LoggerConfig::builder()
//!     .level(Severity::Debug)
//!     .emitter(ConsoleEmitter::new())
//!     .build();
//!
//! let logger = Logger::new("cache", config);
//! logger.w("evicted %d entries", &args![128]).unwrap();
//! // stderr: [WARNING] cache: WARNING: evicted 128 entries
//! ```

pub mod core;
pub mod emitters;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::emitters::ConsoleEmitter;
    #[cfg(feature = "tracing")]
    pub use crate::emitters::TracingEmitter;
    pub use crate::args;
    pub use crate::core::{
        ConfigBuilder, Emitter, FormatArg, FormatError, FormatErrorAction, Logger, LoggerConfig,
        LoggerError, LoggerMetrics, LoggerSettings, Result, Severity,
    };
}

#[cfg(feature = "console")]
pub use emitters::ConsoleEmitter;
#[cfg(feature = "tracing")]
pub use emitters::TracingEmitter;
pub use self::core::{
    sprintf, ConfigBuilder, Emitter, EmitterList, FormatArg, FormatError, FormatErrorAction,
    Logger, LoggerConfig, LoggerError, LoggerMetrics, LoggerSettings, Result, Severity,
    MAX_FIELD_WIDTH, MAX_RETAINED_BUFFER,
};
