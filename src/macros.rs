//! Logging macros taking printf-style templates with variadic arguments.
//!
//! Each macro converts its trailing arguments with [`FormatArg::from`] and
//! returns the logger's `Result<()>`. An error may be attached with a leading
//! `error = <expr>;` clause.
//!
//! # Examples
//!
//! ```
//! use tagged_logger::prelude::*;
//! use tagged_logger::{info, error};
//!
//! let config = LoggerConfig::builder().build();
//! let logger = Logger::new("server", config);
//!
//! // Basic logging
//! info!(logger, "Server started").unwrap();
//!
//! // With positional arguments
//! let port = 8080;
//! info!(logger, "Server listening on port %d", port).unwrap();
//!
//! // With an attached error
//! let err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
//! error!(logger, error = &err; "bind to %s failed", "0.0.0.0").unwrap();
//! ```
//!
//! [`FormatArg::from`]: crate::FormatArg

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("app", LoggerConfig::builder().build());
/// use tagged_logger::log;
/// log!(logger, Severity::Info, "Simple message").unwrap();
/// log!(logger, Severity::Error, "Error code: %d", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, error = $err:expr; $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_with($level, $err, $fmt, &$crate::args![$($arg),*])
    };
    ($logger:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, $fmt, &$crate::args![$($arg),*])
    };
}

/// Log a verbose-level message.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let config = LoggerConfig::builder().level(Severity::Verbose).build();
/// # let logger = Logger::new("app", config);
/// use tagged_logger::verbose;
/// verbose!(logger, "Entering function: calculate()").unwrap();
/// verbose!(logger, "Variable value: %d", 42).unwrap();
/// ```
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Verbose, $($rest)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("app", LoggerConfig::builder().build());
/// use tagged_logger::debug;
/// debug!(logger, "Counter value: %d", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($rest)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("app", LoggerConfig::builder().build());
/// use tagged_logger::info;
/// info!(logger, "Processing %d items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($rest)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("app", LoggerConfig::builder().build());
/// use tagged_logger::warning;
/// warning!(logger, "Retry attempt %d of %d", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($rest)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("app", LoggerConfig::builder().build());
/// use tagged_logger::error;
/// error!(logger, "Failed to connect to %s", "database").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($rest)+)
    };
}
