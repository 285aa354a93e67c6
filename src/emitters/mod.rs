//! Emitter implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "tracing")]
pub mod tracing_bridge;

#[cfg(feature = "console")]
pub use console::ConsoleEmitter;
#[cfg(feature = "tracing")]
pub use tracing_bridge::TracingEmitter;

pub use crate::core::Emitter;
