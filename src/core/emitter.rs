//! Emitter trait for log output destinations

use super::{error::Result, severity::Severity};
use std::error::Error;

/// Sink receiving fully assembled log lines.
///
/// Every emitter registered on a config receives the same message string and
/// error reference for a given call, in list order. An `Err` return aborts the
/// remaining emitters and surfaces to the caller of the log method.
pub trait Emitter: Send + Sync {
    fn emit(
        &self,
        level: Severity,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) -> Result<()>;

    fn name(&self) -> &str;
}
