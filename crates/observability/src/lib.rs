//! Tracing/logging setup shared by every binary and test harness.

pub mod tracing;

pub use self::tracing::{LogFormat, init_with};

/// Initialize process-wide JSON logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    self::tracing::init_with(LogFormat::Json);
}
