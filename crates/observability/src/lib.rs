//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogConfig::default());
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use tracing::LogConfig;
