//! Tracing/logging setup shared by salesdesk processes.

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use tracing::init_with_directives;

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
