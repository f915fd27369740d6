//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Default directives when `RUST_LOG` is unset: quiet overall, but keep the
/// store's per-mutation debug events visible.
const DEFAULT_DIRECTIVES: &str = "info,salesdesk_service=debug";

/// Initialize tracing/logging for the process with the default filter.
///
/// Safe to call multiple times (subsequent calls are no-ops). `RUST_LOG`
/// overrides the defaults.
pub fn init() {
    init_with_directives(DEFAULT_DIRECTIVES);
}

/// Initialize with explicit filter directives (same syntax as `RUST_LOG`),
/// still letting the environment win when it is set.
pub fn init_with_directives(directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    // JSON lines with timestamps; the dashboard host scrapes these.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
