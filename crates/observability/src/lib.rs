//! Tracing/logging setup shared by embedding applications and tests.
//!
//! The domain crates only emit `tracing` events; installing a subscriber is
//! the embedder's call. This crate provides the standard one: JSON lines,
//! filterable through `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "panerp=info";

/// Install the process-wide subscriber.
///
/// Safe to call multiple times (subsequent calls are no-ops), so tests can
/// call it unconditionally.
pub fn init() {
    init_with_default_filter(DEFAULT_FILTER);
}

/// Like [`init`], with a custom fallback filter for when `RUST_LOG` is unset.
pub fn init_with_default_filter(fallback: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
