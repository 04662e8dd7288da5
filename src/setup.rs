// src/setup.rs

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a human-readable subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when the host already installed a global subscriber.
pub fn init_tracing() -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init()
        .is_ok();
    if installed {
        tracing::info!("tracing initialized");
    }
    installed
}

/// Same as [`init_tracing`] with one JSON object per event.
pub fn init_json_tracing() -> bool {
    let installed = tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .try_init()
        .is_ok();
    if installed {
        tracing::info!("tracing initialized");
    }
    installed
}
