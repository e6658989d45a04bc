//! Tracing setup for applications embedding the tree.
//!
//! Library code only emits `tracing` events (component registration, fallback
//! lookups, node creation and cloning at `trace`). Applications that have no
//! subscriber of their own can install the default one here.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Install a console subscriber filtered by `RUST_LOG` (default `info`).
///
/// Idempotent: only the first call has any effect. If another global
/// subscriber is already set, this one is not installed.
pub fn install_tracing() {
    install_tracing_with(DEFAULT_FILTER);
}

/// Like [`install_tracing`], with `default_filter` used when `RUST_LOG` is
/// unset or invalid (for example `"arbor_core=trace"`).
pub fn install_tracing_with(default_filter: &str) {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        let result = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_filter(filter))
            .try_init();

        if result.is_err() {
            eprintln!("arbor: a global tracing subscriber is already installed");
        }
    });
}
