#![doc(test(attr(deny(warnings))))]

//! Finboard Core implements the pieces behind a personal-finance dashboard:
//! an in-memory expense ledger with a JSON persistence slot, read-only
//! overview/insight/profile surfaces, and an interactive menu CLI.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod profile;
pub mod report;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Finboard tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::from_default_env().add_directive("finboard_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
