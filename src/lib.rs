#![doc(test(attr(deny(warnings))))]

//! Kas Core implements a personal income/expense journal with durable
//! key-value persistence, a selection-driven edit flow, and chart-ready
//! series data for terminal frontends.

pub mod chart;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod journal;
pub mod session;
pub mod storage;
pub mod tui;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Kas Core tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("kas_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
