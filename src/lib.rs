#![doc(test(attr(deny(warnings))))]

//! Budget Engine offers the period, rollover, and allocation arithmetic
//! that powers household budgeting workflows.
//!
//! The engine is pure: it consumes plain data records (budgets,
//! allocations, transactions), produces new records, and performs no I/O.
//! Persistence, HTTP, and rendering belong to the surrounding application.

pub mod config;
pub mod core;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod money;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("budget_engine=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Budget Engine tracing initialized.");
    });
}
