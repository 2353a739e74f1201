#![doc(test(attr(deny(warnings))))]

//! Expense Core keeps the state of a personal finance tracker: transactions, budgets,
//! and spending categories behind a reducer-driven store, persisted as a JSON blob,
//! with pure analytics over any snapshot.

pub mod analytics;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
