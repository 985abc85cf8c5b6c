#![doc(test(attr(deny(warnings))))]

//! Expense Core provides the ledger, aggregation, and session primitives
//! behind a single-session income/expense tracker, plus the interactive
//! terminal shell that drives them.

pub mod cli;
pub mod errors;
pub mod ledger;
pub mod session;
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

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
