#![doc(test(attr(deny(warnings))))]

//! Account Core models a small closed set of bank account variants that share
//! common balance operations and diverge in their end-of-month processing
//! (transaction fees, interest accrual, maturity penalties).

pub mod accounts;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Account Core tracing initialized.");
    });
}
