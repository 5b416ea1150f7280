//! Finance Tracker keeps income and expense records plus dated financial plans in a
//! single JSON file, driven by an interactive terminal menu.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup log.
pub fn init(log_level: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(log_level);
        tracing::info!("Finance Tracker tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init("warn");
        super::init("debug");
    }
}
