// Aperfetch Library - Public API

// Re-export error types
pub mod error;
pub use error::{FetchError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{collect_facts, Fact, ProbeContext, UNKNOWN};

/// Initialize logging.
///
/// Quiet by default so the screen stays clean; `RUST_LOG=debug` shows why a
/// fact came out as `Unknown`.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
