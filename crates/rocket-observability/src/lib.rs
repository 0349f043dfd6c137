//! Logging setup for RocketCart binaries.
//!
//! Library crates only emit `tracing` events. Binaries call
//! [`init_logging`] once at startup to pick where those events go.
//!
//! ```rust,no_run
//! use rocket_observability::{init_logging, LogFormat, LogLevel};
//!
//! init_logging(LogFormat::Human, LogLevel::Info);
//! tracing::info!(items = 2, "cart loaded");
//! ```

mod logging;

pub use logging::*;
