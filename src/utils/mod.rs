//! Process-level helpers
//!
//! Currently only shutdown signal handling for the server binary.

pub mod signals;

pub use signals::shutdown_signal;
