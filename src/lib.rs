//! Boss Helper - An HTTP helper server for boss encounters
//!
//! This library provides encounter phase tables, a repeating countdown engine
//! that cycles through them, and the HTTP API exposing both.

pub mod api;
pub mod config;
pub mod encounters;
pub mod error;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::{HelperError, InvalidTableError};
pub use state::AppState;
pub use utils::signals::shutdown_signal;
