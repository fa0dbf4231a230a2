//! State management module
//!
//! This module contains the timer engine and the shared application state.

pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, EncounterSlot};
pub use timer_state::{TimerEngine, TimerSnapshot, TimerState};
