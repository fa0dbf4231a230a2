//! Background tasks module
//!
//! This module contains the scheduled ticking that drives encounter timers.

pub mod cycle_timer;

// Re-export main types
pub use cycle_timer::{CycleTimer, Scheduler, TickCallback, TokioScheduler};
