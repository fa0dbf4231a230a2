//! Timer state structure and the cycle engine

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    encounters::{Phase, PhaseTable},
    error::HelperError,
};

/// Mutable state of one running cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub current_index: usize,
    pub remaining_ms: u64,
    pub running: bool,
}

impl TimerState {
    /// Stopped at the first phase with its full duration remaining
    pub fn new(table: &PhaseTable) -> Self {
        Self {
            current_index: 0,
            remaining_ms: table.first().duration_ms,
            running: false,
        }
    }

    /// Check if the timer is running
    pub fn is_active(&self) -> bool {
        self.running
    }
}

/// Read-only view handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub running: bool,
    pub current: Phase,
    pub next: Phase,
    pub remaining_ms: u64,
    pub tick_ms: u64,
}

/// Repeating countdown over a phase table.
///
/// Two states: stopped and running. `tick` only has an effect while running,
/// and any overshoot below zero is discarded when the cycle advances.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    table: PhaseTable,
    tick_ms: u64,
    state: TimerState,
}

impl TimerEngine {
    pub fn new(table: PhaseTable, tick_ms: u64) -> Result<Self, HelperError> {
        if tick_ms == 0 {
            return Err(HelperError::ZeroTick);
        }
        let state = TimerState::new(&table);
        Ok(Self { table, tick_ms, state })
    }

    /// Reset to the first phase and begin running. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.state.running {
            return false;
        }
        self.state = TimerState {
            running: true,
            ..TimerState::new(&self.table)
        };
        true
    }

    /// Freeze in place. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        let was_running = self.state.running;
        self.state.running = false;
        was_running
    }

    /// Advance the clock by one tick. Returns true when the phase changed.
    pub fn tick(&mut self) -> bool {
        if !self.state.running {
            return false;
        }

        let remaining = self.state.remaining_ms.saturating_sub(self.tick_ms);
        if remaining > 0 {
            self.state.remaining_ms = remaining;
            return false;
        }

        self.state.current_index = (self.state.current_index + 1) % self.table.len();
        self.state.remaining_ms = self.current().duration_ms;
        debug!(
            "Advanced to phase {} ({})",
            self.current().ordinal,
            self.current().label
        );
        true
    }

    pub fn current(&self) -> &Phase {
        self.table.at(self.state.current_index)
    }

    pub fn peek_next(&self) -> &Phase {
        self.table.phase_after(self.state.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn remaining_ms(&self) -> u64 {
        self.state.remaining_ms
    }

    pub fn is_running(&self) -> bool {
        self.state.is_active()
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    pub fn table(&self) -> &PhaseTable {
        &self.table
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            running: self.state.running,
            current: self.current().clone(),
            next: self.peek_next().clone(),
            remaining_ms: self.state.remaining_ms,
            tick_ms: self.tick_ms,
        }
    }
}
