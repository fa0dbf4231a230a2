//! Error types

use thiserror::Error;

/// Rejection raised while building a phase table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTableError {
    #[error("phase table must contain at least one phase")]
    Empty,

    #[error("phase {ordinal} has a non-positive duration")]
    NonPositiveDuration { ordinal: u32 },

    #[error("ordinal {ordinal} appears more than once")]
    DuplicateOrdinal { ordinal: u32 },

    #[error("duration of phase {ordinal} overflows")]
    DurationOverflow { ordinal: u32 },
}

/// Application level errors
#[derive(Debug, Error)]
pub enum HelperError {
    #[error(transparent)]
    InvalidTable(#[from] InvalidTableError),

    #[error("tick granularity must be greater than zero")]
    ZeroTick,

    #[error("unknown encounter: {0}")]
    UnknownEncounter(String),

    #[error("failed to lock {0}")]
    LockPoisoned(&'static str),
}
