//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    encounters::{Encounter, Phase},
    state::TimerSnapshot,
};

/// Format milliseconds as seconds at the precision the timer ticks at.
///
/// Whole-second ticks give `6s`, finer ticks one decimal such as `14.4s`.
pub fn format_seconds(ms: u64, tick_ms: u64) -> String {
    if tick_ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}

/// Timer view returned by the start, stop and timer endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub encounter: String,
    pub running: bool,
    pub current: Phase,
    pub next: Phase,
    pub remaining_ms: u64,
    pub remaining_display: String,
    pub timestamp: DateTime<Utc>,
}

impl TimerResponse {
    pub fn new(encounter: &str, snapshot: TimerSnapshot) -> Self {
        Self {
            encounter: encounter.to_string(),
            running: snapshot.running,
            remaining_display: format_seconds(snapshot.remaining_ms, snapshot.tick_ms),
            remaining_ms: snapshot.remaining_ms,
            current: snapshot.current,
            next: snapshot.next,
            timestamp: Utc::now(),
        }
    }
}

/// Phase with its duration formatted for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseView {
    #[serde(flatten)]
    pub phase: Phase,
    pub duration_display: String,
}

/// Guide text and phase table of one encounter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterResponse {
    pub slug: String,
    pub title: String,
    pub guide: Vec<String>,
    pub tick_ms: u64,
    pub cycle: String,
    pub phases: Vec<PhaseView>,
}

impl From<&Encounter> for EncounterResponse {
    fn from(encounter: &Encounter) -> Self {
        Self {
            slug: encounter.slug.to_string(),
            title: encounter.title.to_string(),
            guide: encounter.guide.iter().map(|p| p.to_string()).collect(),
            tick_ms: encounter.tick_ms,
            cycle: encounter.table.cycle_summary(),
            phases: encounter
                .table
                .iter()
                .map(|phase| PhaseView {
                    duration_display: format_seconds(phase.duration_ms, encounter.tick_ms),
                    phase: phase.clone(),
                })
                .collect(),
        }
    }
}

/// Entry in the encounter listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterSummary {
    pub slug: String,
    pub title: String,
}

/// Status response with every encounter's timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timers: Vec<TimerResponse>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_second_ticks_show_one_decimal() {
        assert_eq!(format_seconds(14400, 100), "14.4s");
        assert_eq!(format_seconds(3600, 100), "3.6s");
        assert_eq!(format_seconds(0, 100), "0.0s");
    }

    #[test]
    fn whole_second_ticks_show_whole_seconds() {
        assert_eq!(format_seconds(6000, 1000), "6s");
        assert_eq!(format_seconds(3000, 1000), "3s");
    }
}
