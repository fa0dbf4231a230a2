//! Main application state management

use std::{sync::Mutex, time::Instant};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::{
    encounters::Encounter,
    error::HelperError,
    tasks::{CycleTimer, TokioScheduler},
};

use super::{TimerEngine, TimerSnapshot};

/// An encounter together with the timer that cycles its phases
pub struct EncounterSlot {
    pub encounter: Encounter,
    pub timer: CycleTimer<TokioScheduler>,
}

/// Main application state that owns one timer per encounter
pub struct AppState {
    /// Encounters in registration order
    pub encounters: Vec<EncounterSlot>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create a new AppState with a stopped timer for each encounter
    pub fn new(port: u16, host: String, encounters: Vec<Encounter>) -> Result<Self, HelperError> {
        let encounters = encounters
            .into_iter()
            .map(|encounter| {
                let engine = TimerEngine::new(encounter.table.clone(), encounter.tick_ms)?;
                let timer = CycleTimer::new(encounter.slug, engine, TokioScheduler);
                Ok(EncounterSlot { encounter, timer })
            })
            .collect::<Result<Vec<_>, HelperError>>()?;

        Ok(Self {
            encounters,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
        })
    }

    /// Look up an encounter by its slug
    pub fn encounter(&self, slug: &str) -> Result<&EncounterSlot, HelperError> {
        self.encounters
            .iter()
            .find(|slot| slot.encounter.slug == slug)
            .ok_or_else(|| HelperError::UnknownEncounter(slug.to_string()))
    }

    /// Start the timer of an encounter
    pub fn start_timer(&self, slug: &str) -> Result<TimerSnapshot, HelperError> {
        let slot = self.encounter(slug)?;
        let snapshot = slot.timer.start()?;
        self.record_action(format!("{}-start", slug));
        Ok(snapshot)
    }

    /// Stop the timer of an encounter
    pub fn stop_timer(&self, slug: &str) -> Result<TimerSnapshot, HelperError> {
        let slot = self.encounter(slug)?;
        let snapshot = slot.timer.stop()?;
        self.record_action(format!("{}-stop", slug));
        Ok(snapshot)
    }

    /// Get the current timer state of an encounter
    pub fn timer_snapshot(&self, slug: &str) -> Result<TimerSnapshot, HelperError> {
        self.encounter(slug)?.timer.snapshot()
    }

    /// Stop every running timer, used on shutdown
    pub fn stop_all(&self) {
        for slot in &self.encounters {
            if let Err(e) = slot.timer.stop() {
                warn!("Failed to stop {} timer: {}", slot.encounter.slug, e);
            }
        }
        info!("All encounter timers stopped");
    }

    fn record_action(&self, action: String) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action);
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
