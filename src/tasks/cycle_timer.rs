//! Scheduled ticking for a timer engine

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant},
};
use tracing::{debug, info, warn};

use crate::{
    error::HelperError,
    state::{TimerEngine, TimerSnapshot},
};

/// Callback invoked on every repetition
pub type TickCallback = Box<dyn FnMut() + Send + 'static>;

/// A primitive that runs a callback every `period` until cancelled
pub trait Scheduler: Send + Sync + 'static {
    type Handle: Send + 'static;

    fn every(&self, period: Duration, callback: TickCallback) -> Self::Handle;

    /// Cancel a repetition. Consumes the handle so it can only happen once.
    fn cancel(&self, handle: Self::Handle);
}

/// Scheduler backed by a spawned tokio interval task.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn every(&self, period: Duration, mut callback: TickCallback) -> Self::Handle {
        tokio::spawn(async move {
            // First tick fires one full period after scheduling
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                callback();
            }
        })
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.abort();
    }
}

/// One engine bound to at most one live repetition.
///
/// Dropping the timer cancels the repetition, so no tick outlives its owner.
pub struct CycleTimer<S: Scheduler> {
    name: String,
    engine: Arc<Mutex<TimerEngine>>,
    scheduler: S,
    handle: Mutex<Option<S::Handle>>,
}

impl<S: Scheduler> CycleTimer<S> {
    pub fn new(name: impl Into<String>, engine: TimerEngine, scheduler: S) -> Self {
        Self {
            name: name.into(),
            engine: Arc::new(Mutex::new(engine)),
            scheduler,
            handle: Mutex::new(None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reset and begin ticking. A no-op while already running.
    pub fn start(&self) -> Result<TimerSnapshot, HelperError> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|_| HelperError::LockPoisoned("timer handle"))?;

        let (started, snapshot, period) = {
            let mut engine = self.lock_engine()?;
            let started = engine.start();
            (started, engine.snapshot(), Duration::from_millis(engine.tick_ms()))
        };

        if started {
            info!("Starting {} timer at {}ms ticks", self.name, period.as_millis());
            // never hold two repetitions
            if let Some(stale) = handle.take() {
                self.scheduler.cancel(stale);
            }
            *handle = Some(self.scheduler.every(period, self.tick_callback()));
        } else {
            debug!("{} timer already running", self.name);
        }

        Ok(snapshot)
    }

    /// Freeze the engine and cancel the scheduled ticks
    pub fn stop(&self) -> Result<TimerSnapshot, HelperError> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|_| HelperError::LockPoisoned("timer handle"))?;

        let snapshot = {
            let mut engine = self.lock_engine()?;
            engine.stop();
            engine.snapshot()
        };

        if let Some(live) = handle.take() {
            info!("Stopping {} timer", self.name);
            self.scheduler.cancel(live);
        }

        Ok(snapshot)
    }

    pub fn snapshot(&self) -> Result<TimerSnapshot, HelperError> {
        Ok(self.lock_engine()?.snapshot())
    }

    fn lock_engine(&self) -> Result<std::sync::MutexGuard<'_, TimerEngine>, HelperError> {
        self.engine
            .lock()
            .map_err(|_| HelperError::LockPoisoned("timer engine"))
    }

    fn tick_callback(&self) -> TickCallback {
        let engine = Arc::clone(&self.engine);
        let name = self.name.clone();

        Box::new(move || match engine.lock() {
            Ok(mut engine) => {
                if engine.tick() {
                    debug!("{} timer now at {}", name, engine.current().label);
                }
            }
            Err(e) => warn!("Failed to lock {} timer engine: {}", name, e),
        })
    }
}

impl<S: Scheduler> Drop for CycleTimer<S> {
    fn drop(&mut self) {
        let handle = match self.handle.get_mut() {
            Ok(handle) => handle.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(live) = handle {
            debug!("Tearing down {} timer", self.name);
            self.scheduler.cancel(live);
        }
    }
}
