//! # Event Tracer
//!
//! Registered-event bookkeeping with per-event timing statistics.
//!
//! A single tracer is usually shared by every generator in a run. Generators
//! keep their events apart by prefixing names with their own identity, so the
//! tracer itself never needs to know who owns an event.

use crate::error::{EventError, EventResult};
use crate::sink::{EventSink, TracingSink};
use crate::EventLog;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Accumulated timing for one event name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventStats {
    /// Number of completed begin/end pairs.
    pub count: u64,
    /// Sum of elapsed time over all completed pairs.
    pub total: Duration,
}

/// Mutable bookkeeping guarded by the tracer's mutex.
#[derive(Debug, Default)]
struct TracerState {
    registered: HashSet<String>,
    running: HashMap<String, Instant>,
    stats: HashMap<String, EventStats>,
}

/// Process-wide event facility.
///
/// # Example
///
/// ```rust
/// use event_log::{EventError, EventLog, EventTracer};
///
/// let tracer = EventTracer::new("Mesh Generator");
/// assert_eq!(
///     tracer.begin_event("create"),
///     Err(EventError::Unregistered("create".to_string()))
/// );
/// ```
pub struct EventTracer {
    class_name: String,
    sink: Box<dyn EventSink>,
    state: Mutex<TracerState>,
}

impl EventTracer {
    /// Creates a tracer reporting to [`TracingSink`].
    pub fn new(class_name: impl Into<String>) -> Self {
        Self::with_sink(class_name, TracingSink)
    }

    /// Creates a tracer reporting to a custom sink.
    pub fn with_sink(class_name: impl Into<String>, sink: impl EventSink + 'static) -> Self {
        Self {
            class_name: class_name.into(),
            sink: Box::new(sink),
            state: Mutex::new(TracerState::default()),
        }
    }

    /// Class name attached to every report.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.lock().registered.contains(name)
    }

    pub fn is_running(&self, name: &str) -> bool {
        self.lock().running.contains_key(name)
    }

    /// Names of events begun but not yet ended, sorted.
    pub fn running_events(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().running.keys().cloned().collect();
        names.sort();
        names
    }

    /// Timing for `name`, if it has completed at least once.
    pub fn stats(&self, name: &str) -> Option<EventStats> {
        self.lock().stats.get(name).copied()
    }

    // Bookkeeping stays usable after a panic on another thread.
    fn lock(&self) -> MutexGuard<'_, TracerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventLog for EventTracer {
    fn register_event(&self, name: &str) {
        self.lock().registered.insert(name.to_string());
    }

    fn begin_event(&self, name: &str) -> EventResult<()> {
        let mut state = self.lock();
        if !state.registered.contains(name) {
            return Err(EventError::Unregistered(name.to_string()));
        }
        if state.running.contains_key(name) {
            return Err(EventError::AlreadyRunning(name.to_string()));
        }
        state.running.insert(name.to_string(), Instant::now());
        Ok(())
    }

    fn end_event(&self, name: &str) -> EventResult<()> {
        let elapsed = {
            let mut state = self.lock();
            let started = state
                .running
                .remove(name)
                .ok_or_else(|| EventError::NotRunning(name.to_string()))?;
            let elapsed = started.elapsed();
            let stats = state.stats.entry(name.to_string()).or_default();
            stats.count += 1;
            stats.total += elapsed;
            elapsed
        };
        self.sink.record(&self.class_name, name, elapsed);
        Ok(())
    }
}

impl std::fmt::Debug for EventTracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventTracer")
            .field("class_name", &self.class_name)
            .field("state", &*self.lock())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
