//! # Event Sinks
//!
//! Consumers of elapsed phase durations. The tracer only brackets events;
//! where the timings end up is decided by the sink.

use std::time::Duration;

/// Receives one report per completed event.
pub trait EventSink: Send + Sync {
    /// Called after `event` ends, with the time since its matching begin.
    fn record(&self, class_name: &str, event: &str, elapsed: Duration);
}

/// Reports durations through `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, class_name: &str, event: &str, elapsed: Duration) {
        tracing::debug!(
            class = class_name,
            event,
            elapsed_us = elapsed.as_micros() as u64,
            "event completed"
        );
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _class_name: &str, _event: &str, _elapsed: Duration) {}
}
