//! # Event Log
//!
//! Named timing events for instrumenting generation phases.
//!
//! Every event name must be registered before it is begun, and every begin
//! must be matched by exactly one end before the same name begins again.
//! Misuse is reported as an [`EventError`] rather than tolerated.
//!
//! ## Usage
//!
//! ```rust
//! use event_log::{EventLog, EventTracer};
//!
//! let tracer = EventTracer::new("Mesh Generator");
//! tracer.register_event("box.create");
//! tracer.begin_event("box.create").unwrap();
//! tracer.end_event("box.create").unwrap();
//! assert_eq!(tracer.stats("box.create").unwrap().count, 1);
//! ```

pub mod error;
pub mod sink;
pub mod tracer;

pub use error::{EventError, EventResult};
pub use sink::{EventSink, NullSink, TracingSink};
pub use tracer::{EventStats, EventTracer};

/// Instrumentation backend used by generators.
///
/// [`EventTracer`] is the production implementation; tests substitute
/// recording doubles.
pub trait EventLog {
    /// Adds `name` to the registered set. Registering twice is a no-op.
    fn register_event(&self, name: &str);

    /// Marks `name` as running.
    ///
    /// Fails if `name` was never registered or is already running.
    fn begin_event(&self, name: &str) -> EventResult<()>;

    /// Closes a running event and records its elapsed time.
    ///
    /// Fails if `name` is not running.
    fn end_event(&self, name: &str) -> EventResult<()>;
}

/// Runs `body` bracketed by `name`.
///
/// The event is closed on every path once it has begun. If `body` fails, its
/// error wins and a failure to close the event is only logged.
///
/// # Examples
///
/// ```rust
/// use event_log::{in_event, EventError, EventLog, EventTracer};
///
/// let tracer = EventTracer::new("demo");
/// tracer.register_event("phase");
/// let value: Result<u32, EventError> = in_event(&tracer, "phase", || Ok(7));
/// assert_eq!(value.unwrap(), 7);
/// assert!(!tracer.is_running("phase"));
/// ```
pub fn in_event<L, T, E, F>(log: &L, name: &str, body: F) -> Result<T, E>
where
    L: EventLog + ?Sized,
    E: From<EventError>,
    F: FnOnce() -> Result<T, E>,
{
    log.begin_event(name)?;
    let outcome = body();
    let closed = log.end_event(name);
    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(err)) => Err(err.into()),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            tracing::warn!(event = name, error = %close_err, "failed to close event after error");
            Err(err)
        }
    }
}
