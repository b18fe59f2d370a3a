//! Tests for the event tracer.

use super::*;
use crate::in_event;
use std::sync::Arc;

/// Sink that remembers every report.
#[derive(Clone, Default)]
struct RecordingSink {
    reports: Arc<Mutex<Vec<(String, String)>>>,
}

impl EventSink for RecordingSink {
    fn record(&self, class_name: &str, event: &str, _elapsed: Duration) {
        self.reports
            .lock()
            .unwrap()
            .push((class_name.to_string(), event.to_string()));
    }
}

fn tracer_with(events: &[&str]) -> EventTracer {
    let tracer = EventTracer::with_sink("Mesh Generator", crate::NullSink);
    for event in events {
        tracer.register_event(event);
    }
    tracer
}

#[test]
fn test_register_is_idempotent() {
    let tracer = tracer_with(&["create", "create"]);
    assert!(tracer.is_registered("create"));
    tracer.begin_event("create").unwrap();
    tracer.end_event("create").unwrap();
}

#[test]
fn test_begin_unregistered_fails() {
    let tracer = tracer_with(&[]);
    assert_eq!(
        tracer.begin_event("create"),
        Err(EventError::Unregistered("create".to_string()))
    );
    assert!(tracer.running_events().is_empty());
}

#[test]
fn test_begin_twice_fails() {
    let tracer = tracer_with(&["create"]);
    tracer.begin_event("create").unwrap();
    assert_eq!(
        tracer.begin_event("create"),
        Err(EventError::AlreadyRunning("create".to_string()))
    );
    // The first begin is still open and can be closed normally.
    tracer.end_event("create").unwrap();
    assert!(!tracer.is_running("create"));
}

#[test]
fn test_end_without_begin_fails() {
    let tracer = tracer_with(&["create"]);
    assert_eq!(
        tracer.end_event("create"),
        Err(EventError::NotRunning("create".to_string()))
    );
}

#[test]
fn test_stats_accumulate() {
    let tracer = tracer_with(&["create"]);
    assert!(tracer.stats("create").is_none());
    for _ in 0..3 {
        tracer.begin_event("create").unwrap();
        tracer.end_event("create").unwrap();
    }
    assert_eq!(tracer.stats("create").unwrap().count, 3);
}

#[test]
fn test_nested_events_close_independently() {
    let tracer = tracer_with(&["a.create", "a.adjustTopology"]);
    tracer.begin_event("a.create").unwrap();
    tracer.begin_event("a.adjustTopology").unwrap();
    assert_eq!(
        tracer.running_events(),
        vec!["a.adjustTopology".to_string(), "a.create".to_string()]
    );
    tracer.end_event("a.adjustTopology").unwrap();
    tracer.end_event("a.create").unwrap();
    assert!(tracer.running_events().is_empty());
}

#[test]
fn test_prefixes_keep_generators_apart() {
    let tracer = tracer_with(&["a.create", "b.create"]);
    tracer.begin_event("a.create").unwrap();
    tracer.begin_event("b.create").unwrap();
    tracer.end_event("a.create").unwrap();
    tracer.end_event("b.create").unwrap();
}

#[test]
fn test_sink_receives_class_and_event() {
    let sink = RecordingSink::default();
    let tracer = EventTracer::with_sink("Mesh Generator", sink.clone());
    tracer.register_event("box.create");
    tracer.begin_event("box.create").unwrap();
    tracer.end_event("box.create").unwrap();

    let reports = sink.reports.lock().unwrap();
    assert_eq!(
        *reports,
        vec![("Mesh Generator".to_string(), "box.create".to_string())]
    );
}

#[test]
fn test_in_event_closes_on_error() {
    let tracer = tracer_with(&["phase"]);
    let result: Result<(), EventError> =
        in_event(&tracer, "phase", || Err(EventError::NotRunning("inner".to_string())));
    assert_eq!(result, Err(EventError::NotRunning("inner".to_string())));
    assert!(!tracer.is_running("phase"));
    assert_eq!(tracer.stats("phase").unwrap().count, 1);
}

#[test]
fn test_in_event_skips_body_when_begin_fails() {
    let tracer = tracer_with(&[]);
    let mut ran = false;
    let result: Result<(), EventError> = in_event(&tracer, "phase", || {
        ran = true;
        Ok(())
    });
    assert!(result.is_err());
    assert!(!ran);
}

#[test]
fn test_shared_across_threads() {
    let tracer = Arc::new(tracer_with(&["a.create", "b.create"]));
    let handles: Vec<_> = ["a.create", "b.create"]
        .into_iter()
        .map(|name| {
            let tracer = Arc::clone(&tracer);
            std::thread::spawn(move || {
                tracer.begin_event(name).unwrap();
                tracer.end_event(name).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(tracer.stats("a.create").unwrap().count, 1);
    assert_eq!(tracer.stats("b.create").unwrap().count, 1);
}
