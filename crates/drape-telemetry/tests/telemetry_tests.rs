//! Integration tests for drape-telemetry.

use std::sync::{Arc, Mutex};

use drape_telemetry::bus::EventBus;
use drape_telemetry::events::{EventKind, ParticleSnapshot, SimulationEvent};
use drape_telemetry::sinks::{CallbackSink, EventSink, TracingSink, VecSink};
use drape_types::{ColliderId, ParticleId};

fn settled(timestep: u32) -> SimulationEvent {
    SimulationEvent::new(timestep, EventKind::Settled { sim_time: 0.5 })
}

// ─── Bus Tests ────────────────────────────────────────────────

#[test]
fn emit_and_flush_in_order() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let log = sink.log();
    bus.add_sink(Box::new(sink));

    bus.emit(SimulationEvent::new(
        0,
        EventKind::Collision {
            particle: ParticleId(3),
            collider: ColliderId(0),
        },
    ));
    bus.emit(settled(0));
    assert!(log.lock().unwrap().is_empty(), "nothing delivered before flush");

    bus.flush();
    let events = log.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind.name(), "collision");
    assert_eq!(events[1].kind.name(), "settled");
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let log = sink.log();
    bus.add_sink(Box::new(sink));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.emit(settled(0));
    bus.flush();
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn every_sink_sees_every_event() {
    let mut bus = EventBus::new();
    let a = VecSink::new();
    let b = VecSink::new();
    let (log_a, log_b) = (a.log(), b.log());
    bus.add_sink(Box::new(a));
    bus.add_sink(Box::new(b));
    assert_eq!(bus.sink_count(), 2);

    bus.emit(settled(1));
    bus.flush();
    assert_eq!(*log_a.lock().unwrap(), *log_b.lock().unwrap());
    assert_eq!(log_a.lock().unwrap().len(), 1);
}

#[test]
fn clear_sinks_delivers_pending_then_drops() {
    struct Finalizing(Arc<Mutex<Vec<&'static str>>>);
    impl EventSink for Finalizing {
        fn handle(&mut self, _event: &SimulationEvent) {
            self.0.lock().unwrap().push("handle");
        }
        fn finalize(&mut self) {
            self.0.lock().unwrap().push("finalize");
        }
        fn name(&self) -> &str {
            "finalizing"
        }
    }

    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(Finalizing(Arc::clone(&calls))));
    bus.emit(settled(0));
    bus.clear_sinks();

    assert_eq!(bus.sink_count(), 0);
    assert_eq!(*calls.lock().unwrap(), vec!["handle", "finalize"]);
}

// ─── Sink Tests ───────────────────────────────────────────────

#[test]
fn callback_sink_forwards() {
    let count = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&count);
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(CallbackSink::new(move |_: &SimulationEvent| {
        *counter.lock().unwrap() += 1;
    })));

    for t in 0..3 {
        bus.emit(settled(t));
    }
    bus.flush();
    assert_eq!(*count.lock().unwrap(), 3);
}

#[test]
fn tracing_sink_handles_every_kind() {
    let mut sink = TracingSink::new();
    let kinds = vec![
        EventKind::Step {
            sim_time: 0.1,
            particles: vec![],
        },
        EventKind::Collision {
            particle: ParticleId(0),
            collider: ColliderId(1),
        },
        EventKind::Settled { sim_time: 0.1 },
        EventKind::Error {
            message: "bad".into(),
        },
    ];
    for kind in kinds {
        sink.handle(&SimulationEvent::new(0, kind));
    }
    assert_eq!(sink.name(), "tracing_sink");
}

// ─── Serialization Tests ──────────────────────────────────────

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(
        7,
        EventKind::Step {
            sim_time: 0.25,
            particles: vec![ParticleSnapshot {
                position: [0.0, 1.0, 2.0],
                previous_position: [0.0, 1.01, 2.0],
                velocity: [0.0, -0.5, 0.0],
                acceleration: [0.0, -9.81, 0.0],
                mass: 0.0375,
                pinned: false,
                uv: [0.25, 0.75],
            }],
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"event\":\"step\""));
    assert!(json.contains("\"uv\":[0.25,0.75]"));
    assert!(json.contains("\"previous_position\""));
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}
