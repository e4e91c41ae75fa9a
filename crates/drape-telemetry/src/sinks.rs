//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::{EventKind, SimulationEvent};

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called when the sink is removed from the bus.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Shared handle to the events collected by a [`VecSink`].
pub type EventLog = Arc<Mutex<Vec<SimulationEvent>>>;

/// Collects events into a shared `Vec` for testing and inspection.
///
/// The sink is boxed into the bus, so keep a [`log`](Self::log) handle
/// before registering it.
#[derive(Debug, Default)]
pub struct VecSink {
    events: EventLog,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the collected events.
    pub fn log(&self) -> EventLog {
        Arc::clone(&self.events)
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Forwards every event to a closure.
pub struct CallbackSink<F>
where
    F: FnMut(&SimulationEvent) + Send,
{
    callback: F,
}

impl<F> CallbackSink<F>
where
    F: FnMut(&SimulationEvent) + Send,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> EventSink for CallbackSink<F>
where
    F: FnMut(&SimulationEvent) + Send,
{
    fn handle(&mut self, event: &SimulationEvent) {
        (self.callback)(event);
    }

    fn name(&self) -> &str {
        "callback_sink"
    }
}

/// Logs events through `tracing`.
///
/// Step events only log their particle count; the full snapshot is
/// too large for a log line.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        let timestep = event.timestep;
        match &event.kind {
            EventKind::Step {
                sim_time,
                particles,
            } => {
                tracing::trace!(timestep, sim_time, particles = particles.len(), "step");
            }
            EventKind::Collision { particle, collider } => {
                tracing::trace!(timestep, particle = particle.0, %collider, "collision");
            }
            EventKind::Settled { sim_time } => {
                tracing::debug!(timestep, sim_time, "settled");
            }
            EventKind::Error { message } => {
                tracing::warn!(timestep, %message, "simulation error");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
