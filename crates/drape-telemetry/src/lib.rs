//! # drape-telemetry
//!
//! Event bus for the cloth simulation. The simulation emits structured
//! events (step snapshots, collisions, settling, errors) that are
//! delivered in order to pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, ParticleSnapshot, SimulationEvent};
pub use sinks::{CallbackSink, EventLog, EventSink, TracingSink, VecSink};
