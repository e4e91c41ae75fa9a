//! Simulation event types.

use drape_types::{ColliderId, ParticleId};
use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
///
/// `timestep` counts completed steps since the cloth was last reset;
/// events raised outside a step carry the current count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    pub timestep: u32,
    pub kind: EventKind,
}

/// Full per-particle state carried by a step event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleSnapshot {
    pub position: [f32; 3],
    pub previous_position: [f32; 3],
    pub velocity: [f32; 3],
    pub acceleration: [f32; 3],
    pub mass: f32,
    pub pinned: bool,
    pub uv: [f32; 2],
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    /// A step finished. Carries every particle in index order.
    Step {
        sim_time: f64,
        particles: Vec<ParticleSnapshot>,
    },

    /// A particle was pushed out of a collider.
    Collision {
        particle: ParticleId,
        collider: ColliderId,
    },

    /// Every free particle is below the settle speed. Fires on every
    /// step for which that holds, not only on the transition.
    Settled { sim_time: f64 },

    /// An operation was rejected.
    Error { message: String },
}

impl EventKind {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Step { .. } => "step",
            Self::Collision { .. } => "collision",
            Self::Settled { .. } => "settled",
            Self::Error { .. } => "error",
        }
    }
}

impl SimulationEvent {
    /// Creates a new event for the given timestep.
    pub fn new(timestep: u32, kind: EventKind) -> Self {
        Self { timestep, kind }
    }
}
