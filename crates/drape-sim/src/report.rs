//! Per-step summary returned by `Simulation::step`.

use drape_contact::ContactResult;

/// What happened during one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Index of the step (0 for the first step after a reset).
    pub timestep: u32,
    /// Simulation time after the step (seconds).
    pub sim_time: f64,
    /// Contacts summed over every collision pass.
    pub contacts: ContactResult,
    /// Highest free-particle speed (m/s).
    pub max_speed: f32,
    /// Kinetic energy of free particles.
    pub kinetic_energy: f64,
    /// Every free particle is below the settle speed.
    pub settled: bool,
}
