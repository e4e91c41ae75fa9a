//! # drape-sim
//!
//! The simulation driver. Owns a cloth, its fabric, the collider set
//! and the event bus, and advances them one fixed step at a time.
//!
//! Each [`Simulation::step`] runs, in order: force accumulation,
//! Verlet integration, `solver_iterations` spring relaxation sweeps,
//! `collision_iterations` collision passes, then emits a step event
//! with the full particle snapshot and, when every free particle is at
//! rest, a settled event.
//!
//! The driver does not own a clock. A host that wants continuous
//! playback calls [`Simulation::start`] and then
//! [`Simulation::on_frame`] once per display frame.

pub mod report;
pub mod simulation;
pub mod status;

pub use report::StepReport;
pub use simulation::Simulation;
pub use status::SimulationStatus;
