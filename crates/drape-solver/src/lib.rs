//! # drape-solver
//!
//! Cloth state, time integration, and constraint relaxation.
//!
//! ## Key Types
//!
//! - [`ClothState`]: particles, springs and grid dimensions
//! - [`topology::build_grid`]: regular particle grid with structural,
//!   shear and bend springs
//! - [`SimulationSettings`]: gravity, wind, time step, iteration counts
//! - [`integrator`]: force accumulation and damped Verlet integration
//! - [`constraints`]: Gauss-Seidel spring relaxation

pub mod config;
pub mod constraints;
pub mod integrator;
pub mod state;
pub mod topology;

pub use config::SimulationSettings;
pub use state::{ClothState, Particle, Spring};
