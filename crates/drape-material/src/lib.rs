//! # drape-material
//!
//! Fabric properties and the named preset registry.
//!
//! ## Design
//!
//! [`FabricProperties`] holds the physical coefficients a cloth step
//! reads: areal weight, per-spring-kind stiffness, damping, friction,
//! air resistance and thickness. [`FabricOverrides`] is the partial
//! form used to edit a live profile.
//!
//! The [`MaterialDatabase`] stores named presets. It is built once and
//! handed to the simulation by value; nothing in this crate is global.

pub mod database;
pub mod properties;

pub use database::MaterialDatabase;
pub use properties::{FabricOverrides, FabricProperties};
