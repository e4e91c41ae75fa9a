//! # drape-contact
//!
//! Collision detection and response between cloth particles and
//! analytical collider primitives.
//!
//! Every collider shape answers one question: given a particle position
//! and the fabric thickness, is the particle penetrating, and if so
//! which way and how far must it be pushed? The pipeline applies that
//! push, damps the particle's velocity by the fabric friction, and
//! reports which particle hit which collider.
//!
//! ## Shapes
//!
//! - **Sphere**: pushed out radially to `radius + thickness`
//! - **Plane**: pushed along the normal to `thickness` above the plane
//! - **Box**: pushed out through the nearest face
//! - **Mesh**: accepted by the registry, never collides

pub mod box_collider;
pub mod collider;
pub mod contact;
pub mod pipeline;
pub mod plane;
pub mod registry;
pub mod sphere;

pub use collider::{Collider, ColliderShape};
pub use contact::{Contact, ContactResult};
pub use pipeline::{handle_collisions, CollisionPass};
pub use registry::ColliderSet;
