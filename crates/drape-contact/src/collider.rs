//! Collider primitives.

use drape_math::Vec3;
use drape_types::ColliderId;
use serde::{Deserialize, Serialize};

use crate::box_collider::box_contact;
use crate::contact::Contact;
use crate::plane::plane_contact;
use crate::sphere::sphere_contact;

/// Geometry of a collider, relative to its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColliderShape {
    /// Sphere centered on the collider position.
    Sphere { radius: f32 },
    /// Axis-aligned box; `size` holds the full extents.
    Box { size: Vec3 },
    /// Infinite plane through the collider position.
    Plane { normal: Vec3 },
    /// Placeholder for triangle-mesh colliders. Never collides.
    Mesh,
}

impl ColliderShape {
    /// Short shape name for logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Box { .. } => "box",
            Self::Plane { .. } => "plane",
            Self::Mesh => "mesh",
        }
    }
}

/// A registered collision body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub id: ColliderId,
    pub position: Vec3,
    pub shape: ColliderShape,
}

impl Collider {
    /// Tests a particle position against this collider.
    pub fn contact(&self, position: Vec3, thickness: f32) -> Option<Contact> {
        match self.shape {
            ColliderShape::Sphere { radius } => {
                sphere_contact(position, self.position, radius, thickness)
            }
            ColliderShape::Box { size } => box_contact(position, self.position, size, thickness),
            ColliderShape::Plane { normal } => {
                plane_contact(position, self.position, normal, thickness)
            }
            ColliderShape::Mesh => None,
        }
    }
}
