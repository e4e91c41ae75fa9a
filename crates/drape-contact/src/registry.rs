//! Collider registry.

use std::collections::BTreeMap;

use drape_math::Vec3;
use drape_types::{ColliderId, DrapeError, DrapeResult};

use crate::collider::{Collider, ColliderShape};

/// The set of colliders a simulation tests against.
///
/// Ids are allocated monotonically and never reused, even after
/// removal or [`clear`](Self::clear). Iteration follows id order,
/// which is also insertion order.
#[derive(Debug, Clone, Default)]
pub struct ColliderSet {
    colliders: BTreeMap<ColliderId, Collider>,
    next_id: u32,
}

impl ColliderSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a collider and returns its id.
    pub fn insert(&mut self, shape: ColliderShape, position: Vec3) -> ColliderId {
        let id = ColliderId(self.next_id);
        self.next_id += 1;
        tracing::debug!(%id, shape = shape.name(), "collider added");
        self.colliders.insert(id, Collider { id, position, shape });
        id
    }

    /// Removes a collider. Returns `None` if the id is not registered.
    pub fn remove(&mut self, id: ColliderId) -> Option<Collider> {
        self.colliders.remove(&id)
    }

    /// Moves a collider.
    pub fn set_position(&mut self, id: ColliderId, position: Vec3) -> DrapeResult<()> {
        let collider = self
            .colliders
            .get_mut(&id)
            .ok_or(DrapeError::UnknownCollider(id.0))?;
        collider.position = position;
        Ok(())
    }

    /// Looks up a collider.
    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.get(&id)
    }

    /// Iterates colliders in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.values()
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Drops every collider. The id counter keeps running.
    pub fn clear(&mut self) {
        self.colliders.clear();
    }
}
