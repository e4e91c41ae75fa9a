//! One collision pass over the whole cloth.

use drape_material::FabricProperties;
use drape_solver::ClothState;
use drape_types::{ColliderId, ParticleId};

use crate::contact::ContactResult;
use crate::registry::ColliderSet;

/// Outcome of [`handle_collisions`].
#[derive(Debug, Clone, Default)]
pub struct CollisionPass {
    pub result: ContactResult,
    /// Every contact in resolution order.
    pub hits: Vec<(ParticleId, ColliderId)>,
}

/// Resolves every free particle against every collider.
///
/// Colliders are visited in insertion order and each one is tested
/// against the particles in index order, so a later collider sees the
/// corrections applied by an earlier one. Pinned particles are skipped.
pub fn handle_collisions(
    state: &mut ClothState,
    colliders: &ColliderSet,
    fabric: &FabricProperties,
) -> CollisionPass {
    let mut pass = CollisionPass::default();
    if colliders.is_empty() {
        return pass;
    }

    for collider in colliders.iter() {
        for (index, particle) in state.particles.iter_mut().enumerate() {
            if particle.pinned {
                continue;
            }
            if let Some(contact) = collider.contact(particle.position, fabric.thickness) {
                contact.apply(particle, fabric.friction);
                pass.result.record(&contact);
                pass.hits.push((ParticleId::from(index), collider.id));
            }
        }
    }

    if pass.result.resolved_count > 0 {
        tracing::trace!(
            contacts = pass.result.resolved_count,
            max_penetration = pass.result.max_penetration,
            "collision pass"
        );
    }
    pass
}
