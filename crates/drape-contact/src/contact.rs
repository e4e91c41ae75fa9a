//! Contact records and the shared velocity response.

use drape_math::Vec3;
use drape_solver::Particle;

/// A single penetration found by a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit direction the particle is pushed along.
    pub normal: Vec3,
    /// Distance to push, always positive.
    pub push: f32,
}

impl Contact {
    /// Position correction vector.
    #[inline]
    pub fn correction(&self) -> Vec3 {
        self.normal * self.push
    }

    /// Moves the particle out of the collider and applies friction.
    ///
    /// The normal velocity component is removed entirely and the
    /// tangential remainder is scaled by `friction`. There is no
    /// restitution term. Only the derived velocity is touched; the
    /// previous position is left alone, so Verlet inertia is unaffected.
    pub fn apply(&self, particle: &mut Particle, friction: f32) {
        particle.position += self.correction();
        let v = particle.velocity;
        particle.velocity = (v - self.normal * v.dot(self.normal)) * friction;
    }
}

/// Result of a collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactResult {
    /// Number of contacts resolved.
    pub resolved_count: u32,
    /// Largest push applied.
    pub max_penetration: f32,
}

impl ContactResult {
    /// Records one resolved contact.
    #[inline]
    pub fn record(&mut self, contact: &Contact) {
        self.resolved_count += 1;
        self.max_penetration = self.max_penetration.max(contact.push);
    }

    /// Folds another pass into this one.
    pub fn merge(&mut self, other: &ContactResult) {
        self.resolved_count += other.resolved_count;
        self.max_penetration = self.max_penetration.max(other.max_penetration);
    }
}
