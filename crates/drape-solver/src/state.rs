//! Cloth state: the particle and spring arrays a step mutates.
//!
//! Particles are stored row-major over the grid described by
//! [`ClothState::dims`]. Springs reference particles by index and are
//! kept in generation order, which is also the relaxation order.

use drape_material::FabricProperties;
use drape_math::{GridDims, Vec2, Vec3};
use drape_types::constants::SETTLED_SPEED_THRESHOLD;
use drape_types::{ParticleId, SpringKind};
use serde::{Deserialize, Serialize};

/// A cloth particle.
///
/// `velocity` is derived from the last integration step and only feeds
/// air resistance and collision friction; position updates are driven
/// by `position - previous_position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec3,
    pub previous_position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub mass: f32,
    pub pinned: bool,
    pub uv: Vec2,
}

impl Particle {
    /// Creates a free particle at rest.
    pub fn new(position: Vec3, mass: f32, uv: Vec2) -> Self {
        Self {
            position,
            previous_position: position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            mass,
            pinned: false,
            uv,
        }
    }

    /// Current speed (m/s).
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Pins the particle where it is, or at `position` if given.
    ///
    /// Previous position is collapsed onto the current one so the
    /// particle carries no implicit velocity if it is later unpinned.
    pub fn pin(&mut self, position: Option<Vec3>) {
        if let Some(p) = position {
            self.position = p;
        }
        self.previous_position = self.position;
        self.velocity = Vec3::ZERO;
        self.acceleration = Vec3::ZERO;
        self.pinned = true;
    }

    /// Releases a pinned particle. It starts from rest.
    pub fn unpin(&mut self) {
        self.pinned = false;
        self.previous_position = self.position;
    }
}

/// A distance constraint between two particles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    pub p1: ParticleId,
    pub p2: ParticleId,
    /// Fixed at creation.
    pub rest_length: f32,
    /// Stamped from the active fabric according to `kind`.
    pub stiffness: f32,
    pub kind: SpringKind,
}

impl Spring {
    /// Creates a spring whose rest length is the current distance
    /// between `p1` and `p2`.
    pub fn between(
        particles: &[Particle],
        p1: usize,
        p2: usize,
        kind: SpringKind,
        fabric: &FabricProperties,
    ) -> Self {
        Self {
            p1: ParticleId::from(p1),
            p2: ParticleId::from(p2),
            rest_length: particles[p1].position.distance(particles[p2].position),
            stiffness: fabric.stiffness_for(kind),
            kind,
        }
    }

    /// Current length of the spring.
    #[inline]
    pub fn current_length(&self, particles: &[Particle]) -> f32 {
        particles[self.p1.index()]
            .position
            .distance(particles[self.p2.index()].position)
    }
}

/// Everything a simulation step reads and writes.
#[derive(Debug, Clone, Default)]
pub struct ClothState {
    pub particles: Vec<Particle>,
    pub springs: Vec<Spring>,
    /// Grid dimensions in vertices. Zero when no cloth exists.
    pub dims: GridDims,
    /// Cloth size in meters (X, Z).
    pub size: Vec2,
}

impl ClothState {
    /// Number of particles.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Returns true if no cloth has been built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of springs of the given kind.
    pub fn spring_count(&self, kind: SpringKind) -> usize {
        self.springs.iter().filter(|s| s.kind == kind).count()
    }

    /// Current particle positions, in index order.
    pub fn positions(&self) -> Vec<Vec3> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Particle texture coordinates, in index order.
    pub fn uvs(&self) -> Vec<Vec2> {
        self.particles.iter().map(|p| p.uv).collect()
    }

    /// Re-stamps every spring's stiffness from `fabric`.
    pub fn restamp_stiffness(&mut self, fabric: &FabricProperties) {
        for spring in &mut self.springs {
            spring.stiffness = fabric.stiffness_for(spring.kind);
        }
    }

    /// Highest speed among free particles. Zero when every particle is pinned.
    pub fn max_free_speed(&self) -> f32 {
        self.particles
            .iter()
            .filter(|p| !p.pinned)
            .map(Particle::speed)
            .fold(0.0, f32::max)
    }

    /// True when every free particle is slower than the settle threshold.
    pub fn is_settled(&self) -> bool {
        self.particles
            .iter()
            .filter(|p| !p.pinned)
            .all(|p| p.speed() < SETTLED_SPEED_THRESHOLD)
    }

    /// Total kinetic energy of free particles: 0.5 * Σ m_i * ||v_i||².
    pub fn kinetic_energy(&self) -> f64 {
        self.particles
            .iter()
            .filter(|p| !p.pinned)
            .map(|p| 0.5 * p.mass as f64 * p.velocity.length_squared() as f64)
            .sum()
    }

    /// Largest relative deviation of any spring from its rest length.
    pub fn max_strain(&self) -> f32 {
        self.springs
            .iter()
            .filter(|s| s.rest_length > 0.0)
            .map(|s| ((s.current_length(&self.particles) - s.rest_length) / s.rest_length).abs())
            .fold(0.0, f32::max)
    }

    /// Drops all particles and springs.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
