//! Force accumulation and damped Verlet integration.
//!
//! Forces are applied as accelerations: gravity and wind act on every
//! free particle equally regardless of its mass.

use drape_material::FabricProperties;
use drape_math::uniform_jitter;
use rand::Rng;

use crate::config::SimulationSettings;
use crate::state::ClothState;

/// Rebuilds the acceleration of every free particle.
///
/// `a = gravity [+ wind + jitter] - velocity × air_resistance`.
/// Wind and jitter are only added when the wind vector is non-zero;
/// jitter is resampled per particle per call, so it has no spatial or
/// temporal coherence.
pub fn apply_forces<R: Rng + ?Sized>(
    state: &mut ClothState,
    settings: &SimulationSettings,
    fabric: &FabricProperties,
    rng: &mut R,
) {
    let gravity = settings.gravity_vec();
    let wind = settings.has_wind().then(|| settings.wind_vec());

    for particle in state.particles.iter_mut().filter(|p| !p.pinned) {
        particle.acceleration = gravity;
        if let Some(wind) = wind {
            particle.acceleration += wind + uniform_jitter(rng, settings.turbulence);
        }
        particle.acceleration -= particle.velocity * fabric.air_resistance;
    }
}

/// Advances every free particle by one Verlet step.
///
/// `p' = p + (p - prev) × damping + a × dt²`, then `prev = p` and
/// `velocity = (p' - prev) / dt`. Pinned particles are left untouched.
pub fn integrate(state: &mut ClothState, dt: f32, damping: f32) {
    let dt2 = dt * dt;
    let inv_dt = 1.0 / dt;

    for particle in state.particles.iter_mut().filter(|p| !p.pinned) {
        let current = particle.position;
        let inertia = (current - particle.previous_position) * damping;
        particle.position = current + inertia + particle.acceleration * dt2;
        particle.previous_position = current;
        particle.velocity = (particle.position - particle.previous_position) * inv_dt;
    }
}

/// Damping applied by [`integrate`]: fabric retention × global multiplier.
#[inline]
pub fn combined_damping(fabric: &FabricProperties, settings: &SimulationSettings) -> f32 {
    fabric.damping * settings.damping
}
