//! Random jitter for turbulent forces.

use glam::Vec3;
use rand::Rng;

/// Returns a vector whose components are independently uniform in
/// `[-magnitude / 2, +magnitude / 2]`.
///
/// A zero magnitude yields `Vec3::ZERO` but still consumes three samples,
/// so the RNG stream does not depend on the turbulence setting.
pub fn uniform_jitter<R: Rng + ?Sized>(rng: &mut R, magnitude: f32) -> Vec3 {
    let x = (rng.random::<f32>() - 0.5) * magnitude;
    let y = (rng.random::<f32>() - 0.5) * magnitude;
    let z = (rng.random::<f32>() - 0.5) * magnitude;
    Vec3::new(x, y, z)
}
