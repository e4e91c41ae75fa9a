//! Simulation settings.
//!
//! Parameters that control every step: gravity, wind, the fixed time
//! step and the relaxation / collision pass counts.

use drape_math::{is_nonzero, Vec3};
use drape_types::constants::{
    DEFAULT_COLLISION_ITERATIONS, DEFAULT_DT, DEFAULT_SOLVER_ITERATIONS, GRAVITY,
};
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// Configuration for the cloth simulation.
///
/// The time step is fixed: `step()` always advances by `time_step`.
/// Hosts that drive the simulation from a variable frame clock must
/// accumulate time themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Gravity vector [gx, gy, gz] in m/s².
    pub gravity: [f32; 3],

    /// Time step (seconds) advanced by each `step()`.
    pub time_step: f32,

    /// Spring relaxation passes per step.
    pub solver_iterations: u32,

    /// Collision passes per step.
    pub collision_iterations: u32,

    /// Wind acceleration [wx, wy, wz]. All-zero disables wind and turbulence.
    pub wind: [f32; 3],

    /// Width of the per-axis uniform jitter added to wind.
    pub turbulence: f32,

    /// Global damping multiplier, compounded with the fabric's damping.
    pub damping: f32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            gravity: [0.0, -GRAVITY, 0.0],
            time_step: DEFAULT_DT,
            solver_iterations: DEFAULT_SOLVER_ITERATIONS,
            collision_iterations: DEFAULT_COLLISION_ITERATIONS,
            wind: [0.0; 3],
            turbulence: 0.0,
            damping: 1.0,
        }
    }
}

impl SimulationSettings {
    /// Cheap settings for interactive previews (fewer passes).
    pub fn preview() -> Self {
        Self {
            solver_iterations: 4,
            collision_iterations: 1,
            ..Default::default()
        }
    }

    /// Stiffer, more accurate settings (more passes).
    pub fn high_quality() -> Self {
        Self {
            solver_iterations: 30,
            collision_iterations: 4,
            ..Default::default()
        }
    }

    /// Gravity as a vector.
    #[inline]
    pub fn gravity_vec(&self) -> Vec3 {
        Vec3::from_array(self.gravity)
    }

    /// Wind as a vector.
    #[inline]
    pub fn wind_vec(&self) -> Vec3 {
        Vec3::from_array(self.wind)
    }

    /// Returns true if wind is non-zero in any axis.
    #[inline]
    pub fn has_wind(&self) -> bool {
        is_nonzero(self.wind_vec())
    }

    /// Sets the wind vector and turbulence magnitude.
    pub fn with_wind(mut self, wind: Vec3, turbulence: f32) -> Self {
        self.wind = wind.to_array();
        self.turbulence = turbulence;
        self
    }

    /// Sets the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity.to_array();
        self
    }

    /// Checks values that would make every step meaningless.
    ///
    /// Meant for settings coming from outside (config files); the
    /// simulation itself never calls this mid-step.
    pub fn validate(&self) -> DrapeResult<()> {
        if !(self.time_step > 0.0 && self.time_step.is_finite()) {
            return Err(DrapeError::InvalidConfig(format!(
                "time_step must be positive and finite (got {})",
                self.time_step
            )));
        }
        let vectors = self.gravity.iter().chain(self.wind.iter());
        if vectors.copied().any(|v| !v.is_finite()) {
            return Err(DrapeError::InvalidConfig(
                "gravity and wind must be finite".into(),
            ));
        }
        if !self.turbulence.is_finite() || !self.damping.is_finite() {
            return Err(DrapeError::InvalidConfig(
                "turbulence and damping must be finite".into(),
            ));
        }
        Ok(())
    }
}
