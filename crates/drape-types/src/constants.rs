//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Default number of spring relaxation passes per timestep.
pub const DEFAULT_SOLVER_ITERATIONS: u32 = 10;

/// Default number of collision passes per timestep.
pub const DEFAULT_COLLISION_ITERATIONS: u32 = 2;

/// Speed (m/s) below which a free particle counts as at rest.
pub const SETTLED_SPEED_THRESHOLD: f32 = 0.0001;

/// Share of a spring correction applied to each endpoint.
pub const SPRING_CORRECTION_SHARE: f32 = 0.5;

/// Name of the fabric preset a new simulation starts with.
pub const DEFAULT_FABRIC: &str = "cotton";
