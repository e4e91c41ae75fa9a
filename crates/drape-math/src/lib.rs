//! # drape-math
//!
//! Math primitives for the drape cloth simulator.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`) as the canonical vector types
//! - [`GridDims`]: vertex-grid dimensions and index arithmetic
//! - Uniform per-axis jitter used for wind turbulence

pub mod grid;
pub mod jitter;

// Re-export glam types as the canonical math types for drape.
pub use glam::{Vec2, Vec3};

pub use grid::GridDims;
pub use jitter::uniform_jitter;

/// Returns true if any component of `v` is non-zero.
#[inline]
pub fn is_nonzero(v: Vec3) -> bool {
    v.x != 0.0 || v.y != 0.0 || v.z != 0.0
}
