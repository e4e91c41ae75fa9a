//! Topological classes of distance constraint in the cloth grid.

use serde::{Deserialize, Serialize};

/// Which deformation mode a spring resists.
///
/// The kind decides which fabric stiffness coefficient the spring
/// is stamped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringKind {
    /// Adjacent grid neighbours. Resists stretch.
    Structural,
    /// Diagonal neighbours. Resists in-plane shear.
    Shear,
    /// Neighbours two cells apart. Resists out-of-plane bending.
    Bend,
}

impl SpringKind {
    /// Returns all spring kinds in generation order.
    pub fn all() -> &'static [SpringKind] {
        &[SpringKind::Structural, SpringKind::Shear, SpringKind::Bend]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            SpringKind::Structural => "structural",
            SpringKind::Shear => "shear",
            SpringKind::Bend => "bend",
        }
    }
}
