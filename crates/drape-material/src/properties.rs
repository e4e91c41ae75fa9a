//! Physical fabric properties.

use drape_types::SpringKind;
use serde::{Deserialize, Serialize};

/// Physical properties of a fabric material.
///
/// Stiffness, damping and friction are dimensionless multipliers in
/// `0.0–1.0`; `weight` is g/m² and `thickness` is meters. Values are not
/// range-checked. Callers supply physically sensible numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricProperties {
    /// Preset name (e.g., "silk").
    pub name: String,

    /// Areal weight in g/m². Controls particle mass.
    pub weight: f32,

    /// Stretch resistance. Stamped onto structural springs.
    pub stretch_stiffness: f32,

    /// Bend resistance. Stamped onto bend springs.
    pub bend_stiffness: f32,

    /// Shear resistance. Stamped onto shear springs.
    pub shear_stiffness: f32,

    /// Verlet velocity retention per step (1.0 = no loss).
    pub damping: f32,

    /// Tangential velocity retained after a collision.
    pub friction: f32,

    /// Linear drag coefficient opposing particle velocity.
    pub air_resistance: f32,

    /// Fabric thickness in meters. Used as the collision offset.
    pub thickness: f32,
}

impl FabricProperties {
    /// Returns the stiffness coefficient a spring of `kind` should carry.
    pub fn stiffness_for(&self, kind: SpringKind) -> f32 {
        match kind {
            SpringKind::Structural => self.stretch_stiffness,
            SpringKind::Shear => self.shear_stiffness,
            SpringKind::Bend => self.bend_stiffness,
        }
    }

    /// Returns the mass per particle for `n` particles sharing
    /// `total_area` square meters evenly.
    ///
    /// Edge and corner particles get the same share as interior ones.
    pub fn mass_per_particle(&self, n: usize, total_area: f32) -> f32 {
        if n == 0 {
            return 0.0;
        }
        // weight is g/m², convert to kg/m² then distribute
        (self.weight / 1000.0) * total_area / n as f32
    }

    /// Merges a partial override into this profile.
    pub fn apply(&mut self, overrides: &FabricOverrides) {
        if let Some(name) = &overrides.name {
            self.name.clone_from(name);
        }
        let fields = [
            (&mut self.weight, overrides.weight),
            (&mut self.stretch_stiffness, overrides.stretch_stiffness),
            (&mut self.bend_stiffness, overrides.bend_stiffness),
            (&mut self.shear_stiffness, overrides.shear_stiffness),
            (&mut self.damping, overrides.damping),
            (&mut self.friction, overrides.friction),
            (&mut self.air_resistance, overrides.air_resistance),
            (&mut self.thickness, overrides.thickness),
        ];
        for (field, value) in fields {
            if let Some(v) = value {
                *field = v;
            }
        }
    }

    /// Returns a copy with `overrides` merged in.
    pub fn with_overrides(mut self, overrides: &FabricOverrides) -> Self {
        self.apply(overrides);
        self
    }
}

/// Cotton, the preset a new simulation starts with.
impl Default for FabricProperties {
    fn default() -> Self {
        crate::database::cotton()
    }
}

/// A partial edit of [`FabricProperties`]. `None` fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FabricOverrides {
    pub name: Option<String>,
    pub weight: Option<f32>,
    pub stretch_stiffness: Option<f32>,
    pub bend_stiffness: Option<f32>,
    pub shear_stiffness: Option<f32>,
    pub damping: Option<f32>,
    pub friction: Option<f32>,
    pub air_resistance: Option<f32>,
    pub thickness: Option<f32>,
}

impl FabricOverrides {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
