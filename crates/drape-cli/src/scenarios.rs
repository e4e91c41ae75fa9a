//! Canned scenarios: cloth, pins and colliders for each demo case.
//!
//! 1. **Hanging**: cloth pinned along its first row swings down
//! 2. **Drop**: free cloth falls onto a floor
//! 3. **Drape**: free cloth falls over a sphere resting above a floor

use std::fmt;
use std::str::FromStr;

use drape_contact::ColliderShape;
use drape_math::Vec3;
use drape_sim::Simulation;
use drape_types::DrapeResult;

/// Which scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    Hanging,
    Drop,
    Drape,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[ScenarioKind::Hanging, ScenarioKind::Drop, ScenarioKind::Drape]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Hanging => "hanging",
            ScenarioKind::Drop => "drop",
            ScenarioKind::Drape => "drape",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::all().iter().map(|k| k.name()).collect();
                format!("unknown scenario '{s}' (available: {})", names.join(", "))
            })
    }
}

/// A fully specified scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub kind: ScenarioKind,
    /// Cloth size in meters (X, Z).
    pub size: (f32, f32),
    /// Cells along X and Z.
    pub resolution: (usize, usize),
    /// Center of the cloth at creation.
    pub origin: Vec3,
    /// Pin the first grid row.
    pub pin_top_edge: bool,
    /// Colliders as `(shape, position)`.
    pub colliders: Vec<(ColliderShape, Vec3)>,
    /// Default number of steps.
    pub steps: u32,
}

impl Scenario {
    /// A 1m × 1m cloth at 20×20 resolution, pinned along its first row,
    /// swinging for 2 seconds at 60fps.
    pub fn hanging() -> Self {
        Self {
            kind: ScenarioKind::Hanging,
            size: (1.0, 1.0),
            resolution: (20, 20),
            origin: Vec3::new(0.0, 1.0, 0.0),
            pin_top_edge: true,
            colliders: Vec::new(),
            steps: 120,
        }
    }

    /// A 1m × 1m cloth released half a meter above a floor at y = 0.
    pub fn drop() -> Self {
        Self {
            kind: ScenarioKind::Drop,
            size: (1.0, 1.0),
            resolution: (20, 20),
            origin: Vec3::new(0.0, 0.5, 0.0),
            pin_top_edge: false,
            colliders: vec![(ColliderShape::Plane { normal: Vec3::Y }, Vec3::ZERO)],
            steps: 120,
        }
    }

    /// A 1.5m × 1.5m cloth falling over a 0.3m sphere, with a floor
    /// below to catch the hem.
    pub fn drape() -> Self {
        Self {
            kind: ScenarioKind::Drape,
            size: (1.5, 1.5),
            resolution: (24, 24),
            origin: Vec3::new(0.0, 0.6, 0.0),
            pin_top_edge: false,
            colliders: vec![
                (ColliderShape::Sphere { radius: 0.3 }, Vec3::ZERO),
                (
                    ColliderShape::Plane { normal: Vec3::Y },
                    Vec3::new(0.0, -0.4, 0.0),
                ),
            ],
            steps: 180,
        }
    }

    /// Create a scenario from its kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::Hanging => Self::hanging(),
            ScenarioKind::Drop => Self::drop(),
            ScenarioKind::Drape => Self::drape(),
        }
    }

    /// Builds the cloth, pins and colliders into `sim`.
    pub fn setup(&self, sim: &mut Simulation) -> DrapeResult<()> {
        for (shape, position) in &self.colliders {
            sim.add_collider(shape.clone(), *position);
        }
        let (width, height) = self.size;
        let (rx, ry) = self.resolution;
        sim.create_cloth(width, height, rx, ry, self.origin)?;
        if self.pin_top_edge {
            sim.pin_top_edge();
        }
        Ok(())
    }
}
