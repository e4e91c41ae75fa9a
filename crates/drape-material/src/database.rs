//! Material database with the built-in fabric presets.
//!
//! The eight presets are data, not logic. Simulations reproduce
//! them exactly, so changing a number here changes every drape that
//! loads the preset.

use std::collections::HashMap;

use crate::properties::FabricProperties;

/// A named collection of fabric presets.
///
/// Built once, then injected into a simulation. Lookups are pure:
/// the database is never mutated by the simulation that reads it.
#[derive(Debug, Clone)]
pub struct MaterialDatabase {
    materials: HashMap<String, FabricProperties>,
}

impl MaterialDatabase {
    /// Creates a new database with the 8 built-in fabric presets.
    pub fn with_defaults() -> Self {
        let mut db = Self::empty();

        db.register(silk());
        db.register(cotton());
        db.register(denim());
        db.register(wool());
        db.register(leather());
        db.register(jersey());
        db.register(chiffon());
        db.register(velvet());

        db
    }

    /// Creates an empty database.
    pub fn empty() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Registers a material. Overwrites if the name already exists.
    pub fn register(&mut self, props: FabricProperties) {
        self.materials.insert(props.name.clone(), props);
    }

    /// Looks up a material by name. Returns `None` if not found.
    pub fn get(&self, name: &str) -> Option<&FabricProperties> {
        self.materials.get(name)
    }

    /// Returns true if a material with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    /// Returns all registered material names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.materials.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if the database is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialDatabase {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Built-in Fabric Presets ──────────────────────────────────────────

/// Silk (80gsm): light and fluid, barely resists bending.
fn silk() -> FabricProperties {
    FabricProperties {
        name: "silk".into(),
        weight: 80.0,
        stretch_stiffness: 0.2,
        bend_stiffness: 0.05,
        shear_stiffness: 0.15,
        damping: 0.98,
        friction: 0.3,
        air_resistance: 0.02,
        thickness: 0.0002,
    }
}

/// Cotton (150gsm): the default all-rounder.
pub(crate) fn cotton() -> FabricProperties {
    FabricProperties {
        name: "cotton".into(),
        weight: 150.0,
        stretch_stiffness: 0.5,
        bend_stiffness: 0.3,
        shear_stiffness: 0.4,
        damping: 0.97,
        friction: 0.5,
        air_resistance: 0.015,
        thickness: 0.0005,
    }
}

/// Denim (400gsm): heavy twill, holds sharp creases.
fn denim() -> FabricProperties {
    FabricProperties {
        name: "denim".into(),
        weight: 400.0,
        stretch_stiffness: 0.8,
        bend_stiffness: 0.7,
        shear_stiffness: 0.75,
        damping: 0.95,
        friction: 0.7,
        air_resistance: 0.01,
        thickness: 0.001,
    }
}

/// Wool (300gsm): thick and springy.
fn wool() -> FabricProperties {
    FabricProperties {
        name: "wool".into(),
        weight: 300.0,
        stretch_stiffness: 0.4,
        bend_stiffness: 0.4,
        shear_stiffness: 0.35,
        damping: 0.96,
        friction: 0.6,
        air_resistance: 0.012,
        thickness: 0.0015,
    }
}

/// Leather (800gsm): stiffest preset, very little drape.
fn leather() -> FabricProperties {
    FabricProperties {
        name: "leather".into(),
        weight: 800.0,
        stretch_stiffness: 0.9,
        bend_stiffness: 0.85,
        shear_stiffness: 0.8,
        damping: 0.93,
        friction: 0.8,
        air_resistance: 0.005,
        thickness: 0.002,
    }
}

/// Jersey (180gsm): stretchy knit.
fn jersey() -> FabricProperties {
    FabricProperties {
        name: "jersey".into(),
        weight: 180.0,
        stretch_stiffness: 0.3,
        bend_stiffness: 0.15,
        shear_stiffness: 0.2,
        damping: 0.97,
        friction: 0.45,
        air_resistance: 0.018,
        thickness: 0.0006,
    }
}

/// Chiffon (50gsm): sheer, floats on air.
fn chiffon() -> FabricProperties {
    FabricProperties {
        name: "chiffon".into(),
        weight: 50.0,
        stretch_stiffness: 0.15,
        bend_stiffness: 0.02,
        shear_stiffness: 0.1,
        damping: 0.99,
        friction: 0.25,
        air_resistance: 0.03,
        thickness: 0.0001,
    }
}

/// Velvet (350gsm): dense pile, grips on contact.
fn velvet() -> FabricProperties {
    FabricProperties {
        name: "velvet".into(),
        weight: 350.0,
        stretch_stiffness: 0.6,
        bend_stiffness: 0.45,
        shear_stiffness: 0.5,
        damping: 0.95,
        friction: 0.75,
        air_resistance: 0.01,
        thickness: 0.0012,
    }
}
