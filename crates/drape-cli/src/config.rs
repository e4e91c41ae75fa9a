//! Settings files.

use std::path::Path;

use drape_solver::SimulationSettings;
use drape_types::{DrapeError, DrapeResult};

/// Parses and validates simulation settings from TOML text.
///
/// Missing keys take their default values.
pub fn parse_settings(text: &str) -> DrapeResult<SimulationSettings> {
    let settings: SimulationSettings =
        toml::from_str(text).map_err(|e| DrapeError::Serialization(e.to_string()))?;
    settings.validate()?;
    Ok(settings)
}

/// Reads settings from a TOML file.
pub fn load_settings(path: &Path) -> DrapeResult<SimulationSettings> {
    let text = std::fs::read_to_string(path)?;
    let settings = parse_settings(&text)?;
    log::debug!("loaded settings from {}", path.display());
    Ok(settings)
}
