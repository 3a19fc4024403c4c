use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::solver::{PathLimits, SearchLimits};

/// Tunables for both solvers. Every field has a default, so a config file
/// only needs the values it changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchLimits,
    pub path: PathLimits,
}

/// Load an `EngineConfig` from a JSON file.
///
/// # Errors
///
/// `Io` when the file cannot be read, `Json` when it does not parse.
pub fn load_config_from_json<P: AsRef<Path>>(path: P) -> Result<EngineConfig, ConfigError> {
    let data = fs::read_to_string(path.as_ref())?;
    let config: EngineConfig = serde_json::from_str(&data)?;
    Ok(config)
}
