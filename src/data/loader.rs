//! RON config loader
//!
//! Loads the generator config from an external RON file, with fallback to
//! hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ConfigError;
use crate::world::generation::GeneratorConfig;

/// File name looked up in the platform config directory
pub const CONFIG_FILE: &str = "generator.ron";

/// Platform config path, e.g. `~/.config/wormdig/generator.ron`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wormdig").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Parse a config from RON text. Missing fields take their defaults.
pub fn parse_config(content: &str) -> Result<GeneratorConfig, ConfigError> {
    Ok(ron::from_str(content)?)
}

/// Load a config from a RON file
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Load the config the binary should run with.
///
/// An explicit path must load. Otherwise the platform config file is tried
/// and any problem with it falls back to defaults with a warning.
pub fn load_or_default(explicit: Option<&Path>) -> Result<GeneratorConfig, ConfigError> {
    if let Some(path) = explicit {
        log::info!("Loading generator config from {}", path.display());
        return load_config(path);
    }

    let Some(path) = default_config_path() else {
        return Ok(GeneratorConfig::default());
    };
    if !path.exists() {
        return Ok(GeneratorConfig::default());
    }

    match load_config(&path) {
        Ok(config) => {
            log::info!("Loaded generator config from {}", path.display());
            Ok(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            Ok(GeneratorConfig::default())
        }
    }
}

/// Pretty RON text for a config
pub fn config_to_ron(config: &GeneratorConfig) -> Result<String, ConfigError> {
    Ok(ron::ser::to_string_pretty(
        config,
        ron::ser::PrettyConfig::default(),
    )?)
}

/// Write the default config to a RON file, creating parent directories
pub fn export_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let ron = config_to_ron(&GeneratorConfig::default())?;
    fs::write(path, ron).map_err(write_err)?;
    Ok(())
}
