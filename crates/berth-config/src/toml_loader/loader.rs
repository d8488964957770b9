//! Reading `berth.toml`.

use crate::schema::BerthConfig;
use crate::validation;
use berth_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Read the config at `path`, as given by `--config`. Out-of-range values
/// are only warned about.
pub fn load_from_path(path: &Path) -> Result<BerthConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: BerthConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}; keeping parsed values");
    }

    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Read `berth/berth.toml` under the user config directory, writing the
/// commented template there first if it is missing.
pub fn load_default() -> Result<BerthConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "writing default config");
            create_default_config(&path)?;
            Ok(BerthConfig::default())
        }
        Err(e) => Err(e),
    }
}
