//! Write BerthConfig to TOML on disk.
//!
//! Writes are atomic (write to `.tmp`, then rename) so a crash mid-write
//! never leaves a truncated config behind.

use std::path::Path;

use berth_common::ConfigError;

use crate::schema::BerthConfig;
use crate::toml_loader::default_config_path;

/// Write config to the platform default path.
pub fn save_config(config: &BerthConfig) -> Result<(), ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)
}

/// Write config to a specific path, creating parent directories.
pub fn save_config_to_path(config: &BerthConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = crate::config_to_toml(config)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str).map_err(|e| {
        ConfigError::WriteError(format!(
            "failed to write config to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, &toml_str).map_err(|e2| {
            ConfigError::WriteError(format!("failed to write config to {}: {e2}", path.display()))
        })?;
    }

    tracing::debug!(path = %path.display(), "config saved to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("berth.toml");

        let mut config = BerthConfig::default();
        config.panel.dock_left_portion = 0.4;
        config.behavior.float_splitter_fix = false;
        save_config_to_path(&config, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: BerthConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed.panel.dock_left_portion, 0.4);
        assert!(!parsed.behavior.float_splitter_fix);
        assert_eq!(parsed.logging.level, config.logging.level);
    }

    #[test]
    fn save_config_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("berth.toml");

        save_config_to_path(&BerthConfig::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_config_cleans_up_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("berth.toml");

        save_config_to_path(&BerthConfig::default(), &path).unwrap();

        let tmp_path = path.with_extension("toml.tmp");
        assert!(!tmp_path.exists(), "tmp file should be renamed away");
    }
}
