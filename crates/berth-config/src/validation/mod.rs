//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator collects every
//! error into a single `ConfigError`.

mod helpers;
mod measures;
mod panel;


use crate::schema::BerthConfig;
use berth_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BerthConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    panel::validate_panel(&mut errors, config);
    measures::validate_measures(&mut errors, config);

    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
