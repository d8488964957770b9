use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `--log-level` is absent.
    pub level: String,
    /// Emit layout passes at debug level.
    pub log_layout_passes: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "berth=info".into(),
            log_layout_passes: false,
        }
    }
}
