//! Configuration schema: one struct per TOML section.

mod behavior;
mod logging;
mod measures;
mod panel;

pub use behavior::*;
pub use logging::*;
pub use measures::*;
pub use panel::*;

use serde::{Deserialize, Serialize};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the docking panel and its host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BerthConfig {
    pub panel: PanelConfig,
    pub measures: MeasuresConfig,
    pub behavior: BehaviorConfig,
    pub logging: LoggingConfig,
}
