//! Named behavior toggles for legacy-compatible docking quirks.

use serde::{Deserialize, Serialize};

/// Every toggle defaults to the corrected behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Swap a pane emptied by `float` with its first nested child.
    pub float_splitter_fix: bool,
    /// Make the dropped content active after a drag onto a pane.
    pub activate_on_dock_fix: bool,
    /// Keep tab order when a content returns to a pane it left.
    pub content_order_fix: bool,
    /// Activate the nearest remaining tab when the active one closes.
    pub select_closest_on_close: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            float_splitter_fix: true,
            activate_on_dock_fix: true,
            content_order_fix: true,
            select_closest_on_close: true,
        }
    }
}
