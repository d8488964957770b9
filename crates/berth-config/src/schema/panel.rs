//! Panel-level docking settings.

use berth_common::{DocumentStyle, TabStripLocation};
use serde::{Deserialize, Serialize};

/// Initial proportions and end-user permissions of the dock panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Left edge share: a fraction below 1, or absolute pixels at 1 and above.
    pub dock_left_portion: f64,
    pub dock_right_portion: f64,
    pub dock_top_portion: f64,
    pub dock_bottom_portion: f64,
    /// Size used for newly created float windows (valid range: 50-4000).
    pub default_float_window_width: u32,
    pub default_float_window_height: u32,
    pub allow_end_user_docking: bool,
    pub allow_end_user_nested_docking: bool,
    pub document_style: DocumentStyle,
    pub document_tab_strip_location: TabStripLocation,
    pub show_auto_hide_content_on_hover: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            dock_left_portion: 0.25,
            dock_right_portion: 0.25,
            dock_top_portion: 0.25,
            dock_bottom_portion: 0.25,
            default_float_window_width: 300,
            default_float_window_height: 300,
            allow_end_user_docking: true,
            allow_end_user_nested_docking: true,
            document_style: DocumentStyle::DockingMdi,
            document_tab_strip_location: TabStripLocation::Top,
            show_auto_hide_content_on_hover: true,
        }
    }
}
