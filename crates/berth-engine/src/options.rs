//! Construction-time options for a [`DockPanel`](crate::DockPanel).

use berth_common::{DocumentStyle, Size, TabStripLocation};
use serde::{Deserialize, Serialize};

/// The four edge portions. Values below 1 are fractions of the dock area,
/// values of 1 or more are absolute pixel sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DockPortions {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for DockPortions {
    fn default() -> Self {
        Self {
            left: 0.25,
            right: 0.25,
            top: 0.25,
            bottom: 0.25,
        }
    }
}

/// Switches between corrected and legacy structural behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorToggles {
    /// Swap a pane that became hidden by floating with its first child.
    pub float_splitter_fix: bool,
    /// Re-activate the moved content after a fill drop onto another pane.
    pub activate_on_dock_fix: bool,
    /// Keep a re-shown content at its original tab position instead of
    /// moving it to the end of the pane.
    pub content_order_fix: bool,
    /// When the active content closes, select its nearest sibling instead of
    /// the first displaying content.
    pub select_closest_on_close: bool,
}

impl Default for BehaviorToggles {
    fn default() -> Self {
        Self {
            float_splitter_fix: true,
            activate_on_dock_fix: true,
            content_order_fix: true,
            select_closest_on_close: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockOptions {
    pub portions: DockPortions,
    pub default_float_window_size: Size,
    pub allow_end_user_docking: bool,
    pub allow_end_user_nested_docking: bool,
    pub document_style: DocumentStyle,
    pub document_tab_strip_location: TabStripLocation,
    pub show_auto_hide_content_on_hover: bool,
    pub behavior: BehaviorToggles,
}

impl Default for DockOptions {
    fn default() -> Self {
        Self {
            portions: DockPortions::default(),
            default_float_window_size: Size::new(300.0, 300.0),
            allow_end_user_docking: true,
            allow_end_user_nested_docking: true,
            document_style: DocumentStyle::DockingMdi,
            document_tab_strip_location: TabStripLocation::Top,
            show_auto_hide_content_on_hover: true,
            behavior: BehaviorToggles::default(),
        }
    }
}
