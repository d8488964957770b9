//! Pixel measures consumed by the default theme.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasuresConfig {
    /// Width of pane and dock window splitters (valid range: 1-16).
    pub splitter_size: u32,
    /// Extra padding around the dock area (valid range: 0-64).
    pub dock_padding: u32,
    pub auto_hide_strip_height: u32,
    pub caption_height: u32,
    pub tab_strip_height: u32,
    pub tab_min_width: u32,
    pub tab_max_width: u32,
    /// Approximate width of one tab-text character.
    pub tab_char_width: u32,
    pub float_caption_height: u32,
    /// Smallest size any pane or dock window is laid out at (valid range: 8-200).
    pub min_pane_size: u32,
    /// Side length of the pane diamond indicator.
    pub pane_indicator_size: u32,
    pub panel_indicator_size: u32,
    /// Distance between panel indicators and the area they dock into.
    pub indicator_margin: u32,
}

impl Default for MeasuresConfig {
    fn default() -> Self {
        Self {
            splitter_size: 4,
            dock_padding: 0,
            auto_hide_strip_height: 22,
            caption_height: 18,
            tab_strip_height: 22,
            tab_min_width: 32,
            tab_max_width: 200,
            tab_char_width: 7,
            float_caption_height: 22,
            min_pane_size: 24,
            pane_indicator_size: 88,
            panel_indicator_size: 32,
            indicator_margin: 10,
        }
    }
}
