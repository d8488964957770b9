//! Measurement seam between the engine and whatever draws it.
//!
//! The engine never paints. It asks one small trait per widget role for the
//! sizes it needs to lay out captions, tab strips and drag indicators.

use std::fmt;

use berth_common::DockState;

/// Measures pane captions.
pub trait PaneCaptionRenderer: fmt::Debug {
    fn caption_height(&self, state: DockState) -> f64;
}

/// Measures pane tab strips and their tabs.
pub trait TabStripRenderer: fmt::Debug {
    fn strip_height(&self, document: bool) -> f64;
    fn tab_width(&self, text: &str) -> f64;
}

/// Measures the drag indicators.
pub trait IndicatorRenderer: fmt::Debug {
    /// Side length of the pane diamond.
    fn pane_indicator_size(&self) -> f64;
    /// Side length of a panel-edge indicator.
    fn panel_indicator_size(&self) -> f64;
    /// Gap between a panel indicator and the edge of the area it targets.
    fn indicator_margin(&self) -> f64;
}

/// Panel-wide measures that do not belong to a single widget role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeMeasures {
    pub splitter_size: f64,
    pub dock_padding: f64,
    pub auto_hide_strip_height: f64,
    pub float_caption_height: f64,
    pub min_pane_size: f64,
}

impl Default for ThemeMeasures {
    fn default() -> Self {
        Self {
            splitter_size: 4.0,
            dock_padding: 0.0,
            auto_hide_strip_height: 22.0,
            float_caption_height: 22.0,
            min_pane_size: 24.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DefaultCaption {
    pub height: f64,
}

impl PaneCaptionRenderer for DefaultCaption {
    fn caption_height(&self, _state: DockState) -> f64 {
        self.height
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DefaultTabStrip {
    pub height: f64,
    pub min_tab_width: f64,
    pub max_tab_width: f64,
    pub char_width: f64,
}

impl TabStripRenderer for DefaultTabStrip {
    fn strip_height(&self, _document: bool) -> f64 {
        self.height
    }

    fn tab_width(&self, text: &str) -> f64 {
        let measured = text.chars().count() as f64 * self.char_width + 2.0 * self.char_width;
        measured.clamp(self.min_tab_width, self.max_tab_width)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DefaultIndicators {
    pub pane_size: f64,
    pub panel_size: f64,
    pub margin: f64,
}

impl IndicatorRenderer for DefaultIndicators {
    fn pane_indicator_size(&self) -> f64 {
        self.pane_size
    }

    fn panel_indicator_size(&self) -> f64 {
        self.panel_size
    }

    fn indicator_margin(&self) -> f64 {
        self.margin
    }
}

/// The set of renderers a panel measures with.
#[derive(Debug)]
pub struct Theme {
    pub measures: ThemeMeasures,
    pub caption: Box<dyn PaneCaptionRenderer>,
    pub tab_strip: Box<dyn TabStripRenderer>,
    pub indicators: Box<dyn IndicatorRenderer>,
}

impl Theme {
    pub fn new(
        measures: ThemeMeasures,
        caption: impl PaneCaptionRenderer + 'static,
        tab_strip: impl TabStripRenderer + 'static,
        indicators: impl IndicatorRenderer + 'static,
    ) -> Self {
        Self {
            measures,
            caption: Box::new(caption),
            tab_strip: Box::new(tab_strip),
            indicators: Box::new(indicators),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new(
            ThemeMeasures::default(),
            DefaultCaption { height: 18.0 },
            DefaultTabStrip {
                height: 22.0,
                min_tab_width: 32.0,
                max_tab_width: 200.0,
                char_width: 7.0,
            },
            DefaultIndicators {
                pane_size: 88.0,
                panel_size: 32.0,
                margin: 10.0,
            },
        )
    }
}
