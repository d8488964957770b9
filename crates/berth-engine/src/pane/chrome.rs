//! Caption, tab strip and content rectangles of a pane.

use berth_common::{DockState, DocumentStyle, Point, Rect, TabStripLocation};

use crate::theme::Theme;

/// Rectangles exposed to the rendering layer for one pane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaneChrome {
    pub caption: Rect,
    pub tab_strip: Rect,
    pub content: Rect,
}

/// What the chrome layout needs to know about a pane.
#[derive(Debug, Clone, Copy)]
pub struct ChromeInput {
    pub bounds: Rect,
    pub state: DockState,
    pub displaying_count: usize,
    /// The pane is the only visible pane of its float window.
    pub alone_in_float_window: bool,
    pub document_style: DocumentStyle,
    pub tab_location: TabStripLocation,
}

pub fn has_caption(input: &ChromeInput) -> bool {
    match input.state {
        DockState::Document | DockState::Hidden | DockState::Unknown => false,
        DockState::Float => !input.alone_in_float_window,
        state => !state.is_auto_hide(),
    }
}

pub fn compute_chrome(input: &ChromeInput, theme: &Theme) -> PaneChrome {
    let rect = input.bounds;
    let caption = if has_caption(input) {
        let height = theme.caption.caption_height(input.state).min(rect.height);
        Rect::new(rect.x, rect.y, rect.width, height)
    } else {
        Rect::default()
    };

    if input.state == DockState::Document {
        let shows_tabs = input.displaying_count > 1
            || (input.displaying_count == 1 && input.document_style != DocumentStyle::DockingSdi);
        let height = if shows_tabs {
            theme.tab_strip.strip_height(true).min(rect.height)
        } else {
            0.0
        };
        let (tab_strip, content) = match input.tab_location {
            TabStripLocation::Top => (
                Rect::new(rect.x, rect.y, rect.width, height),
                rect.deflate(0.0, height, 0.0, 0.0),
            ),
            TabStripLocation::Bottom => (
                Rect::new(rect.x, rect.bottom() - height, rect.width, height),
                rect.deflate(0.0, 0.0, 0.0, height),
            ),
        };
        return PaneChrome {
            caption,
            tab_strip: if shows_tabs { tab_strip } else { Rect::default() },
            content,
        };
    }

    let below_caption = rect.deflate(0.0, caption.height, 0.0, 0.0);
    let tab_strip = if input.displaying_count > 1 && !input.state.is_auto_hide() {
        let height = theme.tab_strip.strip_height(false).min(below_caption.height);
        Rect::new(rect.x, rect.bottom() - height, rect.width, height)
    } else {
        Rect::default()
    };
    PaneChrome {
        caption,
        tab_strip,
        content: below_caption.deflate(0.0, 0.0, 0.0, tab_strip.height),
    }
}

/// Lay tabs out left to right. When they do not fit, every tab shrinks by
/// the same factor.
pub fn tab_rects(strip: Rect, widths: &[f64]) -> Vec<Rect> {
    let total: f64 = widths.iter().sum();
    let scale = if total > strip.width && total > 0.0 {
        strip.width / total
    } else {
        1.0
    };
    let mut x = strip.x;
    widths
        .iter()
        .map(|w| {
            let width = (w * scale).floor();
            let rect = Rect::new(x, strip.y, width, strip.height);
            x += width;
            rect
        })
        .collect()
}

pub fn hit_tab(tabs: &[Rect], point: Point) -> Option<usize> {
    tabs.iter().position(|r| r.contains(point))
}
