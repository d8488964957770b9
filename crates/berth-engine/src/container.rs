//! The two kinds of nested-pane container: dock windows and float windows.

use std::fmt;

use berth_common::{DockState, FloatWindowId, PaneId, Rect};
use serde::{Deserialize, Serialize};

use crate::nested::NestedPanes;

/// Address of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerId {
    Dock(DockState),
    Float(FloatWindowId),
}

impl ContainerId {
    pub fn is_float(self) -> bool {
        matches!(self, ContainerId::Float(_))
    }

    /// The dock state panes take in this container.
    pub fn dock_state(self) -> DockState {
        match self {
            ContainerId::Dock(state) => state,
            ContainerId::Float(_) => DockState::Float,
        }
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerId::Dock(state) => write!(f, "{state:?}"),
            ContainerId::Float(id) => write!(f, "{id}"),
        }
    }
}

/// One of the five fixed containers: the four edges and the document area.
#[derive(Debug, Clone)]
pub struct DockWindow {
    pub(crate) state: DockState,
    pub(crate) nested: NestedPanes,
    pub(crate) visible: NestedPanes,
    pub(crate) bounds: Rect,
    pub(crate) displaying: Rect,
    pub(crate) splitter: Rect,
}

impl DockWindow {
    pub(crate) fn new(state: DockState) -> Self {
        Self {
            state,
            nested: NestedPanes::new(),
            visible: NestedPanes::new(),
            bounds: Rect::default(),
            displaying: Rect::default(),
            splitter: Rect::default(),
        }
    }

    pub fn dock_state(&self) -> DockState {
        self.state
    }

    pub fn nested_panes(&self) -> &NestedPanes {
        &self.nested
    }

    pub fn visible_panes(&self) -> &NestedPanes {
        &self.visible
    }

    pub fn is_visible(&self) -> bool {
        !self.visible.is_empty()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Bounds minus the inner splitter, or minus a 1px border for the
    /// document window.
    pub fn displaying_rectangle(&self) -> Rect {
        self.displaying
    }

    pub fn splitter_bounds(&self) -> Rect {
        self.splitter
    }

    /// Split `bounds` into the displaying rectangle and the splitter strip
    /// on the edge facing the document area.
    pub(crate) fn arrange(&mut self, bounds: Rect, splitter: f64) {
        self.bounds = bounds;
        let (displaying, bar) = match self.state {
            DockState::Document => (bounds.deflate(1.0, 1.0, 1.0, 1.0), Rect::default()),
            DockState::DockLeft => (
                bounds.deflate(0.0, 0.0, splitter, 0.0),
                Rect::new(bounds.right() - splitter, bounds.y, splitter, bounds.height),
            ),
            DockState::DockRight => (
                bounds.deflate(splitter, 0.0, 0.0, 0.0),
                Rect::new(bounds.x, bounds.y, splitter, bounds.height),
            ),
            DockState::DockTop => (
                bounds.deflate(0.0, 0.0, 0.0, splitter),
                Rect::new(bounds.x, bounds.bottom() - splitter, bounds.width, splitter),
            ),
            DockState::DockBottom => (
                bounds.deflate(0.0, splitter, 0.0, 0.0),
                Rect::new(bounds.x, bounds.y, bounds.width, splitter),
            ),
            _ => (bounds, Rect::default()),
        };
        self.displaying = displaying;
        self.splitter = bar;
    }

    pub(crate) fn collapse(&mut self) {
        self.bounds = Rect::default();
        self.displaying = Rect::default();
        self.splitter = Rect::default();
    }
}

/// A top-level window hosting panes outside the dock area.
#[derive(Debug, Clone)]
pub struct FloatWindow {
    pub(crate) id: FloatWindowId,
    pub(crate) bounds: Rect,
    pub(crate) nested: NestedPanes,
    pub(crate) visible: NestedPanes,
    pub(crate) allow_end_user_docking: bool,
}

impl FloatWindow {
    pub(crate) fn new(id: FloatWindowId, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            nested: NestedPanes::new(),
            visible: NestedPanes::new(),
            allow_end_user_docking: true,
        }
    }

    pub fn id(&self) -> FloatWindowId {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn nested_panes(&self) -> &NestedPanes {
        &self.nested
    }

    pub fn visible_panes(&self) -> &NestedPanes {
        &self.visible
    }

    pub fn is_visible(&self) -> bool {
        !self.visible.is_empty()
    }

    pub fn allow_end_user_docking(&self) -> bool {
        self.allow_end_user_docking
    }

    /// The caption strip along the top of the window.
    pub fn caption_bounds(&self, caption_height: f64) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            caption_height.min(self.bounds.height),
        )
    }

    /// The client area panes are laid out in.
    pub fn displaying_rectangle(&self, caption_height: f64) -> Rect {
        self.bounds.deflate(0.0, caption_height, 0.0, 0.0)
    }

    /// The single visible pane, when there is exactly one.
    pub fn sole_visible_pane(&self) -> Option<PaneId> {
        if self.visible.len() == 1 {
            self.visible.first()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_ids() {
        assert!(ContainerId::Float(FloatWindowId(1)).is_float());
        assert_eq!(
            ContainerId::Float(FloatWindowId(1)).dock_state(),
            DockState::Float
        );
        assert_eq!(
            ContainerId::Dock(DockState::DockTop).dock_state(),
            DockState::DockTop
        );
        assert_eq!(ContainerId::Float(FloatWindowId(3)).to_string(), "float-3");
    }

    #[test]
    fn left_window_splitter_on_inner_edge() {
        let mut w = DockWindow::new(DockState::DockLeft);
        w.arrange(Rect::new(0.0, 0.0, 200.0, 500.0), 4.0);
        assert_eq!(w.displaying_rectangle(), Rect::new(0.0, 0.0, 196.0, 500.0));
        assert_eq!(w.splitter_bounds(), Rect::new(196.0, 0.0, 4.0, 500.0));
    }

    #[test]
    fn bottom_window_splitter_on_top() {
        let mut w = DockWindow::new(DockState::DockBottom);
        w.arrange(Rect::new(0.0, 400.0, 800.0, 200.0), 4.0);
        assert_eq!(w.displaying_rectangle(), Rect::new(0.0, 404.0, 800.0, 196.0));
        assert_eq!(w.splitter_bounds(), Rect::new(0.0, 400.0, 800.0, 4.0));
    }

    #[test]
    fn document_window_has_border() {
        let mut w = DockWindow::new(DockState::Document);
        w.arrange(Rect::new(10.0, 10.0, 100.0, 100.0), 4.0);
        assert_eq!(w.displaying_rectangle(), Rect::new(11.0, 11.0, 98.0, 98.0));
        assert!(w.splitter_bounds().is_empty());
    }

    #[test]
    fn float_window_client_area() {
        let w = FloatWindow::new(FloatWindowId(1), Rect::new(100.0, 100.0, 300.0, 300.0));
        assert_eq!(w.caption_bounds(22.0), Rect::new(100.0, 100.0, 300.0, 22.0));
        assert_eq!(
            w.displaying_rectangle(22.0),
            Rect::new(100.0, 122.0, 300.0, 278.0)
        );
        assert!(!w.is_visible());
        assert_eq!(w.sole_visible_pane(), None);
    }
}
