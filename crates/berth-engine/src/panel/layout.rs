//! The layout pass and the geometry queries built on it.

use berth_common::{ContentId, DockState, FloatWindowId, PaneId, Point, Rect};
use tracing::debug;

use crate::container::ContainerId;
use crate::geometry::{opposing_edge_sizes, portion_to_size};
use crate::nested::{NestedPanes, NestedStatus, PaneBounds};
use crate::pane::{compute_chrome, hit_tab, tab_rects, ChromeInput, PaneChrome};

use super::DockPanel;

impl DockPanel {
    /// Resize the client rectangle the panel lays out in.
    pub fn set_client_rect(&mut self, client: Rect) {
        if self.client == client {
            return;
        }
        let mut panel = self.suspend_layout();
        panel.client = client;
        panel.request_layout();
    }

    /// Client rectangle minus the dock padding of each edge.
    pub fn dock_area(&self) -> Rect {
        self.dock_area
    }

    /// What remains of the dock area once every visible edge window is laid
    /// out.
    pub fn document_window_bounds(&self) -> Rect {
        self.document_bounds
    }

    /// Padding on `edge`: the auto-hide strip height when the edge holds a
    /// displaying auto-hide pane, the theme's dock padding otherwise.
    pub fn dock_padding(&self, edge: DockState) -> f64 {
        let auto_hide = edge.toggle_auto_hide();
        let occupied = auto_hide.is_auto_hide()
            && self
                .panes
                .values()
                .any(|p| p.dock_state == auto_hide && !self.displaying_contents(p.id).is_empty());
        if occupied {
            self.theme.measures.auto_hide_strip_height
        } else {
            self.theme.measures.dock_padding
        }
    }

    /// Pixel size of an edge dock window, measured across its edge.
    pub fn dock_window_size(&self, edge: DockState) -> f64 {
        let min = self.theme.measures.min_pane_size;
        let area = self.dock_area;
        let (portion, opposite_portion, available) = match edge {
            DockState::DockLeft => (self.portions.left, self.portions.right, area.width),
            DockState::DockRight => (self.portions.right, self.portions.left, area.width),
            DockState::DockTop => (self.portions.top, self.portions.bottom, area.height),
            DockState::DockBottom => (self.portions.bottom, self.portions.top, area.height),
            _ => return 0.0,
        };
        // The opposite edge's portion counts even while that edge is empty.
        opposing_edge_sizes(portion, opposite_portion, available, min).0
    }

    pub(crate) fn perform_layout(&mut self) {
        for id in self.pane_order.clone() {
            let hidden = self.displaying_contents(id).is_empty();
            if let Some(p) = self.panes.get_mut(&id) {
                p.is_hidden = hidden;
                p.clear_layout();
            }
        }
        self.refresh_visible_views();

        let measures = self.theme.measures;
        let splitter = measures.splitter_size;
        let area = self.client.deflate(
            self.dock_padding(DockState::DockLeft),
            self.dock_padding(DockState::DockTop),
            self.dock_padding(DockState::DockRight),
            self.dock_padding(DockState::DockBottom),
        );
        self.dock_area = area;

        let mut remaining = area;
        for edge in self.edge_order.clone() {
            let visible = self.dock_windows.get(&edge).is_some_and(|w| w.is_visible());
            let size = self.dock_window_size(edge);
            let Some(window) = self.dock_windows.get_mut(&edge) else {
                continue;
            };
            if !visible {
                window.collapse();
                continue;
            }
            let bounds = match edge {
                DockState::DockLeft => {
                    let w = size.min(remaining.width);
                    let r = Rect::new(remaining.x, remaining.y, w, remaining.height);
                    remaining = remaining.deflate(w, 0.0, 0.0, 0.0);
                    r
                }
                DockState::DockRight => {
                    let w = size.min(remaining.width);
                    let r = Rect::new(remaining.right() - w, remaining.y, w, remaining.height);
                    remaining = remaining.deflate(0.0, 0.0, w, 0.0);
                    r
                }
                DockState::DockTop => {
                    let h = size.min(remaining.height);
                    let r = Rect::new(remaining.x, remaining.y, remaining.width, h);
                    remaining = remaining.deflate(0.0, h, 0.0, 0.0);
                    r
                }
                _ => {
                    let h = size.min(remaining.height);
                    let r = Rect::new(remaining.x, remaining.bottom() - h, remaining.width, h);
                    remaining = remaining.deflate(0.0, 0.0, 0.0, h);
                    r
                }
            };
            window.arrange(bounds, splitter);
        }
        self.document_bounds = remaining;
        if let Some(window) = self.dock_windows.get_mut(&DockState::Document) {
            if window.is_visible() {
                window.arrange(remaining, splitter);
            } else {
                window.collapse();
            }
        }

        let mut placed = Vec::new();
        for state in DockState::DOCK_WINDOWS {
            if let Some(window) = self.dock_windows.get(&state).filter(|w| w.is_visible()) {
                placed.extend(Self::place(&window.visible, window.displaying, splitter));
            }
        }
        for window in self.float_windows.iter().filter(|w| w.is_visible()) {
            let rect = window.displaying_rectangle(measures.float_caption_height);
            placed.extend(Self::place(&window.visible, rect, splitter));
        }
        for (pane, layout, status) in placed {
            if let Some(p) = self.panes.get_mut(&pane) {
                p.layout = layout;
                p.displaying = status;
            }
        }
        debug!(
            client = ?self.client,
            dock_area = ?self.dock_area,
            document = ?self.document_bounds,
            "layout performed"
        );
    }

    fn place(
        visible: &NestedPanes,
        area: Rect,
        splitter: f64,
    ) -> Vec<(PaneId, PaneBounds, Option<NestedStatus>)> {
        visible
            .calculate_bounds(area, splitter)
            .into_iter()
            .map(|(pane, bounds)| (pane, bounds, visible.status(pane)))
            .collect()
    }

    /// Rebuild each container's visible view: panes that display contents
    /// in the container's own state.
    fn refresh_visible_views(&mut self) {
        let shown = |panel: &DockPanel, pane: PaneId, state: DockState| {
            panel
                .panes
                .get(&pane)
                .is_some_and(|p| !p.is_hidden && p.dock_state == state)
        };
        let mut views = Vec::new();
        for state in DockState::DOCK_WINDOWS {
            if let Some(window) = self.dock_windows.get(&state) {
                let view = window.nested.visible_view(|p| shown(self, p, state));
                views.push((ContainerId::Dock(state), view));
            }
        }
        for window in &self.float_windows {
            let view = window.nested.visible_view(|p| shown(self, p, DockState::Float));
            views.push((ContainerId::Float(window.id), view));
        }
        for (container, view) in views {
            match container {
                ContainerId::Dock(state) => {
                    if let Some(window) = self.dock_windows.get_mut(&state) {
                        window.visible = view;
                    }
                }
                ContainerId::Float(id) => {
                    if let Some(window) = self.float_windows.iter_mut().find(|w| w.id == id) {
                        window.visible = view;
                    }
                }
            }
        }
    }

    /// Slide-out rectangle of the active auto-hide content, sized by its
    /// auto-hide portion.
    pub fn auto_hide_window_bounds(&self) -> Option<Rect> {
        let content = self.active_auto_hide?;
        let handler = self.contents.get(&content)?;
        let area = self.dock_area;
        let portion = handler.auto_hide_portion;
        let rect = match handler.dock_state() {
            DockState::DockLeftAutoHide => {
                Rect::new(area.x, area.y, portion_to_size(portion, area.width), area.height)
            }
            DockState::DockRightAutoHide => {
                let w = portion_to_size(portion, area.width);
                Rect::new(area.right() - w, area.y, w, area.height)
            }
            DockState::DockTopAutoHide => {
                Rect::new(area.x, area.y, area.width, portion_to_size(portion, area.height))
            }
            DockState::DockBottomAutoHide => {
                let h = portion_to_size(portion, area.height);
                Rect::new(area.x, area.bottom() - h, area.width, h)
            }
            _ => return None,
        };
        Some(rect.intersect(&area))
    }

    /// Caption, tab strip and content rectangles of a laid-out pane. An
    /// auto-hide pane is measured inside the slide-out window while its
    /// active content is shown there.
    pub fn pane_chrome(&self, pane: PaneId) -> Option<PaneChrome> {
        let p = self.panes.get(&pane)?;
        let bounds = if p.dock_state.is_auto_hide() {
            let active = p.active_content?;
            if self.active_auto_hide != Some(active) {
                return None;
            }
            self.auto_hide_window_bounds()?
        } else {
            p.layout.bounds
        };
        if bounds.is_empty() {
            return None;
        }
        let alone_in_float_window = p
            .float_window()
            .and_then(|id| self.float_window(id))
            .is_some_and(|w| w.sole_visible_pane() == Some(pane));
        let input = ChromeInput {
            bounds,
            state: p.dock_state,
            displaying_count: self.displaying_contents(pane).len(),
            alone_in_float_window,
            document_style: self.document_style,
            tab_location: self.options.document_tab_strip_location,
        };
        Some(compute_chrome(&input, &self.theme))
    }

    /// Tab rectangles of a pane, one per displaying content.
    pub fn pane_tabs(&self, pane: PaneId) -> Vec<(ContentId, Rect)> {
        let Some(chrome) = self.pane_chrome(pane) else {
            return Vec::new();
        };
        if chrome.tab_strip.is_empty() {
            return Vec::new();
        }
        let displaying = self.displaying_contents(pane);
        let widths: Vec<f64> = displaying
            .iter()
            .filter_map(|c| self.contents.get(c))
            .map(|h| self.theme.tab_strip.tab_width(&h.tab_text()))
            .collect();
        displaying
            .into_iter()
            .zip(tab_rects(chrome.tab_strip, &widths))
            .collect()
    }

    /// Index into the pane's displaying contents of the tab under `point`.
    pub fn hit_test_tab(&self, pane: PaneId, point: Point) -> Option<usize> {
        let tabs: Vec<Rect> = self.pane_tabs(pane).into_iter().map(|(_, r)| r).collect();
        hit_tab(&tabs, point)
    }

    /// The laid-out pane under `point`: float windows front to back first,
    /// then docked panes.
    pub fn pane_at(&self, point: Point) -> Option<PaneId> {
        for window in self.float_windows.iter().rev() {
            if window.bounds.contains(point) {
                return window
                    .visible
                    .panes()
                    .find(|p| self.panes.get(p).is_some_and(|p| p.layout.bounds.contains(point)));
            }
        }
        self.pane_order.iter().copied().find(|id| {
            self.panes
                .get(id)
                .is_some_and(|p| !p.is_float && !p.dock_state.is_auto_hide() && p.layout.bounds.contains(point))
        })
    }

    /// The frontmost float window under `point`.
    pub fn float_window_at(&self, point: Point) -> Option<FloatWindowId> {
        self.float_windows
            .iter()
            .rev()
            .find(|w| w.is_visible() && w.bounds.contains(point))
            .map(|w| w.id)
    }
}
