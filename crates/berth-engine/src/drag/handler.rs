//! The interactive re-dock protocol: begin, hit-test, commit, abort.

use std::collections::HashMap;

use berth_common::{
    DockAlignment, DockError, DockEvent, DockState, DockStyle, FloatWindowId, PaneId, Point, Rect,
    Size, TabStripLocation,
};
use tracing::{debug, info};

use crate::container::ContainerId;
use crate::geometry::centered_in;

use super::indicators::{
    diamond_hit, initial_float_bounds, panel_indicator_bounds, panel_outline, pane_outline,
};
use super::{DragCursor, DragFeedback, DragSession, DragSource, DropTarget, Modifiers, PaneDiamond};
use crate::panel::DockPanel;

impl DockPanel {
    /// Start dragging `source` from `point`. Returns the float outline the
    /// drag starts with.
    pub fn begin_drag(&mut self, source: DragSource, point: Point) -> Result<Rect, DockError> {
        if self.drag.is_some() || self.splitter_drag.is_some() {
            return Err(DockError::DragInProgress);
        }
        if !self.options.allow_end_user_docking {
            return Err(DockError::DockingDisabled);
        }
        let splitter = self.theme.measures.splitter_size;
        let float_bounds = match source {
            DragSource::Pane(pane) => {
                let p = self.pane_ref(pane)?;
                let float_pane = p
                    .active_content
                    .and_then(|c| self.contents.get(&c))
                    .and_then(|h| h.float_pane);
                let size = self.float_drag_size(p.dock_state, float_pane);
                let top = p.dock_state == DockState::Document;
                initial_float_bounds(p.layout.bounds, size, top, point, splitter)
            }
            DragSource::Content(content) => {
                let handler = self.handler(content)?;
                let state = handler.dock_state();
                let pane = handler.pane().ok_or(DockError::InvalidDockState(state))?;
                let size = self.float_drag_size(state, handler.float_pane);
                let top = state == DockState::Document
                    && self.options.document_tab_strip_location == TabStripLocation::Top;
                initial_float_bounds(self.pane_ref(pane)?.layout.bounds, size, top, point, splitter)
            }
            DragSource::FloatWindow(id) => {
                let window = self.float_window(id).ok_or(DockError::UnknownFloatWindow(id))?;
                if !window.allow_end_user_docking {
                    return Err(DockError::DockingDisabled);
                }
                window.bounds
            }
        };
        self.drag = Some(DragSession {
            source,
            start: point,
            float_bounds,
            feedback: DragFeedback::default(),
        });
        debug!(?source, ?point, ?float_bounds, "drag started");
        Ok(float_bounds)
    }

    /// Hit-test the pointer and update the feedback.
    pub fn drag_move(&mut self, point: Point, modifiers: Modifiers) -> Result<DragFeedback, DockError> {
        let session = self.drag.ok_or(DockError::NoActiveDrag)?;
        let feedback = self.test_drop(&session, point, modifiers);
        if let Some(drag) = self.drag.as_mut() {
            drag.feedback = feedback;
        }
        Ok(feedback)
    }

    /// Release the pointer: apply the target under it and return it.
    pub fn end_drag(&mut self, point: Point, modifiers: Modifiers) -> Result<DropTarget, DockError> {
        let session = self.drag.take().ok_or(DockError::NoActiveDrag)?;
        let target = self.test_drop(&session, point, modifiers).target;
        let mut panel = self.suspend_layout();
        panel.commit_drop(session.source, target)?;
        info!(source = ?session.source, ?target, "drag committed");
        panel.emit(DockEvent::DocumentDragged);
        Ok(target)
    }

    /// Drop the drag without touching the layout.
    pub fn abort_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            debug!(source = ?session.source, "drag aborted");
        }
    }

    pub fn drag_source(&self) -> Option<DragSource> {
        self.drag.map(|d| d.source)
    }

    /// Feedback from the last pointer move.
    pub fn drag_feedback(&self) -> Option<DragFeedback> {
        self.drag.map(|d| d.feedback)
    }

    // -- Hit testing --

    fn float_drag_size(&self, state: DockState, float_pane: Option<PaneId>) -> Size {
        float_pane
            .filter(|_| state != DockState::Float)
            .and_then(|p| self.panes.get(&p))
            .and_then(|p| p.float_window())
            .and_then(|w| self.float_window(w))
            .filter(|w| w.nested.len() == 1)
            .map(|w| w.bounds.size())
            .unwrap_or(self.options.default_float_window_size)
    }

    pub(crate) fn test_drop(&self, session: &DragSession, point: Point, modifiers: Modifiers) -> DragFeedback {
        let mut feedback = DragFeedback::default();
        let source = session.source;
        let candidate = self.pane_at(point);

        // Control leaves only the pane-to-pane targets.
        if !modifiers.control {
            self.test_panel_indicators(&mut feedback, source, point, modifiers.shift);
            self.test_diamond(&mut feedback, source, candidate, point);
        }
        if feedback.target.is_none() {
            if let Some(pane) = candidate {
                let state = self.panes.get(&pane).map(|p| p.dock_state).unwrap_or_default();
                if self.source_accepts(source, state) {
                    self.test_pane(&mut feedback, source, pane, point);
                }
            }
        }
        if feedback.target.is_none() && self.source_accepts(source, DockState::Float) {
            self.test_float_window(&mut feedback, source, point);
        }

        if feedback.target.is_none() && self.source_accepts(source, DockState::Float) {
            let bounds = session
                .float_bounds
                .offset(point.x - session.start.x, point.y - session.start.y);
            feedback.target = DropTarget::Float { bounds };
            feedback.outline = Some(bounds);
        }
        feedback.cursor = if feedback.target.is_none() {
            DragCursor::NotAllowed
        } else {
            DragCursor::Move
        };
        feedback
    }

    fn test_panel_indicators(&self, feedback: &mut DragFeedback, source: DragSource, point: Point, full_edge: bool) {
        let area = if full_edge {
            self.dock_area
        } else {
            self.document_bounds
        };
        let size = self.theme.indicators.panel_indicator_size();
        let margin = self.theme.indicators.indicator_margin();
        for indicator in feedback.panel_indicators.iter_mut() {
            let Some(state) = indicator.style.dock_state() else {
                continue;
            };
            let occupied = self.dock_windows.get(&state).is_some_and(|w| w.is_visible());
            indicator.visible = !occupied && self.source_accepts(source, state);
            if indicator.visible {
                indicator.bounds =
                    panel_indicator_bounds(indicator.style, area, self.document_bounds, size, margin);
            }
        }
        let Some(indicator) = feedback
            .panel_indicators
            .iter_mut()
            .find(|i| i.visible && i.bounds.contains(point))
        else {
            return;
        };
        indicator.hit = true;
        let style = indicator.style;
        let depth = style
            .dock_state()
            .filter(|s| *s != DockState::Document)
            .map(|s| self.dock_window_size(s))
            .unwrap_or(0.0);
        feedback.target = DropTarget::Panel { style, full_edge };
        feedback.outline = Some(panel_outline(style, area, self.document_bounds, depth));
    }

    fn test_diamond(&self, feedback: &mut DragFeedback, source: DragSource, candidate: Option<PaneId>, point: Point) {
        let Some(pane) = candidate else {
            return;
        };
        if !self.options.allow_end_user_nested_docking || !self.source_can_dock_to(source, pane) {
            return;
        }
        let Some(rect) = self.panes.get(&pane).map(|p| p.layout.bounds) else {
            return;
        };
        let size = self.theme.indicators.pane_indicator_size();
        feedback.diamond = PaneDiamond {
            pane: Some(pane),
            bounds: centered_in(rect, size, size),
            visible: true,
            hit: DockStyle::None,
        };
        if !feedback.target.is_none() {
            return;
        }
        let style = diamond_hit(feedback.diamond.bounds, point);
        if style != DockStyle::None {
            feedback.diamond.hit = style;
            feedback.target = DropTarget::Pane {
                pane,
                style,
                content_index: -1,
            };
            feedback.outline = Some(pane_outline(rect, style));
        }
    }

    /// A pointer over a pane's caption fills the pane; over a tab it fills
    /// at that tab's position.
    fn test_pane(&self, feedback: &mut DragFeedback, source: DragSource, pane: PaneId, point: Point) {
        if !self.source_can_dock_to(source, pane) {
            return;
        }
        let Some(chrome) = self.pane_chrome(pane) else {
            return;
        };
        let content_index = if chrome.caption.contains(point) {
            -1
        } else if let Some(index) = self.hit_test_tab(pane, point) {
            index as isize
        } else {
            return;
        };
        let bounds = self.panes.get(&pane).map(|p| p.layout.bounds).unwrap_or_default();
        feedback.target = DropTarget::Pane {
            pane,
            style: DockStyle::Fill,
            content_index,
        };
        feedback.outline = Some(bounds);
    }

    /// The caption of a float window holding a single visible pane fills
    /// that pane.
    fn test_float_window(&self, feedback: &mut DragFeedback, source: DragSource, point: Point) {
        let Some(window) = self.float_window_at(point).and_then(|id| self.float_window(id)) else {
            return;
        };
        let Some(pane) = window.sole_visible_pane() else {
            return;
        };
        if !self.source_can_dock_to(source, pane) {
            return;
        }
        if window
            .caption_bounds(self.theme.measures.float_caption_height)
            .contains(point)
        {
            feedback.target = DropTarget::Pane {
                pane,
                style: DockStyle::Fill,
                content_index: -1,
            };
            feedback.outline = self.panes.get(&pane).map(|p| p.layout.bounds);
        }
    }

    fn source_accepts(&self, source: DragSource, state: DockState) -> bool {
        match source {
            DragSource::Pane(pane) => self.is_pane_dock_state_valid(pane, state),
            DragSource::Content(content) => self.is_content_state_valid(content, state),
            DragSource::FloatWindow(id) => self.float_window(id).is_some_and(|w| {
                w.nested.panes().all(|p| {
                    self.panes.get(&p).is_some_and(|p| {
                        p.contents
                            .iter()
                            .all(|c| self.is_content_state_valid(*c, state))
                    })
                })
            }),
        }
    }

    fn source_can_dock_to(&self, source: DragSource, pane: PaneId) -> bool {
        match source {
            DragSource::Pane(own) => self.can_pane_dock_to(own, pane),
            DragSource::Content(content) => self.can_content_dock_to(content, pane),
            DragSource::FloatWindow(id) => self.panes.get(&pane).is_some_and(|p| {
                p.float_window() != Some(id) && self.source_accepts(source, p.dock_state)
            }),
        }
    }

    // -- Commit --

    fn commit_drop(&mut self, source: DragSource, target: DropTarget) -> Result<(), DockError> {
        match target {
            DropTarget::None => Ok(()),
            DropTarget::Float { bounds } => match source {
                DragSource::Pane(pane) => self.float_pane_at_inner(pane, bounds),
                DragSource::Content(content) => self.float_content_at_inner(content, bounds),
                DragSource::FloatWindow(id) => {
                    self.float_window_mut(id)?.bounds = bounds;
                    self.request_layout();
                    Ok(())
                }
            },
            DropTarget::Pane {
                pane,
                style,
                content_index,
            } => match source {
                DragSource::Pane(own) => self.dock_pane_to_pane_inner(own, pane, style, content_index),
                DragSource::Content(content) => {
                    self.dock_content_to_pane_inner(content, pane, style, content_index)
                }
                DragSource::FloatWindow(id) => {
                    self.dock_float_window_to_pane(id, pane, style, content_index)
                }
            },
            DropTarget::Panel { style, full_edge } => {
                self.update_dock_window_z_order(style, full_edge);
                let state = style
                    .dock_state()
                    .ok_or(DockError::InvalidDockState(DockState::Unknown))?;
                match source {
                    DragSource::Pane(pane) => self.set_pane_dock_state_inner(pane, state).map(|_| ()),
                    DragSource::Content(content) => self.set_content_dock_state_inner(content, state),
                    DragSource::FloatWindow(id) => self.dock_float_window_to_panel(id, state),
                }
            }
        }
    }

    /// Fill moves every displaying content of the window into `target`;
    /// other styles merge the window's split tree next to `target`.
    fn dock_float_window_to_pane(
        &mut self,
        id: FloatWindowId,
        target: PaneId,
        style: DockStyle,
        content_index: isize,
    ) -> Result<(), DockError> {
        let window = self.float_window(id).ok_or(DockError::UnknownFloatWindow(id))?;
        let panes: Vec<PaneId> = window.nested.panes().collect();
        if style == DockStyle::Fill {
            for pane in panes.into_iter().rev() {
                for content in self.displaying_contents(pane).into_iter().rev() {
                    self.dock_content_to_pane_inner(content, target, DockStyle::Fill, content_index)?;
                    self.activate_inner(content)?;
                }
            }
            return Ok(());
        }
        let alignment = style
            .alignment()
            .ok_or(DockError::InvalidDockState(DockState::Unknown))?;
        let container = self
            .pane_ref(target)?
            .container
            .ok_or(DockError::UnknownPane(target))?;
        self.merge_float_window(id, container, Some(target), alignment, 0.5)
    }

    fn dock_float_window_to_panel(&mut self, id: FloatWindowId, state: DockState) -> Result<(), DockError> {
        let window = state.dock_window().ok_or(DockError::InvalidDockState(state))?;
        let container = ContainerId::Dock(window);
        let first = self.float_window(id).and_then(|w| w.visible.first());
        let previous = self
            .require_container(container)?
            .panes()
            .find(|p| Some(*p) != first);
        self.merge_float_window(id, container, previous, DockAlignment::Left, 0.5)
    }

    /// Re-create the window's visible split tree in `container`. The first
    /// pane docks next to `previous`; the rest keep their own links.
    fn merge_float_window(
        &mut self,
        id: FloatWindowId,
        container: ContainerId,
        previous: Option<PaneId>,
        alignment: DockAlignment,
        proportion: f64,
    ) -> Result<(), DockError> {
        let window = self.float_window(id).ok_or(DockError::UnknownFloatWindow(id))?;
        let view = window
            .nested
            .visible_view(|p| !self.displaying_contents(p).is_empty());
        let entries = view.entries().to_vec();
        let mut moved: HashMap<PaneId, PaneId> = HashMap::new();
        let mut first_moved = None;
        for (i, entry) in entries.iter().enumerate() {
            let (prev, align, prop) = if i == 0 {
                (previous, alignment, proportion)
            } else {
                let prev = entry
                    .status
                    .previous
                    .and_then(|p| moved.get(&p).copied())
                    .or(first_moved)
                    .or(previous);
                (prev, entry.status.alignment, entry.status.proportion)
            };
            if let Some(dest) = self.dock_pane_to_inner(entry.pane, container, prev, align, prop)? {
                moved.insert(entry.pane, dest);
                first_moved.get_or_insert(dest);
            }
        }
        debug!(window = %id, container = %container, panes = moved.len(), "float window merged");
        Ok(())
    }
}
