//! Pane lifecycle: creation, placement in containers, in-place state
//! changes and disposal.

use berth_common::{
    ContentId, DockAlignment, DockError, DockEvent, DockState, FloatWindowId, PaneId, Rect,
};
use tracing::debug;

use crate::container::{ContainerId, FloatWindow};
use crate::pane::Pane;

use super::DockPanel;

impl DockPanel {
    pub(crate) fn alloc_pane(&mut self, is_float: bool) -> PaneId {
        let id = PaneId(self.next_pane_id);
        self.next_pane_id += 1;
        self.panes.insert(id, Pane::new(id, is_float));
        self.pane_order.push(id);
        debug!(pane = %id, is_float, "pane created");
        self.emit(DockEvent::PaneCreated(id));
        id
    }

    /// Create a pane in `state` at the default spot for that state and put
    /// `content` in it. With `show` the content takes the pane's state;
    /// otherwise the pane is only cached on the content.
    pub(crate) fn create_pane(
        &mut self,
        content: ContentId,
        state: DockState,
        show: bool,
    ) -> Result<PaneId, DockError> {
        self.handler(content)?;
        if !state.is_showable() || !self.is_content_state_valid(content, state) {
            return Err(DockError::InvalidDockState(state));
        }
        let pane = self.alloc_pane(state.is_float());
        self.set_pane_state_in_place(pane, state)?;
        if show {
            self.assign_pane(content, Some(pane))?;
        } else if state.is_float() {
            self.set_float_pane(content, Some(pane));
        } else {
            self.set_panel_pane(content, Some(pane));
        }
        Ok(pane)
    }

    /// Create an empty pane attached to `container` next to `previous`.
    pub(crate) fn create_pane_in(
        &mut self,
        container: ContainerId,
        previous: Option<PaneId>,
        alignment: DockAlignment,
        proportion: f64,
    ) -> Result<PaneId, DockError> {
        let probe = PaneId(self.next_pane_id);
        self.require_container(container)?
            .check_attach(probe, previous)?;
        let pane = self.alloc_pane(container.is_float());
        self.add_pane_to_container(pane, container, previous, alignment, proportion)?;
        self.set_pane_state_in_place(pane, container.dock_state())?;
        Ok(pane)
    }

    /// Contents whose current pane is `pane`.
    pub(crate) fn pane_members(&self, pane: PaneId) -> Vec<ContentId> {
        let Some(p) = self.panes.get(&pane) else {
            return Vec::new();
        };
        p.contents
            .iter()
            .copied()
            .filter(|c| self.contents.get(c).is_some_and(|h| h.pane() == Some(pane)))
            .collect()
    }

    /// Attach `pane` to `container`, leaving its old container first.
    pub(crate) fn add_pane_to_container(
        &mut self,
        pane: PaneId,
        container: ContainerId,
        previous: Option<PaneId>,
        alignment: DockAlignment,
        proportion: f64,
    ) -> Result<(), DockError> {
        let p = self.pane_ref(pane)?;
        if container.is_float() != p.is_float {
            return Err(DockError::IncompatibleContainer { pane });
        }
        let old_container = p.container;
        let old_state = p.dock_state;
        self.require_container(container)?
            .check_attach(pane, previous)?;

        let edge = container.dock_state();
        let new_state = match old_state {
            DockState::Unknown => DockState::Unknown,
            s if s.is_auto_hide() && edge != DockState::Document => edge.toggle_auto_hide(),
            _ => edge,
        };
        if new_state != old_state
            && self
                .pane_members(pane)
                .into_iter()
                .any(|c| !self.is_content_state_valid(c, new_state))
        {
            return Err(DockError::InvalidDockState(new_state));
        }

        if let Some(old) = old_container.filter(|c| *c != container) {
            if let Some(nested) = self.nested_mut(old) {
                nested.remove(pane);
            }
            self.queue_cleanup(old);
        }
        if let Some(nested) = self.nested_mut(container) {
            nested.add(pane, previous, alignment, proportion)?;
        }
        let p = self.pane_mut(pane)?;
        p.container = Some(container);
        p.dock_state = new_state;
        debug!(
            pane = %pane,
            container = %container,
            previous = ?previous,
            ?alignment,
            proportion,
            "pane docked"
        );
        self.refresh_state_change(pane, old_state)?;
        self.request_layout();
        Ok(())
    }

    /// Change a pane's state without changing its float-ness. A non-float
    /// pane moves to the dock window hosting `state`.
    pub(crate) fn set_pane_state_in_place(&mut self, pane: PaneId, state: DockState) -> Result<(), DockError> {
        let p = self.pane_ref(pane)?;
        let (old_state, old_container, is_float) = (p.dock_state, p.container, p.is_float);
        if old_state == state {
            return Ok(());
        }
        if !state.is_showable() || state.is_float() != is_float {
            return Err(DockError::InvalidDockState(state));
        }
        if self
            .pane_members(pane)
            .into_iter()
            .any(|c| !self.is_content_state_valid(c, state))
        {
            return Err(DockError::InvalidDockState(state));
        }
        let target = if is_float {
            None
        } else {
            let window = state.dock_window().ok_or(DockError::InvalidDockState(state))?;
            Some(ContainerId::Dock(window))
        };

        self.pane_mut(pane)?.dock_state = state;
        match target {
            Some(target) if old_container != Some(target) => {
                let previous = self.require_container(target)?.default_previous_pane(pane);
                let alignment = match target.dock_state() {
                    DockState::DockLeft | DockState::DockRight => DockAlignment::Bottom,
                    _ => DockAlignment::Right,
                };
                self.add_pane_to_container(pane, target, previous, alignment, 0.5)?;
            }
            Some(_) => {}
            None if old_container.is_none() => {
                let window = self.create_float_window_inner(None);
                self.add_pane_to_container(
                    pane,
                    ContainerId::Float(window),
                    None,
                    DockAlignment::Left,
                    0.5,
                )?;
            }
            None => {}
        }
        self.refresh_state_change(pane, old_state)
    }

    /// Bring every member content in line with the pane's state and notify.
    pub(crate) fn refresh_state_change(&mut self, pane: PaneId, old_state: DockState) -> Result<(), DockError> {
        let state = self.pane_ref(pane)?.dock_state;
        if state == DockState::Unknown {
            return Ok(());
        }
        for content in self.pane_members(pane) {
            let handler = self.handler(content)?;
            if handler.visible_state != state {
                let hidden = handler.is_hidden;
                self.set_content_state(content, hidden, state, Some(pane))?;
            }
        }
        if old_state != state {
            debug!(pane = %pane, old = ?old_state, new = ?state, "pane dock state changed");
            self.emit(DockEvent::PaneDockStateChanged {
                pane,
                old: old_state,
                new: state,
            });
        }
        self.refresh_pane(pane);
        Ok(())
    }

    /// Recompute the hidden flag and re-validate the active content.
    pub(crate) fn refresh_pane(&mut self, pane: PaneId) {
        let hidden = self.displaying_contents(pane).is_empty();
        let Some(p) = self.panes.get_mut(&pane) else {
            return;
        };
        p.is_hidden = hidden;
        self.validate_active(pane);
        self.request_layout();
    }

    /// Take `pane` out of its container without touching its state. Used to
    /// re-attach panes in a recorded split order.
    pub(crate) fn detach_pane(&mut self, pane: PaneId) {
        let Some(container) = self.panes.get(&pane).and_then(|p| p.container) else {
            return;
        };
        if let Some(nested) = self.nested_mut(container) {
            nested.remove(pane);
        }
        self.queue_cleanup(container);
        if let Some(p) = self.panes.get_mut(&pane) {
            p.container = None;
            p.clear_layout();
        }
        self.request_layout();
    }

    pub(crate) fn dispose_pane(&mut self, pane: PaneId) {
        let Some(p) = self.panes.remove(&pane) else {
            return;
        };
        self.pane_order.retain(|id| *id != pane);
        debug_assert!(p.contents.is_empty(), "pane disposed with contents attached");
        for content in &p.contents {
            if let Some(handler) = self.contents.get_mut(content) {
                handler.forget_pane(pane);
            }
        }
        if let Some(container) = p.container {
            if let Some(nested) = self.nested_mut(container) {
                nested.remove(pane);
            }
            self.queue_cleanup(container);
        }
        if self.active_pane == Some(pane) {
            self.active_pane = None;
            self.emit(DockEvent::ActivePaneChanged(None));
        }
        if self.active_document_pane == Some(pane) {
            self.active_document_pane = None;
            self.emit(DockEvent::ActiveDocumentChanged(None));
        }
        debug!(pane = %pane, state = ?p.dock_state, "pane disposed");
        self.emit(DockEvent::PaneDisposed(pane));
        self.request_layout();
    }

    /// Let the first nested child of `pane` take its place in the split tree.
    pub(crate) fn switch_with_first_child(&mut self, pane: PaneId) {
        let Some(container) = self.panes.get(&pane).and_then(|p| p.container) else {
            return;
        };
        if self
            .nested_mut(container)
            .is_some_and(|n| n.switch_pane_with_first_child(pane))
        {
            debug!(pane = %pane, container = %container, "pane switched with first child");
            self.request_layout();
        }
    }

    /// New float window. Without bounds it takes the default size and
    /// cascades from the client origin.
    pub(crate) fn create_float_window_inner(&mut self, bounds: Option<Rect>) -> FloatWindowId {
        let id = FloatWindowId(self.next_float_id);
        self.next_float_id += 1;
        let bounds = bounds.unwrap_or_else(|| {
            let step = 20.0 * self.float_windows.len() as f64;
            let size = self.options.default_float_window_size;
            Rect::new(self.client.x + step, self.client.y + step, size.width, size.height)
        });
        let mut window = FloatWindow::new(id, bounds);
        window.allow_end_user_docking = self.options.allow_end_user_docking;
        self.float_windows.push(window);
        // An empty window is only kept if something docks into it.
        self.queue_cleanup(ContainerId::Float(id));
        debug!(window = %id, ?bounds, "float window created");
        self.emit(DockEvent::FloatWindowCreated(id));
        id
    }
}
