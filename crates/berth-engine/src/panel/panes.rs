//! Pane-level docking operations.

use berth_common::{ContentId, DockAlignment, DockError, DockState, DockStyle, PaneId, Rect};
use tracing::debug;

use crate::container::ContainerId;

use super::DockPanel;

impl DockPanel {
    /// Move the pane to `state`.
    ///
    /// Within the same float-ness the pane itself moves. Across float-ness
    /// its displaying contents that accept `state` migrate to another pane,
    /// which is returned; `None` means no content accepted the state.
    pub fn set_pane_dock_state(&mut self, pane: PaneId, state: DockState) -> Result<Option<PaneId>, DockError> {
        let mut panel = self.suspend_layout();
        panel.set_pane_dock_state_inner(pane, state)
    }

    /// Dock the pane into `container` next to `previous`.
    ///
    /// When the container's float-ness differs, a new pane is created there
    /// and the contents that accept the container's state move into it.
    pub fn dock_pane_to(
        &mut self,
        pane: PaneId,
        container: ContainerId,
        previous: Option<PaneId>,
        alignment: DockAlignment,
        proportion: f64,
    ) -> Result<Option<PaneId>, DockError> {
        let mut panel = self.suspend_layout();
        panel.dock_pane_to_inner(pane, container, previous, alignment, proportion)
    }

    /// Dock the pane into `container` at the default spot: after the last
    /// pane, below it on the left and right edges and beside it elsewhere.
    pub fn dock_pane_into(&mut self, pane: PaneId, container: ContainerId) -> Result<Option<PaneId>, DockError> {
        let previous = self.require_container(container)?.default_previous_pane(pane);
        let alignment = match container.dock_state() {
            DockState::DockLeft | DockState::DockRight => DockAlignment::Bottom,
            _ => DockAlignment::Right,
        };
        self.dock_pane_to(pane, container, previous, alignment, 0.5)
    }

    /// Float the pane's floatable contents. Returns the float pane, or
    /// `None` when nothing can float.
    pub fn float_pane(&mut self, pane: PaneId) -> Result<Option<PaneId>, DockError> {
        let mut panel = self.suspend_layout();
        panel.float_pane_inner(pane)
    }

    /// Float the pane in a window with `bounds`.
    pub fn float_pane_at(&mut self, pane: PaneId, bounds: Rect) -> Result<(), DockError> {
        let mut panel = self.suspend_layout();
        panel.float_pane_at_inner(pane, bounds)
    }

    /// Drop the pane onto `target`. Fill merges the displaying contents into
    /// the target at `content_index` (-1 keeps their order at the end); any
    /// other style splits the target.
    pub fn dock_pane_to_pane(
        &mut self,
        pane: PaneId,
        target: PaneId,
        style: DockStyle,
        content_index: isize,
    ) -> Result<(), DockError> {
        let mut panel = self.suspend_layout();
        panel.dock_pane_to_pane_inner(pane, target, style, content_index)
    }

    /// Dock the pane to a panel edge, or to the document area for Fill.
    pub fn dock_pane_to_panel(&mut self, pane: PaneId, style: DockStyle) -> Result<(), DockError> {
        let state = style
            .dock_state()
            .ok_or(DockError::InvalidDockState(DockState::Unknown))?;
        let mut panel = self.suspend_layout();
        panel.set_pane_dock_state_inner(pane, state).map(|_| ())
    }

    /// Reorder `content` within the pane; -1 moves it to the end.
    pub fn set_content_index(&mut self, pane: PaneId, content: ContentId, index: isize) -> Result<(), DockError> {
        let mut panel = self.suspend_layout();
        if panel.pane_mut(pane)?.set_content_index(content, index)? {
            debug!(pane = %pane, content = %content, index, "content reordered");
            panel.request_layout();
        }
        Ok(())
    }

    /// The pane's close button: hide-on-close contents are hidden and the
    /// pane cedes its slot to its first child, other contents are closed.
    pub fn close_pane_content(&mut self, pane: PaneId, content: ContentId) -> Result<(), DockError> {
        let handler = self.handler(content)?;
        if !handler.close_button() {
            return Ok(());
        }
        if self.pane_ref(pane)?.index_of(content).is_none() {
            return Err(DockError::ContentNotInPane { pane, content });
        }
        let mut panel = self.suspend_layout();
        if panel.handler(content)?.hide_on_close() {
            panel.set_content_hidden_inner(content, true)?;
            panel.switch_with_first_child(pane);
            Ok(())
        } else {
            panel.remove_content_inner(content)
        }
    }

    /// Send every floating displaying content back to its panel pane.
    pub fn restore_to_panel(&mut self, pane: PaneId) -> Result<(), DockError> {
        let mut panel = self.suspend_layout();
        let active = panel.pane_ref(pane)?.active_content;
        for content in panel.displaying_contents(pane) {
            let target = panel.float_state_target(content, false);
            if target.is_showable() {
                let hidden = panel.handler(content)?.is_hidden;
                let old = panel.handler(content)?.pane();
                panel.set_content_state(content, hidden, target, old)?;
            }
        }
        if let Some(active) = active {
            if let Some(home) = panel.handler(active)?.pane() {
                if panel.displaying_contents(home).contains(&active) {
                    panel.apply_active_content(home, Some(active));
                    panel.set_active_pane(Some(home));
                }
            }
        }
        Ok(())
    }

    /// Switch a docked pane to its auto-hide state and back.
    pub fn toggle_auto_hide(&mut self, pane: PaneId) -> Result<(), DockError> {
        let state = self.pane_ref(pane)?.dock_state;
        let toggled = state.toggle_auto_hide();
        if toggled == state {
            return Err(DockError::InvalidDockState(state));
        }
        let mut panel = self.suspend_layout();
        panel.set_pane_dock_state_inner(pane, toggled)?;
        if toggled.is_auto_hide() {
            panel.apply_active_auto_hide(None);
        }
        Ok(())
    }

    /// Whether every content of the pane accepts `state`.
    pub fn is_pane_dock_state_valid(&self, pane: PaneId, state: DockState) -> bool {
        self.panes.get(&pane).is_some_and(|p| {
            p.contents
                .iter()
                .all(|c| self.is_content_state_valid(*c, state))
        })
    }

    /// Whether the pane may be dropped onto `target`.
    pub fn can_pane_dock_to(&self, pane: PaneId, target: PaneId) -> bool {
        if pane == target {
            return false;
        }
        self.panes
            .get(&target)
            .is_some_and(|t| self.is_pane_dock_state_valid(pane, t.dock_state))
    }

    // -- Internal --

    pub(crate) fn set_pane_dock_state_inner(
        &mut self,
        pane: PaneId,
        state: DockState,
    ) -> Result<Option<PaneId>, DockError> {
        if !state.is_showable() {
            return Err(DockError::InvalidDockState(state));
        }
        if state.is_float() == self.pane_ref(pane)?.is_float {
            self.set_pane_state_in_place(pane, state)?;
            return Ok(Some(pane));
        }

        let displaying = self.displaying_contents(pane);
        let Some(first) = displaying
            .iter()
            .copied()
            .find(|c| self.is_content_state_valid(*c, state))
        else {
            return Ok(None);
        };
        self.set_content_dock_state_inner(first, state)?;
        let Some(dest) = self.handler(first)?.pane() else {
            return Ok(None);
        };
        let dest_state = self.pane_ref(dest)?.dock_state;
        for content in displaying {
            if content != first && self.is_content_state_valid(content, dest_state) {
                self.assign_pane(content, Some(dest))?;
            }
        }
        debug!(pane = %pane, dest = %dest, state = ?state, "pane contents migrated");
        Ok(Some(dest))
    }

    pub(crate) fn dock_pane_to_inner(
        &mut self,
        pane: PaneId,
        container: ContainerId,
        previous: Option<PaneId>,
        alignment: DockAlignment,
        proportion: f64,
    ) -> Result<Option<PaneId>, DockError> {
        let p = self.pane_ref(pane)?;
        if container.is_float() == p.is_float {
            self.add_pane_to_container(pane, container, previous, alignment, proportion)?;
            return Ok(Some(pane));
        }

        let state = container.dock_state();
        let active = p.active_content;
        if !self
            .displaying_contents(pane)
            .into_iter()
            .any(|c| self.is_content_state_valid(c, state))
        {
            return Ok(None);
        }
        let dest = self.create_pane_in(container, previous, alignment, proportion)?;
        self.move_displaying_contents(pane, dest, active)?;
        Ok(Some(dest))
    }

    /// Move the displaying contents of `from` that accept the state of `to`
    /// into `to`, then restore `active` there.
    fn move_displaying_contents(
        &mut self,
        from: PaneId,
        to: PaneId,
        active: Option<ContentId>,
    ) -> Result<(), DockError> {
        let state = self.pane_ref(to)?.dock_state;
        for content in self.displaying_contents(from) {
            if self.is_content_state_valid(content, state) {
                self.assign_pane(content, Some(to))?;
            }
        }
        if let Some(active) = active {
            if self.displaying_contents(to).contains(&active) {
                self.apply_active_content(to, Some(active));
            }
        }
        Ok(())
    }

    pub(crate) fn float_pane_inner(&mut self, pane: PaneId) -> Result<Option<PaneId>, DockError> {
        let active = self.pane_ref(pane)?.active_content;
        let floatable: Vec<ContentId> = self
            .displaying_contents(pane)
            .into_iter()
            .filter(|c| self.is_content_state_valid(*c, DockState::Float))
            .collect();
        let Some(first) = floatable.first().copied() else {
            return Ok(None);
        };

        let shared = self.handler(first)?.float_pane;
        let reuse = shared.filter(|shared| {
            *shared != pane
                && floatable
                    .iter()
                    .all(|c| self.contents.get(c).is_some_and(|h| h.float_pane == Some(*shared)))
        });
        let float_pane = match reuse {
            Some(shared) => shared,
            None if self.pane_ref(pane)?.is_float => pane,
            None => self.create_pane(first, DockState::Float, true)?,
        };
        self.move_displaying_contents(pane, float_pane, active)?;

        let now_hidden = self.displaying_contents(pane).is_empty();
        if now_hidden && self.options.behavior.float_splitter_fix {
            self.switch_with_first_child(pane);
        }
        debug!(pane = %pane, float_pane = %float_pane, "pane floated");
        Ok(Some(float_pane))
    }

    pub(crate) fn float_pane_at_inner(&mut self, pane: PaneId, bounds: Rect) -> Result<(), DockError> {
        let alone = match self.pane_ref(pane)?.container {
            Some(ContainerId::Float(window)) => self
                .float_window(window)
                .filter(|w| w.nested.len() == 1)
                .map(|w| w.id),
            _ => None,
        };
        match alone {
            Some(window) => {
                self.float_window_mut(window)?.bounds = bounds;
                self.request_layout();
            }
            None => {
                let window = self.create_float_window_inner(Some(bounds));
                self.dock_pane_to_inner(pane, ContainerId::Float(window), None, DockAlignment::Right, 0.5)?;
            }
        }
        self.set_pane_dock_state_inner(pane, DockState::Float)?;
        self.switch_with_first_child(pane);
        Ok(())
    }

    pub(crate) fn dock_pane_to_pane_inner(
        &mut self,
        pane: PaneId,
        target: PaneId,
        style: DockStyle,
        content_index: isize,
    ) -> Result<(), DockError> {
        if pane == target {
            return Ok(());
        }
        let target_state = self.pane_ref(target)?.dock_state;
        let p = self.pane_ref(pane)?;
        let (state, active) = (p.dock_state, p.active_content);

        match style {
            DockStyle::Fill => {
                let moving: Vec<ContentId> = p
                    .contents
                    .iter()
                    .rev()
                    .copied()
                    .filter(|c| self.contents.get(c).is_some_and(|h| h.dock_state() == state))
                    .collect();
                for content in moving {
                    if !self.is_content_state_valid(content, target_state) {
                        continue;
                    }
                    self.assign_pane(content, Some(target))?;
                    if content_index != -1 {
                        self.pane_mut(target)?.set_content_index(content, content_index)?;
                    }
                }
                if let Some(active) = active {
                    if self.displaying_contents(target).contains(&active) {
                        self.apply_active_content(target, Some(active));
                    }
                }
            }
            DockStyle::None => return Err(DockError::InvalidDockState(DockState::Unknown)),
            style => {
                let alignment = style
                    .alignment()
                    .ok_or(DockError::InvalidDockState(DockState::Unknown))?;
                let container = self
                    .pane_ref(target)?
                    .container
                    .ok_or(DockError::UnknownPane(target))?;
                let dest = self
                    .dock_pane_to_inner(pane, container, Some(target), alignment, 0.5)?
                    .unwrap_or(pane);
                self.set_pane_dock_state_inner(dest, target_state)?;
            }
        }
        Ok(())
    }
}
