//! Content registration and the per-content docking API.

use berth_common::{ContentId, DockAlignment, DockError, DockEvent, DockState, DockStyle, PaneId, Rect};
use tracing::{debug, info};

use crate::container::ContainerId;
use crate::content::{ContentHandler, DockContent};
use crate::state::default_show_state;

use super::DockPanel;

impl DockPanel {
    /// Register a content. It stays undocked until shown.
    pub fn add_content(&mut self, item: impl DockContent + 'static) -> ContentId {
        self.add_boxed_content(Box::new(item))
    }

    pub fn add_boxed_content(&mut self, item: Box<dyn DockContent>) -> ContentId {
        let id = ContentId(self.next_content_id);
        self.next_content_id += 1;
        debug!(content = %id, persist = %item.persist_string(), "content added");
        self.contents.insert(id, ContentHandler::new(id, item));
        self.content_order.push(id);
        self.emit(DockEvent::ContentAdded(id));
        id
    }

    /// Find a content by its persist string.
    pub fn find_content(&self, persist_string: &str) -> Option<ContentId> {
        self.contents()
            .find(|h| h.item().persist_string() == persist_string)
            .map(|h| h.id())
    }

    /// Show `content` in `state`, reusing the activated pane of that state,
    /// else the first pane of that state, else a new pane.
    pub fn show(&mut self, content: ContentId, state: DockState) -> Result<(), DockError> {
        let mut panel = self.suspend_layout();
        panel.show_inner(content, state)
    }

    /// Show `content` where it was last, or in its default state.
    pub fn show_default(&mut self, content: ContentId) -> Result<(), DockError> {
        let mut panel = self.suspend_layout();
        panel.show_default_inner(content)
    }

    /// Show `content` in `pane`, before `before` when given.
    pub fn show_in_pane(
        &mut self,
        content: ContentId,
        pane: PaneId,
        before: Option<ContentId>,
    ) -> Result<(), DockError> {
        let p = self.pane_ref(pane)?;
        if let Some(before) = before {
            if p.index_of(before).is_none() {
                return Err(DockError::ContentNotInPane {
                    pane,
                    content: before,
                });
            }
        }
        let mut panel = self.suspend_layout();
        panel.assign_pane(content, Some(pane))?;
        let index = match before.and_then(|b| panel.panes.get(&pane).and_then(|p| p.index_of(b))) {
            Some(index) => index as isize,
            None => -1,
        };
        panel.pane_mut(pane)?.set_content_index(content, index)?;
        panel.show_default_inner(content)
    }

    /// Show `content` in a new pane docked next to `previous`.
    pub fn show_next_to(
        &mut self,
        content: ContentId,
        previous: PaneId,
        alignment: DockAlignment,
        proportion: f64,
    ) -> Result<PaneId, DockError> {
        let p = self.pane_ref(previous)?;
        let state = p.dock_state;
        if state.is_auto_hide() || !state.is_showable() {
            return Err(DockError::InvalidDockState(state));
        }
        let container = p.container.ok_or(DockError::UnknownPane(previous))?;
        if !self.is_content_state_valid(content, state) {
            return Err(DockError::InvalidDockState(state));
        }
        let mut panel = self.suspend_layout();
        let pane = panel.create_pane_in(container, Some(previous), alignment, proportion)?;
        panel.assign_pane(content, Some(pane))?;
        panel.show_default_inner(content)?;
        Ok(pane)
    }

    /// Show `content` floating in a window with `bounds`.
    pub fn show_floating(&mut self, content: ContentId, bounds: Rect) -> Result<(), DockError> {
        if !self.is_content_state_valid(content, DockState::Float) {
            self.handler(content)?;
            return Err(DockError::InvalidDockState(DockState::Float));
        }
        let mut panel = self.suspend_layout();
        let cached = panel.handler(content)?.float_pane;
        let float_pane = match cached {
            Some(pane) => pane,
            None => {
                panel.set_content_hidden_inner(content, true)?;
                panel.create_pane(content, DockState::Float, false)?
            }
        };
        if let Some(window) = panel.pane_ref(float_pane)?.float_window() {
            panel.float_window_mut(window)?.bounds = bounds;
        }
        panel.show_inner(content, DockState::Float)
    }

    /// Unhide `content`, make it its pane's active content and activate the
    /// pane. An undocked content is shown first.
    pub fn activate(&mut self, content: ContentId) -> Result<(), DockError> {
        let mut panel = self.suspend_layout();
        panel.activate_inner(content)
    }

    pub fn hide(&mut self, content: ContentId) -> Result<(), DockError> {
        self.set_is_hidden(content, true)
    }

    /// Close `content`: hide-on-close contents are hidden, others removed.
    /// Closing a content that is gone already does nothing.
    pub fn close(&mut self, content: ContentId) -> Result<(), DockError> {
        let Some(hide) = self.contents.get(&content).map(|h| h.hide_on_close()) else {
            return Ok(());
        };
        let mut panel = self.suspend_layout();
        if hide {
            panel.set_content_hidden_inner(content, true)
        } else {
            panel.remove_content_inner(content)
        }
    }

    /// Undock and unregister `content`.
    pub fn remove_content(&mut self, content: ContentId) -> Result<(), DockError> {
        if !self.contents.contains_key(&content) {
            return Ok(());
        }
        let mut panel = self.suspend_layout();
        panel.remove_content_inner(content)
    }

    /// Set the dock state. `Hidden` hides, `Unknown` undocks.
    pub fn set_content_dock_state(&mut self, content: ContentId, state: DockState) -> Result<(), DockError> {
        let mut panel = self.suspend_layout();
        panel.set_content_dock_state_inner(content, state)
    }

    /// Float the content, or send it back to its panel pane.
    pub fn set_is_float(&mut self, content: ContentId, is_float: bool) -> Result<(), DockError> {
        let handler = self.handler(content)?;
        if handler.is_float == is_float {
            return Ok(());
        }
        let target = self.float_state_target(content, is_float);
        if target == DockState::Unknown {
            return Err(DockError::InvalidDockState(target));
        }
        let (hidden, pane) = (handler.is_hidden, handler.pane());
        let mut panel = self.suspend_layout();
        panel.set_content_state(content, hidden, target, pane)
    }

    pub fn set_is_hidden(&mut self, content: ContentId, is_hidden: bool) -> Result<(), DockError> {
        let mut panel = self.suspend_layout();
        panel.set_content_hidden_inner(content, is_hidden)
    }

    pub fn set_auto_hide_portion(&mut self, content: ContentId, portion: f64) -> Result<(), DockError> {
        if portion <= 0.0 {
            return Err(DockError::InvalidPortion(portion));
        }
        let mut panel = self.suspend_layout();
        let handler = panel.handler_mut(content)?;
        if handler.auto_hide_portion != portion {
            handler.auto_hide_portion = portion;
            if panel.active_auto_hide == Some(content) {
                panel.request_layout();
            }
        }
        Ok(())
    }

    /// Drop the content onto `pane`. Fill adds it as a tab at the
    /// `content_index`-th displaying position (-1 for the end); other
    /// styles split `pane` with a new pane holding the content.
    pub fn dock_content_to_pane(
        &mut self,
        content: ContentId,
        pane: PaneId,
        style: DockStyle,
        content_index: isize,
    ) -> Result<(), DockError> {
        let mut panel = self.suspend_layout();
        panel.dock_content_to_pane_inner(content, pane, style, content_index)
    }

    /// Dock the content to a panel edge, or to the document area for Fill.
    pub fn dock_content_to_panel(&mut self, content: ContentId, style: DockStyle) -> Result<(), DockError> {
        let state = style
            .dock_state()
            .ok_or(DockError::InvalidDockState(DockState::Unknown))?;
        let mut panel = self.suspend_layout();
        panel.set_content_dock_state_inner(content, state)
    }

    /// Float the content alone in a new window with `bounds`.
    pub fn float_content_at(&mut self, content: ContentId, bounds: Rect) -> Result<(), DockError> {
        let mut panel = self.suspend_layout();
        panel.float_content_at_inner(content, bounds)
    }

    /// Whether the content may be dropped onto `pane`.
    pub fn can_content_dock_to(&self, content: ContentId, pane: PaneId) -> bool {
        let Some(p) = self.panes.get(&pane) else {
            return false;
        };
        if !self.is_content_state_valid(content, p.dock_state) {
            return false;
        }
        let own_pane = self.contents.get(&content).and_then(|h| h.pane());
        !(own_pane == Some(pane) && self.displaying_contents(pane).len() == 1)
    }

    // -- Internal --

    /// The state `set_is_float` would move to, or `Unknown` when invalid.
    pub(crate) fn float_state_target(&self, content: ContentId, is_float: bool) -> DockState {
        let Some(handler) = self.contents.get(&content) else {
            return DockState::Unknown;
        };
        let state = if is_float {
            DockState::Float
        } else {
            handler
                .panel_pane
                .and_then(|p| self.panes.get(&p))
                .map(|p| p.dock_state)
                .unwrap_or(handler.show_hint)
        };
        if state.is_showable() && self.is_content_state_valid(content, state) {
            state
        } else {
            DockState::Unknown
        }
    }

    pub(crate) fn show_inner(&mut self, content: ContentId, state: DockState) -> Result<(), DockError> {
        let handler = self.handler(content)?;
        if !state.is_showable() || !self.is_content_state_valid(content, state) {
            return Err(DockError::InvalidDockState(state));
        }
        if state.is_float() {
            if handler.float_pane.is_none() {
                self.create_pane(content, DockState::Float, true)?;
            }
        } else if handler.panel_pane.is_none() {
            let mut existing = None;
            for id in &self.pane_order {
                let Some(p) = self.panes.get(id) else {
                    continue;
                };
                if p.dock_state != state {
                    continue;
                }
                let activated = self.is_pane_activated(*id);
                if existing.is_none() || activated {
                    existing = Some(*id);
                }
                if activated {
                    break;
                }
            }
            match existing {
                Some(pane) => self.assign_pane(content, Some(pane))?,
                None => {
                    self.create_pane(content, state, true)?;
                }
            }
        }
        self.set_content_dock_state_inner(content, state)?;
        self.activate_inner(content)
    }

    pub(crate) fn show_default_inner(&mut self, content: ContentId) -> Result<(), DockError> {
        let handler = self.handler(content)?;
        if handler.dock_state() != DockState::Unknown && handler.pane().is_some() {
            return self.activate_inner(content);
        }
        let state = default_show_state(handler.show_hint, handler.dock_areas);
        self.show_inner(content, state)
    }

    pub(crate) fn set_content_dock_state_inner(&mut self, content: ContentId, state: DockState) -> Result<(), DockError> {
        let handler = self.handler(content)?;
        if handler.dock_state() == state {
            return Ok(());
        }
        if state == DockState::Hidden {
            return self.set_content_hidden_inner(content, true);
        }
        let pane = handler.pane();
        self.set_content_state(content, false, state, pane)
    }

    pub(crate) fn set_content_hidden_inner(&mut self, content: ContentId, is_hidden: bool) -> Result<(), DockError> {
        let handler = self.handler(content)?;
        if handler.is_hidden == is_hidden {
            return Ok(());
        }
        let (visible, pane) = (handler.visible_state, handler.pane());
        self.set_content_state(content, is_hidden, visible, pane)
    }

    pub(crate) fn activate_inner(&mut self, content: ContentId) -> Result<(), DockError> {
        if self.handler(content)?.pane().is_none() {
            return self.show_default_inner(content);
        }
        self.set_content_hidden_inner(content, false)?;
        let handler = self.handler(content)?;
        let state = handler.dock_state();
        let Some(pane) = handler.pane() else {
            return Ok(());
        };
        self.apply_active_content(pane, Some(content));
        if state.is_auto_hide() {
            self.apply_active_auto_hide(Some(content));
        }
        self.set_active_pane(Some(pane));
        Ok(())
    }

    pub(crate) fn remove_content_inner(&mut self, content: ContentId) -> Result<(), DockError> {
        let handler = self.handler(content)?;
        let (hidden, pane) = (handler.is_hidden, handler.pane());
        self.set_content_state(content, hidden, DockState::Unknown, pane)?;
        self.contents.remove(&content);
        self.content_order.retain(|c| *c != content);
        if self.active_auto_hide == Some(content) {
            self.apply_active_auto_hide(None);
        }
        info!(content = %content, "content removed");
        self.emit(DockEvent::ContentRemoved(content));
        Ok(())
    }

    pub(crate) fn dock_content_to_pane_inner(
        &mut self,
        content: ContentId,
        pane: PaneId,
        style: DockStyle,
        content_index: isize,
    ) -> Result<(), DockError> {
        let target_state = self.pane_ref(pane)?.dock_state;
        if !self.is_content_state_valid(content, target_state) {
            return Err(DockError::InvalidDockState(target_state));
        }
        match style {
            DockStyle::Fill => {
                let same_pane = self.handler(content)?.pane() == Some(pane);
                if !same_pane {
                    self.assign_pane(content, Some(pane))?;
                }
                let displaying = self.displaying_contents(pane);
                let contents = self.pane_ref(pane)?.contents.clone();
                let index = if content_index < 0 {
                    -1
                } else {
                    // Map the displaying position onto the full content list.
                    let mut seen = 0;
                    let mut converted = 0;
                    while seen <= content_index && converted < contents.len() {
                        if displaying.contains(&contents[converted]) {
                            seen += 1;
                        }
                        converted += 1;
                    }
                    (converted as isize - 1).clamp(0, contents.len() as isize - 1)
                };
                let index = match self.pane_ref(pane)?.index_of(content) {
                    Some(old) if same_pane && index != -1 && (old as isize) < index => {
                        let next = index + 1;
                        if next > contents.len() as isize - 1 {
                            -1
                        } else {
                            next
                        }
                    }
                    _ => index,
                };
                self.pane_mut(pane)?.set_content_index(content, index)?;
            }
            DockStyle::None => return Err(DockError::InvalidDockState(DockState::Unknown)),
            style => {
                let alignment = style
                    .alignment()
                    .ok_or(DockError::InvalidDockState(DockState::Unknown))?;
                let container = self
                    .pane_ref(pane)?
                    .container
                    .ok_or(DockError::UnknownPane(pane))?;
                let dest = self.create_pane_in(container, Some(pane), alignment, 0.5)?;
                self.assign_pane(content, Some(dest))?;
                self.set_pane_dock_state_inner(dest, target_state)?;
            }
        }
        if self.handler(content)?.is_hidden {
            self.set_content_hidden_inner(content, false)?;
        }
        if self.options.behavior.activate_on_dock_fix {
            if let Some(current) = self.handler(content)?.pane() {
                if self.displaying_contents(current).contains(&content) {
                    self.apply_active_content(current, Some(content));
                }
            }
        }
        Ok(())
    }

    pub(crate) fn float_content_at_inner(&mut self, content: ContentId, bounds: Rect) -> Result<(), DockError> {
        if !self.is_content_state_valid(content, DockState::Float) {
            self.handler(content)?;
            return Err(DockError::InvalidDockState(DockState::Float));
        }
        let window = self.create_float_window_inner(Some(bounds));
        let pane = self.create_pane_in(ContainerId::Float(window), None, DockAlignment::Left, 0.5)?;
        self.set_content_hidden_inner(content, false)?;
        self.assign_pane(content, Some(pane))?;
        if self.options.behavior.activate_on_dock_fix {
            self.apply_active_content(pane, Some(content));
        }
        Ok(())
    }
}
