//! Content-to-pane assignment and the content dock-state machine.

use berth_common::{ContentId, DockError, DockEvent, DockState, PaneId};
use tracing::debug;

use super::DockPanel;

impl DockPanel {
    /// Move `content` into `pane` (or out of every pane) and take the
    /// pane's state, keeping the hidden flag.
    pub(crate) fn assign_pane(&mut self, content: ContentId, pane: Option<PaneId>) -> Result<(), DockError> {
        let handler = self.handler(content)?;
        let old_pane = handler.pane();
        let is_hidden = handler.is_hidden;
        if old_pane == pane {
            return Ok(());
        }
        let (new_state, is_float) = match pane {
            Some(p) => {
                let p = self.pane_ref(p)?;
                (p.dock_state, p.is_float)
            }
            None => (DockState::Unknown, false),
        };
        if new_state.is_showable() && !self.is_content_state_valid(content, new_state) {
            return Err(DockError::InvalidDockState(new_state));
        }

        match pane {
            None => {
                self.set_float_pane(content, None);
                self.set_panel_pane(content, None);
            }
            Some(p) if is_float => self.set_float_pane(content, Some(p)),
            Some(p) => self.set_panel_pane(content, Some(p)),
        }
        self.set_content_state(content, is_hidden, new_state, old_pane)
    }

    /// Cache `pane` as the content's float pane without touching its state.
    pub(crate) fn set_float_pane(&mut self, content: ContentId, pane: Option<PaneId>) {
        let Some(handler) = self.contents.get_mut(&content) else {
            return;
        };
        let old = handler.float_pane;
        if old == pane {
            return;
        }
        handler.float_pane = pane;
        if let Some(old) = old {
            self.remove_from_pane(content, old);
        }
        if let Some(pane) = pane {
            self.add_to_pane(content, pane);
        }
    }

    /// Cache `pane` as the content's panel pane without touching its state.
    pub(crate) fn set_panel_pane(&mut self, content: ContentId, pane: Option<PaneId>) {
        let Some(handler) = self.contents.get_mut(&content) else {
            return;
        };
        let old = handler.panel_pane;
        if old == pane {
            return;
        }
        handler.panel_pane = pane;
        if let Some(old) = old {
            self.remove_from_pane(content, old);
        }
        if let Some(pane) = pane {
            self.add_to_pane(content, pane);
        }
    }

    fn add_to_pane(&mut self, content: ContentId, pane: PaneId) {
        if let Some(p) = self.panes.get_mut(&pane) {
            if p.add_content(content) {
                debug!(content = %content, pane = %pane, "content added to pane");
            }
        }
    }

    /// Drop `content` from `pane`. An emptied pane is disposed; otherwise
    /// an active content that left is replaced by its nearest sibling.
    fn remove_from_pane(&mut self, content: ContentId, pane: PaneId) {
        let Some(p) = self.panes.get_mut(&pane) else {
            return;
        };
        let Some(index) = p.remove_content(content) else {
            return;
        };
        debug!(content = %content, pane = %pane, "content removed from pane");
        if p.contents.is_empty() {
            p.active_content = None;
            self.dispose_pane(pane);
            return;
        }
        if p.active_content == Some(content) {
            let displaying = self.displaying_contents(pane);
            let next = self.closest_displaying(pane, index, &displaying);
            self.apply_active_content(pane, next);
        }
        self.refresh_pane(pane);
    }

    /// Core state transition of a content.
    ///
    /// Finds or creates the pane that hosts `visible_state`: a pane holding
    /// only this content moves with it, otherwise a new pane is created.
    /// Both the old and the current pane are refreshed afterwards.
    pub(crate) fn set_content_state(
        &mut self,
        content: ContentId,
        is_hidden: bool,
        visible_state: DockState,
        old_pane: Option<PaneId>,
    ) -> Result<(), DockError> {
        if visible_state == DockState::Hidden
            || (visible_state != DockState::Unknown
                && !self.is_content_state_valid(content, visible_state))
        {
            return Err(DockError::InvalidDockState(visible_state));
        }
        let handler = self.handler_mut(content)?;
        let old_state = handler.dock_state();
        handler.is_hidden = is_hidden;
        handler.visible_state = visible_state;

        if visible_state == DockState::Unknown {
            self.set_float_pane(content, None);
            self.set_panel_pane(content, None);
        } else {
            let handler = self.handler_mut(content)?;
            handler.is_float = visible_state.is_float();
            match handler.pane() {
                None => {
                    self.create_pane(content, visible_state, true)?;
                }
                Some(pane) => {
                    let p = self.pane_ref(pane)?;
                    if p.dock_state != visible_state {
                        if p.contents.len() == 1 {
                            self.set_pane_dock_state_inner(pane, visible_state)?;
                        } else {
                            self.create_pane(content, visible_state, true)?;
                        }
                    }
                }
            }
        }

        if let Some(old) = old_pane.filter(|p| self.panes.contains_key(p)) {
            self.refresh_pane(old);
        }
        let current = self.handler(content)?.pane();
        if let Some(pane) = current.filter(|p| Some(*p) != old_pane) {
            self.refresh_pane(pane);
        }

        let new_state = self.handler(content)?.dock_state();
        if old_state != new_state {
            if !self.options.behavior.content_order_fix && new_state.is_showable() {
                if let Some(pane) = current {
                    let p = self.pane_mut(pane)?;
                    if p.dock_state == new_state {
                        p.set_content_index(content, -1)?;
                    }
                }
            }
            self.reset_auto_hide_portion(content, old_state, new_state);
            if self.active_auto_hide == Some(content) && !new_state.is_auto_hide() {
                self.apply_active_auto_hide(None);
            }
            debug!(content = %content, old = ?old_state, new = ?new_state, "content dock state changed");
            self.emit(DockEvent::ContentDockStateChanged {
                content,
                old: old_state,
                new: new_state,
            });
        }
        self.request_layout();
        Ok(())
    }

    /// Take the panel's edge portion unless the content only toggled
    /// auto-hide on the same edge.
    fn reset_auto_hide_portion(&mut self, content: ContentId, old: DockState, new: DockState) {
        if old == new || old.toggle_auto_hide() == new {
            return;
        }
        let portion = match new {
            DockState::DockLeft | DockState::DockLeftAutoHide => self.portions.left,
            DockState::DockRight | DockState::DockRightAutoHide => self.portions.right,
            DockState::DockTop | DockState::DockTopAutoHide => self.portions.top,
            DockState::DockBottom | DockState::DockBottomAutoHide => self.portions.bottom,
            _ => return,
        };
        if let Some(handler) = self.contents.get_mut(&content) {
            handler.auto_hide_portion = portion;
        }
    }
}
