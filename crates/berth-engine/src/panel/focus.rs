//! Focus tracking: each pane's active content, the panel's active pane and
//! document pane, and the active auto-hide content.

use berth_common::{ContentId, DockError, DockEvent, DockState, PaneId};
use tracing::debug;

use super::DockPanel;

impl DockPanel {
    /// Set the active content of `pane`. It must be one of the pane's
    /// displaying contents, and may only be cleared when none display.
    pub fn set_active_content(&mut self, pane: PaneId, content: Option<ContentId>) -> Result<(), DockError> {
        self.pane_ref(pane)?;
        let displaying = self.displaying_contents(pane);
        match content {
            Some(content) if !displaying.contains(&content) => {
                Err(DockError::InvalidActiveContent { pane, content })
            }
            None if !displaying.is_empty() => Err(DockError::ActiveContentRequired(pane)),
            _ => {
                let mut panel = self.suspend_layout();
                panel.apply_active_content(pane, content);
                Ok(())
            }
        }
    }

    /// Re-select the active content of `pane` after its displaying set
    /// changed.
    pub fn validate_active_content(&mut self, pane: PaneId) -> Result<(), DockError> {
        self.pane_ref(pane)?;
        let mut panel = self.suspend_layout();
        panel.validate_active(pane);
        Ok(())
    }

    /// Make `pane` the active pane. A document pane also becomes the active
    /// document pane.
    pub fn activate_pane(&mut self, pane: PaneId) -> Result<(), DockError> {
        self.pane_ref(pane)?;
        let mut panel = self.suspend_layout();
        panel.set_active_pane(Some(pane));
        Ok(())
    }

    pub fn set_active_auto_hide_content(&mut self, content: Option<ContentId>) -> Result<(), DockError> {
        if let Some(content) = content {
            let state = self.handler(content)?.dock_state();
            if !state.is_auto_hide() {
                return Err(DockError::InvalidDockState(state));
            }
        }
        let mut panel = self.suspend_layout();
        panel.apply_active_auto_hide(content);
        Ok(())
    }

    /// The pointer rests on the strip tab of an auto-hide `content`. Slides
    /// it out when `show_auto_hide_content_on_hover` is on; returns whether
    /// it did.
    pub fn hover_auto_hide_tab(&mut self, content: ContentId) -> Result<bool, DockError> {
        let state = self.handler(content)?.dock_state();
        if !state.is_auto_hide() {
            return Err(DockError::InvalidDockState(state));
        }
        if !self.options.show_auto_hide_content_on_hover {
            return Ok(false);
        }
        let mut panel = self.suspend_layout();
        panel.apply_active_auto_hide(Some(content));
        Ok(true)
    }

    pub(crate) fn validate_active(&mut self, pane: PaneId) {
        let displaying = self.displaying_contents(pane);
        let Some(p) = self.panes.get(&pane) else {
            return;
        };
        let next = match p.active_content {
            Some(active) if displaying.contains(&active) => return,
            Some(active) => match p.index_of(active) {
                Some(index) => self.closest_displaying(pane, index, &displaying),
                None => displaying.first().copied(),
            },
            None => match displaying.first() {
                Some(first) => Some(*first),
                None => return,
            },
        };
        self.apply_active_content(pane, next);
    }

    /// The displaying content nearest to `anchor` in tab order: the closest
    /// one before it, else the closest one after it.
    pub(crate) fn closest_displaying(
        &self,
        pane: PaneId,
        anchor: usize,
        displaying: &[ContentId],
    ) -> Option<ContentId> {
        if !self.options.behavior.select_closest_on_close {
            return displaying.first().copied();
        }
        let contents = &self.panes.get(&pane)?.contents;
        let anchor = anchor.min(contents.len());
        contents[..anchor]
            .iter()
            .rev()
            .chain(contents[anchor..].iter())
            .find(|c| displaying.contains(c))
            .copied()
    }

    pub(crate) fn apply_active_content(&mut self, pane: PaneId, content: Option<ContentId>) {
        let Some(p) = self.panes.get_mut(&pane) else {
            return;
        };
        let old = p.active_content;
        if old == content {
            return;
        }
        p.active_content = content;
        if old.is_some() && self.active_auto_hide == old {
            self.apply_active_auto_hide(None);
        }
        debug!(pane = %pane, content = ?content, "active content changed");
        self.emit(DockEvent::ActiveContentChanged { pane, content });
        if self.active_document_pane == Some(pane) {
            self.emit(DockEvent::ActiveDocumentChanged(content));
        }
        self.request_layout();
    }

    pub(crate) fn set_active_pane(&mut self, pane: Option<PaneId>) {
        if self.active_pane != pane {
            self.active_pane = pane;
            self.emit(DockEvent::ActivePaneChanged(pane));
        }
        let Some(pane) = pane else {
            return;
        };
        let is_document = self
            .panes
            .get(&pane)
            .is_some_and(|p| p.dock_state == DockState::Document);
        if is_document && self.active_document_pane != Some(pane) {
            self.active_document_pane = Some(pane);
            let content = self.panes.get(&pane).and_then(|p| p.active_content);
            self.emit(DockEvent::ActiveDocumentChanged(content));
        }
    }

    pub(crate) fn apply_active_auto_hide(&mut self, content: Option<ContentId>) {
        if self.active_auto_hide == content {
            return;
        }
        self.active_auto_hide = content;
        debug!(content = ?content, "active auto-hide content changed");
        self.emit(DockEvent::ActiveAutoHideContentChanged(content));
        self.request_layout();
    }
}
