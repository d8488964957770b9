//! The pane record: its contents, state and last computed bounds.

use berth_common::{ContentId, DockError, DockState, FloatWindowId, PaneId, Rect};

use crate::container::ContainerId;
use crate::nested::{NestedStatus, PaneBounds};

#[derive(Debug, Clone)]
pub struct Pane {
    pub(crate) id: PaneId,
    pub(crate) dock_state: DockState,
    pub(crate) is_float: bool,
    /// Every content ever assigned here, in tab order.
    pub(crate) contents: Vec<ContentId>,
    pub(crate) active_content: Option<ContentId>,
    pub(crate) container: Option<ContainerId>,
    pub(crate) is_hidden: bool,
    pub(crate) layout: PaneBounds,
    /// Status in the container's visible view, when the pane is displayed.
    pub(crate) displaying: Option<NestedStatus>,
}

impl Pane {
    pub(crate) fn new(id: PaneId, is_float: bool) -> Self {
        Self {
            id,
            dock_state: DockState::Unknown,
            is_float,
            contents: Vec::new(),
            active_content: None,
            container: None,
            is_hidden: true,
            layout: PaneBounds::default(),
            displaying: None,
        }
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn dock_state(&self) -> DockState {
        self.dock_state
    }

    pub fn is_float(&self) -> bool {
        self.is_float
    }

    pub fn is_auto_hide(&self) -> bool {
        self.dock_state.is_auto_hide()
    }

    pub fn is_document(&self) -> bool {
        self.dock_state == DockState::Document
    }

    /// True when no content currently displays in this pane.
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    pub fn contents(&self) -> &[ContentId] {
        &self.contents
    }

    pub fn active_content(&self) -> Option<ContentId> {
        self.active_content
    }

    pub fn container(&self) -> Option<ContainerId> {
        self.container
    }

    pub fn float_window(&self) -> Option<FloatWindowId> {
        match self.container {
            Some(ContainerId::Float(id)) => Some(id),
            _ => None,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.layout.bounds
    }

    pub fn logical_bounds(&self) -> Rect {
        self.layout.logical
    }

    pub fn splitter_bounds(&self) -> Rect {
        self.layout.splitter
    }

    pub fn displaying_status(&self) -> Option<NestedStatus> {
        self.displaying
    }

    pub fn index_of(&self, content: ContentId) -> Option<usize> {
        self.contents.iter().position(|c| *c == content)
    }

    /// Add `content` at the end. Returns false if it was already present.
    pub(crate) fn add_content(&mut self, content: ContentId) -> bool {
        if self.contents.contains(&content) {
            return false;
        }
        self.contents.push(content);
        true
    }

    /// Remove `content`, returning the index it had.
    pub(crate) fn remove_content(&mut self, content: ContentId) -> Option<usize> {
        let index = self.index_of(content)?;
        self.contents.remove(index);
        Some(index)
    }

    /// Move `content` to `index`, or to the end for -1. The index is read
    /// against the list before the move.
    pub(crate) fn set_content_index(&mut self, content: ContentId, index: isize) -> Result<bool, DockError> {
        let old = self.index_of(content).ok_or(DockError::InvalidContentIndex {
            pane: self.id,
            index,
        })?;
        let count = self.contents.len() as isize;
        if index != -1 && !(0..count).contains(&index) {
            return Err(DockError::InvalidContentIndex {
                pane: self.id,
                index,
            });
        }
        let old = old as isize;
        if old == index || (old == count - 1 && index == -1) {
            return Ok(false);
        }

        self.contents.remove(old as usize);
        if index == -1 {
            self.contents.push(content);
        } else if old < index {
            self.contents.insert(index as usize - 1, content);
        } else {
            self.contents.insert(index as usize, content);
        }
        Ok(true)
    }

    pub(crate) fn clear_layout(&mut self) {
        self.layout = PaneBounds::default();
        self.displaying = None;
    }
}
