//! Core types and constructors for DockPanel.

use std::collections::HashMap;

use berth_common::{
    ContentId, DockError, DockEvent, DockState, DocumentStyle, FloatWindowId, PaneId, Point, Rect,
};

use crate::container::{ContainerId, DockWindow, FloatWindow};
use crate::content::ContentHandler;
use crate::drag::DragSession;
use crate::nested::{LinkError, NestedPanes};
use crate::options::{DockOptions, DockPortions};
use crate::pane::Pane;
use crate::state::is_dock_state_valid;
use crate::theme::Theme;

/// A splitter the user can grab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitterHandle {
    /// The inner splitter of an edge dock window.
    DockWindow(DockState),
    /// The splitter between a pane and its displaying previous pane.
    Pane(PaneId),
}

/// An in-flight splitter drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SplitterDrag {
    pub(crate) handle: SplitterHandle,
    pub(crate) origin: Point,
}

/// Layout suspension bookkeeping.
#[derive(Debug, Clone, Default)]
pub(crate) struct LayoutState {
    pub(crate) suspend_count: u32,
    pub(crate) requested: bool,
    pub(crate) passes: u64,
}

/// The root of a docking layout: every content, pane, container and the
/// focus and auto-hide state that ties them together.
pub struct DockPanel {
    pub(crate) options: DockOptions,
    pub(crate) theme: Theme,
    pub(crate) client: Rect,
    /// Registry of contents; `content_order` keeps registration order.
    pub(crate) contents: HashMap<ContentId, ContentHandler>,
    pub(crate) content_order: Vec<ContentId>,
    /// Pane arena; `pane_order` keeps creation order.
    pub(crate) panes: HashMap<PaneId, Pane>,
    pub(crate) pane_order: Vec<PaneId>,
    pub(crate) dock_windows: HashMap<DockState, DockWindow>,
    /// Edge windows from back to front. The back window is laid out first
    /// and spans its whole edge.
    pub(crate) edge_order: Vec<DockState>,
    /// Float windows from back to front.
    pub(crate) float_windows: Vec<FloatWindow>,
    pub(crate) portions: DockPortions,
    pub(crate) document_style: DocumentStyle,
    pub(crate) active_pane: Option<PaneId>,
    pub(crate) active_document_pane: Option<PaneId>,
    pub(crate) active_auto_hide: Option<ContentId>,
    pub(crate) layout: LayoutState,
    /// Containers to check for emptiness when the outermost suspension ends.
    pub(crate) pending_cleanup: Vec<FloatWindowId>,
    pub(crate) events: Vec<DockEvent>,
    pub(crate) drag: Option<DragSession>,
    pub(crate) splitter_drag: Option<SplitterDrag>,
    pub(crate) dock_area: Rect,
    pub(crate) document_bounds: Rect,
    pub(crate) next_content_id: u32,
    pub(crate) next_pane_id: u32,
    pub(crate) next_float_id: u32,
}

impl std::fmt::Debug for DockPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DockPanel")
            .field("contents", &self.content_order)
            .field("panes", &self.pane_order)
            .field("float_windows", &self.float_windows.len())
            .field("document_style", &self.document_style)
            .field("layout_passes", &self.layout.passes)
            .finish()
    }
}

impl DockPanel {
    pub fn new(options: DockOptions, theme: Theme) -> Self {
        let dock_windows = DockState::DOCK_WINDOWS
            .into_iter()
            .map(|state| (state, DockWindow::new(state)))
            .collect();

        Self {
            portions: options.portions,
            document_style: options.document_style,
            options,
            theme,
            client: Rect::default(),
            contents: HashMap::new(),
            content_order: Vec::new(),
            panes: HashMap::new(),
            pane_order: Vec::new(),
            dock_windows,
            edge_order: vec![
                DockState::DockBottom,
                DockState::DockTop,
                DockState::DockRight,
                DockState::DockLeft,
            ],
            float_windows: Vec::new(),
            active_pane: None,
            active_document_pane: None,
            active_auto_hide: None,
            layout: LayoutState::default(),
            pending_cleanup: Vec::new(),
            events: Vec::new(),
            drag: None,
            splitter_drag: None,
            dock_area: Rect::default(),
            document_bounds: Rect::default(),
            next_content_id: 1,
            next_pane_id: 1,
            next_float_id: 1,
        }
    }

    // -- Accessors --

    pub fn options(&self) -> &DockOptions {
        &self.options
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn client_rect(&self) -> Rect {
        self.client
    }

    pub fn content(&self, id: ContentId) -> Option<&ContentHandler> {
        self.contents.get(&id)
    }

    /// Registered contents in registration order.
    pub fn contents(&self) -> impl Iterator<Item = &ContentHandler> + '_ {
        self.content_order.iter().filter_map(|id| self.contents.get(id))
    }

    pub fn content_count(&self) -> usize {
        self.contents.len()
    }

    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.panes.get(&id)
    }

    /// Panes in creation order.
    pub fn panes(&self) -> impl Iterator<Item = &Pane> + '_ {
        self.pane_order.iter().filter_map(|id| self.panes.get(id))
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    pub fn dock_window(&self, state: DockState) -> Option<&DockWindow> {
        self.dock_windows.get(&state)
    }

    /// Float windows from back to front.
    pub fn float_windows(&self) -> &[FloatWindow] {
        &self.float_windows
    }

    pub fn float_window(&self, id: FloatWindowId) -> Option<&FloatWindow> {
        self.float_windows.iter().find(|w| w.id == id)
    }

    pub fn portions(&self) -> DockPortions {
        self.portions
    }

    pub fn document_style(&self) -> DocumentStyle {
        self.document_style
    }

    pub fn active_pane(&self) -> Option<PaneId> {
        self.active_pane
    }

    pub fn active_content(&self) -> Option<ContentId> {
        self.active_pane
            .and_then(|p| self.panes.get(&p))
            .and_then(|p| p.active_content)
    }

    pub fn active_document_pane(&self) -> Option<PaneId> {
        self.active_document_pane
    }

    /// Active content of the last activated document pane.
    pub fn active_document(&self) -> Option<ContentId> {
        self.active_document_pane
            .and_then(|p| self.panes.get(&p))
            .and_then(|p| p.active_content)
    }

    pub fn active_auto_hide_content(&self) -> Option<ContentId> {
        self.active_auto_hide
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Events recorded since the last drain, in firing order.
    pub fn events(&self) -> &[DockEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<DockEvent> {
        std::mem::take(&mut self.events)
    }

    /// Contents of `pane` whose dock state matches the pane's, in tab order.
    pub fn displaying_contents(&self, pane: PaneId) -> Vec<ContentId> {
        let Some(p) = self.panes.get(&pane) else {
            return Vec::new();
        };
        p.contents
            .iter()
            .copied()
            .filter(|c| {
                self.contents
                    .get(c)
                    .is_some_and(|h| h.dock_state() == p.dock_state)
            })
            .collect()
    }

    /// Whether `content` may take `state` in this panel. Document is refused
    /// under system MDI.
    pub fn is_content_state_valid(&self, content: ContentId, state: DockState) -> bool {
        let Some(handler) = self.contents.get(&content) else {
            return false;
        };
        if state == DockState::Document && self.document_style == DocumentStyle::SystemMdi {
            return false;
        }
        is_dock_state_valid(state, handler.dock_areas)
    }

    /// The nested collection of a container.
    pub fn nested_panes(&self, container: ContainerId) -> Option<&NestedPanes> {
        match container {
            ContainerId::Dock(state) => self.dock_windows.get(&state).map(|w| &w.nested),
            ContainerId::Float(id) => self.float_window(id).map(|w| &w.nested),
        }
    }

    /// Check split-tree connectivity of every container.
    pub fn validate(&self) -> Result<(), (ContainerId, LinkError)> {
        for state in DockState::DOCK_WINDOWS {
            if let Some(window) = self.dock_windows.get(&state) {
                window
                    .nested
                    .validate()
                    .map_err(|e| (ContainerId::Dock(state), e))?;
            }
        }
        for window in &self.float_windows {
            window
                .nested
                .validate()
                .map_err(|e| (ContainerId::Float(window.id), e))?;
        }
        Ok(())
    }

    // -- Internal lookups --

    pub(crate) fn pane_ref(&self, id: PaneId) -> Result<&Pane, DockError> {
        self.panes.get(&id).ok_or(DockError::UnknownPane(id))
    }

    pub(crate) fn pane_mut(&mut self, id: PaneId) -> Result<&mut Pane, DockError> {
        self.panes.get_mut(&id).ok_or(DockError::UnknownPane(id))
    }

    pub(crate) fn handler(&self, id: ContentId) -> Result<&ContentHandler, DockError> {
        self.contents.get(&id).ok_or(DockError::UnknownContent(id))
    }

    pub(crate) fn handler_mut(&mut self, id: ContentId) -> Result<&mut ContentHandler, DockError> {
        self.contents
            .get_mut(&id)
            .ok_or(DockError::UnknownContent(id))
    }

    pub(crate) fn float_window_mut(&mut self, id: FloatWindowId) -> Result<&mut FloatWindow, DockError> {
        self.float_windows
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(DockError::UnknownFloatWindow(id))
    }

    pub(crate) fn nested_mut(&mut self, container: ContainerId) -> Option<&mut NestedPanes> {
        match container {
            ContainerId::Dock(state) => self.dock_windows.get_mut(&state).map(|w| &mut w.nested),
            ContainerId::Float(id) => self
                .float_windows
                .iter_mut()
                .find(|w| w.id == id)
                .map(|w| &mut w.nested),
        }
    }

    /// Resolve a container, failing for auto-hide or missing windows.
    pub(crate) fn require_container(&self, container: ContainerId) -> Result<&NestedPanes, DockError> {
        match container {
            ContainerId::Dock(state) => self
                .dock_windows
                .get(&state)
                .map(|w| &w.nested)
                .ok_or(DockError::InvalidDockState(state)),
            ContainerId::Float(id) => self
                .float_window(id)
                .map(|w| &w.nested)
                .ok_or(DockError::UnknownFloatWindow(id)),
        }
    }

    pub(crate) fn emit(&mut self, event: DockEvent) {
        self.events.push(event);
    }

    pub(crate) fn is_pane_activated(&self, pane: PaneId) -> bool {
        self.active_pane == Some(pane) || self.active_document_pane == Some(pane)
    }
}
