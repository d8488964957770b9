//! Per-content docking record kept by the panel.

use berth_common::{ContentId, DockState, PaneId};

use crate::state::{is_dock_state_valid, DockAreas};

use super::DockContent;

/// Default share of the dock area an auto-hide content slides out to.
pub const DEFAULT_AUTO_HIDE_PORTION: f64 = 0.25;

#[derive(Debug)]
pub struct ContentHandler {
    pub(crate) id: ContentId,
    pub(crate) item: Box<dyn DockContent>,
    pub(crate) dock_areas: DockAreas,
    pub(crate) show_hint: DockState,
    pub(crate) visible_state: DockState,
    pub(crate) is_hidden: bool,
    pub(crate) is_float: bool,
    pub(crate) panel_pane: Option<PaneId>,
    pub(crate) float_pane: Option<PaneId>,
    pub(crate) auto_hide_portion: f64,
}

impl ContentHandler {
    pub(crate) fn new(id: ContentId, item: Box<dyn DockContent>) -> Self {
        Self {
            id,
            dock_areas: item.dock_areas(),
            show_hint: item.show_hint(),
            item,
            visible_state: DockState::Unknown,
            is_hidden: false,
            is_float: false,
            panel_pane: None,
            float_pane: None,
            auto_hide_portion: DEFAULT_AUTO_HIDE_PORTION,
        }
    }

    pub fn id(&self) -> ContentId {
        self.id
    }

    pub fn item(&self) -> &dyn DockContent {
        self.item.as_ref()
    }

    pub fn tab_text(&self) -> String {
        self.item.tab_text()
    }

    pub fn dock_areas(&self) -> DockAreas {
        self.dock_areas
    }

    pub fn show_hint(&self) -> DockState {
        self.show_hint
    }

    /// The state the content shows in when not hidden.
    pub fn visible_state(&self) -> DockState {
        self.visible_state
    }

    pub fn dock_state(&self) -> DockState {
        if self.is_hidden {
            DockState::Hidden
        } else {
            self.visible_state
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    pub fn is_float(&self) -> bool {
        self.is_float
    }

    /// The pane the content currently lives in.
    pub fn pane(&self) -> Option<PaneId> {
        if self.is_float {
            self.float_pane
        } else {
            self.panel_pane
        }
    }

    /// Last non-float pane, kept while the content floats.
    pub fn panel_pane(&self) -> Option<PaneId> {
        self.panel_pane
    }

    /// Last float pane, kept while the content is docked.
    pub fn float_pane(&self) -> Option<PaneId> {
        self.float_pane
    }

    pub fn auto_hide_portion(&self) -> f64 {
        self.auto_hide_portion
    }

    pub fn close_button(&self) -> bool {
        self.item.close_button()
    }

    pub fn hide_on_close(&self) -> bool {
        self.item.hide_on_close()
    }

    /// Dock-area check only; panel-wide rules are applied by the panel.
    pub fn accepts(&self, state: DockState) -> bool {
        is_dock_state_valid(state, self.dock_areas)
    }

    /// Forget `pane` in both cached slots.
    pub(crate) fn forget_pane(&mut self, pane: PaneId) {
        if self.panel_pane == Some(pane) {
            self.panel_pane = None;
        }
        if self.float_pane == Some(pane) {
            self.float_pane = None;
        }
    }
}
