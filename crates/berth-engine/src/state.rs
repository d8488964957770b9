//! Dock area flags and the dock-state validity rules built on them.

use berth_common::DockState;
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// The dock contexts a content accepts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DockAreas: u8 {
        const FLOAT = 1;
        const DOCK_LEFT = 1 << 1;
        const DOCK_RIGHT = 1 << 2;
        const DOCK_TOP = 1 << 3;
        const DOCK_BOTTOM = 1 << 4;
        const DOCUMENT = 1 << 5;
    }
}

impl DockAreas {
    /// Every edge plus float, but not the document area.
    pub fn tool_window() -> Self {
        DockAreas::all() - DockAreas::DOCUMENT
    }
}

impl Default for DockAreas {
    fn default() -> Self {
        DockAreas::all()
    }
}

/// Whether `state` is allowed by `areas`. Auto-hide states follow their edge.
pub fn is_dock_state_valid(state: DockState, areas: DockAreas) -> bool {
    match state {
        DockState::Unknown | DockState::Hidden => true,
        DockState::Float => areas.contains(DockAreas::FLOAT),
        DockState::Document => areas.contains(DockAreas::DOCUMENT),
        DockState::DockLeft | DockState::DockLeftAutoHide => areas.contains(DockAreas::DOCK_LEFT),
        DockState::DockRight | DockState::DockRightAutoHide => {
            areas.contains(DockAreas::DOCK_RIGHT)
        }
        DockState::DockTop | DockState::DockTopAutoHide => areas.contains(DockAreas::DOCK_TOP),
        DockState::DockBottom | DockState::DockBottomAutoHide => {
            areas.contains(DockAreas::DOCK_BOTTOM)
        }
    }
}

/// The state a content lands in when shown without an explicit target.
pub fn default_show_state(hint: DockState, areas: DockAreas) -> DockState {
    if hint.is_showable() {
        return hint;
    }
    [
        (DockAreas::DOCUMENT, DockState::Document),
        (DockAreas::DOCK_RIGHT, DockState::DockRight),
        (DockAreas::DOCK_LEFT, DockState::DockLeft),
        (DockAreas::DOCK_BOTTOM, DockState::DockBottom),
        (DockAreas::DOCK_TOP, DockState::DockTop),
        (DockAreas::FLOAT, DockState::Float),
    ]
    .into_iter()
    .find(|(flag, _)| areas.contains(*flag))
    .map(|(_, state)| state)
    .unwrap_or(DockState::Unknown)
}
