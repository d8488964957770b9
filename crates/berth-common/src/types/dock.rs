use serde::{Deserialize, Serialize};

/// Where a pane or content currently lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockState {
    #[default]
    Unknown,
    Hidden,
    Float,
    Document,
    DockTop,
    DockBottom,
    DockLeft,
    DockRight,
    DockTopAutoHide,
    DockBottomAutoHide,
    DockLeftAutoHide,
    DockRightAutoHide,
}

impl DockState {
    /// The four edge states plus `Document`: the states backed by a dock window.
    pub const DOCK_WINDOWS: [DockState; 5] = [
        DockState::Document,
        DockState::DockLeft,
        DockState::DockRight,
        DockState::DockTop,
        DockState::DockBottom,
    ];

    pub fn is_auto_hide(self) -> bool {
        matches!(
            self,
            DockState::DockTopAutoHide
                | DockState::DockBottomAutoHide
                | DockState::DockLeftAutoHide
                | DockState::DockRightAutoHide
        )
    }

    pub fn is_dock_window_state(self) -> bool {
        matches!(
            self,
            DockState::Document
                | DockState::DockTop
                | DockState::DockBottom
                | DockState::DockLeft
                | DockState::DockRight
        )
    }

    pub fn is_float(self) -> bool {
        self == DockState::Float
    }

    /// Whether content can be shown in this state.
    pub fn is_showable(self) -> bool {
        !matches!(self, DockState::Unknown | DockState::Hidden)
    }

    pub fn toggle_auto_hide(self) -> DockState {
        match self {
            DockState::DockLeft => DockState::DockLeftAutoHide,
            DockState::DockRight => DockState::DockRightAutoHide,
            DockState::DockTop => DockState::DockTopAutoHide,
            DockState::DockBottom => DockState::DockBottomAutoHide,
            DockState::DockLeftAutoHide => DockState::DockLeft,
            DockState::DockRightAutoHide => DockState::DockRight,
            DockState::DockTopAutoHide => DockState::DockTop,
            DockState::DockBottomAutoHide => DockState::DockBottom,
            other => other,
        }
    }

    /// The dock window that hosts panes in this state. Auto-hide states share
    /// the window of their edge.
    pub fn dock_window(self) -> Option<DockState> {
        match self {
            DockState::Document => Some(DockState::Document),
            DockState::DockLeft | DockState::DockLeftAutoHide => Some(DockState::DockLeft),
            DockState::DockRight | DockState::DockRightAutoHide => Some(DockState::DockRight),
            DockState::DockTop | DockState::DockTopAutoHide => Some(DockState::DockTop),
            DockState::DockBottom | DockState::DockBottomAutoHide => Some(DockState::DockBottom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockAlignment {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl DockAlignment {
    pub fn inverted(self) -> DockAlignment {
        match self {
            DockAlignment::Left => DockAlignment::Right,
            DockAlignment::Right => DockAlignment::Left,
            DockAlignment::Top => DockAlignment::Bottom,
            DockAlignment::Bottom => DockAlignment::Top,
        }
    }

    /// Left and right alignments split along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, DockAlignment::Left | DockAlignment::Right)
    }
}

/// Drop style chosen by a drag target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockStyle {
    #[default]
    None,
    Left,
    Right,
    Top,
    Bottom,
    Fill,
}

impl DockStyle {
    /// Panel-level state for a drop on the panel itself.
    pub fn dock_state(self) -> Option<DockState> {
        match self {
            DockStyle::Left => Some(DockState::DockLeft),
            DockStyle::Right => Some(DockState::DockRight),
            DockStyle::Top => Some(DockState::DockTop),
            DockStyle::Bottom => Some(DockState::DockBottom),
            DockStyle::Fill => Some(DockState::Document),
            DockStyle::None => None,
        }
    }

    pub fn alignment(self) -> Option<DockAlignment> {
        match self {
            DockStyle::Left => Some(DockAlignment::Left),
            DockStyle::Right => Some(DockAlignment::Right),
            DockStyle::Top => Some(DockAlignment::Top),
            DockStyle::Bottom => Some(DockAlignment::Bottom),
            DockStyle::Fill | DockStyle::None => None,
        }
    }
}

/// How the document area presents its contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentStyle {
    #[default]
    DockingMdi,
    DockingWindow,
    DockingSdi,
    SystemMdi,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabStripLocation {
    #[default]
    Top,
    Bottom,
}
