use berth_common::{ContentId, DockStyle, FloatWindowId, PaneId, Point, Rect};
use serde::{Deserialize, Serialize};

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id")]
pub enum DragSource {
    /// A pane, grabbed by its caption.
    Pane(PaneId),
    /// A single content, grabbed by its tab.
    Content(ContentId),
    /// A whole float window, grabbed by its caption.
    FloatWindow(FloatWindowId),
}

/// Where a drag would land if released now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DropTarget {
    #[default]
    None,
    /// Float in a window with these bounds.
    Float { bounds: Rect },
    /// Dock onto a pane. `content_index` is -1 unless a tab was hit.
    Pane {
        pane: PaneId,
        style: DockStyle,
        content_index: isize,
    },
    /// Dock to a panel edge, or the document area for Fill.
    Panel { style: DockStyle, full_edge: bool },
}

impl DropTarget {
    pub fn is_none(&self) -> bool {
        matches!(self, DropTarget::None)
    }
}

/// Keyboard modifiers held during a drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Dock to the full panel edge.
    pub shift: bool,
    /// Only consider pane-to-pane targets.
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
    };
    pub const CONTROL: Modifiers = Modifiers {
        shift: false,
        control: true,
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragCursor {
    #[default]
    Move,
    NotAllowed,
}

/// One of the five panel indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelIndicator {
    pub style: DockStyle,
    pub bounds: Rect,
    pub visible: bool,
    pub hit: bool,
}

impl PanelIndicator {
    pub(crate) fn new(style: DockStyle) -> Self {
        Self {
            style,
            bounds: Rect::default(),
            visible: false,
            hit: false,
        }
    }
}

/// The five-way indicator centred on the pane under the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaneDiamond {
    pub pane: Option<PaneId>,
    pub bounds: Rect,
    pub visible: bool,
    /// The sub-target under the pointer, `DockStyle::None` when missed.
    pub hit: DockStyle,
}

/// Everything the rendering layer draws for one pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragFeedback {
    pub outline: Option<Rect>,
    pub target: DropTarget,
    pub cursor: DragCursor,
    /// Left, Right, Top, Bottom and Fill, in hit-test order.
    pub panel_indicators: [PanelIndicator; 5],
    pub diamond: PaneDiamond,
}

impl Default for DragFeedback {
    fn default() -> Self {
        Self {
            outline: None,
            target: DropTarget::None,
            cursor: DragCursor::NotAllowed,
            panel_indicators: [
                PanelIndicator::new(DockStyle::Left),
                PanelIndicator::new(DockStyle::Right),
                PanelIndicator::new(DockStyle::Top),
                PanelIndicator::new(DockStyle::Bottom),
                PanelIndicator::new(DockStyle::Fill),
            ],
            diamond: PaneDiamond::default(),
        }
    }
}

impl DragFeedback {
    /// Number of indicators reporting a hit.
    pub fn indicator_hits(&self) -> usize {
        let panel = self.panel_indicators.iter().filter(|i| i.hit).count();
        panel + usize::from(self.diamond.hit != DockStyle::None)
    }

    pub fn panel_indicator(&self, style: DockStyle) -> Option<&PanelIndicator> {
        self.panel_indicators.iter().find(|i| i.style == style)
    }
}

/// An in-flight drag.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragSession {
    pub(crate) source: DragSource,
    pub(crate) start: Point,
    /// Float outline at the start point; it follows the pointer.
    pub(crate) float_bounds: Rect,
    pub(crate) feedback: DragFeedback,
}
