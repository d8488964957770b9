pub mod commands;
pub mod container;
pub mod content;
pub mod drag;
pub mod geometry;
pub mod nested;
pub mod options;
pub mod pane;
pub mod panel;
pub mod persist;
pub mod state;
pub mod theme;

pub use commands::DockCommand;
pub use container::{ContainerId, DockWindow, FloatWindow};
pub use content::{BasicContent, ContentHandler, DockContent};
pub use drag::{DragCursor, DragFeedback, DragSource, DropTarget, Modifiers};
pub use nested::{NestedPanes, NestedStatus};
pub use options::{BehaviorToggles, DockOptions, DockPortions};
pub use pane::Pane;
pub use panel::{DockPanel, LayoutSuspension, SplitterHandle};
pub use persist::{LayoutDocument, LoadOutcome};
pub use state::DockAreas;
pub use theme::Theme;
