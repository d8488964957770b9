//! The docking engine: registries, the content and pane state machines,
//! focus, layout and splitters.

mod assignment;
mod contents;
mod focus;
mod layout;
mod panes;
mod placement;
mod portions;
mod splitter;
mod suspend;
mod types;

pub use suspend::LayoutSuspension;
pub use types::{DockPanel, SplitterHandle};

#[cfg(test)]
mod tests;
