//! Panes: the atomic dockable unit holding tabbed contents.

mod chrome;
mod types;

pub use chrome::{compute_chrome, has_caption, hit_tab, tab_rects, ChromeInput, PaneChrome};
pub use types::*;
