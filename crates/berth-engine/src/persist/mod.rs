//! Saving a docking layout to a [`LayoutDocument`] and rebuilding it.

mod load;
mod save;
mod types;

pub use types::*;
