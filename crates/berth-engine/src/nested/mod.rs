//! Nested panes: the flat list encoding a container's binary split tree.

mod operations;
mod types;
mod visible;

pub use types::*;
