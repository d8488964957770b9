//! Nested-pane entries and the status that links each one to its previous pane.

use berth_common::{DockAlignment, PaneId, Rect};
use serde::{Deserialize, Serialize};

/// "Docked `alignment` of `previous` taking `proportion` of it."
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NestedStatus {
    pub previous: Option<PaneId>,
    pub alignment: DockAlignment,
    pub proportion: f64,
}

impl NestedStatus {
    pub fn new(previous: Option<PaneId>, alignment: DockAlignment, proportion: f64) -> Self {
        Self {
            previous,
            alignment,
            proportion,
        }
    }
}

impl Default for NestedStatus {
    fn default() -> Self {
        Self::new(None, DockAlignment::Left, 0.5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NestedEntry {
    pub pane: PaneId,
    pub status: NestedStatus,
}

/// Ordered sibling panes of one container. Entry order is the order in
/// which the binary splits are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedPanes {
    pub(super) entries: Vec<NestedEntry>,
}

/// Bounds computed for one pane of a visible view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaneBounds {
    /// The rectangle that was split between this pane and its previous pane.
    pub logical: Rect,
    pub bounds: Rect,
    pub splitter: Rect,
}

/// A broken previous-pane link.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinkError {
    #[error("{pane} refers to {previous}, which is not in the collection")]
    DanglingPrevious { pane: PaneId, previous: PaneId },

    #[error("{pane} must follow its previous pane {previous}")]
    PreviousAfterPane { pane: PaneId, previous: PaneId },

    #[error("expected exactly one root pane, found {0}")]
    RootCount(usize),

    #[error("{0} appears more than once")]
    Duplicate(PaneId),
}

impl NestedPanes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[NestedEntry] {
        &self.entries
    }

    pub fn panes(&self) -> impl Iterator<Item = PaneId> + '_ {
        self.entries.iter().map(|e| e.pane)
    }

    pub fn first(&self) -> Option<PaneId> {
        self.entries.first().map(|e| e.pane)
    }

    pub fn contains(&self, pane: PaneId) -> bool {
        self.entries.iter().any(|e| e.pane == pane)
    }

    pub fn index_of(&self, pane: PaneId) -> Option<usize> {
        self.entries.iter().position(|e| e.pane == pane)
    }

    pub fn status(&self, pane: PaneId) -> Option<NestedStatus> {
        self.entries.iter().find(|e| e.pane == pane).map(|e| e.status)
    }

    /// Panes docked directly against `pane`, in list order.
    pub fn dependents(&self, pane: PaneId) -> Vec<PaneId> {
        self.entries
            .iter()
            .filter(|e| e.status.previous == Some(pane))
            .map(|e| e.pane)
            .collect()
    }
}
