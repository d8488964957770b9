//! The displaying view of a collection and its bounds.

use berth_common::{PaneId, Rect};

use crate::geometry::split_nested;

use super::{NestedPanes, PaneBounds};

impl NestedPanes {
    /// A copy holding only the panes `is_visible` accepts. Rejected panes are
    /// removed with the usual relinking, so the copy's statuses are the
    /// displaying statuses.
    pub fn visible_view(&self, mut is_visible: impl FnMut(PaneId) -> bool) -> NestedPanes {
        let mut view = self.clone();
        for pane in self.panes() {
            if !is_visible(pane) {
                view.remove(pane);
            }
        }
        view
    }

    /// Apply the splits in list order inside `area`.
    pub fn calculate_bounds(&self, area: Rect, splitter: f64) -> Vec<(PaneId, PaneBounds)> {
        let mut out: Vec<(PaneId, PaneBounds)> = Vec::with_capacity(self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            if i == 0 {
                out.push((
                    entry.pane,
                    PaneBounds {
                        logical: area,
                        bounds: area,
                        splitter: Rect::default(),
                    },
                ));
                continue;
            }

            let previous = entry
                .status
                .previous
                .and_then(|p| out.iter().position(|(id, _)| *id == p));
            let Some(previous) = previous else {
                out.push((entry.pane, PaneBounds::default()));
                continue;
            };

            let rect = out[previous].1.bounds;
            let split = split_nested(rect, entry.status.alignment, entry.status.proportion, splitter);
            out[previous].1.bounds = split.previous;
            out.push((
                entry.pane,
                PaneBounds {
                    logical: rect,
                    bounds: split.this,
                    splitter: split.splitter,
                },
            ));
        }
        out
    }
}
