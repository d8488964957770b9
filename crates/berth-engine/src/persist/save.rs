use std::collections::HashMap;

use berth_common::{ContentId, DockState, PaneId};

use crate::nested::NestedPanes;
use crate::panel::DockPanel;

use super::{
    ContentEntry, DockWindowEntry, FloatWindowEntry, LayoutDocument, NestedPaneEntry, PaneEntry,
    LAYOUT_FORMAT_VERSION,
};

impl DockPanel {
    /// Describe the current layout.
    pub fn save_layout(&self) -> LayoutDocument {
        let content_index: HashMap<ContentId, usize> = self
            .contents()
            .enumerate()
            .map(|(i, h)| (h.id(), i))
            .collect();
        let pane_index: HashMap<PaneId, usize> =
            self.panes().enumerate().map(|(i, p)| (p.id(), i)).collect();

        let contents = self
            .contents()
            .map(|h| ContentEntry {
                persist_string: h.item().persist_string(),
                auto_hide_portion: h.auto_hide_portion(),
                is_hidden: h.is_hidden(),
                is_float: h.is_float(),
            })
            .collect();

        let panes = self
            .panes()
            .map(|p| PaneEntry {
                dock_state: p.dock_state(),
                active_content: p
                    .active_content()
                    .and_then(|c| content_index.get(&c).copied()),
                contents: p
                    .contents()
                    .iter()
                    .filter_map(|c| content_index.get(c).copied())
                    .collect(),
            })
            .collect();

        let z_order = self.dock_window_z_order();
        let dock_windows = DockState::DOCK_WINDOWS
            .into_iter()
            .filter_map(|state| {
                let window = self.dock_window(state)?;
                Some(DockWindowEntry {
                    dock_state: state,
                    z_order: z_order
                        .iter()
                        .position(|s| *s == state)
                        .unwrap_or(z_order.len()),
                    nested: nested_entries(window.nested_panes(), &pane_index),
                })
            })
            .collect();

        let float_windows = self
            .float_windows()
            .iter()
            .enumerate()
            .map(|(i, w)| FloatWindowEntry {
                bounds: w.bounds(),
                z_order: i,
                nested: nested_entries(w.nested_panes(), &pane_index),
            })
            .collect();

        LayoutDocument {
            version: LAYOUT_FORMAT_VERSION,
            portions: self.portions(),
            contents,
            panes,
            dock_windows,
            float_windows,
            active_pane: self.active_pane().and_then(|p| pane_index.get(&p).copied()),
            active_document_pane: self
                .active_document_pane()
                .and_then(|p| pane_index.get(&p).copied()),
        }
    }
}

fn nested_entries(nested: &NestedPanes, pane_index: &HashMap<PaneId, usize>) -> Vec<NestedPaneEntry> {
    nested
        .entries()
        .iter()
        .filter_map(|entry| {
            Some(NestedPaneEntry {
                pane: *pane_index.get(&entry.pane)?,
                previous: entry
                    .status
                    .previous
                    .and_then(|p| pane_index.get(&p).copied()),
                alignment: entry.status.alignment,
                proportion: entry.status.proportion,
            })
        })
        .collect()
}
