use berth_common::{ContentId, DockAlignment, DockError, DockState, PaneId};
use tracing::{info, warn};

use crate::container::ContainerId;
use crate::content::DockContent;
use crate::panel::DockPanel;

use super::{LayoutDocument, LoadOutcome, NestedPaneEntry};

impl DockPanel {
    /// Rebuild a saved layout in a panel without contents.
    ///
    /// `resolve` maps each persist string back to a live content. A string it
    /// does not recognise is skipped: its panes lose it, panes left empty are
    /// skipped too, and entries docked against a skipped pane are relinked
    /// to that pane's own previous pane.
    pub fn load_layout<F>(&mut self, doc: &LayoutDocument, mut resolve: F) -> Result<LoadOutcome, DockError>
    where
        F: FnMut(&str) -> Option<Box<dyn DockContent>>,
    {
        if self.content_count() > 0 {
            return Err(DockError::LayoutAlreadyInitialized);
        }
        doc.validate()?;

        let mut outcome = LoadOutcome::default();
        let mut panel = self.suspend_layout();
        for entry in &doc.contents {
            match resolve(&entry.persist_string) {
                Some(item) => outcome.contents.push(Some(panel.add_boxed_content(item))),
                None => {
                    warn!(persist = %entry.persist_string, "skipping unresolved content");
                    outcome.contents.push(None);
                    outcome.skipped.push(entry.persist_string.clone());
                }
            }
        }
        panel.portions = doc.portions;

        // Each pane starts at the default spot of its state and is then
        // re-attached in the recorded split order.
        let mut panes: Vec<Option<PaneId>> = Vec::with_capacity(doc.panes.len());
        for (index, entry) in doc.panes.iter().enumerate() {
            let mut members = resolved(&entry.contents, &outcome.contents);
            members.retain(|&c| {
                let accepted = panel.is_content_state_valid(c, entry.dock_state);
                if !accepted {
                    warn!(content = %c, state = ?entry.dock_state, "content rejects saved pane state");
                }
                accepted
            });
            let Some((&first, rest)) = members.split_first() else {
                warn!(pane = index, state = ?entry.dock_state, "skipping pane without contents");
                panes.push(None);
                continue;
            };
            let pane = panel.create_pane(first, entry.dock_state, false)?;
            for &content in rest {
                if entry.dock_state.is_float() {
                    panel.set_float_pane(content, Some(pane));
                } else {
                    panel.set_panel_pane(content, Some(pane));
                }
            }
            panes.push(Some(pane));
        }
        for pane in panes.iter().flatten() {
            panel.detach_pane(*pane);
        }

        for window in &doc.dock_windows {
            panel.attach_nested(ContainerId::Dock(window.dock_state), &window.nested, &panes)?;
        }
        let mut float_windows: Vec<_> = doc.float_windows.iter().collect();
        float_windows.sort_by_key(|w| w.z_order);
        for window in float_windows {
            if window.nested.iter().all(|e| panes[e.pane].is_none()) {
                continue;
            }
            let id = panel.create_float_window_inner(Some(window.bounds));
            panel.attach_nested(ContainerId::Float(id), &window.nested, &panes)?;
        }
        for pane in panes.iter().flatten() {
            if panel.pane_ref(*pane)?.container.is_none() {
                panel.place_default(*pane)?;
            }
        }
        panel.edge_order = edge_order(doc);

        for (entry, id) in doc.contents.iter().zip(&outcome.contents) {
            let Some(id) = *id else {
                continue;
            };
            let handler = panel.handler(id)?;
            let state_of = |pane: Option<PaneId>| {
                pane.and_then(|p| panel.panes.get(&p)).map(|p| p.dock_state)
            };
            let (float_state, panel_state) = (state_of(handler.float_pane()), state_of(handler.panel_pane()));
            let state = if entry.is_float {
                float_state.or(panel_state)
            } else {
                panel_state.or(float_state)
            };
            match state {
                Some(state) => panel.set_content_state(id, entry.is_hidden, state, None)?,
                None => panel.handler_mut(id)?.is_hidden = entry.is_hidden,
            }
            panel.handler_mut(id)?.auto_hide_portion = entry.auto_hide_portion;
        }

        for (entry, pane) in doc.panes.iter().zip(&panes) {
            let Some(pane) = *pane else {
                continue;
            };
            let mut order = resolved(&entry.contents, &outcome.contents);
            let listed = panel.pane_ref(pane)?.contents().to_vec();
            order.retain(|c| listed.contains(c));
            for (index, content) in order.iter().enumerate() {
                panel.pane_mut(pane)?.set_content_index(*content, index as isize)?;
            }
            let active = entry.active_content.and_then(|c| outcome.contents[c]);
            match active {
                Some(active) if panel.displaying_contents(pane).contains(&active) => {
                    panel.apply_active_content(pane, Some(active));
                }
                _ => panel.validate_active(pane),
            }
        }

        if let Some(pane) = doc.active_document_pane.and_then(|i| panes[i]) {
            panel.set_active_pane(Some(pane));
        }
        let active = doc.active_pane.and_then(|i| panes[i]);
        panel.set_active_pane(active);
        panel.request_layout();

        info!(
            contents = outcome.contents.len(),
            panes = panes.iter().flatten().count(),
            skipped = outcome.skipped.len(),
            "layout loaded"
        );
        Ok(outcome)
    }

    /// Attach the panes of one saved split list to `container`.
    fn attach_nested(
        &mut self,
        container: ContainerId,
        nested: &[NestedPaneEntry],
        panes: &[Option<PaneId>],
    ) -> Result<(), DockError> {
        let saved_previous = |index: usize| {
            nested
                .iter()
                .find(|e| e.pane == index)
                .and_then(|e| e.previous)
        };
        for entry in nested {
            let Some(pane) = panes[entry.pane] else {
                continue;
            };
            let mut previous = entry.previous;
            while let Some(index) = previous {
                if panes[index].is_some() {
                    break;
                }
                previous = saved_previous(index);
            }
            let previous = match previous.and_then(|i| panes[i]) {
                Some(previous) => Some(previous),
                None => self.require_container(container)?.default_previous_pane(pane),
            };
            self.add_pane_to_container(pane, container, previous, entry.alignment, entry.proportion)?;
        }
        Ok(())
    }

    /// Attach a pane no container listed at the default spot of its state.
    fn place_default(&mut self, pane: PaneId) -> Result<(), DockError> {
        let state = self.pane_ref(pane)?.dock_state;
        let container = match state.dock_window() {
            Some(window) => ContainerId::Dock(window),
            None => ContainerId::Float(self.create_float_window_inner(None)),
        };
        let previous = self.require_container(container)?.default_previous_pane(pane);
        let alignment = match container.dock_state() {
            DockState::DockLeft | DockState::DockRight => DockAlignment::Bottom,
            _ => DockAlignment::Right,
        };
        warn!(pane = %pane, container = %container, "pane missing from saved containers");
        self.add_pane_to_container(pane, container, previous, alignment, 0.5)
    }
}

fn resolved(indices: &[usize], contents: &[Option<ContentId>]) -> Vec<ContentId> {
    indices.iter().filter_map(|i| contents[*i]).collect()
}

/// Saved edge windows back to front, with any edge the document left out
/// appended in default order.
fn edge_order(doc: &LayoutDocument) -> Vec<DockState> {
    let mut edges: Vec<_> = doc
        .dock_windows
        .iter()
        .filter(|w| w.dock_state != DockState::Document)
        .map(|w| (w.z_order, w.dock_state))
        .collect();
    edges.sort_by_key(|(z, _)| *z);
    let mut order: Vec<DockState> = edges.into_iter().map(|(_, state)| state).collect();
    for state in [
        DockState::DockBottom,
        DockState::DockTop,
        DockState::DockRight,
        DockState::DockLeft,
    ] {
        if !order.contains(&state) {
            order.push(state);
        }
    }
    order
}
