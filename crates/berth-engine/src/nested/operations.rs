//! Split-tree maintenance: attach, remove with relinking, switch, validate.

use berth_common::{DockAlignment, DockError, PaneId};

use super::{LinkError, NestedEntry, NestedPanes, NestedStatus};

impl NestedPanes {
    /// Check that `pane` may be attached after `previous`.
    pub fn check_attach(&self, pane: PaneId, previous: Option<PaneId>) -> Result<(), DockError> {
        match previous {
            None if self.panes().any(|p| p != pane) => Err(DockError::PreviousPaneRequired),
            None => Ok(()),
            Some(prev) if prev == pane => Err(DockError::PreviousPaneIsSelf(pane)),
            Some(prev) if !self.contains(prev) => Err(DockError::PreviousPaneNotInContainer(prev)),
            Some(_) => Ok(()),
        }
    }

    /// Append `pane` docked against `previous`. A pane already in the
    /// collection is removed first, relinking its dependents.
    pub fn add(
        &mut self,
        pane: PaneId,
        previous: Option<PaneId>,
        alignment: DockAlignment,
        proportion: f64,
    ) -> Result<(), DockError> {
        self.check_attach(pane, previous)?;
        self.remove(pane);
        self.entries.push(NestedEntry {
            pane,
            status: NestedStatus::new(previous, alignment, proportion),
        });
        Ok(())
    }

    /// Remove `pane`. Its last dependent takes over its slot and status, and
    /// the dependents in between are re-pointed at that pane.
    pub fn remove(&mut self, pane: PaneId) -> bool {
        let Some(index) = self.index_of(pane) else {
            return false;
        };
        let status = self.entries[index].status;

        let last = (index + 1..self.entries.len())
            .rev()
            .find(|&i| self.entries[i].status.previous == Some(pane));

        match last {
            Some(last_index) => {
                let mut heir = self.entries.remove(last_index);
                heir.status = status;
                self.entries[index] = heir;
                for entry in &mut self.entries[index + 1..last_index] {
                    if entry.status.previous == Some(pane) {
                        entry.status.previous = Some(heir.pane);
                    }
                }
            }
            None => {
                self.entries.remove(index);
            }
        }
        true
    }

    /// Let the first pane docked against `pane` take its position. `pane`
    /// then docks against that child on the opposite side with the
    /// complementary proportion.
    pub fn switch_pane_with_first_child(&mut self, pane: PaneId) -> bool {
        let Some(index) = self.index_of(pane) else {
            return false;
        };
        let Some(child_index) =
            (index + 1..self.entries.len()).find(|&i| self.entries[i].status.previous == Some(pane))
        else {
            return false;
        };

        let status = self.entries[index].status;
        let child = self.entries[child_index];

        self.entries.swap(index, child_index);
        self.entries[index].status = status;
        for entry in &mut self.entries[index + 1..child_index] {
            if entry.status.previous == Some(pane) {
                entry.status.previous = Some(child.pane);
            }
        }
        self.entries[child_index].status = NestedStatus::new(
            Some(child.pane),
            child.status.alignment.inverted(),
            1.0 - child.status.proportion,
        );
        true
    }

    /// The pane a new sibling attaches to by default: the last entry that is
    /// not `pane` itself.
    pub fn default_previous_pane(&self, pane: PaneId) -> Option<PaneId> {
        self.entries.iter().rev().map(|e| e.pane).find(|&p| p != pane)
    }

    pub fn set_proportion(&mut self, pane: PaneId, proportion: f64) -> bool {
        match self.entries.iter_mut().find(|e| e.pane == pane) {
            Some(entry) => {
                entry.status.proportion = proportion;
                true
            }
            None => false,
        }
    }

    /// Verify connectivity: one root, every previous pane present and listed
    /// before its dependent, no duplicates. The ordering rule also rules out
    /// cycles.
    pub fn validate(&self) -> Result<(), LinkError> {
        if self.entries.is_empty() {
            return Ok(());
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.pane == entry.pane) {
                return Err(LinkError::Duplicate(entry.pane));
            }
            if let Some(previous) = entry.status.previous {
                match self.index_of(previous) {
                    None => {
                        return Err(LinkError::DanglingPrevious {
                            pane: entry.pane,
                            previous,
                        })
                    }
                    Some(p) if p >= i => {
                        return Err(LinkError::PreviousAfterPane {
                            pane: entry.pane,
                            previous,
                        })
                    }
                    Some(_) => {}
                }
            }
        }
        let roots = self
            .entries
            .iter()
            .filter(|e| e.status.previous.is_none())
            .count();
        if roots != 1 {
            return Err(LinkError::RootCount(roots));
        }
        Ok(())
    }
}
