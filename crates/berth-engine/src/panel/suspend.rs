//! Layout suspension guard and the deferred float-window cleanup queue.

use std::ops::{Deref, DerefMut};

use berth_common::{DockEvent, FloatWindowId};
use tracing::debug;

use crate::container::ContainerId;

use super::DockPanel;

/// Scope guard returned by [`DockPanel::suspend_layout`].
///
/// Layout stays suspended while any guard is alive. Dropping the outermost
/// guard disposes float windows left empty and runs at most one layout pass.
pub struct LayoutSuspension<'a> {
    panel: &'a mut DockPanel,
}

impl Deref for LayoutSuspension<'_> {
    type Target = DockPanel;

    fn deref(&self) -> &DockPanel {
        &*self.panel
    }
}

impl DerefMut for LayoutSuspension<'_> {
    fn deref_mut(&mut self) -> &mut DockPanel {
        &mut *self.panel
    }
}

impl Drop for LayoutSuspension<'_> {
    fn drop(&mut self) {
        self.panel.resume_layout();
    }
}

impl DockPanel {
    pub fn suspend_layout(&mut self) -> LayoutSuspension<'_> {
        self.layout.suspend_count += 1;
        LayoutSuspension { panel: self }
    }

    pub fn is_layout_suspended(&self) -> bool {
        self.layout.suspend_count > 0
    }

    /// Number of layout passes run so far.
    pub fn layout_passes(&self) -> u64 {
        self.layout.passes
    }

    /// Force a layout pass at the end of the current scope.
    pub fn refresh_layout(&mut self) {
        let mut panel = self.suspend_layout();
        panel.request_layout();
    }

    pub(crate) fn request_layout(&mut self) {
        self.layout.requested = true;
    }

    fn resume_layout(&mut self) {
        self.layout.suspend_count = self.layout.suspend_count.saturating_sub(1);
        if self.layout.suspend_count > 0 {
            return;
        }
        self.flush_cleanup();
        if self.layout.requested {
            self.layout.requested = false;
            self.perform_layout();
            self.layout.passes += 1;
            self.emit(DockEvent::LayoutPerformed);
        }
    }

    /// Queue a float container for the emptiness check.
    pub(crate) fn queue_cleanup(&mut self, container: ContainerId) {
        if let ContainerId::Float(id) = container {
            if !self.pending_cleanup.contains(&id) {
                self.pending_cleanup.push(id);
            }
        }
    }

    fn flush_cleanup(&mut self) {
        for id in std::mem::take(&mut self.pending_cleanup) {
            let empty = self.float_window(id).is_some_and(|w| w.nested.is_empty());
            if empty {
                self.dispose_float_window(id);
            }
        }
    }

    pub(crate) fn dispose_float_window(&mut self, id: FloatWindowId) {
        let Some(index) = self.float_windows.iter().position(|w| w.id == id) else {
            return;
        };
        let window = self.float_windows.remove(index);
        debug_assert!(
            window.nested.is_empty(),
            "float window disposed with panes attached"
        );
        for pane in window.nested.panes() {
            if let Some(p) = self.panes.get_mut(&pane) {
                p.container = None;
                p.clear_layout();
            }
        }
        debug!(window = %id, "float window disposed");
        self.emit(DockEvent::FloatWindowDisposed(id));
        self.request_layout();
    }
}
