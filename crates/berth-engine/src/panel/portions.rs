//! Edge portions, document style, dock window z-order and the float
//! window surface.

use berth_common::{DockError, DockState, DockStyle, DocumentStyle, FloatWindowId, Rect};
use tracing::{debug, info};

use crate::container::ContainerId;

use super::DockPanel;

impl DockPanel {
    /// Set the share of an edge. Values below 1 are fractions of the dock
    /// area, larger values are pixels. When both opposing fractions would
    /// exceed the whole, the opposite edge shrinks to the complement.
    pub fn set_dock_portion(&mut self, edge: DockState, value: f64) -> Result<(), DockError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DockError::InvalidPortion(value));
        }
        let portions = &mut self.portions;
        let (current, complement) = match edge {
            DockState::DockLeft => (&mut portions.left, &mut portions.right),
            DockState::DockRight => (&mut portions.right, &mut portions.left),
            DockState::DockTop => (&mut portions.top, &mut portions.bottom),
            DockState::DockBottom => (&mut portions.bottom, &mut portions.top),
            other => return Err(DockError::InvalidDockState(other)),
        };
        if *current == value {
            return Ok(());
        }
        *current = value;
        if value < 1.0 && *complement < 1.0 && value + *complement > 1.0 {
            *complement = 1.0 - value;
        }
        debug!(?edge, value, "dock portion changed");
        self.refresh_layout();
        Ok(())
    }

    /// Switch how documents are presented. Moving to system MDI is refused
    /// while documents are displayed in the docking document window.
    pub fn set_document_style(&mut self, style: DocumentStyle) -> Result<(), DockError> {
        if style == self.document_style {
            return Ok(());
        }
        let document_panes: Vec<_> = self
            .dock_windows
            .get(&DockState::Document)
            .map(|w| w.nested.panes().collect())
            .unwrap_or_default();
        if style == DocumentStyle::SystemMdi
            && document_panes
                .iter()
                .any(|p| !self.displaying_contents(*p).is_empty())
        {
            return Err(DockError::DocumentStyleConflict);
        }
        info!(old = ?self.document_style, new = ?style, "document style changed");
        let mut panel = self.suspend_layout();
        panel.document_style = style;
        for pane in document_panes {
            panel.refresh_pane(pane);
        }
        panel.request_layout();
        Ok(())
    }

    /// Edge windows from back to front.
    pub fn dock_window_z_order(&self) -> &[DockState] {
        &self.edge_order
    }

    /// Send an edge window to the back so it spans its whole edge, or bring
    /// it to the front.
    pub fn update_dock_window_z_order(&mut self, style: DockStyle, full_edge: bool) {
        let Some(edge) = style.dock_state().filter(|s| *s != DockState::Document) else {
            return;
        };
        let mut panel = self.suspend_layout();
        panel.edge_order.retain(|s| *s != edge);
        if full_edge {
            panel.edge_order.insert(0, edge);
        } else {
            panel.edge_order.push(edge);
        }
        debug!(?edge, full_edge, "dock window z-order changed");
        panel.request_layout();
    }

    /// Create an empty float window. It stays until its last pane leaves.
    pub fn create_float_window(&mut self, bounds: Rect) -> FloatWindowId {
        let mut panel = self.suspend_layout();
        let id = panel.create_float_window_inner(Some(bounds));
        panel.pending_cleanup.retain(|w| *w != id);
        id
    }

    pub fn float_window_bounds(&self, id: FloatWindowId) -> Option<Rect> {
        self.float_window(id).map(|w| w.bounds)
    }

    pub fn set_float_window_bounds(&mut self, id: FloatWindowId, bounds: Rect) -> Result<(), DockError> {
        let mut panel = self.suspend_layout();
        let window = panel.float_window_mut(id)?;
        if window.bounds != bounds {
            window.bounds = bounds;
            debug!(window = %id, ?bounds, "float window moved");
            panel.request_layout();
        }
        Ok(())
    }

    pub fn set_float_window_allow_docking(&mut self, id: FloatWindowId, allow: bool) -> Result<(), DockError> {
        self.float_window_mut(id)?.allow_end_user_docking = allow;
        Ok(())
    }

    pub fn bring_float_window_to_front(&mut self, id: FloatWindowId) -> Result<(), DockError> {
        let index = self
            .float_windows
            .iter()
            .position(|w| w.id == id)
            .ok_or(DockError::UnknownFloatWindow(id))?;
        let window = self.float_windows.remove(index);
        self.float_windows.push(window);
        Ok(())
    }

    /// Pixel bounds of the container hosting `container`, or the float
    /// window's client area.
    pub fn container_bounds(&self, container: ContainerId) -> Option<Rect> {
        match container {
            ContainerId::Dock(state) => self.dock_windows.get(&state).map(|w| w.displaying),
            ContainerId::Float(id) => self
                .float_window(id)
                .map(|w| w.displaying_rectangle(self.theme.measures.float_caption_height)),
        }
    }
}
