//! Splitter hit-testing and dragging for edge windows and nested panes.

use berth_common::{DockAlignment, DockError, DockState, DockStyle, PaneId, Point};
use tracing::debug;

use crate::drag::Modifiers;
use crate::geometry::moved_proportion;

use super::types::SplitterDrag;
use super::{DockPanel, SplitterHandle};

impl DockPanel {
    /// Move the inner splitter of an edge window by `offset` pixels. An
    /// absolute portion stays absolute.
    pub fn move_dock_window_splitter(&mut self, edge: DockState, offset: f64) -> Result<(), DockError> {
        let window = self
            .dock_windows
            .get(&edge)
            .filter(|_| edge != DockState::Document)
            .ok_or(DockError::InvalidDockState(edge))?;
        let bounds = window.bounds;
        let area = self.dock_area;
        let (portion, size, dimension, sign) = match edge {
            DockState::DockLeft => (self.portions.left, bounds.width, area.width, 1.0),
            DockState::DockRight => (self.portions.right, bounds.width, area.width, -1.0),
            DockState::DockTop => (self.portions.top, bounds.height, area.height, 1.0),
            _ => (self.portions.bottom, bounds.height, area.height, -1.0),
        };
        let next = if portion > 1.0 {
            size + sign * offset
        } else if dimension > 0.0 {
            portion + sign * offset / dimension
        } else {
            return Ok(());
        };
        self.set_dock_portion(edge, next)
    }

    /// Move the splitter between `pane` and its displaying previous pane by
    /// `offset` pixels.
    pub fn move_pane_splitter(&mut self, pane: PaneId, offset: f64) -> Result<(), DockError> {
        let p = self.pane_ref(pane)?;
        let (container, logical) = (p.container, p.layout.logical);
        let Some(alignment) = p.displaying.map(|s| s.alignment) else {
            return Ok(());
        };
        let Some(container) = container else {
            return Ok(());
        };
        let Some(status) = self.require_container(container)?.status(pane) else {
            return Ok(());
        };
        let Some(proportion) = moved_proportion(status.proportion, alignment, offset, logical) else {
            return Ok(());
        };
        if !proportion.is_finite() || proportion <= 0.0 {
            return Err(DockError::InvalidPortion(proportion));
        }
        let mut panel = self.suspend_layout();
        if let Some(nested) = panel.nested_mut(container) {
            nested.set_proportion(pane, proportion);
        }
        debug!(pane = %pane, proportion, "pane splitter moved");
        panel.request_layout();
        Ok(())
    }

    /// The splitter under `point`. Pane splitters sit inside their windows
    /// and win over the edge splitters.
    pub fn hit_test_splitter(&self, point: Point) -> Option<SplitterHandle> {
        for window in self.float_windows.iter().rev() {
            if window.bounds.contains(point) {
                return window
                    .visible
                    .panes()
                    .find(|p| self.panes.get(p).is_some_and(|p| p.layout.splitter.contains(point)))
                    .map(SplitterHandle::Pane);
            }
        }
        let pane = self.pane_order.iter().copied().find(|id| {
            self.panes
                .get(id)
                .is_some_and(|p| !p.is_float && p.layout.splitter.contains(point))
        });
        if let Some(pane) = pane {
            return Some(SplitterHandle::Pane(pane));
        }
        self.edge_order
            .iter()
            .copied()
            .find(|edge| {
                self.dock_windows
                    .get(edge)
                    .is_some_and(|w| w.is_visible() && w.splitter.contains(point))
            })
            .map(SplitterHandle::DockWindow)
    }

    pub fn begin_splitter_drag(&mut self, handle: SplitterHandle, point: Point) -> Result<(), DockError> {
        if self.drag.is_some() || self.splitter_drag.is_some() {
            return Err(DockError::DragInProgress);
        }
        match handle {
            SplitterHandle::DockWindow(edge) => {
                if !matches!(
                    edge,
                    DockState::DockLeft | DockState::DockRight | DockState::DockTop | DockState::DockBottom
                ) {
                    return Err(DockError::InvalidDockState(edge));
                }
            }
            SplitterHandle::Pane(pane) => {
                self.pane_ref(pane)?;
            }
        }
        self.splitter_drag = Some(SplitterDrag { handle, origin: point });
        Ok(())
    }

    /// Apply the drag. The offset is clamped so neither side of the
    /// splitter ends below the minimum pane size. With Shift an edge window
    /// is also sent to the back.
    pub fn end_splitter_drag(&mut self, point: Point, modifiers: Modifiers) -> Result<(), DockError> {
        let drag = self.splitter_drag.take().ok_or(DockError::NoActiveDrag)?;
        let mut panel = self.suspend_layout();
        match drag.handle {
            SplitterHandle::DockWindow(edge) => {
                let offset = panel.clamp_window_offset(edge, point, drag.origin);
                if modifiers.shift {
                    if let Some(style) = edge_style(edge) {
                        panel.update_dock_window_z_order(style, true);
                    }
                }
                if offset != 0.0 {
                    panel.move_dock_window_splitter(edge, offset)?;
                }
            }
            SplitterHandle::Pane(pane) => {
                let offset = panel.clamp_pane_offset(pane, point, drag.origin);
                if offset != 0.0 {
                    panel.move_pane_splitter(pane, offset)?;
                }
            }
        }
        Ok(())
    }

    pub fn cancel_splitter_drag(&mut self) {
        self.splitter_drag = None;
    }

    fn clamp_window_offset(&self, edge: DockState, point: Point, origin: Point) -> f64 {
        let min = self.theme.measures.min_pane_size;
        let Some(window) = self.dock_windows.get(&edge) else {
            return 0.0;
        };
        let size = window.bounds;
        let doc = self.document_bounds;
        let (offset, lower, upper) = match edge {
            DockState::DockLeft => (point.x - origin.x, min - size.width, doc.width - min),
            DockState::DockRight => (point.x - origin.x, min - doc.width, size.width - min),
            DockState::DockTop => (point.y - origin.y, min - size.height, doc.height - min),
            _ => (point.y - origin.y, min - doc.height, size.height - min),
        };
        clamp(offset, lower, upper)
    }

    fn clamp_pane_offset(&self, pane: PaneId, point: Point, origin: Point) -> f64 {
        let min = self.theme.measures.min_pane_size;
        let Some(p) = self.panes.get(&pane) else {
            return 0.0;
        };
        let Some(status) = p.displaying else {
            return 0.0;
        };
        let this = p.layout.bounds;
        let logical = p.layout.logical;
        let bar = p.layout.splitter;
        let (offset, lower, upper) = match status.alignment {
            DockAlignment::Left => {
                let previous = logical.width - this.width - bar.width;
                (point.x - origin.x, min - this.width, previous - min)
            }
            DockAlignment::Right => {
                let previous = logical.width - this.width - bar.width;
                (point.x - origin.x, min - previous, this.width - min)
            }
            DockAlignment::Top => {
                let previous = logical.height - this.height - bar.height;
                (point.y - origin.y, min - this.height, previous - min)
            }
            DockAlignment::Bottom => {
                let previous = logical.height - this.height - bar.height;
                (point.y - origin.y, min - previous, this.height - min)
            }
        };
        clamp(offset, lower, upper)
    }
}

/// `value` limited to `[lower, upper]`; an empty range pins it to zero.
fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    if lower > upper {
        0.0
    } else {
        value.max(lower).min(upper)
    }
}

fn edge_style(edge: DockState) -> Option<DockStyle> {
    match edge {
        DockState::DockLeft => Some(DockStyle::Left),
        DockState::DockRight => Some(DockStyle::Right),
        DockState::DockTop => Some(DockStyle::Top),
        DockState::DockBottom => Some(DockStyle::Bottom),
        _ => None,
    }
}
