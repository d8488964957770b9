use berth_common::{ContentId, DockAlignment, DockError, DockState, Rect};
use serde::{Deserialize, Serialize};

use crate::options::DockPortions;

/// Current layout format version.
pub const LAYOUT_FORMAT_VERSION: u32 = 1;

/// A saved docking layout. Contents and panes are referenced by their index
/// in `contents` and `panes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub version: u32,
    pub portions: DockPortions,
    pub contents: Vec<ContentEntry>,
    pub panes: Vec<PaneEntry>,
    pub dock_windows: Vec<DockWindowEntry>,
    pub float_windows: Vec<FloatWindowEntry>,
    pub active_pane: Option<usize>,
    pub active_document_pane: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Token handed to the host to recreate the content.
    pub persist_string: String,
    pub auto_hide_portion: f64,
    pub is_hidden: bool,
    pub is_float: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneEntry {
    pub dock_state: DockState,
    pub active_content: Option<usize>,
    /// Content indices in tab order.
    pub contents: Vec<usize>,
}

/// One entry of a container's split list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NestedPaneEntry {
    pub pane: usize,
    pub previous: Option<usize>,
    pub alignment: DockAlignment,
    pub proportion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockWindowEntry {
    pub dock_state: DockState,
    /// Position from the back; the back window is laid out first.
    pub z_order: usize,
    pub nested: Vec<NestedPaneEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatWindowEntry {
    pub bounds: Rect,
    pub z_order: usize,
    pub nested: Vec<NestedPaneEntry>,
}

/// Result of loading a layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    /// Live id of each saved content, `None` where the host had no match.
    pub contents: Vec<Option<ContentId>>,
    /// Persist strings the host could not resolve.
    pub skipped: Vec<String>,
}

impl LayoutDocument {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check every index and state before anything is built from the
    /// document.
    pub fn validate(&self) -> Result<(), DockError> {
        if self.version == 0 || self.version > LAYOUT_FORMAT_VERSION {
            return Err(malformed(format!("unsupported version {}", self.version)));
        }
        let p = self.portions;
        for value in [p.left, p.right, p.top, p.bottom] {
            if !value.is_finite() || value <= 0.0 {
                return Err(malformed(format!("invalid portion {value}")));
            }
        }

        let content_count = self.contents.len();
        let pane_count = self.panes.len();
        for (i, pane) in self.panes.iter().enumerate() {
            if !pane.dock_state.is_showable() {
                return Err(malformed(format!("pane {i} has state {:?}", pane.dock_state)));
            }
            if pane.contents.is_empty() {
                return Err(malformed(format!("pane {i} has no contents")));
            }
            for (j, &content) in pane.contents.iter().enumerate() {
                if content >= content_count {
                    return Err(malformed(format!("pane {i} references content {content}")));
                }
                if pane.contents[..j].contains(&content) {
                    return Err(malformed(format!("pane {i} lists content {content} twice")));
                }
            }
            if let Some(active) = pane.active_content {
                if !pane.contents.contains(&active) {
                    return Err(malformed(format!("pane {i} activates foreign content {active}")));
                }
            }
        }

        let mut placed = vec![false; pane_count];
        let mut seen_windows = Vec::new();
        for window in &self.dock_windows {
            if !DockState::DOCK_WINDOWS.contains(&window.dock_state) {
                return Err(malformed(format!("no dock window for {:?}", window.dock_state)));
            }
            if seen_windows.contains(&window.dock_state) {
                return Err(malformed(format!("dock window {:?} listed twice", window.dock_state)));
            }
            seen_windows.push(window.dock_state);
            self.validate_nested(&window.nested, &mut placed, |state| {
                state.dock_window() == Some(window.dock_state)
            })?;
        }
        for window in &self.float_windows {
            let b = window.bounds;
            if ![b.x, b.y, b.width, b.height].iter().all(|v| v.is_finite()) {
                return Err(malformed("float window bounds are not finite".into()));
            }
            self.validate_nested(&window.nested, &mut placed, DockState::is_float)?;
        }

        for index in [self.active_pane, self.active_document_pane].into_iter().flatten() {
            if index >= pane_count {
                return Err(malformed(format!("active pane {index} out of range")));
            }
        }
        Ok(())
    }

    fn validate_nested(
        &self,
        nested: &[NestedPaneEntry],
        placed: &mut [bool],
        accepts: impl Fn(DockState) -> bool,
    ) -> Result<(), DockError> {
        for (i, entry) in nested.iter().enumerate() {
            let Some(pane) = self.panes.get(entry.pane) else {
                return Err(malformed(format!("nested entry references pane {}", entry.pane)));
            };
            if !accepts(pane.dock_state) {
                return Err(malformed(format!(
                    "pane {} with state {:?} is in the wrong container",
                    entry.pane, pane.dock_state
                )));
            }
            if std::mem::replace(&mut placed[entry.pane], true) {
                return Err(malformed(format!("pane {} is placed twice", entry.pane)));
            }
            if !entry.proportion.is_finite() || entry.proportion <= 0.0 {
                return Err(malformed(format!("pane {} has proportion {}", entry.pane, entry.proportion)));
            }
            match entry.previous {
                None if i > 0 => {
                    return Err(malformed(format!("pane {} needs a previous pane", entry.pane)));
                }
                Some(previous) if !nested[..i].iter().any(|e| e.pane == previous) => {
                    return Err(malformed(format!(
                        "pane {} docks against {previous}, which is not before it",
                        entry.pane
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn malformed(message: String) -> DockError {
    DockError::MalformedLayout(message)
}
