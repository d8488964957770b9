use berth_common::{ContentId, DockError, DockState, DockStyle, DocumentStyle, Rect};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::panel::DockPanel;

/// A docking operation addressed by persist string, as read from scripts
/// or menus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum DockCommand {
    Show {
        content: String,
        state: DockState,
    },
    Hide {
        content: String,
    },
    Close {
        content: String,
    },
    Activate {
        content: String,
    },
    /// Float in a new window with `bounds`, or in the cached float pane.
    Float {
        content: String,
        #[serde(default)]
        bounds: Option<Rect>,
    },
    DockToEdge {
        content: String,
        edge: DockStyle,
    },
    /// Toggle auto-hide on the pane holding the content.
    ToggleAutoHide {
        content: String,
    },
    SetPortion {
        edge: DockState,
        value: f64,
    },
    SetDocumentStyle {
        style: DocumentStyle,
    },
    /// Move an edge window splitter.
    MoveSplitter {
        edge: DockState,
        offset: f64,
    },
    /// Move the splitter in front of the pane holding the content.
    MovePaneSplitter {
        content: String,
        offset: f64,
    },
}

impl DockPanel {
    pub fn execute(&mut self, cmd: DockCommand) -> Result<(), DockError> {
        debug!(?cmd, "executing command");
        match cmd {
            DockCommand::Show { content, state } => {
                let id = self.content_by_persist(&content)?;
                self.show(id, state)
            }
            DockCommand::Hide { content } => {
                let id = self.content_by_persist(&content)?;
                self.hide(id)
            }
            DockCommand::Close { content } => {
                let id = self.content_by_persist(&content)?;
                self.close(id)
            }
            DockCommand::Activate { content } => {
                let id = self.content_by_persist(&content)?;
                self.activate(id)
            }
            DockCommand::Float { content, bounds } => {
                let id = self.content_by_persist(&content)?;
                match bounds {
                    Some(bounds) => self.float_content_at(id, bounds),
                    None => self.set_is_float(id, true),
                }
            }
            DockCommand::DockToEdge { content, edge } => {
                let id = self.content_by_persist(&content)?;
                self.dock_content_to_panel(id, edge)
            }
            DockCommand::ToggleAutoHide { content } => {
                let id = self.content_by_persist(&content)?;
                let pane = self.handler(id)?.pane().ok_or(DockError::InvalidDockState(DockState::Unknown))?;
                self.toggle_auto_hide(pane)
            }
            DockCommand::SetPortion { edge, value } => self.set_dock_portion(edge, value),
            DockCommand::SetDocumentStyle { style } => self.set_document_style(style),
            DockCommand::MoveSplitter { edge, offset } => self.move_dock_window_splitter(edge, offset),
            DockCommand::MovePaneSplitter { content, offset } => {
                let id = self.content_by_persist(&content)?;
                let pane = self.handler(id)?.pane().ok_or(DockError::InvalidDockState(DockState::Unknown))?;
                self.move_pane_splitter(pane, offset)
            }
        }
    }

    fn content_by_persist(&self, persist: &str) -> Result<ContentId, DockError> {
        self.find_content(persist)
            .ok_or_else(|| DockError::ContentNotFound(persist.to_string()))
    }
}
