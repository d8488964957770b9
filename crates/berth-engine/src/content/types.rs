//! The host-facing content trait and a plain implementation of it.

use std::fmt;

use berth_common::DockState;

use crate::state::DockAreas;

/// A dockable item supplied by the host: a document or a tool window.
pub trait DockContent: fmt::Debug {
    /// Opaque token used to find this item again when a layout is loaded.
    fn persist_string(&self) -> String;

    fn tab_text(&self) -> String;

    fn tool_tip(&self) -> Option<String> {
        None
    }

    fn dock_areas(&self) -> DockAreas {
        DockAreas::all()
    }

    fn close_button(&self) -> bool {
        true
    }

    fn hide_on_close(&self) -> bool {
        false
    }

    /// Preferred state when shown without an explicit target.
    fn show_hint(&self) -> DockState {
        DockState::Unknown
    }
}

/// A content described entirely by data. Used by the CLI and for layouts
/// whose host items are not available.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicContent {
    pub persist_string: String,
    pub tab_text: String,
    pub tool_tip: Option<String>,
    pub dock_areas: DockAreas,
    pub close_button: bool,
    pub hide_on_close: bool,
    pub show_hint: DockState,
}

impl BasicContent {
    pub fn new(persist_string: impl Into<String>, tab_text: impl Into<String>) -> Self {
        Self {
            persist_string: persist_string.into(),
            tab_text: tab_text.into(),
            tool_tip: None,
            dock_areas: DockAreas::all(),
            close_button: true,
            hide_on_close: false,
            show_hint: DockState::Unknown,
        }
    }

    /// A tool window: any edge or float, never the document area.
    pub fn tool(persist_string: impl Into<String>, tab_text: impl Into<String>) -> Self {
        Self::new(persist_string, tab_text).with_areas(DockAreas::tool_window())
    }

    /// A document: the document area or float.
    pub fn document(persist_string: impl Into<String>, tab_text: impl Into<String>) -> Self {
        Self::new(persist_string, tab_text).with_areas(DockAreas::DOCUMENT | DockAreas::FLOAT)
    }

    pub fn with_areas(mut self, areas: DockAreas) -> Self {
        self.dock_areas = areas;
        self
    }

    pub fn with_show_hint(mut self, hint: DockState) -> Self {
        self.show_hint = hint;
        self
    }

    pub fn with_tool_tip(mut self, tip: impl Into<String>) -> Self {
        self.tool_tip = Some(tip.into());
        self
    }

    pub fn with_hide_on_close(mut self) -> Self {
        self.hide_on_close = true;
        self
    }

    pub fn without_close_button(mut self) -> Self {
        self.close_button = false;
        self
    }
}

impl DockContent for BasicContent {
    fn persist_string(&self) -> String {
        self.persist_string.clone()
    }

    fn tab_text(&self) -> String {
        self.tab_text.clone()
    }

    fn tool_tip(&self) -> Option<String> {
        self.tool_tip.clone()
    }

    fn dock_areas(&self) -> DockAreas {
        self.dock_areas
    }

    fn close_button(&self) -> bool {
        self.close_button
    }

    fn hide_on_close(&self) -> bool {
        self.hide_on_close
    }

    fn show_hint(&self) -> DockState {
        self.show_hint
    }
}
