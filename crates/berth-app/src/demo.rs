//! The sample layout used by `demo` and `script`.

use berth_common::{DockAlignment, DockError, DockState, Rect};
use berth_engine::{BasicContent, DockContent, DockPanel};
use tracing::debug;

/// Client area the sample layout is computed for.
pub const CLIENT: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1280.0,
    height: 800.0,
};

const DOCUMENTS: [(&str, &str); 4] = [
    ("doc:readme", "README.md"),
    ("doc:main", "main.rs"),
    ("doc:lib", "lib.rs"),
    ("doc:notes", "notes.txt"),
];

/// Tool windows on the right and bottom, a floating toolbox and four
/// documents split three ways.
pub fn build(mut panel: DockPanel) -> Result<DockPanel, DockError> {
    panel.set_client_rect(CLIENT);
    {
        let mut panel = panel.suspend_layout();

        let explorer = panel.add_content(BasicContent::tool("tool:explorer", "Explorer"));
        let properties = panel.add_content(BasicContent::tool("tool:properties", "Properties"));
        let output = panel.add_content(BasicContent::tool("tool:output", "Output").with_hide_on_close());
        let tasks = panel.add_content(BasicContent::tool("tool:tasks", "Task List"));
        let toolbox = panel.add_content(BasicContent::tool("tool:toolbox", "Toolbox"));

        panel.show(explorer, DockState::DockRight)?;
        let right = pane_of(&panel, explorer)?;
        panel.show_next_to(properties, right, DockAlignment::Bottom, 0.4)?;
        panel.show(output, DockState::DockBottom)?;
        panel.show(tasks, DockState::DockBottom)?;
        panel.show_floating(toolbox, Rect::new(60.0, 60.0, 220.0, 360.0))?;

        let docs: Vec<_> = DOCUMENTS
            .iter()
            .map(|(persist, text)| panel.add_content(BasicContent::document(*persist, *text)))
            .collect();
        panel.show(docs[0], DockState::Document)?;
        panel.show(docs[1], DockState::Document)?;
        let first = pane_of(&panel, docs[0])?;
        let second = panel.show_next_to(docs[2], first, DockAlignment::Right, 0.5)?;
        panel.show_next_to(docs[3], second, DockAlignment::Bottom, 0.35)?;
        panel.activate(docs[0])?;
    }
    debug!(panes = panel.pane_count(), "demo layout built");
    Ok(panel)
}

/// Placeholder content for a persist string: documents for `doc:` tokens,
/// tool windows for the rest.
pub fn placeholder(persist: &str) -> Option<Box<dyn DockContent>> {
    let content = if persist.starts_with("doc") {
        BasicContent::document(persist, persist)
    } else {
        BasicContent::tool(persist, persist)
    };
    Some(Box::new(content))
}

fn pane_of(panel: &DockPanel, content: berth_common::ContentId) -> Result<berth_common::PaneId, DockError> {
    panel
        .content(content)
        .and_then(|h| h.pane())
        .ok_or(DockError::UnknownContent(content))
}

#[cfg(test)]
mod tests {
    use berth_config::BerthConfig;
    use berth_engine::{ContainerId, LayoutDocument};

    use super::*;
    use crate::options::new_panel;

    fn demo() -> DockPanel {
        build(new_panel(&BerthConfig::default())).unwrap()
    }

    #[test]
    fn demo_layout_shape() {
        let panel = demo();
        assert_eq!(panel.content_count(), 9);
        assert_eq!(panel.pane_count(), 7);
        assert_eq!(panel.float_windows().len(), 1);
        assert!(panel.validate().is_ok());

        let documents = panel
            .nested_panes(ContainerId::Dock(DockState::Document))
            .unwrap();
        assert_eq!(documents.len(), 3);
        let readme = panel.find_content("doc:readme").unwrap();
        assert_eq!(panel.active_document(), Some(readme));
        assert_eq!(panel.active_content(), Some(readme));
    }

    #[test]
    fn demo_layout_survives_json() {
        let panel = demo();
        let doc = panel.save_layout();
        let parsed = LayoutDocument::from_json(&doc.to_json().unwrap()).unwrap();

        let mut loaded = new_panel(&BerthConfig::default());
        loaded.set_client_rect(CLIENT);
        let outcome = loaded.load_layout(&parsed, placeholder).unwrap();
        assert!(outcome.skipped.is_empty());
        assert_eq!(loaded.save_layout(), doc);
    }
}
