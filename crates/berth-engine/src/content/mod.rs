//! Dockable content: the host trait and the engine's per-content record.

mod handler;
mod types;

pub use handler::{ContentHandler, DEFAULT_AUTO_HIDE_PORTION};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use berth_common::{ContentId, DockState, PaneId};

    use crate::state::DockAreas;

    fn handler(item: BasicContent) -> ContentHandler {
        ContentHandler::new(ContentId(1), Box::new(item))
    }

    #[test]
    fn new_handler_is_unattached() {
        let h = handler(BasicContent::new("a", "A"));
        assert_eq!(h.dock_state(), DockState::Unknown);
        assert_eq!(h.pane(), None);
        assert_eq!(h.auto_hide_portion(), DEFAULT_AUTO_HIDE_PORTION);
        assert!(h.close_button());
    }

    #[test]
    fn pane_follows_float_flag() {
        let mut h = handler(BasicContent::tool("out", "Output"));
        h.panel_pane = Some(PaneId(1));
        h.float_pane = Some(PaneId(2));
        assert_eq!(h.pane(), Some(PaneId(1)));
        h.is_float = true;
        assert_eq!(h.pane(), Some(PaneId(2)));
    }

    #[test]
    fn hidden_masks_visible_state() {
        let mut h = handler(BasicContent::tool("out", "Output"));
        h.visible_state = DockState::DockBottom;
        h.is_hidden = true;
        assert_eq!(h.dock_state(), DockState::Hidden);
        assert_eq!(h.visible_state(), DockState::DockBottom);
    }

    #[test]
    fn accepts_uses_item_areas() {
        let h = handler(BasicContent::document("doc", "Doc"));
        assert!(h.accepts(DockState::Document));
        assert!(h.accepts(DockState::Float));
        assert!(!h.accepts(DockState::DockLeft));
        assert_eq!(h.dock_areas(), DockAreas::DOCUMENT | DockAreas::FLOAT);
    }

    #[test]
    fn forget_pane_clears_both_slots() {
        let mut h = handler(BasicContent::new("a", "A"));
        h.panel_pane = Some(PaneId(4));
        h.float_pane = Some(PaneId(4));
        h.forget_pane(PaneId(4));
        assert_eq!(h.panel_pane(), None);
        assert_eq!(h.float_pane(), None);
    }

    #[test]
    fn basic_content_builders() {
        let c = BasicContent::tool("tb", "Toolbox")
            .with_hide_on_close()
            .with_show_hint(DockState::DockLeft)
            .with_tool_tip("Tools");
        assert!(c.hide_on_close);
        assert_eq!(c.show_hint(), DockState::DockLeft);
        assert_eq!(c.tool_tip(), Some("Tools".to_string()));
        assert!(!c.without_close_button().close_button());
    }
}
