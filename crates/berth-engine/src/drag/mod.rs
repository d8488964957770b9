//! Drag-to-dock: hit-testing the pointer against the drop targets and
//! committing the one it lands on.

mod handler;
pub mod indicators;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use berth_common::{DockError, DockEvent, DockState, DockStyle, PaneId, Point, Rect};

    use crate::content::BasicContent;
    use crate::options::DockOptions;
    use crate::panel::DockPanel;
    use crate::state::DockAreas;
    use crate::theme::Theme;

    /// Tool `a` on the left, tool `b` on the right of a 1000x600 client.
    fn two_tools() -> (DockPanel, PaneId, PaneId) {
        let mut panel = DockPanel::new(DockOptions::default(), Theme::default());
        panel.set_client_rect(Rect::new(0.0, 0.0, 1000.0, 600.0));
        let a = panel.add_content(BasicContent::tool("a", "Alpha"));
        let b = panel.add_content(BasicContent::tool("b", "Beta"));
        panel.show(a, DockState::DockLeft).unwrap();
        panel.show(b, DockState::DockRight).unwrap();
        let pa = panel.content(a).unwrap().pane().unwrap();
        let pb = panel.content(b).unwrap().pane().unwrap();
        panel.drain_events();
        (panel, pa, pb)
    }

    #[test]
    fn layout_of_fixture() {
        let (panel, pa, pb) = two_tools();
        assert_eq!(panel.pane(pa).unwrap().bounds(), Rect::new(0.0, 0.0, 246.0, 600.0));
        assert_eq!(panel.pane(pb).unwrap().bounds(), Rect::new(754.0, 0.0, 246.0, 600.0));
        assert_eq!(panel.document_window_bounds(), Rect::new(250.0, 0.0, 500.0, 600.0));
    }

    #[test]
    fn diamond_centre_fills_the_pane() {
        let (mut panel, pa, pb) = two_tools();
        panel.begin_drag(DragSource::Pane(pb), Point::new(800.0, 10.0)).unwrap();
        let feedback = panel.drag_move(Point::new(123.0, 300.0), Modifiers::NONE).unwrap();

        assert!(feedback.diamond.visible);
        assert_eq!(feedback.diamond.pane, Some(pa));
        assert_eq!(feedback.diamond.bounds, Rect::new(79.0, 256.0, 88.0, 88.0));
        assert_eq!(feedback.diamond.hit, DockStyle::Fill);
        assert_eq!(
            feedback.target,
            DropTarget::Pane {
                pane: pa,
                style: DockStyle::Fill,
                content_index: -1
            }
        );
        assert_eq!(feedback.indicator_hits(), 1);
        assert_eq!(feedback.cursor, DragCursor::Move);

        let target = panel.end_drag(Point::new(123.0, 300.0), Modifiers::NONE).unwrap();
        assert_eq!(target, feedback.target);
        let a = panel.find_content("a").unwrap();
        let b = panel.find_content("b").unwrap();
        assert_eq!(panel.pane(pa).unwrap().contents(), &[a, b]);
        assert!(panel.pane(pb).is_none());
        assert_eq!(panel.content(b).unwrap().dock_state(), DockState::DockLeft);
        assert!(!panel.is_dragging());
        assert!(panel.events().contains(&DockEvent::DocumentDragged));
    }

    #[test]
    fn occupied_edges_hide_their_indicators() {
        let (mut panel, _, pb) = two_tools();
        panel.begin_drag(DragSource::Pane(pb), Point::new(800.0, 10.0)).unwrap();
        let feedback = panel.drag_move(Point::new(500.0, 300.0), Modifiers::NONE).unwrap();

        let visible = |style| feedback.panel_indicator(style).unwrap().visible;
        assert!(!visible(DockStyle::Left));
        assert!(!visible(DockStyle::Right));
        assert!(visible(DockStyle::Top));
        assert!(visible(DockStyle::Bottom));
        // A tool cannot go to the document area.
        assert!(!visible(DockStyle::Fill));
        assert_eq!(
            feedback.panel_indicator(DockStyle::Top).unwrap().bounds,
            Rect::new(484.0, 10.0, 32.0, 32.0)
        );
    }

    #[test]
    fn panel_indicator_docks_to_edge() {
        let (mut panel, _, pb) = two_tools();
        panel.begin_drag(DragSource::Pane(pb), Point::new(800.0, 10.0)).unwrap();
        let feedback = panel.drag_move(Point::new(500.0, 26.0), Modifiers::NONE).unwrap();
        assert_eq!(
            feedback.target,
            DropTarget::Panel {
                style: DockStyle::Top,
                full_edge: false
            }
        );
        assert_eq!(feedback.outline, Some(Rect::new(250.0, 0.0, 500.0, 150.0)));
        assert_eq!(feedback.indicator_hits(), 1);

        panel.end_drag(Point::new(500.0, 26.0), Modifiers::NONE).unwrap();
        assert_eq!(panel.pane(pb).unwrap().dock_state(), DockState::DockTop);
        assert_eq!(panel.dock_window_z_order().last(), Some(&DockState::DockTop));
    }

    #[test]
    fn shift_docks_to_the_full_edge() {
        let (mut panel, _, pb) = two_tools();
        panel.begin_drag(DragSource::Pane(pb), Point::new(800.0, 10.0)).unwrap();
        let target = panel.end_drag(Point::new(500.0, 26.0), Modifiers::SHIFT).unwrap();
        assert_eq!(
            target,
            DropTarget::Panel {
                style: DockStyle::Top,
                full_edge: true
            }
        );
        assert_eq!(panel.dock_window_z_order().first(), Some(&DockState::DockTop));
        assert_eq!(
            panel.dock_window(DockState::DockTop).unwrap().bounds(),
            Rect::new(0.0, 0.0, 1000.0, 150.0)
        );
    }

    #[test]
    fn control_leaves_only_pane_targets() {
        let (mut panel, pa, pb) = two_tools();
        panel.begin_drag(DragSource::Pane(pb), Point::new(800.0, 10.0)).unwrap();

        // The diamond is suppressed; the centre of the pane floats instead.
        let feedback = panel.drag_move(Point::new(123.0, 300.0), Modifiers::CONTROL).unwrap();
        assert!(!feedback.diamond.visible);
        assert!(feedback.panel_indicators.iter().all(|i| !i.visible));
        assert!(matches!(feedback.target, DropTarget::Float { .. }));

        // The caption still accepts the pane.
        let feedback = panel.drag_move(Point::new(100.0, 9.0), Modifiers::CONTROL).unwrap();
        assert_eq!(
            feedback.target,
            DropTarget::Pane {
                pane: pa,
                style: DockStyle::Fill,
                content_index: -1
            }
        );
        assert_eq!(feedback.indicator_hits(), 0);
    }

    #[test]
    fn float_outline_follows_pointer() {
        let (mut panel, _, _) = two_tools();
        let b = panel.find_content("b").unwrap();
        let start = panel.begin_drag(DragSource::Content(b), Point::new(800.0, 300.0)).unwrap();
        assert_eq!(start, Rect::new(754.0, 300.0, 300.0, 300.0));

        let feedback = panel.drag_move(Point::new(300.0, 300.0), Modifiers::NONE).unwrap();
        let expected = Rect::new(254.0, 300.0, 300.0, 300.0);
        assert_eq!(feedback.target, DropTarget::Float { bounds: expected });
        assert_eq!(feedback.outline, Some(expected));

        panel.end_drag(Point::new(300.0, 300.0), Modifiers::NONE).unwrap();
        assert_eq!(panel.content(b).unwrap().dock_state(), DockState::Float);
        let window = panel.float_windows()[0].id();
        assert_eq!(panel.float_window_bounds(window), Some(expected));
    }

    #[test]
    fn float_window_caption_fills_its_pane() {
        let (mut panel, _, pb) = two_tools();
        let c = panel.add_content(BasicContent::tool("c", "Gamma"));
        panel
            .show_floating(c, Rect::new(400.0, 100.0, 300.0, 300.0))
            .unwrap();
        let pc = panel.content(c).unwrap().pane().unwrap();

        panel.begin_drag(DragSource::Pane(pb), Point::new(800.0, 10.0)).unwrap();
        let feedback = panel.drag_move(Point::new(550.0, 110.0), Modifiers::NONE).unwrap();
        assert_eq!(
            feedback.target,
            DropTarget::Pane {
                pane: pc,
                style: DockStyle::Fill,
                content_index: -1
            }
        );
    }

    #[test]
    fn nothing_accepted_means_not_allowed() {
        let mut panel = DockPanel::new(DockOptions::default(), Theme::default());
        panel.set_client_rect(Rect::new(0.0, 0.0, 1000.0, 600.0));
        let only_left = BasicContent::new("l", "Left only").with_areas(DockAreas::DOCK_LEFT);
        let l = panel.add_content(only_left);
        panel.show(l, DockState::DockLeft).unwrap();
        let panes = panel.pane_count();

        panel.begin_drag(DragSource::Content(l), Point::new(10.0, 10.0)).unwrap();
        let feedback = panel.drag_move(Point::new(600.0, 300.0), Modifiers::NONE).unwrap();
        assert_eq!(feedback.target, DropTarget::None);
        assert_eq!(feedback.cursor, DragCursor::NotAllowed);
        assert_eq!(feedback.outline, None);

        let target = panel.end_drag(Point::new(600.0, 300.0), Modifiers::NONE).unwrap();
        assert!(target.is_none());
        assert_eq!(panel.pane_count(), panes);
        assert_eq!(panel.content(l).unwrap().dock_state(), DockState::DockLeft);
    }

    #[test]
    fn abort_leaves_layout_untouched() {
        let (mut panel, _, pb) = two_tools();
        panel.begin_drag(DragSource::Pane(pb), Point::new(800.0, 10.0)).unwrap();
        panel.drag_move(Point::new(123.0, 300.0), Modifiers::NONE).unwrap();
        panel.abort_drag();

        assert!(!panel.is_dragging());
        assert_eq!(panel.pane(pb).unwrap().dock_state(), DockState::DockRight);
        assert!(!panel.events().contains(&DockEvent::DocumentDragged));
        assert!(matches!(
            panel.drag_move(Point::new(1.0, 1.0), Modifiers::NONE),
            Err(DockError::NoActiveDrag)
        ));
    }

    #[test]
    fn begin_guards() {
        let (mut panel, pa, pb) = two_tools();
        panel.begin_drag(DragSource::Pane(pa), Point::new(10.0, 10.0)).unwrap();
        assert!(matches!(
            panel.begin_drag(DragSource::Pane(pb), Point::new(800.0, 10.0)),
            Err(DockError::DragInProgress)
        ));

        let options = DockOptions {
            allow_end_user_docking: false,
            ..DockOptions::default()
        };
        let mut locked = DockPanel::new(options, Theme::default());
        let a = locked.add_content(BasicContent::tool("a", "Alpha"));
        locked.show(a, DockState::DockLeft).unwrap();
        assert!(matches!(
            locked.begin_drag(DragSource::Content(a), Point::new(0.0, 0.0)),
            Err(DockError::DockingDisabled)
        ));
    }

    #[test]
    fn at_most_one_indicator_hit_anywhere() {
        let (mut panel, _, pb) = two_tools();
        panel.begin_drag(DragSource::Pane(pb), Point::new(800.0, 10.0)).unwrap();
        for modifiers in [Modifiers::NONE, Modifiers::SHIFT, Modifiers::CONTROL] {
            for x in (0..1000).step_by(7) {
                for y in (0..600).step_by(7) {
                    let point = Point::new(x as f64, y as f64);
                    let feedback = panel.drag_move(point, modifiers).unwrap();
                    assert!(feedback.indicator_hits() <= 1, "{point:?} {modifiers:?}");
                    assert_eq!(feedback.target.is_none(), feedback.outline.is_none());
                }
            }
        }
    }
}
