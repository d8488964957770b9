use berth_common::{
    DockAlignment, DockError, DockEvent, DockState, DocumentStyle, PaneId, Point, Rect,
};

use super::{DockPanel, SplitterHandle};
use crate::content::BasicContent;
use crate::drag::Modifiers;
use crate::options::{BehaviorToggles, DockOptions};
use crate::theme::Theme;

fn panel() -> DockPanel {
    let mut panel = DockPanel::new(DockOptions::default(), Theme::default());
    panel.set_client_rect(Rect::new(0.0, 0.0, 1000.0, 600.0));
    panel
}

fn pane_of(panel: &DockPanel, persist: &str) -> PaneId {
    let id = panel.find_content(persist).unwrap();
    panel.content(id).unwrap().pane().unwrap()
}

/// Every non-empty active content is one of its pane's displaying contents.
fn assert_active_members(panel: &DockPanel) {
    for pane in panel.panes() {
        if let Some(active) = pane.active_content() {
            assert!(
                panel.displaying_contents(pane.id()).contains(&active),
                "{} has non-displaying active {}",
                pane.id(),
                active
            );
        }
    }
}

// -- Portions --

#[test]
fn opposing_portions_never_exceed_the_whole() {
    let mut panel = panel();
    let edges = [
        DockState::DockLeft,
        DockState::DockRight,
        DockState::DockTop,
        DockState::DockBottom,
    ];
    for (i, value) in [0.8, 0.1, 0.95, 0.5, 0.99, 0.3, 0.7].into_iter().enumerate() {
        panel.set_dock_portion(edges[i % 4], value).unwrap();
        let p = panel.portions();
        assert!(p.left + p.right <= 1.0 + 1e-12, "{p:?}");
        assert!(p.top + p.bottom <= 1.0 + 1e-12, "{p:?}");
    }
}

#[test]
fn portion_setter_shrinks_the_complement() {
    let mut panel = panel();
    panel.set_dock_portion(DockState::DockLeft, 0.8).unwrap();
    assert!((panel.portions().right - 0.2).abs() < 1e-9);

    // Absolute sizes leave the other side alone.
    panel.set_dock_portion(DockState::DockTop, 400.0).unwrap();
    assert_eq!(panel.portions().bottom, 0.25);
}

#[test]
fn portion_setter_rejects_bad_input() {
    let mut panel = panel();
    for value in [0.0, -0.5, f64::NAN] {
        assert!(matches!(
            panel.set_dock_portion(DockState::DockLeft, value),
            Err(DockError::InvalidPortion(_))
        ));
    }
    assert_eq!(
        panel.set_dock_portion(DockState::Float, 0.3),
        Err(DockError::InvalidDockState(DockState::Float))
    );

    let passes = panel.layout_passes();
    panel.set_dock_portion(DockState::DockLeft, 0.25).unwrap();
    assert_eq!(panel.layout_passes(), passes);
}

// -- Showing --

#[test]
fn show_reuses_the_pane_of_a_state() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    let b = panel.add_content(BasicContent::tool("b", "Beta"));
    let c = panel.add_content(BasicContent::tool("c", "Gamma"));
    panel.show(a, DockState::DockLeft).unwrap();
    panel.show(b, DockState::DockLeft).unwrap();
    panel.show(c, DockState::DockRight).unwrap();

    let left = pane_of(&panel, "a");
    assert_eq!(pane_of(&panel, "b"), left);
    assert_ne!(pane_of(&panel, "c"), left);
    assert_eq!(panel.pane_count(), 2);
    assert_eq!(panel.active_content(), Some(c));
    assert_eq!(panel.pane(left).unwrap().active_content(), Some(b));
    assert!(panel.validate().is_ok());
}

#[test]
fn show_in_pane_inserts_before_a_tab() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    let b = panel.add_content(BasicContent::tool("b", "Beta"));
    let c = panel.add_content(BasicContent::tool("c", "Gamma"));
    panel.show(a, DockState::DockLeft).unwrap();
    panel.show(b, DockState::DockLeft).unwrap();
    panel.show(c, DockState::DockRight).unwrap();
    let left = pane_of(&panel, "a");

    panel.show_in_pane(c, left, Some(b)).unwrap();
    assert_eq!(panel.pane(left).unwrap().contents(), &[a, c, b]);
    assert_eq!(panel.pane_count(), 1);
    assert_eq!(panel.active_content(), Some(c));
}

#[test]
fn show_next_to_splits_the_window() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    let b = panel.add_content(BasicContent::tool("b", "Beta"));
    panel.show(a, DockState::DockLeft).unwrap();
    let pa = pane_of(&panel, "a");
    let pb = panel.show_next_to(b, pa, DockAlignment::Bottom, 0.5).unwrap();

    assert_eq!(panel.content(b).unwrap().dock_state(), DockState::DockLeft);
    assert_eq!(panel.pane(pa).unwrap().bounds(), Rect::new(0.0, 0.0, 246.0, 298.0));
    assert_eq!(panel.pane(pb).unwrap().bounds(), Rect::new(0.0, 302.0, 246.0, 298.0));
    assert_eq!(
        panel.pane(pb).unwrap().splitter_bounds(),
        Rect::new(0.0, 298.0, 246.0, 4.0)
    );
}

#[test]
fn content_fill_index_counts_displaying_tabs() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    let b = panel.add_content(BasicContent::tool("b", "Beta"));
    let c = panel.add_content(BasicContent::tool("c", "Gamma"));
    let d = panel.add_content(BasicContent::tool("d", "Delta"));
    for content in [a, b, c] {
        panel.show(content, DockState::DockLeft).unwrap();
    }
    panel.show(d, DockState::DockRight).unwrap();
    panel.hide(b).unwrap();
    let left = pane_of(&panel, "a");

    panel
        .dock_content_to_pane(d, left, berth_common::DockStyle::Fill, 1)
        .unwrap();
    assert_eq!(panel.pane(left).unwrap().contents(), &[a, b, d, c]);
    assert_eq!(panel.displaying_contents(left), vec![a, d, c]);
    assert_eq!(panel.pane(left).unwrap().active_content(), Some(d));
}

// -- Focus --

#[test]
fn active_content_must_be_displaying() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    let b = panel.add_content(BasicContent::tool("b", "Beta"));
    let c = panel.add_content(BasicContent::tool("c", "Gamma"));
    panel.show(a, DockState::DockLeft).unwrap();
    panel.show(b, DockState::DockLeft).unwrap();
    panel.show(c, DockState::DockRight).unwrap();
    let left = pane_of(&panel, "a");

    assert_eq!(
        panel.set_active_content(left, Some(c)),
        Err(DockError::InvalidActiveContent { pane: left, content: c })
    );
    assert_eq!(
        panel.set_active_content(left, None),
        Err(DockError::ActiveContentRequired(left))
    );
    panel.set_active_content(left, Some(a)).unwrap();
    assert_eq!(panel.pane(left).unwrap().active_content(), Some(a));

    panel.hide(a).unwrap();
    assert_eq!(panel.pane(left).unwrap().active_content(), Some(b));
    assert_active_members(&panel);
}

#[test]
fn filtered_active_content_falls_back_to_previous_tab() {
    let mut panel = panel();
    let ids: Vec<_> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|name| panel.add_content(BasicContent::tool(name, name)))
        .collect();
    for id in &ids {
        panel.show(*id, DockState::DockLeft).unwrap();
    }
    let pane = pane_of(&panel, "a");
    panel.activate(ids[1]).unwrap();

    // Floating B leaves it cached in the pane, filtered out of the tabs.
    panel.set_is_float(ids[1], true).unwrap();
    assert_eq!(panel.pane(pane).unwrap().contents(), ids.as_slice());
    assert_eq!(panel.pane(pane).unwrap().active_content(), Some(ids[0]));
    assert_active_members(&panel);
}

#[test]
fn hidden_active_content_falls_back_to_previous_tab() {
    let mut panel = panel();
    let ids: Vec<_> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|name| panel.add_content(BasicContent::tool(name, name)))
        .collect();
    for id in &ids {
        panel.show(*id, DockState::DockLeft).unwrap();
    }
    let pane = pane_of(&panel, "a");
    panel.activate(ids[1]).unwrap();
    panel.hide(ids[1]).unwrap();
    assert_eq!(panel.pane(pane).unwrap().active_content(), Some(ids[0]));
}

#[test]
fn first_tab_when_closest_selection_is_off() {
    let options = DockOptions {
        behavior: BehaviorToggles {
            select_closest_on_close: false,
            ..BehaviorToggles::default()
        },
        ..DockOptions::default()
    };
    let mut panel = DockPanel::new(options, Theme::default());
    let ids: Vec<_> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|name| panel.add_content(BasicContent::tool(name, name)))
        .collect();
    for id in &ids {
        panel.show(*id, DockState::DockLeft).unwrap();
    }
    let pane = pane_of(&panel, "a");
    panel.activate(ids[3]).unwrap();
    panel.hide(ids[3]).unwrap();
    assert_eq!(panel.pane(pane).unwrap().active_content(), Some(ids[0]));
}

#[test]
fn active_pane_cleared_when_disposed() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    panel.show(a, DockState::DockLeft).unwrap();
    let pane = pane_of(&panel, "a");
    assert_eq!(panel.active_pane(), Some(pane));

    panel.close(a).unwrap();
    assert_eq!(panel.active_pane(), None);
    assert!(panel.pane(pane).is_none());
    assert!(panel.content(a).is_none());
}

#[test]
fn active_document_tracks_last_document_pane() {
    let mut panel = panel();
    let d = panel.add_content(BasicContent::document("doc", "Doc"));
    let t = panel.add_content(BasicContent::tool("tool", "Tool"));
    panel.show(d, DockState::Document).unwrap();
    panel.show(t, DockState::DockLeft).unwrap();

    assert_eq!(panel.active_content(), Some(t));
    assert_eq!(panel.active_document(), Some(d));
    assert_eq!(panel.active_document_pane(), Some(pane_of(&panel, "doc")));
}

// -- Float and auto-hide --

#[test]
fn float_and_back_keeps_the_panel_pane() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    panel.show(a, DockState::DockLeft).unwrap();
    let home = pane_of(&panel, "a");

    panel.set_is_float(a, true).unwrap();
    assert_eq!(panel.content(a).unwrap().dock_state(), DockState::Float);
    assert_eq!(panel.float_windows().len(), 1);
    assert!(panel.pane(home).unwrap().is_hidden());

    panel.set_is_float(a, false).unwrap();
    assert_eq!(panel.content(a).unwrap().dock_state(), DockState::DockLeft);
    assert_eq!(pane_of(&panel, "a"), home);
    assert!(!panel.pane(home).unwrap().is_hidden());
}

#[test]
fn float_windows_cascade() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    let b = panel.add_content(BasicContent::tool("b", "Beta"));
    panel.show(a, DockState::Float).unwrap();
    panel.show(b, DockState::DockLeft).unwrap();
    panel.set_is_float(b, true).unwrap();

    let bounds: Vec<Rect> = panel.float_windows().iter().map(|w| w.bounds()).collect();
    assert_eq!(
        bounds,
        vec![
            Rect::new(0.0, 0.0, 300.0, 300.0),
            Rect::new(20.0, 20.0, 300.0, 300.0)
        ]
    );
}

#[test]
fn auto_hide_round_trip() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    let b = panel.add_content(BasicContent::tool("b", "Beta"));
    panel.show(a, DockState::DockLeft).unwrap();
    panel.show(b, DockState::DockRight).unwrap();
    let pane = pane_of(&panel, "a");

    panel.toggle_auto_hide(pane).unwrap();
    assert_eq!(panel.content(a).unwrap().dock_state(), DockState::DockLeftAutoHide);
    assert_eq!(panel.dock_padding(DockState::DockLeft), 22.0);
    assert_eq!(panel.dock_area().x, 22.0);
    assert!(!panel.dock_window(DockState::DockLeft).unwrap().is_visible());
    assert_eq!(panel.auto_hide_window_bounds(), None);

    assert_eq!(
        panel.set_active_auto_hide_content(Some(b)),
        Err(DockError::InvalidDockState(DockState::DockRight))
    );
    panel.set_active_auto_hide_content(Some(a)).unwrap();
    assert_eq!(
        panel.auto_hide_window_bounds(),
        Some(Rect::new(22.0, 0.0, 244.0, 600.0))
    );
    assert!(panel.pane_chrome(pane).is_some());

    panel.toggle_auto_hide(pane).unwrap();
    assert_eq!(panel.content(a).unwrap().dock_state(), DockState::DockLeft);
    assert_eq!(panel.active_auto_hide_content(), None);
    assert_eq!(panel.dock_padding(DockState::DockLeft), 0.0);
}

#[test]
fn hovering_a_strip_tab_follows_the_option() {
    for on_hover in [true, false] {
        let options = DockOptions {
            show_auto_hide_content_on_hover: on_hover,
            ..DockOptions::default()
        };
        let mut panel = DockPanel::new(options, Theme::default());
        panel.set_client_rect(Rect::new(0.0, 0.0, 1000.0, 600.0));
        let a = panel.add_content(BasicContent::tool("a", "Alpha"));
        let b = panel.add_content(BasicContent::tool("b", "Beta"));
        panel.show(a, DockState::DockLeftAutoHide).unwrap();
        panel.show(b, DockState::DockRight).unwrap();
        panel.drain_events();

        assert_eq!(panel.hover_auto_hide_tab(a), Ok(on_hover));
        assert_eq!(panel.active_auto_hide_content(), on_hover.then_some(a));
        assert_eq!(
            panel
                .drain_events()
                .contains(&DockEvent::ActiveAutoHideContentChanged(Some(a))),
            on_hover
        );
        assert_eq!(
            panel.hover_auto_hide_tab(b),
            Err(DockError::InvalidDockState(DockState::DockRight))
        );
    }
}

#[test]
fn toggle_auto_hide_rejects_float_and_document() {
    let mut panel = panel();
    let d = panel.add_content(BasicContent::document("doc", "Doc"));
    panel.show(d, DockState::Document).unwrap();
    let pane = pane_of(&panel, "doc");
    assert_eq!(
        panel.toggle_auto_hide(pane),
        Err(DockError::InvalidDockState(DockState::Document))
    );
}

// -- Migration --

#[test]
fn pane_state_change_across_float_migrates_accepting_contents() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    let pinned = panel.add_content(
        BasicContent::new("pinned", "Pinned").with_areas(crate::state::DockAreas::DOCK_LEFT),
    );
    panel.show(a, DockState::DockLeft).unwrap();
    panel.show(pinned, DockState::DockLeft).unwrap();
    let left = pane_of(&panel, "a");

    let dest = panel.set_pane_dock_state(left, DockState::Float).unwrap().unwrap();
    assert_ne!(dest, left);
    assert_eq!(panel.pane(dest).unwrap().dock_state(), DockState::Float);
    assert_eq!(panel.displaying_contents(dest), vec![a]);
    assert_eq!(panel.displaying_contents(left), vec![pinned]);

    // Nothing left that accepts the float state.
    assert_eq!(panel.set_pane_dock_state(left, DockState::Float), Ok(None));
    assert_active_members(&panel);
}

#[test]
fn pane_state_change_in_place_moves_the_pane() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    panel.show(a, DockState::DockLeft).unwrap();
    let pane = pane_of(&panel, "a");

    assert_eq!(panel.set_pane_dock_state(pane, DockState::DockBottom), Ok(Some(pane)));
    assert_eq!(panel.content(a).unwrap().dock_state(), DockState::DockBottom);
    assert!(panel
        .dock_window(DockState::DockBottom)
        .unwrap()
        .nested_panes()
        .contains(pane));
    assert!(panel
        .dock_window(DockState::DockLeft)
        .unwrap()
        .nested_panes()
        .is_empty());
}

#[test]
fn float_pane_returns_none_without_floatable_contents() {
    let mut panel = panel();
    let pinned = panel.add_content(
        BasicContent::new("pinned", "Pinned").with_areas(crate::state::DockAreas::DOCK_LEFT),
    );
    panel.show(pinned, DockState::DockLeft).unwrap();
    let pane = pane_of(&panel, "pinned");
    assert_eq!(panel.float_pane(pane), Ok(None));
    assert_eq!(panel.float_windows().len(), 0);
}

// -- Close --

#[test]
fn close_hides_or_removes() {
    let mut panel = panel();
    let keep = panel.add_content(BasicContent::tool("keep", "Keep").with_hide_on_close());
    let drop = panel.add_content(BasicContent::tool("drop", "Drop"));
    panel.show(keep, DockState::DockLeft).unwrap();
    panel.show(drop, DockState::DockLeft).unwrap();
    panel.drain_events();

    panel.close(keep).unwrap();
    assert_eq!(panel.content(keep).unwrap().dock_state(), DockState::Hidden);

    panel.close(drop).unwrap();
    assert!(panel.content(drop).is_none());
    assert!(panel.events().contains(&DockEvent::ContentRemoved(drop)));

    // Closing again is a no-op.
    panel.close(drop).unwrap();
    assert_eq!(panel.content_count(), 1);
}

#[test]
fn close_button_can_be_disabled() {
    let mut panel = panel();
    let fixed = panel.add_content(BasicContent::tool("fixed", "Fixed").without_close_button());
    panel.show(fixed, DockState::DockLeft).unwrap();
    let pane = pane_of(&panel, "fixed");
    panel.close_pane_content(pane, fixed).unwrap();
    assert_eq!(panel.content(fixed).unwrap().dock_state(), DockState::DockLeft);
}

// -- Events --

#[test]
fn events_fire_in_order() {
    let mut panel = panel();
    panel.drain_events();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    panel.show(a, DockState::DockLeft).unwrap();
    let pane = pane_of(&panel, "a");
    let events = panel.drain_events();

    assert_eq!(events.first(), Some(&DockEvent::ContentAdded(a)));
    assert_eq!(events.last(), Some(&DockEvent::LayoutPerformed));
    let position = |event: &DockEvent| events.iter().position(|e| e == event).unwrap();
    let created = position(&DockEvent::PaneCreated(pane));
    let changed = position(&DockEvent::ContentDockStateChanged {
        content: a,
        old: DockState::Unknown,
        new: DockState::DockLeft,
    });
    let activated = position(&DockEvent::ActivePaneChanged(Some(pane)));
    assert!(created < changed && changed < activated);
    assert_eq!(
        events.iter().filter(|e| **e == DockEvent::LayoutPerformed).count(),
        1
    );
}

// -- Suspension --

#[test]
fn nested_suspensions_run_one_pass() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    let b = panel.add_content(BasicContent::tool("b", "Beta"));
    let passes = panel.layout_passes();
    {
        let mut outer = panel.suspend_layout();
        {
            let mut inner = outer.suspend_layout();
            inner.show(a, DockState::DockLeft).unwrap();
            inner.refresh_layout();
        }
        assert!(outer.is_layout_suspended());
        assert_eq!(outer.layout_passes(), passes);
        outer.show(b, DockState::DockRight).unwrap();
        assert_eq!(outer.layout_passes(), passes);
    }
    assert!(!panel.is_layout_suspended());
    assert_eq!(panel.layout_passes(), passes + 1);
    assert_eq!(
        panel.pane(pane_of(&panel, "b")).unwrap().bounds(),
        Rect::new(754.0, 0.0, 246.0, 600.0)
    );
}

#[test]
fn empty_float_window_disposed_at_outer_resume() {
    let mut panel = panel();
    let c = panel.add_content(BasicContent::tool("c", "Gamma"));
    {
        let mut scope = panel.suspend_layout();
        scope
            .show_floating(c, Rect::new(100.0, 100.0, 200.0, 200.0))
            .unwrap();
        let window = scope.float_windows()[0].id();
        scope.remove_content(c).unwrap();
        assert_eq!(scope.float_windows().len(), 1);
        assert!(scope.float_window(window).unwrap().nested_panes().is_empty());
    }
    assert!(panel.float_windows().is_empty());
    assert!(panel
        .events()
        .iter()
        .any(|e| matches!(e, DockEvent::FloatWindowDisposed(_))));
}

#[test]
fn explicit_float_window_survives_while_empty() {
    let mut panel = panel();
    let window = panel.create_float_window(Rect::new(50.0, 50.0, 320.0, 240.0));
    assert_eq!(
        panel.float_window_bounds(window),
        Some(Rect::new(50.0, 50.0, 320.0, 240.0))
    );
    panel.refresh_layout();
    assert!(panel.float_window(window).is_some());
}

// -- Document style --

#[test]
fn system_mdi_refused_while_documents_dock() {
    let mut panel = panel();
    let d = panel.add_content(BasicContent::document("doc", "Doc"));
    panel.show(d, DockState::Document).unwrap();

    assert_eq!(
        panel.set_document_style(DocumentStyle::SystemMdi),
        Err(DockError::DocumentStyleConflict)
    );
    panel.set_document_style(DocumentStyle::DockingSdi).unwrap();
    assert_eq!(panel.document_style(), DocumentStyle::DockingSdi);

    panel.remove_content(d).unwrap();
    panel.set_document_style(DocumentStyle::SystemMdi).unwrap();

    let next = panel.add_content(BasicContent::document("next", "Next"));
    assert_eq!(
        panel.show(next, DockState::Document),
        Err(DockError::InvalidDockState(DockState::Document))
    );
}

// -- Z-order and splitters --

#[test]
fn full_edge_window_spans_the_client() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    let b = panel.add_content(BasicContent::tool("b", "Beta"));
    panel.show(a, DockState::DockLeft).unwrap();
    panel.show(b, DockState::DockBottom).unwrap();

    // Default order lays the bottom out first.
    assert_eq!(
        panel.dock_window(DockState::DockLeft).unwrap().bounds(),
        Rect::new(0.0, 0.0, 250.0, 450.0)
    );
    panel.update_dock_window_z_order(berth_common::DockStyle::Left, true);
    assert_eq!(panel.dock_window_z_order()[0], DockState::DockLeft);
    assert_eq!(
        panel.dock_window(DockState::DockLeft).unwrap().bounds(),
        Rect::new(0.0, 0.0, 250.0, 600.0)
    );
    assert_eq!(
        panel.dock_window(DockState::DockBottom).unwrap().bounds(),
        Rect::new(250.0, 450.0, 750.0, 150.0)
    );
}

#[test]
fn dock_window_splitter_drag() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    panel.show(a, DockState::DockLeft).unwrap();

    let handle = panel.hit_test_splitter(Point::new(248.0, 300.0)).unwrap();
    assert_eq!(handle, SplitterHandle::DockWindow(DockState::DockLeft));
    panel.begin_splitter_drag(handle, Point::new(248.0, 300.0)).unwrap();
    assert_eq!(
        panel.begin_splitter_drag(handle, Point::new(248.0, 300.0)),
        Err(DockError::DragInProgress)
    );
    panel
        .end_splitter_drag(Point::new(348.0, 300.0), Modifiers::NONE)
        .unwrap();
    assert!((panel.portions().left - 0.35).abs() < 1e-9);
    assert_eq!(
        panel.dock_window(DockState::DockLeft).unwrap().bounds().width,
        350.0
    );
    assert_eq!(
        panel.end_splitter_drag(Point::new(0.0, 0.0), Modifiers::NONE),
        Err(DockError::NoActiveDrag)
    );
}

#[test]
fn absolute_portion_stays_absolute() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    panel.show(a, DockState::DockRight).unwrap();
    panel.set_dock_portion(DockState::DockRight, 200.0).unwrap();
    assert_eq!(
        panel.dock_window(DockState::DockRight).unwrap().bounds(),
        Rect::new(800.0, 0.0, 200.0, 600.0)
    );
    // Dragging the right splitter left grows the window.
    panel.move_dock_window_splitter(DockState::DockRight, -50.0).unwrap();
    assert_eq!(panel.portions().right, 250.0);
}

#[test]
fn overflowing_absolute_portions_split_even_with_one_edge_shown() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    panel.show(a, DockState::DockLeft).unwrap();
    panel.set_dock_portion(DockState::DockLeft, 600.0).unwrap();
    panel.set_dock_portion(DockState::DockRight, 600.0).unwrap();

    // 600 + 600 overflows 1000 - 24 by 224; each side gives up half.
    assert_eq!(panel.dock_window_size(DockState::DockLeft), 488.0);
    assert_eq!(
        panel.dock_window(DockState::DockLeft).unwrap().bounds().width,
        488.0
    );

    let b = panel.add_content(BasicContent::tool("b", "Beta"));
    panel.show(b, DockState::DockRight).unwrap();
    assert_eq!(panel.dock_window_size(DockState::DockLeft), 488.0);
    assert_eq!(panel.dock_window_size(DockState::DockRight), 488.0);
}

#[test]
fn splitter_drag_is_clamped() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    panel.show(a, DockState::DockLeft).unwrap();
    panel
        .begin_splitter_drag(SplitterHandle::DockWindow(DockState::DockLeft), Point::new(248.0, 0.0))
        .unwrap();
    panel
        .end_splitter_drag(Point::new(-500.0, 0.0), Modifiers::NONE)
        .unwrap();
    assert_eq!(
        panel.dock_window(DockState::DockLeft).unwrap().bounds().width,
        24.0
    );
}

#[test]
fn pane_splitter_drag() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    let b = panel.add_content(BasicContent::tool("b", "Beta"));
    panel.show(a, DockState::DockLeft).unwrap();
    let pa = pane_of(&panel, "a");
    let pb = panel.show_next_to(b, pa, DockAlignment::Bottom, 0.5).unwrap();

    let handle = panel.hit_test_splitter(Point::new(100.0, 300.0)).unwrap();
    assert_eq!(handle, SplitterHandle::Pane(pb));
    panel.begin_splitter_drag(handle, Point::new(100.0, 300.0)).unwrap();
    panel
        .end_splitter_drag(Point::new(100.0, 200.0), Modifiers::NONE)
        .unwrap();

    let status = panel
        .dock_window(DockState::DockLeft)
        .unwrap()
        .nested_panes()
        .status(pb)
        .unwrap();
    assert!((status.proportion - (0.5 + 100.0 / 600.0)).abs() < 1e-9);
    assert!(panel.pane(pb).unwrap().bounds().height > 298.0);
}

#[test]
fn shift_splitter_drag_sends_edge_to_back() {
    let mut panel = panel();
    let a = panel.add_content(BasicContent::tool("a", "Alpha"));
    panel.show(a, DockState::DockLeft).unwrap();
    panel
        .begin_splitter_drag(SplitterHandle::DockWindow(DockState::DockLeft), Point::new(248.0, 0.0))
        .unwrap();
    panel
        .end_splitter_drag(Point::new(248.0, 0.0), Modifiers::SHIFT)
        .unwrap();
    assert_eq!(panel.dock_window_z_order()[0], DockState::DockLeft);
    assert_eq!(panel.portions().left, 0.25);
}
