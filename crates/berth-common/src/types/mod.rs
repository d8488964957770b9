mod dock;
mod geometry;

pub use dock::*;
pub use geometry::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_emptiness() {
        let r = Rect::new(10.0, 20.0, 300.0, 200.0);
        assert_eq!(r.right(), 310.0);
        assert_eq!(r.bottom(), 220.0);
        assert!(!r.is_empty());
        assert!(Rect::default().is_empty());
        assert!(Rect::new(0.0, 0.0, 10.0, 0.0).is_empty());
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(99.5, 49.5)));
        assert!(!r.contains(Point::new(100.0, 10.0)));
        assert!(!r.contains(Point::new(10.0, 50.0)));
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 25.0, 100.0, 100.0);
        assert_eq!(a.intersect(&b), Rect::new(50.0, 25.0, 50.0, 75.0));

        let c = Rect::new(200.0, 200.0, 10.0, 10.0);
        assert!(a.intersect(&c).is_empty());
    }

    #[test]
    fn rect_deflate_never_goes_negative() {
        let r = Rect::new(0.0, 0.0, 20.0, 20.0);
        let d = r.deflate(5.0, 5.0, 30.0, 5.0);
        assert_eq!(d.x, 5.0);
        assert_eq!(d.width, 0.0);
        assert_eq!(d.height, 10.0);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn auto_hide_toggles_both_ways() {
        assert_eq!(
            DockState::DockLeft.toggle_auto_hide(),
            DockState::DockLeftAutoHide
        );
        assert_eq!(
            DockState::DockBottomAutoHide.toggle_auto_hide(),
            DockState::DockBottom
        );
        assert_eq!(DockState::Document.toggle_auto_hide(), DockState::Document);
        assert_eq!(DockState::Float.toggle_auto_hide(), DockState::Float);
    }

    #[test]
    fn dock_window_hosting_state() {
        assert_eq!(
            DockState::DockRightAutoHide.dock_window(),
            Some(DockState::DockRight)
        );
        assert_eq!(DockState::Document.dock_window(), Some(DockState::Document));
        assert_eq!(DockState::Float.dock_window(), None);
        assert_eq!(DockState::Hidden.dock_window(), None);
    }

    #[test]
    fn dock_state_predicates() {
        assert!(DockState::DockTopAutoHide.is_auto_hide());
        assert!(!DockState::DockTop.is_auto_hide());
        assert!(DockState::Document.is_dock_window_state());
        assert!(!DockState::DockTopAutoHide.is_dock_window_state());
        assert!(DockState::Float.is_float());
        assert!(!DockState::Unknown.is_showable());
        assert!(!DockState::Hidden.is_showable());
        assert!(DockState::DockLeft.is_showable());
    }

    #[test]
    fn alignment_inversion() {
        assert_eq!(DockAlignment::Left.inverted(), DockAlignment::Right);
        assert_eq!(DockAlignment::Top.inverted(), DockAlignment::Bottom);
        assert!(DockAlignment::Right.is_horizontal());
        assert!(!DockAlignment::Bottom.is_horizontal());
    }

    #[test]
    fn dock_style_mappings() {
        assert_eq!(DockStyle::Fill.dock_state(), Some(DockState::Document));
        assert_eq!(DockStyle::Left.dock_state(), Some(DockState::DockLeft));
        assert_eq!(DockStyle::None.dock_state(), None);
        assert_eq!(DockStyle::Top.alignment(), Some(DockAlignment::Top));
        assert_eq!(DockStyle::Fill.alignment(), None);
    }

    #[test]
    fn document_style_serializes_kebab_case() {
        let json = serde_json::to_string(&DocumentStyle::DockingSdi).unwrap();
        assert_eq!(json, "\"docking-sdi\"");
        let back: DocumentStyle = serde_json::from_str("\"system-mdi\"").unwrap();
        assert_eq!(back, DocumentStyle::SystemMdi);
    }
}
