//! Indicator and outline geometry.

use berth_common::{DockStyle, Point, Rect, Size};

use crate::geometry::centered_in;

/// Bounds of a panel-edge indicator of side `size` placed `margin` inside
/// `area`. Fill is centred in `document`.
pub fn panel_indicator_bounds(style: DockStyle, area: Rect, document: Rect, size: f64, margin: f64) -> Rect {
    let mid_y = area.y + ((area.height - size) / 2.0).floor();
    let mid_x = area.x + ((area.width - size) / 2.0).floor();
    match style {
        DockStyle::Left => Rect::new(area.x + margin, mid_y, size, size),
        DockStyle::Right => Rect::new(area.right() - size - margin, mid_y, size, size),
        DockStyle::Top => Rect::new(mid_x, area.y + margin, size, size),
        DockStyle::Bottom => Rect::new(mid_x, area.bottom() - size - margin, size, size),
        DockStyle::Fill => centered_in(document, size, size),
        DockStyle::None => Rect::default(),
    }
}

/// Sub-target of a diamond under `point`. The diamond is a 3x3 grid with
/// hotspots at the top, left, centre, right and bottom cells.
pub fn diamond_hit(diamond: Rect, point: Point) -> DockStyle {
    if !diamond.contains(point) || diamond.width <= 0.0 || diamond.height <= 0.0 {
        return DockStyle::None;
    }
    let col = ((point.x - diamond.x) * 3.0 / diamond.width).floor() as i32;
    let row = ((point.y - diamond.y) * 3.0 / diamond.height).floor() as i32;
    match (col, row) {
        (1, 0) => DockStyle::Top,
        (0, 1) => DockStyle::Left,
        (1, 1) => DockStyle::Fill,
        (2, 1) => DockStyle::Right,
        (1, 2) => DockStyle::Bottom,
        _ => DockStyle::None,
    }
}

/// Outline of a pane drop: the half of the pane on the `style` side, or
/// the whole pane for Fill.
pub fn pane_outline(pane: Rect, style: DockStyle) -> Rect {
    let half_w = (pane.width / 2.0).floor();
    let half_h = (pane.height / 2.0).floor();
    match style {
        DockStyle::Left => Rect::new(pane.x, pane.y, half_w, pane.height),
        DockStyle::Right => Rect::new(pane.right() - half_w, pane.y, half_w, pane.height),
        DockStyle::Top => Rect::new(pane.x, pane.y, pane.width, half_h),
        DockStyle::Bottom => Rect::new(pane.x, pane.bottom() - half_h, pane.width, half_h),
        DockStyle::Fill | DockStyle::None => pane,
    }
}

/// Outline of a panel drop: an edge strip `size` deep inside `area`, or
/// `document` for Fill.
pub fn panel_outline(style: DockStyle, area: Rect, document: Rect, size: f64) -> Rect {
    match style {
        DockStyle::Left => Rect::new(area.x, area.y, size.min(area.width), area.height),
        DockStyle::Right => {
            let w = size.min(area.width);
            Rect::new(area.right() - w, area.y, w, area.height)
        }
        DockStyle::Top => Rect::new(area.x, area.y, area.width, size.min(area.height)),
        DockStyle::Bottom => {
            let h = size.min(area.height);
            Rect::new(area.x, area.bottom() - h, area.width, h)
        }
        DockStyle::Fill => document,
        DockStyle::None => Rect::default(),
    }
}

/// Float outline at the start of a drag. It hangs from the pane's
/// bottom-left, or its top-left for documents with tabs on top, and is
/// pushed right when the pointer lies past its right edge.
pub fn initial_float_bounds(pane: Rect, size: Size, top_anchored: bool, pointer: Point, splitter: f64) -> Rect {
    let mut x = pane.x;
    let y = if top_anchored { pane.y } else { pane.bottom() - size.height };
    if pointer.x > x + size.width {
        x += pointer.x - (x + size.width) + splitter;
    }
    Rect::new(x, y, size.width, size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diamond_grid_hotspots() {
        let d = Rect::new(0.0, 0.0, 90.0, 90.0);
        assert_eq!(diamond_hit(d, Point::new(45.0, 10.0)), DockStyle::Top);
        assert_eq!(diamond_hit(d, Point::new(10.0, 45.0)), DockStyle::Left);
        assert_eq!(diamond_hit(d, Point::new(45.0, 45.0)), DockStyle::Fill);
        assert_eq!(diamond_hit(d, Point::new(80.0, 45.0)), DockStyle::Right);
        assert_eq!(diamond_hit(d, Point::new(45.0, 80.0)), DockStyle::Bottom);
        assert_eq!(diamond_hit(d, Point::new(5.0, 5.0)), DockStyle::None);
        assert_eq!(diamond_hit(d, Point::new(95.0, 45.0)), DockStyle::None);
    }

    #[test]
    fn panel_indicators_sit_inside_margin() {
        let area = Rect::new(0.0, 0.0, 1000.0, 600.0);
        let doc = Rect::new(200.0, 0.0, 600.0, 400.0);
        assert_eq!(
            panel_indicator_bounds(DockStyle::Left, area, doc, 32.0, 10.0),
            Rect::new(10.0, 284.0, 32.0, 32.0)
        );
        assert_eq!(
            panel_indicator_bounds(DockStyle::Bottom, area, doc, 32.0, 10.0),
            Rect::new(484.0, 558.0, 32.0, 32.0)
        );
        assert_eq!(
            panel_indicator_bounds(DockStyle::Fill, area, doc, 32.0, 10.0),
            Rect::new(484.0, 184.0, 32.0, 32.0)
        );
    }

    #[test]
    fn float_outline_anchoring() {
        let pane = Rect::new(100.0, 100.0, 200.0, 400.0);
        let size = Size::new(300.0, 300.0);
        let r = initial_float_bounds(pane, size, false, Point::new(150.0, 120.0), 4.0);
        assert_eq!(r, Rect::new(100.0, 200.0, 300.0, 300.0));
        let r = initial_float_bounds(pane, size, true, Point::new(450.0, 120.0), 4.0);
        assert_eq!(r, Rect::new(154.0, 100.0, 300.0, 300.0));
    }
}
