//! Proportion math: portions to pixels, opposing edge sizing, nested splits.

use berth_common::{DockAlignment, Rect};

/// Convert a stored portion into pixels. Values of 1 or more are absolute.
pub fn portion_to_size(portion: f64, available: f64) -> f64 {
    if portion >= 1.0 {
        portion.floor()
    } else {
        (available * portion).floor()
    }
}

/// Sizes of two opposing dock windows sharing `available` pixels.
///
/// Each side is at least `min`. When the pair leaves less than `min` for the
/// middle, the overflow is taken from both sides evenly.
pub fn opposing_edge_sizes(first: f64, second: f64, available: f64, min: f64) -> (f64, f64) {
    let mut a = portion_to_size(first, available).max(min);
    let mut b = portion_to_size(second, available).max(min);
    let limit = available - min;
    if a + b > limit {
        let half = ((a + b - limit) / 2.0).floor();
        a -= half;
        b -= half;
    }
    (a, b)
}

/// Result of splitting a previous pane's bounds for a dependent pane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NestedSplit {
    pub this: Rect,
    pub previous: Rect,
    pub splitter: Rect,
}

/// Split `rect` so the dependent pane takes `proportion` of it on the
/// `alignment` side, separated by a splitter of `splitter` pixels.
pub fn split_nested(rect: Rect, alignment: DockAlignment, proportion: f64, splitter: f64) -> NestedSplit {
    let half = (splitter / 2.0).floor();
    let mut this = rect;
    let mut previous = rect;
    let mut bar = rect;

    match alignment {
        DockAlignment::Left => {
            this.width = portion_to_size(proportion, rect.width) - half;
            bar.x = this.x + this.width;
            bar.width = splitter;
            previous.x = bar.x + bar.width;
            previous.width = rect.width - this.width - bar.width;
        }
        DockAlignment::Right => {
            previous.width = rect.width - portion_to_size(proportion, rect.width) - half;
            bar.x = previous.x + previous.width;
            bar.width = splitter;
            this.x = bar.x + bar.width;
            this.width = rect.width - previous.width - bar.width;
        }
        DockAlignment::Top => {
            this.height = portion_to_size(proportion, rect.height) - half;
            bar.y = this.y + this.height;
            bar.height = splitter;
            previous.y = bar.y + bar.height;
            previous.height = rect.height - this.height - bar.height;
        }
        DockAlignment::Bottom => {
            previous.height = rect.height - portion_to_size(proportion, rect.height) - half;
            bar.y = previous.y + previous.height;
            bar.height = splitter;
            this.y = bar.y + bar.height;
            this.height = rect.height - previous.height - bar.height;
        }
    }

    NestedSplit {
        this: this.intersect(&rect),
        previous: previous.intersect(&rect),
        splitter: bar.intersect(&rect),
    }
}

/// New proportion after dragging a pane splitter by `offset` pixels.
///
/// `logical` is the rectangle that was split between the pane and its
/// previous pane. Returns `None` when that rectangle is degenerate.
pub fn moved_proportion(
    proportion: f64,
    alignment: DockAlignment,
    offset: f64,
    logical: Rect,
) -> Option<f64> {
    if logical.width <= 0.0 || logical.height <= 0.0 {
        return None;
    }
    let next = match alignment {
        DockAlignment::Left => proportion + offset / logical.width,
        DockAlignment::Right => proportion - offset / logical.width,
        DockAlignment::Top => proportion + offset / logical.height,
        DockAlignment::Bottom => proportion - offset / logical.height,
    };
    Some(next)
}

/// A `width` x `height` rectangle centred in `bounds`.
pub fn centered_in(bounds: Rect, width: f64, height: f64) -> Rect {
    Rect::new(
        bounds.x + ((bounds.width - width) / 2.0).floor(),
        bounds.y + ((bounds.height - height) / 2.0).floor(),
        width,
        height,
    )
}
