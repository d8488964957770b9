//! Theme measure validation.

use crate::schema::BerthConfig;

use super::helpers::validate_range;

pub(crate) fn validate_measures(errors: &mut Vec<String>, config: &BerthConfig) {
    let m = &config.measures;
    validate_range(errors, "measures.splitter_size", m.splitter_size, 1, 16);
    validate_range(errors, "measures.dock_padding", m.dock_padding, 0, 64);
    validate_range(errors, "measures.min_pane_size", m.min_pane_size, 8, 200);
    validate_range(errors, "measures.caption_height", m.caption_height, 8, 64);
    validate_range(errors, "measures.tab_strip_height", m.tab_strip_height, 8, 64);
    validate_range(errors, "measures.indicator_margin", m.indicator_margin, 0, 64);
    if m.tab_min_width > m.tab_max_width {
        errors.push(format!(
            "measures.tab_min_width = {} exceeds measures.tab_max_width = {}",
            m.tab_min_width, m.tab_max_width
        ));
    }
    if m.pane_indicator_size < 3 {
        errors.push("measures.pane_indicator_size must be at least 3".into());
    }
}
