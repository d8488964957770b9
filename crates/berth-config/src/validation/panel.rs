//! Panel portion and float window validation.

use crate::schema::BerthConfig;

use super::helpers::{validate_positive_f64, validate_range};

/// Portions must be positive; opposing fractional portions must fit together.
pub(crate) fn validate_panel(errors: &mut Vec<String>, config: &BerthConfig) {
    let panel = &config.panel;
    validate_positive_f64(errors, "panel.dock_left_portion", panel.dock_left_portion);
    validate_positive_f64(errors, "panel.dock_right_portion", panel.dock_right_portion);
    validate_positive_f64(errors, "panel.dock_top_portion", panel.dock_top_portion);
    validate_positive_f64(errors, "panel.dock_bottom_portion", panel.dock_bottom_portion);

    check_pair(
        errors,
        "panel.dock_left_portion + panel.dock_right_portion",
        panel.dock_left_portion,
        panel.dock_right_portion,
    );
    check_pair(
        errors,
        "panel.dock_top_portion + panel.dock_bottom_portion",
        panel.dock_top_portion,
        panel.dock_bottom_portion,
    );

    validate_range(
        errors,
        "panel.default_float_window_width",
        panel.default_float_window_width,
        50,
        4000,
    );
    validate_range(
        errors,
        "panel.default_float_window_height",
        panel.default_float_window_height,
        50,
        4000,
    );
}

fn check_pair(errors: &mut Vec<String>, name: &str, a: f64, b: f64) {
    if a < 1.0 && b < 1.0 && a + b > 1.0 {
        errors.push(format!("{name} = {} exceeds 1", a + b));
    }
}
