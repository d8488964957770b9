//! Shared range-validation helpers used by all section validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not strictly positive.
pub(crate) fn validate_positive_f64(errors: &mut Vec<String>, name: &str, value: f64) {
    if value <= 0.0 || !value.is_finite() {
        errors.push(format!("{name} = {value} must be a positive number"));
    }
}
