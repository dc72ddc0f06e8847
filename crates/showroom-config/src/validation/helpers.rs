//! Shared validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is strictly less than `bound`.
pub(crate) fn validate_below(
    errors: &mut Vec<String>,
    name: &str,
    value: u64,
    bound_name: &str,
    bound: u64,
) {
    if value >= bound {
        errors.push(format!(
            "{name} = {value} must be less than {bound_name} = {bound}"
        ));
    }
}
