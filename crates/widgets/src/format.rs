/// Format a segment value compactly: integers without a fraction, others
/// with at most two decimals and no trailing zeros (e.g. `"2"`, `"2.5"`).
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "?".to_string();
    }
    let raw = format!("{value:.2}");
    let trimmed = raw.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" { "0".to_string() } else { trimmed.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_integer() {
        assert_eq!(format_value(42.0), "42");
    }

    #[test]
    fn format_fraction() {
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(1.0 / 3.0), "0.33");
    }

    #[test]
    fn format_non_finite() {
        assert_eq!(format_value(f64::NAN), "?");
    }
}
