/// Render a number the way the backend's JSON shows it: `40`, `33.5`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// One decimal place, as used by the summary cards.
#[must_use]
pub fn format_one_decimal(value: f64) -> String {
    format!("{value:.1}")
}
