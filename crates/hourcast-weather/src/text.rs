//! Fixed-width label helpers.
//!
//! Widths count Unicode scalar values, so `"█"` is one column wide.

/// Pad on the left to exactly `width` columns, truncating from the end when
/// the text is longer.
pub fn right_justify(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.chars().take(width).collect()
    } else {
        format!("{}{}", " ".repeat(width - len), text)
    }
}

/// Pad on the right to exactly `width` columns, truncating from the end when
/// the text is longer.
pub fn left_justify(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.chars().take(width).collect()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Round to the nearest integer with halves going up (2.5 -> 3, -2.5 -> -2).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
