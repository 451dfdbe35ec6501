//! Unicode formatting utilities
use std::ops::Range;

use crate::value::Value;

/// Format a floating point number as a string
///
/// # Parameters
/// - `n`: The number to format
/// - `fixed_range`: An optional range of values that will not be formatted in scientific notation
/// - `precision`: The number of decimal places to include
pub fn float<T: Value>(n: T, fixed_range: Option<Range<T>>, precision: usize) -> String {
    match fixed_range {
        Some(range) if range.contains(&n) => format!("{n:.precision$}"),
        _ => format!("{n:.precision$e}"),
    }
}

/// Convert a string into a subscript string, ignoring characters with no subscript form
///
/// ```
/// # use chebapprox::display::unicode::subscript;
/// assert_eq!(subscript("12"), "₁₂");
/// assert_eq!(subscript("s"), "ₛ");
/// ```
pub fn subscript(s: &str) -> String {
    s.chars().filter_map(to_subscript).collect()
}

fn to_subscript(c: char) -> Option<char> {
    match c {
        '0'..='9' => char::from_u32('₀' as u32 + (c as u32 - '0' as u32)),
        '+' => Some('₊'),
        '-' => Some('₋'),
        'j' => Some('ⱼ'),
        'k' => Some('ₖ'),
        'n' => Some('ₙ'),
        's' => Some('ₛ'),
        'x' => Some('ₓ'),
        _ => None,
    }
}
