//! Shared value-classification helpers used by the profiler.
//!
//! Both type inference and statistics go through [`is_missing`] and
//! [`try_parse_float`], so a column that infers as numeric always yields
//! the same set of parsed values when its statistics are computed.

// =============================================================================
// Missing Value Utilities
// =============================================================================

/// Tokens (compared after trimming and lower-casing) that mark a cell as missing.
pub const MISSING_TOKENS: [&str; 5] = ["na", "n/a", "null", "none", "nan"];

/// Check if a raw cell value is missing.
///
/// `None` is the absent-marker (no value was supplied for the cell). Any
/// other value is missing when, trimmed and lower-cased, it is empty or one
/// of [`MISSING_TOKENS`].
///
/// # Example
///
/// ```rust
/// use csv_profiler::utils::is_missing;
///
/// assert!(is_missing(None));
/// assert!(is_missing(Some("  N/A ")));
/// assert!(!is_missing(Some("0")));
/// ```
pub fn is_missing(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return true;
    };

    let normalized = value.trim().to_lowercase();
    normalized.is_empty() || MISSING_TOKENS.contains(&normalized.as_str())
}

/// Inverse of [`is_missing`], returning the present value.
#[inline]
pub fn present_value(value: Option<&str>) -> Option<&str> {
    value.filter(|&v| !is_missing(Some(v)))
}

// =============================================================================
// Numeric Parsing Utilities
// =============================================================================

/// Try to parse a cell as a floating point number.
///
/// Accepts whatever [`f64::from_str`](std::str::FromStr) accepts (integers,
/// decimals, exponents, a leading sign, `inf`/`infinity`) after trimming
/// surrounding whitespace. Failure is not an error; it just means the value
/// is not numeric.
pub fn try_parse_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Round to a fixed number of decimal places.
///
/// Rounds the exact binary value of `value`, so `20.05` (stored slightly
/// above the half-way point) becomes `20.1`, while a true tie such as `1.25`
/// goes to the even digit.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Percentage of `part` in `total`, rounded to one decimal. Zero when `total` is zero.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round_to(part as f64 / total as f64 * 100.0, 1)
    }
}

/// Format an integer with `,` thousands separators.
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
