use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading decimal number of a free-form weight field
    /// - Matches: "2.5", " 3kg", "-1", ".5", "1e3"
    /// - No match: "kg", "", "abc2"
    pub static ref LEADING_NUMBER_REGEX: Regex =
        Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap();
}

/// Parse the leading number of `input`, ignoring any trailing text
pub fn parse_leading_number(input: &str) -> Option<f64> {
    LEADING_NUMBER_REGEX
        .find(input)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
}

/// Weights are non-negative and finite; anything else becomes 0
pub fn sanitize_weight(weight: Option<f64>) -> f64 {
    match weight {
        Some(w) if w.is_finite() && w > 0.0 => w,
        _ => 0.0,
    }
}
