use std::sync::LazyLock;

use regex::Regex;

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("leading float pattern")
});

/// Read the longest numeric prefix of an attribute value ("50%" -> 50).
/// Returns `None` when the value does not start with a number.
pub(crate) fn parse_float(value: &str) -> Option<f64> {
    LEADING_FLOAT.captures(value)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Read a boolean attribute: only the literal `true` (any case, surrounding spaces ignored) is set.
pub(crate) fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
