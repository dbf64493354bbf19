//! Color tokens as authored in the CMS, reduced to an RGB triple.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Teal used whenever a token cannot be read.
    pub const FALLBACK: Rgb = Rgb { r: 0, g: 149, b: 157 };

    #[inline] pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Format as CSS with an alpha channel: rgba(r,g,b,a)
    pub fn to_rgba_string(&self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

static HEX_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([[:xdigit:]]{3}|[[:xdigit:]]{6})$").expect("hex color pattern")
});

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+").expect("digit run pattern")
});

/// Parse a hex (`#rgb`, `#rrggbb`, `#` optional) or functional (`rgb(...)`, `rgba(...)`)
/// color token. Anything else yields [`Rgb::FALLBACK`].
pub fn parse_color(token: &str) -> Rgb {
    let token = token.trim();
    if token.is_empty() { return Rgb::FALLBACK }

    if let Some(caps) = HEX_TOKEN.captures(token) {
        let digits = &caps[1];
        let digits = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect::<String>()
        } else {
            digits.to_string()
        };
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
        return Rgb::new(channel(0), channel(2), channel(4));
    }

    let mut runs = DIGIT_RUN.find_iter(token)
        .map(|m| m.as_str().parse::<u32>().map_or(u8::MAX, |v| v.min(255) as u8));

    match (runs.next(), runs.next(), runs.next()) {
        (Some(r), Some(g), Some(b)) => Rgb::new(r, g, b),
        _ => Rgb::FALLBACK,
    }
}
