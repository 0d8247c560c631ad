//! Colour parsing and WCAG 2.x contrast maths

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEX_PATTERN: Regex =
        Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
    static ref RGB_PATTERN: Regex = Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*[\d.]+\s*)?\)$"
    )
    .unwrap();
}

/// Font size in px from which text counts as "large" (18pt)
pub const LARGE_TEXT_MIN_PX: f64 = 24.0;

/// CSS basic named colours
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("lime", Rgb::new(0, 255, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("aqua", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("fuchsia", Rgb::new(255, 0, 255)),
    ("silver", Rgb::new(192, 192, 192)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
    ("maroon", Rgb::new(128, 0, 0)),
    ("olive", Rgb::new(128, 128, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("teal", Rgb::new(0, 128, 128)),
    ("navy", Rgb::new(0, 0, 128)),
    ("orange", Rgb::new(255, 165, 0)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance from gamma-corrected sRGB channels
    pub fn relative_luminance(&self) -> f64 {
        fn channel(value: u8) -> f64 {
            let c = f64::from(value) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }
}

/// Parse `#rgb`, `#rrggbb` (hash optional), `rgb()`/`rgba()` or a named colour.
///
/// Alpha is ignored. Returns `None` for anything else (gradients, patterns).
pub fn parse_color(input: &str) -> Option<Rgb> {
    let value = input.trim().to_lowercase();

    if let Some(caps) = HEX_PATTERN.captures(&value) {
        let hex = caps.get(1)?.as_str();
        let expanded: String = if hex.len() == 3 {
            hex.chars().flat_map(|c| [c, c]).collect()
        } else {
            hex.to_string()
        };
        let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
        let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
        let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
        return Some(Rgb::new(r, g, b));
    }

    if let Some(caps) = RGB_PATTERN.captures(&value) {
        let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
        return Some(Rgb::new(channel(1)?, channel(2)?, channel(3)?));
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, rgb)| *rgb)
}

/// WCAG contrast ratio, always >= 1.0
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastLevel {
    AA,
    AAA,
}

impl ContrastLevel {
    pub fn required_ratio(&self, font_size_px: f64) -> f64 {
        let large = is_large_text(font_size_px);
        match (self, large) {
            (ContrastLevel::AA, false) => 4.5,
            (ContrastLevel::AA, true) => 3.0,
            (ContrastLevel::AAA, false) => 7.0,
            (ContrastLevel::AAA, true) => 4.5,
        }
    }

    pub fn is_met(&self, ratio: f64, font_size_px: f64) -> bool {
        ratio >= self.required_ratio(font_size_px)
    }
}

pub fn is_large_text(font_size_px: f64) -> bool {
    font_size_px >= LARGE_TEXT_MIN_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_hex_forms() {
        assert_eq!(parse_color("#FFFFFF"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(parse_color("00ff00"), Some(Rgb::new(0, 255, 0)));
        assert_eq!(parse_color("#f0a"), Some(Rgb::new(255, 0, 170)));
    }

    #[test]
    fn test_parses_rgb_and_named() {
        assert_eq!(parse_color("rgb(10, 20, 30)"), Some(Rgb::new(10, 20, 30)));
        assert_eq!(
            parse_color("rgba(255,0,0,0.2)"),
            Some(Rgb::new(255, 0, 0))
        );
        assert_eq!(parse_color("White"), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_rejects_unknown_colors() {
        assert_eq!(parse_color("linear-gradient(red, blue)"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("rgb(300, 0, 0)"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_black_on_white_is_21_to_1() {
        let ratio = contrast_ratio(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let a = Rgb::new(0x77, 0x77, 0x77);
        let b = Rgb::new(255, 255, 255);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        // #777777 on white is ~4.48, just below AA for normal text
        let ratio = contrast_ratio(a, b);
        assert!(!ContrastLevel::AA.is_met(ratio, 16.0));
        assert!(ContrastLevel::AA.is_met(ratio, 32.0));
    }

    #[test]
    fn test_same_color_is_1_to_1() {
        let white = Rgb::new(255, 255, 255);
        assert!((contrast_ratio(white, white) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_required_ratios() {
        assert_eq!(ContrastLevel::AA.required_ratio(20.0), 4.5);
        assert_eq!(ContrastLevel::AA.required_ratio(24.0), 3.0);
        assert_eq!(ContrastLevel::AAA.required_ratio(12.0), 7.0);
        assert_eq!(ContrastLevel::AAA.required_ratio(48.0), 4.5);
    }
}
