#![forbid(unsafe_code)]

//! Opaque RGB colors and WCAG luminance.
//!
//! A [`Color`] is three 8-bit channels with no alpha. The external form is
//! `#RRGGBB`; parsing accepts either hex case and formatting always emits
//! upper-case, so two renderings of the same color are byte-identical.
//!
//! # Example
//!
//! ```
//! use tint_core::color::{Color, luminance};
//!
//! let blue: Color = "#0000ff".parse().unwrap();
//! assert_eq!(blue.to_string(), "#0000FF");
//! assert!((luminance("#FFFFFF").unwrap() - 1.0).abs() < 1e-12);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TintError};

/// An opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `0xRRGGBB` literal. Bits above 24 are ignored.
    #[must_use]
    pub const fn hex(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Parse `#RRGGBB`. Anything else is [`TintError::InvalidColorFormat`].
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| TintError::invalid_color(input))?;
        let value = u32::from_str_radix(digits, 16).map_err(|_| TintError::invalid_color(input))?;
        Ok(Self::hex(value))
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        self.r
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        self.g
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// The packed `0xRRGGBB` value.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// The canonical `#RRGGBB` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// WCAG 2.x relative luminance in `[0, 1]`.
    #[must_use]
    pub fn luminance(self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// sRGB channel to linear light. The 0.03928 knee is the WCAG 2.x value.
#[inline]
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a `#RRGGBB` string.
pub fn luminance(input: &str) -> Result<f64> {
    Ok(Color::parse(input)?.luminance())
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (la, lb) = (a.luminance(), b.luminance());
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// The candidate with the highest contrast against `background`.
///
/// Ties keep the earlier candidate. Returns `None` for an empty slice.
#[must_use]
pub fn best_text_color(background: Color, candidates: &[Color]) -> Option<Color> {
    let mut best: Option<(Color, f64)> = None;
    for &candidate in candidates {
        let ratio = contrast_ratio(background, candidate);
        match best {
            Some((_, current)) if current >= ratio => {}
            _ => best = Some((candidate, ratio)),
        }
    }
    best.map(|(color, _)| color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_both_cases() {
        assert_eq!(Color::parse("#0000ff").unwrap(), Color::rgb(0, 0, 255));
        assert_eq!(Color::parse("#ABCDEF").unwrap(), Color::hex(0xABCDEF));
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "#", "0000FF", "#0000F", "#0000FFF", "#GG0000", "#1", " #0000FF", "#00 0FF"] {
            assert!(
                matches!(Color::parse(bad), Err(TintError::InvalidColorFormat { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_rejects_signed_digits() {
        // from_str_radix would accept a leading '+'; the digit filter must not.
        assert!(Color::parse("#+00000").is_err());
    }

    #[test]
    fn display_is_uppercase_hex() {
        assert_eq!(Color::rgb(10, 171, 255).to_string(), "#0AABFF");
        assert_eq!(Color::hex(0x0000FF).to_hex(), "#0000FF");
    }

    #[test]
    fn hex_round_trips_through_u32() {
        let c = Color::hex(0x123456);
        assert_eq!(c.to_u32(), 0x123456);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(Color::BLACK.luminance(), 0.0);
        assert!((Color::WHITE.luminance() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn luminance_primary_weights() {
        assert!((luminance("#FF0000").unwrap() - 0.2126).abs() < 1e-12);
        assert!((luminance("#00FF00").unwrap() - 0.7152).abs() < 1e-12);
        assert!((luminance("#0000FF").unwrap() - 0.0722).abs() < 1e-12);
    }

    #[test]
    fn luminance_linear_segment_below_knee() {
        // 10/255 = 0.0392 sits just below the 0.03928 knee.
        let expected = (10.0 / 255.0) / 12.92;
        assert!((Color::rgb(10, 10, 10).luminance() - expected).abs() < 1e-12);
    }

    #[test]
    fn luminance_rejects_bad_input() {
        assert!(matches!(
            luminance("red"),
            Err(TintError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn contrast_ratio_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
        assert!((contrast_ratio(Color::WHITE, Color::BLACK) - ratio).abs() < 1e-12);
    }

    #[test]
    fn best_text_color_picks_legible_candidate() {
        let candidates = [Color::WHITE, Color::BLACK];
        assert_eq!(
            best_text_color(Color::hex(0xFFFF00), &candidates),
            Some(Color::BLACK)
        );
        assert_eq!(
            best_text_color(Color::hex(0x0000FF), &candidates),
            Some(Color::WHITE)
        );
        assert_eq!(best_text_color(Color::WHITE, &[]), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::hex(0x1E88E5)).unwrap();
        assert_eq!(json, "\"#1E88E5\"");
        let back: Color = serde_json::from_str("\"#1e88e5\"").unwrap();
        assert_eq!(back, Color::hex(0x1E88E5));
        assert!(serde_json::from_str::<Color>("\"#1e88\"").is_err());
    }
}
