#![forbid(unsafe_code)]

//! Eight-color palettes and the built-in themes.
//!
//! Built-in palette *p* supplies, at position *i*, its theme's representative
//! of [`BaseHue`] *i*. Custom palettes (rows or columns of a shade grid) use
//! the same type and live in a [`crate::store::PaletteBook`].

use std::fmt;
use std::ops::Index;

use crate::color::Color;
use crate::error::{IndexKind, Result, TintError};
use crate::hue::BaseHue;

/// Colors per palette.
pub const PALETTE_LEN: usize = 8;
/// Number of built-in palettes. Custom palette indices start here.
pub const BUILTIN_COUNT: usize = 8;

/// An ordered set of exactly eight colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Palette([Color; PALETTE_LEN]);

impl Palette {
    #[must_use]
    pub const fn new(colors: [Color; PALETTE_LEN]) -> Self {
        Self(colors)
    }

    const fn from_hex(values: [u32; PALETTE_LEN]) -> Self {
        let mut colors = [Color::BLACK; PALETTE_LEN];
        let mut i = 0;
        while i < PALETTE_LEN {
            colors[i] = Color::hex(values[i]);
            i += 1;
        }
        Self(colors)
    }

    /// Build from a slice that must hold exactly eight colors.
    pub fn from_slice(colors: &[Color]) -> Result<Self> {
        let colors: [Color; PALETTE_LEN] = colors
            .try_into()
            .map_err(|_| TintError::InvalidPaletteLength { len: colors.len() })?;
        Ok(Self(colors))
    }

    /// Parse eight `#RRGGBB` strings.
    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        let parsed = colors
            .iter()
            .map(|s| Color::parse(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_slice(&parsed)
    }

    #[must_use]
    pub const fn colors(&self) -> &[Color; PALETTE_LEN] {
        &self.0
    }

    pub fn get(&self, position: usize) -> Result<Color> {
        self.0
            .get(position)
            .copied()
            .ok_or_else(|| TintError::out_of_range(IndexKind::Position, position, PALETTE_LEN))
    }

    /// Position of the first entry equal to `color`.
    #[must_use]
    pub fn position_of(&self, color: Color) -> Option<usize> {
        self.0.iter().position(|&c| c == color)
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }

    /// Hex strings in order, as stored in gallery records.
    #[must_use]
    pub fn to_hex_vec(&self) -> Vec<String> {
        self.0.iter().map(|c| c.to_hex()).collect()
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, position: usize) -> &Color {
        &self.0[position]
    }
}

impl From<[Color; PALETTE_LEN]> for Palette {
    fn from(colors: [Color; PALETTE_LEN]) -> Self {
        Self(colors)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{color}")?;
        }
        f.write_str("]")
    }
}

/// Names of the built-in palettes, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTheme {
    Classic = 0,
    Pastel = 1,
    Jewel = 2,
    Earth = 3,
    Neon = 4,
    Muted = 5,
    Deep = 6,
    Vivid = 7,
}

impl BuiltinTheme {
    pub const ALL: [Self; BUILTIN_COUNT] = [
        Self::Classic,
        Self::Pastel,
        Self::Jewel,
        Self::Earth,
        Self::Neon,
        Self::Muted,
        Self::Deep,
        Self::Vivid,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Pastel => "Pastel",
            Self::Jewel => "Jewel",
            Self::Earth => "Earth",
            Self::Neon => "Neon",
            Self::Muted => "Muted",
            Self::Deep => "Deep",
            Self::Vivid => "Vivid",
        }
    }

    #[must_use]
    pub fn palette(self) -> &'static Palette {
        &BUILTIN_PALETTES[self.index()]
    }
}

// Columns follow BaseHue order: red, orange, yellow, green, blue, purple, white, black.
// Every entry also appears in its hue's shade table.
static BUILTIN_PALETTES: [Palette; BUILTIN_COUNT] = [
    // Classic
    Palette::from_hex([0xFF0000, 0xFF8000, 0xFFFF00, 0x00FF00, 0x0000FF, 0x800080, 0xFFFFFF, 0x000000]),
    // Pastel
    Palette::from_hex([0xFFB3BA, 0xFFDFBA, 0xFFFFBA, 0xBAFFC9, 0xBAE1FF, 0xD7BAFF, 0xFAF9F6, 0x4A4A4A]),
    // Jewel
    Palette::from_hex([0x9B111E, 0xC8611A, 0xE0B000, 0x046307, 0x0F52BA, 0x5B2C83, 0xF0EAD6, 0x101820]),
    // Earth
    Palette::from_hex([0xA0522D, 0xCC7722, 0xC9A227, 0x556B2F, 0x4682B4, 0x6B4E71, 0xEDE6D6, 0x2F2A25]),
    // Neon
    Palette::from_hex([0xFF073A, 0xFF5F1F, 0xE7EE4F, 0x39FF14, 0x1F51FF, 0xBC13FE, 0xF8F8FF, 0x0D0D0D]),
    // Muted
    Palette::from_hex([0xB85C5C, 0xC98B5E, 0xD6C57A, 0x7FA37F, 0x6F8FAF, 0x8E7AA8, 0xE8E8E8, 0x3A3A3A]),
    // Deep
    Palette::from_hex([0x5C0A0A, 0x7A3A00, 0x7A6A00, 0x0B3D0B, 0x0A1F5C, 0x3B0A45, 0xD9D9D9, 0x050505]),
    // Vivid
    Palette::from_hex([0xE53935, 0xFB8C00, 0xFDD835, 0x43A047, 0x1E88E5, 0x8E24AA, 0xFAFAFA, 0x212121]),
];

/// Built-in palette `index` (0..8).
pub fn builtin(index: usize) -> Result<&'static Palette> {
    BUILTIN_PALETTES
        .get(index)
        .ok_or_else(|| TintError::out_of_range(IndexKind::Palette, index, BUILTIN_COUNT))
}

/// All built-in palettes in index order.
#[must_use]
pub fn builtins() -> &'static [Palette; BUILTIN_COUNT] {
    &BUILTIN_PALETTES
}

/// The representative of `hue` in built-in palette `theme`.
#[must_use]
pub fn representative(theme: BuiltinTheme, hue: BaseHue) -> Color {
    BUILTIN_PALETTES[theme.index()][hue.index()]
}
