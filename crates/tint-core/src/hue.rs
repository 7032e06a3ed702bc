#![forbid(unsafe_code)]

//! The eight base hue families.

use std::fmt;

use crate::error::{IndexKind, Result, TintError};

/// Number of base hues.
pub const HUE_COUNT: usize = 8;

/// A canonical color family. The discriminant is the hue index used by
/// palettes (position *i* of a built-in palette represents hue *i*).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BaseHue {
    Red = 0,
    Orange = 1,
    Yellow = 2,
    Green = 3,
    Blue = 4,
    Purple = 5,
    White = 6,
    Black = 7,
}

impl BaseHue {
    /// All hues in index order.
    pub const ALL: [Self; HUE_COUNT] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::White,
        Self::Black,
    ];

    /// Look up a hue by index, failing for anything outside `0..8`.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| TintError::out_of_range(IndexKind::Hue, index, HUE_COUNT))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for BaseHue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
