#![forbid(unsafe_code)]

//! Error taxonomy for color and palette lookups.
//!
//! Structural errors ([`TintError::InvalidColorFormat`],
//! [`TintError::IndexOutOfRange`], [`TintError::InvalidPaletteLength`]) mean a
//! caller violated a precondition, usually by feeding in data from a corrupt
//! persisted record. [`TintError::ColorNotInRamp`] and
//! [`TintError::HueResolutionAmbiguous`] are expected conditions with a
//! documented fallback at the call site.

use thiserror::Error;

use crate::color::Color;
use crate::hue::BaseHue;

/// Result alias for tint-core operations.
pub type Result<T> = std::result::Result<T, TintError>;

/// Which indexed collection an out-of-range index was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// A palette index (built-in or custom).
    Palette,
    /// A base hue index.
    Hue,
    /// A position within an 8-color palette.
    Position,
    /// A row of a shade grid.
    Row,
    /// A column of a shade grid.
    Column,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Palette => "palette",
            Self::Hue => "hue",
            Self::Position => "position",
            Self::Row => "row",
            Self::Column => "column",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TintError {
    #[error("invalid color format: {input:?} (expected #RRGGBB)")]
    InvalidColorFormat { input: String },

    #[error("color {color} not found in the {hue} shade ramp")]
    ColorNotInRamp { color: Color, hue: BaseHue },

    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },

    /// Advisory: no shade ramp contains the color, so the caller falls back
    /// to `fallback`. Log it, never show it.
    #[error("no shade ramp contains {color}; falling back to {fallback}")]
    HueResolutionAmbiguous { color: Color, fallback: BaseHue },

    #[error("palette must have exactly 8 colors, got {len}")]
    InvalidPaletteLength { len: usize },
}

impl TintError {
    #[must_use]
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }

    #[must_use]
    pub fn out_of_range(kind: IndexKind, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { kind, index, len }
    }

    /// `true` for conditions with a defined fallback that must not reach the user.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ColorNotInRamp { .. } | Self::HueResolutionAmbiguous { .. }
        )
    }
}
