#![forbid(unsafe_code)]

//! Gallery records: saving and re-deriving a target's color.
//!
//! A saved image keeps, per target, the color it showed and the palette that
//! color came from. Restoring prefers an index lookup: if the color is still
//! in the palette, the target goes back to palette mode on that palette
//! (found in the book, or appended again when it is gone). A color that is
//! not in its palette can only have come from the shade grid, so it comes
//! back as a shade override.
//!
//! ```
//! use tint_core::{Color, PaletteBook, builtin};
//! use tint_session::restore::{Restoration, restore_target};
//!
//! let book = PaletteBook::new();
//! let classic = *builtin(0).unwrap();
//! assert_eq!(
//!     restore_target(&book, &classic, Color::hex(0x0000FF)),
//!     Restoration::Indexed { palette_index: 0, position: 4 },
//! );
//! ```

use serde::{Deserialize, Serialize};
use tint_core::{Color, Palette, PaletteBook};

use crate::error::Result;
use crate::mode::ColorTarget;

/// The persisted form. Field names match the gallery's JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryColors {
    pub background_color: String,
    pub text_color: String,
    pub background_palette: Vec<String>,
    pub text_palette: Vec<String>,
}

/// One target's saved color, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedColor {
    pub palette: Palette,
    pub color: Color,
}

impl GalleryColors {
    #[must_use]
    pub fn new(background: SavedColor, text: SavedColor) -> Self {
        Self {
            background_color: background.color.to_hex(),
            text_color: text.color.to_hex(),
            background_palette: background.palette.to_hex_vec(),
            text_palette: text.palette.to_hex_vec(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse one target's entry. Fails on bad hex or a palette that is not
    /// eight colors long.
    pub fn saved(&self, target: ColorTarget) -> tint_core::Result<SavedColor> {
        let (color, palette) = match target {
            ColorTarget::Background => (&self.background_color, &self.background_palette),
            ColorTarget::Text => (&self.text_color, &self.text_palette),
        };
        Ok(SavedColor {
            palette: Palette::parse(palette.as_slice())?,
            color: Color::parse(color)?,
        })
    }
}

/// How a saved color comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restoration {
    /// Palette mode on `palette_index` at `position`.
    Indexed { palette_index: usize, position: usize },
    /// The color is not in its palette: palette mode on `palette_index`
    /// with `color` as the shade override.
    ShadeOverride { palette_index: usize, color: Color },
}

impl Restoration {
    #[must_use]
    pub fn palette_index(&self) -> usize {
        match *self {
            Self::Indexed { palette_index, .. } | Self::ShadeOverride { palette_index, .. } => {
                palette_index
            }
        }
    }
}

/// Find `palette` in the book (built-ins first), appending it if absent.
pub fn find_or_add(book: &PaletteBook, palette: &Palette) -> usize {
    match book.find(palette) {
        Some(index) => index,
        None => {
            let index = book.add_custom(*palette);
            tracing::debug!(message = "restore.re_added", index);
            index
        }
    }
}

/// Decide how `color`, saved alongside `palette`, is restored.
///
/// May append `palette` to the book.
pub fn restore_target(book: &PaletteBook, palette: &Palette, color: Color) -> Restoration {
    let palette_index = find_or_add(book, palette);
    match palette.position_of(color) {
        Some(position) => Restoration::Indexed {
            palette_index,
            position,
        },
        None => Restoration::ShadeOverride {
            palette_index,
            color,
        },
    }
}

/// Position of the palette entry closest in luminance to `color`.
///
/// Used when a color cannot be shown as an override; ties go to the lower
/// position.
#[must_use]
pub fn nearest_by_luminance(palette: &Palette, color: Color) -> usize {
    let target = color.luminance();
    palette
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (a.luminance() - target)
                .abs()
                .total_cmp(&(b.luminance() - target).abs())
        })
        .map_or(0, |(position, _)| position)
}
