#![forbid(unsafe_code)]

//! Color mode resolution for the background and text targets.
//!
//! Each target carries a [`ColorModeSelection`]. In palette mode the
//! selection names a palette and the position walks its eight colors. In
//! variations mode the roles invert: the selection fixes a hue and the
//! position names the palette that supplies it, so cycling shows the same
//! hue across every theme.
//!
//! A [`ShadeOverride`] beats both modes for the one target it records.
//!
//! # Example
//!
//! ```
//! use tint_core::{Color, PaletteBook};
//! use tint_session::mode::{ColorModeSelection, ColorState, ColorTarget};
//!
//! let book = PaletteBook::new();
//! let mut colors = ColorState::new(
//!     ColorModeSelection::palette(0, 4),
//!     ColorModeSelection::palette(0, 6),
//! );
//! assert_eq!(colors.current_color(ColorTarget::Background, &book).unwrap(), Color::hex(0x0000FF));
//!
//! colors.set_shade_override(ColorTarget::Background, Color::hex(0x123456));
//! assert_eq!(colors.current_color(ColorTarget::Background, &book).unwrap(), Color::hex(0x123456));
//! ```

use std::fmt;

use rand::Rng;
use tint_core::{
    BUILTIN_COUNT, BaseHue, Color, IndexKind, PALETTE_LEN, PaletteBook, Result, TintError,
};

/// Which half of the image a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTarget {
    Background,
    Text,
}

impl ColorTarget {
    pub const ALL: [Self; 2] = [Self::Background, Self::Text];

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Background => Self::Text,
            Self::Text => Self::Background,
        }
    }
}

impl fmt::Display for ColorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Background => "background",
            Self::Text => "text",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// `selection` is a palette index, `position` a slot within it.
    Palette,
    /// `selection` is a hue index, `position` a palette index.
    Variations,
}

/// How one target's color is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorModeSelection {
    pub mode: ColorMode,
    pub selection: usize,
    pub position: usize,
}

impl ColorModeSelection {
    #[must_use]
    pub const fn palette(palette: usize, position: usize) -> Self {
        Self {
            mode: ColorMode::Palette,
            selection: palette,
            position,
        }
    }

    #[must_use]
    pub const fn variations(hue: usize, palette: usize) -> Self {
        Self {
            mode: ColorMode::Variations,
            selection: hue,
            position: palette,
        }
    }

    /// The palette the current color is drawn from.
    #[must_use]
    pub const fn active_palette_index(&self) -> usize {
        match self.mode {
            ColorMode::Palette => self.selection,
            ColorMode::Variations => self.position,
        }
    }

    /// Resolve against `book`, ignoring any shade override.
    pub fn resolve(&self, book: &PaletteBook) -> Result<Color> {
        match self.mode {
            ColorMode::Palette => book.resolve(self.selection)?.get(self.position),
            ColorMode::Variations => {
                let hue = BaseHue::from_index(self.selection)?;
                Ok(book.resolve(self.position)?[hue.index()])
            }
        }
    }
}

/// A color set directly from the shade grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShadeOverride {
    pub color: Color,
    pub target: ColorTarget,
}

/// Background and text selections plus the single shade override slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorState {
    background: ColorModeSelection,
    text: ColorModeSelection,
    shade_override: Option<ShadeOverride>,
}

impl ColorState {
    #[must_use]
    pub fn new(background: ColorModeSelection, text: ColorModeSelection) -> Self {
        Self {
            background,
            text,
            shade_override: None,
        }
    }

    #[must_use]
    pub fn selection(&self, target: ColorTarget) -> ColorModeSelection {
        match target {
            ColorTarget::Background => self.background,
            ColorTarget::Text => self.text,
        }
    }

    pub(crate) fn selection_mut(&mut self, target: ColorTarget) -> &mut ColorModeSelection {
        match target {
            ColorTarget::Background => &mut self.background,
            ColorTarget::Text => &mut self.text,
        }
    }

    /// Replace a target's selection wholesale. Leaves the override alone.
    pub fn set_selection(&mut self, target: ColorTarget, selection: ColorModeSelection) {
        *self.selection_mut(target) = selection;
    }

    #[must_use]
    pub fn shade_override(&self) -> Option<ShadeOverride> {
        self.shade_override
    }

    /// Point the override slot at `target`. Replaces any override for the
    /// other target, since only one shade is tracked at a time.
    pub fn set_shade_override(&mut self, target: ColorTarget, color: Color) {
        self.shade_override = Some(ShadeOverride { color, target });
    }

    /// Drop the override if it belongs to `target`.
    pub fn clear_override_for(&mut self, target: ColorTarget) {
        if self.shade_override.is_some_and(|o| o.target == target) {
            self.shade_override = None;
        }
    }

    pub fn clear_override(&mut self) {
        self.shade_override = None;
    }

    /// The color a target shows right now.
    ///
    /// Preview and export both call this, so the same state always yields
    /// the same bytes.
    pub fn current_color(&self, target: ColorTarget, book: &PaletteBook) -> Result<Color> {
        match self.shade_override {
            Some(o) if o.target == target => Ok(o.color),
            _ => self.selection(target).resolve(book),
        }
    }

    /// Advance the position: modulo 8 in palette mode, modulo the palette
    /// count in variations mode.
    pub fn cycle(&mut self, target: ColorTarget, book: &PaletteBook) {
        let modulus = match self.selection(target).mode {
            ColorMode::Palette => PALETTE_LEN,
            ColorMode::Variations => book.palette_count(),
        };
        let selection = self.selection_mut(target);
        selection.position = (selection.position + 1) % modulus;
        self.clear_override_for(target);
        tracing::debug!(
            message = "mode.cycle",
            %target,
            position = self.selection(target).position
        );
    }

    /// Switch to palette mode on `palette`, keeping the position.
    pub fn select_palette(
        &mut self,
        target: ColorTarget,
        palette: usize,
        book: &PaletteBook,
    ) -> Result<()> {
        book.resolve(palette)?;
        let selection = self.selection_mut(target);
        selection.mode = ColorMode::Palette;
        selection.selection = palette;
        if selection.position >= PALETTE_LEN {
            // Variations positions range over every palette.
            selection.position %= PALETTE_LEN;
        }
        self.clear_override_for(target);
        Ok(())
    }

    /// Switch to variations mode on `hue` and jump to a different built-in
    /// palette, so the pick is never a no-op.
    pub fn select_variation<R: Rng + ?Sized>(
        &mut self,
        target: ColorTarget,
        hue: usize,
        rng: &mut R,
    ) -> Result<()> {
        BaseHue::from_index(hue)?;
        let selection = self.selection_mut(target);
        let palette = pick_other_palette(rng, selection.position);
        *selection = ColorModeSelection::variations(hue, palette);
        self.clear_override_for(target);
        tracing::debug!(message = "mode.select_variation", %target, hue, palette);
        Ok(())
    }

    /// Palette mode with both fields explicit (a direct tap in the menu).
    pub fn select_direct(
        &mut self,
        target: ColorTarget,
        palette: usize,
        position: usize,
        book: &PaletteBook,
    ) -> Result<()> {
        book.resolve(palette)?.get(position)?;
        self.set_selection(target, ColorModeSelection::palette(palette, position));
        self.clear_override_for(target);
        Ok(())
    }
}

/// Uniform pick from the built-in palettes, excluding `current` when it is
/// one of them.
fn pick_other_palette<R: Rng + ?Sized>(rng: &mut R, current: usize) -> usize {
    if current < BUILTIN_COUNT {
        let pick = rng.random_range(0..BUILTIN_COUNT - 1);
        if pick >= current { pick + 1 } else { pick }
    } else {
        rng.random_range(0..BUILTIN_COUNT)
    }
}

/// Validate a menu position (0..8).
pub(crate) fn check_position(position: usize) -> Result<()> {
    if position < PALETTE_LEN {
        Ok(())
    } else {
        Err(TintError::out_of_range(
            IndexKind::Position,
            position,
            PALETTE_LEN,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use tint_core::{Palette, builtin};

    fn state() -> ColorState {
        ColorState::new(
            ColorModeSelection::palette(0, 4),
            ColorModeSelection::palette(0, 6),
        )
    }

    #[test]
    fn palette_mode_reads_selection_then_position() {
        let book = PaletteBook::new();
        let colors = state();
        assert_eq!(
            colors.current_color(ColorTarget::Background, &book).unwrap(),
            builtin(0).unwrap()[4]
        );
        assert_eq!(
            colors.current_color(ColorTarget::Text, &book).unwrap(),
            Color::WHITE
        );
    }

    #[test]
    fn variations_mode_inverts_roles() {
        let book = PaletteBook::new();
        let mut colors = state();
        // Hue 1 (orange) from palette 2 (Jewel).
        colors.set_selection(ColorTarget::Background, ColorModeSelection::variations(1, 2));
        let variation = colors.current_color(ColorTarget::Background, &book).unwrap();
        assert_eq!(variation, builtin(2).unwrap()[1]);

        let swapped = ColorModeSelection::palette(1, 2).resolve(&book).unwrap();
        assert_ne!(variation, swapped);
    }

    #[test]
    fn override_only_hits_its_target() {
        let book = PaletteBook::new();
        let mut colors = state();
        let text_before = colors.current_color(ColorTarget::Text, &book).unwrap();
        colors.set_shade_override(ColorTarget::Background, Color::hex(0x0A0B0C));
        assert_eq!(
            colors.current_color(ColorTarget::Background, &book).unwrap(),
            Color::hex(0x0A0B0C)
        );
        assert_eq!(colors.current_color(ColorTarget::Text, &book).unwrap(), text_before);
    }

    #[test]
    fn cycle_wraps_at_eight_in_palette_mode() {
        let book = PaletteBook::new();
        let mut colors = state();
        colors.set_selection(ColorTarget::Background, ColorModeSelection::palette(3, 7));
        colors.cycle(ColorTarget::Background, &book);
        assert_eq!(colors.selection(ColorTarget::Background).position, 0);
    }

    #[test]
    fn cycle_in_variations_mode_reaches_custom_palettes() {
        let book = PaletteBook::new();
        let custom = book.add_custom(Palette::new([Color::hex(0x101010); 8]));
        let mut colors = state();
        colors.set_selection(ColorTarget::Text, ColorModeSelection::variations(0, 7));
        colors.cycle(ColorTarget::Text, &book);
        assert_eq!(colors.selection(ColorTarget::Text).position, custom);
        assert_eq!(
            colors.current_color(ColorTarget::Text, &book).unwrap(),
            Color::hex(0x101010)
        );
        colors.cycle(ColorTarget::Text, &book);
        assert_eq!(colors.selection(ColorTarget::Text).position, 0);
    }

    #[test]
    fn cycle_clears_only_own_override() {
        let book = PaletteBook::new();
        let mut colors = state();
        colors.set_shade_override(ColorTarget::Text, Color::hex(0x445566));
        colors.cycle(ColorTarget::Background, &book);
        assert!(colors.shade_override().is_some());
        colors.cycle(ColorTarget::Text, &book);
        assert!(colors.shade_override().is_none());
    }

    #[test]
    fn select_palette_keeps_position() {
        let book = PaletteBook::new();
        let mut colors = state();
        colors.set_shade_override(ColorTarget::Background, Color::hex(0x999999));
        colors.select_palette(ColorTarget::Background, 5, &book).unwrap();
        assert_eq!(
            colors.selection(ColorTarget::Background),
            ColorModeSelection::palette(5, 4)
        );
        assert!(colors.shade_override().is_none());
    }

    #[test]
    fn select_palette_rejects_unknown_index() {
        let book = PaletteBook::new();
        let mut colors = state();
        let before = colors.clone();
        assert!(matches!(
            colors.select_palette(ColorTarget::Background, 8, &book),
            Err(TintError::IndexOutOfRange { .. })
        ));
        assert_eq!(colors, before);
    }

    #[test]
    fn select_variation_never_repeats_position() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut colors = state();
        for _ in 0..200 {
            let before = colors.selection(ColorTarget::Background).position;
            colors.select_variation(ColorTarget::Background, 3, &mut rng).unwrap();
            let after = colors.selection(ColorTarget::Background);
            assert_eq!(after.mode, ColorMode::Variations);
            assert_eq!(after.selection, 3);
            assert!(after.position < BUILTIN_COUNT);
            assert_ne!(after.position, before);
        }
    }

    #[test]
    fn select_variation_covers_every_other_palette() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut seen = [false; BUILTIN_COUNT];
        for _ in 0..500 {
            seen[pick_other_palette(&mut rng, 2)] = true;
        }
        for (i, hit) in seen.iter().enumerate() {
            assert_eq!(*hit, i != 2, "palette {i}");
        }
    }

    #[test]
    fn select_variation_rejects_bad_hue() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut colors = state();
        assert!(colors.select_variation(ColorTarget::Text, 8, &mut rng).is_err());
    }

    #[test]
    fn select_direct_sets_both_fields() {
        let book = PaletteBook::new();
        let mut colors = state();
        colors.select_direct(ColorTarget::Text, 7, 2, &book).unwrap();
        assert_eq!(colors.selection(ColorTarget::Text), ColorModeSelection::palette(7, 2));
        assert!(colors.select_direct(ColorTarget::Text, 7, 8, &book).is_err());
    }

    #[test]
    fn active_palette_follows_mode() {
        assert_eq!(ColorModeSelection::palette(9, 3).active_palette_index(), 9);
        assert_eq!(ColorModeSelection::variations(3, 9).active_palette_index(), 9);
    }
}
