#![forbid(unsafe_code)]

//! The color editor: one image's color state plus the selector driving it.
//!
//! [`ColorEditor`] owns the palette book, both targets' selections, the
//! selector state machine, the menu press timer and the variation RNG. Host
//! code forwards taps and ticks to it and reads colors back with
//! [`current_color`](ColorEditor::current_color).
//!
//! ```
//! use tint_core::Color;
//! use tint_session::{ColorEditor, ColorTarget, EditorConfig};
//!
//! let mut editor = ColorEditor::new(EditorConfig::default()).unwrap();
//! editor.open_menu(ColorTarget::Background).unwrap();
//! editor.open_shade_selector(Color::hex(0x0000FF), 4).unwrap();
//! let commit = editor.select_shade_in_row(3, 5).unwrap();
//! assert_eq!(commit.palette_index, 8);
//! assert_eq!(editor.current_color(ColorTarget::Background).unwrap(), commit.color);
//! ```

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tint_core::{BaseHue, Color, PaletteBook, best_text_color};
use web_time::Instant;

use crate::config::EditorConfig;
use crate::error::{ConfigError, Result, SessionError};
use crate::gesture::{PressOutcome, PressTimer};
use crate::mode::{ColorModeSelection, ColorState, ColorTarget};
use crate::restore::{
    GalleryColors, Restoration, SavedColor, nearest_by_luminance, restore_target,
};
use crate::selector::{ColorSelector, MenuCell, SelectorState, ShadeCommit};

#[derive(Debug)]
pub struct ColorEditor {
    config: EditorConfig,
    book: PaletteBook,
    colors: ColorState,
    selector: ColorSelector,
    press: PressTimer<MenuCell>,
    rng: SmallRng,
}

impl ColorEditor {
    /// Editor with a fresh palette book.
    pub fn new(config: EditorConfig) -> Result<Self> {
        Self::with_book(config, PaletteBook::new())
    }

    /// Editor sharing `book` (e.g. one book per gallery, many images).
    pub fn with_book(config: EditorConfig, book: PaletteBook) -> Result<Self> {
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors).into());
        }
        let rng = match config.selection.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Ok(Self {
            press: PressTimer::new(config.gesture.long_press()),
            colors: default_colors(&config, &book)?,
            selector: ColorSelector::new(),
            config,
            book,
            rng,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn book(&self) -> &PaletteBook {
        &self.book
    }

    #[must_use]
    pub fn colors(&self) -> &ColorState {
        &self.colors
    }

    #[must_use]
    pub fn selector(&self) -> &ColorSelector {
        &self.selector
    }

    // -- Color mode ---------------------------------------------------------

    pub fn current_color(&self, target: ColorTarget) -> Result<Color> {
        Ok(self.colors.current_color(target, &self.book)?)
    }

    pub fn cycle(&mut self, target: ColorTarget) {
        self.colors.cycle(target, &self.book);
    }

    pub fn select_palette(&mut self, target: ColorTarget, palette: usize) -> Result<()> {
        Ok(self.colors.select_palette(target, palette, &self.book)?)
    }

    pub fn select_variation(&mut self, target: ColorTarget, hue: usize) -> Result<()> {
        Ok(self.colors.select_variation(target, hue, &mut self.rng)?)
    }

    pub fn select_direct(
        &mut self,
        target: ColorTarget,
        palette: usize,
        position: usize,
    ) -> Result<()> {
        Ok(self
            .colors
            .select_direct(target, palette, position, &self.book)?)
    }

    /// Back to the configured default selection; closes any selector.
    pub fn reset(&mut self) -> Result<()> {
        self.colors = default_colors(&self.config, &self.book)?;
        self.selector.reset();
        self.press.cancel();
        tracing::debug!(message = "editor.reset");
        Ok(())
    }

    // -- Selector -----------------------------------------------------------

    pub fn open_menu(&mut self, target: ColorTarget) -> Result<()> {
        self.selector.open_menu(target)
    }

    pub fn close_menu(&mut self) -> Result<()> {
        self.selector.close_menu()?;
        self.press.cancel();
        Ok(())
    }

    #[must_use]
    pub fn menu_highlight(&self) -> Option<MenuCell> {
        self.selector.menu_highlight(&self.colors)
    }

    pub fn open_shade_selector(&mut self, color: Color, position: usize) -> Result<BaseHue> {
        self.press.cancel();
        self.selector
            .open_shade_selector(color, position, &self.colors)
    }

    pub fn select_shade_in_row(&mut self, row: usize, col: usize) -> Result<ShadeCommit> {
        self.selector
            .select_shade_in_row(row, col, &mut self.colors, &self.book)
    }

    pub fn select_shade_in_column(&mut self, col: usize, row: usize) -> Result<ShadeCommit> {
        self.selector
            .select_shade_in_column(col, row, &mut self.colors, &self.book)
    }

    pub fn select_shade_row(&mut self, row: usize) -> Result<ShadeCommit> {
        self.selector
            .select_shade_row(row, &mut self.colors, &self.book)
    }

    pub fn select_shade_column(&mut self, col: usize) -> Result<ShadeCommit> {
        self.selector
            .select_shade_column(col, &mut self.colors, &self.book)
    }

    pub fn dismiss_shade_selector(&mut self) -> Result<Option<ShadeCommit>> {
        self.selector
            .dismiss_shade_selector(&mut self.colors, &self.book)
    }

    pub fn close_shade_selector(&mut self) -> Result<()> {
        self.selector.close_shade_selector(&mut self.colors)
    }

    // -- Menu presses -------------------------------------------------------

    /// Touch-down on a menu cell. Only valid with the menu open.
    pub fn press_cell(&mut self, cell: MenuCell, now: Instant) -> Result<()> {
        self.menu_target("press_cell")?;
        self.book.resolve(cell.palette)?.get(cell.position)?;
        self.press.press(cell, now);
        Ok(())
    }

    /// Drive the press timer. A long press opens the shade grid for the
    /// pressed cell's color.
    pub fn tick(&mut self, now: Instant) -> Result<Option<PressOutcome<MenuCell>>> {
        match self.press.poll(now) {
            Some(outcome) => self.apply_press(outcome).map(Some),
            None => Ok(None),
        }
    }

    /// Touch-up. A short press selects the cell directly; the menu stays
    /// open.
    pub fn release_cell(&mut self, now: Instant) -> Result<Option<PressOutcome<MenuCell>>> {
        match self.press.release(now) {
            Some(outcome) => self.apply_press(outcome).map(Some),
            None => Ok(None),
        }
    }

    /// Finger left the cell: nothing fires.
    pub fn cancel_press(&mut self) {
        self.press.cancel();
    }

    fn menu_target(&self, operation: &'static str) -> Result<ColorTarget> {
        match self.selector.state() {
            SelectorState::MenuOpen { target } => Ok(*target),
            state => Err(SessionError::InvalidTransition {
                operation,
                state: state.name(),
            }),
        }
    }

    fn apply_press(
        &mut self,
        outcome: PressOutcome<MenuCell>,
    ) -> Result<PressOutcome<MenuCell>> {
        match outcome {
            PressOutcome::ShortPress(cell) => {
                let target = self.menu_target("short_press")?;
                self.select_direct(target, cell.palette, cell.position)?;
            }
            PressOutcome::LongPress(cell) => {
                let color = self.book.resolve(cell.palette)?.get(cell.position)?;
                self.selector
                    .open_shade_selector(color, cell.position, &self.colors)?;
            }
        }
        Ok(outcome)
    }

    // -- Gallery ------------------------------------------------------------

    /// The record saved with a finished image.
    pub fn snapshot_gallery_colors(&self) -> Result<GalleryColors> {
        let saved = |target: ColorTarget| -> Result<SavedColor> {
            let palette = self
                .book
                .resolve(self.colors.selection(target).active_palette_index())?;
            Ok(SavedColor {
                palette,
                color: self.current_color(target)?,
            })
        };
        Ok(GalleryColors::new(
            saved(ColorTarget::Background)?,
            saved(ColorTarget::Text)?,
        ))
    }

    /// Load a saved record. On error nothing changes.
    ///
    /// Only one shade override can be live. If both colors need one, the
    /// background keeps its exact color and the text snaps to the nearest
    /// entry (by luminance) of its palette.
    pub fn restore_gallery_colors(&mut self, record: &GalleryColors) -> Result<()> {
        let background = record.saved(ColorTarget::Background)?;
        let text = record.saved(ColorTarget::Text)?;

        let mut colors = self.colors.clone();
        colors.clear_override();
        let mut override_taken = false;
        for (target, saved) in [(ColorTarget::Background, background), (ColorTarget::Text, text)] {
            match restore_target(&self.book, &saved.palette, saved.color) {
                Restoration::Indexed {
                    palette_index,
                    position,
                } => {
                    colors.set_selection(target, ColorModeSelection::palette(palette_index, position));
                }
                Restoration::ShadeOverride {
                    palette_index,
                    color,
                } => {
                    let position = nearest_by_luminance(&saved.palette, color);
                    colors.set_selection(target, ColorModeSelection::palette(palette_index, position));
                    if override_taken {
                        tracing::warn!(
                            message = "editor.restore_override_dropped",
                            %target,
                            %color,
                            position
                        );
                    } else {
                        colors.set_shade_override(target, color);
                        override_taken = true;
                    }
                }
            }
        }

        self.colors = colors;
        self.selector.reset();
        self.press.cancel();
        tracing::debug!(message = "editor.restored");
        Ok(())
    }

    /// Restore from gallery JSON, falling back to the default selection when
    /// the record is unreadable. Returns whether the record was used.
    pub fn restore_or_default(&mut self, json: &str) -> Result<bool> {
        let restored =
            GalleryColors::from_json(json).and_then(|record| self.restore_gallery_colors(&record));
        match restored {
            Ok(()) => Ok(true),
            Err(err) => {
                tracing::warn!(message = "editor.restore_fallback", error = %err);
                self.reset()?;
                Ok(false)
            }
        }
    }
}

fn default_colors(config: &EditorConfig, book: &PaletteBook) -> Result<ColorState> {
    let d = &config.defaults;
    let background =
        ColorModeSelection::palette(d.background_palette, d.background_position);
    let text_palette = book.resolve(d.text_palette)?;
    let mut text_position = d.text_position;
    if d.auto_text_contrast {
        let bg = background.resolve(book)?;
        if let Some(best) = best_text_color(bg, text_palette.colors()) {
            text_position = text_palette.position_of(best).unwrap_or(text_position);
        }
    }
    Ok(ColorState::new(
        background,
        ColorModeSelection::palette(d.text_palette, text_position),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::ShadeHighlight;
    use tint_core::{BUILTIN_COUNT, Palette, builtin, shade_ramp};
    use tracing_test::traced_test;
    use web_time::Duration;

    fn editor() -> ColorEditor {
        let mut config = EditorConfig::default();
        config.selection.rng_seed = Some(3);
        ColorEditor::new(config).unwrap()
    }

    #[test]
    fn defaults_pick_contrasting_text() {
        let ed = editor();
        assert_eq!(
            ed.current_color(ColorTarget::Background).unwrap(),
            Color::hex(0x0000FF)
        );
        // White beats every other Classic entry against pure blue.
        assert_eq!(ed.current_color(ColorTarget::Text).unwrap(), Color::WHITE);
    }

    #[test]
    fn fixed_text_position_when_auto_contrast_off() {
        let mut config = EditorConfig::default();
        config.defaults.auto_text_contrast = false;
        config.defaults.text_position = 2;
        let ed = ColorEditor::new(config).unwrap();
        assert_eq!(ed.current_color(ColorTarget::Text).unwrap(), builtin(0).unwrap()[2]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = EditorConfig::default();
        config.defaults.text_palette = 12;
        assert!(matches!(
            ColorEditor::new(config),
            Err(SessionError::Config(ConfigError::Validation(_)))
        ));
    }

    #[test]
    fn seeded_variations_are_reproducible() {
        let mut a = editor();
        let mut b = editor();
        for hue in 0..8 {
            a.select_variation(ColorTarget::Text, hue).unwrap();
            b.select_variation(ColorTarget::Text, hue).unwrap();
            assert_eq!(a.colors().selection(ColorTarget::Text), b.colors().selection(ColorTarget::Text));
        }
    }

    #[test]
    fn short_press_selects_cell() {
        let mut ed = editor();
        let t = Instant::now();
        ed.open_menu(ColorTarget::Text).unwrap();
        let cell = MenuCell { palette: 3, position: 1 };
        ed.press_cell(cell, t).unwrap();
        assert_eq!(ed.tick(t + Duration::from_millis(100)).unwrap(), None);
        assert_eq!(
            ed.release_cell(t + Duration::from_millis(150)).unwrap(),
            Some(PressOutcome::ShortPress(cell))
        );
        assert_eq!(ed.current_color(ColorTarget::Text).unwrap(), builtin(3).unwrap()[1]);
        assert_eq!(ed.menu_highlight(), Some(cell));
    }

    #[test]
    fn long_press_opens_shade_grid() {
        let mut ed = editor();
        let t = Instant::now();
        ed.open_menu(ColorTarget::Background).unwrap();
        ed.press_cell(MenuCell { palette: 0, position: 4 }, t).unwrap();
        let fired = ed.tick(t + Duration::from_millis(500)).unwrap();
        assert!(matches!(fired, Some(PressOutcome::LongPress(_))));
        assert_eq!(ed.selector().session().unwrap().hue(), BaseHue::Blue);
        assert_eq!(ed.selector().highlight(), ShadeHighlight { row: Some(3), column: None });
        // Release after the long press does nothing.
        assert_eq!(ed.release_cell(t + Duration::from_millis(700)).unwrap(), None);
    }

    #[test]
    fn press_needs_open_menu() {
        let mut ed = editor();
        let err = ed
            .press_cell(MenuCell { palette: 0, position: 0 }, Instant::now())
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidTransition { .. }));
    }

    #[test]
    fn closing_menu_cancels_press() {
        let mut ed = editor();
        let t = Instant::now();
        ed.open_menu(ColorTarget::Background).unwrap();
        ed.press_cell(MenuCell { palette: 1, position: 1 }, t).unwrap();
        ed.close_menu().unwrap();
        assert_eq!(ed.tick(t + Duration::from_secs(1)).unwrap(), None);
    }

    #[test]
    fn snapshot_then_restore_reproduces_colors() {
        let mut ed = editor();
        ed.open_menu(ColorTarget::Background).unwrap();
        ed.open_shade_selector(Color::hex(0x0000FF), 4).unwrap();
        ed.select_shade_in_row(5, 3).unwrap();
        ed.dismiss_shade_selector().unwrap();
        let bg = ed.current_color(ColorTarget::Background).unwrap();
        let text = ed.current_color(ColorTarget::Text).unwrap();
        let json = ed.snapshot_gallery_colors().unwrap().to_json().unwrap();

        let mut fresh = ColorEditor::with_book(EditorConfig::default(), PaletteBook::new()).unwrap();
        assert!(fresh.restore_or_default(&json).unwrap());
        assert_eq!(fresh.current_color(ColorTarget::Background).unwrap(), bg);
        assert_eq!(fresh.current_color(ColorTarget::Text).unwrap(), text);
        // The shade row was re-added, and restored by index, not override.
        assert_eq!(fresh.book().custom_count(), 1);
        assert_eq!(fresh.colors().shade_override(), None);
    }

    #[test]
    fn both_overrides_keep_background_exact() {
        let mut ed = editor();
        let classic = *builtin(0).unwrap();
        let record = GalleryColors::new(
            SavedColor { palette: classic, color: Color::hex(0x123457) },
            SavedColor { palette: classic, color: Color::hex(0xFEFEFE) },
        );
        ed.restore_gallery_colors(&record).unwrap();
        assert_eq!(
            ed.current_color(ColorTarget::Background).unwrap(),
            Color::hex(0x123457)
        );
        assert_eq!(ed.current_color(ColorTarget::Text).unwrap(), Color::WHITE);
    }

    #[test]
    fn failed_restore_changes_nothing() {
        let mut ed = editor();
        ed.select_direct(ColorTarget::Background, 5, 5).unwrap();
        let before = ed.colors().clone();
        let mut record = ed.snapshot_gallery_colors().unwrap();
        record.text_palette.truncate(3);
        assert!(ed.restore_gallery_colors(&record).is_err());
        assert_eq!(ed.colors(), &before);
    }

    #[traced_test]
    #[test]
    fn corrupt_record_falls_back_to_defaults() {
        let mut ed = editor();
        ed.select_direct(ColorTarget::Background, 6, 1).unwrap();
        let json = r##"{"backgroundColor":"#zzzzzz","textColor":"#FFFFFF","backgroundPalette":[],"textPalette":[]}"##;
        assert!(!ed.restore_or_default(json).unwrap());
        assert_eq!(
            ed.colors().selection(ColorTarget::Background),
            ColorModeSelection::palette(0, 4)
        );
        assert!(logs_contain("editor.restore_fallback"));
    }

    #[test]
    fn shared_book_sees_other_editors_palettes() {
        let book = PaletteBook::new();
        let mut a = ColorEditor::with_book(EditorConfig::default(), book.clone()).unwrap();
        let b = ColorEditor::with_book(EditorConfig::default(), book).unwrap();
        a.open_menu(ColorTarget::Text).unwrap();
        a.open_shade_selector(Color::hex(0x0000FF), 4).unwrap();
        let commit = a.select_shade_column(0).unwrap();
        assert_eq!(commit.palette_index, BUILTIN_COUNT);
        let column: Palette = shade_ramp(BaseHue::Blue).to_grid().column(0).unwrap();
        assert_eq!(b.book().resolve(BUILTIN_COUNT).unwrap(), column);
    }
}
