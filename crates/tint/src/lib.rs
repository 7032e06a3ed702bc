#![forbid(unsafe_code)]

//! Tint public facade crate.
//!
//! Re-exports the color engine (`tint-core`) and the editing session
//! (`tint-session`) behind one dependency, with a prelude for day-to-day
//! use.
//!
//! ```
//! use tint::prelude::*;
//!
//! let mut editor = ColorEditor::new(EditorConfig::default()).unwrap();
//! editor.select_palette(ColorTarget::Text, 2).unwrap();
//! let text = editor.current_color(ColorTarget::Text).unwrap();
//! assert!(builtin(2).unwrap().position_of(text).is_some());
//! ```

// --- Core re-exports -------------------------------------------------------

pub use tint_core::{
    ArcSwapPaletteStore, BUILTIN_COUNT, BaseHue, BuiltinTheme, Color, CustomPaletteStore,
    GRID_SIZE, GridCell, HUE_COUNT, IndexKind, MutexPaletteStore, PALETTE_LEN, Palette,
    PaletteBook, RAMP_LEN, ShadeGrid, ShadeRamp, TintError, best_text_color, builtin, builtins,
    contrast_ratio, extract_column, extract_row, locate, luminance, shade_ramp, to_grid,
};

// --- Session re-exports ----------------------------------------------------

pub use tint_session::{
    ColorEditor, ColorMode, ColorModeSelection, ColorSelector, ColorState, ColorTarget,
    ConfigError, EditorConfig, GalleryColors, MenuCell, PressOutcome, PressTimer, Restoration,
    SelectorState, SessionError, ShadeCommit, ShadeHighlight, ShadeOverride,
};

/// Full crates, for items not re-exported above.
pub use {tint_core, tint_session};

/// Everyday imports.
pub mod prelude {
    pub use crate::{
        BaseHue, Color, ColorEditor, ColorTarget, EditorConfig, Palette, PaletteBook, SessionError,
        TintError, builtin,
    };
}
