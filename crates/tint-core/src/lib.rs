#![forbid(unsafe_code)]

//! Colors, shade ramps, and palettes for Tint.
//!
//! # Role in Tint
//! `tint-core` is the deterministic half of the color engine. It owns the
//! constant data (eight base hues, their 64-step shade ramps, eight built-in
//! palettes) and the one piece of shared mutable state, the append-only
//! custom-palette list. `tint-session` builds the interactive selection flow
//! on top of it.
//!
//! # This crate provides
//! - [`Color`] with `#RRGGBB` parsing and WCAG [`luminance`].
//! - [`BaseHue`] and the per-hue [`ShadeRamp`] / [`ShadeGrid`] views.
//! - [`Palette`] and the built-in themes.
//! - [`PaletteBook`] over an injectable [`CustomPaletteStore`].
//! - [`TintError`], the shared error taxonomy.

/// Color type, parsing, and luminance.
pub mod color;
/// Error taxonomy.
pub mod error;
/// Base hue families.
pub mod hue;
/// Palettes and built-in themes.
pub mod palette;
/// Shade ramps and grids.
pub mod shade;
mod shade_table;
/// Built-in plus custom palette storage.
pub mod store;

pub use color::{Color, best_text_color, contrast_ratio, luminance};
pub use error::{IndexKind, Result, TintError};
pub use hue::{BaseHue, HUE_COUNT};
pub use palette::{BUILTIN_COUNT, BuiltinTheme, PALETTE_LEN, Palette, builtin, builtins};
pub use shade::{
    GRID_SIZE, GridCell, RAMP_LEN, ShadeGrid, ShadeRamp, extract_column, extract_row, locate,
    shade_ramp, to_grid,
};
pub use store::{ArcSwapPaletteStore, CustomPaletteStore, MutexPaletteStore, PaletteBook};
