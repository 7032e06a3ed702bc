#![forbid(unsafe_code)]

//! Interactive color selection for Tint.
//!
//! # Role in Tint
//! `tint-session` turns the constant color data of `tint-core` into the
//! editing flow: which color each target shows, how the palette menu and the
//! shade grid move between states, how presses become taps or long presses,
//! and how a saved image gets its colors back.
//!
//! # This crate provides
//! - [`ColorState`] and the palette / variations resolution in [`mode`].
//! - [`ColorSelector`], the menu and shade grid state machine.
//! - [`PressTimer`] for short versus long presses.
//! - [`GalleryColors`] records and [`restore_target`].
//! - [`EditorConfig`] loaded from TOML.
//! - [`ColorEditor`], which wires all of the above together.
//!
//! The library logs through `tracing` and never installs a subscriber.

pub mod config;
pub mod editor;
pub mod error;
pub mod gesture;
/// Hue lookup for custom palette colors.
pub mod hue_match;
pub mod mode;
pub mod restore;
pub mod selector;

pub use config::{DefaultsConfig, EditorConfig, GestureConfig, SelectionConfig};
pub use editor::ColorEditor;
pub use error::{ConfigError, Result, SessionError};
pub use gesture::{DEFAULT_LONG_PRESS, PressOutcome, PressTimer};
pub use hue_match::{hue_for_custom_color, resolve_custom_hue};
pub use mode::{ColorMode, ColorModeSelection, ColorState, ColorTarget, ShadeOverride};
pub use restore::{GalleryColors, Restoration, SavedColor, restore_target};
pub use selector::{
    ColorSelector, MenuCell, SelectionSnapshot, SelectorState, ShadeCommit, ShadeHighlight,
    ShadeLine, ShadeSession,
};
