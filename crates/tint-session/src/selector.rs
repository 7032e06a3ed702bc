#![forbid(unsafe_code)]

//! The color selector state machine.
//!
//! ```text
//!   Closed ──open_menu──▶ MenuOpen ──open_shade_selector──▶ ShadeOpen
//!     ▲                     │  ▲                              │  │
//!     └────close_menu───────┘  └────close_shade_selector──────┘  │
//!     ▲                                                          │
//!     └──────────────────dismiss_shade_selector──────────────────┘
//! ```
//!
//! While the shade grid is open, every tap commits: the tapped row or
//! column becomes a new custom palette and the edited target points at it.
//! Cancelling puts the modes and selections back exactly as they were when
//! the grid opened; highlights are left as the session set them.
//!
//! Operations called from the wrong state fail with
//! [`SessionError::InvalidTransition`] and change nothing.
//!
//! # Invariants
//!
//! 1. The menu and the shade grid are never both "the open thing": the state
//!    is a single enum.
//! 2. Every committed palette is one full row or one full column of the
//!    session's grid.
//! 3. Row taps clear the column highlight and vice versa, so a highlight
//!    always names the line that was last committed.

use tint_core::{BaseHue, Color, PaletteBook, ShadeGrid, shade_ramp};

use crate::error::{Result, SessionError};
use crate::hue_match;
use crate::mode::{ColorMode, ColorModeSelection, ColorState, ColorTarget, check_position};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Modes and selections captured when the shade grid opens.
///
/// Positions are deliberately not part of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub background: (ColorMode, usize),
    pub text: (ColorMode, usize),
}

impl SelectionSnapshot {
    fn capture(colors: &ColorState) -> Self {
        let pick = |s: ColorModeSelection| (s.mode, s.selection);
        Self {
            background: pick(colors.selection(ColorTarget::Background)),
            text: pick(colors.selection(ColorTarget::Text)),
        }
    }

    fn restore(&self, colors: &mut ColorState) {
        for (target, (mode, selection)) in [
            (ColorTarget::Background, self.background),
            (ColorTarget::Text, self.text),
        ] {
            let s = colors.selection_mut(target);
            s.mode = mode;
            s.selection = selection;
        }
    }
}

/// An open shade grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeSession {
    hue: BaseHue,
    grid: ShadeGrid,
    snapshot: SelectionSnapshot,
}

impl ShadeSession {
    #[must_use]
    pub fn hue(&self) -> BaseHue {
        self.hue
    }

    #[must_use]
    pub fn grid(&self) -> &ShadeGrid {
        &self.grid
    }

    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        self.snapshot
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectorState {
    #[default]
    Closed,
    MenuOpen {
        target: ColorTarget,
    },
    ShadeOpen {
        target: ColorTarget,
        session: ShadeSession,
    },
}

impl SelectorState {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::MenuOpen { .. } => "menu-open",
            Self::ShadeOpen { .. } => "shade-open",
        }
    }

    /// The target being edited, if any selector is open.
    #[must_use]
    pub fn target(&self) -> Option<ColorTarget> {
        match self {
            Self::Closed => None,
            Self::MenuOpen { target } | Self::ShadeOpen { target, .. } => Some(*target),
        }
    }
}

/// Highlighted row and column of the shade grid. Survives between sessions
/// until the menu is closed plainly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShadeHighlight {
    pub row: Option<usize>,
    pub column: Option<usize>,
}

/// A cell of the palette menu: palette index by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuCell {
    pub palette: usize,
    pub position: usize,
}

/// A row or column of the shade grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadeLine {
    Row(usize),
    Column(usize),
}

/// What a commit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeCommit {
    pub palette_index: usize,
    pub position: usize,
    pub color: Color,
    pub line: ShadeLine,
}

// ---------------------------------------------------------------------------
// ColorSelector
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSelector {
    state: SelectorState,
    highlight: ShadeHighlight,
}

impl ColorSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    #[must_use]
    pub fn highlight(&self) -> ShadeHighlight {
        self.highlight
    }

    /// The open shade session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&ShadeSession> {
        match &self.state {
            SelectorState::ShadeOpen { session, .. } => Some(session),
            _ => None,
        }
    }

    fn invalid(&self, operation: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            operation,
            state: self.state.name(),
        }
    }

    /// Closed -> MenuOpen.
    pub fn open_menu(&mut self, target: ColorTarget) -> Result<()> {
        if self.state != SelectorState::Closed {
            return Err(self.invalid("open_menu"));
        }
        self.state = SelectorState::MenuOpen { target };
        tracing::debug!(message = "selector.open_menu", %target);
        Ok(())
    }

    /// MenuOpen -> Closed. Clears the shade highlight.
    pub fn close_menu(&mut self) -> Result<()> {
        if !matches!(self.state, SelectorState::MenuOpen { .. }) {
            return Err(self.invalid("close_menu"));
        }
        self.state = SelectorState::Closed;
        self.highlight = ShadeHighlight::default();
        tracing::debug!(message = "selector.close_menu");
        Ok(())
    }

    /// The menu cell holding the edited target's current color.
    ///
    /// `None` when the menu is not open or a shade override is showing (a
    /// shade has no cell in the menu).
    #[must_use]
    pub fn menu_highlight(&self, colors: &ColorState) -> Option<MenuCell> {
        let SelectorState::MenuOpen { target } = self.state else {
            return None;
        };
        if colors.shade_override().is_some_and(|o| o.target == target) {
            return None;
        }
        let s = colors.selection(target);
        Some(match s.mode {
            ColorMode::Palette => MenuCell {
                palette: s.selection,
                position: s.position,
            },
            ColorMode::Variations => MenuCell {
                palette: s.position,
                position: s.selection,
            },
        })
    }

    /// MenuOpen -> ShadeOpen, for the color long-pressed at `position`.
    ///
    /// Picks the hue: a built-in active palette encodes it as `position`; a
    /// custom one goes through [`hue_match::resolve_custom_hue`]. The initial
    /// row highlight is where `color` sits in that hue's grid, unless a
    /// column is still highlighted from an earlier session, which is kept.
    pub fn open_shade_selector(
        &mut self,
        color: Color,
        position: usize,
        colors: &ColorState,
    ) -> Result<BaseHue> {
        let SelectorState::MenuOpen { target } = self.state else {
            return Err(self.invalid("open_shade_selector"));
        };
        check_position(position)?;

        let active = colors.selection(target).active_palette_index();
        let hue = if PaletteBook::is_custom(active) {
            hue_match::resolve_custom_hue(color, position)?
        } else {
            BaseHue::from_index(position)?
        };

        let ramp = shade_ramp(hue);
        if self.highlight.column.is_some() {
            self.highlight.row = None;
        } else {
            self.highlight.row = match ramp.locate(color) {
                Ok(cell) => Some(cell.row),
                Err(err) => {
                    // Approximate hue or a color from another ramp: open
                    // without a row highlight.
                    tracing::debug!(message = "selector.locate_miss", error = %err);
                    None
                }
            };
        }

        let session = ShadeSession {
            hue,
            grid: ramp.to_grid(),
            snapshot: SelectionSnapshot::capture(colors),
        };
        self.state = SelectorState::ShadeOpen { target, session };
        tracing::debug!(
            message = "selector.open_shade",
            %target,
            %hue,
            %color,
            row = ?self.highlight.row,
            column = ?self.highlight.column
        );
        Ok(hue)
    }

    fn shade_open(&self, operation: &'static str) -> Result<(ColorTarget, &ShadeSession)> {
        match &self.state {
            SelectorState::ShadeOpen { target, session } => Ok((*target, session)),
            _ => Err(self.invalid(operation)),
        }
    }

    fn commit(
        &mut self,
        operation: &'static str,
        line: ShadeLine,
        position: usize,
        colors: &mut ColorState,
        book: &PaletteBook,
    ) -> Result<ShadeCommit> {
        let (target, session) = self.shade_open(operation)?;
        check_position(position)?;
        let palette = match line {
            ShadeLine::Row(row) => session.grid.row(row)?,
            ShadeLine::Column(col) => session.grid.column(col)?,
        };
        let color = palette[position];
        let palette_index = book.add_custom(palette);

        colors.set_selection(target, ColorModeSelection::palette(palette_index, position));
        colors.set_shade_override(target, color);
        self.highlight = match line {
            ShadeLine::Row(row) => ShadeHighlight {
                row: Some(row),
                column: None,
            },
            ShadeLine::Column(col) => ShadeHighlight {
                row: None,
                column: Some(col),
            },
        };
        tracing::debug!(
            message = "selector.commit",
            operation,
            %target,
            palette_index,
            position,
            %color
        );
        Ok(ShadeCommit {
            palette_index,
            position,
            color,
            line,
        })
    }

    /// Tap on cell (`row`, `col`) while browsing rows: commits the row.
    pub fn select_shade_in_row(
        &mut self,
        row: usize,
        col: usize,
        colors: &mut ColorState,
        book: &PaletteBook,
    ) -> Result<ShadeCommit> {
        self.commit("select_shade_in_row", ShadeLine::Row(row), col, colors, book)
    }

    /// Tap on cell (`row`, `col`) while browsing columns: commits the column.
    pub fn select_shade_in_column(
        &mut self,
        col: usize,
        row: usize,
        colors: &mut ColorState,
        book: &PaletteBook,
    ) -> Result<ShadeCommit> {
        self.commit("select_shade_in_column", ShadeLine::Column(col), row, colors, book)
    }

    /// Row radio button: commits the row at position 0.
    pub fn select_shade_row(
        &mut self,
        row: usize,
        colors: &mut ColorState,
        book: &PaletteBook,
    ) -> Result<ShadeCommit> {
        self.commit("select_shade_row", ShadeLine::Row(row), 0, colors, book)
    }

    /// Column radio button: commits the column at position 0.
    pub fn select_shade_column(
        &mut self,
        col: usize,
        colors: &mut ColorState,
        book: &PaletteBook,
    ) -> Result<ShadeCommit> {
        self.commit("select_shade_column", ShadeLine::Column(col), 0, colors, book)
    }

    /// ShadeOpen -> Closed (backdrop tap).
    ///
    /// A highlighted column is committed once more, keeping the target's
    /// position and whatever override the last tap set. Highlights are kept.
    pub fn dismiss_shade_selector(
        &mut self,
        colors: &mut ColorState,
        book: &PaletteBook,
    ) -> Result<Option<ShadeCommit>> {
        let (target, session) = self.shade_open("dismiss_shade_selector")?;
        let commit = match self.highlight.column {
            Some(col) => {
                let palette = session.grid.column(col)?;
                let position = colors.selection(target).position % palette.colors().len();
                let palette_index = book.add_custom(palette);
                colors.set_selection(target, ColorModeSelection::palette(palette_index, position));
                Some(ShadeCommit {
                    palette_index,
                    position,
                    color: palette[position],
                    line: ShadeLine::Column(col),
                })
            }
            None => None,
        };
        self.state = SelectorState::Closed;
        tracing::debug!(
            message = "selector.dismiss_shade",
            %target,
            committed = commit.is_some()
        );
        Ok(commit)
    }

    /// ShadeOpen -> MenuOpen (back arrow).
    ///
    /// Restores modes and selections from the snapshot and clears the
    /// override. Highlights stay as the session left them.
    pub fn close_shade_selector(&mut self, colors: &mut ColorState) -> Result<()> {
        let (target, session) = self.shade_open("close_shade_selector")?;
        session.snapshot.restore(colors);
        colors.clear_override();
        self.state = SelectorState::MenuOpen { target };
        tracing::debug!(message = "selector.close_shade", %target);
        Ok(())
    }

    /// Drop everything (working image changed).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
