#![forbid(unsafe_code)]

//! Shade ramps and their 8x8 grid view.
//!
//! Every [`BaseHue`] owns one [`ShadeRamp`]: 64 colors ordered from darkest
//! (index 0) to lightest (index 63) by relative luminance. The selector UI
//! shows a ramp as a [`ShadeGrid`], where `grid[row][col] = ramp[row * 8 + col]`.
//! A row is a lightness band; a column is the same offset within each band.
//!
//! Rows and columns can be lifted out as 8-color [`Palette`]s, which is how
//! shade selections become custom palettes.

use crate::color::Color;
use crate::error::{IndexKind, Result, TintError};
use crate::hue::{BaseHue, HUE_COUNT};
use crate::palette::{PALETTE_LEN, Palette};
use crate::shade_table;

/// Number of shades in a ramp.
pub const RAMP_LEN: usize = 64;
/// Rows (and columns) in a shade grid.
pub const GRID_SIZE: usize = 8;

/// The fixed shade sequence for one hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeRamp {
    hue: BaseHue,
    shades: [Color; RAMP_LEN],
}

impl ShadeRamp {
    const fn from_table(hue: BaseHue, table: &[u32; RAMP_LEN]) -> Self {
        let mut shades = [Color::BLACK; RAMP_LEN];
        let mut i = 0;
        while i < RAMP_LEN {
            shades[i] = Color::hex(table[i]);
            i += 1;
        }
        Self { hue, shades }
    }

    #[must_use]
    pub const fn hue(&self) -> BaseHue {
        self.hue
    }

    #[must_use]
    pub const fn shades(&self) -> &[Color; RAMP_LEN] {
        &self.shades
    }

    /// The shade at a flat index.
    pub fn get(&self, index: usize) -> Result<Color> {
        self.shades
            .get(index)
            .copied()
            .ok_or_else(|| TintError::out_of_range(IndexKind::Position, index, RAMP_LEN))
    }

    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.shades.contains(&color)
    }

    /// Grid cell of the first occurrence of `color`.
    pub fn locate(&self, color: Color) -> Result<GridCell> {
        self.shades
            .iter()
            .position(|&shade| shade == color)
            .map(GridCell::from_index)
            .ok_or(TintError::ColorNotInRamp {
                color,
                hue: self.hue,
            })
    }

    #[must_use]
    pub fn to_grid(&self) -> ShadeGrid {
        let mut cells = [[Color::BLACK; GRID_SIZE]; GRID_SIZE];
        for (index, &shade) in self.shades.iter().enumerate() {
            let cell = GridCell::from_index(index);
            cells[cell.row][cell.col] = shade;
        }
        ShadeGrid {
            hue: self.hue,
            cells,
        }
    }
}

static RAMPS: [ShadeRamp; HUE_COUNT] = [
    ShadeRamp::from_table(BaseHue::Red, &shade_table::RED),
    ShadeRamp::from_table(BaseHue::Orange, &shade_table::ORANGE),
    ShadeRamp::from_table(BaseHue::Yellow, &shade_table::YELLOW),
    ShadeRamp::from_table(BaseHue::Green, &shade_table::GREEN),
    ShadeRamp::from_table(BaseHue::Blue, &shade_table::BLUE),
    ShadeRamp::from_table(BaseHue::Purple, &shade_table::PURPLE),
    ShadeRamp::from_table(BaseHue::White, &shade_table::WHITE),
    ShadeRamp::from_table(BaseHue::Black, &shade_table::BLACK),
];

/// The shade ramp owned by `hue`.
#[must_use]
pub fn shade_ramp(hue: BaseHue) -> &'static ShadeRamp {
    &RAMPS[hue.index()]
}

/// A row/column address inside a [`ShadeGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell for a flat ramp index (`index / 8`, `index % 8`).
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        }
    }

    /// Flat ramp index (`row * 8 + col`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }
}

/// An 8x8 read-only view of a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeGrid {
    hue: BaseHue,
    cells: [[Color; GRID_SIZE]; GRID_SIZE],
}

impl ShadeGrid {
    #[must_use]
    pub const fn hue(&self) -> BaseHue {
        self.hue
    }

    #[must_use]
    pub const fn rows(&self) -> &[[Color; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    pub fn cell(&self, cell: GridCell) -> Result<Color> {
        check_line(IndexKind::Row, cell.row)?;
        check_line(IndexKind::Column, cell.col)?;
        Ok(self.cells[cell.row][cell.col])
    }

    /// The 8 colors of `row`, left to right.
    pub fn row(&self, row: usize) -> Result<Palette> {
        check_line(IndexKind::Row, row)?;
        Ok(Palette::new(self.cells[row]))
    }

    /// The 8 colors of `col`, top to bottom.
    pub fn column(&self, col: usize) -> Result<Palette> {
        check_line(IndexKind::Column, col)?;
        let mut colors = [Color::BLACK; PALETTE_LEN];
        for (slot, row) in colors.iter_mut().zip(self.cells.iter()) {
            *slot = row[col];
        }
        Ok(Palette::new(colors))
    }
}

fn check_line(kind: IndexKind, index: usize) -> Result<()> {
    if index < GRID_SIZE {
        Ok(())
    } else {
        Err(TintError::out_of_range(kind, index, GRID_SIZE))
    }
}

/// Reshape a ramp into its grid.
#[must_use]
pub fn to_grid(ramp: &ShadeRamp) -> ShadeGrid {
    ramp.to_grid()
}

/// First grid cell holding `color`, or [`TintError::ColorNotInRamp`].
pub fn locate(ramp: &ShadeRamp, color: Color) -> Result<GridCell> {
    ramp.locate(color)
}

pub fn extract_row(grid: &ShadeGrid, row: usize) -> Result<Palette> {
    grid.row(row)
}

pub fn extract_column(grid: &ShadeGrid, col: usize) -> Result<Palette> {
    grid.column(col)
}
