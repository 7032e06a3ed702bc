#![forbid(unsafe_code)]

//! The palette book: built-in palettes plus the append-only custom list.
//!
//! Custom palettes are created whenever a shade row or column is committed.
//! The list is shared between the selector, the menu that displays it, and
//! gallery restoration, so it sits behind [`CustomPaletteStore`] and is
//! injected into [`PaletteBook`].
//!
//! | Store | Read | Append | Use case |
//! |-------|------|--------|----------|
//! | [`ArcSwapPaletteStore`] | wait-free | read-copy-update | **Production default** |
//! | [`MutexPaletteStore`] | exclusive lock | exclusive lock | In-memory fake for tests |
//!
//! # Index stability
//!
//! An index handed out by [`PaletteBook::add_custom`] is valid forever after
//! and never reassigned. Appends are linearized: every append observes the
//! list produced by all earlier appends, so two racing taps never compute the
//! same next index.
//!
//! # Example
//!
//! ```
//! use tint_core::palette::BUILTIN_COUNT;
//! use tint_core::store::PaletteBook;
//!
//! let book = PaletteBook::new();
//! let row = *book.builtin(2).unwrap();
//! let index = book.add_custom(row);
//! assert_eq!(index, BUILTIN_COUNT);
//! assert_eq!(book.resolve(index).unwrap(), row);
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;

use crate::error::{IndexKind, Result, TintError};
use crate::palette::{self, BUILTIN_COUNT, Palette};

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Append-only storage for custom palettes.
///
/// Implementations must guarantee:
/// - `append` returns the slot the palette landed in, equal to the number of
///   palettes appended before it (linearizable).
/// - A slot, once returned, keeps its palette for the store's lifetime.
/// - `get` and `len` never observe a partially applied append.
pub trait CustomPaletteStore: Send + Sync {
    /// Append a palette and return its zero-based slot.
    fn append(&self, palette: Palette) -> usize;

    /// The palette in `slot`, if it has been created.
    fn get(&self, slot: usize) -> Option<Palette>;

    /// Number of custom palettes created so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the whole list, in slot order.
    fn snapshot(&self) -> Vec<Palette>;
}

// ---------------------------------------------------------------------------
// ArcSwapPaletteStore
// ---------------------------------------------------------------------------

/// Wait-free reads via [`arc_swap::ArcSwap`]; appends use
/// [`ArcSwap::rcu`], which retries until its copy-and-push lands on the
/// current list.
pub struct ArcSwapPaletteStore {
    inner: ArcSwap<Vec<Palette>>,
}

impl std::fmt::Debug for ArcSwapPaletteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArcSwapPaletteStore")
            .field("len", &self.len())
            .finish()
    }
}

impl ArcSwapPaletteStore {
    #[must_use]
    pub fn new() -> Self {
        Self::from_palettes(Vec::new())
    }

    /// Seed the store, e.g. from palettes restored at startup.
    #[must_use]
    pub fn from_palettes(palettes: Vec<Palette>) -> Self {
        Self {
            inner: ArcSwap::from_pointee(palettes),
        }
    }
}

impl Default for ArcSwapPaletteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomPaletteStore for ArcSwapPaletteStore {
    fn append(&self, palette: Palette) -> usize {
        let previous = self.inner.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend_from_slice(current);
            next.push(palette);
            next
        });
        previous.len()
    }

    #[inline]
    fn get(&self, slot: usize) -> Option<Palette> {
        self.inner.load().get(slot).copied()
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.load().len()
    }

    fn snapshot(&self) -> Vec<Palette> {
        Vec::clone(&self.inner.load())
    }
}

// ---------------------------------------------------------------------------
// MutexPaletteStore
// ---------------------------------------------------------------------------

/// Lock-based store. Behaves identically to [`ArcSwapPaletteStore`]; used
/// as the in-memory fake in tests and for comparison.
#[derive(Debug, Default)]
pub struct MutexPaletteStore {
    inner: Mutex<Vec<Palette>>,
}

impl MutexPaletteStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Palette>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CustomPaletteStore for MutexPaletteStore {
    fn append(&self, palette: Palette) -> usize {
        let mut list = self.lock();
        list.push(palette);
        list.len() - 1
    }

    fn get(&self, slot: usize) -> Option<Palette> {
        self.lock().get(slot).copied()
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn snapshot(&self) -> Vec<Palette> {
        self.lock().clone()
    }
}

// ---------------------------------------------------------------------------
// PaletteBook
// ---------------------------------------------------------------------------

/// Unified palette index space: `0..8` are built-ins, `8..` are custom.
///
/// Cloning a book shares its custom store.
#[derive(Clone)]
pub struct PaletteBook {
    customs: Arc<dyn CustomPaletteStore>,
}

impl std::fmt::Debug for PaletteBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaletteBook")
            .field("custom_count", &self.customs.len())
            .finish()
    }
}

impl Default for PaletteBook {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteBook {
    /// A book backed by a fresh [`ArcSwapPaletteStore`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(Arc::new(ArcSwapPaletteStore::new()))
    }

    #[must_use]
    pub fn with_store(customs: Arc<dyn CustomPaletteStore>) -> Self {
        Self { customs }
    }

    /// Built-in palette `index`.
    pub fn builtin(&self, index: usize) -> Result<&'static Palette> {
        palette::builtin(index)
    }

    /// Append a custom palette and return its stable index
    /// (`8 + previous custom count`). Never de-duplicates.
    pub fn add_custom(&self, palette: Palette) -> usize {
        let index = BUILTIN_COUNT + self.customs.append(palette);
        tracing::debug!(message = "palette.add_custom", index, palette = %palette);
        index
    }

    /// Built-in for `index < 8`, otherwise the custom palette at `index - 8`.
    pub fn resolve(&self, index: usize) -> Result<Palette> {
        if index < BUILTIN_COUNT {
            return palette::builtin(index).copied();
        }
        self.customs
            .get(index - BUILTIN_COUNT)
            .ok_or_else(|| TintError::out_of_range(IndexKind::Palette, index, self.palette_count()))
    }

    #[must_use]
    pub fn custom_count(&self) -> usize {
        self.customs.len()
    }

    /// Built-in plus custom palettes.
    #[must_use]
    pub fn palette_count(&self) -> usize {
        BUILTIN_COUNT + self.customs.len()
    }

    #[must_use]
    pub fn is_custom(index: usize) -> bool {
        index >= BUILTIN_COUNT
    }

    /// First index holding a palette equal to `palette`, built-ins first.
    #[must_use]
    pub fn find(&self, palette: &Palette) -> Option<usize> {
        if let Some(index) = palette::builtins().iter().position(|p| p == palette) {
            return Some(index);
        }
        self.customs
            .snapshot()
            .iter()
            .position(|p| p == palette)
            .map(|slot| BUILTIN_COUNT + slot)
    }

    /// Copy of the custom list in index order (index `8 + i` is element `i`).
    #[must_use]
    pub fn customs(&self) -> Vec<Palette> {
        self.customs.snapshot()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
