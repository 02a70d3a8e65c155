//! Core data structures for crossword applications.
//!
//! This crate provides the board model shared by the placement engine and the
//! interactive navigation engine.
//!
//! # Overview
//!
//! - [`coordinates`]: Board coordinates (x is the column, y is the row) and the
//!   [`Orientation`] of a word span.
//! - [`cell`]: A single square of the board ([`Cell`]).
//! - [`grid`]: A fixed-size board ([`Grid`]) with bounds-checked access,
//!   column-major traversal, single-cell selection and cropping.
//!
//! # Examples
//!
//! ```
//! use crossword_core::{Coordinates, Grid};
//!
//! let grid: Grid = "
//!     .c.
//!     .a.
//!     .t.
//! "
//! .parse()?;
//!
//! assert_eq!(grid.get(Coordinates::new(1, 0)).and_then(|c| c.letter()), Some('c'));
//! assert!(grid.get(Coordinates::new(3, 0)).is_none()); // out of bounds is absent
//! # Ok::<(), crossword_core::GridParseError>(())
//! ```

pub mod cell;
pub mod coordinates;
pub mod grid;

pub use self::{
    cell::Cell,
    coordinates::{Coordinates, Orientation},
    grid::{Bounds, DEFAULT_COLS, DEFAULT_ROWS, Grid, GridParseError},
};

/// Returns `true` if two letters are the same ignoring case.
///
/// Comparison uses full Unicode lowercase mapping, so it also works for
/// non-Latin alphabets.
///
/// # Examples
///
/// ```
/// use crossword_core::letters_eq;
///
/// assert!(letters_eq('a', 'A'));
/// assert!(letters_eq('Ж', 'ж'));
/// assert!(!letters_eq('a', 'b'));
/// ```
#[must_use]
pub fn letters_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
