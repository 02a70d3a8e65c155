//! Crossword layout construction.
//!
//! This crate places words onto a [`Grid`] so that every word after the first
//! crosses an already placed word at a matching letter.
//!
//! # Overview
//!
//! - [`CrosswordBuilder`]: the placement engine. Feed it words one at a time
//!   with [`CrosswordBuilder::add_word`]; later calls see the cumulative grid.
//! - [`Placement`] / [`PlacementError`]: the outcome of a single attempt.
//!   A rejected word is a normal outcome and never modifies the grid.
//! - [`PlacedWord`]: record of a committed word (text, start, orientation and
//!   sequence number), used to list the words next to the board.
//!
//! Placement is first-fit: candidates are tried in a fixed order and the first
//! valid one is committed. The order in which words are supplied therefore
//! shapes the final layout.
//!
//! [`Grid`]: crossword_core::Grid
//!
//! # Examples
//!
//! ```
//! use crossword_builder::CrosswordBuilder;
//! use crossword_core::{Coordinates, Orientation};
//!
//! let mut builder = CrosswordBuilder::new(20, 20);
//!
//! let first = builder.add_word("cat")?;
//! assert_eq!(first.start, Coordinates::new(10, 8));
//! assert_eq!(first.orientation, Orientation::Vertical);
//!
//! let second = builder.add_word("tan")?;
//! assert_eq!(second.orientation, Orientation::Horizontal);
//! # Ok::<(), crossword_builder::PlacementError>(())
//! ```

pub use self::{
    builder::CrosswordBuilder,
    placement::{PlacedWord, Placement, PlacementError, PlacementResult},
};

mod builder;
mod placement;
