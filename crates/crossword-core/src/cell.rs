//! A single square of the board.

use crate::{Coordinates, letters_eq};

/// A square of the crossword board.
///
/// Cells are owned by a [`Grid`](crate::Grid) and are only mutated through it,
/// which keeps the board-wide invariants in one place:
///
/// - a cell without a letter is never active,
/// - at most one cell of a grid is selected,
/// - a number, once assigned, is never replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    letter: Option<char>,
    active: bool,
    selected: bool,
    number: Option<u32>,
    coordinates: Coordinates,
}

impl Cell {
    pub(crate) const fn empty(coordinates: Coordinates) -> Self {
        Self {
            letter: None,
            active: false,
            selected: false,
            number: None,
            coordinates,
        }
    }

    /// Returns the stored letter, preserving its original case.
    #[must_use]
    #[inline]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Returns `true` if the cell holds a letter.
    #[must_use]
    #[inline]
    pub fn has_letter(&self) -> bool {
        self.letter.is_some()
    }

    /// Returns `true` if the cell is part of at least one committed word.
    #[must_use]
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` if this is the grid's selected cell.
    #[must_use]
    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Returns the sequence number of the word starting here, if any.
    #[must_use]
    #[inline]
    pub fn number(&self) -> Option<u32> {
        self.number
    }

    /// Returns the position of this cell in its grid.
    #[must_use]
    #[inline]
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Returns `true` if the cell holds `letter`, ignoring case.
    #[must_use]
    pub fn matches_letter(&self, letter: char) -> bool {
        self.letter.is_some_and(|own| letters_eq(own, letter))
    }

    pub(crate) fn set_letter(&mut self, letter: char) {
        self.letter = Some(letter);
    }

    pub(crate) fn activate(&mut self, letter: char) {
        self.letter = Some(letter);
        self.active = true;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn set_number(&mut self, number: u32) -> bool {
        if self.number.is_some() {
            return false;
        }
        self.number = Some(number);
        true
    }

    pub(crate) fn copy_content_from(&mut self, other: &Cell) {
        self.letter = other.letter;
        self.active = other.active;
        self.number = other.number;
    }
}
