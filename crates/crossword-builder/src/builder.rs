use crossword_core::{
    Cell, Coordinates, DEFAULT_COLS, DEFAULT_ROWS, Grid, Orientation, letters_eq,
};
use tinyvec::TinyVec;

use crate::{PlacedWord, Placement, PlacementError, PlacementResult, placement};

/// Builds a crossword layout one word at a time.
///
/// The first word goes vertically through the center column, centered on the
/// middle row. Each later word must cross an active cell holding one of its
/// letters:
///
/// 1. Active cells whose letter occurs in the word are collected in grid
///    traversal order (ascending column, then ascending row).
/// 2. For each of them, every index of that letter in the word is tried as the
///    crossing offset, in ascending order.
/// 3. The word runs horizontally if the crossing cell has no letter to its
///    left or right, otherwise vertically if it has none above or below.
/// 4. The first span that passes validation is committed.
///
/// Validation is read-only and runs to completion before anything is written,
/// so a rejected word leaves the grid untouched.
///
/// # Examples
///
/// ```
/// use crossword_builder::{CrosswordBuilder, PlacementError};
///
/// let mut builder = CrosswordBuilder::default();
/// builder.add_word("crossword")?;
/// builder.add_word("word")?;
///
/// // Nothing in "xyz" appears on the board yet.
/// assert_eq!(builder.add_word("xyz"), Err(PlacementError::NoFit));
/// assert_eq!(builder.words().len(), 2);
/// # Ok::<(), PlacementError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CrosswordBuilder {
    grid: Grid,
    words_counter: u32,
    words: Vec<PlacedWord>,
}

impl Default for CrosswordBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl CrosswordBuilder {
    /// Creates a builder over an empty grid of the given size.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Grid::new`].
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            words_counter: 0,
            words: Vec::new(),
        }
    }

    /// Returns the grid built so far.
    #[must_use]
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the committed words in commit order.
    #[must_use]
    #[inline]
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Consumes the builder and returns the grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Consumes the builder and returns the grid with the committed words.
    #[must_use]
    pub fn into_parts(self) -> (Grid, Vec<PlacedWord>) {
        (self.grid, self.words)
    }

    /// Tries to place `word` on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::EmptyWord`] if `word` has no letters,
    /// [`PlacementError::OutOfBounds`] if it is the first word and is taller
    /// than the grid, and [`PlacementError::NoFit`] if no crossing produces a
    /// valid span. The grid is unchanged in every error case.
    pub fn add_word(&mut self, word: &str) -> PlacementResult {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return Err(PlacementError::EmptyWord);
        }

        let (start, orientation) = if self.grid.has_letters() {
            self.find_crossing(word, &letters)
                .ok_or(PlacementError::NoFit)?
        } else {
            self.center_start(word, &letters)?
        };

        let number = self.commit(&letters, start, orientation);
        log::debug!("placed {word:?} at {start} {orientation} as #{number}");
        self.words.push(PlacedWord {
            text: word.to_owned(),
            start,
            orientation,
            number,
        });
        Ok(Placement {
            start,
            orientation,
            number,
        })
    }

    fn center_start(
        &self,
        word: &str,
        letters: &[char],
    ) -> Result<(Coordinates, Orientation), PlacementError> {
        let rows = self.grid.rows();
        let Some(free_rows) = rows.checked_sub(letters.len()) else {
            log::debug!("{word:?} is longer than the grid height {rows}");
            return Err(PlacementError::OutOfBounds);
        };
        let (Ok(x), Ok(y)) = (
            i32::try_from(self.grid.cols() / 2),
            i32::try_from(free_rows / 2),
        ) else {
            return Err(PlacementError::OutOfBounds);
        };
        Ok((Coordinates::new(x, y), Orientation::Vertical))
    }

    fn find_crossing(&self, word: &str, letters: &[char]) -> Option<(Coordinates, Orientation)> {
        let candidates = self.intersection_candidates(letters);
        log::debug!("intersection candidates for {word:?}: {candidates:?}");
        candidates
            .into_iter()
            .find_map(|crossing| self.try_crossing(word, letters, crossing))
    }

    fn intersection_candidates(&self, letters: &[char]) -> Vec<Coordinates> {
        self.grid
            .cells()
            .filter(|cell| cell.is_active() && letters.iter().any(|&l| cell.matches_letter(l)))
            .map(Cell::coordinates)
            .collect()
    }

    fn try_crossing(
        &self,
        word: &str,
        letters: &[char],
        crossing: Coordinates,
    ) -> Option<(Coordinates, Orientation)> {
        let letter = self.grid.get(crossing)?.letter()?;
        for offset in letter_offsets(letters, letter) {
            let orientation = if !self.grid.has_letter_before_or_after(crossing) {
                Orientation::Horizontal
            } else if !self.grid.has_letter_above_or_below(crossing) {
                Orientation::Vertical
            } else {
                log::trace!("{crossing} is crossed in both directions");
                continue;
            };
            let Ok(offset) = i32::try_from(offset) else {
                continue;
            };
            let start = crossing.step(orientation, -offset);
            match placement::check_span(&self.grid, start, orientation, letters) {
                Ok(()) => return Some((start, orientation)),
                Err(rejection) => {
                    log::trace!("{word:?} does not fit at {start} {orientation}: {rejection}");
                }
            }
        }
        None
    }

    fn commit(&mut self, letters: &[char], start: Coordinates, orientation: Orientation) -> u32 {
        for (at, &letter) in placement::span(start, orientation).zip(letters) {
            let placed = self.grid.place_letter(at, letter);
            debug_assert!(placed, "validated span left the grid at {at}");
        }
        if let Some(number) = self.grid.get(start).and_then(Cell::number) {
            return number;
        }
        self.words_counter += 1;
        self.grid.assign_number(start, self.words_counter);
        self.words_counter
    }
}

fn letter_offsets(letters: &[char], letter: char) -> TinyVec<[usize; 16]> {
    letters
        .iter()
        .enumerate()
        .filter(|&(_, &l)| letters_eq(l, letter))
        .map(|(i, _)| i)
        .collect()
}
