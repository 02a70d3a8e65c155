use crossword_core::{Coordinates, Grid, Orientation, letters_eq};

/// Outcome of [`CrosswordBuilder::add_word`](crate::CrosswordBuilder::add_word).
pub type PlacementResult = Result<Placement, PlacementError>;

/// A successfully committed placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Coordinates of the word's first letter.
    pub start: Coordinates,
    /// Direction the word runs in.
    pub orientation: Orientation,
    /// Sequence number of the start cell.
    ///
    /// This is a fresh number unless another word already started on the same
    /// cell, in which case the existing number is shared.
    pub number: u32,
}

/// Reasons a word was not placed.
///
/// None of these leave partial writes behind: the grid is exactly as it was
/// before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// The word has no letters.
    #[display("word is empty")]
    EmptyWord,
    /// The first word is longer than the grid is tall.
    #[display("word does not fit inside the grid")]
    OutOfBounds,
    /// No intersection candidate and offset produced a valid span.
    #[display("no valid intersection for word")]
    NoFit,
}

/// A word committed to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// The word as supplied, case preserved.
    pub text: String,
    /// Coordinates of the first letter.
    pub start: Coordinates,
    /// Direction the word runs in.
    pub orientation: Orientation,
    /// Sequence number shown on the start cell.
    pub number: u32,
}

impl PlacedWord {
    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the word has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the coordinates of every cell the word occupies, in reading order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinates> + '_ {
        span(self.start, self.orientation).take(self.len())
    }

    /// Returns a copy re-based so that `origin` becomes `(0, 0)`.
    ///
    /// Use with [`Grid::bounds`] to keep word records in sync with a
    /// [cropped](Grid::cropped) grid.
    #[must_use]
    pub fn translated(&self, origin: Coordinates) -> Self {
        Self {
            start: self.start.offset(-origin.x, -origin.y),
            ..self.clone()
        }
    }
}

/// Why a candidate span was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub(crate) enum SpanRejection {
    #[display("cell {at} is outside the grid")]
    OutOfBounds { at: Coordinates },
    #[display("cell {at} holds {found:?}, required {expected:?}")]
    LetterMismatch {
        at: Coordinates,
        expected: char,
        found: char,
    },
    #[display("cell {at} has a parallel neighbor")]
    ParallelNeighbor { at: Coordinates },
}

/// Iterates over the cells of a span starting at `start`.
pub(crate) fn span(
    start: Coordinates,
    orientation: Orientation,
) -> impl Iterator<Item = Coordinates> {
    (0..).map(move |i| start.step(orientation, i))
}

/// Checks whether `letters` can be written from `start` along `orientation`.
///
/// Every cell must be inside the grid. An occupied cell must already hold the
/// same letter (a crossing); an empty cell must have no letters on either side
/// across the word's direction, so the word never runs alongside another one.
pub(crate) fn check_span(
    grid: &Grid,
    start: Coordinates,
    orientation: Orientation,
    letters: &[char],
) -> Result<(), SpanRejection> {
    for (at, &expected) in span(start, orientation).zip(letters) {
        let Some(cell) = grid.get(at) else {
            return Err(SpanRejection::OutOfBounds { at });
        };
        match cell.letter() {
            Some(found) if !letters_eq(found, expected) => {
                return Err(SpanRejection::LetterMismatch {
                    at,
                    expected,
                    found,
                });
            }
            Some(_) => {}
            None => {
                let crowded = match orientation {
                    Orientation::Horizontal => grid.has_letter_above_or_below(at),
                    Orientation::Vertical => grid.has_letter_before_or_after(at),
                };
                if crowded {
                    return Err(SpanRejection::ParallelNeighbor { at });
                }
            }
        }
    }
    Ok(())
}
