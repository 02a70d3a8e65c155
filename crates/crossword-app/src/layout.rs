//! Building and printing a finished layout.

use std::fmt;

use crossword_builder::{CrosswordBuilder, PlacedWord, PlacementError};
use crossword_core::{Grid, Orientation};

use crate::Settings;

/// A built crossword: the grid, the words on it, and the words left out.
#[derive(Debug, Clone)]
pub struct Layout {
    /// The grid, cropped when [`Settings::crop`] is set.
    pub grid: Grid,
    /// Placed words, with coordinates relative to [`Layout::grid`].
    pub words: Vec<PlacedWord>,
    /// Words the engine rejected, in input order.
    pub rejected: Vec<(String, PlacementError)>,
}

impl Layout {
    /// Places `words` in order on a grid of the configured size.
    ///
    /// Rejected words are recorded and skipped; they never stop the build.
    #[must_use]
    pub fn build<S>(settings: &Settings, words: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let mut builder = CrosswordBuilder::new(settings.rows, settings.cols);
        let mut rejected = Vec::new();
        for word in words {
            let word = word.as_ref();
            if let Err(err) = builder.add_word(word) {
                log::info!("skipped {word:?}: {err}");
                rejected.push((word.to_owned(), err));
            }
        }

        let (grid, words) = builder.into_parts();
        let (grid, words) = match (settings.crop, grid.bounds(), grid.cropped()) {
            (true, Some(bounds), Some(cropped)) => {
                let words = words
                    .iter()
                    .map(|word| word.translated(bounds.min))
                    .collect();
                (cropped, words)
            }
            _ => (grid, words),
        };
        log::debug!(
            "built {}x{} layout with {} words",
            grid.cols(),
            grid.rows(),
            words.len()
        );

        Self {
            grid,
            words,
            rejected,
        }
    }

    /// Returns placed words running in `orientation`, ordered by number.
    pub fn words_in(&self, orientation: Orientation) -> impl Iterator<Item = &PlacedWord> + '_ {
        let mut words = self
            .words
            .iter()
            .filter(|word| word.orientation == orientation)
            .collect::<Vec<_>>();
        words.sort_by_key(|word| word.number);
        words.into_iter()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.grid)?;
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            writeln!(f)?;
            writeln!(f, "{orientation}:")?;
            for word in self.words_in(orientation) {
                writeln!(f, "  {}. {} {}", word.number, word.text, word.start)?;
            }
        }
        if !self.rejected.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped:")?;
            for (word, err) in &self.rejected {
                writeln!(f, "  {word} ({err})")?;
            }
        }
        Ok(())
    }
}
