//! Application settings.

use crossword_core::{DEFAULT_COLS, DEFAULT_ROWS};

/// Options controlling how a layout is built and presented.
///
/// Command-line flags override these defaults field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Rows of the build grid.
    pub rows: usize,
    /// Columns of the build grid.
    pub cols: usize,
    /// Crop the grid to its lettered area before presenting it.
    pub crop: bool,
    /// Shuffle the word list with this seed before placing it.
    pub shuffle_seed: Option<u64>,
    /// Start an interactive session after building.
    pub play: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            crop: true,
            shuffle_seed: None,
            play: false,
        }
    }
}
