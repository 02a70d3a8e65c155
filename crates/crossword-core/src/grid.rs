//! Fixed-size crossword board.

use std::{fmt, slice, str::FromStr};

use derive_more::{Display, Error};

use crate::{Cell, Coordinates};

/// Number of rows used when the caller does not choose one.
pub const DEFAULT_ROWS: usize = 20;
/// Number of columns used when the caller does not choose one.
pub const DEFAULT_COLS: usize = 20;

/// A fixed-size board of [`Cell`]s.
///
/// The dimensions are fixed at construction and every cell keeps the
/// coordinates it was created with. Out-of-bounds lookups return `None`
/// instead of failing; callers treat an absent cell the same as a blocked one.
///
/// Cells are stored column-major, so [`Grid::cells`] visits them in ascending
/// column order and, within a column, in ascending row order. Placement relies
/// on this order being stable to produce reproducible layouts.
///
/// # Examples
///
/// ```
/// use crossword_core::{Coordinates, Grid};
///
/// let mut grid = Grid::new(3, 3);
/// assert!(!grid.has_letters());
///
/// grid.place_letter(Coordinates::new(1, 1), 'x');
/// assert!(grid.is_active_at(Coordinates::new(1, 1)));
///
/// assert!(grid.select(Coordinates::new(1, 1)));
/// assert_eq!(grid.selected(), Some(Coordinates::new(1, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    selected: Option<Coordinates>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl Grid {
    /// Creates an empty grid with `rows` rows and `cols` columns.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or does not fit in an `i32`.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        let (Ok(rows_i), Ok(cols_i)) = (i32::try_from(rows), i32::try_from(cols)) else {
            panic!("grid dimensions {rows}x{cols} are too large");
        };
        let cells = (0..cols_i)
            .flat_map(|x| (0..rows_i).map(move |y| Cell::empty(Coordinates::new(x, y))))
            .collect();
        Self {
            rows,
            cols,
            cells,
            selected: None,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index_of(&self, coordinates: Coordinates) -> Option<usize> {
        let x = usize::try_from(coordinates.x).ok()?;
        let y = usize::try_from(coordinates.y).ok()?;
        (x < self.cols && y < self.rows).then_some(x * self.rows + y)
    }

    /// Returns the cell at `coordinates`, or `None` if it lies outside the grid.
    #[must_use]
    #[inline]
    pub fn get(&self, coordinates: Coordinates) -> Option<&Cell> {
        self.index_of(coordinates).map(|i| &self.cells[i])
    }

    fn get_mut(&mut self, coordinates: Coordinates) -> Option<&mut Cell> {
        self.index_of(coordinates).map(|i| &mut self.cells[i])
    }

    /// Returns an iterator over all cells in traversal order.
    ///
    /// The order is ascending column, then ascending row within each column.
    #[inline]
    pub fn cells(&self) -> slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Returns `true` if any cell holds a letter.
    #[must_use]
    pub fn has_letters(&self) -> bool {
        self.cells.iter().any(Cell::has_letter)
    }

    /// Returns `true` if the cell at `coordinates` exists and holds a letter.
    #[must_use]
    pub fn has_letter_at(&self, coordinates: Coordinates) -> bool {
        self.get(coordinates).is_some_and(Cell::has_letter)
    }

    /// Returns `true` if the cell at `coordinates` exists and is active.
    #[must_use]
    pub fn is_active_at(&self, coordinates: Coordinates) -> bool {
        self.get(coordinates).is_some_and(Cell::is_active)
    }

    /// Returns `true` if the cell to the left or right of `coordinates` holds a letter.
    #[must_use]
    pub fn has_letter_before_or_after(&self, coordinates: Coordinates) -> bool {
        self.has_letter_at(coordinates.left()) || self.has_letter_at(coordinates.right())
    }

    /// Returns `true` if the cell above or below `coordinates` holds a letter.
    #[must_use]
    pub fn has_letter_above_or_below(&self, coordinates: Coordinates) -> bool {
        self.has_letter_at(coordinates.above()) || self.has_letter_at(coordinates.below())
    }

    /// Writes `letter` into the cell at `coordinates` and marks it active.
    ///
    /// Returns `false` if the coordinates are outside the grid.
    pub fn place_letter(&mut self, coordinates: Coordinates, letter: char) -> bool {
        let Some(cell) = self.get_mut(coordinates) else {
            return false;
        };
        cell.activate(letter);
        true
    }

    /// Assigns a sequence number to the cell at `coordinates`.
    ///
    /// Returns `false` if the cell is absent or already numbered; existing
    /// numbers are never replaced.
    pub fn assign_number(&mut self, coordinates: Coordinates, number: u32) -> bool {
        self.get_mut(coordinates)
            .is_some_and(|cell| cell.set_number(number))
    }

    /// Returns the coordinates of the selected cell, if any.
    #[must_use]
    #[inline]
    pub fn selected(&self) -> Option<Coordinates> {
        self.selected
    }

    /// Returns `true` if a cell is selected.
    #[must_use]
    #[inline]
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Moves the selection to `coordinates`.
    ///
    /// Any previous selection is cleared first, so at most one cell is ever
    /// selected. Returns `false` and leaves the selection untouched if the
    /// coordinates are outside the grid.
    pub fn select(&mut self, coordinates: Coordinates) -> bool {
        if self.get(coordinates).is_none() {
            return false;
        }
        self.clear_selection();
        if let Some(cell) = self.get_mut(coordinates) {
            cell.set_selected(true);
        }
        self.selected = Some(coordinates);
        true
    }

    /// Moves the selection by `dx` columns and `dy` rows if the target is active.
    ///
    /// Returns `false` if nothing is selected or the target cell is absent or
    /// inactive; the selection is unchanged in that case.
    pub fn move_selection_by(&mut self, dx: i32, dy: i32) -> bool {
        let Some(current) = self.selected else {
            return false;
        };
        let target = current.offset(dx, dy);
        if !self.is_active_at(target) {
            return false;
        }
        self.select(target)
    }

    /// Clears the selection, if any.
    pub fn clear_selection(&mut self) {
        let Some(coordinates) = self.selected.take() else {
            return;
        };
        if let Some(cell) = self.get_mut(coordinates) {
            cell.set_selected(false);
        }
    }

    /// Overwrites the letter of the selected cell.
    ///
    /// Only active cells can be edited. Returns `false` if nothing is selected
    /// or the selected cell is inactive.
    pub fn write_selected_letter(&mut self, letter: char) -> bool {
        let Some(coordinates) = self.selected else {
            return false;
        };
        match self.get_mut(coordinates) {
            Some(cell) if cell.is_active() => {
                cell.set_letter(letter);
                true
            }
            _ => false,
        }
    }

    /// Returns the minimal rectangle containing every lettered cell.
    ///
    /// Returns `None` if the grid holds no letters.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.cells
            .iter()
            .filter(|cell| cell.has_letter())
            .map(Cell::coordinates)
            .fold(None, |bounds: Option<Bounds>, pos| {
                Some(match bounds {
                    None => Bounds { min: pos, max: pos },
                    Some(Bounds { min, max }) => Bounds {
                        min: Coordinates::new(min.x.min(pos.x), min.y.min(pos.y)),
                        max: Coordinates::new(max.x.max(pos.x), max.y.max(pos.y)),
                    },
                })
            })
    }

    /// Returns a new grid cropped to [`Grid::bounds`].
    ///
    /// Letters, active flags and numbers are copied to their shifted
    /// coordinates. The selection is not carried over. Returns `None` if the
    /// grid holds no letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_core::{Coordinates, Grid};
    ///
    /// let mut grid = Grid::new(20, 20);
    /// grid.place_letter(Coordinates::new(10, 8), 'h');
    /// grid.place_letter(Coordinates::new(10, 9), 'i');
    ///
    /// let cropped = grid.cropped().expect("grid has letters");
    /// assert_eq!((cropped.cols(), cropped.rows()), (1, 2));
    /// assert!(cropped.get(Coordinates::new(0, 1)).is_some_and(|c| c.matches_letter('i')));
    /// ```
    #[must_use]
    pub fn cropped(&self) -> Option<Grid> {
        let bounds = self.bounds()?;
        let mut cropped = Grid::new(bounds.height(), bounds.width());
        for cell in self.cells.iter().filter(|cell| bounds.contains(cell.coordinates())) {
            let target = cell
                .coordinates()
                .offset(-bounds.min.x, -bounds.min.y);
            if let Some(dst) = cropped.get_mut(target) {
                dst.copy_content_from(cell);
            }
        }
        Some(cropped)
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

/// Renders one line per row: `[A]` for a lettered cell, `[ ]` for an empty one.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.cols {
                match self.cells[x * self.rows + y].letter() {
                    Some(letter) => write!(f, "[{}]", letter.to_uppercase())?,
                    None => f.write_str("[ ]")?,
                }
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`Grid`] from text.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// The text contains no non-blank lines.
    #[display("grid text contains no rows")]
    Empty,
    /// A row has a different number of cells than the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of cells in the first row.
        expected: usize,
        /// Number of cells in the offending row.
        found: usize,
    },
}

/// Parses a text picture of a board.
///
/// Each non-blank line is a row. `.` and `_` are empty cells; any other
/// non-whitespace character becomes an active cell holding that letter.
/// Whitespace inside a line is ignored, so rows may be grouped for
/// readability.
impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<Vec<char>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect())
            .collect();
        let Some(first) = lines.first() else {
            return Err(GridParseError::Empty);
        };
        let cols = first.len();
        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(GridParseError::RaggedRow {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        let rows = lines.len();
        let mut grid = Grid::new(rows, cols);
        for (y, line) in lines.iter().enumerate() {
            for (x, &ch) in line.iter().enumerate() {
                if ch != '.' && ch != '_' {
                    grid.cells[x * rows + y].activate(ch);
                }
            }
        }
        Ok(grid)
    }
}

/// Inclusive rectangle on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Top-left corner.
    pub min: Coordinates,
    /// Bottom-right corner.
    pub max: Coordinates,
}

impl Bounds {
    /// Returns the number of columns covered.
    #[must_use]
    pub fn width(&self) -> usize {
        self.max.x.abs_diff(self.min.x) as usize + 1
    }

    /// Returns the number of rows covered.
    #[must_use]
    pub fn height(&self) -> usize {
        self.max.y.abs_diff(self.min.y) as usize + 1
    }

    /// Returns `true` if `coordinates` lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, coordinates: Coordinates) -> bool {
        (self.min.x..=self.max.x).contains(&coordinates.x)
            && (self.min.y..=self.max.y).contains(&coordinates.y)
    }
}
