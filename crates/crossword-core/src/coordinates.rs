//! Board coordinates and word orientation.

use derive_more::Display;

/// A position on the board.
///
/// `x` is the column and `y` is the row, both counted from the top-left corner.
/// Coordinates are signed so that spans starting before the board edge can be
/// expressed; looking them up in a [`Grid`](crate::Grid) simply yields nothing.
///
/// # Examples
///
/// ```
/// use crossword_core::{Coordinates, Orientation};
///
/// let pos = Coordinates::new(10, 8);
/// assert_eq!(pos.below(), Coordinates::new(10, 9));
/// assert_eq!(pos.step(Orientation::Horizontal, 2), Coordinates::new(12, 8));
/// assert_eq!(pos.to_string(), "(10, 8)");
/// ```
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("({x}, {y})")]
pub struct Coordinates {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Coordinates {
    /// Creates coordinates from a column and a row.
    #[must_use]
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the coordinates shifted by `dx` columns and `dy` rows.
    #[must_use]
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the coordinates one column to the left.
    #[must_use]
    #[inline]
    pub const fn left(self) -> Self {
        self.offset(-1, 0)
    }

    /// Returns the coordinates one column to the right.
    #[must_use]
    #[inline]
    pub const fn right(self) -> Self {
        self.offset(1, 0)
    }

    /// Returns the coordinates one row up.
    #[must_use]
    #[inline]
    pub const fn above(self) -> Self {
        self.offset(0, -1)
    }

    /// Returns the coordinates one row down.
    #[must_use]
    #[inline]
    pub const fn below(self) -> Self {
        self.offset(0, 1)
    }

    /// Returns the coordinates `n` cells further along `orientation`.
    ///
    /// Negative `n` walks backwards, which is how a span start is derived from
    /// an intersection and an offset.
    #[must_use]
    #[inline]
    pub const fn step(self, orientation: Orientation, n: i32) -> Self {
        match orientation {
            Orientation::Horizontal => self.offset(n, 0),
            Orientation::Vertical => self.offset(0, n),
        }
    }
}

/// Direction in which a word runs across the board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors() {
        let pos = Coordinates::new(0, 0);
        assert_eq!(pos.left(), Coordinates::new(-1, 0));
        assert_eq!(pos.right(), Coordinates::new(1, 0));
        assert_eq!(pos.above(), Coordinates::new(0, -1));
        assert_eq!(pos.below(), Coordinates::new(0, 1));
    }

    #[test]
    fn test_step_backwards() {
        let pos = Coordinates::new(10, 10);
        assert_eq!(
            pos.step(Orientation::Vertical, -3),
            Coordinates::new(10, 7)
        );
        assert_eq!(
            pos.step(Orientation::Horizontal, -3),
            Coordinates::new(7, 10)
        );
    }
}
