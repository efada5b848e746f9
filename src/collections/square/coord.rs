use std::fmt;
use std::fmt::Debug;

/// A `Coord` struct represents coordinates of an element in a `Square`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Coord([usize; 2]);

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self([row, col])
    }

    pub fn row(self) -> usize {
        self.0[0]
    }

    pub fn col(self) -> usize {
        self.0[1]
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
