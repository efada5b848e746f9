mod coord;

pub use self::coord::Coord;

use std::ops::{Index, IndexMut};

/// A value that can be converted to a position in a `Square` given the square width
pub trait AsSquareIndex: Copy {
    fn as_square_index(self, width: usize) -> usize;
}

impl AsSquareIndex for usize {
    fn as_square_index(self, _width: usize) -> usize {
        self
    }
}

impl AsSquareIndex for Coord {
    fn as_square_index(self, width: usize) -> usize {
        assert!(self.row() < width && self.col() < width, "{:?} out of bounds", self);
        self.row() * width + self.col()
    }
}

impl AsSquareIndex for (usize, usize) {
    fn as_square_index(self, width: usize) -> usize {
        Coord::from(self).as_square_index(width)
    }
}

/// A container of elements represented in a square grid, stored in row-major order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square<T> {
    width: usize,
    elements: Vec<T>,
}

impl<T> Square<T> {
    /// Create a new `Square` of a specified width and fill with a specified value
    pub fn with_width_and_value(width: usize, val: T) -> Square<T>
    where
        T: Clone,
    {
        Square {
            width,
            elements: vec![val; width.pow(2)],
        }
    }

    /// Returns the width (and height) of the grid
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns an iterator over the rows of the square
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.elements.chunks(self.width)
    }

    /// Returns an iterator over every element in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }
}

impl<T, I: AsSquareIndex> Index<I> for Square<T> {
    type Output = T;

    fn index(&self, index: I) -> &Self::Output {
        &self.elements[index.as_square_index(self.width)]
    }
}

impl<T, I: AsSquareIndex> IndexMut<I> for Square<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.elements[index.as_square_index(self.width)]
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::square::{Coord, Square};

    #[test]
    fn row_major_layout() {
        let mut square = Square::with_width_and_value(3, 0);
        square[Coord::new(1, 2)] = 7;
        assert_eq!(7, square[5_usize]);
        assert_eq!(7, square[(1, 2)]);
        assert_eq!(vec![0, 0, 7], square.rows().nth(1).unwrap().to_vec());
    }

    #[test]
    #[should_panic]
    fn coord_out_of_bounds() {
        let square = Square::with_width_and_value(3, 0);
        let _value = square[(0, 3)];
    }
}
