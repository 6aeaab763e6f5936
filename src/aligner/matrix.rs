use std::ops::{Index, IndexMut};

/// Move that produced the optimal cost of a DP cell.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub enum Backpointer {
    /// Align a character of each sequence (match or substitution)
    Diagonal,

    /// Gap in the first sequence, consumes a character of the second sequence
    Left,

    /// Gap in the second sequence, consumes a character of the first sequence
    Up,

    /// The cell lies outside the band or outside either sequence
    #[default]
    Unreachable,
}

/// Dense row-major DP table, allocated once with its final dimensions.
#[derive(Clone, Debug)]
pub struct DpMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> DpMatrix<T>
where
    T: Copy + Default
{
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T> DpMatrix<T> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T> Index<(usize, usize)> for DpMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DpMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}
