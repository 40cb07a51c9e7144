//! Dense 2D sample buffers and grid construction helpers.

use crate::float_types::Real;
use std::ops::{Index, IndexMut};

/// A row-major `rows × cols` buffer.
///
/// Rows follow the `v` parameter, columns follow the `u` parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid2<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid2<T> {
    /// A grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self { rows, cols, data: vec![value; rows * cols] }
    }
}

impl<T> Grid2<T> {
    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// One row as a contiguous slice.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// One column, copied out (columns are strided).
    pub fn column(&self, col: usize) -> Vec<T>
    where
        T: Copy,
    {
        (0..self.rows).map(|r| self[(r, col)]).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Cellwise transform into a new grid of the same shape.
    pub fn map<U, F>(&self, f: F) -> Grid2<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid2 {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T> Index<(usize, usize)> for Grid2<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid2<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.cols + col]
    }
}

/// `n` evenly spaced samples from `start` to `end`, both endpoints included.
///
/// The last sample is pinned to `end` exactly so closed domains stay closed.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as Real;
            let mut samples: Vec<Real> = (0..n).map(|i| start + step * i as Real).collect();
            samples[n - 1] = end;
            samples
        },
    }
}

/// The `U` and `V` coordinate grids of a parameter domain.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamGrid {
    pub u: Grid2<Real>,
    pub v: Grid2<Real>,
}

/// Outer-product sampling: `U[r][c] = u[c]`, `V[r][c] = v[r]`.
pub fn meshgrid(u: &[Real], v: &[Real]) -> ParamGrid {
    ParamGrid {
        u: Grid2::from_fn(v.len(), u.len(), |_, c| u[c]),
        v: Grid2::from_fn(v.len(), u.len(), |r, _| v[r]),
    }
}
