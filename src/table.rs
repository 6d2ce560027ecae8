//! Square DP table stored row-major in a single `Vec`.

use std::ops::{Index, IndexMut};

/// An `n x n` table addressed by `(i, j)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table<T> {
    data: Vec<T>,
    n: usize,
}

impl<T: Copy> Table<T> {
    /// Allocate an `n x n` table filled with `fill`.
    pub fn new(n: usize, fill: T) -> Self {
        Self {
            data: vec![fill; n * n],
            n,
        }
    }
}

impl<T> Table<T> {
    /// Side length.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline(always)]
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.n && j < self.n, "({i}, {j}) outside {n}x{n}", n = self.n);
        i * self.n + j
    }

    /// Bounds-checked lookup.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.n && j < self.n {
            self.data.get(i * self.n + j)
        } else {
            None
        }
    }
}

impl<T> Index<(usize, usize)> for Table<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[self.offset(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for Table<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let off = self.offset(i, j);
        &mut self.data[off]
    }
}
