//! Dense square matrix storage, input generators and the naive kernel.
//!
//! `Matrix<T>` keeps its N×N cells contiguous in row-major order. The
//! blocked kernel's tile order is only meaningful under that layout.

pub mod generate;
pub mod naive_ijk;

use std::fmt::Debug;
use std::ops::{Index, IndexMut};

/// Width of the element type a run was computed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    F32,
    #[default]
    F64,
}

/// Floating-point element type a matrix can hold.
pub trait Element: num::Float + Debug + Send + Sync + 'static {
    const PRECISION: Precision;

    /// Converts the integer product `i * j` used by the pattern generator.
    ///
    /// Exact for every product up to 2^24 (`f32`) or 2^53 (`f64`).
    fn from_index_product(value: usize) -> Self;

    /// Widens to `f64` for reporting.
    fn as_f64(self) -> f64;
}

impl Element for f32 {
    const PRECISION: Precision = Precision::F32;

    fn from_index_product(value: usize) -> Self {
        value as f32
    }

    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Element for f64 {
    const PRECISION: Precision = Precision::F64;

    fn from_index_product(value: usize) -> Self {
        value as f64
    }

    fn as_f64(self) -> f64 {
        self
    }
}

/// An N×N matrix, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Element> {
    n: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Allocates an `n`×`n` matrix filled with zeros.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            data: vec![T::zero(); n * n],
        }
    }

    /// Dimension N.
    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[self.offset(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) {
        let offset = self.offset(i, j);
        self.data[offset] = value;
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Largest cell value. Negative infinity for an empty matrix.
    pub fn max_element(&self) -> T {
        self.data
            .iter()
            .fold(T::neg_infinity(), |max, &v| if max < v { v } else { max })
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.n, "row {} out of range for {}x{}", i, self.n, self.n);
        debug_assert!(j < self.n, "col {} out of range for {}x{}", j, self.n, self.n);
        i * self.n + j
    }
}

impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[self.offset(i, j)]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let offset = self.offset(i, j);
        &mut self.data[offset]
    }
}
