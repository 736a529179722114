//! Matrix type for 2D numeric data.

use crate::error::{MatrizError, Result};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// A 2D matrix of values (row-major storage).
///
/// The matrix exclusively owns a flat buffer of `rows * cols` elements;
/// element `(r, c)` lives at linear offset `r * cols + c`. Cloning
/// deep-copies the buffer, so distinct matrices never share storage.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Creates the empty matrix: zero rows, zero columns, no storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the underlying data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Takes the matrix out of `self`, leaving the empty matrix behind.
    ///
    /// Constant time: the buffer is transferred, not copied.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Swaps the contents of two matrices in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Gets a reference to the element at `(row, col)` without bounds checks.
    ///
    /// # Safety
    ///
    /// You must ensure that `row` and `col` are within the bounds of the
    /// matrix, otherwise this method will cause undefined behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let m = Matrix::from_vec(1, 1, vec![7]).expect("data length matches rows * cols");
    ///
    /// let value = unsafe { m.get_unchecked(0, 0) };
    /// assert_eq!(*value, 7);
    /// ```
    #[must_use]
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        unsafe { self.data.get_unchecked(row * self.cols + col) }
    }

    /// Gets a mutable reference to the element at `(row, col)` without
    /// bounds checks.
    ///
    /// # Safety
    ///
    /// You must ensure that `row` and `col` are within the bounds of the
    /// matrix, otherwise this method will cause undefined behavior.
    #[must_use]
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        let idx = row * self.cols + col;
        unsafe { self.data.get_unchecked_mut(idx) }
    }

    /// Internal helper: convert (row, col) to flat index.
    #[inline]
    fn idx(&self, r: usize, c: usize) -> usize {
        debug_assert!(r < self.rows && c < self.cols, "matrix index out of bounds");
        r * self.cols + c
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::shape_mismatch(
                (self.rows, self.cols),
                (other.rows, other.cols),
            ));
        }
        Ok(())
    }
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a flat vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{rows}x{cols} = {} elements", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a vector of rows.
    ///
    /// The first row's length fixes the column count; every later row must
    /// match it.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first row whose length differs.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).expect("rows have equal length");
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m.get(1, 0), 3);
    ///
    /// assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrizError::RaggedInput {
                    row: i,
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index out of bounds: ({row}, {col}) for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index out of bounds: ({row}, {col}) for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col] = value;
    }

    /// Gets element at (row, col), failing on out-of-range indices.
    ///
    /// # Errors
    ///
    /// Returns an error if `row` or `col` is out of range.
    pub fn try_get(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrizError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Sets element at (row, col), failing on out-of-range indices.
    ///
    /// # Errors
    ///
    /// Returns an error if `row` or `col` is out of range.
    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrizError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Overwrites every element with `value`, leaving dimensions unchanged.
    ///
    /// A no-op on the empty matrix.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl<T: Copy + Zero> Matrix<T> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T: Copy + Zero + One> Matrix<T> {
    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }
}

impl<T: Copy + Add<Output = T>> Matrix<T> {
    /// Adds another matrix element-wise, returning a new matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;

        let data: Vec<T> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Adds another matrix element-wise in place.
    ///
    /// The shape check runs before any element is touched, so a failed
    /// addition leaves both operands unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn add_assign(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape(other)?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = *a + b;
        }
        Ok(())
    }
}

impl<T: Copy + Sub<Output = T>> Matrix<T> {
    /// Subtracts another matrix element-wise, returning a new matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;

        let data: Vec<T> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise in place.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub_assign(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape(other)?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = *a - b;
        }
        Ok(())
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Matrix<T> {
    /// Matrix-matrix multiplication: (M x K) * (K x N) => (M x N).
    ///
    /// Naive triple loop; the accumulator starts from `T::zero()`.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.n_cols() != other.n_rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("rhs with {} rows", self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }

        let mut result = vec![T::zero(); self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }
}

impl<T: Copy + Mul<Output = T>> Matrix<T> {
    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.rows != other.rows || self.cols != other.cols {
            return false;
        }
        // Slice equality short-circuits on the first mismatching element.
        self.data == other.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (r, c) = index;
        &self.data[self.idx(r, c)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (r, c) = index;
        let idx = self.idx(r, c);
        &mut self.data[idx]
    }
}

/// Diagnostic rendering: one line per row of space-separated elements,
/// then a trailing line with the dimensions. Not a serialization format.
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).expect("rows have equal length");
/// assert_eq!(m.to_string(), "1 2 \n3 4 \nRows: 2, cols: 2\n");
/// ```
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{} ", self.data[row * self.cols + col])?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Rows: {}, cols: {}", self.rows, self.cols)
    }
}

impl<T: Copy + Add<Output = T>> Add for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if dimensions don't match; use [`Matrix::add`] to handle the
    /// mismatch as an error instead.
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        match Matrix::add(self, rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Copy + Add<Output = T>> AddAssign<&Matrix<T>> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if dimensions don't match; use [`Matrix::add_assign`] to
    /// handle the mismatch as an error instead.
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = Matrix::add_assign(self, rhs) {
            panic!("{e}");
        }
    }
}

impl<T: Copy + Sub<Output = T>> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if dimensions don't match; use [`Matrix::sub`] to handle the
    /// mismatch as an error instead.
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        match Matrix::sub(self, rhs) {
            Ok(difference) => difference,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign<&Matrix<T>> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if dimensions don't match; use [`Matrix::sub_assign`] to
    /// handle the mismatch as an error instead.
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = Matrix::sub_assign(self, rhs) {
            panic!("{e}");
        }
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if the inner dimensions don't match; use [`Matrix::matmul`]
    /// to handle the mismatch as an error instead.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.matmul(rhs) {
            Ok(product) => product,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Copy + Zero + Mul<Output = T>> MulAssign<&Matrix<T>> for Matrix<T> {
    /// Replaces `self` with `self * rhs`.
    ///
    /// The product is computed into a fresh buffer first, since its shape
    /// generally differs from the receiver's.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions don't match; use [`Matrix::matmul`]
    /// to handle the mismatch as an error instead.
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        match self.matmul(rhs) {
            Ok(product) => *self = product,
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
