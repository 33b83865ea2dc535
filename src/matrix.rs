// Dense real-valued matrix engine backing gates and qubit states.

use ndarray::{s, Array2, Axis};
use rand::Rng;
use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::error::{MatrixError, Operation, Result, Shape};

// ---- Matrix ----

/// A rectangular grid of `f64` stored row-major in an owned `Array2`.
///
/// Cloning copies the storage; two matrices never share elements.
/// Arithmetic never mutates an operand and always returns a fresh matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Array2<f64>,
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::empty()
    }
}

impl Matrix {
    /// Create a zero-filled `rows x cols` matrix. Zero dimensions are allowed.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// The `0x0` matrix.
    pub fn empty() -> Self {
        Matrix::new(0, 0)
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Matrix {
            data: Array2::eye(n),
        }
    }

    /// Build a matrix from row slices. Every row must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut matrix = Matrix::new(rows.len(), ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: ncols,
                    actual: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                matrix.data[[i, j]] = value;
            }
        }
        Ok(matrix)
    }

    /// Wrap an existing `Array2`.
    pub fn from_array(data: Array2<f64>) -> Self {
        Matrix { data }
    }

    /// Random matrix with entries drawn uniformly from `[-1, 1)`.
    pub fn random(rows: usize, cols: usize, rng: &mut impl Rng) -> Self {
        Matrix {
            data: Array2::from_shape_simple_fn((rows, cols), || rng.gen_range(-1.0..1.0)),
        }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.cols())
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.shape().has_zero_dimension()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Bounds-checked element read.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// Bounds-checked element write access.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        self.data.get_mut((row, col))
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Copy the contents out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Overwrite this matrix with the identity. Fails unless square.
    pub fn set_identity(&mut self) -> Result<()> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                op: Operation::Identity,
                shape: self.shape(),
            });
        }
        for ((i, j), value) in self.data.indexed_iter_mut() {
            *value = if i == j { 1.0 } else { 0.0 };
        }
        Ok(())
    }

    /// Check if every element is within `eps` of the corresponding element
    /// of `other`. Matrices of different shape are never close.
    pub fn approx_eq(&self, other: &Matrix, eps: f64) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() < eps)
    }

    // ---- Elementwise arithmetic ----

    fn check_elementwise(&self, other: &Matrix, op: Operation) -> Result<()> {
        let (lhs, rhs) = (self.shape(), other.shape());
        if lhs.has_zero_dimension() || rhs.has_zero_dimension() {
            return Err(MatrixError::ZeroDimension { op, lhs, rhs });
        }
        if lhs != rhs {
            return Err(MatrixError::DimensionMismatch { op, lhs, rhs });
        }
        Ok(())
    }

    /// Elementwise sum. Both operands must be non-empty and of equal shape.
    pub fn try_add(&self, other: &Matrix) -> Result<Matrix> {
        self.check_elementwise(other, Operation::Addition)?;
        Ok(Matrix {
            data: &self.data + &other.data,
        })
    }

    /// Elementwise difference. Both operands must be non-empty and of equal shape.
    pub fn try_sub(&self, other: &Matrix) -> Result<Matrix> {
        self.check_elementwise(other, Operation::Subtraction)?;
        Ok(Matrix {
            data: &self.data - &other.data,
        })
    }

    // ---- Multiplication ----

    /// Matrix product `self * other`. Requires `self.cols() == other.rows()`.
    pub fn try_mul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(MatrixError::InnerDimensionMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let mut result = Matrix::new(self.rows(), other.cols());
        self.multiply_into(other, &mut result.data);
        Ok(result)
    }

    /// Dot product of row `i` of `self` with column `j` of `other`,
    /// accumulated in ascending `k`.
    #[inline]
    fn dot_entry(&self, other: &Matrix, i: usize, j: usize) -> f64 {
        let mut sum = 0.0;
        for k in 0..self.cols() {
            sum += self.data[[i, k]] * other.data[[k, j]];
        }
        sum
    }

    #[cfg(not(feature = "parallel"))]
    fn multiply_into(&self, other: &Matrix, out: &mut Array2<f64>) {
        for (i, mut row) in out.axis_iter_mut(Axis(0)).enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = self.dot_entry(other, i, j);
            }
        }
    }

    // Rows are independent; each entry keeps the sequential summation order.
    #[cfg(feature = "parallel")]
    fn multiply_into(&self, other: &Matrix, out: &mut Array2<f64>) {
        out.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(i, mut row)| {
                for (j, entry) in row.iter_mut().enumerate() {
                    *entry = self.dot_entry(other, i, j);
                }
            });
    }

    // ---- Division ----

    /// `self * other.inverse()`.
    ///
    /// Matrix division is not a general operation; this exists as a
    /// shorthand for right-multiplying by an inverse, as used when
    /// normalizing a state or undoing a gate. Operand order matters.
    pub fn try_div(&self, other: &Matrix) -> Result<Matrix> {
        self.try_div_with(other, &EngineConfig::default())
    }

    /// [`Matrix::try_div`] with a caller-supplied singularity threshold.
    pub fn try_div_with(&self, other: &Matrix, config: &EngineConfig) -> Result<Matrix> {
        let (lhs, rhs) = (self.shape(), other.shape());
        if lhs.has_zero_dimension() || rhs.has_zero_dimension() {
            return Err(MatrixError::ZeroDimension {
                op: Operation::Division,
                lhs,
                rhs,
            });
        }
        let other_inverse = other.inverse_with(config)?;
        self.try_mul(&other_inverse)
    }

    // ---- Inversion ----

    /// Invert a square matrix using the default singularity threshold.
    pub fn inverse(&self) -> Result<Matrix> {
        self.inverse_with(&EngineConfig::default())
    }

    /// Invert a square matrix by Gauss-Jordan elimination with partial
    /// pivoting on `[A | I]`.
    ///
    /// At each column the remaining row with the largest absolute pivot is
    /// chosen; ties keep the first (lowest-index) row. A pivot that is zero
    /// or whose magnitude is below the configured threshold yields
    /// [`MatrixError::Singular`].
    pub fn inverse_with(&self, config: &EngineConfig) -> Result<Matrix> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                op: Operation::Inversion,
                shape: self.shape(),
            });
        }
        let threshold = config.singularity_threshold();
        if !config.is_default() {
            debug!(threshold, "inverting with custom singularity threshold");
        }

        let n = self.rows();
        let width = 2 * n;
        let mut aug = Array2::<f64>::zeros((n, width));
        aug.slice_mut(s![.., ..n]).assign(&self.data);
        for i in 0..n {
            aug[[i, n + i]] = 1.0;
        }

        for i in 0..n {
            let max_row = pivot_row(&aug, i);
            let pivot = aug[[max_row, i]];
            // An exact zero is singular even under a zero threshold.
            if pivot == 0.0 || pivot.abs() < threshold {
                debug!(column = i, pivot, threshold, "singular pivot");
                return Err(MatrixError::Singular { column: i, pivot });
            }

            if max_row != i {
                trace!(column = i, from = max_row, "swapping pivot row");
                for c in 0..width {
                    aug.swap([i, c], [max_row, c]);
                }
            }

            let pivot_value = aug[[i, i]];
            for j in i..width {
                aug[[i, j]] /= pivot_value;
            }

            for k in 0..n {
                if k == i {
                    continue;
                }
                let factor = aug[[k, i]];
                for j in i..width {
                    let delta = factor * aug[[i, j]];
                    aug[[k, j]] -= delta;
                }
            }
        }

        Ok(Matrix {
            data: aug.slice(s![.., n..]).to_owned(),
        })
    }

    // ---- Tensor product ----

    /// Kronecker product: `(m x n) ⊗ (p x q)` is `(m*p) x (n*q)` with
    /// `C[i*p + k][j*q + l] = A[i][j] * B[k][l]`.
    pub fn tensor_product(&self, other: &Matrix) -> Matrix {
        let (m, n) = (self.rows(), self.cols());
        let (p, q) = (other.rows(), other.cols());
        let mut result = Matrix::new(m * p, n * q);
        for i in 0..m {
            for j in 0..n {
                let a = self.data[[i, j]];
                for k in 0..p {
                    for l in 0..q {
                        result.data[[i * p + k, j * q + l]] = a * other.data[[k, l]];
                    }
                }
            }
        }
        result
    }
}

/// Row in `col..rows` with the largest absolute value in column `col`.
/// The strict comparison keeps the first row among equal magnitudes.
fn pivot_row(aug: &Array2<f64>, col: usize) -> usize {
    let mut max_row = col;
    for j in col..aug.nrows() {
        if aug[[j, col]].abs() > aug[[max_row, col]].abs() {
            max_row = j;
        }
    }
    max_row
}

// ---- Element access ----

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[[row, col]]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[[row, col]]
    }
}

// ---- Formatting ----

/// Row-major, six decimal places, one trailing space per entry and a
/// newline after every row. Intended for diagnostics only.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.outer_iter() {
            for value in row.iter() {
                write!(f, "{value:.6} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---- Operators ----

impl Add<&Matrix> for &Matrix {
    type Output = Result<Matrix>;
    fn add(self, other: &Matrix) -> Result<Matrix> {
        self.try_add(other)
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Result<Matrix>;
    fn sub(self, other: &Matrix) -> Result<Matrix> {
        self.try_sub(other)
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix>;
    fn mul(self, other: &Matrix) -> Result<Matrix> {
        self.try_mul(other)
    }
}

impl Div<&Matrix> for &Matrix {
    type Output = Result<Matrix>;
    /// `self * other⁻¹`; see [`Matrix::try_div`].
    fn div(self, other: &Matrix) -> Result<Matrix> {
        self.try_div(other)
    }
}

// ---- Tests ----
