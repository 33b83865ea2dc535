//! Error types for matrix operations

use std::fmt;
use thiserror::Error;

/// Dimensions of a matrix, displayed as `RxC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    /// True if either dimension is zero.
    pub const fn has_zero_dimension(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// The engine operation that rejected its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Identity,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Inversion,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Identity => "identity",
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Inversion => "inversion",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during matrix operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// An operand has a zero dimension where a non-degenerate one is required
    #[error("zero dimension operand is not allowed for {op} ({lhs} and {rhs})")]
    ZeroDimension { op: Operation, lhs: Shape, rhs: Shape },

    /// Elementwise operands differ in shape
    #[error("matrices must have the same dimensions for {op} (got {lhs} and {rhs})")]
    DimensionMismatch { op: Operation, lhs: Shape, rhs: Shape },

    /// Multiplication operands have incompatible inner dimensions
    #[error(
        "number of columns of first matrix must equal number of rows of second matrix \
         for multiplication (got {lhs} and {rhs})"
    )]
    InnerDimensionMismatch { lhs: Shape, rhs: Shape },

    #[error("only square matrices are valid for {op} (got a {shape} matrix)")]
    NotSquare { op: Operation, shape: Shape },

    /// A pivot fell below the singularity threshold during inversion
    #[error("matrix is singular and cannot be inverted (pivot {pivot:e} in column {column})")]
    Singular { column: usize, pivot: f64 },

    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("singularity threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),

    #[error("invalid ket specification: {0}")]
    InvalidKet(String),
}

impl MatrixError {
    /// True for the numerical "no inverse exists" condition, as opposed to
    /// an API misuse.
    pub fn is_singular(&self) -> bool {
        matches!(self, MatrixError::Singular { .. })
    }
}

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;
