// PyO3 Python bindings for rmatsim
//
// Exposes the matrix engine and the gate/qubit layer:
// - Matrix with +, -, *, / operators, inverse() and tensor_product()
// - Gate and Qubit wrappers with combine_gates() / apply_gate()
// - ket('01') constructor
//
// Singular matrices raise ArithmeticError, every other failure ValueError.

use crate::{ket as rust_ket, Gate, Matrix, MatrixError, Qubit};
use pyo3::exceptions::{PyArithmeticError, PyIndexError, PyValueError};
use pyo3::prelude::*;

impl From<MatrixError> for PyErr {
    fn from(err: MatrixError) -> PyErr {
        if err.is_singular() {
            PyArithmeticError::new_err(err.to_string())
        } else {
            PyValueError::new_err(err.to_string())
        }
    }
}

// ---- Matrix ----

/// Python wrapper for Matrix
#[pyclass(name = "Matrix")]
#[derive(Clone)]
pub struct PyMatrix {
    inner: Matrix,
}

impl From<Matrix> for PyMatrix {
    fn from(inner: Matrix) -> Self {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    /// Zero-filled matrix; Matrix() is the empty 0x0 matrix
    #[new]
    #[pyo3(signature = (rows=0, cols=0))]
    fn new(rows: usize, cols: usize) -> Self {
        Matrix::new(rows, cols).into()
    }

    /// Build a matrix from a list of equal-length rows
    #[staticmethod]
    fn from_rows(rows: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(Matrix::from_rows(&rows)?.into())
    }

    #[staticmethod]
    fn identity(n: usize) -> Self {
        Matrix::identity(n).into()
    }

    #[getter]
    fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    fn cols(&self) -> usize {
        self.inner.cols()
    }

    fn __getitem__(&self, index: (usize, usize)) -> PyResult<f64> {
        self.inner
            .get(index.0, index.1)
            .ok_or_else(|| PyIndexError::new_err(format!("index {index:?} out of range")))
    }

    fn __setitem__(&mut self, index: (usize, usize), value: f64) -> PyResult<()> {
        let slot = self
            .inner
            .get_mut(index.0, index.1)
            .ok_or_else(|| PyIndexError::new_err(format!("index {index:?} out of range")))?;
        *slot = value;
        Ok(())
    }

    fn set_identity(&mut self) -> PyResult<()> {
        Ok(self.inner.set_identity()?)
    }

    fn inverse(&self) -> PyResult<Self> {
        Ok(self.inner.inverse()?.into())
    }

    fn tensor_product(&self, other: &PyMatrix) -> Self {
        self.inner.tensor_product(&other.inner).into()
    }

    fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_rows()
    }

    /// Check if every element is within eps of the other matrix
    #[pyo3(signature = (other, eps=1e-5))]
    fn isclose(&self, other: &PyMatrix, eps: f64) -> bool {
        self.inner.approx_eq(&other.inner, eps)
    }

    // ---- String representations ----

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Matrix({:?})", self.inner.to_rows())
    }

    // ---- Operators ----

    fn __add__(&self, other: &PyMatrix) -> PyResult<Self> {
        Ok(self.inner.try_add(&other.inner)?.into())
    }

    fn __sub__(&self, other: &PyMatrix) -> PyResult<Self> {
        Ok(self.inner.try_sub(&other.inner)?.into())
    }

    fn __mul__(&self, other: &PyMatrix) -> PyResult<Self> {
        Ok(self.inner.try_mul(&other.inner)?.into())
    }

    /// self * other^-1
    fn __truediv__(&self, other: &PyMatrix) -> PyResult<Self> {
        Ok(self.inner.try_div(&other.inner)?.into())
    }
}

// ---- Gate ----

/// Python wrapper for Gate
#[pyclass(name = "Gate")]
#[derive(Clone)]
pub struct PyGate {
    inner: Gate,
}

#[pymethods]
impl PyGate {
    /// Arity defaults to the matrix row count
    #[new]
    #[pyo3(signature = (matrix=None, num_qubits=None, name=None))]
    fn new(matrix: Option<PyMatrix>, num_qubits: Option<usize>, name: Option<String>) -> Self {
        let inner = match (matrix, num_qubits) {
            (None, _) => Gate::default(),
            (Some(m), None) => Gate::from_matrix(m.inner),
            (Some(m), Some(n)) => Gate::new(m.inner, n, ""),
        };
        let inner = match name {
            Some(name) => Gate::new(inner.matrix().clone(), inner.num_qubits(), name),
            None => inner,
        };
        PyGate { inner }
    }

    #[getter]
    fn matrix(&self) -> PyMatrix {
        self.inner.matrix().clone().into()
    }

    #[getter]
    fn num_qubits(&self) -> usize {
        self.inner.num_qubits()
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.name().to_string()
    }

    fn combine_gates(&self, other: &PyGate) -> Self {
        PyGate {
            inner: self.inner.combine_gates(&other.inner),
        }
    }

    fn __repr__(&self) -> String {
        format!("Gate({:?}, num_qubits={})", self.inner.name(), self.inner.num_qubits())
    }
}

// ---- Qubit ----

/// Python wrapper for Qubit
#[pyclass(name = "Qubit")]
#[derive(Clone)]
pub struct PyQubit {
    inner: Qubit,
}

#[pymethods]
impl PyQubit {
    /// Arity defaults to the matrix row count
    #[new]
    #[pyo3(signature = (matrix=None, num_qubits=None, name=None))]
    fn new(matrix: Option<PyMatrix>, num_qubits: Option<usize>, name: Option<String>) -> Self {
        let inner = match (matrix, num_qubits) {
            (None, _) => Qubit::default(),
            (Some(m), None) => Qubit::from_matrix(m.inner),
            (Some(m), Some(n)) => Qubit::new(m.inner, n, ""),
        };
        let inner = match name {
            Some(name) => Qubit::new(inner.matrix().clone(), inner.num_qubits(), name),
            None => inner,
        };
        PyQubit { inner }
    }

    #[getter]
    fn matrix(&self) -> PyMatrix {
        self.inner.matrix().clone().into()
    }

    #[getter]
    fn num_qubits(&self) -> usize {
        self.inner.num_qubits()
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Returns a new state: self.matrix * gate.matrix
    fn apply_gate(&self, gate: &PyGate) -> PyResult<Self> {
        Ok(PyQubit {
            inner: self.inner.apply_gate(&gate.inner)?,
        })
    }

    /// Joint state: self ⊗ other
    fn combine(&self, other: &PyQubit) -> Self {
        PyQubit {
            inner: self.inner.combine(&other.inner),
        }
    }

    fn __str__(&self) -> String {
        self.inner.matrix().to_string()
    }

    fn __repr__(&self) -> String {
        format!("Qubit({:?}, num_qubits={})", self.inner.name(), self.inner.num_qubits())
    }
}

/// Create a row-vector qubit state from a string specification
///
/// Characters: '0' = |0>, '1' = |1>, '+' = |+>, '-' = |->
///
/// Examples: ket('0'), ket('10'), ket('+-')
#[pyfunction]
#[pyo3(signature = (vecstring="0"))]
fn ket(vecstring: &str) -> PyResult<PyQubit> {
    Ok(PyQubit {
        inner: rust_ket(vecstring)?,
    })
}

/// Python module definition
#[pymodule]
fn rmatsim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatrix>()?;
    m.add_class::<PyGate>()?;
    m.add_class::<PyQubit>()?;
    m.add_function(wrap_pyfunction!(ket, m)?)?;
    Ok(())
}
