// Gates and qubit states as named wrappers around a Matrix.

use std::sync::LazyLock;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

// ---- Constants ----

const S2: f64 = std::f64::consts::FRAC_1_SQRT_2;

// ---- Gate Matrices ----
// Only the real-valued standard gates; Y and S need complex entries.

pub static I_GATE: LazyLock<Matrix> = LazyLock::new(|| Matrix::identity(2));

pub static X_GATE: LazyLock<Matrix> = LazyLock::new(|| {
    let mut m = Matrix::new(2, 2);
    m[(0, 1)] = 1.0;
    m[(1, 0)] = 1.0;
    m
});

pub static Z_GATE: LazyLock<Matrix> = LazyLock::new(|| {
    let mut m = Matrix::identity(2);
    m[(1, 1)] = -1.0;
    m
});

pub static H_GATE: LazyLock<Matrix> = LazyLock::new(|| {
    let mut m = Matrix::new(2, 2);
    m[(0, 0)] = S2;
    m[(0, 1)] = S2;
    m[(1, 0)] = S2;
    m[(1, 1)] = -S2;
    m
});

pub static CNOT_GATE: LazyLock<Matrix> = LazyLock::new(|| {
    let mut m = Matrix::identity(4);
    m[(2, 2)] = 0.0;
    m[(3, 3)] = 0.0;
    m[(2, 3)] = 1.0;
    m[(3, 2)] = 1.0;
    m
});

pub static CPHASE_GATE: LazyLock<Matrix> = LazyLock::new(|| {
    let mut m = Matrix::identity(4);
    m[(3, 3)] = -1.0;
    m
});

/// Join two labels with `⊗`, skipping empty ones.
fn join_names(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.to_string(),
        (_, true) => a.to_string(),
        _ => format!("{a}⊗{b}"),
    }
}

// ---- Gate ----

/// A named linear operator acting on `num_qubits` qubits.
///
/// The arity is carried as metadata and is not checked against the matrix
/// size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gate {
    matrix: Matrix,
    num_qubits: usize,
    name: String,
}

impl Gate {
    pub fn new(matrix: Matrix, num_qubits: usize, name: impl Into<String>) -> Self {
        Gate {
            matrix,
            num_qubits,
            name: name.into(),
        }
    }

    /// Wrap a matrix with an arity equal to its row count and no name.
    pub fn from_matrix(matrix: Matrix) -> Self {
        let num_qubits = matrix.rows();
        Gate::new(matrix, num_qubits, "")
    }

    pub fn identity() -> Self {
        Gate::new(I_GATE.clone(), 1, "I")
    }

    /// Pauli-X (NOT).
    pub fn pauli_x() -> Self {
        Gate::new(X_GATE.clone(), 1, "X")
    }

    pub fn pauli_z() -> Self {
        Gate::new(Z_GATE.clone(), 1, "Z")
    }

    pub fn hadamard() -> Self {
        Gate::new(H_GATE.clone(), 1, "H")
    }

    pub fn cnot() -> Self {
        Gate::new(CNOT_GATE.clone(), 2, "CNOT")
    }

    pub fn cphase() -> Self {
        Gate::new(CPHASE_GATE.clone(), 2, "CPHASE")
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compose two gates acting on disjoint qubits into one larger gate.
    ///
    /// The matrix is `self ⊗ other`, the arity is the sum of both arities
    /// and the name joins both names with `⊗`.
    pub fn combine_gates(&self, other: &Gate) -> Gate {
        Gate {
            matrix: self.matrix.tensor_product(&other.matrix),
            num_qubits: self.num_qubits + other.num_qubits,
            name: join_names(&self.name, &other.name),
        }
    }
}

// ---- Qubit ----

/// A named matrix of amplitudes for one or more qubits.
///
/// States are row vectors: gates act by right multiplication.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Qubit {
    matrix: Matrix,
    num_qubits: usize,
    name: String,
}

impl Qubit {
    pub fn new(matrix: Matrix, num_qubits: usize, name: impl Into<String>) -> Self {
        Qubit {
            matrix,
            num_qubits,
            name: name.into(),
        }
    }

    /// Wrap a matrix with an arity equal to its row count and no name.
    pub fn from_matrix(matrix: Matrix) -> Self {
        let num_qubits = matrix.rows();
        Qubit::new(matrix, num_qubits, "")
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply `gate`, producing `self.matrix * gate.matrix`.
    ///
    /// The state is the left operand. Fails when the state's column count
    /// differs from the gate's row count.
    pub fn apply_gate(&self, gate: &Gate) -> Result<Qubit> {
        Ok(Qubit {
            matrix: self.matrix.try_mul(&gate.matrix)?,
            num_qubits: self.num_qubits,
            name: self.name.clone(),
        })
    }

    /// Joint state of two qubit groups, `self ⊗ other`.
    pub fn combine(&self, other: &Qubit) -> Qubit {
        Qubit {
            matrix: self.matrix.tensor_product(&other.matrix),
            num_qubits: self.num_qubits + other.num_qubits,
            name: join_names(&self.name, &other.name),
        }
    }
}

// ---- Convenience Functions ----

/// Create a row-vector qubit state from a string specification.
///
/// Characters: '0' = |0>, '1' = |1>, '+' = |+>, '-' = |->
///
/// The leftmost character is the most significant factor, so `ket("10")`
/// has its amplitude at index 2.
pub fn ket(vecstring: &str) -> Result<Qubit> {
    if vecstring.is_empty() {
        return Err(MatrixError::InvalidKet("vecstring cannot be empty".into()));
    }

    let mut register = Matrix::identity(1);
    for ch in vecstring.chars() {
        let amplitudes: [f64; 2] = match ch {
            '0' => [1.0, 0.0],
            '1' => [0.0, 1.0],
            '+' => [S2, S2],
            '-' => [S2, -S2],
            _ => {
                return Err(MatrixError::InvalidKet(format!(
                    "invalid character '{ch}', expected one of 0, 1, +, -"
                )));
            }
        };
        let factor = Matrix::from_rows(&[amplitudes])?;
        register = register.tensor_product(&factor);
    }
    Ok(Qubit::new(register, vecstring.chars().count(), vecstring))
}

// ---- Tests ----
