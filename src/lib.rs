// rmatsim - dense matrix engine for a toy quantum-circuit simulator
//
// Gates and qubit states are plain real-valued matrices. Applying a gate is
// a matrix product (state on the left), composing gates or states is a
// Kronecker product.

pub mod config;
pub mod error;
pub mod gate;
pub mod matrix;

pub use config::{EngineConfig, DEFAULT_SINGULARITY_THRESHOLD};
pub use error::{MatrixError, Operation, Result, Shape};
pub use gate::{ket, Gate, Qubit, CNOT_GATE, CPHASE_GATE, H_GATE, I_GATE, X_GATE, Z_GATE};
pub use matrix::Matrix;

// ---- Python Bindings ----

#[cfg(feature = "pyo3")]
mod python;
