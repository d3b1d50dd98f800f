//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced by the statevector kernel.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The register would need more amplitudes than the configured bound allows.
    #[error("register of {num_qubits} qubits exceeds the limit of {max_qubits} qubits")]
    RegisterTooLarge {
        /// Requested register width.
        num_qubits: u32,
        /// Configured maximum register width.
        max_qubits: u32,
    },

    /// Measurement needs at least one shot.
    #[error("shots must be at least 1, got {0}")]
    InvalidShots(u32),

    /// An amplitude vector whose length is not a power of two.
    #[error("{0} amplitudes do not form a register; the length must be a power of two")]
    InvalidDimension(usize),

    /// A basis-state index does not fit the register.
    #[error("basis index {index} is outside a register of dimension {dimension}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of basis states (2^n).
        dimension: usize,
    },
}

/// Result type for statevector operations.
pub type SimResult<T> = Result<T, SimError>;
