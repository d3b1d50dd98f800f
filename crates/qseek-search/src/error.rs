//! Error types for the search crate.

use thiserror::Error;

use qseek_sim::SimError;

/// Errors returned by the quantum engine, the classical baseline and the
/// comparator.
///
/// All variants are recoverable at the call boundary; none of them leaves
/// partially mutated state behind.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The target matches no item of the (unpadded) database.
    #[error("target '{0}' is not in the database")]
    TargetNotFound(String),

    /// The database would need a register wider than the configured bound.
    #[error(
        "database of {size} items needs {num_qubits} qubits, above the limit of {max_qubits}"
    )]
    RegisterTooLarge {
        /// Number of items in the database.
        size: usize,
        /// Register width the database would need.
        num_qubits: u32,
        /// Configured maximum register width.
        max_qubits: u32,
    },

    /// Shots, database or configuration bounds are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The most frequent outcome was a padding state, not a database item.
    ///
    /// Padding keeps a small residual probability, so this can happen with
    /// very few shots.
    #[error(
        "internal error: measured index {index} lies in the padding region {size}..{padded_size}"
    )]
    PaddingMeasured {
        /// Winning basis-state index.
        index: usize,
        /// Number of items in the database.
        size: usize,
        /// Padded index space `2^n`.
        padded_size: usize,
    },

    /// A batch comparison was cancelled between size-runs.
    #[error("comparison cancelled after {completed} of {requested} sizes")]
    Cancelled {
        /// Size-runs that finished before cancellation was observed.
        completed: usize,
        /// Size-runs requested.
        requested: usize,
    },

    /// Error from the statevector kernel.
    #[error("simulation error: {0}")]
    Sim(#[from] SimError),
}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
