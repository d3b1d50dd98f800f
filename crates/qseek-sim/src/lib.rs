//! `qseek-sim` — statevector kernel for simulated Grover search.
//!
//! This crate holds the pieces of a Grover search that touch amplitudes:
//!
//! - [`Statevector`]: the `2^n` complex amplitudes of the register, plus the
//!   small gate library the search needs (H, X, multi-controlled Z)
//! - [`Operator`]: functional unitaries applied in place, never materialized
//!   as matrices
//! - [`Oracle`]: sign flip on one marked basis index
//! - [`Diffusion`]: reflection of all amplitudes about their mean
//! - [`measure`]: Born-rule sampling into [`Counts`] with an injectable RNG
//!
//! There is no global simulator handle. Every search allocates its own
//! statevector and drops it when done.
//!
//! # Memory
//!
//! | Qubits | Amplitudes | Memory |
//! |--------|------------|--------|
//! | 10 | 1 Ki | ~16 KB |
//! | 16 | 64 Ki | ~1 MB |
//! | 20 | 1 Mi | ~16 MB |
//! | 24 | 16 Mi | ~256 MB |
//!
//! [`Statevector::try_uniform`] refuses widths above a caller-supplied bound
//! before allocating.
//!
//! # Quick start
//!
//! ```rust
//! use qseek_sim::{Diffusion, Operator, Oracle, Statevector};
//!
//! let mut state = Statevector::uniform(2);
//! Oracle::new(2, 2).apply(&mut state);
//! Diffusion::new(2).apply(&mut state);
//! assert!((state.probability(2) - 1.0).abs() < 1e-12);
//! ```

pub mod diffusion;
pub mod error;
pub mod measure;
pub mod operator;
pub mod oracle;
pub mod statevector;

pub use diffusion::Diffusion;
pub use error::{SimError, SimResult};
pub use measure::{Counts, sample, sample_counts};
pub use operator::{HadamardAll, Operator};
pub use oracle::Oracle;
pub use statevector::{NORM_TOLERANCE, Statevector, index_to_bitstring, qubits_for};
