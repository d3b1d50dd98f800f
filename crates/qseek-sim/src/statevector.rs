//! Statevector of the simulated search register.
//!
//! Basis state `i` is the binary encoding of the register: bit `q` of `i` is
//! the value of qubit `q`. All mutating methods are unitary, so the squared
//! norm stays at 1 (up to [`NORM_TOLERANCE`]) between operations.

use num_complex::Complex64;

use crate::error::{SimError, SimResult};

/// Tolerance used when checking `Σ|αᵢ|² = 1`.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Smallest register width `n` with `2^n >= len`.
///
/// A single-item (or empty) database needs no qubits at all: `2^0 = 1`.
pub fn qubits_for(len: usize) -> u32 {
    if len <= 1 {
        0
    } else {
        usize::BITS - (len - 1).leading_zeros()
    }
}

/// A statevector representing the state of an `n`-qubit register.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: u32,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: u32) -> Self {
        let size = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Uniform superposition: every amplitude equals `1/√(2^n)`.
    ///
    /// Equivalent to applying a Hadamard to each qubit of |0...0⟩, but built
    /// directly.
    pub fn uniform(num_qubits: u32) -> Self {
        let size = 1usize << num_qubits;
        let amp = Complex64::new(1.0 / (size as f64).sqrt(), 0.0);
        Self {
            amplitudes: vec![amp; size],
            num_qubits,
        }
    }

    /// Like [`Statevector::uniform`], but refuses widths above `max_qubits`
    /// before anything is allocated.
    pub fn try_uniform(num_qubits: u32, max_qubits: u32) -> SimResult<Self> {
        if num_qubits > max_qubits || num_qubits >= usize::BITS {
            return Err(SimError::RegisterTooLarge {
                num_qubits,
                max_qubits,
            });
        }
        Ok(Self::uniform(num_qubits))
    }

    /// Wrap raw amplitudes. The length must be a power of two.
    ///
    /// No normalization is applied; callers that need a physical state should
    /// check [`Statevector::is_normalized`].
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> SimResult<Self> {
        let len = amplitudes.len();
        if !len.is_power_of_two() {
            return Err(SimError::InvalidDimension(len));
        }
        Ok(Self {
            num_qubits: len.trailing_zeros(),
            amplitudes,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of basis states, `2^n`.
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// All amplitudes in basis order.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Amplitude of one basis state.
    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes[index]
    }

    /// Measurement probability `|αᵢ|²` of one basis state.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    /// Measurement probabilities of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// `Σ|αᵢ|²`.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Whether the squared norm is within `tolerance` of 1.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() <= tolerance
    }

    /// Arithmetic mean of the amplitudes.
    pub fn mean(&self) -> Complex64 {
        let sum: Complex64 = self.amplitudes.iter().sum();
        sum / self.amplitudes.len() as f64
    }

    // =========================================================================
    // Gate library
    // =========================================================================

    /// Pauli-X on one qubit.
    pub fn apply_x(&mut self, qubit: u32) {
        let mask = 1usize << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Hadamard on one qubit.
    pub fn apply_h(&mut self, qubit: u32) {
        let mask = 1usize << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    /// Hadamard tensor `H^⊗n`: the Walsh-Hadamard transform over all amplitudes.
    pub fn apply_hadamard_all(&mut self) {
        for q in 0..self.num_qubits {
            self.apply_h(q);
        }
    }

    /// Multi-controlled Z over the whole register: negates |1...1⟩.
    ///
    /// For one qubit this is a plain Z; for zero qubits the only basis state
    /// is both all-zeros and all-ones.
    pub fn apply_mcz(&mut self) {
        let all_ones = self.amplitudes.len() - 1;
        self.amplitudes[all_ones] = -self.amplitudes[all_ones];
    }

    /// Negate a single basis amplitude. Panics if `index` is out of range.
    pub fn negate(&mut self, index: usize) {
        self.amplitudes[index] = -self.amplitudes[index];
    }

    /// `2|0⟩⟨0| − I`: negates every basis state except |0...0⟩.
    pub fn flip_phase_except_zero(&mut self) {
        for amp in self.amplitudes.iter_mut().skip(1) {
            *amp = -*amp;
        }
    }

    /// Reflection about the mean: `αᵢ → 2μ − αᵢ`.
    pub fn reflect_about_mean(&mut self) {
        let two_mean = 2.0 * self.mean();
        for amp in &mut self.amplitudes {
            *amp = two_mean - *amp;
        }
    }

    /// Render a basis index as an `n`-character bitstring, most significant
    /// qubit first, so that parsing it base 2 gives the index back.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        index_to_bitstring(outcome, self.num_qubits)
    }
}

/// See [`Statevector::outcome_to_bitstring`].
pub fn index_to_bitstring(index: usize, num_qubits: u32) -> String {
    if num_qubits == 0 {
        return String::new();
    }
    format!("{:0width$b}", index, width = num_qubits as usize)
}
