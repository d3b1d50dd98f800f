//! Phase oracle marking a single basis state.

use crate::error::{SimError, SimResult};
use crate::operator::{Operator, check_width};
use crate::statevector::Statevector;

/// Flips the sign of exactly one basis amplitude.
///
/// The oracle only knows the marked index; it never inspects amplitude values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Oracle {
    target: usize,
    num_qubits: u32,
}

impl Oracle {
    /// Build an oracle marking `target` in an `num_qubits`-wide register.
    ///
    /// # Panics
    ///
    /// Panics if `target >= 2^num_qubits`. Use [`Oracle::try_new`] when the
    /// index comes from untrusted input.
    pub fn new(target: usize, num_qubits: u32) -> Self {
        match Self::try_new(target, num_qubits) {
            Ok(oracle) => oracle,
            Err(e) => panic!("invalid oracle: {e}"),
        }
    }

    /// Fallible variant of [`Oracle::new`].
    pub fn try_new(target: usize, num_qubits: u32) -> SimResult<Self> {
        let dimension = 1usize.checked_shl(num_qubits).unwrap_or(0);
        if num_qubits >= usize::BITS || target >= dimension {
            return Err(SimError::IndexOutOfRange {
                index: target,
                dimension,
            });
        }
        Ok(Self { target, num_qubits })
    }

    /// The marked basis index.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Apply the oracle through the gate library: X on every qubit whose
    /// target bit is 0, a multi-controlled Z, then the same X layer again.
    ///
    /// Produces exactly the same state as [`Operator::apply`].
    pub fn apply_gates(&self, state: &mut Statevector) {
        check_width(self, state);
        let zero_bits: Vec<u32> = (0..self.num_qubits)
            .filter(|&q| self.target & (1 << q) == 0)
            .collect();
        for &q in &zero_bits {
            state.apply_x(q);
        }
        state.apply_mcz();
        for &q in &zero_bits {
            state.apply_x(q);
        }
    }
}

impl Operator for Oracle {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn apply(&self, state: &mut Statevector) {
        check_width(self, state);
        state.negate(self.target);
    }
}
