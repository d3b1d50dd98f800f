//! Functional operators over a [`Statevector`].
//!
//! An operator is a conceptual `2^n × 2^n` unitary that is never materialized
//! as a matrix; applying it mutates the amplitudes in place.

use crate::statevector::Statevector;

/// A unitary transform applied directly to a statevector.
pub trait Operator {
    /// Short name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Register width this operator was built for.
    fn num_qubits(&self) -> u32;

    /// Apply the transform in place.
    ///
    /// Panics if `state` has a different register width.
    fn apply(&self, state: &mut Statevector);
}

/// `H^⊗n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HadamardAll {
    num_qubits: u32,
}

impl HadamardAll {
    /// Hadamard tensor over `num_qubits` qubits.
    pub fn new(num_qubits: u32) -> Self {
        Self { num_qubits }
    }
}

impl Operator for HadamardAll {
    fn name(&self) -> &'static str {
        "hadamard"
    }

    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn apply(&self, state: &mut Statevector) {
        check_width(self, state);
        state.apply_hadamard_all();
    }
}

pub(crate) fn check_width(op: &dyn Operator, state: &Statevector) {
    assert_eq!(
        op.num_qubits(),
        state.num_qubits(),
        "{} operator built for {} qubits applied to a {}-qubit register",
        op.name(),
        op.num_qubits(),
        state.num_qubits()
    );
}
