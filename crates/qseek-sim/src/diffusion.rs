//! Diffusion (inversion about the mean).

use crate::operator::{HadamardAll, Operator, check_width};
use crate::statevector::Statevector;

/// `2|s⟩⟨s| − I`, where `|s⟩` is the uniform superposition.
///
/// Each amplitude `αᵢ` becomes `2μ − αᵢ`. The operator is unitary and its own
/// inverse. Alternated with an [`Oracle`](crate::Oracle) it rotates the state
/// towards the marked index; past the optimum it keeps rotating and the
/// marked probability falls again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diffusion {
    num_qubits: u32,
}

impl Diffusion {
    /// Diffusion over a `num_qubits`-wide register.
    pub fn new(num_qubits: u32) -> Self {
        Self { num_qubits }
    }

    /// Gate-level construction: `H^⊗n · (2|0⟩⟨0| − I) · H^⊗n`.
    ///
    /// Produces the same state as [`Operator::apply`] up to rounding.
    pub fn apply_gates(&self, state: &mut Statevector) {
        let hadamard = HadamardAll::new(self.num_qubits);
        hadamard.apply(state);
        state.flip_phase_except_zero();
        hadamard.apply(state);
    }
}

impl Operator for Diffusion {
    fn name(&self) -> &'static str {
        "diffusion"
    }

    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn apply(&self, state: &mut Statevector) {
        check_width(self, state);
        state.reflect_about_mean();
    }
}
