//! Simulated Grover search over a [`Database`].
//!
//! Steps, per call:
//!
//! 1. size the register (`n`, padded `N = 2^n`) and enforce `max_qubits`
//! 2. locate the target with the shared matching rule
//! 3. prepare the uniform superposition
//! 4. apply [`schedule`]`(N, auto_tune)` rounds of oracle then diffusion
//! 5. sample `shots` measurements and take the most frequent index
//!    (ties to the smallest)
//! 6. map that index back to the unpadded database; a padding index that
//!    wins the tally is reported as [`SearchError::PaddingMeasured`]
//!
//! The statevector is owned by the call and dropped before returning.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use qseek_sim::{Counts, Diffusion, Operator, Oracle, Statevector, sample_counts};

use crate::config::SearchConfig;
use crate::database::Database;
use crate::error::{SearchError, SearchResult};
use crate::schedule::schedule;

/// Result of one simulated search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantumSearchOutcome {
    /// The item at the measured index.
    pub found: String,
    /// The measured (most frequent) index.
    pub found_index: usize,
    /// Index the oracle marked.
    pub target_index: usize,
    /// Measurement tally over basis indices.
    pub counts: Counts,
    /// Register width `n`.
    pub num_qubits: u32,
    /// Padded index space `2^n`.
    pub padded_size: usize,
    /// Oracle + diffusion rounds applied.
    pub iterations: usize,
    /// Shots sampled.
    pub shots: u32,
    /// Exact `|α_target|²` just before measurement.
    pub target_probability: f64,
    /// Wall-clock time of the whole call.
    pub elapsed: Duration,
}

impl QuantumSearchOutcome {
    /// Whether the measurement landed on the marked index.
    pub fn hit_target(&self) -> bool {
        self.found_index == self.target_index
    }

    /// Measured frequency of the found index.
    pub fn found_frequency(&self) -> f64 {
        self.counts.probability(self.found_index)
    }
}

/// Run a search, sampling with `config.seed` or fresh entropy.
pub fn search(
    database: &Database,
    target: &str,
    config: &SearchConfig,
) -> SearchResult<QuantumSearchOutcome> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    search_with_rng(database, target, config, &mut rng)
}

/// Run a search with an injected random source.
#[instrument(skip(database, config, rng), fields(size = database.len()))]
pub fn search_with_rng<R: Rng + ?Sized>(
    database: &Database,
    target: &str,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchResult<QuantumSearchOutcome> {
    let start = Instant::now();
    check_request(database, target, config)?;

    let num_qubits = database.register_width();
    if num_qubits > config.max_qubits {
        return Err(SearchError::RegisterTooLarge {
            size: database.len(),
            num_qubits,
            max_qubits: config.max_qubits,
        });
    }

    let target_index = database
        .locate(target, config.match_rule)
        .ok_or_else(|| SearchError::TargetNotFound(target.to_string()))?;

    let mut state = Statevector::try_uniform(num_qubits, config.max_qubits)?;
    let padded_size = state.dimension();
    let iterations = schedule(padded_size, config.auto_tune);
    debug!(
        num_qubits,
        padded_size, target_index, iterations, "prepared uniform superposition"
    );

    let oracle = Oracle::new(target_index, num_qubits);
    let diffusion = Diffusion::new(num_qubits);
    for _ in 0..iterations {
        oracle.apply(&mut state);
        diffusion.apply(&mut state);
    }

    let target_probability = state.probability(target_index);
    let counts = sample_counts(&state, config.shots, rng)?;
    drop(state);

    let Some((found_index, hits)) = counts.most_frequent() else {
        unreachable!("{} shots produced no measurement outcomes", config.shots);
    };
    let Some(found) = database.get(found_index).map(str::to_string) else {
        warn!(found_index, hits, padded_size, "padding state won the measurement");
        return Err(SearchError::PaddingMeasured {
            index: found_index,
            size: database.len(),
            padded_size,
        });
    };

    debug!(
        found_index,
        hits,
        target_probability,
        "measured most frequent outcome"
    );

    Ok(QuantumSearchOutcome {
        found,
        found_index,
        target_index,
        counts,
        num_qubits,
        padded_size,
        iterations,
        shots: config.shots,
        target_probability,
        elapsed: start.elapsed(),
    })
}

/// Validation shared with the classical baseline.
pub(crate) fn check_request(
    database: &Database,
    target: &str,
    config: &SearchConfig,
) -> SearchResult<()> {
    config.validate()?;
    if database.is_empty() {
        return Err(SearchError::InvalidConfiguration(
            "database is empty".into(),
        ));
    }
    if target.is_empty() {
        return Err(SearchError::InvalidConfiguration(
            "search target is empty".into(),
        ));
    }
    Ok(())
}
