//! Measurement sampling.
//!
//! Measuring the register draws basis indices from the Born distribution
//! `P(i) = |αᵢ|²`. The random source is injected so that seeded generators
//! give reproducible counts.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::statevector::{Statevector, index_to_bitstring};

/// Tally of measured basis indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    counts: BTreeMap<usize, u64>,
}

impl Counts {
    /// Empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` observations of `index`.
    pub fn insert(&mut self, index: usize, n: u64) {
        *self.counts.entry(index).or_insert(0) += n;
    }

    /// Observations of `index` (0 if never seen).
    pub fn get(&self, index: usize) -> u64 {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct indices observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing was observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Observed frequency of `index`.
    pub fn probability(&self, index: usize) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(index) as f64 / total as f64
    }

    /// The most frequent index. Ties go to the smallest index.
    pub fn most_frequent(&self) -> Option<(usize, u64)> {
        // BTreeMap iterates in ascending index order; keep the first maximum.
        let mut best: Option<(usize, u64)> = None;
        for (&index, &count) in &self.counts {
            match best {
                Some((_, c)) if c >= count => {}
                _ => best = Some((index, count)),
            }
        }
        best
    }

    /// Entries sorted by descending count, then ascending index.
    pub fn sorted(&self) -> Vec<(usize, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }

    /// Entries in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().map(|(&i, &c)| (i, c))
    }

    /// Same tally keyed by `num_qubits`-wide bitstrings.
    pub fn to_bitstrings(&self, num_qubits: u32) -> BTreeMap<String, u64> {
        self.iter()
            .map(|(i, c)| (index_to_bitstring(i, num_qubits), c))
            .collect()
    }
}

/// Cumulative distribution over the basis states of a statevector.
struct Cdf {
    cumulative: Vec<f64>,
    last_nonzero: usize,
}

impl Cdf {
    fn new(state: &Statevector) -> Self {
        let mut cumulative = Vec::with_capacity(state.dimension());
        let mut acc = 0.0;
        let mut last_nonzero = 0;
        for (i, amp) in state.amplitudes().iter().enumerate() {
            let p = amp.norm_sqr();
            if p > 0.0 {
                last_nonzero = i;
            }
            acc += p;
            cumulative.push(acc);
        }
        Self {
            cumulative,
            last_nonzero,
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let total = self.cumulative.last().copied().unwrap_or(0.0);
        let u: f64 = rng.r#gen::<f64>() * total;
        let idx = self.cumulative.partition_point(|&c| c <= u);
        // u can round up to `total`; never hand back a zero-probability tail.
        idx.min(self.last_nonzero)
    }
}

/// Draw a single measurement outcome.
pub fn sample<R: Rng + ?Sized>(state: &Statevector, rng: &mut R) -> usize {
    Cdf::new(state).sample(rng)
}

/// Draw `shots` independent outcomes and tally them.
pub fn sample_counts<R: Rng + ?Sized>(
    state: &Statevector,
    shots: u32,
    rng: &mut R,
) -> SimResult<Counts> {
    if shots == 0 {
        return Err(SimError::InvalidShots(shots));
    }
    let cdf = Cdf::new(state);
    let mut counts = Counts::new();
    for _ in 0..shots {
        counts.insert(cdf.sample(rng), 1);
    }
    debug!(
        num_qubits = state.num_qubits(),
        shots,
        distinct = counts.len(),
        "sampled measurement counts"
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sample_deterministic() {
        // |1⟩ state should always sample to 1
        let mut sv = Statevector::new(1);
        sv.apply_x(0);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..100 {
            assert_eq!(sample(&sv, &mut rng), 1);
        }
    }

    #[test]
    fn test_zero_shots_rejected() {
        let sv = Statevector::uniform(2);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sample_counts(&sv, 0, &mut rng),
            Err(SimError::InvalidShots(0))
        ));
    }

    #[test]
    fn test_counts_sum_to_shots() {
        let sv = Statevector::uniform(3);
        let mut rng = StdRng::seed_from_u64(7);
        let counts = sample_counts(&sv, 4000, &mut rng).unwrap();
        assert_eq!(counts.total(), 4000);
        // 8 equally likely outcomes, expected 500 each
        for i in 0..8 {
            let c = counts.get(i);
            assert!((350..650).contains(&c), "index {i}: {c}");
        }
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let sv = Statevector::uniform(4);
        let a = sample_counts(&sv, 500, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = sample_counts(&sv, 500, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_most_frequent_breaks_ties_by_smallest_index() {
        let mut counts = Counts::new();
        counts.insert(5, 10);
        counts.insert(2, 10);
        counts.insert(7, 3);
        assert_eq!(counts.most_frequent(), Some((2, 10)));
        assert_eq!(Counts::new().most_frequent(), None);
    }

    #[test]
    fn test_sorted_and_bitstrings() {
        let mut counts = Counts::new();
        counts.insert(1, 3);
        counts.insert(2, 9);
        counts.insert(0, 3);
        assert_eq!(counts.sorted(), vec![(2, 9), (0, 3), (1, 3)]);

        let bits = counts.to_bitstrings(2);
        assert_eq!(bits.get("10"), Some(&9));
        assert_eq!(bits.get("01"), Some(&3));
        assert!((counts.probability(2) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_counts_serde() {
        let mut counts = Counts::new();
        counts.insert(3, 12);
        let json = serde_json::to_string(&counts).unwrap();
        let back: Counts = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(3), 12);
    }
}
