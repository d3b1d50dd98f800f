//! Side-by-side comparison of the classical baseline and the quantum engine.
//!
//! Each requested size gets its own synthetic database, target and RNG, and
//! size-runs execute on the rayon pool. A run owns its statevector, so there
//! is nothing to synchronise beyond the optional cancellation flag, which is
//! checked between runs (never inside one).

use std::f64::consts::FRAC_PI_4;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use qseek_sim::qubits_for;

use crate::classical::{ClassicalOutcome, classical_search};
use crate::config::SearchConfig;
use crate::database::Database;
use crate::engine::{QuantumSearchOutcome, search_with_rng};
use crate::error::{SearchError, SearchResult};

/// Which item of a synthetic database is searched for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPosition {
    /// First item (classical best case).
    First,
    /// Middle item (classical average case).
    Middle,
    /// Last item (classical worst case).
    #[default]
    Last,
    /// Uniformly random item, drawn from the run's RNG.
    Random,
    /// Fixed position, clamped to the last item.
    Index(usize),
}

impl TargetPosition {
    /// Parse `first`, `middle`, `last`, `random` or a 0-based index.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "first" => Some(Self::First),
            "middle" | "mid" => Some(Self::Middle),
            "last" => Some(Self::Last),
            "random" => Some(Self::Random),
            other => other.parse().ok().map(Self::Index),
        }
    }

    /// Resolve to an index in `0..size`. `size` must be positive.
    pub fn resolve<R: Rng + ?Sized>(self, size: usize, rng: &mut R) -> usize {
        match self {
            Self::First => 0,
            Self::Middle => (size - 1) / 2,
            Self::Last => size - 1,
            Self::Random => rng.gen_range(0..size),
            Self::Index(i) => i.min(size - 1),
        }
    }
}

/// Paired metrics for one database size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Items in the (unpadded) database.
    pub size: usize,
    /// Padded index space `2^n`.
    pub padded_size: usize,
    /// Register width `n`.
    pub num_qubits: u32,
    /// Item searched for.
    pub target: String,
    /// Oracle queries made by the linear scan.
    pub classical_queries: usize,
    /// Oracle + diffusion rounds applied by the quantum engine.
    pub quantum_iterations: usize,
    /// `classical_queries / max(quantum_iterations, 1)`.
    pub speedup: f64,
    /// Whether the quantum measurement returned the classical result.
    pub agreed: bool,
    /// Exact marked-state probability before measurement.
    pub target_probability: f64,
}

impl ComparisonRecord {
    fn new(
        size: usize,
        target: String,
        classical: &ClassicalOutcome,
        quantum: &QuantumSearchOutcome,
    ) -> Self {
        // A zero-round schedule (auto-tune off, N = 1) still costs one query.
        let quantum_queries = quantum.iterations.max(1);
        Self {
            size,
            padded_size: quantum.padded_size,
            num_qubits: quantum.num_qubits,
            target,
            classical_queries: classical.queries,
            quantum_iterations: quantum.iterations,
            speedup: classical.queries as f64 / quantum_queries as f64,
            agreed: classical.found == quantum.found,
            target_probability: quantum.target_probability,
        }
    }
}

/// One point of the asymptotic cost curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TheoreticalPoint {
    /// Database size `N`.
    pub size: usize,
    /// Expected linear-scan queries for a uniformly placed target, `(N + 1) / 2`.
    pub classical_average: f64,
    /// Worst-case linear-scan queries, `N`.
    pub classical_worst: f64,
    /// Grover rounds, `(π/4)·√N`.
    pub quantum: f64,
}

/// O(N) versus O(√N) reference curves.
pub fn theoretical_curve(sizes: &[usize]) -> Vec<TheoreticalPoint> {
    sizes
        .iter()
        .map(|&size| {
            let n = size as f64;
            TheoreticalPoint {
                size,
                classical_average: (n + 1.0) / 2.0,
                classical_worst: n,
                quantum: FRAC_PI_4 * n.sqrt(),
            }
        })
        .collect()
}

/// Runs both engines over a batch of database sizes.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    config: SearchConfig,
    position: TargetPosition,
}

impl Comparator {
    /// Comparator using `config` for every run.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            position: TargetPosition::default(),
        }
    }

    /// Choose which synthetic item is searched for.
    #[must_use]
    pub fn with_target_position(mut self, position: TargetPosition) -> Self {
        self.position = position;
        self
    }

    /// The configuration shared by all runs.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Compare over synthetic databases of each size, in input order.
    pub fn compare(&self, sizes: &[usize]) -> SearchResult<Vec<ComparisonRecord>> {
        let never = AtomicBool::new(false);
        self.compare_with_cancel(sizes, &never, |_| {})
    }

    /// Like [`Comparator::compare`], checking `cancel` before each size-run
    /// and calling `on_done` after each one finishes.
    #[instrument(skip(self, cancel, on_done))]
    pub fn compare_with_cancel<F>(
        &self,
        sizes: &[usize],
        cancel: &AtomicBool,
        on_done: F,
    ) -> SearchResult<Vec<ComparisonRecord>>
    where
        F: Fn(&ComparisonRecord) + Sync,
    {
        self.config.validate()?;
        if let Some(pos) = sizes.iter().position(|&s| s == 0) {
            return Err(SearchError::InvalidConfiguration(format!(
                "database size at position {pos} must be positive"
            )));
        }
        // Checked before any synthetic database is allocated.
        if let Some(&size) = sizes
            .iter()
            .find(|&&s| qubits_for(s) > self.config.max_qubits)
        {
            return Err(SearchError::RegisterTooLarge {
                size,
                num_qubits: qubits_for(size),
                max_qubits: self.config.max_qubits,
            });
        }

        let completed = AtomicUsize::new(0);
        let runs: Vec<Option<SearchResult<ComparisonRecord>>> = sizes
            .par_iter()
            .enumerate()
            .map(|(run, &size)| {
                if cancel.load(Ordering::Relaxed) {
                    return None;
                }
                let mut rng = self.run_rng(run);
                let result = self.run_synthetic(size, &mut rng);
                if let Ok(record) = &result {
                    on_done(record);
                }
                completed.fetch_add(1, Ordering::Relaxed);
                Some(result)
            })
            .collect();

        let completed = completed.into_inner();
        if completed < sizes.len() {
            info!(completed, requested = sizes.len(), "comparison cancelled");
            return Err(SearchError::Cancelled {
                completed,
                requested: sizes.len(),
            });
        }
        runs.into_iter().flatten().collect()
    }

    /// Compare both engines on a caller-supplied database and target.
    pub fn compare_on(&self, database: &Database, target: &str) -> SearchResult<ComparisonRecord> {
        let mut rng = self.run_rng(0);
        self.run_pair(database, target, &mut rng)
    }

    fn run_synthetic(&self, size: usize, rng: &mut StdRng) -> SearchResult<ComparisonRecord> {
        let database = Database::synthetic(size);
        let index = self.position.resolve(size, rng);
        let target = database.items()[index].clone();
        self.run_pair(&database, &target, rng)
    }

    fn run_pair(
        &self,
        database: &Database,
        target: &str,
        rng: &mut StdRng,
    ) -> SearchResult<ComparisonRecord> {
        let classical = classical_search(database, target, &self.config)?;
        let quantum = search_with_rng(database, target, &self.config, rng)?;
        let record = ComparisonRecord::new(database.len(), target.to_string(), &classical, &quantum);
        debug!(
            size = record.size,
            classical = record.classical_queries,
            quantum = record.quantum_iterations,
            speedup = record.speedup,
            "size-run finished"
        );
        Ok(record)
    }

    /// Independent RNG per run: derived from the seed when there is one.
    fn run_rng(&self, run: usize) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run as u64)),
            None => StdRng::from_entropy(),
        }
    }
}

/// Compare with the default target position.
pub fn compare(sizes: &[usize], config: &SearchConfig) -> SearchResult<Vec<ComparisonRecord>> {
    Comparator::new(config.clone()).compare(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_position_resolution() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(TargetPosition::First.resolve(10, &mut rng), 0);
        assert_eq!(TargetPosition::Middle.resolve(10, &mut rng), 4);
        assert_eq!(TargetPosition::Last.resolve(10, &mut rng), 9);
        assert_eq!(TargetPosition::Index(50).resolve(10, &mut rng), 9);
        assert!(TargetPosition::Random.resolve(10, &mut rng) < 10);
        assert_eq!(TargetPosition::Middle.resolve(1, &mut rng), 0);
    }

    #[test]
    fn test_target_position_names() {
        assert_eq!(TargetPosition::from_name("LAST"), Some(TargetPosition::Last));
        assert_eq!(TargetPosition::from_name("7"), Some(TargetPosition::Index(7)));
        assert_eq!(TargetPosition::from_name("sideways"), None);
    }

    #[test]
    fn test_theoretical_curve() {
        let curve = theoretical_curve(&[1, 100]);
        assert_eq!(curve[0].classical_average, 1.0);
        assert_eq!(curve[1].classical_worst, 100.0);
        assert!((curve[1].quantum - 7.853_981_6).abs() < 1e-6);
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = compare(&[4, 0], &SearchConfig::default()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_oversized_size_rejected_before_allocation() {
        let config = SearchConfig::default().with_max_qubits(4);
        let err = compare(&[16, 1usize << 40], &config).unwrap_err();
        assert!(matches!(
            err,
            SearchError::RegisterTooLarge {
                size,
                num_qubits: 40,
                max_qubits: 4
            } if size == 1usize << 40
        ));

        // The largest size that still fits runs normally.
        let records = compare(&[16], &config.with_seed(3)).unwrap();
        assert_eq!(records[0].num_qubits, 4);
    }

    #[test]
    fn test_pre_cancelled_batch() {
        let comparator = Comparator::new(SearchConfig::default().with_seed(1));
        let cancel = AtomicBool::new(true);
        let err = comparator
            .compare_with_cancel(&[4, 8, 16], &cancel, |_| {})
            .unwrap_err();
        assert!(matches!(
            err,
            SearchError::Cancelled {
                completed: 0,
                requested: 3
            }
        ));
    }
}
