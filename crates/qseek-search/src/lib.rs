//! `qseek-search` — simulated Grover search with a classical baseline.
//!
//! - [`search`] / [`search_with_rng`]: pad the database to `2^n`, mark the
//!   target, amplify, measure, map back
//! - [`classical_search`]: ordered linear scan reporting its query count
//! - [`Comparator`]: runs both over many database sizes and pairs the metrics
//! - [`schedule`]: the iteration-count policy
//!
//! Both engines locate the target through [`Database::locate`] with the
//! configured [`MatchRule`], so they always agree on which index is marked.
//!
//! # Quick start
//!
//! ```rust
//! use qseek_search::{Database, SearchConfig, classical_search, search};
//!
//! let db = Database::new(["red", "green", "blue", "cyan"]);
//! let config = SearchConfig::default().with_seed(1);
//!
//! let quantum = search(&db, "blue", &config).unwrap();
//! let classical = classical_search(&db, "blue", &config).unwrap();
//! assert_eq!(quantum.found, classical.found);
//! assert_eq!(classical.queries, 3);
//! ```

pub mod classical;
pub mod compare;
pub mod config;
pub mod database;
pub mod engine;
pub mod error;
pub mod schedule;

pub use classical::{ClassicalOutcome, classical_search};
pub use compare::{
    Comparator, ComparisonRecord, TargetPosition, TheoreticalPoint, compare, theoretical_curve,
};
pub use config::{DEFAULT_MAX_QUBITS, DEFAULT_SHOTS, MAX_QUBITS_LIMIT, MatchRule, SearchConfig};
pub use database::{Database, SearchItem};
pub use engine::{QuantumSearchOutcome, search, search_with_rng};
pub use error::{SearchError, SearchResult};
pub use schedule::{AUTO_TUNE_SCALE, schedule, textbook_iterations};

pub use qseek_sim::Counts;
