//! Per-invocation search configuration.
//!
//! Nothing here is global: every engine entry point takes a [`SearchConfig`]
//! by reference, so two concurrent searches can run with different settings.

use serde::{Deserialize, Serialize};

use crate::error::{SearchError, SearchResult};

/// Default number of measurement shots.
pub const DEFAULT_SHOTS: u32 = 1024;

/// Default register width bound: 2^24 amplitudes, about 256 MB.
pub const DEFAULT_MAX_QUBITS: u32 = 24;

/// Hard ceiling for `max_qubits`, whatever the configuration says.
pub const MAX_QUBITS_LIMIT: u32 = 30;

/// How a target string is matched against database items.
///
/// Both engines locate the target through [`Database::locate`], so a
/// quantum and a classical run over the same data always agree on the index.
///
/// [`Database::locate`]: crate::Database::locate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Item equals the target.
    Exact,
    /// Item contains the target as a substring.
    Contains,
    /// First exact match if there is one, else first substring match.
    #[default]
    ExactThenContains,
}

impl MatchRule {
    /// Parse a rule name (`exact`, `contains`, `exact-then-contains`).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "exact" => Some(Self::Exact),
            "contains" | "substring" => Some(Self::Contains),
            "exact_then_contains" | "auto" => Some(Self::ExactThenContains),
            _ => None,
        }
    }
}

/// Configuration for one search or comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of measurement shots.
    pub shots: u32,
    /// Use the adaptive iteration policy for large index spaces.
    pub auto_tune: bool,
    /// Maximum register width.
    pub max_qubits: u32,
    /// Target matching rule shared by both engines.
    pub match_rule: MatchRule,
    /// Seed for measurement sampling; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            shots: DEFAULT_SHOTS,
            auto_tune: true,
            max_qubits: DEFAULT_MAX_QUBITS,
            match_rule: MatchRule::default(),
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Set the number of shots.
    #[must_use]
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    /// Enable or disable the adaptive iteration policy.
    #[must_use]
    pub fn with_auto_tune(mut self, auto_tune: bool) -> Self {
        self.auto_tune = auto_tune;
        self
    }

    /// Set the maximum register width.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Set the matching rule.
    #[must_use]
    pub fn with_match_rule(mut self, rule: MatchRule) -> Self {
        self.match_rule = rule;
        self
    }

    /// Fix the sampling seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject unusable settings.
    pub fn validate(&self) -> SearchResult<()> {
        if self.shots == 0 {
            return Err(SearchError::InvalidConfiguration(
                "shots must be at least 1".into(),
            ));
        }
        if self.max_qubits > MAX_QUBITS_LIMIT {
            return Err(SearchError::InvalidConfiguration(format!(
                "max_qubits {} exceeds the hard limit of {MAX_QUBITS_LIMIT}",
                self.max_qubits
            )));
        }
        Ok(())
    }
}
