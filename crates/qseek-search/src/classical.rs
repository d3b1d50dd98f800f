//! Classical linear-scan baseline.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::SearchConfig;
use crate::database::Database;
use crate::engine::check_request;
use crate::error::{SearchError, SearchResult};

/// Result of a linear scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicalOutcome {
    /// The matched item.
    pub found: String,
    /// Its 0-based position.
    pub found_index: usize,
    /// Items examined, i.e. the 1-based position of the match.
    pub queries: usize,
    /// Wall-clock time of the scan.
    pub elapsed: Duration,
}

/// Scan `database` in order for `target` under `config.match_rule`.
///
/// Matching goes through [`Database::locate`], the same routine the quantum
/// engine uses, so both report the same item for the same input.
#[instrument(skip(database, config), fields(size = database.len()))]
pub fn classical_search(
    database: &Database,
    target: &str,
    config: &SearchConfig,
) -> SearchResult<ClassicalOutcome> {
    let start = Instant::now();
    check_request(database, target, config)?;

    let found_index = database
        .locate(target, config.match_rule)
        .ok_or_else(|| SearchError::TargetNotFound(target.to_string()))?;
    let queries = found_index + 1;
    debug!(found_index, queries, "linear scan matched");

    Ok(ClassicalOutcome {
        found: database.items()[found_index].clone(),
        found_index,
        queries,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchRule;

    #[test]
    fn test_queries_are_one_based() {
        let db = Database::new(["x", "y", "z"]);
        let config = SearchConfig::default();
        assert_eq!(classical_search(&db, "x", &config).unwrap().queries, 1);
        assert_eq!(classical_search(&db, "z", &config).unwrap().queries, 3);
    }

    #[test]
    fn test_not_found() {
        let db = Database::new(["x"]);
        assert!(matches!(
            classical_search(&db, "q", &SearchConfig::default()),
            Err(SearchError::TargetNotFound(_))
        ));
    }

    #[test]
    fn test_rule_is_respected() {
        let db = Database::new(["alpha beta", "beta"]);
        let contains = SearchConfig::default().with_match_rule(MatchRule::Contains);
        let exact = SearchConfig::default().with_match_rule(MatchRule::Exact);
        assert_eq!(classical_search(&db, "beta", &contains).unwrap().found_index, 0);
        assert_eq!(classical_search(&db, "beta", &exact).unwrap().found_index, 1);
    }

    #[test]
    fn test_empty_database_rejected() {
        assert!(matches!(
            classical_search(&Database::default(), "a", &SearchConfig::default()),
            Err(SearchError::InvalidConfiguration(_))
        ));
    }
}
