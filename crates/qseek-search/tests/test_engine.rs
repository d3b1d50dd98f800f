//! Tests for the search engine and its agreement with the linear scan.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use qseek_search::{
    Database, MatchRule, SearchConfig, SearchError, classical_search, search, search_with_rng,
};

// ---------------------------------------------------------------------------
// Known cases
// ---------------------------------------------------------------------------

#[test]
fn two_qubit_exact_solution() {
    let db = Database::new(["w", "x", "y", "z"]);
    let config = SearchConfig::default().with_shots(1000);
    let mut rng = StdRng::seed_from_u64(2024);

    let outcome = search_with_rng(&db, "y", &config, &mut rng).unwrap();

    assert_eq!(outcome.num_qubits, 2);
    assert_eq!(outcome.iterations, 1);
    assert_eq!(outcome.found_index, 2);
    assert!(outcome.counts.get(2) >= 900, "{:?}", outcome.counts);
    assert!((outcome.target_probability - 1.0).abs() < 1e-12);
    assert_eq!(outcome.counts.to_bitstrings(2).get("10"), Some(&outcome.counts.get(2)));
}

#[test]
fn hundred_items_pad_to_seven_qubits() {
    let db = Database::synthetic(100);
    let tuned = SearchConfig::default().with_seed(3);
    let textbook = tuned.clone().with_auto_tune(false);

    let a = search(&db, "item-57", &tuned).unwrap();
    assert_eq!(a.num_qubits, 7);
    assert_eq!(a.padded_size, 128);
    assert_eq!(a.iterations, 7);
    assert_eq!(a.found, "item-57");

    let b = search(&db, "item-57", &textbook).unwrap();
    assert_eq!(b.iterations, 8);
    assert_eq!(b.found, "item-57");
    assert!(b.target_probability > a.target_probability);
}

#[test]
fn seeded_runs_are_identical() {
    let db = Database::synthetic(40);
    let config = SearchConfig::default().with_seed(99).with_shots(300);
    let a = search(&db, "item-13", &config).unwrap();
    let b = search(&db, "item-13", &config).unwrap();
    assert_eq!(a.counts, b.counts);
    assert_eq!(a.found_index, b.found_index);
}

#[test]
fn input_database_is_untouched() {
    let db = Database::new(["one", "two", "three"]);
    let copy = db.clone();
    let _ = search(&db, "two", &SearchConfig::default().with_seed(0)).unwrap();
    let _ = classical_search(&db, "two", &SearchConfig::default()).unwrap();
    assert_eq!(db, copy);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn both_engines_report_missing_target_identically() {
    let db = Database::new(["alpha", "beta"]);
    let config = SearchConfig::default().with_seed(0);
    let q = search(&db, "gamma", &config).unwrap_err();
    let c = classical_search(&db, "gamma", &config).unwrap_err();
    assert_eq!(q.to_string(), c.to_string());
    assert!(matches!(q, SearchError::TargetNotFound(_)));
}

#[test]
fn oversized_database_rejected_before_allocation() {
    // 2^12 + 1 items would need 13 qubits; reject under a 12-qubit bound.
    let db = Database::synthetic((1 << 12) + 1);
    let config = SearchConfig::default().with_max_qubits(12).with_seed(0);
    let err = search(&db, "item-0000", &config).unwrap_err();
    assert!(matches!(
        err,
        SearchError::RegisterTooLarge {
            num_qubits: 13,
            max_qubits: 12,
            ..
        }
    ));
}

#[test]
fn register_check_precedes_target_lookup() {
    let db = Database::synthetic(9);
    let config = SearchConfig::default().with_max_qubits(3);
    assert!(matches!(
        search(&db, "absent", &config),
        Err(SearchError::RegisterTooLarge { .. })
    ));
}

// ---------------------------------------------------------------------------
// Agreement
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn quantum_and_classical_agree(
        size in 3_usize..=64,
        target_seed in any::<usize>(),
        seed in any::<u64>(),
    ) {
        let db = Database::synthetic(size);
        let target = db.items()[target_seed % size].clone();
        let config = SearchConfig::default()
            .with_shots(200)
            .with_seed(seed)
            .with_match_rule(MatchRule::Exact);

        let quantum = search(&db, &target, &config).unwrap();
        let classical = classical_search(&db, &target, &config).unwrap();

        prop_assert_eq!(&quantum.found, &classical.found);
        prop_assert_eq!(quantum.target_index, classical.found_index);
        prop_assert!(quantum.found_index < size);
    }
}
