use std::collections::BTreeSet;

use crate::matching::engine::MatchingEngine;
use crate::matching::types::{Definition, MappingChange};

fn def(index: usize, text: &str, seed: Option<usize>) -> Definition {
    Definition {
        index,
        text: text.to_string(),
        matched_term_index: seed,
    }
}

#[test]
fn test_assign_installs_pair() {
    let mut engine = MatchingEngine::new();
    let changes = engine.assign(0, 1);

    assert_eq!(changes, vec![MappingChange::set(0, 1)]);
    assert_eq!(engine.mapping_for_definition(0), Some(1));
    assert_eq!(engine.definition_for_term(1), Some(0));
}

#[test]
fn test_displacement_clears_before_install() {
    let mut engine = MatchingEngine::new();
    engine.assign(0, 7);

    let changes = engine.assign(1, 7);
    assert_eq!(
        changes,
        vec![MappingChange::clear(0), MappingChange::set(1, 7)]
    );
    assert_eq!(engine.mapping_for_definition(0), None);
    assert_eq!(engine.mapping_for_definition(1), Some(7));
    assert_eq!(engine.pair_count(), 1);
}

#[test]
fn test_reassigning_same_pair_does_not_displace_itself() {
    let mut engine = MatchingEngine::new();
    engine.assign(0, 1);

    let changes = engine.assign(0, 1);
    assert_eq!(changes, vec![MappingChange::set(0, 1)]);
    assert_eq!(engine.pair_count(), 1);
}

#[test]
fn test_overwriting_a_definition_frees_its_old_term_silently() {
    let mut engine = MatchingEngine::new();
    engine.assign(0, 1);

    // The old term's slot is this same definition, so only the install
    // notification fires; the host input gets overwritten either way.
    let changes = engine.assign(0, 2);
    assert_eq!(changes, vec![MappingChange::set(0, 2)]);
    assert!(!engine.is_term_used(1));
    assert!(engine.is_term_used(2));
}

#[test]
fn test_unassign_notifies_once() {
    let mut engine = MatchingEngine::new();
    engine.assign(3, 5);

    let changes = engine.unassign(3);
    assert_eq!(changes, vec![MappingChange::clear(3)]);
    assert_eq!(engine.pair_count(), 0);
}

#[test]
fn test_unassign_empty_slot_is_silent() {
    let mut engine = MatchingEngine::new();
    assert!(engine.unassign(3).is_empty());
    assert_eq!(engine.pair_count(), 0);
}

#[test]
fn test_values_stay_unique_across_mutation_sequence() {
    let mut engine = MatchingEngine::new();
    let steps: &[(usize, Option<usize>)] = &[
        (0, Some(0)),
        (1, Some(0)), // displaces 0
        (2, Some(1)),
        (1, None),
        (2, Some(0)),
        (0, Some(2)),
        (2, None),
        (0, Some(0)), // takes the freed term back
    ];

    for &(definition, op) in steps {
        match op {
            Some(term) => {
                engine.assign(definition, term);
            }
            None => {
                engine.unassign(definition);
            }
        }
        let values: Vec<usize> = engine.pairs().map(|(_, t)| t).collect();
        let unique: BTreeSet<usize> = values.iter().copied().collect();
        assert_eq!(
            values.len(),
            unique.len(),
            "duplicate term after mutating definition {definition}"
        );
    }
}

#[test]
fn test_used_term_indices_matches_pairs() {
    let mut engine = MatchingEngine::new();
    engine.assign(0, 4);
    engine.assign(1, 2);
    engine.assign(2, 0);
    engine.unassign(1);

    assert_eq!(engine.used_term_indices(), BTreeSet::from([0, 4]));
    assert_eq!(engine.used_definition_indices(), BTreeSet::from([0, 2]));
    let from_pairs: BTreeSet<usize> = engine.pairs().map(|(_, t)| t).collect();
    assert_eq!(engine.used_term_indices(), from_pairs);
}

#[test]
fn test_seeding_is_silent_and_visible() {
    let engine = MatchingEngine::seeded(&[def(0, "x", Some(1))]);

    assert_eq!(engine.mapping_for_definition(0), Some(1));
    assert_eq!(engine.pair_count(), 1);
}

#[test]
fn test_unseeded_definitions_leave_no_key() {
    let engine = MatchingEngine::seeded(&[def(0, "x", None), def(1, "y", Some(0))]);

    assert_eq!(engine.mapping_for_definition(0), None);
    assert_eq!(engine.used_definition_indices(), BTreeSet::from([1]));
}

#[test]
fn test_round_trip_scenario() {
    let mut engine = MatchingEngine::new();

    assert_eq!(engine.assign(0, 1), vec![MappingChange::set(0, 1)]);
    assert_eq!(
        engine.assign(1, 1),
        vec![MappingChange::clear(0), MappingChange::set(1, 1)]
    );
    assert_eq!(engine.used_term_indices(), BTreeSet::from([1]));
    assert_eq!(engine.unassign(1), vec![MappingChange::clear(1)]);
    assert_eq!(engine.pair_count(), 0);
    assert!(engine.used_term_indices().is_empty());
}
