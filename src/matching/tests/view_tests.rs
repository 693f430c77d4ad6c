use crate::matching::exercise::Exercise;
use crate::matching::payload;
use crate::matching::types::{Definition, Term};
use crate::matching::view;

fn term(index: usize, text: &str) -> Term {
    Term {
        index,
        text: text.to_string(),
        correct_definition_index: index,
    }
}

fn def(index: usize, text: &str) -> Definition {
    Definition {
        index,
        text: text.to_string(),
        matched_term_index: None,
    }
}

/// Term texts deliberately out of index order, so sorting shows.
fn fixture() -> Exercise {
    Exercise::new(
        vec![term(0, "Charlie"), term(1, "Alpha"), term(2, "Bravo")],
        vec![def(0, "third letter"), def(1, "first letter"), def(2, "second letter")],
    )
}

#[test]
fn test_pool_sorts_by_text() {
    let ex = fixture();
    let snapshot = view::snapshot(&ex);

    let texts: Vec<&str> = snapshot.pool.iter().map(|item| item.text.as_str()).collect();
    assert_eq!(texts, vec!["Alpha", "Bravo", "Charlie"]);
    assert_eq!(snapshot.pool_label, "Available Terms");
    assert_eq!(snapshot.zone_label, "Definitions");
}

#[test]
fn test_pool_excludes_used_items() {
    let mut ex = fixture();
    ex.drop_on_zone(1, &payload::encode(1));

    let snapshot = view::snapshot(&ex);
    let indices: Vec<usize> = snapshot.pool.iter().map(|item| item.index).collect();
    assert_eq!(indices, vec![2, 0]); // Bravo, Charlie
}

#[test]
fn test_zone_shows_matched_chip() {
    let mut ex = fixture();
    ex.drop_on_zone(1, &payload::encode(1));

    let snapshot = view::snapshot(&ex);
    assert_eq!(snapshot.zones.len(), 3);
    assert!(snapshot.zones[0].matched.is_none());

    let chip = snapshot.zones[1].matched.as_ref().unwrap();
    assert_eq!(chip.index, 1);
    assert_eq!(chip.text, "Alpha");
}

#[test]
fn test_zones_keep_fixed_order() {
    let ex = fixture();
    let snapshot = view::snapshot(&ex);

    let texts: Vec<&str> = snapshot
        .zones
        .iter()
        .map(|zone| zone.fixed_text.as_str())
        .collect();
    assert_eq!(texts, vec!["third letter", "first letter", "second letter"]);
}

#[test]
fn test_zones_clickable_only_with_selection() {
    let mut ex = fixture();
    let snapshot = view::snapshot(&ex);
    assert!(snapshot.zones.iter().all(|zone| !zone.clickable));

    ex.click_pool_item(0);
    let snapshot = view::snapshot(&ex);
    assert!(snapshot.zones.iter().all(|zone| zone.clickable));
}

#[test]
fn test_selected_flag_set_on_pool_item() {
    let mut ex = fixture();
    ex.click_pool_item(2);

    let snapshot = view::snapshot(&ex);
    let selected: Vec<usize> = snapshot
        .pool
        .iter()
        .filter(|item| item.selected)
        .map(|item| item.index)
        .collect();
    assert_eq!(selected, vec![2]);
}

#[test]
fn test_swapped_view_swaps_pool_and_labels() {
    let mut ex = fixture();
    ex.drop_on_zone(1, &payload::encode(1));
    ex.toggle_swapped();

    let snapshot = view::snapshot(&ex);
    assert!(snapshot.swapped);
    assert_eq!(snapshot.pool_label, "Available Definitions");
    assert_eq!(snapshot.zone_label, "Terms");

    // Definition 1 is placed, so the definition pool excludes it.
    let indices: Vec<usize> = snapshot.pool.iter().map(|item| item.index).collect();
    assert_eq!(indices, vec![2, 0]); // "second letter", "third letter"

    // Zones are now terms in original order; term 1's zone carries the
    // definition chip.
    assert_eq!(snapshot.zones[1].fixed_text, "Alpha");
    let chip = snapshot.zones[1].matched.as_ref().unwrap();
    assert_eq!(chip.index, 1);
    assert_eq!(chip.text, "first letter");
}

#[test]
fn test_chip_lookup_is_by_identity_not_position() {
    // Lists handed over in shuffled storage order still render by index.
    let mut ex = Exercise::new(
        vec![term(1, "Alpha"), term(0, "Charlie")],
        vec![def(1, "first letter"), def(0, "third letter")],
    );
    ex.drop_on_zone(0, &payload::encode(1));

    let snapshot = view::snapshot(&ex);
    let zone = snapshot
        .zones
        .iter()
        .find(|zone| zone.fixed_index == 0)
        .unwrap();
    let chip = zone.matched.as_ref().unwrap();
    assert_eq!(chip.text, "Alpha");
}
