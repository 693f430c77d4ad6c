//! Render-model snapshots.
//!
//! The JS side renders these verbatim; nothing here mutates state. The
//! available pool always excludes placed items and sorts by display text,
//! so its ordering is stable whatever the original index order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::exercise::Exercise;
use super::types::Side;

// =============================================================================
// Types
// =============================================================================

/// An entry in the available pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoolItem {
    pub index: usize,
    pub text: String,
    pub selected: bool,
}

/// The chip occupying a zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedChip {
    pub index: usize,
    pub text: String,
    pub selected: bool,
}

/// One fixed-side row with its drop zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZoneRow {
    pub fixed_index: usize,
    pub fixed_text: String,
    pub matched: Option<PlacedChip>,
    /// Zones only become click targets while a pool-side selection is held.
    pub clickable: bool,
}

/// Full widget snapshot for one render pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseView {
    pub swapped: bool,
    pub pool_label: String,
    pub zone_label: String,
    pub pool: Vec<PoolItem>,
    pub zones: Vec<ZoneRow>,
}

// =============================================================================
// Snapshot
// =============================================================================

/// Build the current render snapshot of an exercise.
pub fn snapshot(exercise: &Exercise) -> ExerciseView {
    let pool_side = exercise.pool_side();
    let selected = exercise
        .selection()
        .held()
        .filter(|item| item.side == pool_side)
        .map(|item| item.index);
    let clickable = selected.is_some();

    match pool_side {
        Side::Terms => {
            let used = exercise.engine().used_term_indices();
            let pool = pool_items(
                exercise.terms().iter().map(|t| (t.index, t.text.as_str())),
                &used,
                selected,
            );
            let zones = exercise
                .definitions()
                .iter()
                .map(|def| ZoneRow {
                    fixed_index: def.index,
                    fixed_text: def.text.clone(),
                    matched: exercise
                        .engine()
                        .mapping_for_definition(def.index)
                        .and_then(|term| chip(exercise, Side::Terms, term, selected)),
                    clickable,
                })
                .collect();
            ExerciseView {
                swapped: false,
                pool_label: "Available Terms".to_string(),
                zone_label: "Definitions".to_string(),
                pool,
                zones,
            }
        }
        Side::Definitions => {
            let used = exercise.engine().used_definition_indices();
            let pool = pool_items(
                exercise
                    .definitions()
                    .iter()
                    .map(|d| (d.index, d.text.as_str())),
                &used,
                selected,
            );
            let zones = exercise
                .terms()
                .iter()
                .map(|term| ZoneRow {
                    fixed_index: term.index,
                    fixed_text: term.text.clone(),
                    matched: exercise
                        .engine()
                        .definition_for_term(term.index)
                        .and_then(|def| chip(exercise, Side::Definitions, def, selected)),
                    clickable,
                })
                .collect();
            ExerciseView {
                swapped: true,
                pool_label: "Available Definitions".to_string(),
                zone_label: "Terms".to_string(),
                pool,
                zones,
            }
        }
    }
}

// =============================================================================
// Internal helpers
// =============================================================================

fn pool_items<'a>(
    items: impl Iterator<Item = (usize, &'a str)>,
    used: &BTreeSet<usize>,
    selected: Option<usize>,
) -> Vec<PoolItem> {
    let mut pool: Vec<PoolItem> = items
        .filter(|(index, _)| !used.contains(index))
        .map(|(index, text)| PoolItem {
            index,
            text: text.to_string(),
            selected: selected == Some(index),
        })
        .collect();
    pool.sort_by(|a, b| a.text.cmp(&b.text));
    pool
}

/// Look a placed item up by identity, not list position.
fn chip(exercise: &Exercise, side: Side, index: usize, selected: Option<usize>) -> Option<PlacedChip> {
    let text = match side {
        Side::Terms => exercise.terms().iter().find(|t| t.index == index)?.text.clone(),
        Side::Definitions => {
            exercise
                .definitions()
                .iter()
                .find(|d| d.index == index)?
                .text
                .clone()
        }
    };
    Some(PlacedChip {
        index,
        text,
        selected: selected == Some(index),
    })
}
