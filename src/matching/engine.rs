//! MatchingEngine: the definition→term mapping with active uniqueness.
//!
//! Key absence means "unmatched", so iterating the mapping only ever yields
//! real pairs. Mutations return the ordered notification list for the sync
//! bridge instead of invoking a callback, which keeps the engine free of
//! boundary plumbing and directly testable.

use std::collections::{BTreeMap, BTreeSet};

use super::types::{Definition, MappingChange};

// =============================================================================
// MatchingEngine
// =============================================================================

/// The matching state engine.
///
/// Invariants held at every observable point:
/// - each definition index appears at most once (structural),
/// - no two definitions hold the same term (`assign` displaces the prior
///   holder before installing).
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    mapping: BTreeMap<usize, usize>,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the initial mapping from the definitions' seed values.
    ///
    /// Seeding is silent: the host form already holds these values, so no
    /// notifications fire. A seed naming a term another definition already
    /// took is dropped to keep term uniqueness.
    pub fn seeded(definitions: &[Definition]) -> Self {
        let mut engine = Self::new();
        let mut taken = BTreeSet::new();
        for def in definitions {
            if let Some(term) = def.matched_term_index {
                debug_assert!(!taken.contains(&term), "duplicate seed for term {term}");
                if taken.insert(term) {
                    engine.mapping.insert(def.index, term);
                }
            }
        }
        engine
    }

    /// Map `definition` to `term`, displacing any other definition that
    /// currently holds the term.
    ///
    /// Notifications come back in observable order: the displaced slot
    /// clears strictly before the new pair installs, so a consumer never
    /// sees the term held twice.
    pub fn assign(&mut self, definition: usize, term: usize) -> Vec<MappingChange> {
        let mut changes = Vec::with_capacity(2);
        if let Some(holder) = self.definition_for_term(term) {
            if holder != definition {
                self.mapping.remove(&holder);
                changes.push(MappingChange::clear(holder));
            }
        }
        self.mapping.insert(definition, term);
        changes.push(MappingChange::set(definition, term));
        changes
    }

    /// Clear `definition`'s slot. No-op, with no notification, when the
    /// slot is already empty.
    pub fn unassign(&mut self, definition: usize) -> Vec<MappingChange> {
        match self.mapping.remove(&definition) {
            Some(_) => vec![MappingChange::clear(definition)],
            None => Vec::new(),
        }
    }

    pub fn mapping_for_definition(&self, definition: usize) -> Option<usize> {
        self.mapping.get(&definition).copied()
    }

    /// Reverse lookup: which definition currently holds `term`.
    pub fn definition_for_term(&self, term: usize) -> Option<usize> {
        self.mapping
            .iter()
            .find(|&(_, &t)| t == term)
            .map(|(&d, _)| d)
    }

    /// Terms currently placed somewhere.
    pub fn used_term_indices(&self) -> BTreeSet<usize> {
        self.mapping.values().copied().collect()
    }

    /// Definitions currently holding a term.
    pub fn used_definition_indices(&self) -> BTreeSet<usize> {
        self.mapping.keys().copied().collect()
    }

    pub fn is_term_used(&self, term: usize) -> bool {
        self.mapping.values().any(|&t| t == term)
    }

    pub fn is_definition_used(&self, definition: usize) -> bool {
        self.mapping.contains_key(&definition)
    }

    pub fn pair_count(&self) -> usize {
        self.mapping.len()
    }

    /// All current pairs in definition order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.mapping.iter().map(|(&d, &t)| (d, t))
    }
}
