//! Core data structures for the matching exercise.
//!
//! Identity is positional: terms and definitions receive dense indices at
//! parse time and keep them for the widget's lifetime. Live pairing state
//! lives in `MatchingEngine`, never on these records.

use serde::{Deserialize, Serialize};

// =============================================================================
// Types
// =============================================================================

/// An item from the draggable pool, matched against definitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Term {
    pub index: usize,
    pub text: String,
    /// The host page's answer key for this term. Carried for the
    /// surrounding tooling; the widget itself never grades.
    pub correct_definition_index: usize,
}

/// A fixed prompt that receives at most one term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Definition {
    pub index: usize,
    pub text: String,
    /// Construction-time seed read from the host form. Not live state.
    pub matched_term_index: Option<usize>,
}

/// One notification on the sync channel to the host form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MappingChange {
    pub definition: usize,
    /// `None` clears the definition's slot.
    pub term: Option<usize>,
}

impl MappingChange {
    pub fn set(definition: usize, term: usize) -> Self {
        Self {
            definition,
            term: Some(term),
        }
    }

    pub fn clear(definition: usize) -> Self {
        Self {
            definition,
            term: None,
        }
    }
}

/// Which list an item belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Side {
    Terms,
    Definitions,
}

/// Identity of a selectable item, used by the click-to-place protocol.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemRef {
    pub side: Side,
    pub index: usize,
}

impl ItemRef {
    pub fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }
}
