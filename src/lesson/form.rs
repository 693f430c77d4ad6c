//! Host-form write-back.
//!
//! Inverse of `parse`: mapping notifications become hidden-input updates
//! in the host's 1-based convention. The JS glue assigns each value to the
//! input at `input_index` and dispatches the change event the host's own
//! validation listens for.

use serde::{Deserialize, Serialize};

use crate::matching::types::MappingChange;

/// One pending write to a host input element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormUpdate {
    /// Position of the input in the exercise's input list, same order as
    /// the definitions.
    pub input_index: usize,
    /// New input value: a 1-based term number, or empty to clear.
    pub value: String,
}

/// Render a mapping value in the host form's convention.
pub fn form_value(term: Option<usize>) -> String {
    match term {
        Some(t) => (t + 1).to_string(),
        None => String::new(),
    }
}

/// Translate a notification batch into input writes, order preserved.
pub fn form_updates(changes: &[MappingChange]) -> Vec<FormUpdate> {
    changes
        .iter()
        .map(|change| FormUpdate {
            input_index: change.definition,
            value: form_value(change.term),
        })
        .collect()
}
