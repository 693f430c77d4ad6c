//! Host-page row translation.
//!
//! The content script scrapes each row of a matching table into a
//! `RawMatchRow`; this module turns those into the core's term and
//! definition lists. The host form speaks 1-based indices: the off-by-one
//! translation lives here and in `form`, never in the core.

use serde::{Deserialize, Serialize};

use crate::matching::types::{Definition, Term};

// =============================================================================
// Types
// =============================================================================

/// One scraped `<tr>` of a matching table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMatchRow {
    pub term_text: String,
    /// The `ident` attribute of the answer cell.
    pub term_ident: String,
    pub definition_text: String,
    /// Current value of the row's visible `ans_` input.
    pub answer_value: String,
}

/// Parsed construction input for one exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedExercise {
    pub terms: Vec<Term>,
    pub definitions: Vec<Definition>,
}

// =============================================================================
// Parsing
// =============================================================================

/// Translate scraped rows into construction input.
///
/// A row with a malformed ident contributes neither a term nor a
/// definition, keeping the two lists aligned. Indices are assigned densely
/// in document order and stay stable afterwards.
pub fn parse_rows(rows: &[RawMatchRow]) -> ParsedExercise {
    let mut parsed = ParsedExercise::default();
    for row in rows {
        let correct_definition_index = match row.term_ident.trim().parse() {
            Ok(ident) => ident,
            Err(_) => continue,
        };
        let index = parsed.terms.len();
        parsed.terms.push(Term {
            index,
            text: row.term_text.trim().to_string(),
            correct_definition_index,
        });
        parsed.definitions.push(Definition {
            index,
            text: row.definition_text.trim().to_string(),
            matched_term_index: seed_from_answer(&row.answer_value),
        });
    }
    parsed
}

/// The host form stores a 1-based term number, or blank for unanswered.
fn seed_from_answer(value: &str) -> Option<usize> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<usize>() {
        Ok(v) if v >= 1 => Some(v - 1),
        _ => None,
    }
}
