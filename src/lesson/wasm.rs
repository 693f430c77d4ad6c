//! WASM bridge for the page collaborator helpers.

use wasm_bindgen::prelude::*;

use super::form;
use super::parse::{self, RawMatchRow};
use crate::matching::types::MappingChange;

/// Parse scraped exercise rows into `{ terms, definitions }`.
#[wasm_bindgen(js_name = parseExercise)]
pub fn parse_exercise(rows: JsValue) -> Result<JsValue, JsValue> {
    let rows: Vec<RawMatchRow> = serde_wasm_bindgen::from_value(rows)
        .map_err(|e| JsValue::from_str(&format!("bad rows: {e}")))?;
    serde_wasm_bindgen::to_value(&parse::parse_rows(&rows))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Translate mapping notifications into hidden-input writes.
#[wasm_bindgen(js_name = formUpdates)]
pub fn form_updates(changes: JsValue) -> Result<JsValue, JsValue> {
    let changes: Vec<MappingChange> = serde_wasm_bindgen::from_value(changes)
        .map_err(|e| JsValue::from_str(&format!("bad changes: {e}")))?;
    serde_wasm_bindgen::to_value(&form::form_updates(&changes))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render a single mapping value in the host form's 1-based convention.
#[wasm_bindgen(js_name = formValue)]
pub fn form_value(term: Option<usize>) -> String {
    form::form_value(term)
}
