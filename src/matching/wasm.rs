//! WASM bridge for the matching exercise widget.
//!
//! Wraps the pure `Exercise` core and forwards every mapping notification,
//! in order and exactly once each, to the registered host-form callback.

use wasm_bindgen::prelude::*;

use super::exercise::Exercise;
use super::types::{Definition, MappingChange, Term};
use super::view;

/// JS-facing matching exercise widget.
#[wasm_bindgen]
pub struct MatchingExercise {
    inner: Exercise,
    on_change: Option<js_sys::Function>,
    data_version: u32,
}

#[wasm_bindgen]
impl MatchingExercise {
    /// Build a widget from JS arrays of term and definition records.
    #[wasm_bindgen(constructor)]
    pub fn new(terms: JsValue, definitions: JsValue) -> Result<MatchingExercise, JsValue> {
        let terms: Vec<Term> = serde_wasm_bindgen::from_value(terms)
            .map_err(|e| JsValue::from_str(&format!("bad terms: {e}")))?;
        let definitions: Vec<Definition> = serde_wasm_bindgen::from_value(definitions)
            .map_err(|e| JsValue::from_str(&format!("bad definitions: {e}")))?;
        Ok(MatchingExercise {
            inner: Exercise::new(terms, definitions),
            on_change: None,
            data_version: 0,
        })
    }

    /// Register the host-form sync callback.
    ///
    /// Called as `(definitionIndex, termIndex|null)` once per logical
    /// mapping change, displacements included, in engine order.
    #[wasm_bindgen(js_name = onMappingChanged)]
    pub fn on_mapping_changed(&mut self, callback: js_sys::Function) {
        self.on_change = Some(callback);
    }

    /// Monotone counter bumped on every gesture; cheap re-render check.
    #[wasm_bindgen(js_name = dataVersion)]
    pub fn data_version(&self) -> u32 {
        self.data_version
    }

    // ── Drag protocol ──────────────────────────────────────────────────

    /// Drop the platform drag payload onto the zone at `fixed_index`.
    #[wasm_bindgen(js_name = dropOnZone)]
    pub fn drop_on_zone(&mut self, fixed_index: usize, payload: &str) {
        let changes = self.inner.drop_on_zone(fixed_index, payload);
        self.finish(changes);
    }

    /// Drop the platform drag payload back onto the available pool.
    #[wasm_bindgen(js_name = dropToPool)]
    pub fn drop_to_pool(&mut self, payload: &str) {
        let changes = self.inner.drop_to_pool(payload);
        self.finish(changes);
    }

    // ── Click protocol ─────────────────────────────────────────────────

    /// Click an item in the available pool (select/toggle).
    #[wasm_bindgen(js_name = clickPoolItem)]
    pub fn click_pool_item(&mut self, index: usize) {
        self.inner.click_pool_item(index);
        self.bump();
    }

    /// Click the zone at `fixed_index` (places the pending selection).
    #[wasm_bindgen(js_name = clickZone)]
    pub fn click_zone(&mut self, fixed_index: usize) {
        let changes = self.inner.click_zone(fixed_index);
        self.finish(changes);
    }

    /// Click the chip placed in the zone at `fixed_index` (removes it).
    #[wasm_bindgen(js_name = clickPlacedChip)]
    pub fn click_placed_chip(&mut self, fixed_index: usize) {
        let changes = self.inner.click_placed_chip(fixed_index);
        self.finish(changes);
    }

    // ── Orientation ────────────────────────────────────────────────────

    /// Swap which side is draggable. Mapping state is untouched.
    #[wasm_bindgen(js_name = toggleSwapped)]
    pub fn toggle_swapped(&mut self) {
        self.inner.toggle_swapped();
        self.bump();
    }

    #[wasm_bindgen(js_name = isSwapped)]
    pub fn is_swapped(&self) -> bool {
        self.inner.swapped()
    }

    // ── Reads ──────────────────────────────────────────────────────────

    /// Current render snapshot.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&view::snapshot(&self.inner))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current pairs as `[[definitionIndex, termIndex], ..]`.
    pub fn pairs(&self) -> Result<JsValue, JsValue> {
        let pairs: Vec<(usize, usize)> = self.inner.engine().pairs().collect();
        serde_wasm_bindgen::to_value(&pairs).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Widget statistics
    /// Returns { termCount: number, definitionCount: number, pairCount: number, swapped: boolean }
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        let stats = serde_json::json!({
            "termCount": self.inner.terms().len(),
            "definitionCount": self.inner.definitions().len(),
            "pairCount": self.inner.engine().pair_count(),
            "swapped": self.inner.swapped(),
        });

        serde_wasm_bindgen::to_value(&stats).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl MatchingExercise {
    fn bump(&mut self) {
        self.data_version = self.data_version.wrapping_add(1);
    }

    fn finish(&mut self, changes: Vec<MappingChange>) {
        self.bump();
        let callback = match &self.on_change {
            Some(callback) => callback,
            None => return,
        };
        for change in &changes {
            let definition = JsValue::from_f64(change.definition as f64);
            let term = match change.term {
                Some(t) => JsValue::from_f64(t as f64),
                None => JsValue::NULL,
            };
            if let Err(e) = callback.call2(&JsValue::NULL, &definition, &term) {
                web_sys::console::error_1(
                    &format!("[MatchingExercise] mapping-changed callback failed: {e:?}").into(),
                );
            }
        }
    }
}
