//! ViceroyCore: Matching Exercise Engine
//!
//! A Rust/WASM implementation of the Viceroy matching widget core.
//!
//! # Architecture
//!
//! ## Matching Components (the widget core)
//! - `types.rs` - Core data structures (Term, Definition, MappingChange, ...)
//! - `engine.rs` - MatchingEngine: definition→term mapping with active uniqueness
//! - `selection.rs` - Click-to-place selection state machine
//! - `payload.rs` - Drag payload string codec
//! - `exercise.rs` - Exercise: both gesture protocols lowered onto the engine
//! - `view.rs` - Render-model snapshots for the JS side
//! - `wasm.rs` - MatchingExercise: JS-facing wrapper + host-form sync callback
//!
//! ## Lesson Components (page collaborator helpers)
//! - `parse.rs` - Scraped exercise rows → construction input (1-based → 0-based)
//! - `form.rs` - Mapping notifications → hidden-input writes (0-based → 1-based)
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { MatchingExercise, parseExercise, formUpdates } from 'viceroy-core';
//!
//! await init();
//!
//! const { terms, definitions } = parseExercise(scrapeRows(table));
//! const widget = new MatchingExercise(terms, definitions);
//!
//! widget.onMappingChanged((definitionIndex, termIndex) => {
//!   const input = inputs[definitionIndex];
//!   input.value = termIndex !== null ? String(termIndex + 1) : '';
//!   input.dispatchEvent(new Event('input', { bubbles: true }));
//! });
//!
//! zone.addEventListener('drop', (e) => {
//!   widget.dropOnZone(zoneIndex, e.dataTransfer.getData('text/plain'));
//!   render(widget.view());
//! });
//! ```

pub mod lesson;
pub mod matching;

// Public exports - Matching
pub use matching::*;

// Public exports - Lesson
pub use lesson::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("viceroy-core v{}", env!("CARGO_PKG_VERSION"))
}
