//! Exercise: the interaction surface over the matching engine.
//!
//! Both input modalities, native drag-and-drop and click-to-select, lower
//! to the same two engine operations. Gesture methods return the ordered
//! notification list; an ineligible or malformed gesture returns an empty
//! list and changes nothing.

use super::engine::MatchingEngine;
use super::payload;
use super::selection::Selection;
use super::types::{Definition, ItemRef, MappingChange, Side, Term};

// =============================================================================
// Exercise
// =============================================================================

/// One matching exercise instance: the item lists, the live mapping, the
/// pending click selection, and the display orientation.
pub struct Exercise {
    terms: Vec<Term>,
    definitions: Vec<Definition>,
    engine: MatchingEngine,
    selection: Selection,
    swapped: bool,
}

impl Exercise {
    /// Build an exercise, seeding the mapping from the definitions.
    ///
    /// A stale form can name a term past the parsed list; such a seed is
    /// treated as unanswered rather than placing a chip that cannot render.
    pub fn new(terms: Vec<Term>, mut definitions: Vec<Definition>) -> Self {
        for def in &mut definitions {
            if matches!(def.matched_term_index, Some(t) if t >= terms.len()) {
                def.matched_term_index = None;
            }
        }
        let engine = MatchingEngine::seeded(&definitions);
        Self {
            terms,
            definitions,
            engine,
            selection: Selection::default(),
            swapped: false,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn swapped(&self) -> bool {
        self.swapped
    }

    /// Which side the pool (draggable/selectable items) shows right now.
    pub fn pool_side(&self) -> Side {
        if self.swapped {
            Side::Definitions
        } else {
            Side::Terms
        }
    }

    // ── Drag protocol ──────────────────────────────────────────────────

    /// Drop a dragged payload onto the zone at `fixed_index`.
    pub fn drop_on_zone(&mut self, fixed_index: usize, payload: &str) -> Vec<MappingChange> {
        let dragged = match payload::decode(payload) {
            Some(index) => index,
            None => return Vec::new(),
        };
        self.place(fixed_index, dragged)
    }

    /// Drop a dragged payload back onto the available pool, freeing the
    /// zone it came from. Only indices currently placed on the draggable
    /// side qualify; anything else is a stray drop.
    pub fn drop_to_pool(&mut self, payload: &str) -> Vec<MappingChange> {
        let dragged = match payload::decode(payload) {
            Some(index) => index,
            None => return Vec::new(),
        };
        match self.pool_side() {
            Side::Terms => match self.engine.definition_for_term(dragged) {
                Some(definition) => self.engine.unassign(definition),
                None => Vec::new(),
            },
            Side::Definitions => self.engine.unassign(dragged),
        }
    }

    // ── Click protocol ─────────────────────────────────────────────────

    /// Click an item in the available pool: toggle or switch the
    /// selection. Placed or unknown indices are strays and are ignored.
    pub fn click_pool_item(&mut self, index: usize) {
        let side = self.pool_side();
        if !self.in_pool(side, index) {
            return;
        }
        self.selection.click(ItemRef::new(side, index));
    }

    /// Click a zone while a selection is pending: place the held item
    /// there. Zones are not click targets while nothing is selected.
    pub fn click_zone(&mut self, fixed_index: usize) -> Vec<MappingChange> {
        let held = match self.selection.held() {
            Some(item) if item.side == self.pool_side() => item,
            _ => return Vec::new(),
        };
        if !self.fixed_in_range(fixed_index) {
            return Vec::new();
        }
        self.place(fixed_index, held.index)
    }

    /// Click the chip placed in the zone at `fixed_index`: a placed item
    /// is its own remove affordance, whatever the selection holds.
    pub fn click_placed_chip(&mut self, fixed_index: usize) -> Vec<MappingChange> {
        match self.pool_side() {
            Side::Terms => self.engine.unassign(fixed_index),
            Side::Definitions => match self.engine.definition_for_term(fixed_index) {
                Some(definition) => self.engine.unassign(definition),
                None => Vec::new(),
            },
        }
    }

    // ── Orientation ────────────────────────────────────────────────────

    /// Flip which side is the pool. Presentation only, the mapping is
    /// untouched. A pending selection no longer names a pool item, so it
    /// clears.
    pub fn set_swapped(&mut self, swapped: bool) {
        if self.swapped != swapped {
            self.swapped = swapped;
            self.selection.clear();
        }
    }

    pub fn toggle_swapped(&mut self) {
        self.set_swapped(!self.swapped);
    }

    // ── Internal ───────────────────────────────────────────────────────

    /// Place pool item `item_index` into the zone at `fixed_index`,
    /// translated for orientation. Shared by both modalities.
    fn place(&mut self, fixed_index: usize, item_index: usize) -> Vec<MappingChange> {
        let (definition, term) = match self.pool_side() {
            Side::Terms => (fixed_index, item_index),
            Side::Definitions => (item_index, fixed_index),
        };
        if definition >= self.definitions.len() || term >= self.terms.len() {
            return Vec::new();
        }
        let changes = self.engine.assign(definition, term);
        // Any successful assignment invalidates a pending selection,
        // whichever modality produced it.
        self.selection.clear();
        changes
    }

    fn in_pool(&self, side: Side, index: usize) -> bool {
        match side {
            Side::Terms => index < self.terms.len() && !self.engine.is_term_used(index),
            Side::Definitions => {
                index < self.definitions.len() && !self.engine.is_definition_used(index)
            }
        }
    }

    fn fixed_in_range(&self, fixed_index: usize) -> bool {
        match self.pool_side() {
            Side::Terms => fixed_index < self.definitions.len(),
            Side::Definitions => fixed_index < self.terms.len(),
        }
    }
}
