//! Click-to-place selection state.
//!
//! At most one pending item. Selection is gesture-transient: any successful
//! assignment clears it, whichever modality produced the assignment.

use super::types::ItemRef;

/// Selection state machine: `Empty` or `Holding` one item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Empty,
    Holding(ItemRef),
}

impl Selection {
    /// Click on a selectable item: select it, toggle it off when it was
    /// already held, or switch to it from another item.
    pub fn click(&mut self, item: ItemRef) {
        *self = match *self {
            Selection::Holding(held) if held == item => Selection::Empty,
            _ => Selection::Holding(item),
        };
    }

    pub fn clear(&mut self) {
        *self = Selection::Empty;
    }

    pub fn held(&self) -> Option<ItemRef> {
        match *self {
            Selection::Holding(item) => Some(item),
            Selection::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }
}
