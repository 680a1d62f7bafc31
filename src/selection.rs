//! Product Selection
//!
//! Bounded, insertion-ordered set of product ids chosen for comparison.
//! Ids stay selected across catalog refetches.

use crate::models::ProductId;

/// Most products that can be compared at once
pub const MAX_SELECTION: usize = 5;

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Set was full; nothing changed
    CapReached,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<ProductId>,
}

impl SelectionSet {
    pub fn toggle(&mut self, id: ProductId) -> ToggleOutcome {
        let outcome = if let Some(pos) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(pos);
            ToggleOutcome::Removed
        } else if self.ids.len() < MAX_SELECTION {
            self.ids.push(id);
            ToggleOutcome::Added
        } else {
            ToggleOutcome::CapReached
        };
        tracing::debug!(?outcome, count = self.ids.len(), "selection toggled");
        outcome
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTION
    }

    /// "3, 7, 12" for the selection summary line
    pub fn joined_ids(&self) -> String {
        self.ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    }
}
