//! Category Filter State
//!
//! The draft is what the user is editing; the applied set is what the
//! catalog was last fetched for. Editing the draft never touches `applied`.

use std::collections::BTreeSet;

/// Categories offered by the filter bar
pub const CATEGORY_OPTIONS: [&str; 4] = ["Laptops", "Smartphones", "Headphones", "TVs"];

/// Unordered category selection; kept sorted so queries are deterministic
pub type CategorySet = BTreeSet<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    draft: CategorySet,
    applied: CategorySet,
}

impl FilterState {
    pub fn draft(&self) -> &CategorySet {
        &self.draft
    }

    /// Empty means no catalog is loaded
    pub fn applied(&self) -> &CategorySet {
        &self.applied
    }

    /// Replace the draft; any cardinality is allowed
    pub fn set_draft<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft = categories.into_iter().map(Into::into).collect();
        tracing::debug!(draft = ?self.draft, "filter draft replaced");
    }

    /// Add or remove a single category from the draft
    pub fn toggle_draft(&mut self, category: &str) {
        if !self.draft.remove(category) {
            self.draft.insert(category.to_string());
        }
        tracing::debug!(draft = ?self.draft, "filter draft toggled");
    }

    pub fn can_apply(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Commit the draft. Returns false (and changes nothing) for an empty draft.
    pub fn apply(&mut self) -> bool {
        if !self.can_apply() {
            return false;
        }
        self.applied = self.draft.clone();
        tracing::info!(applied = ?self.applied, "filter applied");
        true
    }

    pub fn clear(&mut self) {
        self.draft.clear();
        self.applied.clear();
        tracing::info!("filter cleared");
    }

    pub fn is_applied(&self) -> bool {
        !self.applied.is_empty()
    }

    /// Draft differs from what the catalog currently reflects
    pub fn has_pending_changes(&self) -> bool {
        self.draft != self.applied
    }
}
