//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The state pieces
//! are owned independently; every transition below is synchronous, and the
//! only async step (the catalog request) lives in `AppContext`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::{CatalogFetcher, CatalogView, FetchTicket};
use crate::comparison::{self, ComparisonResult};
use crate::config::AppConfig;
use crate::error::{CatalogError, CompareError};
use crate::filter::FilterState;
use crate::flags::{ui_flags, UiFlags};
use crate::models::{Product, ProductId};
use crate::selection::{SelectionSet, ToggleOutcome};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Draft and applied category filters
    pub filter: FilterState,
    /// Product list for the applied filter
    pub catalog: CatalogFetcher,
    /// Products picked for comparison
    pub selection: SelectionSet,
    /// Last computed comparison, if any
    pub comparison: Option<ComparisonResult>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            filter: FilterState::default(),
            catalog: CatalogFetcher::new(config.page_size),
            selection: SelectionSet::default(),
            comparison: None,
        }
    }

    pub fn catalog_view(&self) -> &CatalogView {
        self.catalog.view()
    }

    pub fn flags(&self) -> UiFlags {
        ui_flags(&self.filter, &self.selection, self.catalog.view())
    }

    /// Commit the draft filter. Returns the fetch to run, or None when the
    /// draft was empty and nothing changed.
    pub fn apply_filter(&mut self) -> Option<FetchTicket> {
        if !self.filter.apply() {
            return None;
        }
        self.catalog.begin(self.filter.applied())
    }

    /// Empty both filter sets and the catalog. Selection is kept.
    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.catalog.reset();
    }

    /// Re-run the fetch for the current applied filter
    pub fn retry_fetch(&mut self) -> Option<FetchTicket> {
        self.catalog.begin(self.filter.applied())
    }

    pub fn finish_fetch(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<Vec<Product>, CatalogError>,
    ) -> bool {
        self.catalog.resolve(ticket, outcome)
    }

    pub fn toggle_product(&mut self, id: ProductId) -> ToggleOutcome {
        self.selection.toggle(id)
    }

    /// Build a comparison without touching state
    pub fn build_comparison(&self) -> Result<ComparisonResult, CompareError> {
        comparison::compare(&self.selection, self.catalog.view())
    }

    /// Replace the stored comparison; on error nothing changes
    pub fn compare(&mut self) -> Result<&ComparisonResult, CompareError> {
        let result = self.build_comparison()?;
        Ok(self.comparison.insert(result))
    }

    /// Run `compare` and return the message to show, if any
    pub fn compare_with_notice(&mut self) -> Option<String> {
        self.compare().err().map(|err| {
            tracing::debug!(error = %err, "comparison rejected");
            err.to_string()
        })
    }

    pub fn clear_comparison(&mut self) {
        self.comparison = None;
    }

    /// Empty the selection and drop the comparison with it
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.clear_comparison();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStatus;
    use crate::comparison::PriceRange;
    use serde_json::json;

    fn laptops() -> Vec<Product> {
        [(1, 999.99, 4.5), (2, 799.00, 4.0), (3, 1199.50, 4.8)]
            .into_iter()
            .map(|(id, price, rating)| {
                serde_json::from_value(json!({
                    "id": id,
                    "name": format!("Laptop {}", id),
                    "category": "Laptops",
                    "price": price,
                    "rating": rating,
                    "brand": "Acme"
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_apply_with_empty_draft_issues_nothing() {
        let mut state = AppState::default();
        assert!(state.apply_filter().is_none());
        assert!(state.filter.applied().is_empty());
        assert_eq!(state.catalog_view().status, CatalogStatus::Idle);
        assert_eq!(state.catalog.latest_seq(), 0);
    }

    #[test]
    fn test_reapplying_same_filter_is_new_request() {
        let mut state = AppState::default();
        state.filter.set_draft(["TVs"]);
        let first = state.apply_filter().unwrap();
        let second = state.apply_filter().unwrap();
        assert!(second.seq() > first.seq());
        assert!(!state.finish_fetch(&first, Ok(Vec::new())));
    }

    #[test]
    fn test_clear_filter_resets_catalog_from_any_state() {
        let mut state = AppState::default();
        state.filter.set_draft(["Laptops"]);
        let ticket = state.apply_filter().unwrap();
        state.finish_fetch(&ticket, Ok(laptops()));

        state.clear_filter();
        assert_eq!(state.catalog_view().status, CatalogStatus::Idle);
        assert!(state.catalog_view().items.is_empty());

        state.filter.set_draft(["Laptops"]);
        let ticket = state.apply_filter().unwrap();
        state.clear_filter();
        assert!(!state.finish_fetch(&ticket, Ok(laptops())));
        assert_eq!(state.catalog_view().status, CatalogStatus::Idle);
    }

    #[test]
    fn test_retry_uses_applied_filter() {
        let mut state = AppState::default();
        state.filter.set_draft(["Smartphones"]);
        let ticket = state.apply_filter().unwrap();
        state.finish_fetch(&ticket, Err(CatalogError::Status(500)));
        assert!(state.flags().show_error);

        // Editing the draft must not leak into the retry
        state.filter.set_draft(["TVs"]);
        let retry = state.retry_fetch().unwrap();
        assert_eq!(retry.query.categories, vec!["Smartphones".to_string()]);
        assert_eq!(state.catalog_view().status, CatalogStatus::Loading);
        assert!(state.catalog_view().error_message.is_none());
    }

    #[test]
    fn test_insufficient_selection_leaves_state() {
        let mut state = AppState::default();
        state.filter.set_draft(["Laptops"]);
        let ticket = state.apply_filter().unwrap();
        state.finish_fetch(&ticket, Ok(laptops()));
        state.toggle_product(ProductId::Int(1));

        let before = state.clone();
        assert_eq!(
            state.compare().unwrap_err(),
            CompareError::InsufficientSelection { selected: 1 }
        );
        assert_eq!(state.selection, before.selection);
        assert!(state.comparison.is_none());
    }

    #[test]
    fn test_compare_then_clear_selection_scenario() {
        let mut state = AppState::default();
        state.filter.set_draft(["Laptops"]);
        let ticket = state.apply_filter().unwrap();
        assert_eq!(ticket.query.categories, vec!["Laptops".to_string()]);
        assert!(state.finish_fetch(&ticket, Ok(laptops())));
        assert_eq!(state.catalog_view().items.len(), 3);

        state.toggle_product(ProductId::Int(1));
        state.toggle_product(ProductId::Int(2));
        let result = state.compare().unwrap();
        assert_eq!(result.products.len(), 2);
        assert_eq!(result.summary.price_range, PriceRange { min: 799.00, max: 999.99 });
        assert!((result.summary.average_rating - 4.25).abs() < 1e-9);
        assert_eq!(result.summary.categories, vec!["Laptops".to_string()]);

        let catalog_before = state.catalog_view().clone();
        state.clear_selection();
        assert!(state.comparison.is_none());
        assert!(state.selection.is_empty());
        assert_eq!(state.catalog_view(), &catalog_before);
    }

    #[test]
    fn test_compare_notice_text() {
        let mut state = AppState::default();
        state.filter.set_draft(["Laptops"]);
        let ticket = state.apply_filter().unwrap();
        state.finish_fetch(&ticket, Ok(laptops()));

        state.toggle_product(ProductId::Int(1));
        assert_eq!(
            state.compare_with_notice().as_deref(),
            Some("Please select at least 2 products to compare")
        );
        assert!(state.comparison.is_none());

        state.toggle_product(ProductId::Int(2));
        assert_eq!(state.compare_with_notice(), None);
        assert_eq!(state.comparison.as_ref().unwrap().products.len(), 2);
    }

    #[test]
    fn test_comparison_is_a_snapshot() {
        let mut state = AppState::default();
        state.filter.set_draft(["Laptops"]);
        let ticket = state.apply_filter().unwrap();
        state.finish_fetch(&ticket, Ok(laptops()));
        state.toggle_product(ProductId::Int(1));
        state.toggle_product(ProductId::Int(3));
        state.compare().unwrap();

        state.toggle_product(ProductId::Int(2));
        state.clear_filter();

        let stored = state.comparison.as_ref().unwrap();
        assert_eq!(stored.products.len(), 2);
        assert_eq!(state.selection.len(), 3);
    }

    #[test]
    fn test_stale_selection_after_refilter() {
        let mut state = AppState::default();
        state.filter.set_draft(["Laptops"]);
        let ticket = state.apply_filter().unwrap();
        state.finish_fetch(&ticket, Ok(laptops()));
        state.toggle_product(ProductId::Int(1));
        state.toggle_product(ProductId::Int(2));

        state.filter.set_draft(["TVs"]);
        let ticket = state.apply_filter().unwrap();
        state.finish_fetch(&ticket, Ok(Vec::new()));

        assert_eq!(state.selection.len(), 2);
        assert_eq!(state.compare().unwrap_err(), CompareError::NoMatchingProducts);
    }
}
