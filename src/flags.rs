//! Derived UI Flags
//!
//! Button states and visibility rules computed from the state pieces, kept
//! out of the view code so they can be checked without rendering.

use crate::catalog::CatalogView;
use crate::comparison::MIN_COMPARISON;
use crate::filter::FilterState;
use crate::selection::SelectionSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiFlags {
    pub apply_enabled: bool,
    /// Products can only be picked once a filter is applied
    pub selection_enabled: bool,
    pub selection_full: bool,
    pub show_selection_panel: bool,
    pub compare_enabled: bool,
    pub compare_label: &'static str,
    /// Shown while fewer than two products are selected
    pub selection_hint: Option<&'static str>,
    pub show_loading: bool,
    pub show_error: bool,
    /// Grid is hidden while loading or after a failure
    pub show_catalog: bool,
    pub catalog_heading: String,
}

pub fn ui_flags(filter: &FilterState, selection: &SelectionSet, catalog: &CatalogView) -> UiFlags {
    let loading = catalog.is_loading();
    let failed = catalog.is_failed();
    let selected = selection.len();

    UiFlags {
        apply_enabled: filter.can_apply(),
        selection_enabled: filter.is_applied(),
        selection_full: selection.is_full(),
        show_selection_panel: selected > 0,
        compare_enabled: selected >= MIN_COMPARISON && !loading,
        compare_label: if loading { "Comparing..." } else { "Compare selected products" },
        selection_hint: (selected > 0 && selected < MIN_COMPARISON)
            .then_some("Select at least 2 products to compare"),
        show_loading: loading,
        show_error: failed,
        show_catalog: !loading && !failed,
        catalog_heading: format!("Products ({})", catalog.items.len()),
    }
}
