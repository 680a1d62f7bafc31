//! UI Components
//!
//! Leptos components over the app store.

mod comparison_view;
mod filter_bar;
mod product_grid;
mod selection_panel;
mod status_banner;

pub use comparison_view::ComparisonView;
pub use filter_bar::FilterBar;
pub use product_grid::ProductGrid;
pub use selection_panel::SelectionPanel;
pub use status_banner::StatusBanner;
