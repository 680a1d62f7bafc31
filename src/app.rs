//! Product Comparison Hub App
//!
//! Main application component: filter bar, selection, comparison, catalog.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ComparisonView, FilterBar, ProductGrid, SelectionPanel, StatusBanner};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    tracing::info!(api = %config.api_base_url, "starting product comparison hub");

    // State
    let store = Store::new(AppState::new(&config));
    let notice = signal::<Option<String>>(None);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(store, config, notice));

    // Trace catalog status transitions
    Effect::new(move |_| {
        let status = store.catalog().read().view().status;
        tracing::debug!(?status, "catalog status");
    });

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"🛍️ Product Comparison Hub"</h1>
                <p>"Compare the latest tech products with advanced filtering"</p>
            </header>

            <main class="container">
                <FilterBar />
                <SelectionPanel />
                <ComparisonView />
                <StatusBanner />
                <ProductGrid />
            </main>
        </div>
    }
}
