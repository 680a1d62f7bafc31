//! Filter Bar Component
//!
//! Category checkboxes edit the draft; nothing is fetched until Apply.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::CATEGORY_OPTIONS;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let flags = Memo::new(move |_| store.read().flags());
    let apply_disabled = move || !flags.get().apply_enabled;
    let pending = move || {
        let filter = store.filter().read();
        filter.is_applied() && filter.has_pending_changes()
    };

    view! {
        <div class="filter-bar">
            <label class="filter-label">"Choose one or more categories, then apply:"</label>
            <div class="filter-options">
                {CATEGORY_OPTIONS
                    .iter()
                    .map(|&category| {
                        let checked = move || store.filter().read().draft().contains(category);
                        view! {
                            <label class="filter-option">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |_| ctx.toggle_draft(category)
                                />
                                {category}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="filter-actions">
                <button
                    on:click=move |_| {
                        ctx.set_draft(CATEGORY_OPTIONS.iter().map(|c| c.to_string()).collect())
                    }
                >
                    "All"
                </button>
                <button on:click=move |_| ctx.apply() disabled=apply_disabled>
                    "Apply filter"
                </button>
                <button on:click=move |_| ctx.clear_filter()>"Clear"</button>
            </div>
            <Show when=pending>
                <span class="filter-pending">"Filter changed, apply to refresh"</span>
            </Show>
        </div>
    }
}
