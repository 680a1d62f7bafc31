//! Selection Panel Component
//!
//! Shows what is selected, with Compare and Clear buttons.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::selection::MAX_SELECTION;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SelectionPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let flags = Memo::new(move |_| store.read().flags());

    view! {
        <Show when=move || flags.get().show_selection_panel>
            <div class="selection-panel">
                <h3>
                    {move || {
                        format!(
                            "{} of {} products selected for comparison",
                            store.selection().read().len(),
                            MAX_SELECTION,
                        )
                    }}
                </h3>
                <p class="selection-ids">
                    {move || format!("IDs: {}", store.selection().read().joined_ids())}
                </p>
                <div class="selection-actions">
                    <button
                        class="compare-btn"
                        disabled=move || !flags.get().compare_enabled
                        on:click=move |_| ctx.compare()
                    >
                        {move || flags.get().compare_label}
                    </button>
                    <button class="clear-btn" on:click=move |_| ctx.clear_selection()>
                        "Clear selection"
                    </button>
                </div>
                {move || flags.get().selection_hint.map(|hint| view! { <p class="selection-hint">{hint}</p> })}
                {move || ctx.notice.get().map(|notice| view! { <p class="selection-notice">{notice}</p> })}
            </div>
        </Show>
    }
}
