//! Catalog Status Banner
//!
//! Loading spinner and the fetch error with a retry button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let flags = Memo::new(move |_| store.read().flags());
    let error_message = move || {
        store.catalog().read().view().error_message.clone().unwrap_or_default()
    };

    view! {
        <Show when=move || flags.get().show_loading>
            <div class="loading">
                <div class="spinner"></div>
                <p>"Loading products..."</p>
            </div>
        </Show>
        <Show when=move || flags.get().show_error>
            <div class="error-banner">
                <p class="error-message">{move || format!("❌ {}", error_message())}</p>
                <button on:click=move |_| ctx.retry_fetch()>"Try again"</button>
            </div>
        </Show>
    }
}
