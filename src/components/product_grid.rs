//! Product Grid Component
//!
//! Catalog cards with a select/deselect button each.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::format::{format_price, format_rating};
use crate::models::Product;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let store = use_app_store();
    let flags = Memo::new(move |_| store.read().flags());

    view! {
        <Show when=move || flags.get().show_catalog>
            <section class="product-section">
                <div class="product-section-header">
                    <h2>{move || flags.get().catalog_heading}</h2>
                    {move || {
                        let count = store.selection().read().len();
                        (count > 0).then(|| view! {
                            <span class="selected-badge">{format!("{} selected", count)}</span>
                        })
                    }}
                </div>
                <div class="product-grid">
                    <For
                        each=move || store.catalog().read().view().items.clone()
                        key=|product| product.id.clone()
                        children=move |product| view! { <ProductCard product=product /> }
                    />
                </div>
            </section>
        </Show>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = product.id.clone();
    let selected = Memo::new(move |_| store.selection().read().contains(&id));
    let toggle_id = product.id.clone();
    // Selecting needs an applied filter and a free slot; deselecting is always allowed
    let toggle_disabled = move || {
        let flags = store.read().flags();
        !selected.get() && (!flags.selection_enabled || flags.selection_full)
    };

    view! {
        <div class="product-card" class:selected=move || selected.get()>
            <div class="product-image">
                <img src=product.image_url.clone().unwrap_or_default() alt=product.name.clone() />
                <Show when=move || selected.get()>
                    <span class="selected-tag">"✓ Selected"</span>
                </Show>
            </div>
            <div class="product-body">
                <h3>{product.name.clone()}</h3>
                <p class="product-brand">{product.brand.clone()}</p>
                <p class="product-description">{product.description.clone()}</p>
                <p class="product-category">{product.category.clone()}</p>
                <p class="product-rating">{format!("Rating: {}⭐", format_rating(product.rating))}</p>
                <div class="product-footer">
                    <span class="product-price">{format_price(product.price)}</span>
                    <button
                        class="select-btn"
                        class:active=move || selected.get()
                        disabled=toggle_disabled
                        on:click=move |_| ctx.toggle(toggle_id.clone())
                    >
                        {move || if selected.get() { "✓ Selected" } else { "+ Select" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
