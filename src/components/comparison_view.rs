//! Comparison View Component
//!
//! Summary tiles and the side-by-side table for the stored comparison.

use leptos::prelude::*;

use crate::comparison::ComparisonResult;
use crate::context::use_app_context;
use crate::format::{excerpt, format_price, format_rating};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ComparisonView() -> impl IntoView {
    let store = use_app_store();

    move || {
        store
            .comparison()
            .read()
            .clone()
            .map(|result| view! { <ComparisonTable result=result /> })
    }
}

#[component]
fn ComparisonTable(result: ComparisonResult) -> impl IntoView {
    let ctx = use_app_context();
    let summary = result.summary.clone();
    let spec_rows = result.spec_rows();

    let product_rows = result
        .products
        .iter()
        .map(|product| {
            view! {
                <tr>
                    <td>
                        <div class="comparison-product">
                            <img src=product.image_url.clone().unwrap_or_default() alt=product.name.clone() />
                            <div>
                                <strong>{product.name.clone()}</strong>
                                <p>{excerpt(&product.description)}</p>
                            </div>
                        </div>
                    </td>
                    <td class="price">{format_price(product.price)}</td>
                    <td>{format!("{} ⭐", product.rating)}</td>
                    <td>{product.category.clone()}</td>
                    <td>{product.brand.clone()}</td>
                </tr>
            }
        })
        .collect_view();

    let spec_table = (!spec_rows.is_empty()).then(|| {
        let header = result
            .products
            .iter()
            .map(|product| view! { <th>{product.name.clone()}</th> })
            .collect_view();
        let rows = spec_rows
            .into_iter()
            .map(|row| {
                let cells = row
                    .values
                    .into_iter()
                    .map(|value| view! { <td>{value.unwrap_or_else(|| "-".to_string())}</td> })
                    .collect_view();
                view! {
                    <tr>
                        <th>{row.key}</th>
                        {cells}
                    </tr>
                }
            })
            .collect_view();
        view! {
            <table class="spec-table">
                <thead>
                    <tr>
                        <th>"Specification"</th>
                        {header}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
    });

    view! {
        <div class="comparison-results">
            <h2>"Comparison results"</h2>
            <div class="summary-tiles">
                <div class="summary-tile">
                    <h4>"💰 Price range"</h4>
                    <p>
                        {format!(
                            "{} - {}",
                            format_price(summary.price_range.min),
                            format_price(summary.price_range.max),
                        )}
                    </p>
                </div>
                <div class="summary-tile">
                    <h4>"⭐ Average rating"</h4>
                    <p>{format!("{} ⭐", format_rating(summary.average_rating))}</p>
                </div>
                <div class="summary-tile">
                    <h4>"📂 Categories"</h4>
                    <p>{summary.categories.join(", ")}</p>
                </div>
            </div>
            <table class="comparison-table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th>"Price"</th>
                        <th>"Rating"</th>
                        <th>"Category"</th>
                        <th>"Brand"</th>
                    </tr>
                </thead>
                <tbody>{product_rows}</tbody>
            </table>
            {spec_table}
            <button class="new-comparison-btn" on:click=move |_| ctx.clear_selection()>
                "New comparison"
            </button>
        </div>
    }
}
