//! Product Comparison
//!
//! Computed entirely on the client from the selection and the current
//! catalog. A result is a snapshot: later selection or catalog changes do
//! not touch it.

use serde::Serialize;

use crate::catalog::CatalogView;
use crate::error::CompareError;
use crate::models::Product;
use crate::selection::SelectionSet;

/// Fewest products worth comparing
pub const MIN_COMPARISON: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub price_range: PriceRange,
    pub average_rating: f64,
    /// Distinct non-empty categories, first-seen order
    pub categories: Vec<String>,
}

impl ComparisonSummary {
    /// Aggregate over `products`; all zero when there are none
    pub fn from_products(products: &[Product]) -> Self {
        if products.is_empty() {
            return Self::default();
        }

        let price_range = products.iter().skip(1).fold(
            PriceRange { min: products[0].price, max: products[0].price },
            |range, p| PriceRange { min: range.min.min(p.price), max: range.max.max(p.price) },
        );

        let average_rating =
            products.iter().map(|p| p.rating).sum::<f64>() / products.len() as f64;

        let mut categories: Vec<String> = Vec::new();
        for product in products {
            if !product.category.is_empty() && !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }

        Self { price_range, average_rating, categories }
    }
}

/// One specification key across the compared products
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecRow {
    pub key: String,
    /// Aligned with `ComparisonResult::products`
    pub values: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Catalog order, restricted to selected ids
    pub products: Vec<Product>,
    pub summary: ComparisonSummary,
}

impl ComparisonResult {
    /// Specification keys present on any compared product, in key order
    pub fn spec_rows(&self) -> Vec<SpecRow> {
        let mut keys: Vec<&str> = self
            .products
            .iter()
            .flat_map(|p| p.spec_entries().map(|(key, _)| key))
            .collect();
        keys.sort_unstable();
        keys.dedup();

        keys.into_iter()
            .map(|key| SpecRow {
                key: key.to_string(),
                values: self.products.iter().map(|p| p.spec(key).map(str::to_string)).collect(),
            })
            .collect()
    }
}

/// Compare the selected products that are present in `catalog`.
///
/// Selected ids missing from the catalog are skipped. If none are left the
/// comparison fails with `NoMatchingProducts` rather than presenting an
/// all-zero summary.
pub fn compare(
    selection: &SelectionSet,
    catalog: &CatalogView,
) -> Result<ComparisonResult, CompareError> {
    if selection.len() < MIN_COMPARISON {
        return Err(CompareError::InsufficientSelection { selected: selection.len() });
    }

    let products: Vec<Product> = catalog
        .items
        .iter()
        .filter(|p| selection.contains(&p.id))
        .cloned()
        .collect();

    if products.is_empty() {
        tracing::warn!(selected = selection.len(), "no selected products in current catalog");
        return Err(CompareError::NoMatchingProducts);
    }

    let summary = ComparisonSummary::from_products(&products);
    tracing::info!(compared = products.len(), "comparison computed");
    Ok(ComparisonResult { products, summary })
}
