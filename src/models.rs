//! Frontend Models
//!
//! Data structures matching the catalog service payloads.

use std::collections::BTreeMap;
use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Product identifier; the service sends integers but the client treats it as opaque
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ProductId {
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for ProductId {
    /// Integers, whole-number floats (`2.0`) and strings
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => {
                if let Some(id) = n.as_i64() {
                    return Ok(ProductId::Int(id));
                }
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                        Ok(ProductId::Int(f as i64))
                    }
                    _ => Err(de::Error::custom(format!("product id {} is not a whole number", n))),
                }
            }
            Value::String(s) => Ok(ProductId::Text(s)),
            other => Err(de::Error::custom(format!("invalid product id: {}", other))),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Int(id) => write!(f, "{}", id),
            ProductId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId::Int(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

/// Technical specification fields keyed by name (processor, memory, display...)
pub type Specifications = BTreeMap<String, Option<String>>;

/// Product data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    /// Missing or non-numeric values decode as 0
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: f64,
    /// 0..=5, missing or non-numeric values decode as 0
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub brand: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub specifications: Option<Specifications>,
}

impl Product {
    /// Specification entries that carry a value
    pub fn spec_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.specifications
            .iter()
            .flat_map(|specs| specs.iter())
            .filter_map(|(key, value)| value.as_deref().map(|v| (key.as_str(), v)))
    }

    pub fn spec(&self, key: &str) -> Option<&str> {
        self.specifications.as_ref()?.get(key)?.as_deref()
    }
}

/// Paginated envelope returned by `GET /v1/products`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub items: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl CatalogPage {
    /// Build a page from an already-validated `items` array and the rest of
    /// the envelope. Pagination fields fall back to defaults when missing or
    /// odd; items that do not decode are skipped.
    pub fn from_parts(items: &[Value], envelope: &Value) -> Self {
        let items: Vec<Product> = items
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match Product::deserialize(raw) {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping undecodable catalog item");
                    None
                }
            })
            .collect();

        let count = |key: &str| envelope.get(key).and_then(count_from_value);
        Self {
            total: count("total").unwrap_or(items.len() as u64),
            page: count("page").map_or(1, |n| n.max(1) as u32),
            page_size: count("page_size").map_or(0, |n| n as u32),
            items,
        }
    }
}

fn count_from_value(value: &Value) -> Option<u64> {
    number_from_value(value)
        .filter(|n| *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u64)
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value).unwrap_or(0.0))
}

fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}
