//! Frontend Configuration
//!
//! Resolved at build time; a CSR bundle has no process environment at runtime.

/// Used when `PRODUCT_API_BASE` is not set while building
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Largest page the catalog service accepts; one page holds the whole filtered catalog
pub const DEFAULT_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog service origin, without trailing slash
    pub api_base_url: String,
    pub page_size: u32,
}

impl AppConfig {
    pub fn new(api_base_url: &str) -> Self {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self {
            api_base_url: api_base_url.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Read `PRODUCT_API_BASE` captured by the compiler
    pub fn from_env() -> Self {
        Self::new(option_env!("PRODUCT_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn products_url(&self) -> String {
        format!("{}/v1/products", self.api_base_url)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::new("https://api.example.com/");
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.products_url(), "https://api.example.com/v1/products");
    }

    #[test]
    fn test_blank_base_falls_back() {
        let config = AppConfig::new("  ");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
        assert_eq!(config.page_size, 100);
    }
}
