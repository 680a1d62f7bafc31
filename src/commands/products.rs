//! Product Commands
//!
//! Bindings for `GET /v1/products`.

use async_trait::async_trait;
use serde_json::Value;

use crate::catalog::CatalogQuery;
use crate::config::AppConfig;
use crate::error::CatalogError;
use crate::models::CatalogPage;

/// Anything that can answer a catalog query.
///
/// Futures are `?Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_page(&self, query: &CatalogQuery) -> Result<CatalogPage, CatalogError>;
}

/// Catalog service reached over HTTP
#[derive(Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    products_url: String,
}

impl HttpCatalog {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            products_url: config.products_url(),
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, query: &CatalogQuery) -> Result<CatalogPage, CatalogError> {
        let response = self
            .client
            .get(&self.products_url)
            .query(&query.to_pairs())
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        decode_page(&body)
    }
}

/// Parse a response body into a page.
///
/// Bodies that are not JSON count as transport failures; JSON without an
/// `items` array is a malformed envelope. Anything else is accepted.
pub fn decode_page(body: &str) -> Result<CatalogPage, CatalogError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| CatalogError::Transport(e.to_string()))?;

    match value.get("items") {
        Some(Value::Array(items)) => Ok(CatalogPage::from_parts(items, &value)),
        _ => Err(CatalogError::MalformedResponse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductId;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    const LAPTOPS_BODY: &str = r#"{
        "items": [
            {"id": 1, "name": "MacBook Pro 14\" M3", "category": "Laptops", "price": 1999.99, "rating": 4.8, "brand": "Apple", "description": "M3"},
            {"id": 2, "name": "XPS 13", "category": "Laptops", "price": 1299.0, "rating": 4.5, "brand": "Dell", "description": "Compact"}
        ],
        "total": 27,
        "page": 1,
        "page_size": 100
    }"#;

    fn laptops_query() -> CatalogQuery {
        CatalogQuery {
            page: 1,
            page_size: 100,
            categories: vec!["Laptops".to_string(), "TVs".to_string()],
        }
    }

    /// Serve one canned response per connection, reporting each request line
    async fn serve(responses: Vec<String>) -> (String, mpsc::UnboundedReceiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            for response in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = socket.read(&mut buf).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                let text = String::from_utf8_lossy(&request);
                let _ = tx.send(text.lines().next().unwrap_or_default().to_string());
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.ok();
            }
        });

        (base, rx)
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
    }

    #[test]
    fn test_decode_well_formed_page() {
        let page = decode_page(LAPTOPS_BODY).unwrap();
        assert_eq!(page.total, 27);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].id, ProductId::Int(2));
    }

    #[test]
    fn test_missing_items_is_malformed() {
        assert_eq!(
            decode_page(r#"{"total": 0, "page": 1, "page_size": 100}"#),
            Err(CatalogError::MalformedResponse)
        );
    }

    #[test]
    fn test_non_array_items_is_malformed() {
        assert_eq!(decode_page(r#"{"items": {"id": 1}}"#), Err(CatalogError::MalformedResponse));
        assert_eq!(decode_page(r#"{"items": null}"#), Err(CatalogError::MalformedResponse));
        assert_eq!(decode_page(r#"[]"#), Err(CatalogError::MalformedResponse));
    }

    #[test]
    fn test_odd_pagination_fields_still_decode() {
        let page = decode_page(r#"{"items": [], "total": null, "page": 1, "page_size": "many"}"#).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.page_size, 0);
    }

    #[test]
    fn test_float_id_and_bad_item_keep_the_rest() {
        let page = decode_page(r#"{"items": [{"id": 1}, {"id": 2.0}, {"name": "no id"}], "total": 3}"#)
            .unwrap();
        let ids: Vec<_> = page.items.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec![ProductId::Int(1), ProductId::Int(2)]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_invalid_json_is_transport_error() {
        let err = decode_page("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
        assert!(err.to_string().starts_with("Network error: "));
    }

    #[test]
    fn test_products_url_from_config() {
        let catalog = HttpCatalog::new(&AppConfig::new("http://shop.local:8000/"));
        assert_eq!(catalog.products_url, "http://shop.local:8000/v1/products");
    }

    #[tokio::test]
    async fn test_http_status_then_success() {
        let (base, mut requests) = serve(vec![
            http_response("503 Service Unavailable", ""),
            http_response("200 OK", LAPTOPS_BODY),
        ])
        .await;
        let catalog = HttpCatalog::new(&AppConfig::new(&base));

        let err = catalog.fetch_page(&laptops_query()).await.unwrap_err();
        assert_eq!(err, CatalogError::Status(503));
        assert_eq!(err.to_string(), "HTTP error! status: 503");

        let page = catalog.fetch_page(&laptops_query()).await.unwrap();
        assert_eq!(page.items.len(), 2);

        let request_line = requests.recv().await.unwrap();
        assert_eq!(
            request_line,
            "GET /v1/products?page=1&page_size=100&category=Laptops&category=TVs HTTP/1.1"
        );
        assert_eq!(requests.recv().await.unwrap(), request_line);
    }

    #[tokio::test]
    async fn test_malformed_body_over_http() {
        let (base, _requests) = serve(vec![http_response("200 OK", r#"{"products": []}"#)]).await;
        let catalog = HttpCatalog::new(&AppConfig::new(&base));

        let err = catalog.fetch_page(&laptops_query()).await.unwrap_err();
        assert_eq!(err, CatalogError::MalformedResponse);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let catalog = HttpCatalog::new(&AppConfig::new(&base));
        let err = catalog.fetch_page(&laptops_query()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
        assert!(err.to_string().starts_with("Network error: "));
    }
}
