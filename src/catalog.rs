//! Catalog Fetch State
//!
//! Tracks the product list for the applied filter. Every fetch carries a
//! sequence number; only the response for the latest number may land, so a
//! slow response for an old filter can never overwrite a newer one.

use crate::commands::CatalogSource;
use crate::error::CatalogError;
use crate::filter::CategorySet;
use crate::models::Product;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Read-only snapshot handed to the view layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogView {
    pub status: CatalogStatus,
    /// Service order is preserved; non-empty only when `Ready`
    pub items: Vec<Product>,
    pub error_message: Option<String>,
}

impl CatalogView {
    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    pub fn is_failed(&self) -> bool {
        self.status == CatalogStatus::Failed
    }
}

/// Query parameters for `GET /v1/products`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub page: u32,
    pub page_size: u32,
    pub categories: Vec<String>,
}

impl CatalogQuery {
    /// `category` is repeated once per entry
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        pairs.extend(self.categories.iter().map(|c| ("category", c.clone())));
        pairs
    }
}

/// Handle for one issued fetch; pass it back to `resolve`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    pub query: CatalogQuery,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFetcher {
    view: CatalogView,
    /// Sequence number of the newest request (or reset)
    issued: u64,
    page_size: u32,
}

impl CatalogFetcher {
    pub fn new(page_size: u32) -> Self {
        Self {
            view: CatalogView::default(),
            issued: 0,
            page_size,
        }
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    /// Start a fetch for `applied`. An empty set resets to `Idle` and issues nothing.
    ///
    /// Calling this again with an unchanged set is a new request and supersedes
    /// whatever is still in flight.
    pub fn begin(&mut self, applied: &CategorySet) -> Option<FetchTicket> {
        if applied.is_empty() {
            self.reset();
            return None;
        }

        self.issued += 1;
        self.view = CatalogView {
            status: CatalogStatus::Loading,
            items: Vec::new(),
            error_message: None,
        };

        let ticket = FetchTicket {
            seq: self.issued,
            query: CatalogQuery {
                page: 1,
                page_size: self.page_size,
                categories: applied.iter().cloned().collect(),
            },
        };
        tracing::info!(seq = ticket.seq, categories = ?ticket.query.categories, "catalog fetch issued");
        Some(ticket)
    }

    /// Back to `Idle` with no items. In-flight responses become stale.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.view = CatalogView::default();
        tracing::debug!(seq = self.issued, "catalog reset");
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.issued
    }

    /// Land a response. Returns false when the ticket was superseded and the
    /// outcome was dropped.
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<Vec<Product>, CatalogError>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(seq = ticket.seq, latest = self.issued, "stale catalog response dropped");
            return false;
        }

        self.view = match outcome {
            Ok(items) => {
                tracing::info!(seq = ticket.seq, count = items.len(), "catalog loaded");
                CatalogView {
                    status: CatalogStatus::Ready,
                    items,
                    error_message: None,
                }
            }
            Err(err) => {
                tracing::warn!(seq = ticket.seq, error = %err, "catalog fetch failed");
                CatalogView {
                    status: CatalogStatus::Failed,
                    items: Vec::new(),
                    error_message: Some(err.to_string()),
                }
            }
        };
        true
    }
}

/// Run the query for `ticket` against `source`
pub async fn fetch_items<S>(source: &S, ticket: &FetchTicket) -> Result<Vec<Product>, CatalogError>
where
    S: CatalogSource + ?Sized,
{
    source.fetch_page(&ticket.query).await.map(|page| page.items)
}
