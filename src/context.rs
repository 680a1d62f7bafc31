//! Application Context
//!
//! Callback handles shared via Leptos Context API. Each handle runs one
//! synchronous transition on the store; `apply` and `retry_fetch` then spawn
//! the catalog request for the ticket they were given.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{fetch_items, FetchTicket};
use crate::commands::HttpCatalog;
use crate::config::AppConfig;
use crate::models::ProductId;
use crate::selection::ToggleOutcome;
use crate::store::{AppStore, AppStateStoreFields};

#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    config: StoredValue<AppConfig>,
    /// Validation message from the last compare attempt - read
    pub notice: ReadSignal<Option<String>>,
    /// Validation message from the last compare attempt - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        store: AppStore,
        config: AppConfig,
        notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    pub fn set_draft(&self, categories: Vec<String>) {
        self.store.filter().write().set_draft(categories);
    }

    pub fn toggle_draft(&self, category: &str) {
        self.store.filter().write().toggle_draft(category);
    }

    /// Commit the draft and fetch the catalog for it
    pub fn apply(&self) {
        let ticket = self.store.write().apply_filter();
        if let Some(ticket) = ticket {
            self.spawn_fetch(ticket);
        }
    }

    pub fn clear_filter(&self) {
        self.store.write().clear_filter();
    }

    pub fn retry_fetch(&self) {
        let ticket = self.store.write().retry_fetch();
        if let Some(ticket) = ticket {
            self.spawn_fetch(ticket);
        }
    }

    /// Select or deselect a product. A full selection ignores new ids.
    pub fn toggle(&self, id: ProductId) {
        let outcome = self.store.write().toggle_product(id);
        if outcome == ToggleOutcome::CapReached {
            tracing::debug!("selection full, toggle ignored");
        }
    }

    pub fn compare(&self) {
        let notice = self.store.write().compare_with_notice();
        self.set_notice.set(notice);
    }

    pub fn clear_selection(&self) {
        self.store.write().clear_selection();
        self.set_notice.set(None);
    }

    fn spawn_fetch(&self, ticket: FetchTicket) {
        let store = self.store;
        let source = HttpCatalog::new(&self.config.get_value());
        spawn_local(async move {
            let outcome = fetch_items(&source, &ticket).await;
            store.write().finish_fetch(&ticket, outcome);
        });
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
