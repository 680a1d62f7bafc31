#![allow(warnings)]
//! Product Comparison Hub Frontend Entry Point

mod models;
mod config;
mod error;
mod commands;
mod filter;
mod catalog;
mod selection;
mod comparison;
mod flags;
mod format;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
