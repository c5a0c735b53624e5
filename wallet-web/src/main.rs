//! Wallet Connect Widget
//!
//! Browser front end of the wallet session controller: detects the injected wallet,
//! connects the account, and sends value transfers that are recorded on-chain and in
//! the content store.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Wallet widget starting...");

    let config = match utils::config::load() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {}", err);
            show_fatal(&err);
            return;
        }
    };

    hide_loading_screen();
    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}

/// Hide the static loading screen shown while the wasm module downloads.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };

    let Some(loading) = document.get_element_by_id("leptos-loading") else {
        log::debug!("Loading element not found");
        return;
    };

    if let Some(element) = loading.dyn_ref::<HtmlElement>() {
        if let Err(e) = element.class_list().add_1("hidden") {
            log::warn!("Failed to hide loading screen: {:?}", e);
        }
    }
}

/// Replace the loading screen text with a startup error.
fn show_fatal(message: &str) {
    if let Some(loading) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("leptos-loading"))
    {
        loading.set_text_content(Some(&format!("Configuration error: {message}")));
    }
}
