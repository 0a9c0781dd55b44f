pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point: console logging, panic hook, then mount the app.
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("{} starting", layout::top_header::APP_TITLE);
    leptos::mount::mount_to_body(app::App);
}
