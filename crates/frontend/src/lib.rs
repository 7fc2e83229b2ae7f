pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    if console_log::init_with_level(shared::config::LOG_LEVEL).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
