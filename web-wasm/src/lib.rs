//! Object Identifier Web App (Leptos + WASM)

mod app;
mod api;
mod camera;
mod components;
mod js_error;
mod upload;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}

pub use api::WebGeminiBackend;
pub use upload::{owned_object_url, read_file, revoke_display_url, superseded_object_url};
