use leptos::prelude::*;
use leptos::mount::mount_to_body;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}

pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod contact;
pub mod pages;
pub mod profile;
pub mod routes;
pub mod theme;

pub use crate::app::App;
