//! G-Easy Home Page - Yew WASM Frontend
//!
//! This crate provides the web UI for the G-Easy English-vocabulary
//! product: sidebar, topbar, banner carousel, informational sections,
//! and the password-change popup.

mod app;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
