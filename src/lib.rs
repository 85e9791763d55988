//! # fn-slots
//!
//! Leptos + WASM frontend for the function-slot workbench: rows of
//! `map`/`filter`/`reduce`/`compress` tokens dragged between a palette,
//! fixed slots, and a trash bin, with undo/redo kept in `localStorage`.
//!
//! All state transitions live in the `workbench` crate. This crate renders
//! the current snapshot and turns drag/drop and toolbar events into calls on
//! a shared [`workbench::engine::Workbench`].

pub mod app;
pub mod components;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
