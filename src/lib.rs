//! Folio renders a portfolio site from JSON data documents: video games,
//! illustrations, an about/contact section and per-project pages.
//!
//! In the browser (wasm32) the loader writes straight into the live document.
//! Natively the same loader runs against `dom::MemoryDom`, and the `folio`
//! binary serves the site directory for local preview.

pub mod chrome;
pub mod config;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod models;
pub mod render;

#[cfg(not(target_arch = "wasm32"))]
pub mod boot;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

#[cfg(target_arch = "wasm32")]
mod browser;
