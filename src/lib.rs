//! # virtual-library
//!
//! Leptos + WASM frontend for a small virtual library: a catalog browser
//! over the Open Library search API with localStorage-persisted favorites
//! and manually added books, plus a second route that browses characters
//! from a public character API.
//!
//! Browser-only behavior (DOM, network, storage) is gated behind the
//! `hydrate` feature; without it the crate compiles natively so the domain
//! logic and serde shapes can be unit-tested off the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
