#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Chronicle web client.
//!
//! A Yew front-end for the Chronicle blogging platform: a public feed with
//! votes, bookmarks and nested comments, an admin area for users, roles,
//! permissions, categories and posts, and subscription checkout. State
//! lives in a single yewdux store; HTTP goes through a client that
//! refreshes expired tokens transparently.

pub mod core;
pub mod features;
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
