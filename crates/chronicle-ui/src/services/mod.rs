//! Transport and session services.
//!
//! # Design
//! - Refresh coordination is pure state and compiles everywhere; the HTTP
//!   and storage layers touch the browser and are wasm-only.

#[cfg(target_arch = "wasm32")]
pub mod http;
pub mod refresh;
#[cfg(target_arch = "wasm32")]
pub mod storage;
