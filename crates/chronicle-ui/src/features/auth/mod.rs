//! Session lifecycle: sign-in, sign-up, bootstrap and route gating.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
