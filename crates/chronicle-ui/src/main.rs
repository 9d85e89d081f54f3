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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Binary shim around [`chronicle_ui::run_app`].
//!
//! The real entry point only exists on wasm32; a host build gets a stub
//! that explains how to produce the browser bundle instead of silently
//! doing nothing.

#[cfg(target_arch = "wasm32")]
fn main() {
    chronicle_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "chronicle-ui only runs in a browser; bundle it with `trunk serve` \
         or compile for wasm32-unknown-unknown."
    );
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    #[test]
    fn host_stub_exits_cleanly() {
        super::main();
    }
}
