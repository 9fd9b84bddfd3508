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
//! Portfolio picker wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    portfolio_ui::start();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = "portfolio-ui runs in the browser: `trunk serve` mounts the picker into #root, \
or load the wasm bundle on a page that already renders the companies[] checkboxes.\n";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::Write;

    std::io::stderr().lock().write_all(NATIVE_HINT.as_bytes())
}
