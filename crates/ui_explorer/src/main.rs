//! Binary entrypoint for the browser-hosted component explorer.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    ui_explorer::mount();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "The component explorer runs in the browser. Build `ui_explorer_app` for wasm32 with the `csr` feature and serve it with a Tailwind build of `atomize_ui/style/atomize.css`."
    );
}
