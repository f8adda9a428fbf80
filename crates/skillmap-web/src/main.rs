//! WASM entry point for Leptos CSR app

#[cfg(feature = "csr")]
fn main() {
    use leptos::mount::mount_to_body;
    use skillmap_web::App;

    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// The server entry point is the skillmap binary; this bin target only
// exists for the Trunk build.
#[cfg(not(feature = "csr"))]
fn main() {}
