//! Browser entry point: logger + panic hook setup, then a client-side mount.

#[cfg(feature = "hydrate")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(virtual_library::app::App);
}

#[cfg(not(feature = "hydrate"))]
fn main() {
    // The UI only runs in the browser; native builds exist for the tests.
}
