pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_support;

/// Browser entry point: logging, panic hook, runtime config, mount.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting LearnHub frontend (wasm)");

    config::init();
    router::mount_app();
}
