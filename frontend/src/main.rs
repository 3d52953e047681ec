#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting Shelfy admin frontend");

    // Runtime config must settle before the first API call goes out.
    leptos::spawn_local(async {
        shelfy_frontend::config::init().await;
        log::info!("runtime config initialized");
        shelfy_frontend::router::mount_app();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
