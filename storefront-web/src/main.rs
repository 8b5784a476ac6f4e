mod api;
mod app;
mod browser;
mod components;
mod config;
mod containers;
mod hooks;
mod language;
mod logging;
mod models;
mod pages;
mod preview;
mod session;

#[cfg(test)]
mod api_test;

use config::FrontendConfig;

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::error_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    let config = FrontendConfig::new();
    logging::init(config.log_level);
    log::info!("starting storefront client");

    browser::schedule_flash_dismissal(config.notification_ms);

    let mounted = app::mount_all(&config);
    if mounted == 0 {
        log::debug!("no storefront containers on this page");
    } else {
        log::debug!("mounted {mounted} storefront roots");
    }
}
