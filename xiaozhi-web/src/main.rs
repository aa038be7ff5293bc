mod app;
mod auth;
mod config;
mod containers;
mod guard;
mod models;
mod pages;
mod routes;
mod storage;

#[cfg(test)]
mod auth_test;

use app::App;
use log::Level;
use yew::Renderer;

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
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

    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::log_1(&format!("Logger already initialised: {err}").into());
    }

    log::info!("Starting Xiaozhi web client");

    // Mounts to <body>
    Renderer::<App>::new().render();
}
