#![allow(warnings)]
//! Afazeres Frontend Entry Point

mod app;
mod clock;
mod components;
mod config;
mod context;
mod controllers;
mod dom;
mod error;
mod html;
mod models;
mod notify;
mod storage;

use app::App;
use console_logger::ConsoleLogger;
use leptos::prelude::*;

use crate::config::Config;
use crate::error::AppResult;
use crate::storage::AppStorage;

/// Element in index.html the app renders into
const MOUNT_ID: &str = "app";

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = start() {
        log::error!("[app] failed to start: {}", err);
    }
}

/// Print the buffered log lines before the panic message
fn install_panic_hook(logger: &'static ConsoleLogger) {
    std::panic::set_hook(Box::new(move |info| {
        let history = logger.history();
        if !history.is_empty() {
            web_sys::console::error_1(&format!("recent log:\n{}", history).into());
        }
        console_error_panic_hook::hook(info);
    }));
}

fn start() -> AppResult<()> {
    let defaults = Config::default();
    // Err only if a logger is already installed
    let logger = console_logger::init(defaults.log_capacity, defaults.log_level).ok();
    if let Some(logger) = logger {
        install_panic_hook(logger);
    }

    let storage = AppStorage::open();
    let config = Config::load(&storage);
    if let Some(logger) = logger {
        logger.set_level(config.log_level);
    }

    let root = dom::require_element(MOUNT_ID)?;
    log::info!("[app] starting");
    leptos::mount::mount_to(root, move || view! { <App config=config storage=storage /> }).forget();
    Ok(())
}
