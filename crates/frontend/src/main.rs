mod app;
mod components;
mod config;
mod hooks;
mod services;
mod theme;

use agui_core::AppConfig;
use app::{App, AppProps};
use std::rc::Rc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

fn init_tracing(config: &AppConfig) {
    let level = config
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level)
        .init();
}

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load();
    init_tracing(&config);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration, continuing with it anyway");
    }
    tracing::info!(api_url = %config.api_url, "Starting AG-UI assistant");

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
