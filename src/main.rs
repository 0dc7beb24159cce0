mod app;
mod config;
mod entry;
mod error;
mod format;
mod io;
mod state;
mod style;
mod view;

use config::Config;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("failed to initialize logging: {}", e);
    }

    let config = Config::load();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting rummage");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Rummage"),
        ..Default::default()
    };

    eframe::run_native(
        "Rummage",
        options,
        Box::new(move |cc| Ok(Box::new(app::Rummage::new(cc, config)))),
    )
}

fn init_logging() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rummage=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(())
}
