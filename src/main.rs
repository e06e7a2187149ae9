mod analysis;
mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use app::CarsEdaApp;
use config::{Config, CONFIG_FILE};
use eframe::egui;
use state::AppState;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::load_or_default(Path::new(CONFIG_FILE))?;

    let table = data::loader::load_listings(&config.data_path)
        .context("loading vehicle listings")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("EDA USA Cars")
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([config.window.min_width, config.window.min_height]),
        ..Default::default()
    };

    eframe::run_native(
        "EDA USA Cars",
        options,
        Box::new(|_cc| Ok(Box::new(CarsEdaApp::new(AppState::new(table))))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
