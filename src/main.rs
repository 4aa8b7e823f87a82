mod app;
mod color;
mod config;
mod data;
mod ml;
mod predict;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::HousingApp;
use eframe::egui;
use state::AppState;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Load the dataset and fit the model before the window opens; either failing
/// aborts the application.
fn run() -> Result<()> {
    let dataset = data::loader::get_data().context("loading housing dataset")?;
    let model = ml::train_model(&dataset).context("training price model")?;
    let state = AppState::new(dataset, model).context("preparing form defaults")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DataApp – Prevendo Valores de Imóveis",
        options,
        Box::new(|_cc| Ok(Box::new(HousingApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
