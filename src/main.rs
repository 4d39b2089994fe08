#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod io;
mod model;
mod session;
mod settings;
mod tracker;
mod ui;
mod view;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn main() -> eframe::Result<()> {
    init_logging();

    let settings = settings::AppSettings::load();
    tracing::info!(data_file = %settings.data_file.display(), "starting project tracker");
    let store = io::CsvStore::new(settings.data_file, settings.seed);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Project Tracker"),
        ..Default::default()
    };

    eframe::run_native(
        "Project Tracker",
        options,
        Box::new(|cc| Ok(Box::new(app::TrackerApp::new(cc, store)))),
    )
}
