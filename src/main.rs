mod app;
mod data;
mod state;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use app::{PetaKomoditiApp, APP_TITLE};
use eframe::egui;
use state::AppState;

/// Table files probed in order; the first one that exists wins.
const TABLE_CANDIDATES: &[&str] = &[
    "data/Komoditi NTT.xlsx",
    "data/Komoditi NTT.csv",
    "data/Komoditi NTT.json",
];

/// Regency boundary file.
const BOUNDARY_PATH: &str = "data/geojson/NTT.geojson";

fn main() -> eframe::Result {
    env_logger::init();

    // Both inputs are required; without them there is nothing to show.
    let state = match load_state() {
        Ok(state) => state,
        Err(e) => {
            log::error!("cannot start: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(PetaKomoditiApp::new(state)))),
    )
}

fn load_state() -> anyhow::Result<AppState> {
    let table_path = table_path().ok_or_else(|| {
        anyhow!(
            "no commodity table found; looked for {}",
            TABLE_CANDIDATES.join(", ")
        )
    })?;
    log::info!("using commodity table {}", table_path.display());
    AppState::load(&table_path, Path::new(BOUNDARY_PATH))
}

fn table_path() -> Option<PathBuf> {
    TABLE_CANDIDATES.iter().map(PathBuf::from).find(|p| p.exists())
}
