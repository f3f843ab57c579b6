use eframe::egui;

use crate::state::AppState;
use crate::ui::{map, panels};

/// Window title and the heading shown in the top bar.
pub const APP_TITLE: &str = "Komoditi di Nusa Tenggara Timur";
/// Subtitle under the heading.
pub const APP_SUB_TITLE: &str = "Visualisasi Komoditas per Kabupaten di NTT";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PetaKomoditiApp {
    pub state: AppState,
}

impl PetaKomoditiApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PetaKomoditiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: selector and statistics ----
        egui::SidePanel::left("selector_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            map::choropleth(ui, &self.state);
        });
    }
}
