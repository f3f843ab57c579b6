use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::app::{APP_SUB_TITLE, APP_TITLE};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – title and dataset counts
// ---------------------------------------------------------------------------

/// Render the title bar above the map.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.add_space(2.0);
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(APP_TITLE);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
            ui.weak(format!(
                "{} baris data, {} wilayah",
                state.table.len(),
                state.boundaries.len()
            ));
        });
    });
    ui.label(RichText::new(APP_SUB_TITLE).weak());
    ui.add_space(2.0);
}

// ---------------------------------------------------------------------------
// Left side panel – commodity selector and derived statistics
// ---------------------------------------------------------------------------

/// Render the commodity selector, the summary lines and the row table.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Pilih Komoditi");
    ui.separator();

    if state.table.is_empty() {
        ui.label("tidak ada data");
        return;
    }

    // Clone what we need so we can mutate state inside the closure.
    let commodities = state.table.commodities.clone();
    let current = state.selected.clone().unwrap_or_default();

    egui::ComboBox::from_id_salt("komoditi")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for commodity in &commodities {
                if ui
                    .selectable_label(current == *commodity, commodity)
                    .clicked()
                {
                    state.select_commodity(commodity.clone());
                }
            }
        });

    ui.separator();
    summary_block(ui, state);
    ui.separator();
    regency_table(ui, state);
}

/// The three summary figures for the current selection.
fn summary_block(ui: &mut Ui, state: &AppState) {
    let summary = &state.summary;
    let commodity = state.selected.as_deref().unwrap_or("-");

    match &summary.primary_regency {
        Some(regency) => {
            ui.label(format!("Kabupaten/Kota Sentra Produksi: {regency}"));
        }
        None => {
            ui.label(RichText::new("tidak ada data untuk komoditi ini").italics());
        }
    }

    ui.label(format!(
        "Total Produksi {commodity}: {} ton",
        summary.total_production
    ));

    if let (Some(regency), Some((low, high))) =
        (&summary.primary_regency, summary.geo_difficulty)
    {
        ui.label(format!(
            "Indeks Kesulitan Geografis {regency}: {low} - {high}"
        ));
    }
}

/// The filtered rows as a Kabupaten / Produksi table.
fn regency_table(ui: &mut Ui, state: &AppState) {
    ui.strong("Data Kabupaten/Kota");
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .column(Column::auto().at_least(90.0))
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.strong("Kabupaten");
            });
            header.col(|ui| {
                ui.strong("Produksi (ton)");
            });
        })
        .body(|mut body| {
            for &row in &state.filtered {
                let record = &state.table.records[row];
                body.row(16.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(&record.regency);
                    });
                    table_row.col(|ui| {
                        ui.label(record.production.to_string());
                    });
                });
            }
        });
}
