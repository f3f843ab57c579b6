use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Plot, PlotPoints, Polygon as PlotPolygon};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – choropleth map
// ---------------------------------------------------------------------------

/// Render every regency boundary, highlighting the ones that produce the
/// selected commodity, and show a tooltip for the hovered regency.
pub fn choropleth(ui: &mut Ui, state: &AppState) {
    let bounds = &state.boundaries;
    if bounds.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Tidak ada batas wilayah untuk digambar");
        });
        return;
    }

    let response = Plot::new("peta_kabupaten")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for feature in &bounds.features {
                let selected = state.selected_regencies.contains(feature.name.as_str());
                let (fill, stroke) = if selected {
                    (
                        Color32::from_rgba_unmultiplied(255, 165, 0, 120),
                        Stroke::new(3.0, Color32::RED),
                    )
                } else {
                    (Color32::TRANSPARENT, Stroke::new(2.0, Color32::BLUE))
                };

                for polygon in &feature.polygons {
                    // Only the exterior ring is drawn; interior rings still
                    // count for the hover hit test.
                    let points: PlotPoints = polygon.exterior.iter().copied().collect();
                    plot_ui.polygon(PlotPolygon::new(points).fill_color(fill).stroke(stroke));
                }
            }

            plot_ui
                .pointer_coordinate()
                .and_then(|p| bounds.feature_at([p.x, p.y]))
        });

    if let Some(idx) = response.inner {
        let name = &bounds.features[idx].name;
        let production = state.production[idx];
        response.response.on_hover_ui_at_pointer(|ui: &mut Ui| {
            ui.strong(format!("Kabupaten: {name}"));
            ui.label(format!("Produksi: {production}"));
        });
    }
}
