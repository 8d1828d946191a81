use eframe::egui;
use egui::Color32;

use crate::PainterApp;

const SWATCH: f32 = 18.0;
const COLUMNS: usize = 12;

fn swatch(ui: &mut egui::Ui, color: Color32, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(SWATCH, SWATCH), egui::Sense::click());
    let painter = ui.painter();
    painter.rect_filled(rect, 2.0, color);
    let stroke = if selected {
        egui::Stroke::new(2.0, Color32::from_rgb(0, 225, 0))
    } else if response.hovered() {
        egui::Stroke::new(2.0, Color32::from_gray(40))
    } else {
        egui::Stroke::new(1.0, Color32::from_gray(120))
    };
    painter.rect_stroke(rect, 2.0, stroke);
    response
}

/// Large preview of the drawing colour.
fn current_color(ui: &mut egui::Ui, color: Color32) {
    let size = egui::vec2(ui.available_width().min(COLUMNS as f32 * (SWATCH + 2.0)), 28.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, color);
    painter.rect_stroke(rect, 4.0, egui::Stroke::new(1.0, Color32::from_gray(60)));
}

/// Swatch grid plus the current colour. Clicking a swatch changes the drawing
/// colour without touching the active tool.
pub fn palette(ui: &mut egui::Ui, app: &mut PainterApp) {
    ui.label("Colour");
    current_color(ui, app.session.draw_color());

    let current = app.session.draw_color();
    let mut picked = None;
    egui::Grid::new("palette")
        .spacing(egui::vec2(2.0, 2.0))
        .show(ui, |ui| {
            for (i, &color) in app.palette.iter().enumerate() {
                if swatch(ui, color, color == current).clicked() {
                    picked = Some(color);
                }
                if (i + 1) % COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });

    if let Some(color) = picked {
        app.session.set_draw_color(color);
    }
}
