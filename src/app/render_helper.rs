use eframe::egui::{self, Color32, TextureOptions};

use crate::PainterApp;
use crate::selection;
use crate::styling;
use crate::utils::color::contrast_color;
use crate::utils::profiler::ScopeTimer;

/// Where the canvas landed on screen this frame.
pub struct CanvasView {
    /// Screen position of canvas pixel (0, 0).
    pub origin: egui::Pos2,
    pub rect: egui::Rect,
    pub response: egui::Response,
}

/// Re-upload the canvas texture if the session changed since the last upload.
pub fn update_texture(app: &mut PainterApp, ctx: &egui::Context) {
    let revision = app.session.revision();
    if app.uploaded_revision == Some(revision) {
        return;
    }
    let _timer = ScopeTimer::new("texture_set");
    let image = app.session.canvas().to_color_image();
    match &mut app.texture {
        Some(texture) => texture.set(image, TextureOptions::NEAREST),
        None => app.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST)),
    }
    app.uploaded_revision = Some(revision);
}

/// Centre the canvas at one screen point per pixel, with a border around it.
pub fn draw_canvas(app: &mut PainterApp, ui: &mut egui::Ui) -> CanvasView {
    let canvas = app.session.canvas();
    let size = egui::vec2(canvas.width() as f32, canvas.height() as f32);
    let (area, response) =
        ui.allocate_at_least(ui.available_size(), egui::Sense::click_and_drag());

    let origin = (area.center() - size * 0.5).round();
    let rect = egui::Rect::from_min_size(origin, size);
    let painter = ui.painter();

    painter.rect_stroke(
        rect.expand(2.0),
        0.0,
        egui::Stroke::new(3.0, styling::BORDER),
    );
    if let Some(texture) = &app.texture {
        painter.image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    CanvasView {
        origin,
        rect,
        response,
    }
}

/// Outline the area a floating selection was lifted from.
pub fn draw_overlay(app: &PainterApp, ui: &egui::Ui, view: &CanvasView) {
    let Some(outline) = app.session.selection_outline() else {
        return;
    };
    let color = app
        .session
        .history()
        .baseline()
        .get(outline[0].x, outline[0].y)
        .map_or(Color32::BLACK, contrast_color);
    let painter = ui.painter_at(view.rect);
    selection::draw_overlay(&painter, outline, 1.0, view.origin, color);
}
