use eframe::egui;

use super::color_picker;
use crate::PainterApp;
use crate::styling;
use crate::tools::ToolKind;

/// Drawing tools shown per page.
pub const PAGE_SIZE: usize = 10;

/// Tools on the given page; pages past the end are empty.
pub fn page(index: usize) -> &'static [ToolKind] {
    let start = (index * PAGE_SIZE).min(ToolKind::DRAWING.len());
    let end = (start + PAGE_SIZE).min(ToolKind::DRAWING.len());
    &ToolKind::DRAWING[start..end]
}

/// A tool button outlined green when active and pink when hovered.
pub fn tool_button(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    let mut button = egui::Button::new(label).min_size(egui::vec2(84.0, 36.0));
    if active {
        button = button.stroke(egui::Stroke::new(3.0, styling::ACTIVE_TOOL));
    }
    let response = ui.add(button);
    if !active && response.hovered() {
        ui.painter().rect_stroke(
            response.rect,
            4.0,
            egui::Stroke::new(3.0, styling::HOVERED_TOOL),
        );
    }
    response
}

/// Left side panel: paged drawing tools and the palette.
pub fn tool_panel(app: &mut PainterApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools")
        .resizable(false)
        .exact_width(200.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for index in 0..ToolKind::DRAWING.len().div_ceil(PAGE_SIZE) {
                    ui.selectable_value(&mut app.tool_page, index, format!("Page {}", index + 1));
                }
            });
            ui.separator();

            let active = app.session.active_tool();
            egui::Grid::new("tool_grid")
                .spacing(egui::vec2(6.0, 6.0))
                .show(ui, |ui| {
                    for (i, &kind) in page(app.tool_page).iter().enumerate() {
                        let response = tool_button(ui, kind.label(), kind == active);
                        if response.hovered() {
                            app.hovered_tool = Some(kind);
                        }
                        if response.clicked() {
                            app.session.select_tool(kind);
                        }
                        if i % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });

            ui.separator();
            color_picker::palette(ui, app);
        });
}
