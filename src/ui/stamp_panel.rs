use eframe::egui;

use super::tool_panel::tool_button;
use crate::PainterApp;
use crate::tools::{StampKind, ToolKind};

/// Right side panel: file and history actions, the stamp grid, the pointer
/// readout and a description of the hovered or active tool.
pub fn stamp_panel(app: &mut PainterApp, ctx: &egui::Context) {
    egui::SidePanel::right("stamps")
        .resizable(false)
        .exact_width(200.0)
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                if ui.button("Undo").clicked() {
                    app.undo();
                }
                if ui.button("Clear").clicked() {
                    app.clear();
                }
                if ui.button("Load").clicked() {
                    app.load();
                }
                if ui.button("Save").clicked() {
                    app.save();
                }
            });
            ui.separator();

            ui.label("Stamps");
            let active = app.session.active_tool();
            egui::Grid::new("stamp_grid")
                .spacing(egui::vec2(6.0, 6.0))
                .show(ui, |ui| {
                    for (i, stamp) in StampKind::ALL.into_iter().enumerate() {
                        let kind = ToolKind::Stamp(stamp);
                        let response = tool_button(ui, stamp.label(), kind == active);
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

            match app.pointer {
                Some(p) => ui.label(format!("x: {}  y: {}", p.x, p.y)),
                None => ui.label("x: -  y: -"),
            };
            ui.separator();

            let described = app.hovered_tool.unwrap_or(active);
            ui.strong(described.label());
            ui.label(described.description());
        });
}
