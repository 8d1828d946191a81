use eframe::egui;

/// Panel background behind the tool buttons.
pub const TOOLBAR: egui::Color32 = egui::Color32::from_rgb(198, 215, 242);
/// Selected tabs and pressed widgets.
pub const TOOLBAR_DARK: egui::Color32 = egui::Color32::from_rgb(98, 115, 142);
/// Frame drawn around the canvas.
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(216, 1, 17);
pub const ACTIVE_TOOL: egui::Color32 = egui::Color32::from_rgb(0, 225, 0);
pub const HOVERED_TOOL: egui::Color32 = egui::Color32::from_rgb(255, 188, 188);

/// Apply the light blue toolbar theme with compact spacing.
pub fn apply_global_style(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = TOOLBAR;
    visuals.window_fill = TOOLBAR;
    visuals.extreme_bg_color = egui::Color32::from_rgb(235, 241, 250);
    visuals.widgets.inactive.bg_fill = egui::Color32::from_rgb(225, 233, 247);
    visuals.widgets.inactive.weak_bg_fill = egui::Color32::from_rgb(225, 233, 247);
    visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(240, 245, 252);
    visuals.widgets.hovered.weak_bg_fill = egui::Color32::from_rgb(240, 245, 252);
    visuals.widgets.active.bg_fill = TOOLBAR_DARK;
    visuals.widgets.active.weak_bg_fill = TOOLBAR_DARK;
    visuals.selection.bg_fill = TOOLBAR_DARK;
    visuals.selection.stroke.color = egui::Color32::WHITE;
    visuals.widgets.inactive.rounding = egui::Rounding::same(4.0);
    visuals.widgets.hovered.rounding = egui::Rounding::same(4.0);
    visuals.widgets.active.rounding = egui::Rounding::same(4.0);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(6.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.interaction.selectable_labels = false;

    ctx.set_style(style);
}
