use std::time::Duration;

use eframe::egui;
use eframe::egui::{Color32, TextureHandle};

use super::state::EditorSession;
use super::{input_handler, render_helper};
use crate::config::EditorConfig;
use crate::styling;
use crate::tools::{StampLibrary, ToolKind};
use crate::ui;
use crate::utils::codec::{DirectoryAssets, ImageCrateCodec, NativeFileChooser};
use crate::utils::color::default_palette;
use crate::utils::geometry::Point;
use crate::utils::glyphs::{AbGlyphRenderer, GlyphRenderer, NullGlyphs};

/// Main egui application: owns the editing session plus the chrome around it.
pub struct PainterApp {
    pub(crate) session: EditorSession,
    pub(crate) codec: ImageCrateCodec,
    pub(crate) chooser: NativeFileChooser,
    pub(crate) palette: Vec<Color32>,
    pub(crate) texture: Option<TextureHandle>,
    pub(crate) uploaded_revision: Option<u64>,
    /// Which half of the drawing tools the left panel shows.
    pub(crate) tool_page: usize,
    pub(crate) hovered_tool: Option<ToolKind>,
    /// Canvas-space pointer position, when over the canvas.
    pub(crate) pointer: Option<Point>,
    pub(crate) status: Option<String>,
}

impl PainterApp {
    /// Load assets and fonts, then build the session.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        styling::apply_global_style(&cc.egui_ctx);

        let stamps = StampLibrary::load(&DirectoryAssets::new(&config.asset_dir));
        let glyphs: Box<dyn GlyphRenderer> =
            match AbGlyphRenderer::from_egui_defaults(config.text_size) {
                Ok(renderer) => Box::new(renderer),
                Err(e) => {
                    log::warn!("text tool disabled: {e}");
                    Box::new(NullGlyphs)
                }
            };

        let codec = ImageCrateCodec;
        let mut session = EditorSession::new(&config, stamps, glyphs);
        let mut status = None;
        if let Some(path) = &config.open {
            if let Err(e) = session.load_path(&codec, path) {
                status = Some(e.to_string());
            }
        }

        Self {
            session,
            codec,
            chooser: NativeFileChooser,
            palette: default_palette(),
            texture: None,
            uploaded_revision: None,
            tool_page: 0,
            hovered_tool: None,
            pointer: None,
            status,
        }
    }

    pub(crate) fn undo(&mut self) {
        self.session.undo();
        self.status = None;
    }

    pub(crate) fn clear(&mut self) {
        self.session.clear();
        self.status = None;
    }

    pub(crate) fn load(&mut self) {
        self.status = match self.session.load(&self.codec, &self.chooser) {
            Ok(Some(path)) => Some(format!("Loaded {}", path.display())),
            Ok(None) => None,
            Err(e) => Some(e.to_string()),
        };
    }

    pub(crate) fn save(&mut self) {
        self.status = match self.session.save(&self.codec, &self.chooser) {
            Ok(Some(path)) => Some(format!("Saved {}", path.display())),
            Ok(None) => None,
            Err(e) => Some(e.to_string()),
        };
    }
}

impl eframe::App for PainterApp {
    /// Chrome first, then the canvas and its input, then texture upload.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Z)) {
            self.undo();
        }

        self.hovered_tool = None;
        ui::tool_panel::tool_panel(self, ctx);
        ui::stamp_panel::stamp_panel(self, ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.session.active_tool().label());
                if let Some(message) = &self.status {
                    ui.separator();
                    ui.label(message);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            render_helper::update_texture(self, ctx);
            let view = render_helper::draw_canvas(self, ui);
            input_handler::handle_input(self, ctx, &view);
            render_helper::update_texture(self, ctx);
            render_helper::draw_overlay(self, ui, &view);
        });

        // spray and glitter keep working while the pointer is held still
        if ctx.input(|i| i.pointer.primary_down()) {
            ctx.request_repaint_after(Duration::from_millis(10));
        }
    }
}
