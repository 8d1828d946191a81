use std::path::{Path, PathBuf};

use eframe::egui::Color32;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::canvas::{History, Surface};
use crate::config::EditorConfig;
use crate::error::Result;
use crate::tools::{
    KeyInput, StampLibrary, ToolContext, ToolEngine, ToolInput, ToolKind, ToolSignal,
};
use crate::utils::codec::{FileChooser, ImageCodec, ensure_png_extension};
use crate::utils::geometry::Point;
use crate::utils::glyphs::GlyphRenderer;

/// Pointer and keyboard state for one frame, with the pointer already mapped
/// into canvas coordinates. The pointer may lie outside the canvas.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub pointer: Point,
    pub button_down: bool,
    /// The primary button went down this frame.
    pub pressed: bool,
    /// The primary button went up this frame.
    pub released: bool,
    pub keys: Vec<KeyInput>,
}

impl FrameInput {
    pub fn hover(pointer: Point) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }

    pub fn press(pointer: Point) -> Self {
        Self {
            pointer,
            button_down: true,
            pressed: true,
            ..Self::default()
        }
    }

    pub fn held(pointer: Point) -> Self {
        Self {
            pointer,
            button_down: true,
            ..Self::default()
        }
    }

    pub fn release(pointer: Point) -> Self {
        Self {
            pointer,
            released: true,
            ..Self::default()
        }
    }

    pub fn with_keys(mut self, keys: Vec<KeyInput>) -> Self {
        self.keys = keys;
        self
    }
}

/// Everything the editor knows: the working canvas, its undo history, the
/// drawing colour and the active tool.
///
/// `canvas` is what the user sees and what tools draw into. The history's
/// baseline is the canvas as of the last commit; previews restore from it.
pub struct EditorSession {
    canvas: Surface,
    history: History,
    draw_color: Color32,
    background: Color32,
    tools: ToolEngine,
    stamps: StampLibrary,
    rng: StdRng,
    glyphs: Box<dyn GlyphRenderer>,
    previous: Option<Point>,
    drag_origin: Point,
    /// A press started on the canvas and has not been released yet.
    gesture: bool,
    revision: u64,
}

impl EditorSession {
    pub fn new(config: &EditorConfig, stamps: StampLibrary, glyphs: Box<dyn GlyphRenderer>) -> Self {
        let canvas = Surface::new(config.canvas_width, config.canvas_height, config.background);
        let history = History::new(&canvas);
        let tools = ToolEngine::new(ToolKind::Pencil, &stamps);
        Self {
            canvas,
            history,
            draw_color: config.draw_color,
            background: config.background,
            tools,
            stamps,
            rng: StdRng::from_os_rng(),
            glyphs,
            previous: None,
            drag_origin: Point::default(),
            gesture: false,
            revision: 0,
        }
    }

    /// Replace the random source, for reproducible spray and glitter.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn canvas(&self) -> &Surface {
        &self.canvas
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn draw_color(&self) -> Color32 {
        self.draw_color
    }

    pub fn set_draw_color(&mut self, color: Color32) {
        self.draw_color = color;
    }

    pub fn active_tool(&self) -> ToolKind {
        self.tools.kind()
    }

    /// Outline of a floating selection, for the on-screen overlay.
    pub fn selection_outline(&self) -> Option<&[Point]> {
        self.tools.outline()
    }

    /// Increases whenever the canvas may have changed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn context(&mut self) -> (&mut ToolEngine, ToolContext<'_>, &StampLibrary) {
        let ctx = ToolContext {
            canvas: &mut self.canvas,
            baseline: self.history.baseline(),
            draw_color: &mut self.draw_color,
            background: self.background,
            rng: &mut self.rng,
            glyphs: self.glyphs.as_ref(),
        };
        (&mut self.tools, ctx, &self.stamps)
    }

    pub fn select_tool(&mut self, kind: ToolKind) {
        let (tools, mut ctx, stamps) = self.context();
        tools.switch(kind, &mut ctx, stamps);
        self.gesture = false;
        self.revision += 1;
    }

    /// Drop the active tool's gesture, restoring the committed canvas if it was showing a preview.
    fn reset_tool(&mut self) {
        let (tools, mut ctx, stamps) = self.context();
        tools.reset(&mut ctx, stamps);
        self.gesture = false;
        self.revision += 1;
    }

    fn commit(&mut self) {
        self.history.commit(&self.canvas);
        self.revision += 1;
    }

    /// Advance one frame: route keys, run the active tool if the pointer is over
    /// the canvas, then commit if the gesture finished.
    pub fn frame(&mut self, input: &FrameInput) {
        let on_canvas = self.canvas.contains(input.pointer.x, input.pointer.y);
        if input.pressed && on_canvas {
            self.gesture = true;
            self.drag_origin = input.pointer;
        }
        let previous = self.previous.replace(input.pointer).unwrap_or(input.pointer);

        for key in &input.keys {
            self.tools.on_key(key);
        }

        let tool_input = ToolInput {
            pointer: input.pointer,
            previous,
            drag_origin: self.drag_origin,
            // a click can arrive as press and release in one frame
            button_down: (input.button_down || input.pressed) && self.gesture,
            pressed: input.pressed && on_canvas,
            released: input.released && self.gesture,
        };

        let mut signal = ToolSignal::Continue;
        if on_canvas {
            let hovering = self.tools.tracks_hover();
            let (tools, mut ctx, _) = self.context();
            signal = tools.on_frame(&mut ctx, &tool_input);
            if hovering
                || self.tools.tracks_hover()
                || tool_input.button_down
                || tool_input.released
                || !input.keys.is_empty()
            {
                self.revision += 1;
            }
        }

        let finished = tool_input.released
            && self.tools.commits_on_release()
            && self.canvas != *self.history.baseline();
        if input.released {
            self.gesture = false;
        }
        if signal == ToolSignal::Commit || finished {
            self.commit();
        }
    }

    pub fn undo(&mut self) {
        self.reset_tool();
        self.history.undo(&mut self.canvas);
    }

    pub fn clear(&mut self) {
        self.reset_tool();
        self.canvas.fill(self.background);
        self.commit();
        log::debug!("canvas cleared");
    }

    /// Composite the image at `path` onto the canvas origin. On failure the
    /// canvas and history are untouched.
    pub fn load_path(&mut self, codec: &dyn ImageCodec, path: &Path) -> Result<()> {
        self.reset_tool();
        match codec.decode(path) {
            Ok(image) => {
                self.canvas.blit(&image, Point::default());
                self.commit();
                log::info!("loaded {}", path.display());
                Ok(())
            }
            Err(e) => {
                log::warn!("load failed: {e}");
                Err(e)
            }
        }
    }

    /// Ask for a file and load it. `Ok(None)` when the dialog was cancelled.
    pub fn load(
        &mut self,
        codec: &dyn ImageCodec,
        chooser: &dyn FileChooser,
    ) -> Result<Option<PathBuf>> {
        self.reset_tool();
        let Some(path) = chooser.choose_open_path() else {
            return Ok(None);
        };
        self.load_path(codec, &path)?;
        Ok(Some(path))
    }

    /// Write the canvas as PNG, adding the extension if needed. Returns the path written.
    pub fn save_path(&mut self, codec: &dyn ImageCodec, path: PathBuf) -> Result<PathBuf> {
        self.reset_tool();
        let path = ensure_png_extension(path);
        match codec.encode(&self.canvas, &path) {
            Ok(()) => {
                log::info!("saved {}", path.display());
                Ok(path)
            }
            Err(e) => {
                log::warn!("save failed: {e}");
                Err(e)
            }
        }
    }

    /// Ask for a destination and save. `Ok(None)` when the dialog was cancelled.
    pub fn save(
        &mut self,
        codec: &dyn ImageCodec,
        chooser: &dyn FileChooser,
    ) -> Result<Option<PathBuf>> {
        self.reset_tool();
        let Some(path) = chooser.choose_save_path() else {
            return Ok(None);
        };
        self.save_path(codec, path).map(Some)
    }
}
