//! The active drawing tool and the per-tool gesture state machines.

use eframe::egui::Color32;
use rand::rngs::StdRng;

use crate::canvas::Surface;
use crate::utils::geometry::Point;
use crate::utils::glyphs::GlyphRenderer;

pub mod click;
pub mod effect;
pub mod overlay;
pub mod polygon;
pub mod selection;
pub mod shape;
pub mod stamp;
pub mod stroke;
pub mod text;

pub use stamp::{StampKind, StampLibrary};

/// Radius of the pencil and line tools.
pub const FINE_RADIUS: i32 = 2;
/// Radius of the brush, eraser, ink, marker and effect tools.
pub const WIDE_RADIUS: i32 = 20;
/// A click closer than this to the first vertex closes a polygon.
pub const CLOSE_DISTANCE: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Pencil,
    Eraser,
    Brush,
    Spray,
    Bucket,
    Line,
    Rectangle,
    FilledRectangle,
    Ellipse,
    FilledEllipse,
    Eyedropper,
    Glitter,
    Ink,
    Marker,
    Polygon,
    FilledPolygon,
    Text,
    Blur,
    Pixelate,
    Selection,
    Stamp(StampKind),
}

impl ToolKind {
    /// Drawing tools in the order the side panel shows them, ten per page.
    pub const DRAWING: [ToolKind; 20] = [
        ToolKind::Pencil,
        ToolKind::Eraser,
        ToolKind::Brush,
        ToolKind::Spray,
        ToolKind::Bucket,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::FilledRectangle,
        ToolKind::Ellipse,
        ToolKind::FilledEllipse,
        ToolKind::Eyedropper,
        ToolKind::Glitter,
        ToolKind::Ink,
        ToolKind::Marker,
        ToolKind::Polygon,
        ToolKind::FilledPolygon,
        ToolKind::Text,
        ToolKind::Blur,
        ToolKind::Pixelate,
        ToolKind::Selection,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::Pencil => "Pencil",
            ToolKind::Eraser => "Eraser",
            ToolKind::Brush => "Paintbrush",
            ToolKind::Spray => "Airbrush",
            ToolKind::Bucket => "Paint Bucket",
            ToolKind::Line => "Line Tool",
            ToolKind::Rectangle => "Rectangle Tool",
            ToolKind::FilledRectangle => "Filled Rectangle",
            ToolKind::Ellipse => "Ellipse Tool",
            ToolKind::FilledEllipse => "Filled Ellipse",
            ToolKind::Eyedropper => "Eyedropper",
            ToolKind::Glitter => "Glitter",
            ToolKind::Ink => "Ink",
            ToolKind::Marker => "Marker",
            ToolKind::Polygon => "Polygon Tool",
            ToolKind::FilledPolygon => "Filled Polygon",
            ToolKind::Text => "Text Tool",
            ToolKind::Blur => "Blur Tool",
            ToolKind::Pixelate => "Pixelate",
            ToolKind::Selection => "Selection Tool",
            ToolKind::Stamp(stamp) => stamp.label(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolKind::Pencil => "Click on the canvas to draw thin lines.",
            ToolKind::Eraser => "Click on the canvas to erase work that was done.",
            ToolKind::Brush => "Click on the canvas to draw thick lines.",
            ToolKind::Spray => "Click on the canvas to get a spray paint effect.",
            ToolKind::Bucket => "Click on the canvas to fill an area with the given colour.",
            ToolKind::Line => "Click and drag on the canvas to draw straight lines.",
            ToolKind::Rectangle => "Click and drag on the canvas to draw rectangles.",
            ToolKind::FilledRectangle => "Click and drag on the canvas to draw filled rectangles.",
            ToolKind::Ellipse => "Click and drag on the canvas to draw ellipses.",
            ToolKind::FilledEllipse => "Click and drag on the canvas to draw filled ellipses.",
            ToolKind::Eyedropper => "Click on the canvas to get the colour at the mouse position.",
            ToolKind::Glitter => "Click on the canvas to get a glitter effect.",
            ToolKind::Ink => {
                "Click on the canvas to draw. Gets darker each time you click and go over it."
            }
            ToolKind::Marker => {
                "Click on the canvas to draw. Gets darker the longer you keep the mouse pressed."
            }
            ToolKind::Polygon | ToolKind::FilledPolygon => {
                "Click on the canvas to select points. Click on the first vertex again to close the polygon."
            }
            ToolKind::Text => "Click on the canvas to start typing. Click again to place the text.",
            ToolKind::Blur => "Click on the canvas to blur work that was done.",
            ToolKind::Pixelate => "Click on the canvas to turn work that was done into pixel art.",
            ToolKind::Selection => {
                "Click points on the canvas to cut out a polygon. Click again to place it."
            }
            ToolKind::Stamp(_) => "Click on the canvas to draw.",
        }
    }
}

/// Keyboard input routed to the active tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable text as delivered by the platform.
    Text(String),
    Backspace,
    /// Escape, tab, enter and the arrow keys. Never typed.
    Navigation,
}

/// What a tool sees for one frame, in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolInput {
    pub pointer: Point,
    /// Pointer position on the previous frame, for stitching strokes.
    pub previous: Point,
    /// Where the current press started.
    pub drag_origin: Point,
    pub button_down: bool,
    pub pressed: bool,
    pub released: bool,
}

/// Session state a tool may read or modify while handling a frame.
pub struct ToolContext<'a> {
    /// The working canvas. Tools draw here.
    pub canvas: &'a mut Surface,
    /// The canvas as of the last commit. Previews redraw from this.
    pub baseline: &'a Surface,
    pub draw_color: &'a mut Color32,
    pub background: Color32,
    pub rng: &'a mut StdRng,
    pub glyphs: &'a dyn GlyphRenderer,
}

impl ToolContext<'_> {
    /// Throw away everything drawn since the last commit.
    pub fn restore_baseline(&mut self) {
        self.canvas.copy_from(self.baseline);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolSignal {
    Continue,
    /// The gesture finished and its result should be recorded in history.
    Commit,
}

/// Behaviour of one tool. Implementations keep their own transient gesture state.
pub trait ToolBehavior {
    fn on_activate(&mut self, _ctx: &mut ToolContext<'_>) {}

    /// Called before the tool is replaced or reset. Must drop any gesture in progress.
    fn on_deactivate(&mut self, _ctx: &mut ToolContext<'_>) {}

    /// Returns whether the key was consumed.
    fn on_key(&mut self, _key: &KeyInput) -> bool {
        false
    }

    /// Handle one frame with the pointer over the canvas.
    fn on_frame(&mut self, ctx: &mut ToolContext<'_>, input: &ToolInput) -> ToolSignal;

    /// Whether releasing the button ends an edit. Tools with their own
    /// completion rule return `false` and signal [`ToolSignal::Commit`] instead.
    fn commits_on_release(&self) -> bool {
        true
    }

    /// Whether the tool redraws a preview as the pointer moves with the button up.
    fn tracks_hover(&self) -> bool {
        false
    }

    /// Polygon to outline on top of the canvas, if any.
    fn outline(&self) -> Option<&[Point]> {
        None
    }
}

fn build(kind: ToolKind, stamps: &StampLibrary) -> Box<dyn ToolBehavior> {
    use effect::EffectTool;
    use shape::{ShapeKind, ShapeTool};
    use stroke::StrokeTool;

    match kind {
        ToolKind::Pencil => Box::new(StrokeTool::pencil()),
        ToolKind::Eraser => Box::new(StrokeTool::eraser()),
        ToolKind::Brush => Box::new(StrokeTool::brush()),
        ToolKind::Spray => Box::new(StrokeTool::spray()),
        ToolKind::Glitter => Box::new(StrokeTool::glitter()),
        ToolKind::Bucket => Box::new(click::BucketTool),
        ToolKind::Eyedropper => Box::new(click::EyedropperTool),
        ToolKind::Line => Box::new(ShapeTool::new(ShapeKind::Line)),
        ToolKind::Rectangle => Box::new(ShapeTool::new(ShapeKind::Rectangle)),
        ToolKind::FilledRectangle => Box::new(ShapeTool::new(ShapeKind::FilledRectangle)),
        ToolKind::Ellipse => Box::new(ShapeTool::new(ShapeKind::Ellipse)),
        ToolKind::FilledEllipse => Box::new(ShapeTool::new(ShapeKind::FilledEllipse)),
        ToolKind::Ink => Box::new(overlay::InkTool::default()),
        ToolKind::Marker => Box::new(overlay::MarkerTool),
        ToolKind::Polygon => Box::new(polygon::PolygonTool::new(false)),
        ToolKind::FilledPolygon => Box::new(polygon::PolygonTool::new(true)),
        ToolKind::Text => Box::new(text::TextTool::default()),
        ToolKind::Blur => Box::new(EffectTool::Blur),
        ToolKind::Pixelate => Box::new(EffectTool::Pixelate),
        ToolKind::Selection => Box::new(selection::SelectionTool::default()),
        ToolKind::Stamp(stamp) => Box::new(stamp::StampTool::new(stamps.get(stamp))),
    }
}

/// Holds the active tool. Every switch goes through [`ToolEngine::switch`] so
/// the outgoing tool always gets to discard its gesture.
pub struct ToolEngine {
    kind: ToolKind,
    behavior: Box<dyn ToolBehavior>,
}

impl ToolEngine {
    pub fn new(kind: ToolKind, stamps: &StampLibrary) -> Self {
        Self {
            kind,
            behavior: build(kind, stamps),
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    /// Make `kind` the active tool, discarding any uncommitted preview.
    /// Selecting the active tool again keeps its state.
    pub fn switch(&mut self, kind: ToolKind, ctx: &mut ToolContext<'_>, stamps: &StampLibrary) {
        if kind == self.kind {
            return;
        }
        log::debug!("tool switch {:?} -> {:?}", self.kind, kind);
        self.behavior.on_deactivate(ctx);
        ctx.restore_baseline();
        self.kind = kind;
        self.behavior = build(kind, stamps);
        self.behavior.on_activate(ctx);
    }

    /// Drop the active tool's gesture without changing tools. Anything drawn
    /// since the last commit is discarded.
    pub fn reset(&mut self, ctx: &mut ToolContext<'_>, stamps: &StampLibrary) {
        self.behavior.on_deactivate(ctx);
        ctx.restore_baseline();
        self.behavior = build(self.kind, stamps);
        self.behavior.on_activate(ctx);
    }

    pub fn on_key(&mut self, key: &KeyInput) -> bool {
        self.behavior.on_key(key)
    }

    pub fn on_frame(&mut self, ctx: &mut ToolContext<'_>, input: &ToolInput) -> ToolSignal {
        self.behavior.on_frame(ctx, input)
    }

    pub fn commits_on_release(&self) -> bool {
        self.behavior.commits_on_release()
    }

    pub fn tracks_hover(&self) -> bool {
        self.behavior.tracks_hover()
    }

    pub fn outline(&self) -> Option<&[Point]> {
        self.behavior.outline()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use rand::SeedableRng;

    use super::*;
    use crate::utils::glyphs::NullGlyphs;

    /// Owned pieces of a [`ToolContext`] for driving tools directly in tests.
    pub struct Rig {
        pub canvas: Surface,
        pub baseline: Surface,
        pub draw_color: Color32,
        pub rng: StdRng,
        pub glyphs: Box<dyn GlyphRenderer>,
    }

    impl Rig {
        pub fn new(width: usize, height: usize) -> Self {
            let canvas = Surface::new(width, height, Color32::WHITE);
            Self {
                baseline: canvas.clone(),
                canvas,
                draw_color: Color32::BLACK,
                rng: StdRng::seed_from_u64(1),
                glyphs: Box::new(NullGlyphs),
            }
        }

        pub fn ctx(&mut self) -> ToolContext<'_> {
            ToolContext {
                canvas: &mut self.canvas,
                baseline: &self.baseline,
                draw_color: &mut self.draw_color,
                background: Color32::WHITE,
                rng: &mut self.rng,
                glyphs: self.glyphs.as_ref(),
            }
        }

        pub fn commit(&mut self) {
            self.baseline = self.canvas.clone();
        }
    }

    pub fn press(p: Point) -> ToolInput {
        ToolInput {
            pointer: p,
            previous: p,
            drag_origin: p,
            button_down: true,
            pressed: true,
            released: false,
        }
    }

    pub fn hover(p: Point) -> ToolInput {
        ToolInput {
            button_down: false,
            pressed: false,
            ..press(p)
        }
    }

    pub fn drag(origin: Point, previous: Point, p: Point) -> ToolInput {
        ToolInput {
            pointer: p,
            previous,
            drag_origin: origin,
            button_down: true,
            pressed: false,
            released: false,
        }
    }

    pub fn release(origin: Point, p: Point) -> ToolInput {
        ToolInput {
            button_down: false,
            released: true,
            ..drag(origin, p, p)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn every_drawing_tool_has_chrome_text() {
        for kind in ToolKind::DRAWING {
            assert!(!kind.label().is_empty());
            assert!(kind.description().starts_with("Click"));
        }
    }

    #[test]
    fn switching_discards_open_polygon() {
        let stamps = StampLibrary::default();
        let mut rig = Rig::new(50, 50);
        let mut engine = ToolEngine::new(ToolKind::Polygon, &stamps);

        engine.on_frame(&mut rig.ctx(), &press(Point::new(5, 5)));
        engine.on_frame(&mut rig.ctx(), &hover(Point::new(30, 30)));
        assert_ne!(rig.canvas, rig.baseline);

        engine.switch(ToolKind::Pencil, &mut rig.ctx(), &stamps);
        assert_eq!(rig.canvas, rig.baseline);

        engine.switch(ToolKind::Polygon, &mut rig.ctx(), &stamps);
        // a fresh polygon: this click appends a first vertex rather than closing
        let signal = engine.on_frame(&mut rig.ctx(), &press(Point::new(6, 6)));
        assert_eq!(signal, ToolSignal::Continue);
    }

    #[test]
    fn reselecting_the_active_tool_keeps_its_gesture() {
        let stamps = StampLibrary::default();
        let mut rig = Rig::new(50, 50);
        let mut engine = ToolEngine::new(ToolKind::Polygon, &stamps);
        engine.on_frame(&mut rig.ctx(), &press(Point::new(5, 5)));
        engine.switch(ToolKind::Polygon, &mut rig.ctx(), &stamps);
        let signal = engine.on_frame(&mut rig.ctx(), &press(Point::new(6, 6)));
        assert_eq!(signal, ToolSignal::Commit);
    }

    #[test]
    fn switching_mid_drag_drops_the_shape_preview() {
        let stamps = StampLibrary::default();
        let mut rig = Rig::new(50, 50);
        let mut engine = ToolEngine::new(ToolKind::FilledRectangle, &stamps);
        let origin = Point::new(5, 5);
        engine.on_frame(&mut rig.ctx(), &press(origin));
        engine.on_frame(&mut rig.ctx(), &drag(origin, origin, Point::new(40, 40)));
        assert_eq!(rig.canvas.get(20, 20), Some(Color32::BLACK));

        engine.switch(ToolKind::Bucket, &mut rig.ctx(), &stamps);
        assert_eq!(rig.canvas, rig.baseline);
    }
}
