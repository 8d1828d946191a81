use eframe::egui::Color32;

use crate::selection::{SelectionClip, cutout};
use crate::tools::polygon::{Vertex, classify_click, draw_open_chain};
use crate::tools::{ToolBehavior, ToolContext, ToolInput, ToolSignal};
use crate::utils::color::contrast_color;
use crate::utils::geometry::Point;

/// Polygon cut-and-move. Vertices are collected like the polygon tool; closing
/// lifts the enclosed pixels into a [`SelectionClip`] that then floats under the
/// pointer until the next click drops it.
#[derive(Default)]
pub struct SelectionTool {
    points: Vec<Point>,
    contrast: Color32,
    clip: Option<SelectionClip>,
}

impl SelectionTool {
    pub fn is_floating(&self) -> bool {
        self.clip.is_some()
    }
}

impl ToolBehavior for SelectionTool {
    fn on_deactivate(&mut self, ctx: &mut ToolContext<'_>) {
        if self.clip.take().is_some() || !self.points.is_empty() {
            self.points.clear();
            ctx.restore_baseline();
        }
    }

    fn on_frame(&mut self, ctx: &mut ToolContext<'_>, input: &ToolInput) -> ToolSignal {
        if let Some(clip) = &self.clip {
            ctx.restore_baseline();
            clip.vacate(ctx.canvas, ctx.background);
            clip.place(ctx.canvas, input.pointer);
            if input.pressed {
                self.clip = None;
                self.points.clear();
                return ToolSignal::Commit;
            }
            return ToolSignal::Continue;
        }

        if self.points.is_empty() {
            self.contrast = ctx
                .canvas
                .get(input.pointer.x, input.pointer.y)
                .map_or(Color32::BLACK, contrast_color);
        }

        if input.pressed {
            match classify_click(&self.points, input.pointer) {
                Vertex::Close => {
                    ctx.restore_baseline();
                    self.clip = cutout(ctx.baseline, &self.points);
                    if self.clip.is_none() {
                        self.points.clear();
                    }
                    return ToolSignal::Continue;
                }
                Vertex::Append => self.points.push(input.pointer),
            }
        }
        if !self.points.is_empty() {
            draw_open_chain(ctx, &self.points, input.pointer, self.contrast);
        }
        ToolSignal::Continue
    }

    fn commits_on_release(&self) -> bool {
        false
    }

    fn tracks_hover(&self) -> bool {
        self.clip.is_some() || !self.points.is_empty()
    }

    fn outline(&self) -> Option<&[Point]> {
        self.clip.as_ref().map(|clip| clip.outline())
    }
}
