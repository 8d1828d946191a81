use eframe::egui::Color32;

use crate::raster::{fill_circle, fill_polygon, polygon_outline, polyline};
use crate::tools::{
    CLOSE_DISTANCE, FINE_RADIUS, ToolBehavior, ToolContext, ToolInput, ToolSignal,
};
use crate::utils::geometry::Point;

/// What a click does to a multi-click polygon gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vertex {
    Append,
    Close,
}

/// Closing needs at least one vertex and a click within [`CLOSE_DISTANCE`] of the first.
pub fn classify_click(points: &[Point], click: Point) -> Vertex {
    match points.first() {
        Some(first) if first.distance(click) < CLOSE_DISTANCE => Vertex::Close,
        _ => Vertex::Append,
    }
}

/// Preview of an open polygon: the vertices so far joined up to the pointer.
pub fn draw_open_chain(
    ctx: &mut ToolContext<'_>,
    points: &[Point],
    pointer: Point,
    color: Color32,
) {
    ctx.restore_baseline();
    let mut chain = Vec::with_capacity(points.len() + 1);
    chain.extend_from_slice(points);
    chain.push(pointer);
    polyline(ctx.canvas, &chain, FINE_RADIUS, color);
}

/// Click-by-click polygon, outlined or filled.
#[derive(Clone, Debug, Default)]
pub struct PolygonTool {
    filled: bool,
    points: Vec<Point>,
}

impl PolygonTool {
    pub fn new(filled: bool) -> Self {
        Self {
            filled,
            points: Vec::new(),
        }
    }

    fn finish(&mut self, ctx: &mut ToolContext<'_>) {
        ctx.restore_baseline();
        let color = *ctx.draw_color;
        match self.points.len() {
            0 => {}
            1 => fill_circle(ctx.canvas, self.points[0], FINE_RADIUS, color),
            2 => polygon_outline(ctx.canvas, &self.points, color),
            _ if self.filled => fill_polygon(ctx.canvas, &self.points, color),
            _ => polygon_outline(ctx.canvas, &self.points, color),
        }
        log::debug!("polygon closed with {} vertices", self.points.len());
        self.points.clear();
    }
}

impl ToolBehavior for PolygonTool {
    fn on_deactivate(&mut self, ctx: &mut ToolContext<'_>) {
        if !self.points.is_empty() {
            self.points.clear();
            ctx.restore_baseline();
        }
    }

    fn on_frame(&mut self, ctx: &mut ToolContext<'_>, input: &ToolInput) -> ToolSignal {
        if input.pressed {
            match classify_click(&self.points, input.pointer) {
                Vertex::Close => {
                    self.finish(ctx);
                    return ToolSignal::Commit;
                }
                Vertex::Append => self.points.push(input.pointer),
            }
        }
        if !self.points.is_empty() {
            let color = *ctx.draw_color;
            draw_open_chain(ctx, &self.points, input.pointer, color);
        }
        ToolSignal::Continue
    }

    fn commits_on_release(&self) -> bool {
        false
    }

    fn tracks_hover(&self) -> bool {
        !self.points.is_empty()
    }
}
