use crate::raster::{ellipse_outline, fill_ellipse, fill_rect, rect_outline, stroke_segment};
use crate::tools::{FINE_RADIUS, ToolBehavior, ToolContext, ToolInput, ToolSignal};
use crate::utils::geometry::PixelRect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
    FilledRectangle,
    Ellipse,
    FilledEllipse,
}

/// Drag tools. While the button is held the committed canvas is restored and the
/// shape spanning the press position and the pointer is drawn on top, so only
/// the final frame's shape survives the release.
#[derive(Clone, Copy, Debug)]
pub struct ShapeTool {
    kind: ShapeKind,
}

impl ShapeTool {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }
}

impl ToolBehavior for ShapeTool {
    fn on_frame(&mut self, ctx: &mut ToolContext<'_>, input: &ToolInput) -> ToolSignal {
        if !input.button_down {
            return ToolSignal::Continue;
        }
        ctx.restore_baseline();
        let color = *ctx.draw_color;
        let rect = PixelRect::from_drag(input.drag_origin, input.pointer);
        match self.kind {
            ShapeKind::Line => {
                stroke_segment(ctx.canvas, input.drag_origin, input.pointer, FINE_RADIUS, color)
            }
            ShapeKind::Rectangle => rect_outline(ctx.canvas, rect, color),
            ShapeKind::FilledRectangle => fill_rect(ctx.canvas, rect, color),
            ShapeKind::Ellipse => ellipse_outline(ctx.canvas, rect, color),
            ShapeKind::FilledEllipse => fill_ellipse(ctx.canvas, rect, color),
        }
        ToolSignal::Continue
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::Color32;

    use super::*;
    use crate::tools::testing::*;
    use crate::utils::geometry::Point;

    #[test]
    fn preview_does_not_accumulate() {
        let mut rig = Rig::new(80, 80);
        let mut tool = ShapeTool::new(ShapeKind::FilledRectangle);
        let origin = Point::new(10, 10);
        tool.on_frame(&mut rig.ctx(), &drag(origin, origin, Point::new(60, 60)));
        tool.on_frame(
            &mut rig.ctx(),
            &drag(origin, Point::new(60, 60), Point::new(20, 20)),
        );
        assert_eq!(rig.canvas.get(15, 15), Some(Color32::BLACK));
        assert_eq!(rig.canvas.get(40, 40), Some(Color32::WHITE));
    }

    #[test]
    fn drag_in_any_direction_normalizes() {
        let mut rig = Rig::new(80, 80);
        let mut tool = ShapeTool::new(ShapeKind::FilledRectangle);
        let origin = Point::new(50, 50);
        tool.on_frame(&mut rig.ctx(), &drag(origin, origin, Point::new(30, 40)));
        assert_eq!(rig.canvas.get(30, 40), Some(Color32::BLACK));
        assert_eq!(rig.canvas.get(49, 49), Some(Color32::BLACK));
        assert_eq!(rig.canvas.get(50, 50), Some(Color32::WHITE));
    }

    #[test]
    fn line_joins_press_and_pointer() {
        let mut rig = Rig::new(80, 80);
        let mut tool = ShapeTool::new(ShapeKind::Line);
        let origin = Point::new(5, 5);
        tool.on_frame(&mut rig.ctx(), &drag(origin, origin, Point::new(70, 5)));
        assert_eq!(rig.canvas.get(5, 5), Some(Color32::BLACK));
        assert_eq!(rig.canvas.get(70, 7), Some(Color32::BLACK));
        assert_eq!(rig.canvas.get(40, 8), Some(Color32::WHITE));
    }
}
