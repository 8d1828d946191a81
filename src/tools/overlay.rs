use eframe::egui::Color32;

use crate::canvas::Surface;
use crate::raster::{fill_circle, line_points};
use crate::tools::{ToolBehavior, ToolContext, ToolInput, ToolSignal, WIDE_RADIUS};
use crate::utils::geometry::Point;

/// Opacity the ink overlay is composited with.
pub const INK_OPACITY: u8 = 100;
/// Opacity of each marker dab.
pub const MARKER_OPACITY: u8 = 5;

/// Ink collects the whole stroke in an opaque overlay and shows it at
/// [`INK_OPACITY`] over the committed canvas. Overlapping within one stroke does
/// not darken; a new stroke over an old one does.
#[derive(Default)]
pub struct InkTool {
    overlay: Option<Surface>,
}

impl ToolBehavior for InkTool {
    fn on_deactivate(&mut self, ctx: &mut ToolContext<'_>) {
        if self.overlay.take().is_some() {
            ctx.restore_baseline();
        }
    }

    fn on_frame(&mut self, ctx: &mut ToolContext<'_>, input: &ToolInput) -> ToolSignal {
        if input.pressed || !input.button_down {
            // a stroke released off the canvas never saw a button-up frame
            self.overlay = None;
        }
        if !input.button_down {
            return ToolSignal::Continue;
        }
        let color = *ctx.draw_color;
        let (w, h) = (ctx.canvas.width(), ctx.canvas.height());
        let overlay = self
            .overlay
            .get_or_insert_with(|| Surface::new(w, h, Color32::TRANSPARENT));
        for p in line_points(input.previous, input.pointer) {
            fill_circle(overlay, p, WIDE_RADIUS, color);
        }
        ctx.restore_baseline();
        ctx.canvas
            .blit_with_opacity(overlay, Point::default(), INK_OPACITY);
        ToolSignal::Continue
    }
}

/// Marker lays a faint disk at every point of the stroke, so the colour builds
/// up the longer the button is held over the same spot.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkerTool;

impl ToolBehavior for MarkerTool {
    fn on_frame(&mut self, ctx: &mut ToolContext<'_>, input: &ToolInput) -> ToolSignal {
        if !input.button_down {
            return ToolSignal::Continue;
        }
        let side = (2 * WIDE_RADIUS + 1) as usize;
        let mut dab = Surface::new(side, side, Color32::TRANSPARENT);
        fill_circle(
            &mut dab,
            Point::new(WIDE_RADIUS, WIDE_RADIUS),
            WIDE_RADIUS,
            *ctx.draw_color,
        );
        let anchor = Point::new(WIDE_RADIUS, WIDE_RADIUS);
        for p in line_points(input.previous, input.pointer) {
            ctx.canvas.blit_with_opacity(&dab, p - anchor, MARKER_OPACITY);
        }
        ToolSignal::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::*;

    #[test]
    fn ink_is_translucent_and_does_not_stack_within_a_stroke() {
        let mut rig = Rig::new(80, 80);
        let mut tool = InkTool::default();
        let p = Point::new(40, 40);
        tool.on_frame(&mut rig.ctx(), &press(p));
        let first = rig.canvas.get(40, 40).unwrap();
        assert!(first.r() > 0 && first.r() < 255);

        tool.on_frame(&mut rig.ctx(), &drag(p, p, p));
        assert_eq!(rig.canvas.get(40, 40), Some(first));
    }

    #[test]
    fn ink_darkens_across_strokes() {
        let mut rig = Rig::new(80, 80);
        let mut tool = InkTool::default();
        let p = Point::new(40, 40);
        tool.on_frame(&mut rig.ctx(), &press(p));
        let first = rig.canvas.get(40, 40).unwrap();
        tool.on_frame(&mut rig.ctx(), &release(p, p));
        rig.commit();

        tool.on_frame(&mut rig.ctx(), &press(p));
        assert!(rig.canvas.get(40, 40).unwrap().r() < first.r());
    }

    #[test]
    fn new_press_starts_a_fresh_overlay() {
        let mut rig = Rig::new(80, 80);
        let mut tool = InkTool::default();
        let p = Point::new(40, 40);
        tool.on_frame(&mut rig.ctx(), &press(p));
        let first = rig.canvas.get(40, 40).unwrap();
        // committed without the tool seeing the release
        rig.commit();

        tool.on_frame(&mut rig.ctx(), &press(Point::new(10, 70)));
        assert_eq!(rig.canvas.get(40, 40), Some(first));
    }

    #[test]
    fn ink_preview_is_dropped_on_deactivate() {
        let mut rig = Rig::new(80, 80);
        let mut tool = InkTool::default();
        tool.on_frame(&mut rig.ctx(), &press(Point::new(40, 40)));
        tool.on_deactivate(&mut rig.ctx());
        assert_eq!(rig.canvas, rig.baseline);
    }

    #[test]
    fn marker_builds_up_while_held() {
        let mut rig = Rig::new(80, 80);
        let mut tool = MarkerTool;
        let p = Point::new(40, 40);
        tool.on_frame(&mut rig.ctx(), &press(p));
        let once = rig.canvas.get(40, 40).unwrap();
        assert!(once.r() < 255);
        for _ in 0..10 {
            tool.on_frame(&mut rig.ctx(), &drag(p, p, p));
        }
        assert!(rig.canvas.get(40, 40).unwrap().r() < once.r());
        assert_eq!(rig.canvas.get(40, 19), Some(Color32::WHITE));
    }
}
