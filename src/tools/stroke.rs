use crate::raster::{fill_circle, glitter, line_points, spray};
use crate::tools::{FINE_RADIUS, ToolBehavior, ToolContext, ToolInput, ToolSignal, WIDE_RADIUS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Paint {
    Solid,
    Erase,
    Spray,
    Glitter,
}

/// Freehand tools. Each frame the segment from the previous pointer sample to
/// the current one is walked and every point gets one dab.
#[derive(Clone, Copy, Debug)]
pub struct StrokeTool {
    paint: Paint,
    radius: i32,
}

impl StrokeTool {
    pub fn pencil() -> Self {
        Self {
            paint: Paint::Solid,
            radius: FINE_RADIUS,
        }
    }

    pub fn brush() -> Self {
        Self {
            paint: Paint::Solid,
            radius: WIDE_RADIUS,
        }
    }

    pub fn eraser() -> Self {
        Self {
            paint: Paint::Erase,
            radius: WIDE_RADIUS,
        }
    }

    pub fn spray() -> Self {
        Self {
            paint: Paint::Spray,
            radius: WIDE_RADIUS,
        }
    }

    pub fn glitter() -> Self {
        Self {
            paint: Paint::Glitter,
            radius: WIDE_RADIUS,
        }
    }
}

impl ToolBehavior for StrokeTool {
    fn on_frame(&mut self, ctx: &mut ToolContext<'_>, input: &ToolInput) -> ToolSignal {
        if !input.button_down {
            return ToolSignal::Continue;
        }
        let color = *ctx.draw_color;
        for p in line_points(input.previous, input.pointer) {
            match self.paint {
                Paint::Solid => fill_circle(ctx.canvas, p, self.radius, color),
                Paint::Erase => fill_circle(ctx.canvas, p, self.radius, ctx.background),
                Paint::Spray => spray(ctx.canvas, p, self.radius, color, ctx.rng),
                Paint::Glitter => glitter(ctx.canvas, p, self.radius, color, ctx.rng),
            }
        }
        ToolSignal::Continue
    }
}
