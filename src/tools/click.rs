use crate::raster::flood_fill;
use crate::tools::{ToolBehavior, ToolContext, ToolInput, ToolSignal};

/// Flood fills the region under the pointer when the button is released.
#[derive(Clone, Copy, Debug, Default)]
pub struct BucketTool;

impl ToolBehavior for BucketTool {
    fn on_frame(&mut self, ctx: &mut ToolContext<'_>, input: &ToolInput) -> ToolSignal {
        if input.released {
            flood_fill(ctx.canvas, input.pointer, *ctx.draw_color);
        }
        ToolSignal::Continue
    }
}

/// Picks up the canvas colour under the pointer while the button is held.
/// Never touches the canvas, so it never commits.
#[derive(Clone, Copy, Debug, Default)]
pub struct EyedropperTool;

impl ToolBehavior for EyedropperTool {
    fn on_frame(&mut self, ctx: &mut ToolContext<'_>, input: &ToolInput) -> ToolSignal {
        if input.button_down {
            if let Some(color) = ctx.canvas.get(input.pointer.x, input.pointer.y) {
                *ctx.draw_color = color;
            }
        }
        ToolSignal::Continue
    }

    fn commits_on_release(&self) -> bool {
        false
    }
}
