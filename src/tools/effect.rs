use crate::raster::{blur_disk, pixelate_around};
use crate::tools::{ToolBehavior, ToolContext, ToolInput, ToolSignal, WIDE_RADIUS};

/// Filters applied around the pointer on every frame the button is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectTool {
    Blur,
    Pixelate,
}

impl ToolBehavior for EffectTool {
    fn on_frame(&mut self, ctx: &mut ToolContext<'_>, input: &ToolInput) -> ToolSignal {
        if input.button_down {
            match self {
                EffectTool::Blur => blur_disk(ctx.canvas, input.pointer, WIDE_RADIUS),
                EffectTool::Pixelate => pixelate_around(ctx.canvas, input.pointer),
            }
        }
        ToolSignal::Continue
    }
}
