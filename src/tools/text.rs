use crate::tools::{KeyInput, ToolBehavior, ToolContext, ToolInput, ToolSignal};
use crate::utils::geometry::Point;

/// Click to start typing, click again to stamp the text where it was last shown.
///
/// While typing, every frame redraws the committed canvas with the live text
/// centred on the pointer.
#[derive(Clone, Debug, Default)]
pub struct TextTool {
    typing: bool,
    buffer: String,
}

impl TextTool {
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

impl ToolBehavior for TextTool {
    fn on_deactivate(&mut self, ctx: &mut ToolContext<'_>) {
        if self.typing {
            self.typing = false;
            self.buffer.clear();
            ctx.restore_baseline();
        }
    }

    fn on_key(&mut self, key: &KeyInput) -> bool {
        if !self.typing {
            return false;
        }
        match key {
            KeyInput::Text(text) => self
                .buffer
                .extend(text.chars().filter(|c| !c.is_control())),
            KeyInput::Backspace => {
                self.buffer.pop();
            }
            KeyInput::Navigation => {}
        }
        true
    }

    fn on_frame(&mut self, ctx: &mut ToolContext<'_>, input: &ToolInput) -> ToolSignal {
        if input.pressed {
            self.buffer.clear();
            if self.typing {
                // the canvas already shows last frame's preview, which becomes the edit
                self.typing = false;
                return ToolSignal::Commit;
            }
            self.typing = true;
        }
        if self.typing {
            ctx.restore_baseline();
            let rendered = ctx.glyphs.render(&self.buffer, *ctx.draw_color);
            let half = Point::new(
                rendered.width() as i32 / 2,
                rendered.height() as i32 / 2,
            );
            ctx.canvas.blit(&rendered, input.pointer - half);
        }
        ToolSignal::Continue
    }

    fn commits_on_release(&self) -> bool {
        false
    }

    fn tracks_hover(&self) -> bool {
        self.typing
    }
}
