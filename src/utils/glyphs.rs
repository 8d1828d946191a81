use ab_glyph::{Font, FontArc, GlyphId, ScaleFont, point};
use eframe::egui::{Color32, FontDefinitions, FontFamily};

use crate::canvas::Surface;
use crate::error::{EditorError, Result};

/// Rasterizes a single line of text into a transparent surface.
pub trait GlyphRenderer {
    fn render(&self, text: &str, color: Color32) -> Surface;
}

/// Renderer used when no font could be loaded. Always yields an empty surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullGlyphs;

impl GlyphRenderer for NullGlyphs {
    fn render(&self, _text: &str, _color: Color32) -> Surface {
        Surface::new(0, 0, Color32::TRANSPARENT)
    }
}

pub struct AbGlyphRenderer {
    font: FontArc,
    size: f32,
}

impl AbGlyphRenderer {
    pub fn new(font: FontArc, size: f32) -> Self {
        Self { font, size }
    }

    /// Use the first proportional font bundled with egui.
    pub fn from_egui_defaults(size: f32) -> Result<Self> {
        let defs = FontDefinitions::default();
        let name = defs
            .families
            .get(&FontFamily::Proportional)
            .and_then(|names| names.first())
            .ok_or_else(|| EditorError::Font("no proportional family".to_string()))?;
        let data = defs
            .font_data
            .get(name)
            .ok_or_else(|| EditorError::Font(format!("missing font data for {name}")))?;
        let font = FontArc::try_from_vec(data.font.to_vec())
            .map_err(|e| EditorError::Font(e.to_string()))?;
        Ok(Self::new(font, size))
    }

    fn layout(&self, text: &str) -> (Vec<(GlyphId, f32)>, f32) {
        let scaled = self.font.as_scaled(self.size);
        let mut glyphs = Vec::with_capacity(text.len());
        let mut cursor_x = 0.0f32;
        let mut last: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(prev) = last {
                cursor_x += scaled.kern(prev, id);
            }
            glyphs.push((id, cursor_x));
            cursor_x += scaled.h_advance(id);
            last = Some(id);
        }
        (glyphs, cursor_x)
    }
}

impl GlyphRenderer for AbGlyphRenderer {
    fn render(&self, text: &str, color: Color32) -> Surface {
        let (glyphs, width) = self.layout(text);
        let scaled = self.font.as_scaled(self.size);
        let ascent = scaled.ascent();
        let mut out = Surface::new(
            width.ceil().max(0.0) as usize,
            scaled.height().ceil().max(0.0) as usize,
            Color32::TRANSPARENT,
        );

        for (id, x) in glyphs {
            let glyph = id.with_scale_and_position(self.size, point(x, ascent));
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|px, py, coverage| {
                let tx = bounds.min.x as i32 + px as i32;
                let ty = bounds.min.y as i32 + py as i32;
                let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                let existing = out.get(tx, ty).map_or(0, |c| c.a());
                if alpha > existing {
                    out.set(
                        tx,
                        ty,
                        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha),
                    );
                }
            });
        }
        out
    }
}
