use eframe::egui::{Color32, ColorImage};
use rayon::prelude::*;

use crate::utils::geometry::{PixelRect, Point};

/// Owned grid of premultiplied RGBA pixels with its origin at the top-left.
///
/// Reads outside the grid return `None` and writes outside it are ignored, so
/// primitives working near an edge can sample and paint without checking first.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<Color32>,
}

impl Surface {
    pub fn new(width: usize, height: usize, fill: Color32) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub(crate) fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color32> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Overwrite a pixel. Returns `false` when the coordinate is outside the surface.
    pub fn set(&mut self, x: i32, y: i32, color: Color32) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.pixels[idx] = color;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_index(&mut self, idx: usize, color: Color32) {
        self.pixels[idx] = color;
    }

    pub fn fill(&mut self, color: Color32) {
        self.pixels.fill(color);
    }

    /// Overwrite every pixel of `rect` that lies on the surface.
    pub fn fill_rect(&mut self, rect: PixelRect, color: Color32) {
        let Some(clip) = rect.intersect(&self.bounds()) else {
            return;
        };
        for y in clip.y..clip.bottom() {
            let row = y as usize * self.width;
            let start = row + clip.x as usize;
            let end = row + clip.right() as usize;
            self.pixels[start..end].fill(color);
        }
    }

    /// Copy of the pixels under `rect`. Parts of `rect` off the surface come back transparent.
    pub fn subregion(&self, rect: PixelRect) -> Surface {
        let width = rect.width.max(0) as usize;
        let height = rect.height.max(0) as usize;
        let mut out = Surface::new(width, height, Color32::TRANSPARENT);
        if let Some(clip) = rect.intersect(&self.bounds()) {
            for y in clip.y..clip.bottom() {
                let src_start = y as usize * self.width + clip.x as usize;
                let len = clip.width as usize;
                let dst_start = (y - rect.y) as usize * width + (clip.x - rect.x) as usize;
                out.pixels[dst_start..dst_start + len]
                    .copy_from_slice(&self.pixels[src_start..src_start + len]);
            }
        }
        out
    }

    /// Replace this surface's contents with `other`'s, reusing the allocation.
    pub fn copy_from(&mut self, other: &Surface) {
        self.clone_from(other);
    }

    /// Composite `src` with its top-left at `dest`. Transparent source pixels leave
    /// the destination untouched and anything falling off this surface is dropped.
    pub fn blit(&mut self, src: &Surface, dest: Point) {
        self.blit_with_opacity(src, dest, 255);
    }

    /// Like [`Surface::blit`], with the whole source scaled by `opacity` (0..=255) first.
    pub fn blit_with_opacity(&mut self, src: &Surface, dest: Point, opacity: u8) {
        if opacity == 0 {
            return;
        }
        let target = PixelRect::new(dest.x, dest.y, src.width as i32, src.height as i32);
        let Some(clip) = target.intersect(&self.bounds()) else {
            return;
        };
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                let src_idx = (y - dest.y) as usize * src.width + (x - dest.x) as usize;
                let pixel = src.pixels[src_idx];
                if pixel.a() == 0 {
                    continue;
                }
                let pixel = apply_opacity_scale(pixel, opacity as u32);
                let dst_idx = y as usize * self.width + x as usize;
                self.pixels[dst_idx] = alpha_over(pixel, self.pixels[dst_idx]);
            }
        }
    }

    /// Upload-ready copy for an egui texture.
    pub fn to_color_image(&self) -> ColorImage {
        let mut img = ColorImage::new([self.width, self.height], Color32::TRANSPARENT);
        img.pixels
            .par_chunks_mut(self.width.max(1))
            .zip(self.pixels.par_chunks(self.width.max(1)))
            .for_each(|(dst, src)| dst.copy_from_slice(src));
        img
    }

    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let pixels = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                Color32::from_rgba_unmultiplied(r, g, b, a)
            })
            .collect();
        Self {
            width: img.width() as usize,
            height: img.height() as usize,
            pixels,
        }
    }

    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut bytes = Vec::with_capacity(self.width * self.height * 4);
        for px in &self.pixels {
            bytes.extend_from_slice(&px.to_srgba_unmultiplied());
        }
        image::RgbaImage::from_raw(self.width as u32, self.height as u32, bytes)
            .unwrap_or_else(|| image::RgbaImage::new(self.width as u32, self.height as u32))
    }
}

/// Standard "source over" alpha compositing for premultiplied colors.
pub fn alpha_over(src: Color32, dst: Color32) -> Color32 {
    let src_a = src.a() as u32;
    if src_a >= 255 {
        return src;
    }
    let dst_a = dst.a() as u32;
    let inv = 255 - src_a;
    let out_a = src_a + (dst_a * inv + 127) / 255;
    if out_a == 0 {
        return Color32::TRANSPARENT;
    }

    let out_r = src.r() as u32 + (dst.r() as u32 * inv + 127) / 255;
    let out_g = src.g() as u32 + (dst.g() as u32 * inv + 127) / 255;
    let out_b = src.b() as u32 + (dst.b() as u32 * inv + 127) / 255;

    Color32::from_rgba_premultiplied(
        out_r.min(255) as u8,
        out_g.min(255) as u8,
        out_b.min(255) as u8,
        out_a.min(255) as u8,
    )
}

#[inline]
fn apply_opacity_scale(color: Color32, opacity_scale: u32) -> Color32 {
    if opacity_scale >= 255 {
        return color;
    }
    let a = (color.a() as u32 * opacity_scale + 127) / 255;
    let r = (color.r() as u32 * opacity_scale + 127) / 255;
    let g = (color.g() as u32 * opacity_scale + 127) / 255;
    let b = (color.b() as u32 * opacity_scale + 127) / 255;
    Color32::from_rgba_premultiplied(r as u8, g as u8, b as u8, a as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut s = Surface::new(4, 3, Color32::WHITE);
        assert_eq!(s.get(-1, 0), None);
        assert_eq!(s.get(4, 0), None);
        assert!(!s.set(0, 3, Color32::RED));
        assert!(s.pixels().iter().all(|&p| p == Color32::WHITE));
        assert!(s.set(3, 2, Color32::RED));
        assert_eq!(s.get(3, 2), Some(Color32::RED));
    }

    #[test]
    fn subregion_copies_and_pads_transparent() {
        let mut s = Surface::new(4, 4, Color32::WHITE);
        s.set(1, 1, Color32::RED);
        let sub = s.subregion(PixelRect::new(-1, -1, 3, 3));
        assert_eq!(sub.get(0, 0), Some(Color32::TRANSPARENT));
        assert_eq!(sub.get(1, 1), Some(Color32::WHITE));
        assert_eq!(sub.get(2, 2), Some(Color32::RED));
    }

    #[test]
    fn blit_skips_transparent_and_clips() {
        let mut dst = Surface::new(4, 4, Color32::WHITE);
        let mut src = Surface::new(2, 2, Color32::TRANSPARENT);
        src.set(0, 0, Color32::BLUE);
        src.set(1, 1, Color32::GREEN);
        dst.blit(&src, Point::new(3, 3));
        assert_eq!(dst.get(3, 3), Some(Color32::BLUE));
        assert_eq!(dst.pixels().iter().filter(|&&p| p != Color32::WHITE).count(), 1);
    }

    #[test]
    fn partial_opacity_blends_toward_source() {
        let mut dst = Surface::new(1, 1, Color32::WHITE);
        let src = Surface::new(1, 1, Color32::BLACK);
        dst.blit_with_opacity(&src, Point::new(0, 0), 100);
        let once = dst.get(0, 0).unwrap();
        assert!(once.r() < 255 && once.r() > 0);
        dst.blit_with_opacity(&src, Point::new(0, 0), 100);
        assert!(dst.get(0, 0).unwrap().r() < once.r());
        assert_eq!(dst.get(0, 0).unwrap().a(), 255);
    }

    #[test]
    fn snapshot_is_independent_of_later_writes() {
        let mut s = Surface::new(2, 2, Color32::WHITE);
        let snap = s.clone();
        s.fill(Color32::BLACK);
        assert!(snap.pixels().iter().all(|&p| p == Color32::WHITE));
    }

    #[test]
    fn rgba_image_round_trip_keeps_opaque_pixels() {
        let mut s = Surface::new(3, 2, Color32::WHITE);
        s.set(2, 1, Color32::from_rgb(10, 20, 30));
        let back = Surface::from_rgba_image(&s.to_rgba_image());
        assert_eq!(back, s);
    }
}
