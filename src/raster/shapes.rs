use eframe::egui::Color32;

use crate::canvas::Surface;
use crate::raster::line::{line_points, stroke_segment};
use crate::utils::geometry::{PixelRect, Point};

/// Width of hollow shape outlines.
pub const OUTLINE_THICKNESS: i32 = 3;

/// Rectangle outlines only get a hollow middle once both sides reach this size.
const RECT_HOLLOW_MIN: i32 = 7;
/// Same threshold for ellipse outlines.
const ELLIPSE_HOLLOW_MIN: i32 = 10;

/// Solid disk of all pixels within `radius` of `center`. A radius of zero is one pixel.
pub fn fill_circle(surface: &mut Surface, center: Point, radius: i32, color: Color32) {
    let r = radius.max(0);
    let r_sq = r * r;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r_sq {
                surface.set(center.x + dx, center.y + dy, color);
            }
        }
    }
}

/// Ring of the given thickness on the inside of the disk of `radius`.
pub fn circle_outline(
    surface: &mut Surface,
    center: Point,
    radius: i32,
    thickness: i32,
    color: Color32,
) {
    let r = radius.max(0);
    let inner = r - thickness.max(1);
    let r_sq = r * r;
    let inner_sq = inner * inner;
    for dy in -r..=r {
        for dx in -r..=r {
            let d_sq = dx * dx + dy * dy;
            if d_sq <= r_sq && (inner < 0 || d_sq > inner_sq) {
                surface.set(center.x + dx, center.y + dy, color);
            }
        }
    }
}

pub fn fill_rect(surface: &mut Surface, rect: PixelRect, color: Color32) {
    surface.fill_rect(rect, color);
}

/// Hollow rectangle: a solid scratch rectangle with a transparent inset punched out,
/// composited so the hole leaves the destination alone.
pub fn rect_outline(surface: &mut Surface, rect: PixelRect, color: Color32) {
    if rect.is_empty() {
        return;
    }
    let mut scratch = Surface::new(rect.width as usize, rect.height as usize, color);
    if rect.width >= RECT_HOLLOW_MIN && rect.height >= RECT_HOLLOW_MIN {
        if let Some(hole) = scratch.bounds().inset(OUTLINE_THICKNESS) {
            scratch.fill_rect(hole, Color32::TRANSPARENT);
        }
    }
    surface.blit(&scratch, rect.origin());
}

/// Solid ellipse inscribed in `rect`, sampled at pixel centres.
pub fn fill_ellipse(surface: &mut Surface, rect: PixelRect, color: Color32) {
    if rect.is_empty() {
        return;
    }
    let rx = rect.width as f32 / 2.0;
    let ry = rect.height as f32 / 2.0;
    let cx = rect.x as f32 + rx;
    let cy = rect.y as f32 + ry;
    for y in rect.y..rect.bottom() {
        let ny = (y as f32 + 0.5 - cy) / ry;
        for x in rect.x..rect.right() {
            let nx = (x as f32 + 0.5 - cx) / rx;
            if nx * nx + ny * ny <= 1.0 {
                surface.set(x, y, color);
            }
        }
    }
}

/// Hollow ellipse built the same way as [`rect_outline`].
pub fn ellipse_outline(surface: &mut Surface, rect: PixelRect, color: Color32) {
    if rect.is_empty() {
        return;
    }
    let mut scratch = Surface::new(rect.width as usize, rect.height as usize, Color32::TRANSPARENT);
    let local = scratch.bounds();
    fill_ellipse(&mut scratch, local, color);
    if rect.width >= ELLIPSE_HOLLOW_MIN && rect.height >= ELLIPSE_HOLLOW_MIN {
        if let Some(hole) = local.inset(OUTLINE_THICKNESS) {
            fill_ellipse(&mut scratch, hole, Color32::TRANSPARENT);
        }
    }
    surface.blit(&scratch, rect.origin());
}

/// Solid polygon (even-odd rule at pixel centres) including its boundary pixels.
pub fn fill_polygon(surface: &mut Surface, points: &[Point], color: Color32) {
    let Some(bounds) = PixelRect::bounding(points) else {
        return;
    };
    let mut crossings = Vec::with_capacity(points.len());
    for y in bounds.y..bounds.bottom() {
        let sy = y as f32 + 0.5;
        crossings.clear();
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            let (ay, by) = (a.y as f32, b.y as f32);
            if (ay <= sy) != (by <= sy) {
                let t = (sy - ay) / (by - ay);
                crossings.push(a.x as f32 + t * (b.x - a.x) as f32);
            }
        }
        crossings.sort_by(f32::total_cmp);
        for span in crossings.chunks_exact(2) {
            let start = (span[0] - 0.5).ceil() as i32;
            let end = (span[1] - 0.5).floor() as i32;
            for x in start..=end {
                surface.set(x, y, color);
            }
        }
    }
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        for p in line_points(*a, b) {
            surface.set(p.x, p.y, color);
        }
    }
}

/// Closed polygon outline of [`OUTLINE_THICKNESS`].
pub fn polygon_outline(surface: &mut Surface, points: &[Point], color: Color32) {
    let radius = OUTLINE_THICKNESS / 2;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        stroke_segment(surface, *a, b, radius, color);
    }
}

/// Open chain through `points`; the last point is not joined back to the first.
pub fn polyline(surface: &mut Surface, points: &[Point], radius: i32, color: Color32) {
    for pair in points.windows(2) {
        stroke_segment(surface, pair[0], pair[1], radius, color);
    }
}
