use eframe::egui::Color32;

use crate::canvas::Surface;
use crate::raster::shapes::fill_circle;
use crate::utils::geometry::Point;

/// Lattice points from `from` to `to`, both ends included.
///
/// The segment is sampled `max(|dx|, |dy|)` times and each sample is rounded to
/// the nearest pixel. Rounding works on the exact absolute position, so the
/// reversed segment visits the same pixels in reverse order.
pub fn line_points(from: Point, to: Point) -> Vec<Point> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return vec![from];
    }
    (0..=steps)
        .map(|i| {
            Point::new(
                lerp_round(from.x, dx, i, steps),
                lerp_round(from.y, dy, i, steps),
            )
        })
        .collect()
}

/// `floor(start + i * delta / steps + 1/2)` in exact integer arithmetic.
fn lerp_round(start: i32, delta: i32, i: i32, steps: i32) -> i32 {
    let steps = steps as i64;
    let num = 2 * (start as i64 * steps + i as i64 * delta as i64) + steps;
    num.div_euclid(2 * steps) as i32
}

/// Stitch two pointer samples together with disks of `radius`.
pub fn stroke_segment(surface: &mut Surface, from: Point, to: Point, radius: i32, color: Color32) {
    for p in line_points(from, to) {
        fill_circle(surface, p, radius, color);
    }
}
