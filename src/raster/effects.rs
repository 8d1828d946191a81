use eframe::egui::Color32;
use rand::Rng;
use rayon::prelude::*;

use crate::canvas::Surface;
use crate::raster::shapes::fill_circle;
use crate::utils::geometry::{PixelRect, Point};
use crate::utils::profiler::ScopeTimer;

/// Side of a pixelation block. Blocks are aligned to multiples of this in canvas space.
pub const PIXEL_BLOCK: i32 = 5;

/// Scatter `radius` random samples over the square around `center` and paint
/// the ones landing inside the disk.
pub fn spray<R: Rng + ?Sized>(
    surface: &mut Surface,
    center: Point,
    radius: i32,
    color: Color32,
    rng: &mut R,
) {
    let r = radius.max(0);
    for _ in 0..r {
        let dx = rng.random_range(-r..=r);
        let dy = rng.random_range(-r..=r);
        if dx * dx + dy * dy <= r * r {
            surface.set(center.x + dx, center.y + dy, color);
        }
    }
}

/// One sparkle: a disk of radius 1..=3 at a random spot, kept only if it fits
/// entirely inside the disk of `radius` around `center`.
pub fn glitter<R: Rng + ?Sized>(
    surface: &mut Surface,
    center: Point,
    radius: i32,
    color: Color32,
    rng: &mut R,
) {
    let r = radius.max(0);
    let dx = rng.random_range(-r..=r);
    let dy = rng.random_range(-r..=r);
    let dot = rng.random_range(1..=3);
    let offset = ((dx * dx + dy * dy) as f32).sqrt();
    if offset + dot as f32 <= r as f32 {
        fill_circle(surface, Point::new(center.x + dx, center.y + dy), dot, color);
    }
}

/// Replace every pixel in the disk of `radius` with the floor mean of its
/// on-surface 4-neighbours.
///
/// All averages are taken from the surface as it was before the call, then
/// written back together. Pixels with no neighbours on the surface keep their colour.
pub fn blur_disk(surface: &mut Surface, center: Point, radius: i32) {
    let _timer = ScopeTimer::new("blur_disk");
    let r = radius.max(0);
    let square = PixelRect::new(center.x - r, center.y - r, 2 * r + 1, 2 * r + 1);
    let Some(clip) = square.intersect(&surface.bounds()) else {
        return;
    };

    let src = &*surface;
    let updates: Vec<(i32, i32, Color32)> = (clip.y..clip.bottom())
        .into_par_iter()
        .flat_map_iter(|y| {
            (clip.x..clip.right()).filter_map(move |x| {
                let (dx, dy) = (x - center.x, y - center.y);
                if dx * dx + dy * dy > r * r {
                    return None;
                }
                let neighbours = [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
                    .into_iter()
                    .filter_map(|(nx, ny)| src.get(nx, ny));
                mean_rgb(neighbours).map(|c| (x, y, c))
            })
        })
        .collect();

    for (x, y, color) in updates {
        surface.set(x, y, color);
    }
}

/// Flatten the grid-aligned block containing `at` to the floor mean of its on-surface pixels.
pub fn pixelate_block(surface: &mut Surface, at: Point) {
    let origin = Point::new(
        at.x - at.x.rem_euclid(PIXEL_BLOCK),
        at.y - at.y.rem_euclid(PIXEL_BLOCK),
    );
    let block = PixelRect::new(origin.x, origin.y, PIXEL_BLOCK, PIXEL_BLOCK);
    let Some(clip) = block.intersect(&surface.bounds()) else {
        return;
    };
    let members = (clip.y..clip.bottom())
        .flat_map(|y| (clip.x..clip.right()).map(move |x| (x, y)))
        .filter_map(|(x, y)| surface.get(x, y));
    if let Some(mean) = mean_rgb(members) {
        surface.fill_rect(clip, mean);
    }
}

/// Pixelate the 5 x 5 group of blocks sampled every [`PIXEL_BLOCK`] pixels from
/// two blocks before `center` to two blocks after it.
pub fn pixelate_around(surface: &mut Surface, center: Point) {
    let reach = 2 * PIXEL_BLOCK;
    for dy in (-reach..=reach).step_by(PIXEL_BLOCK as usize) {
        for dx in (-reach..=reach).step_by(PIXEL_BLOCK as usize) {
            pixelate_block(surface, Point::new(center.x + dx, center.y + dy));
        }
    }
}

/// Channel-wise floor mean of opaque RGB. `None` for an empty set.
fn mean_rgb(colors: impl Iterator<Item = Color32>) -> Option<Color32> {
    let (mut r, mut g, mut b, mut n) = (0u32, 0u32, 0u32, 0u32);
    for c in colors {
        r += c.r() as u32;
        g += c.g() as u32;
        b += c.b() as u32;
        n += 1;
    }
    (n > 0).then(|| Color32::from_rgb((r / n) as u8, (g / n) as u8, (b / n) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn spray_stays_inside_the_disk() {
        let mut s = Surface::new(61, 61, Color32::WHITE);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            spray(&mut s, Point::new(30, 30), 20, Color32::RED, &mut rng);
        }
        let mut hits = 0;
        for y in 0..61 {
            for x in 0..61 {
                if s.get(x, y) == Some(Color32::RED) {
                    hits += 1;
                    assert!((x - 30).pow(2) + (y - 30).pow(2) <= 400);
                }
            }
        }
        assert!(hits > 0);
    }

    #[test]
    fn glitter_dots_fit_inside_the_disk() {
        let mut s = Surface::new(61, 61, Color32::WHITE);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            glitter(&mut s, Point::new(30, 30), 20, Color32::BLUE, &mut rng);
        }
        for y in 0..61 {
            for x in 0..61 {
                if s.get(x, y) == Some(Color32::BLUE) {
                    assert!((x - 30).pow(2) + (y - 30).pow(2) <= 400);
                }
            }
        }
    }

    #[test]
    fn blur_averages_neighbours_not_self() {
        let mut s = Surface::new(5, 5, Color32::WHITE);
        s.set(2, 2, Color32::BLACK);
        blur_disk(&mut s, Point::new(2, 2), 0);
        // the centre only sees its white neighbours
        assert_eq!(s.get(2, 2), Some(Color32::WHITE));

        let mut s = Surface::new(5, 5, Color32::WHITE);
        s.set(1, 2, Color32::BLACK);
        blur_disk(&mut s, Point::new(2, 2), 0);
        assert_eq!(s.get(2, 2), Some(Color32::from_rgb(191, 191, 191)));
    }

    #[test]
    fn blur_reads_the_pre_blur_state() {
        let mut s = Surface::new(3, 1, Color32::WHITE);
        s.set(0, 0, Color32::BLACK);
        blur_disk(&mut s, Point::new(1, 0), 1);
        // corner pixels have one neighbour, the middle has two
        assert_eq!(s.get(0, 0), Some(Color32::WHITE));
        assert_eq!(s.get(1, 0), Some(Color32::from_rgb(127, 127, 127)));
        assert_eq!(s.get(2, 0), Some(Color32::WHITE));
    }

    #[test]
    fn pixelate_flattens_grid_aligned_blocks() {
        let mut s = Surface::new(10, 10, Color32::WHITE);
        s.set(5, 5, Color32::BLACK);
        pixelate_block(&mut s, Point::new(7, 8));
        let expected = Color32::from_rgb(244, 244, 244);
        for y in 5..10 {
            for x in 5..10 {
                assert_eq!(s.get(x, y), Some(expected));
            }
        }
        assert_eq!(s.get(4, 4), Some(Color32::WHITE));
    }

    #[test]
    fn pixelate_twice_is_a_no_op() {
        let mut s = Surface::new(40, 40, Color32::WHITE);
        for i in 0..40 {
            s.set(i, i, Color32::from_rgb(i as u8 * 6, 30, 200));
            s.set(39 - i, i, Color32::RED);
        }
        pixelate_around(&mut s, Point::new(17, 22));
        let once = s.clone();
        pixelate_around(&mut s, Point::new(17, 22));
        assert_eq!(s, once);
    }

    #[test]
    fn pixelate_near_edge_uses_in_bounds_members() {
        let mut s = Surface::new(7, 7, Color32::WHITE);
        s.set(5, 5, Color32::BLACK);
        s.set(6, 6, Color32::BLACK);
        pixelate_block(&mut s, Point::new(6, 6));
        // block 5..10 clipped to 5..7 has four members, two of them black
        assert_eq!(s.get(6, 5), Some(Color32::from_rgb(127, 127, 127)));
    }
}
