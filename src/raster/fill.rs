use eframe::egui::Color32;

use crate::canvas::Surface;
use crate::utils::geometry::Point;
use crate::utils::profiler::ScopeTimer;

/// 4-connected flood fill from `seed`, replacing the seed's colour with `color`.
///
/// Work is kept on an explicit stack so large regions cannot overflow the call
/// stack. Returns the number of pixels that changed; zero when the seed is off
/// the surface or already has the target colour.
pub fn flood_fill(surface: &mut Surface, seed: Point, color: Color32) -> usize {
    let Some(original) = surface.get(seed.x, seed.y) else {
        return 0;
    };
    if original == color {
        return 0;
    }

    let _timer = ScopeTimer::new("flood_fill");
    let mut visited = vec![false; surface.width() * surface.height()];
    let mut pending = vec![seed];
    let mut changed = 0;

    while let Some(p) = pending.pop() {
        let Some(idx) = surface.index(p.x, p.y) else {
            continue;
        };
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        if surface.pixels()[idx] != original {
            continue;
        }
        surface.set_index(idx, color);
        changed += 1;
        pending.extend([
            Point::new(p.x - 1, p.y),
            Point::new(p.x + 1, p.y),
            Point::new(p.x, p.y - 1),
            Point::new(p.x, p.y + 1),
        ]);
    }

    log::debug!("flood fill changed {changed} pixels");
    changed
}
