use eframe::egui::{self, Color32, Painter, Pos2, Stroke};

use crate::canvas::Surface;
use crate::raster::fill_polygon;
use crate::utils::geometry::{PixelRect, Point};
use crate::utils::profiler::ScopeTimer;

/// Pixels cut out of the canvas along a closed polygon, waiting to be placed.
///
/// Only the polygon interior is opaque; everything else in the bounding box is
/// fully transparent, so compositing the clip never disturbs pixels outside it.
#[derive(Clone, Debug)]
pub struct SelectionClip {
    surface: Surface,
    origin: Point,
    outline: Vec<Point>,
}

impl SelectionClip {
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Top-left of the polygon's bounding box where the clip was taken from.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The polygon the clip was cut along, in canvas coordinates.
    pub fn outline(&self) -> &[Point] {
        &self.outline
    }

    /// Top-left at which the clip is drawn so that it is centred on `pointer`.
    pub fn placement(&self, pointer: Point) -> Point {
        Point::new(
            pointer.x - self.surface.width() as i32 / 2,
            pointer.y - self.surface.height() as i32 / 2,
        )
    }

    /// Composite the clip centred on `pointer`.
    pub fn place(&self, canvas: &mut Surface, pointer: Point) {
        canvas.blit(&self.surface, self.placement(pointer));
    }

    /// Paint the region the clip came from with `color`.
    pub fn vacate(&self, canvas: &mut Surface, color: Color32) {
        fill_polygon(canvas, &self.outline, color);
    }
}

/// Cut the pixels enclosed by `points` out of `canvas`.
///
/// The bounding box is copied, then a mask of the filled polygon decides which
/// pixels stay opaque. Needs at least three points.
pub fn cutout(canvas: &Surface, points: &[Point]) -> Option<SelectionClip> {
    if points.len() < 3 {
        return None;
    }
    let bounds = PixelRect::bounding(points)?;
    let _timer = ScopeTimer::new("cutout");

    let mut clip = canvas.subregion(bounds);
    let local: Vec<Point> = points.iter().map(|&p| p - bounds.origin()).collect();
    let mut mask = Surface::new(clip.width(), clip.height(), Color32::TRANSPARENT);
    fill_polygon(&mut mask, &local, Color32::WHITE);

    for (idx, m) in mask.pixels().iter().enumerate() {
        if m.a() == 0 {
            clip.set_index(idx, Color32::TRANSPARENT);
        }
    }

    log::debug!(
        "cut {}x{} selection at ({}, {})",
        bounds.width,
        bounds.height,
        bounds.x,
        bounds.y
    );
    Some(SelectionClip {
        surface: clip,
        origin: bounds.origin(),
        outline: points.to_vec(),
    })
}

/// Closed outline of a canvas-space polygon drawn over the canvas texture.
/// `offset` is the screen position of canvas pixel (0, 0).
pub fn draw_overlay(painter: &Painter, points: &[Point], zoom: f32, offset: Pos2, color: Color32) {
    if points.len() < 2 {
        return;
    }
    let to_screen = |p: Point| -> Pos2 {
        Pos2::new(
            offset.x + (p.x as f32 + 0.5) * zoom,
            offset.y + (p.y as f32 + 0.5) * zoom,
        )
    };
    let screen_points: Vec<Pos2> = points.iter().map(|p| to_screen(*p)).collect();
    painter.add(egui::Shape::closed_line(screen_points, Stroke::new(1.0, color)));
}
