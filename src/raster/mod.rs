//! Pixel algorithms over a [`Surface`](crate::canvas::Surface). Everything here
//! clips silently at the surface edge.

pub mod effects;
pub mod fill;
pub mod line;
pub mod shapes;

pub use effects::{PIXEL_BLOCK, blur_disk, glitter, pixelate_around, pixelate_block, spray};
pub use fill::flood_fill;
pub use line::{line_points, stroke_segment};
pub use shapes::{
    OUTLINE_THICKNESS, circle_outline, ellipse_outline, fill_circle, fill_ellipse, fill_polygon,
    fill_rect, polygon_outline, polyline, rect_outline,
};
