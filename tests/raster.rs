use celestial_paint::canvas::Surface;
use celestial_paint::raster::{
    blur_disk, ellipse_outline, fill_polygon, flood_fill, line_points, pixelate_block,
    rect_outline, stroke_segment,
};
use celestial_paint::utils::geometry::{PixelRect, Point};
use eframe::egui::Color32;

fn count(surface: &Surface, color: Color32) -> usize {
    surface.pixels().iter().filter(|&&c| c == color).count()
}

#[test]
fn flood_fill_stays_inside_outline() {
    let mut s = Surface::new(60, 60, Color32::WHITE);
    rect_outline(&mut s, PixelRect::new(10, 10, 30, 30), Color32::BLACK);
    let filled = flood_fill(&mut s, Point::new(25, 25), Color32::RED);

    // interior of a 30x30 outline three pixels thick
    assert_eq!(filled, 24 * 24);
    assert_eq!(s.get(5, 5), Some(Color32::WHITE));
    assert_eq!(s.get(11, 11), Some(Color32::BLACK));

    // refilling with the same colour is a no-op
    assert_eq!(flood_fill(&mut s, Point::new(25, 25), Color32::RED), 0);
    assert_eq!(flood_fill(&mut s, Point::new(-1, 25), Color32::BLUE), 0);
}

#[test]
fn lines_visit_the_same_pixels_both_ways() {
    let ends = [
        (Point::new(0, 0), Point::new(17, 5)),
        (Point::new(-3, 8), Point::new(9, -14)),
        (Point::new(4, 4), Point::new(4, 40)),
        (Point::new(2, 1), Point::new(-21, 12)),
    ];
    for (a, b) in ends {
        let forward = line_points(a, b);
        let mut backward = line_points(b, a);
        backward.reverse();
        assert_eq!(forward, backward, "{a:?} -> {b:?}");
        for pair in forward.windows(2) {
            assert!((pair[1].x - pair[0].x).abs() <= 1);
            assert!((pair[1].y - pair[0].y).abs() <= 1);
        }
    }
}

#[test]
fn strokes_and_shapes_clip_at_the_edges() {
    let mut s = Surface::new(20, 20, Color32::WHITE);
    stroke_segment(&mut s, Point::new(-30, -30), Point::new(50, 50), 3, Color32::BLACK);
    fill_polygon(
        &mut s,
        &[Point::new(-10, 15), Point::new(30, 15), Point::new(10, 40)],
        Color32::BLUE,
    );
    ellipse_outline(&mut s, PixelRect::new(-5, -5, 40, 40), Color32::GREEN);
    assert_eq!(s.pixels().len(), 400);
    assert_eq!(s.get(10, 10), Some(Color32::BLACK));
    assert_eq!(s.get(2, 18), Some(Color32::BLUE));
}

#[test]
fn polygon_fill_stays_in_its_bounding_box() {
    let star = [
        Point::new(30, 2),
        Point::new(38, 55),
        Point::new(2, 20),
        Point::new(58, 20),
        Point::new(22, 55),
    ];
    let mut s = Surface::new(64, 64, Color32::WHITE);
    fill_polygon(&mut s, &star, Color32::BLACK);
    let bounds = PixelRect::bounding(&star).unwrap();
    for y in 0..64 {
        for x in 0..64 {
            if s.get(x, y) == Some(Color32::BLACK) {
                assert!(bounds.contains(Point::new(x, y)), "({x}, {y}) escaped");
            }
        }
    }
    // even-odd leaves the centre pentagon empty
    assert_eq!(s.get(30, 30), Some(Color32::WHITE));
    assert!(count(&s, Color32::BLACK) > 0);
}

#[test]
fn effects_leave_flat_colour_alone() {
    let grey = Color32::from_rgb(90, 120, 150);
    let mut s = Surface::new(50, 50, grey);
    blur_disk(&mut s, Point::new(25, 25), 20);
    pixelate_block(&mut s, Point::new(12, 12));
    assert_eq!(count(&s, grey), 2500);
}
