use criterion::{Criterion, criterion_group, criterion_main};
use eframe::egui::Color32;
use celestial_paint::{
    canvas::Surface,
    raster::{blur_disk, fill_polygon, flood_fill, stroke_segment},
    utils::geometry::{PixelRect, Point},
};

fn bench_flood_fill(c: &mut Criterion) {
    // Worst case: the whole default canvas is one region.
    c.bench_function("flood_fill_750x550", |b| {
        let mut surface = Surface::new(750, 550, Color32::WHITE);
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let color = if flip { Color32::RED } else { Color32::WHITE };
            flood_fill(&mut surface, Point::new(375, 275), color)
        });
    });
}

fn bench_blur(c: &mut Criterion) {
    let mut surface = Surface::new(256, 256, Color32::WHITE);
    surface.fill_rect(PixelRect::new(0, 0, 128, 256), Color32::BLACK);
    c.bench_function("blur_disk_r20", |b| {
        b.iter(|| blur_disk(&mut surface, Point::new(128, 128), 20));
    });
}

fn bench_strokes(c: &mut Criterion) {
    let mut surface = Surface::new(512, 512, Color32::WHITE);
    c.bench_function("brush_segment_r20", |b| {
        b.iter(|| {
            stroke_segment(
                &mut surface,
                Point::new(40, 40),
                Point::new(470, 300),
                20,
                Color32::BLACK,
            )
        });
    });

    let star = [
        Point::new(256, 20),
        Point::new(320, 480),
        Point::new(20, 180),
        Point::new(490, 180),
        Point::new(190, 480),
    ];
    c.bench_function("fill_polygon_star", |b| {
        b.iter(|| fill_polygon(&mut surface, &star, Color32::BLUE));
    });
}

criterion_group!(benches, bench_flood_fill, bench_blur, bench_strokes);
criterion_main!(benches);
