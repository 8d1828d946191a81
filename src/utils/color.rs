use eframe::egui::Color32;

/// Opaque colour from hue, saturation and value, all in 0..1. Hue wraps.
pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Color32 {
    let hue = hue.rem_euclid(1.0) * 6.0;
    let chroma = value.clamp(0.0, 1.0) * saturation.clamp(0.0, 1.0);
    let second = chroma * (1.0 - (hue % 2.0 - 1.0).abs());
    let base = value.clamp(0.0, 1.0) - chroma;

    let (r, g, b) = match hue as u32 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };
    let channel = |c: f32| ((c + base) * 255.0).round() as u8;
    Color32::from_rgb(channel(r), channel(g), channel(b))
}

/// Perceived brightness used to pick a contrasting preview color (mean of RGB).
pub fn channel_mean(c: Color32) -> u32 {
    (c.r() as u32 + c.g() as u32 + c.b() as u32) / 3
}

/// Mean channel value at or below which a colour counts as dark.
pub const DARK_THRESHOLD: u32 = 50;

/// White over dark colours, black over everything else.
pub fn contrast_color(under: Color32) -> Color32 {
    if channel_mean(under) <= DARK_THRESHOLD {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}

/// Palette swatches: a grayscale ramp followed by rows of hues at decreasing value.
pub fn default_palette() -> Vec<Color32> {
    const HUES: usize = 12;
    let mut swatches: Vec<Color32> = (0..HUES)
        .map(|i| {
            let v = (i as f32 / (HUES - 1) as f32 * 255.0).round() as u8;
            Color32::from_rgb(v, v, v)
        })
        .collect();

    for (s, v) in [(0.45, 1.0), (1.0, 1.0), (1.0, 0.7), (1.0, 0.4)] {
        for i in 0..HUES {
            let h = i as f32 / HUES as f32;
            swatches.push(from_hsv(h, s, v));
        }
    }
    swatches
}
