use celestial_paint::{EditorConfig, PainterApp};

/// Launch the native egui application.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = EditorConfig::from_env();
    log::info!(
        "starting with a {}x{} canvas, stamps from {}",
        config.canvas_width,
        config.canvas_height,
        config.asset_dir.display()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1250.0, 750.0])
            .with_min_inner_size([1200.0, 650.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Celestial Paint",
        options,
        Box::new(|cc| Ok(Box::new(PainterApp::new(cc, config)))),
    )
}
