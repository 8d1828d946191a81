use std::collections::HashMap;
use std::sync::Arc;

use crate::canvas::Surface;
use crate::tools::{ToolBehavior, ToolContext, ToolInput, ToolSignal};
use crate::utils::codec::AssetLoader;
use crate::utils::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StampKind {
    Earth,
    Moon,
    Sun,
    Stars,
    Astronaut,
    Shuttle,
    Comet,
    Asteroids,
    Galaxy,
    Satellite,
}

impl StampKind {
    pub const ALL: [StampKind; 10] = [
        StampKind::Earth,
        StampKind::Moon,
        StampKind::Sun,
        StampKind::Stars,
        StampKind::Astronaut,
        StampKind::Shuttle,
        StampKind::Comet,
        StampKind::Asteroids,
        StampKind::Galaxy,
        StampKind::Satellite,
    ];

    /// Asset name, without extension.
    pub fn asset_name(&self) -> &'static str {
        match self {
            StampKind::Earth => "earth",
            StampKind::Moon => "moon",
            StampKind::Sun => "sun",
            StampKind::Stars => "stars",
            StampKind::Astronaut => "astronaut",
            StampKind::Shuttle => "shuttle",
            StampKind::Comet => "comet",
            StampKind::Asteroids => "asteroids",
            StampKind::Galaxy => "galaxy",
            StampKind::Satellite => "satellite",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StampKind::Earth => "Earth Stamp",
            StampKind::Moon => "Moon Stamp",
            StampKind::Sun => "Sun Stamp",
            StampKind::Stars => "Stars Stamp",
            StampKind::Astronaut => "Astronaut Stamp",
            StampKind::Shuttle => "Shuttle Stamp",
            StampKind::Comet => "Comet Stamp",
            StampKind::Asteroids => "Asteroids Stamp",
            StampKind::Galaxy => "Galaxy Stamp",
            StampKind::Satellite => "Satellite Stamp",
        }
    }

    /// Size the stamp is drawn at, in canvas pixels.
    pub fn size(&self) -> [u32; 2] {
        match self {
            StampKind::Earth => [90, 90],
            StampKind::Moon => [60, 60],
            StampKind::Sun => [150, 150],
            StampKind::Stars => [100, 100],
            StampKind::Astronaut => [90, 130],
            StampKind::Shuttle => [160, 80],
            StampKind::Comet => [100, 100],
            StampKind::Asteroids => [50, 50],
            StampKind::Galaxy => [120, 120],
            StampKind::Satellite => [100, 60],
        }
    }
}

/// Stamp images, loaded once and shared with every stamp tool built afterwards.
#[derive(Clone, Default)]
pub struct StampLibrary {
    images: HashMap<StampKind, Arc<Surface>>,
}

impl StampLibrary {
    /// Load every stamp. Missing ones are logged and left out.
    pub fn load(assets: &dyn AssetLoader) -> Self {
        let mut images = HashMap::new();
        for kind in StampKind::ALL {
            match assets.load_static_image(kind.asset_name(), kind.size()) {
                Ok(surface) => {
                    images.insert(kind, Arc::new(surface));
                }
                Err(e) => log::warn!("stamp {} unavailable: {e}", kind.asset_name()),
            }
        }
        log::info!("loaded {} of {} stamps", images.len(), StampKind::ALL.len());
        Self { images }
    }

    pub fn insert(&mut self, kind: StampKind, surface: Surface) {
        self.images.insert(kind, Arc::new(surface));
    }

    pub fn get(&self, kind: StampKind) -> Option<Arc<Surface>> {
        self.images.get(&kind).cloned()
    }
}

/// Shows the stamp centred under the pointer while the button is held; the
/// position at release is the one that gets committed.
pub struct StampTool {
    image: Option<Arc<Surface>>,
}

impl StampTool {
    pub fn new(image: Option<Arc<Surface>>) -> Self {
        Self { image }
    }
}

impl ToolBehavior for StampTool {
    fn on_frame(&mut self, ctx: &mut ToolContext<'_>, input: &ToolInput) -> ToolSignal {
        let Some(image) = &self.image else {
            return ToolSignal::Continue;
        };
        if input.button_down {
            ctx.restore_baseline();
            let anchor = Point::new(image.width() as i32 / 2, image.height() as i32 / 2);
            ctx.canvas.blit(image, input.pointer - anchor);
        }
        ToolSignal::Continue
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::Color32;

    use super::*;
    use crate::tools::testing::*;

    #[test]
    fn dragging_a_stamp_leaves_one_copy() {
        let mut rig = Rig::new(100, 100);
        let mut tool = StampTool::new(Some(Arc::new(Surface::new(10, 6, Color32::RED))));
        let start = Point::new(20, 20);
        tool.on_frame(&mut rig.ctx(), &press(start));
        tool.on_frame(&mut rig.ctx(), &drag(start, start, Point::new(60, 60)));
        assert_eq!(rig.canvas.get(20, 20), Some(Color32::WHITE));
        assert_eq!(rig.canvas.get(55, 57), Some(Color32::RED));
        assert_eq!(rig.canvas.get(64, 62), Some(Color32::RED));
        assert_eq!(rig.canvas.get(65, 60), Some(Color32::WHITE));
    }

    #[test]
    fn missing_stamp_draws_nothing() {
        let mut rig = Rig::new(20, 20);
        let mut tool = StampTool::new(None);
        tool.on_frame(&mut rig.ctx(), &press(Point::new(10, 10)));
        assert_eq!(rig.canvas, rig.baseline);
    }
}
