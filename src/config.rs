use std::path::PathBuf;

use eframe::egui::Color32;

/// Startup settings. Everything here is data; none of it changes at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub background: Color32,
    pub draw_color: Color32,
    /// Directory holding `<stamp>.png` files.
    pub asset_dir: PathBuf,
    /// Pixel height of text placed by the text tool.
    pub text_size: f32,
    /// Image composited onto the canvas at startup.
    pub open: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 750,
            canvas_height: 550,
            background: Color32::WHITE,
            draw_color: Color32::BLACK,
            asset_dir: PathBuf::from("images"),
            text_size: 20.0,
            open: None,
        }
    }
}

impl EditorConfig {
    pub fn from_env() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    /// Apply `--assets <dir>` and `--open <path>` (or their `=` forms) on top of
    /// the defaults. Anything else is ignored.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--assets" => {
                    if let Some(next) = args.next() {
                        config.asset_dir = PathBuf::from(next);
                    }
                }
                "--open" => {
                    if let Some(next) = args.next() {
                        config.open = Some(PathBuf::from(next));
                    }
                }
                other => {
                    if let Some(dir) = other.strip_prefix("--assets=") {
                        config.asset_dir = PathBuf::from(dir);
                    } else if let Some(path) = other.strip_prefix("--open=") {
                        config.open = Some(PathBuf::from(path));
                    } else {
                        log::debug!("ignoring argument {other}");
                    }
                }
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_match_the_classic_canvas() {
        let c = EditorConfig::from_args(Vec::new());
        assert_eq!((c.canvas_width, c.canvas_height), (750, 550));
        assert_eq!(c.background, Color32::WHITE);
        assert_eq!(c.asset_dir, PathBuf::from("images"));
        assert!(c.open.is_none());
    }

    #[test]
    fn both_flag_forms_are_accepted() {
        let c = EditorConfig::from_args(args(&["--assets", "art", "--open=pic.png", "--bogus"]));
        assert_eq!(c.asset_dir, PathBuf::from("art"));
        assert_eq!(c.open, Some(PathBuf::from("pic.png")));

        let c = EditorConfig::from_args(args(&["--assets=x", "--open", "y.bmp"]));
        assert_eq!(c.asset_dir, PathBuf::from("x"));
        assert_eq!(c.open, Some(PathBuf::from("y.bmp")));
    }

    #[test]
    fn dangling_flag_keeps_default() {
        let c = EditorConfig::from_args(args(&["--assets"]));
        assert_eq!(c.asset_dir, PathBuf::from("images"));
    }
}
