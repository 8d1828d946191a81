use std::ffi::OsString;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use image::imageops::FilterType;

use crate::canvas::Surface;
use crate::error::{EditorError, Result};

/// Turns files into surfaces and back.
pub trait ImageCodec {
    fn decode(&self, path: &Path) -> Result<Surface>;
    fn encode(&self, surface: &Surface, path: &Path) -> Result<()>;
}

/// Native open/save dialogs. `None` means the user cancelled.
pub trait FileChooser {
    fn choose_open_path(&self) -> Option<PathBuf>;
    fn choose_save_path(&self) -> Option<PathBuf>;
}

/// Read-only images shipped with the application, such as stamps.
pub trait AssetLoader {
    /// Load `name` and scale it to exactly `size` pixels.
    fn load_static_image(&self, name: &str, size: [u32; 2]) -> Result<Surface>;
}

/// [`ImageCodec`] backed by the `image` crate. Saving always writes PNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateCodec;

impl ImageCodec for ImageCrateCodec {
    fn decode(&self, path: &Path) -> Result<Surface> {
        let img = image::open(path).map_err(|source| EditorError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Surface::from_rgba_image(&img.to_rgba8()))
    }

    fn encode(&self, surface: &Surface, path: &Path) -> Result<()> {
        surface
            .to_rgba_image()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| EditorError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NativeFileChooser;

impl FileChooser for NativeFileChooser {
    fn choose_open_path(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif"])
            .pick_file()
    }

    fn choose_save_path(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_file_name("canvas.png")
            .save_file()
    }
}

/// Assets looked up as `<root>/<name>.png`.
#[derive(Clone, Debug)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for DirectoryAssets {
    fn load_static_image(&self, name: &str, size: [u32; 2]) -> Result<Surface> {
        let path = self.root.join(format!("{name}.png"));
        let img = image::open(&path).map_err(|source| EditorError::Asset {
            name: name.to_string(),
            source,
        })?;
        let scaled = img.resize_exact(size[0], size[1], FilterType::Triangle);
        Ok(Surface::from_rgba_image(&scaled.to_rgba8()))
    }
}

/// Append `.png` unless the path already ends in it.
pub fn ensure_png_extension(path: PathBuf) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(current) if current.eq_ignore_ascii_case("png") => path,
        _ => {
            let mut name: OsString = path.into_os_string();
            name.push(".png");
            PathBuf::from(name)
        }
    }
}
