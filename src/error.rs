use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the editor's external collaborators.
///
/// Out-of-bounds pixel access and degenerate geometry are not errors: the
/// raster primitives skip or clamp those cases silently.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("could not decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not encode image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not load asset {name}: {source}")]
    Asset {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("no usable font: {0}")]
    Font(String),
}

pub type Result<T> = std::result::Result<T, EditorError>;
