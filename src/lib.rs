pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod raster;
pub mod selection;
pub mod styling;
pub mod tools;
pub mod ui;
pub mod utils;

pub use app::{EditorSession, FrameInput, PainterApp};
pub use canvas::{History, Surface};
pub use config::EditorConfig;
pub use error::{EditorError, Result};
pub use tools::{KeyInput, ToolKind};
