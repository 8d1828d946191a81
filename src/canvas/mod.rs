pub mod history;
pub mod surface;

pub use history::History;
pub use surface::{Surface, alpha_over};
