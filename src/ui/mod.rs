//! egui panels around the canvas: tools, palette, stamps and actions.
pub mod color_picker;
pub mod stamp_panel;
pub mod tool_panel;
