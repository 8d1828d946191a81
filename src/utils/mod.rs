pub mod codec;
pub mod color;
pub mod geometry;
pub mod glyphs;
pub mod profiler;
