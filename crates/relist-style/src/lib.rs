#![forbid(unsafe_code)]

//! Style types for relist with CSS-like cascading semantics.

pub mod style;

pub use relist_render::cell::{PackedRgba, StyleFlags};
pub use style::Style;
