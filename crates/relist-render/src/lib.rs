#![forbid(unsafe_code)]

//! Render target for relist widgets.
//!
//! Widgets draw into a [`Buffer`](buffer::Buffer): a fixed-size grid of
//! [`Cell`](cell::Cell)s with a scissor stack for clipping child content.
//! [`Buffer::to_plain_text`](buffer::Buffer::to_plain_text) flattens a buffer
//! for snapshot tests and headless output.

pub mod buffer;
pub mod cell;

pub use buffer::Buffer;
pub use cell::{Cell, CellContent, PackedRgba, StyleFlags};
