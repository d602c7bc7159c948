#![forbid(unsafe_code)]

//! Core primitives for relist: geometry, input events, and drag gestures.

pub mod drag;
pub mod event;
pub mod geometry;

pub use drag::{DragDrop, DragTracker};
pub use event::{Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::{Rect, Sides};
