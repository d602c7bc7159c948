#![forbid(unsafe_code)]

//! Errors raised by list editing operations.

use std::fmt;

/// The editing operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    Remove,
    MoveUp,
    MoveDown,
    Reorder,
    Update,
}

impl EditOp {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Remove => "remove",
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::Reorder => "reorder",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from [`ListEditor`](crate::list_editor::ListEditor) operations.
///
/// A failed operation publishes nothing; the bound list is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEditError {
    /// An index was outside `[0, len)`.
    IndexOutOfRange { op: EditOp, index: usize, len: usize },
}

impl fmt::Display for ListEditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { op, index, len } => {
                write!(f, "{op}: index {index} out of range for list of length {len}")
            }
        }
    }
}

impl std::error::Error for ListEditError {}
