#![forbid(unsafe_code)]

//! Drag-and-drop gesture tracking for reorderable collections.
//!
//! [`DragTracker`] turns a press / motion / release sequence over indexed
//! slots into a single [`DragDrop`] describing where the dragged element came
//! from and where it was released. It knows nothing about the collection
//! itself; callers map pointer positions to slot indices.
//!
//! # Invariants
//!
//! 1. At most one drag is active at a time; `begin` while dragging restarts.
//! 2. `release` always returns the tracker to idle.
//! 3. A release outside every slot (`None`) yields no drop.
//!
//! # Example
//!
//! ```
//! use relist_core::drag::{DragDrop, DragTracker};
//!
//! let mut drag = DragTracker::new();
//! drag.begin(0);
//! drag.hover(Some(2));
//! assert_eq!(
//!     drag.release(Some(2)),
//!     Some(DragDrop { previous_index: 0, current_index: 2 })
//! );
//! assert!(!drag.is_dragging());
//! ```

/// A completed drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragDrop {
    /// Slot the element was picked up from.
    pub previous_index: usize,
    /// Slot the element was released over.
    pub current_index: usize,
}

impl DragDrop {
    #[must_use]
    pub const fn new(previous_index: usize, current_index: usize) -> Self {
        Self {
            previous_index,
            current_index,
        }
    }

    /// Whether the element was released where it started.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.previous_index == self.current_index
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Idle,
    Dragging {
        from: usize,
        over: Option<usize>,
    },
}

/// Press/motion/release state machine for a single drag gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragTracker {
    phase: Phase,
}

impl DragTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Pick up the element in slot `index`.
    pub fn begin(&mut self, index: usize) {
        #[cfg(feature = "tracing")]
        tracing::trace!(index, "drag begin");
        self.phase = Phase::Dragging {
            from: index,
            over: Some(index),
        };
    }

    /// Update the slot under the pointer. Ignored when idle.
    pub fn hover(&mut self, slot: Option<usize>) {
        if let Phase::Dragging { over, .. } = &mut self.phase {
            *over = slot;
        }
    }

    /// Finish the gesture over `slot`, returning the drop if it landed on one.
    pub fn release(&mut self, slot: Option<usize>) -> Option<DragDrop> {
        let phase = std::mem::take(&mut self.phase);
        match (phase, slot) {
            (Phase::Dragging { from, .. }, Some(to)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(from, to, "drag release");
                Some(DragDrop::new(from, to))
            }
            _ => None,
        }
    }

    /// Abandon the gesture without producing a drop.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Slot the current drag started from.
    #[must_use]
    pub const fn source(&self) -> Option<usize> {
        match self.phase {
            Phase::Dragging { from, .. } => Some(from),
            Phase::Idle => None,
        }
    }

    /// Slot currently under the pointer while dragging.
    #[must_use]
    pub const fn target(&self) -> Option<usize> {
        match self.phase {
            Phase::Dragging { over, .. } => over,
            Phase::Idle => None,
        }
    }
}
