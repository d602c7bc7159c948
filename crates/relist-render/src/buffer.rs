#![forbid(unsafe_code)]

//! Fixed-size cell grid with clipping.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height` at all times.
//! 2. Writes outside the buffer or outside the top scissor rectangle are
//!    silently dropped.
//! 3. The scissor stack only narrows: each pushed rectangle is intersected
//!    with the current top.

use relist_core::geometry::Rect;

use crate::cell::{Cell, CellContent};

/// A grid of cells that widgets render into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    scissor: Vec<Rect>,
}

impl Buffer {
    /// Create a buffer of empty cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let len = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            scissor: Vec::new(),
        }
    }

    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area.
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Current clip rectangle.
    #[must_use]
    pub fn clip(&self) -> Rect {
        self.scissor.last().copied().unwrap_or_else(|| self.area())
    }

    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Mutable access, honouring the scissor.
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if !self.clip().contains(x, y) {
            return None;
        }
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Write a cell. Writes outside the clip are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Write a wide cell spanning `width` columns; trailing columns become
    /// continuations. Dropped entirely if any column is clipped.
    pub fn set_wide(&mut self, x: u16, y: u16, cell: Cell, width: u16) {
        let clip = self.clip();
        let last = x.saturating_add(width.max(1) - 1);
        if !clip.contains(x, y) || !clip.contains(last, y) {
            return;
        }
        let (fg, bg, attrs) = (cell.fg, cell.bg, cell.attrs);
        self.set(x, y, cell);
        for dx in 1..width {
            self.set(
                x + dx,
                y,
                Cell {
                    content: CellContent::Continuation,
                    fg,
                    bg,
                    attrs,
                },
            );
        }
    }

    /// Fill `area` (clipped) with copies of `cell`.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let area = area.intersection(&self.clip());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set(x, y, cell.clone());
            }
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Narrow the clip rectangle. Pair with [`Buffer::pop_scissor`].
    pub fn push_scissor(&mut self, rect: Rect) {
        let narrowed = rect.intersection(&self.clip());
        self.scissor.push(narrowed);
    }

    pub fn pop_scissor(&mut self) {
        self.scissor.pop();
    }

    /// Text of row `y` with trailing spaces trimmed.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        if y >= self.height {
            return out;
        }
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                cell.push_text(&mut out);
            }
        }
        out.truncate(out.trim_end().len());
        out
    }

    /// Every row joined by `\n`, trailing spaces trimmed per row.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
