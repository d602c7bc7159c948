#![forbid(unsafe_code)]

//! Cell contents, colours and attribute flags.

use bitflags::bitflags;

/// A 32-bit RGBA colour.
///
/// Alpha 0 means "unset": the terminal default colour is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PackedRgba(u32);

impl PackedRgba {
    /// Terminal default (fully transparent).
    pub const TRANSPARENT: Self = Self(0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }
}

bitflags! {
    /// Text attributes applied to a cell.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSED  = 0b0001_0000;
    }
}

/// What a cell displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CellContent {
    /// Nothing drawn; renders as a space.
    #[default]
    Empty,
    /// A single-codepoint grapheme.
    Char(char),
    /// A multi-codepoint grapheme cluster.
    Grapheme(Box<str>),
    /// Trailing half of a wide grapheme drawn in the cell to the left.
    Continuation,
}

impl CellContent {
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// One terminal cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub content: CellContent,
    pub fg: PackedRgba,
    pub bg: PackedRgba,
    pub attrs: StyleFlags,
}

impl Cell {
    #[must_use]
    pub fn new(content: CellContent) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self::new(CellContent::Char(c))
    }

    /// Whether nothing has been drawn here.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.content, CellContent::Empty)
    }

    /// Append this cell's visible text to `out`.
    pub(crate) fn push_text(&self, out: &mut String) {
        match &self.content {
            CellContent::Empty => out.push(' '),
            CellContent::Char(c) => out.push(*c),
            CellContent::Grapheme(g) => out.push_str(g),
            CellContent::Continuation => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_channels_roundtrip() {
        let c = PackedRgba::rgba(1, 2, 3, 4);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1, 2, 3, 4));
    }

    #[test]
    fn default_cell_is_empty() {
        assert!(Cell::default().is_empty());
        assert!(!Cell::from_char('x').is_empty());
    }

    #[test]
    fn continuation_contributes_no_text() {
        let mut out = String::new();
        Cell::new(CellContent::Continuation).push_text(&mut out);
        Cell::new(CellContent::Grapheme("e\u{301}".into())).push_text(&mut out);
        assert_eq!(out, "e\u{301}");
    }
}
