#![forbid(unsafe_code)]

//! Unified text style.
//!
//! Every field is optional: `None` means "inherit". [`Style::merge`] layers a
//! child style over a parent, child fields winning where set.

use relist_render::cell::{Cell, PackedRgba, StyleFlags};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<PackedRgba>,
    pub bg: Option<PackedRgba>,
    pub attrs: Option<StyleFlags>,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags to this style.
    #[must_use]
    pub fn attrs(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default() | flags);
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.attrs(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.attrs(StyleFlags::DIM)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.attrs(StyleFlags::ITALIC)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.attrs(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        self.attrs(StyleFlags::REVERSED)
    }

    /// Whether no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Whether `flags` are all set on this style.
    #[must_use]
    pub fn has(&self, flags: StyleFlags) -> bool {
        self.attrs.is_some_and(|a| a.contains(flags))
    }

    /// Layer `self` over `parent`: set fields win, attrs are unioned.
    #[must_use]
    pub fn merge(&self, parent: &Style) -> Style {
        let attrs = match (self.attrs, parent.attrs) {
            (Some(a), Some(b)) => Some(a | b),
            (a, b) => a.or(b),
        };
        Style {
            fg: self.fg.or(parent.fg),
            bg: self.bg.or(parent.bg),
            attrs,
        }
    }

    /// Apply the set fields of this style to a cell, keeping its content.
    pub fn apply_to(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = self.attrs {
            cell.attrs |= attrs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(Style::default().is_empty());
        assert!(!Style::new().bold().is_empty());
    }

    #[test]
    fn attrs_accumulate() {
        let s = Style::new().bold().dim();
        assert!(s.has(StyleFlags::BOLD | StyleFlags::DIM));
        assert!(!s.has(StyleFlags::REVERSED));
    }

    #[test]
    fn merge_child_wins_and_unions_attrs() {
        let parent = Style::new().fg(PackedRgba::rgb(1, 1, 1)).bold();
        let child = Style::new().fg(PackedRgba::rgb(9, 9, 9)).dim();
        let merged = child.merge(&parent);
        assert_eq!(merged.fg, Some(PackedRgba::rgb(9, 9, 9)));
        assert!(merged.has(StyleFlags::BOLD | StyleFlags::DIM));
    }

    #[test]
    fn apply_preserves_content() {
        let mut cell = Cell::from_char('Z');
        Style::new().bg(PackedRgba::rgb(0, 255, 0)).reversed().apply_to(&mut cell);
        assert_eq!(cell.content.as_char(), Some('Z'));
        assert_eq!(cell.bg, PackedRgba::rgb(0, 255, 0));
        assert!(cell.attrs.contains(StyleFlags::REVERSED));
    }

    #[test]
    fn empty_apply_is_noop() {
        let mut cell = Cell::from_char('a');
        let before = cell.clone();
        Style::default().apply_to(&mut cell);
        assert_eq!(cell, before);
    }
}
