#![forbid(unsafe_code)]

//! Widgets for relist: a reorderable list editor and a counter control.

pub mod counter;
pub mod error;
pub mod list_editor;
pub mod panel;

pub use counter::Counter;
pub use error::{EditOp, ListEditError};
pub use list_editor::{
    CounterTemplate, DisplayTemplate, EditableItem, EventOutcome, FnTemplate, Glyphs,
    ItemTemplate, ListEditor, ListEditorConfig, ListEditorState, template_fn,
};
pub use panel::{Alignment, BorderType, Borders, Panel};

use std::ops::{Deref, DerefMut};

use relist_core::geometry::Rect;
use relist_render::buffer::Buffer;
use relist_render::cell::{Cell, CellContent};
use relist_style::Style;

/// A `Widget` is a renderable component.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A `StatefulWidget` renders based on, and may update, external state.
pub trait StatefulWidget {
    type State;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}

impl<W: Widget + ?Sized> Widget for &W {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        (**self).render(area, buf);
    }
}

impl<W: StatefulWidget + ?Sized> StatefulWidget for &W {
    type State = W::State;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        (**self).render(area, buf, state);
    }
}

/// Narrows the buffer clip for the guard's lifetime.
pub(crate) struct ScissorGuard<'a> {
    buf: &'a mut Buffer,
}

impl<'a> ScissorGuard<'a> {
    pub(crate) fn new(buf: &'a mut Buffer, rect: Rect) -> Self {
        buf.push_scissor(rect);
        Self { buf }
    }
}

impl Deref for ScissorGuard<'_> {
    type Target = Buffer;

    fn deref(&self) -> &Buffer {
        self.buf
    }
}

impl DerefMut for ScissorGuard<'_> {
    fn deref_mut(&mut self) -> &mut Buffer {
        self.buf
    }
}

impl Drop for ScissorGuard<'_> {
    fn drop(&mut self) {
        self.buf.pop_scissor();
    }
}

/// Apply a style to all cells in a rectangular area, preserving content.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                style.apply_to(cell);
            }
        }
    }
}

/// Draw a text span starting at `(x, y)`.
///
/// Returns the x position after the last drawn grapheme. Stops before
/// `max_x` (exclusive); a wide grapheme that would straddle `max_x` is not
/// drawn.
pub fn draw_text_span(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    use unicode_segmentation::UnicodeSegmentation;
    use unicode_width::UnicodeWidthStr;

    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        let w = u16::try_from(w).unwrap_or(u16::MAX);
        if x.saturating_add(w) > max_x {
            break;
        }

        let mut chars = grapheme.chars();
        let content = match (chars.next(), chars.next()) {
            (Some(c), None) => CellContent::Char(c),
            _ => CellContent::Grapheme(grapheme.into()),
        };
        let mut cell = Cell::new(content);
        style.apply_to(&mut cell);
        buf.set_wide(x, y, cell, w);

        x = x.saturating_add(w);
    }
    x
}

/// Display width of `text` in cells.
#[must_use]
pub fn display_width(text: &str) -> u16 {
    let w = unicode_width::UnicodeWidthStr::width(text);
    u16::try_from(w).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relist_render::cell::{PackedRgba, StyleFlags};

    #[test]
    fn set_style_area_applies_to_all_cells() {
        let mut buf = Buffer::new(3, 2);
        let style = Style::new().bg(PackedRgba::rgb(10, 20, 30));
        set_style_area(&mut buf, Rect::new(0, 0, 3, 2), style);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(
                    buf.get(x, y).map(|c| c.bg),
                    Some(PackedRgba::rgb(10, 20, 30)),
                    "cell ({x},{y}) should have style applied"
                );
            }
        }
    }

    #[test]
    fn set_style_area_preserves_content() {
        let mut buf = Buffer::new(2, 1);
        buf.set(0, 0, Cell::from_char('A'));
        set_style_area(&mut buf, Rect::new(0, 0, 2, 1), Style::new().bold());
        let cell = buf.get(0, 0).unwrap();
        assert_eq!(cell.content.as_char(), Some('A'));
        assert!(cell.attrs.contains(StyleFlags::BOLD));
    }

    #[test]
    fn draw_text_span_basic() {
        let mut buf = Buffer::new(10, 1);
        let end_x = draw_text_span(&mut buf, 0, 0, "ABC", Style::default(), 10);
        assert_eq!(end_x, 3);
        assert_eq!(buf.row_text(0), "ABC");
    }

    #[test]
    fn draw_text_span_clipped_at_max_x() {
        let mut buf = Buffer::new(10, 1);
        let end_x = draw_text_span(&mut buf, 0, 0, "ABCDEF", Style::default(), 3);
        assert_eq!(end_x, 3);
        assert_eq!(buf.row_text(0), "ABC");
    }

    #[test]
    fn draw_text_span_wide_grapheme_does_not_straddle() {
        let mut buf = Buffer::new(4, 1);
        let end_x = draw_text_span(&mut buf, 0, 0, "a界", Style::default(), 2);
        assert_eq!(end_x, 1);
        assert_eq!(buf.row_text(0), "a");
    }

    #[test]
    fn draw_text_span_starts_at_offset() {
        let mut buf = Buffer::new(10, 1);
        let end_x = draw_text_span(&mut buf, 5, 0, "XY", Style::default(), 10);
        assert_eq!(end_x, 7);
        assert!(buf.get(4, 0).unwrap().is_empty());
        assert_eq!(buf.get(5, 0).unwrap().content.as_char(), Some('X'));
    }

    #[test]
    fn scissor_guard_restores_clip() {
        let mut buf = Buffer::new(4, 1);
        {
            let mut clipped = ScissorGuard::new(&mut buf, Rect::new(1, 0, 2, 1));
            draw_text_span(&mut clipped, 0, 0, "ABCD", Style::default(), 4);
        }
        assert_eq!(buf.row_text(0), " BC");
        buf.set(0, 0, Cell::from_char('Z'));
        assert_eq!(buf.row_text(0), "ZBC");
    }

    #[test]
    fn display_width_counts_cells() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("界"), 2);
    }
}
