#![forbid(unsafe_code)]

//! Panel widget: border + optional title + inner padding + child content.
//!
//! Wraps either a [`Widget`] or a [`StatefulWidget`]; the child is rendered
//! into the inner area with the buffer clipped to it.

use std::borrow::Cow;

use bitflags::bitflags;
use relist_core::geometry::{Rect, Sides};
use relist_render::buffer::Buffer;
use relist_render::cell::Cell;
use relist_style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::{ScissorGuard, StatefulWidget, Widget, draw_text_span, set_style_area};

bitflags! {
    /// Which edges of a panel get a border.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Borders: u8 {
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
        const ALL    = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BorderType {
    #[default]
    Square,
    Rounded,
    Double,
    Ascii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BorderSet {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl BorderType {
    const fn border_set(self) -> BorderSet {
        let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) = match self {
            Self::Square => ('┌', '┐', '└', '┘', '─', '│'),
            Self::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
            Self::Double => ('╔', '╗', '╚', '╝', '═', '║'),
            Self::Ascii => ('+', '+', '+', '+', '-', '|'),
        };
        BorderSet {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }
}

/// Horizontal placement of the title within the top border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A bordered container that renders a child inside an inner padded area.
#[derive(Debug, Clone)]
pub struct Panel<'a, W> {
    child: W,
    borders: Borders,
    border_style: Style,
    border_type: BorderType,
    title: Option<&'a str>,
    title_alignment: Alignment,
    title_style: Style,
    style: Style,
    padding: Sides,
}

impl<'a, W> Panel<'a, W> {
    pub fn new(child: W) -> Self {
        Self {
            child,
            borders: Borders::ALL,
            border_style: Style::default(),
            border_type: BorderType::Square,
            title: None,
            title_alignment: Alignment::Left,
            title_style: Style::default(),
            style: Style::default(),
            padding: Sides::default(),
        }
    }

    /// Set which borders to draw.
    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn title_alignment(mut self, alignment: Alignment) -> Self {
        self.title_alignment = alignment;
        self
    }

    #[must_use]
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = padding.into();
        self
    }

    /// The wrapped child.
    pub fn child(&self) -> &W {
        &self.child
    }

    /// Area handed to the child: inside the borders, minus padding.
    #[must_use]
    pub fn inner(&self, area: Rect) -> Rect {
        let edge = |flag: Borders| u16::from(self.borders.contains(flag));
        area.inner(Sides::new(
            edge(Borders::TOP),
            edge(Borders::RIGHT),
            edge(Borders::BOTTOM),
            edge(Borders::LEFT),
        ))
        .inner(self.padding)
    }

    fn border_cell(&self, c: char) -> Cell {
        let mut cell = Cell::from_char(c);
        self.border_style.apply_to(&mut cell);
        cell
    }

    fn render_borders(&self, area: Rect, buf: &mut Buffer) {
        let set = self.border_type.border_set();
        let (right, bottom) = (area.right() - 1, area.bottom() - 1);

        if self.borders.contains(Borders::LEFT) {
            for y in area.y..area.bottom() {
                buf.set(area.x, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::RIGHT) {
            for y in area.y..area.bottom() {
                buf.set(right, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::TOP) {
            for x in area.x..area.right() {
                buf.set(x, area.y, self.border_cell(set.horizontal));
            }
        }
        if self.borders.contains(Borders::BOTTOM) {
            for x in area.x..area.right() {
                buf.set(x, bottom, self.border_cell(set.horizontal));
            }
        }

        // Corners after edges.
        let corners = [
            (Borders::LEFT | Borders::TOP, area.x, area.y, set.top_left),
            (Borders::RIGHT | Borders::TOP, right, area.y, set.top_right),
            (Borders::LEFT | Borders::BOTTOM, area.x, bottom, set.bottom_left),
            (Borders::RIGHT | Borders::BOTTOM, right, bottom, set.bottom_right),
        ];
        for (needed, x, y, c) in corners {
            if self.borders.contains(needed) {
                buf.set(x, y, self.border_cell(c));
            }
        }
    }

    fn ellipsize(s: &str, max_width: usize) -> Cow<'_, str> {
        if UnicodeWidthStr::width(s) <= max_width {
            return Cow::Borrowed(s);
        }
        match max_width {
            0 => return Cow::Borrowed(""),
            1 => return Cow::Borrowed("…"),
            _ => {}
        }

        let mut out = String::new();
        let mut used = 0usize;
        for g in s.graphemes(true) {
            let w = UnicodeWidthStr::width(g);
            if used + w > max_width - 1 {
                break;
            }
            out.push_str(g);
            used += w;
        }
        out.push('…');
        Cow::Owned(out)
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer, title: &str) {
        if area.width < 2 {
            return;
        }
        let available = usize::from(area.width - 2);
        let text = Self::ellipsize(title, available);
        let width = UnicodeWidthStr::width(text.as_ref()).min(available);
        let slack = u16::try_from(available - width).unwrap_or(0);

        let x = match self.title_alignment {
            Alignment::Left => area.x + 1,
            Alignment::Center => area.x + 1 + slack / 2,
            Alignment::Right => area.x + 1 + slack,
        };
        let style = self.title_style.merge(&self.border_style);
        draw_text_span(buf, x, area.y, text.as_ref(), style, area.right() - 1);
    }

    /// Draw everything but the child. Returns the child's area, if any.
    fn render_frame(&self, area: Rect, buf: &mut Buffer) -> Option<Rect> {
        if area.is_empty() {
            return None;
        }
        set_style_area(buf, area, self.style);
        self.render_borders(area, buf);
        if self.borders.contains(Borders::TOP)
            && let Some(title) = self.title
        {
            self.render_title(area, buf, title);
        }
        let content = self.inner(area);
        (!content.is_empty()).then_some(content)
    }
}

impl<W: Widget> Widget for Panel<'_, W> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Panel",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if let Some(content) = self.render_frame(area, buf) {
            let mut clipped = ScissorGuard::new(buf, content);
            self.child.render(content, &mut clipped);
        }
    }
}

impl<W: StatefulWidget> StatefulWidget for Panel<'_, W> {
    type State = W::State;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Panel",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if let Some(content) = self.render_frame(area, buf) {
            let mut clipped = ScissorGuard::new(buf, content);
            self.child.render(content, &mut clipped, state);
        }
    }
}
