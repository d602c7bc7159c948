#![forbid(unsafe_code)]

//! Per-item rendering templates.

use std::fmt::Display;

use relist_core::event::Event;
use relist_core::geometry::Rect;
use relist_render::buffer::Buffer;
use relist_style::Style;

use super::EditableItem;
use crate::counter::Counter;
use crate::{Widget, draw_text_span};

/// Renders (and optionally edits) a single list element.
///
/// The editor clips rendering to `area`. A template that edits its element
/// in place writes the new value back with [`EditableItem::item_change`].
pub trait ItemTemplate<T> {
    fn render(&self, item: &EditableItem<T>, area: Rect, buf: &mut Buffer);

    /// Handle input routed to this row. Returns whether it was consumed.
    fn handle_event(&self, _item: &EditableItem<T>, _event: &Event, _area: Rect) -> bool {
        false
    }

    /// Rows needed by `item`. Must be at least 1.
    fn height(&self, _item: &T) -> u16 {
        1
    }
}

/// Template backed by a render closure. See [`template_fn`].
pub struct FnTemplate<F> {
    render: F,
}

/// Build a render-only template from a closure.
pub fn template_fn<T, F>(render: F) -> FnTemplate<F>
where
    F: Fn(&EditableItem<T>, Rect, &mut Buffer),
{
    FnTemplate { render }
}

impl<T, F> ItemTemplate<T> for FnTemplate<F>
where
    F: Fn(&EditableItem<T>, Rect, &mut Buffer),
{
    fn render(&self, item: &EditableItem<T>, area: Rect, buf: &mut Buffer) {
        (self.render)(item, area, buf);
    }
}

/// Renders the element's `Display` form. Read-only.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayTemplate {
    style: Style,
}

impl DisplayTemplate {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: Style::new(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<T: Display> ItemTemplate<T> for DisplayTemplate {
    fn render(&self, item: &EditableItem<T>, area: Rect, buf: &mut Buffer) {
        draw_text_span(
            buf,
            area.x,
            area.y,
            &item.item.to_string(),
            self.style,
            area.right(),
        );
    }
}

/// Embeds a [`Counter`] per element; increments are written back to the list.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterTemplate;

impl CounterTemplate {
    fn counter(item: &EditableItem<i64>) -> Counter {
        Counter::detached(item.item, item.change_callback())
    }
}

impl ItemTemplate<i64> for CounterTemplate {
    fn render(&self, item: &EditableItem<i64>, area: Rect, buf: &mut Buffer) {
        Self::counter(item).render(area, buf);
    }

    fn handle_event(&self, item: &EditableItem<i64>, event: &Event, area: Rect) -> bool {
        Self::counter(item).handle_event(event, area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relist_core::event::{KeyCode, MouseEvent};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn fn_template_renders_through_closure() {
        let template = template_fn(|item: &EditableItem<i32>, area: Rect, buf: &mut Buffer| {
            let text = format!("#{} {}", item.index, item.item);
            draw_text_span(buf, area.x, area.y, &text, Style::default(), area.right());
        });
        let item = EditableItem::new(7, 3, |_| {});
        let mut buf = Buffer::new(8, 1);
        template.render(&item, Rect::new(0, 0, 8, 1), &mut buf);
        assert_eq!(buf.row_text(0), "#3 7");
        assert!(!template.handle_event(&item, &Event::key(KeyCode::Enter), Rect::default()));
        assert_eq!(template.height(&7), 1);
    }

    #[test]
    fn display_template_clips_to_area() {
        let item = EditableItem::new(123_456, 0, |_| {});
        let mut buf = Buffer::new(8, 1);
        DisplayTemplate::new().render(&item, Rect::new(1, 0, 3, 1), &mut buf);
        assert_eq!(buf.row_text(0), " 123");
    }

    #[test]
    fn counter_template_writes_back_increment() {
        let written = Rc::new(Cell::new(None));
        let w = Rc::clone(&written);
        let item = EditableItem::new(4_i64, 0, move |v| w.set(Some(v)));
        let area = Rect::new(0, 0, 10, 1);

        let mut buf = Buffer::new(10, 1);
        CounterTemplate.render(&item, area, &mut buf);
        assert_eq!(buf.row_text(0), "[+] 4");

        assert!(CounterTemplate.handle_event(&item, &MouseEvent::press(1, 0).into(), area));
        assert_eq!(written.get(), Some(5));
    }
}
