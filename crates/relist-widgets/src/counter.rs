#![forbid(unsafe_code)]

//! Counter control: a value with an increment button.
//!
//! Renders as `[+] 4`. Activating the button (click, `Enter`, `Space` or `+`)
//! publishes `value + 1`.
//!
//! A counter either owns a handle to an [`Observable<i64>`] (two-way bound
//! to host state) or is *detached*: it shows a fixed value and reports the
//! incremented value through a callback. Detached counters are what item
//! templates embed, writing back through the row's `item_change`.

use std::fmt;
use std::rc::Rc;

use relist_core::event::{Event, KeyCode, MouseButton, MouseEventKind};
use relist_core::geometry::Rect;
use relist_render::buffer::Buffer;
use relist_runtime::Observable;
use relist_style::Style;

use crate::{Widget, display_width, draw_text_span};

enum Source {
    Bound(Observable<i64>),
    Detached {
        value: i64,
        on_change: Rc<dyn Fn(i64)>,
    },
}

/// Single-integer counter with an increment button.
pub struct Counter {
    source: Source,
    button: &'static str,
    style: Style,
    button_style: Style,
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("value", &self.value())
            .field("bound", &matches!(self.source, Source::Bound(_)))
            .finish()
    }
}

impl Counter {
    /// Counter bound to host state.
    #[must_use]
    pub fn new(count: Observable<i64>) -> Self {
        Self::with_source(Source::Bound(count))
    }

    /// Counter showing `value` that reports increments to `on_change`.
    #[must_use]
    pub fn detached(value: i64, on_change: Rc<dyn Fn(i64)>) -> Self {
        Self::with_source(Source::Detached { value, on_change })
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            button: "[+]",
            style: Style::default(),
            button_style: Style::new().bold(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn button_style(mut self, style: Style) -> Self {
        self.button_style = style;
        self
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> i64 {
        match &self.source {
            Source::Bound(count) => count.get(),
            Source::Detached { value, .. } => *value,
        }
    }

    /// Publish `value + 1` and return it.
    ///
    /// # Overflow
    ///
    /// Saturates at `i64::MAX`. At the limit the published value equals the
    /// current one, so a bound counter's cell does not change and no
    /// subscriber is notified.
    pub fn increment(&self) -> i64 {
        let next = self.value().saturating_add(1);
        match &self.source {
            Source::Bound(count) => {
                count.set(next);
            }
            Source::Detached { on_change, .. } => on_change(next),
        }
        tracing::trace!(value = next, "counter incremented");
        next
    }

    /// Area occupied by the increment button within `area`.
    #[must_use]
    pub fn button_area(&self, area: Rect) -> Rect {
        let (button, _) = area.row_band(0, 1).split_left(display_width(self.button));
        button
    }

    /// Handle input aimed at this counter. Returns whether it was consumed.
    pub fn handle_event(&self, event: &Event, area: Rect) -> bool {
        match event {
            Event::Key(key)
                if key.modifiers.is_empty()
                    && matches!(
                        key.code,
                        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('+')
                    ) =>
            {
                self.increment();
                true
            }
            Event::Mouse(mouse)
                if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && self.button_area(area).contains(mouse.x, mouse.y) =>
            {
                self.increment();
                true
            }
            _ => false,
        }
    }
}

impl Widget for Counter {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Counter",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        let max_x = area.right();
        let x = draw_text_span(buf, area.x, area.y, self.button, self.button_style, max_x);
        let x = draw_text_span(buf, x, area.y, " ", self.style, max_x);
        draw_text_span(buf, x, area.y, &self.value().to_string(), self.style, max_x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relist_core::event::MouseEvent;
    use std::cell::Cell;

    #[test]
    fn increment_publishes_value_plus_one() {
        let count = Observable::new(4);
        let counter = Counter::new(count.clone());
        assert_eq!(counter.increment(), 5);
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn increment_saturates() {
        let count = Observable::new(i64::MAX);
        let notified = Rc::new(Cell::new(0));
        let n = Rc::clone(&notified);
        let _sub = count.subscribe(move |_| n.set(n.get() + 1));

        assert_eq!(Counter::new(count.clone()).increment(), i64::MAX);
        assert_eq!(count.get(), i64::MAX);
        assert_eq!(count.version(), 0);
        assert_eq!(notified.get(), 0);
    }

    #[test]
    fn detached_reports_through_callback() {
        let seen = Rc::new(Cell::new(0));
        let s = Rc::clone(&seen);
        let counter = Counter::detached(41, Rc::new(move |v| s.set(v)));
        counter.increment();
        assert_eq!(seen.get(), 42);
        assert_eq!(counter.value(), 41);
    }

    #[test]
    fn renders_button_and_value() {
        let counter = Counter::new(Observable::new(12));
        let mut buf = Buffer::new(10, 1);
        counter.render(Rect::new(0, 0, 10, 1), &mut buf);
        assert_eq!(buf.row_text(0), "[+] 12");
    }

    #[test]
    fn click_on_button_increments() {
        let count = Observable::new(0);
        let counter = Counter::new(count.clone());
        let area = Rect::new(2, 1, 10, 1);
        assert!(counter.handle_event(&MouseEvent::press(3, 1).into(), area));
        assert!(!counter.handle_event(&MouseEvent::press(8, 1).into(), area));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn keys_increment() {
        let count = Observable::new(0);
        let counter = Counter::new(count.clone());
        let area = Rect::new(0, 0, 10, 1);
        assert!(counter.handle_event(&Event::key(KeyCode::Enter), area));
        assert!(counter.handle_event(&Event::key(KeyCode::Char(' ')), area));
        assert!(!counter.handle_event(&Event::key(KeyCode::Char('x')), area));
        assert!(!counter.handle_event(&Event::alt_key(KeyCode::Enter), area));
        assert_eq!(count.get(), 2);
    }
}
