#![forbid(unsafe_code)]

//! Rendering, hit testing and input handling for [`ListEditor`].
//!
//! Each render lays out one row per visible element:
//!
//! ```text
//! ⠿ <template content......> ▲ ▼ ✕
//! ⠿ <template content......> ▲ ▼ ✕
//! [+ Add]
//! ```
//!
//! The arrows appear only with `display_arrows`; the add button only when a
//! new-item value is configured. The computed layout is stored in
//! [`ListEditorState`] so that mouse input can be mapped back to rows and
//! buttons. Input arriving before the first render only reaches keyboard
//! handling.

use relist_core::drag::DragTracker;
use relist_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use relist_core::geometry::Rect;
use relist_render::buffer::Buffer;

use super::{EditableItem, ListEditor};
use crate::error::ListEditError;
use crate::{ScissorGuard, StatefulWidget, display_width, draw_text_span, set_style_area};

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Not aimed at the editor.
    Ignored,
    /// Handled without publishing a new list (selection, drag motion, ...).
    Consumed,
    /// A new list was published.
    Changed,
}

impl EventOutcome {
    fn from_change(changed: bool) -> Self {
        if changed { Self::Changed } else { Self::Consumed }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowLayout {
    index: usize,
    row: Rect,
    handle: Rect,
    content: Rect,
    up: Option<Rect>,
    down: Option<Rect>,
    remove: Rect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Layout {
    area: Rect,
    rows: Vec<RowLayout>,
    add: Option<Rect>,
}

impl Layout {
    fn row(&self, index: usize) -> Option<&RowLayout> {
        self.rows.iter().find(|r| r.index == index)
    }

    fn row_at(&self, x: u16, y: u16) -> Option<&RowLayout> {
        self.rows.iter().find(|r| r.row.contains(x, y))
    }

    /// Drop slot under the pointer. Positions below the last row (but still
    /// inside the editor) map to the last row.
    fn slot_at(&self, x: u16, y: u16) -> Option<usize> {
        if !self.area.contains(x, y) {
            return None;
        }
        if let Some(row) = self.rows.iter().find(|r| y >= r.row.y && y < r.row.bottom()) {
            return Some(row.index);
        }
        self.rows
            .last()
            .filter(|last| y >= last.row.bottom())
            .map(|last| last.index)
    }
}

/// Render-time and interaction state of a [`ListEditor`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEditorState {
    selected: Option<usize>,
    offset: usize,
    drag: DragTracker,
    layout: Layout,
}

impl ListEditorState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select a row. Out-of-range selections are clamped on the next render.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    /// Index of the first visible row.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub const fn drag_source(&self) -> Option<usize> {
        self.drag.source()
    }

    #[must_use]
    pub const fn drag_target(&self) -> Option<usize> {
        self.drag.target()
    }

    /// Area of row `index` as of the last render, if it was visible.
    #[must_use]
    pub fn row_area(&self, index: usize) -> Option<Rect> {
        self.layout.row(index).map(|r| r.row)
    }

    /// Template area of row `index` as of the last render.
    #[must_use]
    pub fn content_area(&self, index: usize) -> Option<Rect> {
        self.layout.row(index).map(|r| r.content)
    }

    /// Area of the add button as of the last render.
    #[must_use]
    pub fn add_button_area(&self) -> Option<Rect> {
        self.layout.add
    }

    /// Rows visible in the last render.
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.layout.rows.len()
    }

    fn clamp_to(&mut self, len: usize) {
        self.selected = self.selected.filter(|_| len > 0).map(|s| s.min(len - 1));
        self.offset = self.offset.min(len.saturating_sub(1));
    }

    fn after_remove(&mut self, removed: usize, new_len: usize) {
        self.selected = match self.selected {
            _ if new_len == 0 => None,
            Some(s) if s > removed => Some(s - 1),
            Some(s) => Some(s.min(new_len - 1)),
            None => None,
        };
    }
}

impl<T: Clone + PartialEq + 'static> ListEditor<T> {
    fn handle_width(&self) -> u16 {
        display_width(self.config.glyphs.handle) + 1
    }

    fn controls_width(&self) -> u16 {
        let glyphs = &self.config.glyphs;
        let remove = 1 + display_width(glyphs.remove);
        if self.config.display_arrows {
            remove + 2 + display_width(glyphs.up) + display_width(glyphs.down)
        } else {
            remove
        }
    }

    fn layout_row(&self, index: usize, row: Rect) -> RowLayout {
        let glyphs = &self.config.glyphs;
        let (handle, rest) = row.split_left(self.handle_width());
        let (content, controls) = rest.split_right(self.controls_width());
        let cell = |x: u16, width: u16| Rect::new(x, controls.y, width, 1).intersection(&controls);

        let mut x = controls.x.saturating_add(1);
        let (up, down) = if self.config.display_arrows {
            let up = cell(x, display_width(glyphs.up));
            x = up.right().saturating_add(1);
            let down = cell(x, display_width(glyphs.down));
            x = down.right().saturating_add(1);
            (Some(up), Some(down))
        } else {
            (None, None)
        };
        let remove = cell(x, display_width(glyphs.remove));

        RowLayout {
            index,
            row,
            handle,
            content,
            up,
            down,
            remove,
        }
    }

    fn compute_layout(
        &self,
        area: Rect,
        items: &[EditableItem<T>],
        state: &mut ListEditorState,
    ) -> Layout {
        let mut list_area = area;
        let mut add = None;
        if self.new_item.is_some() && area.height > 0 {
            let band = area.row_band(area.height - 1, 1);
            add = Some(Rect::new(
                band.x,
                band.y,
                display_width(self.config.glyphs.add).min(band.width),
                1,
            ));
            list_area.height -= 1;
        }

        let len = items.len();
        state.clamp_to(len);

        let heights: Vec<u16> = items
            .iter()
            .map(|item| self.template.height(&item.item).max(1))
            .collect();

        if let Some(selected) = state.selected {
            if selected < state.offset {
                state.offset = selected;
            }
            let span = |from: usize| -> u32 {
                heights[from..=selected].iter().map(|&h| u32::from(h)).sum()
            };
            while state.offset < selected && span(state.offset) > u32::from(list_area.height) {
                state.offset += 1;
            }
        }

        // Pull the window back up while the tail still fits.
        let tail = |from: usize| -> u32 { heights[from..].iter().map(|&h| u32::from(h)).sum() };
        while state.offset > 0 && tail(state.offset - 1) <= u32::from(list_area.height) {
            state.offset -= 1;
        }

        let mut rows = Vec::new();
        let mut y = 0u16;
        for index in state.offset..len {
            if y >= list_area.height {
                break;
            }
            let row = list_area.row_band(y, heights[index]);
            rows.push(self.layout_row(index, row));
            y = y.saturating_add(heights[index]);
        }

        Layout { area, rows, add }
    }

    /// Route an input event to the editor.
    ///
    /// Mouse input is resolved against the layout of the last render.
    pub fn handle_event(
        &self,
        event: &Event,
        state: &mut ListEditorState,
    ) -> Result<EventOutcome, ListEditError> {
        match event {
            Event::Key(key) => self.handle_key(key, event, state),
            Event::Mouse(mouse) => self.handle_mouse(mouse, event, state),
            Event::Resize { .. } => Ok(EventOutcome::Ignored),
        }
    }

    fn handle_key(
        &self,
        key: &KeyEvent,
        event: &Event,
        state: &mut ListEditorState,
    ) -> Result<EventOutcome, ListEditError> {
        let len = self.len();
        let selected = state.selected.filter(|&s| s < len);

        let outcome = match (key.code, selected) {
            (KeyCode::Up, Some(i)) if key.alt() => {
                let changed = self.move_up(i)?;
                if changed {
                    state.selected = Some(i - 1);
                }
                EventOutcome::from_change(changed)
            }
            (KeyCode::Down, Some(i)) if key.alt() => {
                let changed = self.move_down(i)?;
                if changed {
                    state.selected = Some(i + 1);
                }
                EventOutcome::from_change(changed)
            }
            (KeyCode::Up | KeyCode::Down, None) if key.alt() => EventOutcome::Ignored,
            (KeyCode::Up | KeyCode::Down | KeyCode::Home | KeyCode::End, _) if len == 0 => {
                EventOutcome::Ignored
            }
            (KeyCode::Up, sel) => {
                state.selected = Some(sel.map_or(len - 1, |s| s.saturating_sub(1)));
                EventOutcome::Consumed
            }
            (KeyCode::Down, sel) => {
                state.selected = Some(sel.map_or(0, |s| (s + 1).min(len - 1)));
                EventOutcome::Consumed
            }
            (KeyCode::Home, _) => {
                state.selected = Some(0);
                EventOutcome::Consumed
            }
            (KeyCode::End, _) => {
                state.selected = Some(len - 1);
                EventOutcome::Consumed
            }
            (KeyCode::Delete, Some(i)) => {
                let changed = self.remove_at(i)?;
                state.after_remove(i, self.len());
                EventOutcome::from_change(changed)
            }
            (KeyCode::Insert | KeyCode::Char('+'), _) if self.new_item.is_some() => {
                self.add_and_select(state)
            }
            (KeyCode::Escape, _) if state.drag.is_dragging() => {
                state.drag.cancel();
                EventOutcome::Consumed
            }
            (_, Some(i)) => {
                let area = state.content_area(i).unwrap_or_default();
                self.forward_to_template(i, event, area)
            }
            (_, None) => EventOutcome::Ignored,
        };
        Ok(outcome)
    }

    fn handle_mouse(
        &self,
        mouse: &MouseEvent,
        event: &Event,
        state: &mut ListEditorState,
    ) -> Result<EventOutcome, ListEditError> {
        let (x, y) = (mouse.x, mouse.y);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if state.layout.add.is_some_and(|add| add.contains(x, y)) {
                    return Ok(self.add_and_select(state));
                }
                let Some(row) = state.layout.row_at(x, y).copied() else {
                    return Ok(EventOutcome::Ignored);
                };
                let i = row.index;

                if row.remove.contains(x, y) {
                    let changed = self.remove_at(i)?;
                    state.after_remove(i, self.len());
                    return Ok(EventOutcome::from_change(changed));
                }
                if row.up.is_some_and(|up| up.contains(x, y)) {
                    let changed = self.move_up(i)?;
                    state.selected = Some(if changed { i - 1 } else { i });
                    return Ok(EventOutcome::from_change(changed));
                }
                if row.down.is_some_and(|down| down.contains(x, y)) {
                    let changed = self.move_down(i)?;
                    state.selected = Some(if changed { i + 1 } else { i });
                    return Ok(EventOutcome::from_change(changed));
                }

                state.selected = Some(i);
                if row.handle.contains(x, y) {
                    state.drag.begin(i);
                    return Ok(EventOutcome::Consumed);
                }
                if row.content.contains(x, y) {
                    let outcome = self.forward_to_template(i, event, row.content);
                    if outcome != EventOutcome::Ignored {
                        return Ok(outcome);
                    }
                }
                Ok(EventOutcome::Consumed)
            }
            MouseEventKind::Drag(MouseButton::Left) if state.drag.is_dragging() => {
                let slot = state.layout.slot_at(x, y);
                state.drag.hover(slot);
                Ok(EventOutcome::Consumed)
            }
            MouseEventKind::Up(MouseButton::Left) if state.drag.is_dragging() => {
                let slot = state.layout.slot_at(x, y);
                match state.drag.release(slot) {
                    Some(drop) => {
                        let changed = self.drop(drop)?;
                        state.selected = Some(drop.current_index);
                        Ok(EventOutcome::from_change(changed))
                    }
                    None => Ok(EventOutcome::Consumed),
                }
            }
            _ => Ok(EventOutcome::Ignored),
        }
    }

    fn add_and_select(&self, state: &mut ListEditorState) -> EventOutcome {
        if !self.add_item() {
            return EventOutcome::Ignored;
        }
        state.selected = self.len().checked_sub(1);
        EventOutcome::Changed
    }

    fn forward_to_template(&self, index: usize, event: &Event, area: Rect) -> EventOutcome {
        let items = self.list_with_update();
        let Some(item) = items.get(index) else {
            return EventOutcome::Ignored;
        };
        let before = self.list.version();
        if !self.template.handle_event(item, event, area) {
            return EventOutcome::Ignored;
        }
        EventOutcome::from_change(self.list.version() != before)
    }
}

impl<T: Clone + PartialEq + 'static> StatefulWidget for ListEditor<T> {
    type State = ListEditorState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "ListEditor",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            state.clamp_to(self.len());
            state.layout = Layout::default();
            return;
        }

        set_style_area(buf, area, self.style);

        let items = self.list_with_update();
        let layout = self.compute_layout(area, &items, state);
        let glyphs = self.config.glyphs;
        let dragging = state.drag.source();

        for row in &layout.rows {
            let item = &items[row.index];
            let is_source = dragging == Some(row.index);
            let is_target =
                dragging.is_some() && !is_source && state.drag.target() == Some(row.index);

            let handle = if is_target { glyphs.drop_marker } else { glyphs.handle };
            draw_text_span(
                buf,
                row.handle.x,
                row.handle.y,
                handle,
                self.handle_style,
                row.handle.right(),
            );

            if !row.content.is_empty() {
                let mut clipped = ScissorGuard::new(buf, row.content);
                self.template.render(item, row.content, &mut clipped);
            }

            let controls = [
                (row.up, glyphs.up),
                (row.down, glyphs.down),
                (Some(row.remove), glyphs.remove),
            ];
            for (rect, glyph) in controls {
                if let Some(rect) = rect.filter(|r| !r.is_empty()) {
                    draw_text_span(buf, rect.x, rect.y, glyph, self.control_style, rect.right());
                }
            }

            if state.selected == Some(row.index) {
                set_style_area(buf, row.row, self.selected_style);
            }
            if is_source {
                set_style_area(buf, row.row, self.drag_style);
            }
        }

        if let Some(add) = layout.add {
            draw_text_span(buf, add.x, add.y, glyphs.add, self.control_style, add.right());
        }

        state.layout = layout;
    }
}
