#![forbid(unsafe_code)]

//! Test harness for relist widgets.
//!
//! - [`buffer_to_text`] renders a buffer as plain text; [`frame_digest`]
//!   fingerprints it, including styles.
//! - [`assert_buffer!`] compares a buffer against inline text.
//! - [`assert_snapshot!`] compares against `tests/snapshots/<name>.snap` in
//!   the calling crate. Run with `BLESS=1` to create or update snapshots.
//! - [`EditorHarness`] drives a [`ListEditor`] with scripted input,
//!   re-rendering after every event so mouse hit testing stays current.
//! - [`strategy`] holds proptest strategies and a reference model for
//!   editing scripts.

pub mod strategy;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use relist_core::event::{Event, KeyCode, MouseEvent};
use relist_core::geometry::Rect;
use relist_render::buffer::Buffer;
use relist_render::cell::CellContent;
use relist_widgets::{EventOutcome, ListEditError, ListEditor, ListEditorState, StatefulWidget, Widget};

/// Plain text of every row, trailing spaces trimmed.
#[must_use]
pub fn buffer_to_text(buf: &Buffer) -> String {
    buf.to_plain_text()
}

/// Short blake3 fingerprint of the buffer's content and styles.
#[must_use]
pub fn frame_digest(buf: &Buffer) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&buf.width().to_le_bytes());
    hasher.update(&buf.height().to_le_bytes());
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let Some(cell) = buf.get(x, y) else { continue };
            match &cell.content {
                CellContent::Empty => hasher.update(&[0]),
                CellContent::Char(c) => hasher.update(c.encode_utf8(&mut [0; 4]).as_bytes()),
                CellContent::Grapheme(g) => hasher.update(g.as_bytes()),
                CellContent::Continuation => hasher.update(&[1]),
            };
            for color in [cell.fg, cell.bg] {
                hasher.update(&[color.r(), color.g(), color.b(), color.a()]);
            }
            hasher.update(&[cell.attrs.bits()]);
        }
    }
    hasher.finalize().to_hex()[..16].to_string()
}

/// Render a widget into a fresh `width` x `height` buffer.
#[must_use]
pub fn render_widget(widget: &impl Widget, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::new(width, height);
    widget.render(Rect::from_size(width, height), &mut buf);
    buf
}

/// Trim trailing whitespace per line and drop trailing blank lines.
fn normalize(text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

fn diff_text(expected: &str, actual: &str) -> String {
    let expected: Vec<&str> = expected.lines().collect();
    let actual: Vec<&str> = actual.lines().collect();
    let mut out = String::new();
    for i in 0..expected.len().max(actual.len()) {
        let e = expected.get(i).copied().unwrap_or("");
        let a = actual.get(i).copied().unwrap_or("");
        if e == a {
            let _ = writeln!(out, "  {i:>3} |{a}");
        } else {
            let _ = writeln!(out, "- {i:>3} |{e}");
            let _ = writeln!(out, "+ {i:>3} |{a}");
        }
    }
    out
}

#[doc(hidden)]
pub fn assert_buffer_inner(buf: &Buffer, expected: &str) {
    let actual = normalize(&buffer_to_text(buf));
    let expected = normalize(expected);
    if actual != expected {
        panic!(
            "buffer mismatch\n{}\nactual:\n{actual}",
            diff_text(&expected, &actual)
        );
    }
}

fn is_bless() -> bool {
    std::env::var("BLESS").is_ok_and(|v| v == "1")
}

#[doc(hidden)]
pub fn assert_snapshot_inner(name: &str, buf: &Buffer, manifest_dir: &str) {
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("snapshots")
        .join(format!("{name}.snap"));
    let actual = normalize(&buffer_to_text(buf));

    if is_bless() {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .unwrap_or_else(|e| panic!("create {}: {e}", dir.display()));
        }
        fs::write(&path, format!("{actual}\n"))
            .unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
        tracing::info!(snapshot = name, digest = %frame_digest(buf), "snapshot blessed");
        return;
    }

    let expected = match fs::read_to_string(&path) {
        Ok(text) => normalize(&text),
        Err(_) => panic!(
            "missing snapshot '{name}' at {}; run with BLESS=1 to create it",
            path.display()
        ),
    };
    if actual != expected {
        panic!(
            "snapshot '{name}' mismatch\n{}",
            diff_text(&expected, &actual)
        );
    }
}

/// Assert that a buffer's text equals `expected`.
///
/// Trailing whitespace on each line and trailing blank lines are ignored.
#[macro_export]
macro_rules! assert_buffer {
    ($buf:expr, $expected:expr $(,)?) => {
        $crate::assert_buffer_inner($buf, $expected)
    };
}

/// Assert that a buffer matches the stored snapshot `name`.
#[macro_export]
macro_rules! assert_snapshot {
    ($name:expr, $buf:expr $(,)?) => {
        $crate::assert_snapshot_inner($name, $buf, env!("CARGO_MANIFEST_DIR"))
    };
}

/// Drives a [`ListEditor`] through scripted input.
pub struct EditorHarness<T: Clone + PartialEq + 'static> {
    editor: ListEditor<T>,
    state: ListEditorState,
    area: Rect,
    buf: Buffer,
}

impl<T: Clone + PartialEq + 'static> EditorHarness<T> {
    /// Wrap `editor` and render it once into a `width` x `height` frame.
    pub fn new(editor: ListEditor<T>, width: u16, height: u16) -> Self {
        let mut harness = Self {
            editor,
            state: ListEditorState::new(),
            area: Rect::from_size(width, height),
            buf: Buffer::new(width, height),
        };
        harness.render();
        harness
    }

    pub fn editor(&self) -> &ListEditor<T> {
        &self.editor
    }

    pub fn state(&self) -> &ListEditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ListEditorState {
        &mut self.state
    }

    /// The last rendered frame.
    pub fn buffer(&self) -> &Buffer {
        &self.buf
    }

    /// Redraw from the current list.
    pub fn render(&mut self) -> &Buffer {
        self.buf.clear();
        StatefulWidget::render(&self.editor, self.area, &mut self.buf, &mut self.state);
        &self.buf
    }

    /// Redraw and return the frame text.
    pub fn text(&mut self) -> String {
        buffer_to_text(self.render())
    }

    /// Deliver one event, then redraw.
    pub fn send(&mut self, event: impl Into<Event>) -> Result<EventOutcome, ListEditError> {
        let event = event.into();
        let outcome = self.editor.handle_event(&event, &mut self.state);
        tracing::trace!(?event, ?outcome, "harness event");
        self.render();
        outcome
    }

    pub fn key(&mut self, code: KeyCode) -> Result<EventOutcome, ListEditError> {
        self.send(Event::key(code))
    }

    pub fn alt_key(&mut self, code: KeyCode) -> Result<EventOutcome, ListEditError> {
        self.send(Event::alt_key(code))
    }

    /// Left click at `(x, y)`.
    pub fn click(&mut self, x: u16, y: u16) -> Result<EventOutcome, ListEditError> {
        self.send(MouseEvent::press(x, y))
    }

    /// Press at `from`, move to `to` and release there.
    pub fn drag(
        &mut self,
        from: (u16, u16),
        to: (u16, u16),
    ) -> Result<EventOutcome, ListEditError> {
        self.send(MouseEvent::press(from.0, from.1))?;
        self.send(MouseEvent::drag(to.0, to.1))?;
        self.send(MouseEvent::release(to.0, to.1))
    }

    /// Deliver events in order, stopping at the first error.
    pub fn script(
        &mut self,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Vec<EventOutcome>, ListEditError> {
        events.into_iter().map(|event| self.send(event)).collect()
    }
}
