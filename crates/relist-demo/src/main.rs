#![forbid(unsafe_code)]

//! Headless host app: five counters edited through a [`ListEditor`].
//!
//! The host keeps its counters in its own cell; a [`TwoWayBinding`] links it
//! to the editor's cell, so edits flow back to the host and host-side
//! replacements reach the editor.
//!
//! Runs a fixed input script against the editor and prints every frame to
//! stdout. Logs go to stderr, filtered by `RELIST_LOG` (default `info`).
//! `RELIST_DISPLAY_ARROWS=1` shows the arrow buttons; `RELIST_ASCII=1`
//! switches to ASCII glyphs and borders.

use std::io::{self, Write};

use relist_core::event::{Event, KeyCode, MouseEvent};
use relist_core::geometry::Rect;
use relist_render::buffer::Buffer;
use relist_runtime::{BindingScope, Computed, Observable, TwoWayBinding};
use relist_style::Style;
use relist_widgets::{
    BorderType, CounterTemplate, EventOutcome, Glyphs, ListEditError, ListEditor,
    ListEditorConfig, ListEditorState, Panel, StatefulWidget,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const WIDTH: u16 = 24;
const HEIGHT: u16 = 10;

enum Step {
    Input(Event),
    /// Drag row `from` by its handle and release it over row `to`.
    DragRow { from: usize, to: usize },
    /// The host replaces its counters outside the editor.
    HostSet(Vec<i64>),
}

fn script() -> Vec<(&'static str, Step)> {
    vec![
        ("select last", Step::Input(Event::key(KeyCode::End))),
        ("increment", Step::Input(Event::key(KeyCode::Enter))),
        ("move up", Step::Input(Event::alt_key(KeyCode::Up))),
        ("select first", Step::Input(Event::key(KeyCode::Home))),
        ("remove", Step::Input(Event::key(KeyCode::Delete))),
        ("add", Step::Input(Event::key(KeyCode::Insert))),
        ("increment new", Step::Input(Event::key(KeyCode::Enter))),
        ("drag first to fourth", Step::DragRow { from: 0, to: 3 }),
        ("host replaces list", Step::HostSet(vec![10, 20])),
        ("select up", Step::Input(Event::key(KeyCode::Up))),
    ]
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RELIST_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_step(
    host: &Observable<Vec<i64>>,
    editor: &ListEditor<i64>,
    state: &mut ListEditorState,
    step: Step,
) -> Result<EventOutcome, ListEditError> {
    match step {
        Step::Input(event) => editor.handle_event(&event, state),
        Step::DragRow { from, to } => {
            let (Some(src), Some(dst)) = (state.row_area(from), state.row_area(to)) else {
                warn!(from, to, "drag rows not visible");
                return Ok(EventOutcome::Ignored);
            };
            editor.handle_event(&MouseEvent::press(src.x, src.y).into(), state)?;
            editor.handle_event(&MouseEvent::drag(dst.x, dst.y).into(), state)?;
            editor.handle_event(&MouseEvent::release(dst.x, dst.y).into(), state)
        }
        Step::HostSet(items) => Ok(if host.set(items) {
            EventOutcome::Changed
        } else {
            EventOutcome::Consumed
        }),
    }
}

fn print_frame(out: &mut impl Write, label: &str, buf: &Buffer, total: i64) -> io::Result<()> {
    writeln!(out, "== {label} (total: {total}) ==")?;
    writeln!(out, "{}", buf.to_plain_text())?;
    writeln!(out)
}

fn main() -> io::Result<()> {
    init_tracing();

    let counters = Observable::new(vec![1_i64, 2, 3, 4, 5]);
    let total = Computed::from_observable(&counters, |items: &Vec<i64>| items.iter().sum::<i64>());
    let mut scope = BindingScope::new();
    scope.subscribe(&counters, |items| info!(?items, "counters changed"));

    let editor_list = Observable::new(Vec::new());
    let _link = TwoWayBinding::new(&counters, &editor_list);

    let config = ListEditorConfig::from_env();
    let border = if config.glyphs == Glyphs::ASCII {
        BorderType::Ascii
    } else {
        BorderType::Rounded
    };
    let editor = ListEditor::new(editor_list, CounterTemplate)
        .new_item(0)
        .config(config);
    let panel = Panel::new(editor)
        .title("Counters")
        .title_style(Style::new().bold())
        .border_type(border);

    let area = Rect::from_size(WIDTH, HEIGHT);
    let mut buf = Buffer::new(WIDTH, HEIGHT);
    let mut state = ListEditorState::new();
    let mut out = io::stdout().lock();

    StatefulWidget::render(&panel, area, &mut buf, &mut state);
    print_frame(&mut out, "initial", &buf, total.get())?;

    for (label, step) in script() {
        match run_step(&counters, panel.child(), &mut state, step) {
            Ok(outcome) => debug!(label, ?outcome, "step handled"),
            Err(err) => warn!(label, %err, "step rejected"),
        }
        buf.clear();
        StatefulWidget::render(&panel, area, &mut buf, &mut state);
        print_frame(&mut out, label, &buf, total.get())?;
    }

    info!(
        final_total = total.get(),
        subscriptions = scope.binding_count(),
        "script finished"
    );
    Ok(())
}
