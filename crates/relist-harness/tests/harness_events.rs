#![forbid(unsafe_code)]

//! `EditorHarness` traces every delivered event, and styled frames carry the
//! editor's selection style.

use std::fmt;
use std::sync::{Arc, Mutex};

use relist_core::event::KeyCode;
use relist_harness::EditorHarness;
use relist_render::cell::{PackedRgba, StyleFlags};
use relist_runtime::Observable;
use relist_style::Style;
use relist_widgets::{DisplayTemplate, EventOutcome, ListEditor};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Default)]
struct Messages(Arc<Mutex<Vec<String>>>);

struct MessageGrab(Option<String>);

impl Visit for MessageGrab {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for Messages {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut grab = MessageGrab(None);
        event.record(&mut grab);
        if let Some(message) = grab.0 {
            self.0.lock().unwrap().push(message);
        }
    }
}

#[test]
fn every_delivered_event_is_traced() {
    let messages = Messages::default();
    let subscriber = tracing_subscriber::registry().with(messages.clone());

    tracing::subscriber::with_default(subscriber, || {
        let list = Observable::new(vec![1, 2, 3]);
        let editor = ListEditor::new(list.clone(), DisplayTemplate::new());
        let mut app = EditorHarness::new(editor, 8, 3);

        app.key(KeyCode::Down).unwrap();
        assert_eq!(app.drag((0, 0), (0, 2)), Ok(EventOutcome::Changed));
        assert_eq!(list.get(), vec![2, 3, 1]);
    });

    let messages = messages.0.lock().unwrap().clone();
    let traced = messages.iter().filter(|m| *m == "harness event").count();
    assert_eq!(traced, 4, "messages: {messages:?}");
}

#[test]
fn selection_style_reaches_the_frame() {
    let teal = PackedRgba::rgb(0, 128, 128);
    let list = Observable::new(vec![1, 2]);
    let editor = ListEditor::new(list, DisplayTemplate::new())
        .selected_style(Style::new().fg(teal).bold());
    let mut app = EditorHarness::new(editor, 8, 2);

    app.key(KeyCode::Down).unwrap();
    app.key(KeyCode::Down).unwrap();

    let selected = app.buffer().get(2, 1).unwrap();
    assert_eq!(selected.fg, teal);
    assert!(selected.attrs.contains(StyleFlags::BOLD));

    let other = app.buffer().get(2, 0).unwrap();
    assert_ne!(other.fg, teal);
    assert!(!other.attrs.contains(StyleFlags::BOLD));
}
