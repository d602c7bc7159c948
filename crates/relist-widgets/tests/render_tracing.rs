#![forbid(unsafe_code)]

//! Rendering opens one `widget_render` span per widget, and rejected edits
//! are logged.

use std::fmt;
use std::sync::{Arc, Mutex};

use relist_core::geometry::Rect;
use relist_render::buffer::Buffer;
use relist_runtime::Observable;
use relist_widgets::{CounterTemplate, ListEditor, ListEditorState, Panel, StatefulWidget};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Default)]
struct Captured {
    widgets: Arc<Mutex<Vec<String>>>,
    messages: Arc<Mutex<Vec<String>>>,
}

#[derive(Default)]
struct FieldGrab {
    name: &'static str,
    value: Option<String>,
}

impl Visit for FieldGrab {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == self.name {
            self.value = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == self.name {
            self.value = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        if attrs.metadata().name() != "widget_render" {
            return;
        }
        let mut grab = FieldGrab {
            name: "widget",
            value: None,
        };
        attrs.record(&mut grab);
        if let Some(widget) = grab.value {
            self.widgets.lock().unwrap().push(widget);
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut grab = FieldGrab {
            name: "message",
            value: None,
        };
        event.record(&mut grab);
        if let Some(message) = grab.value {
            self.messages.lock().unwrap().push(message);
        }
    }
}

#[test]
fn render_spans_and_rejection_logs() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry().with(captured.clone());

    tracing::subscriber::with_default(subscriber, || {
        let counters = Observable::new(vec![1_i64, 2]);
        let editor = ListEditor::new(counters.clone(), CounterTemplate);
        let panel = Panel::new(editor).title("Counters");
        let mut buf = Buffer::new(16, 4);
        let mut state = ListEditorState::new();
        StatefulWidget::render(&panel, Rect::new(0, 0, 16, 4), &mut buf, &mut state);

        assert!(panel.child().remove_at(5).is_err());
        assert_eq!(counters.get(), vec![1, 2]);
    });

    let widgets = captured.widgets.lock().unwrap().clone();
    assert_eq!(widgets, vec!["Panel", "ListEditor", "Counter", "Counter"]);

    let messages = captured.messages.lock().unwrap().clone();
    assert!(
        messages.iter().any(|m| m == "list edit rejected"),
        "messages: {messages:?}"
    );
}
