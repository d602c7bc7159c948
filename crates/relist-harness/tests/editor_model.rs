#![forbid(unsafe_code)]

//! Property tests: the editor agrees with a plain `Vec` model under
//! arbitrary editing scripts and drag gestures.

use proptest::prelude::*;
use relist_core::geometry::Rect;
use relist_harness::EditorHarness;
use relist_harness::strategy::{apply_editor, apply_model, edit_script, initial_list};
use relist_render::buffer::Buffer;
use relist_runtime::Observable;
use relist_widgets::{DisplayTemplate, EventOutcome, ListEditor, ListEditorState, StatefulWidget};

proptest! {
    #[test]
    fn editor_matches_vec_model(initial in initial_list(6), script in edit_script(8, 24)) {
        let list = Observable::new(initial.clone());
        let editor = ListEditor::new(list.clone(), DisplayTemplate::new()).new_item(0);
        let mut model = initial;

        for step in script {
            let expected = apply_model(&mut model, step, 0);
            let before = list.version();
            let actual = apply_editor(&editor, step);
            match expected {
                None => {
                    prop_assert!(actual.is_err(), "{step:?} should fail");
                    prop_assert_eq!(list.version(), before);
                }
                Some(changed) => {
                    prop_assert_eq!(actual, Ok(changed));
                    prop_assert_eq!(list.version(), before + u64::from(changed));
                }
            }
            prop_assert_eq!(list.get(), model.clone());
        }
    }

    #[test]
    fn drag_between_rows_moves_item(
        initial in initial_list(6).prop_filter("non-empty", |v| !v.is_empty()),
        from_seed in any::<usize>(),
        to_seed in any::<usize>(),
    ) {
        let len = initial.len();
        let (from, to) = (from_seed % len, to_seed % len);
        let list = Observable::new(initial.clone());
        let editor = ListEditor::new(list.clone(), DisplayTemplate::new());
        let mut app = EditorHarness::new(editor, 12, 8);

        let row = |i: usize| u16::try_from(i).unwrap();
        let outcome = app.drag((0, row(from)), (4, row(to))).unwrap();

        let mut expected = initial;
        let item = expected.remove(from);
        expected.insert(to, item);
        prop_assert_eq!(list.get(), expected);
        prop_assert_eq!(
            outcome,
            if from == to { EventOutcome::Consumed } else { EventOutcome::Changed }
        );
        prop_assert_eq!(app.state().selected(), Some(to));
    }

    #[test]
    fn render_is_total(
        items in initial_list(12),
        width in 0u16..20,
        height in 0u16..10,
        selected in proptest::option::of(0usize..16),
        arrows in any::<bool>(),
    ) {
        let list = Observable::new(items.clone());
        let editor = ListEditor::new(list, DisplayTemplate::new())
            .new_item(0)
            .display_arrows(arrows);
        let mut state = ListEditorState::new();
        state.select(selected);
        let mut buf = Buffer::new(width, height);
        StatefulWidget::render(&editor, Rect::new(0, 0, width, height), &mut buf, &mut state);

        prop_assert!(state.visible_rows() <= usize::from(height));
        prop_assert!(state.visible_rows() <= items.len());
        if let Some(sel) = state.selected() {
            prop_assert!(sel < items.len());
        }
        if items.is_empty() {
            prop_assert_eq!(state.selected(), None);
        }
    }
}
