#![forbid(unsafe_code)]

//! Proptest strategies for list editing scripts, plus a plain `Vec` model
//! to check the editor against.

use proptest::prelude::*;
use relist_widgets::{ListEditError, ListEditor};

/// One editing call against a `ListEditor<i64>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStep {
    Add,
    Remove(usize),
    MoveUp(usize),
    MoveDown(usize),
    Reorder(usize, usize),
    Update(usize, i64),
}

/// A single step whose indices fall in `0..max_index` (so some are stale
/// once the list shrinks).
pub fn edit_step(max_index: usize) -> impl Strategy<Value = EditStep> {
    let idx = 0..max_index.max(1);
    prop_oneof![
        Just(EditStep::Add),
        idx.clone().prop_map(EditStep::Remove),
        idx.clone().prop_map(EditStep::MoveUp),
        idx.clone().prop_map(EditStep::MoveDown),
        (idx.clone(), idx.clone()).prop_map(|(a, b)| EditStep::Reorder(a, b)),
        (idx, -5i64..5).prop_map(|(i, v)| EditStep::Update(i, v)),
    ]
}

/// A script of up to `max_steps` steps.
pub fn edit_script(max_index: usize, max_steps: usize) -> impl Strategy<Value = Vec<EditStep>> {
    proptest::collection::vec(edit_step(max_index), 0..=max_steps)
}

/// Initial list contents.
pub fn initial_list(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(-100i64..100, 0..=max_len)
}

/// Apply `step` to the model. `None` when an index is out of range;
/// otherwise whether the list changed.
pub fn apply_model(model: &mut Vec<i64>, step: EditStep, new_item: i64) -> Option<bool> {
    let len = model.len();
    match step {
        EditStep::Add => {
            model.push(new_item);
            Some(true)
        }
        EditStep::Remove(i) => (i < len).then(|| {
            model.remove(i);
            true
        }),
        EditStep::MoveUp(i) => (i < len).then(|| {
            if i > 0 {
                model.swap(i - 1, i);
            }
            i > 0
        }),
        EditStep::MoveDown(i) => (i < len).then(|| {
            if i + 1 < len {
                model.swap(i, i + 1);
            }
            i + 1 < len
        }),
        EditStep::Reorder(from, to) => (from < len && to < len).then(|| {
            let item = model.remove(from);
            model.insert(to, item);
            from != to
        }),
        EditStep::Update(i, v) => (i < len).then(|| {
            let changed = model[i] != v;
            model[i] = v;
            changed
        }),
    }
}

/// Apply `step` through the editor's public operations.
pub fn apply_editor(editor: &ListEditor<i64>, step: EditStep) -> Result<bool, ListEditError> {
    match step {
        EditStep::Add => Ok(editor.add_item()),
        EditStep::Remove(i) => editor.remove_at(i),
        EditStep::MoveUp(i) => editor.move_up(i),
        EditStep::MoveDown(i) => editor.move_down(i),
        EditStep::Reorder(from, to) => editor.reorder(from, to),
        EditStep::Update(i, v) => editor.update_at(i, v),
    }
}
