#![forbid(unsafe_code)]

//! Generic reorderable list editor.
//!
//! [`ListEditor<T>`] edits a host-owned `Observable<Vec<T>>`. It can append a
//! configured new-item value, remove items, swap an item with a neighbour,
//! move an item to an arbitrary position by drag-and-drop, and write back a
//! replacement value for a single item. How each item looks (and how it is
//! edited in place) is delegated to an [`ItemTemplate`].
//!
//! # Invariants
//!
//! 1. Every operation builds a new vector and publishes it with a single
//!    `Observable::set`; the current vector is never mutated in place.
//! 2. A no-op (moving the first item up, dropping an item onto itself,
//!    `add_item` with no new-item value, rewriting an item with an equal
//!    value) publishes nothing.
//! 3. A failed operation publishes nothing.
//! 4. The editor holds no copy of the list: reads always go through the
//!    bound observable, so host-side changes are visible immediately.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Index out of range | Stale index from caller | `Err(IndexOutOfRange)`, list untouched |
//! | Out-of-range write-back | Item callback outlived its row | Logged at `warn`, dropped |
//!
//! # Example
//!
//! ```
//! use relist_runtime::Observable;
//! use relist_widgets::list_editor::{DisplayTemplate, ListEditor};
//!
//! let counters = Observable::new(vec![1, 2, 3, 4, 5]);
//! let editor = ListEditor::new(counters.clone(), DisplayTemplate::new())
//!     .new_item(0)
//!     .display_arrows(true);
//!
//! editor.move_up(2).unwrap();
//! assert_eq!(counters.get(), vec![1, 3, 2, 4, 5]);
//! editor.add_item();
//! assert_eq!(counters.get(), vec![1, 3, 2, 4, 5, 0]);
//! ```

mod config;
pub mod ops;
mod state;
mod template;

pub use config::{Glyphs, ListEditorConfig};
pub use state::{EventOutcome, ListEditorState};
pub use template::{CounterTemplate, DisplayTemplate, FnTemplate, ItemTemplate, template_fn};

use std::fmt;
use std::rc::Rc;

use relist_core::drag::DragDrop;
use relist_runtime::{Binding, Observable, bind_mapped};
use relist_style::Style;

use crate::error::{EditOp, ListEditError};

/// One element of the list paired with a callback that replaces it.
///
/// Recomputed from the bound list on every read; it has no lifecycle of its
/// own. `item_change(v)` is equivalent to `ListEditor::update_at(index, v)`.
pub struct EditableItem<T> {
    pub item: T,
    pub index: usize,
    item_change: Rc<dyn Fn(T)>,
}

impl<T: Clone> Clone for EditableItem<T> {
    fn clone(&self) -> Self {
        Self {
            item: self.item.clone(),
            index: self.index,
            item_change: Rc::clone(&self.item_change),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for EditableItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditableItem")
            .field("item", &self.item)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<T> EditableItem<T> {
    /// Build a record with an arbitrary write-back callback.
    pub fn new(item: T, index: usize, item_change: impl Fn(T) + 'static) -> Self {
        Self {
            item,
            index,
            item_change: Rc::new(item_change),
        }
    }

    /// Replace this element in the bound list.
    pub fn item_change(&self, value: T) {
        (self.item_change)(value);
    }

    /// The write-back callback, for handing to an embedded editor.
    #[must_use]
    pub fn change_callback(&self) -> Rc<dyn Fn(T)> {
        Rc::clone(&self.item_change)
    }
}

fn write_back<T: Clone + PartialEq + 'static>(
    list: &Observable<Vec<T>>,
    index: usize,
    value: T,
) -> Result<bool, ListEditError> {
    let next = list.with(|items| ops::replaced(items, index, value))?;
    Ok(list.set(next))
}

fn editable_items<T: Clone + PartialEq + 'static>(
    list: &Observable<Vec<T>>,
    items: &[T],
) -> Vec<EditableItem<T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let list = list.clone();
            EditableItem::new(item.clone(), index, move |value| {
                if let Err(err) = write_back(&list, index, value) {
                    tracing::warn!(%err, "dropped item write-back");
                }
            })
        })
        .collect()
}

/// Reorderable list editor bound to host state.
pub struct ListEditor<T: Clone + PartialEq + 'static> {
    list: Observable<Vec<T>>,
    template: Box<dyn ItemTemplate<T>>,
    new_item: Option<T>,
    config: ListEditorConfig,
    style: Style,
    selected_style: Style,
    handle_style: Style,
    control_style: Style,
    drag_style: Style,
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for ListEditor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListEditor")
            .field("list", &self.list)
            .field("new_item", &self.new_item)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq + 'static> ListEditor<T> {
    /// Bind an editor to `list`, rendering items with `template`.
    pub fn new(list: Observable<Vec<T>>, template: impl ItemTemplate<T> + 'static) -> Self {
        Self {
            list,
            template: Box::new(template),
            new_item: None,
            config: ListEditorConfig::default(),
            style: Style::default(),
            selected_style: Style::new().reversed(),
            handle_style: Style::new().dim(),
            control_style: Style::new().bold(),
            drag_style: Style::new().dim(),
        }
    }

    /// Value appended by [`ListEditor::add_item`]. Without one, `add_item`
    /// is a no-op and no add button is drawn.
    #[must_use]
    pub fn new_item(mut self, value: T) -> Self {
        self.new_item = Some(value);
        self
    }

    /// Show up/down arrow buttons next to the drag handle.
    #[must_use]
    pub fn display_arrows(mut self, show: bool) -> Self {
        self.config.display_arrows = show;
        self
    }

    #[must_use]
    pub fn config(mut self, config: ListEditorConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn selected_style(mut self, style: Style) -> Self {
        self.selected_style = style;
        self
    }

    #[must_use]
    pub fn handle_style(mut self, style: Style) -> Self {
        self.handle_style = style;
        self
    }

    #[must_use]
    pub fn control_style(mut self, style: Style) -> Self {
        self.control_style = style;
        self
    }

    /// Style layered over the row being dragged.
    #[must_use]
    pub fn drag_style(mut self, style: Style) -> Self {
        self.drag_style = style;
        self
    }

    /// The bound list cell.
    #[must_use]
    pub fn list(&self) -> &Observable<Vec<T>> {
        &self.list
    }

    /// Snapshot of the current items.
    #[must_use]
    pub fn items(&self) -> Vec<T> {
        self.list.get()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.list.with(Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn has_new_item(&self) -> bool {
        self.new_item.is_some()
    }

    #[must_use]
    pub fn settings(&self) -> &ListEditorConfig {
        &self.config
    }

    fn publish(&self, op: &'static str, next: Vec<T>) -> bool {
        let len = next.len();
        let changed = self.list.set(next);
        tracing::trace!(op, len, changed, "list edited");
        changed
    }

    fn rejected(err: ListEditError) -> ListEditError {
        tracing::debug!(%err, "list edit rejected");
        err
    }

    /// Append the configured new-item value.
    ///
    /// Returns `false` when no new-item value is configured.
    pub fn add_item(&self) -> bool {
        let Some(value) = self.new_item.clone() else {
            return false;
        };
        let next = self.list.with(|items| ops::appended(items, value));
        self.publish("add", next)
    }

    /// Delete the element at `index`.
    pub fn remove_at(&self, index: usize) -> Result<bool, ListEditError> {
        let next = self
            .list
            .with(|items| ops::removed(items, index))
            .map_err(Self::rejected)?;
        Ok(self.publish("remove", next))
    }

    /// Swap the element at `index` with its predecessor; no-op for the first.
    pub fn move_up(&self, index: usize) -> Result<bool, ListEditError> {
        let next = self
            .list
            .with(|items| ops::swapped_up(items, index))
            .map_err(Self::rejected)?;
        Ok(next.is_some_and(|next| self.publish("move_up", next)))
    }

    /// Swap the element at `index` with its successor; no-op for the last.
    pub fn move_down(&self, index: usize) -> Result<bool, ListEditError> {
        let next = self
            .list
            .with(|items| ops::swapped_down(items, index))
            .map_err(Self::rejected)?;
        Ok(next.is_some_and(|next| self.publish("move_down", next)))
    }

    /// Move the element at `from` so that it ends up at index `to`.
    pub fn reorder(&self, from: usize, to: usize) -> Result<bool, ListEditError> {
        let next = self
            .list
            .with(|items| ops::moved(items, from, to))
            .map_err(Self::rejected)?;
        Ok(next.is_some_and(|next| self.publish("reorder", next)))
    }

    /// Apply a completed drag-and-drop gesture.
    pub fn drop(&self, event: DragDrop) -> Result<bool, ListEditError> {
        self.reorder(event.previous_index, event.current_index)
    }

    /// Replace the element at `index`.
    pub fn update_at(&self, index: usize, value: T) -> Result<bool, ListEditError> {
        let changed = write_back(&self.list, index, value).map_err(Self::rejected)?;
        tracing::trace!(op = EditOp::Update.name(), index, changed, "list edited");
        Ok(changed)
    }

    /// Per-element `(item, index, item_change)` records for the current list.
    #[must_use]
    pub fn list_with_update(&self) -> Vec<EditableItem<T>> {
        self.list.with(|items| editable_items(&self.list, items))
    }

    /// A binding that yields fresh [`EditableItem`] records on every `get()`.
    #[must_use]
    pub fn item_bindings(&self) -> Binding<Vec<EditableItem<T>>> {
        let list = self.list.clone();
        bind_mapped(&self.list, move |items| editable_items(&list, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn editor(items: Vec<i32>) -> (Observable<Vec<i32>>, ListEditor<i32>) {
        let list = Observable::new(items);
        let editor = ListEditor::new(list.clone(), DisplayTemplate::new());
        (list, editor)
    }

    #[test]
    fn add_item_appends_new_item_value() {
        let (list, editor) = editor(vec![1, 2]);
        let editor = editor.new_item(9);
        assert!(editor.add_item());
        assert_eq!(list.get(), vec![1, 2, 9]);
    }

    #[test]
    fn add_item_without_value_is_noop() {
        let (list, editor) = editor(vec![1]);
        assert!(!editor.add_item());
        assert_eq!(list.version(), 0);
    }

    #[test]
    fn remove_at_publishes_once() {
        let (list, editor) = editor(vec![1, 2, 3]);
        let publishes = Rc::new(Cell::new(0));
        let p = Rc::clone(&publishes);
        let _sub = list.subscribe(move |_| p.set(p.get() + 1));

        assert_eq!(editor.remove_at(0), Ok(true));
        assert_eq!(list.get(), vec![2, 3]);
        assert_eq!(publishes.get(), 1);
    }

    #[test]
    fn remove_out_of_range_leaves_list_untouched() {
        let (list, editor) = editor(vec![1, 2, 3]);
        let err = editor.remove_at(3).unwrap_err();
        assert_eq!(
            err,
            ListEditError::IndexOutOfRange {
                op: EditOp::Remove,
                index: 3,
                len: 3
            }
        );
        assert_eq!(list.get(), vec![1, 2, 3]);
        assert_eq!(list.version(), 0);
    }

    #[test]
    fn move_up_and_down_scenario() {
        let (list, editor) = editor(vec![1, 2, 3, 4, 5]);
        assert_eq!(editor.move_up(2), Ok(true));
        assert_eq!(list.get(), vec![1, 3, 2, 4, 5]);
        assert_eq!(editor.move_down(1), Ok(true));
        assert_eq!(list.get(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn boundary_moves_publish_nothing() {
        let (list, editor) = editor(vec![1, 2]);
        assert_eq!(editor.move_up(0), Ok(false));
        assert_eq!(editor.move_down(1), Ok(false));
        assert_eq!(list.version(), 0);
    }

    #[test]
    fn reorder_scenario() {
        let (list, editor) = editor(vec![1, 2, 3]);
        assert_eq!(editor.reorder(0, 2), Ok(true));
        assert_eq!(list.get(), vec![2, 3, 1]);
    }

    #[test]
    fn drop_uses_move_semantics() {
        let (list, editor) = editor(vec![10, 20, 30, 40]);
        assert_eq!(editor.drop(DragDrop::new(3, 1)), Ok(true));
        assert_eq!(list.get(), vec![10, 40, 20, 30]);
    }

    #[test]
    fn update_with_same_value_is_unobservable() {
        let (list, editor) = editor(vec![1, 2, 3]);
        assert_eq!(editor.update_at(1, 2), Ok(false));
        assert_eq!(list.version(), 0);
        assert_eq!(editor.update_at(1, 7), Ok(true));
        assert_eq!(list.get(), vec![1, 7, 3]);
    }

    #[test]
    fn item_change_writes_back_to_its_index() {
        let (list, editor) = editor(vec![4, 5, 6]);
        let records = editor.list_with_update();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].item, 6);
        records[1].item_change(50);
        assert_eq!(list.get(), vec![4, 50, 6]);
    }

    #[test]
    fn stale_item_change_is_dropped() {
        let (list, editor) = editor(vec![1, 2]);
        let records = editor.list_with_update();
        editor.remove_at(1).unwrap();
        records[1].item_change(99);
        assert_eq!(list.get(), vec![1]);
    }

    #[test]
    fn item_bindings_follow_host_changes() {
        let (list, editor) = editor(vec![1]);
        let bindings = editor.item_bindings();
        list.set(vec![3, 4]);
        let records = bindings.get();
        assert_eq!(records.iter().map(|r| r.item).collect::<Vec<_>>(), vec![3, 4]);
        records[0].item_change(30);
        assert_eq!(list.get(), vec![30, 4]);
    }

    #[test]
    fn reads_go_through_bound_state() {
        let (list, editor) = editor(vec![]);
        assert!(editor.is_empty());
        list.set(vec![1, 2]);
        assert_eq!(editor.len(), 2);
        assert_eq!(editor.items(), vec![1, 2]);
    }
}
