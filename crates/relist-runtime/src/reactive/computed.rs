#![forbid(unsafe_code)]

//! Lazily evaluated, memoized derived values.
//!
//! A [`Computed<T>`] subscribes to its sources and marks itself dirty when any
//! of them change. The derivation runs on the next `get()`, at most once per
//! batch of source changes.
//!
//! ```
//! use relist_runtime::reactive::{Computed, Observable};
//!
//! let items = Observable::new(vec![1_i64, 2, 3]);
//! let total = Computed::from_observable(&items, |v| v.iter().sum::<i64>());
//! assert_eq!(total.get(), 6);
//!
//! items.set(vec![4, 5]);
//! assert_eq!(total.get(), 9);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::observable::{Observable, Subscription};

struct Inner<T> {
    value: Option<T>,
    dirty: bool,
    compute: Box<dyn Fn() -> T>,
    evaluations: u64,
}

/// A memoized value derived from one or more observables.
pub struct Computed<T> {
    inner: Rc<RefCell<Inner<T>>>,
    _subscriptions: Rc<Vec<Subscription>>,
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            _subscriptions: Rc::clone(&self._subscriptions),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Computed")
            .field("value", &inner.value)
            .field("dirty", &inner.dirty)
            .finish()
    }
}

fn mark_dirty<T>(weak: &Weak<RefCell<Inner<T>>>) {
    if let Some(inner) = weak.upgrade() {
        inner.borrow_mut().dirty = true;
    }
}

impl<T: Clone + 'static> Computed<T> {
    /// Derive from a single observable.
    pub fn from_observable<S: Clone + PartialEq + 'static>(
        source: &Observable<S>,
        map: impl Fn(&S) -> T + 'static,
    ) -> Self {
        let src = source.clone();
        let inner = Self::inner(Box::new(move || src.with(|v| map(v))));
        let weak = Rc::downgrade(&inner);
        let sub = source.subscribe(move |_| mark_dirty(&weak));
        Self {
            inner,
            _subscriptions: Rc::new(vec![sub]),
        }
    }

    /// Derive from two observables.
    pub fn from2<S1, S2>(
        s1: &Observable<S1>,
        s2: &Observable<S2>,
        map: impl Fn(&S1, &S2) -> T + 'static,
    ) -> Self
    where
        S1: Clone + PartialEq + 'static,
        S2: Clone + PartialEq + 'static,
    {
        let (src1, src2) = (s1.clone(), s2.clone());
        let inner = Self::inner(Box::new(move || src1.with(|a| src2.with(|b| map(a, b)))));
        let w1 = Rc::downgrade(&inner);
        let w2 = Rc::downgrade(&inner);
        let subs = vec![
            s1.subscribe(move |_| mark_dirty(&w1)),
            s2.subscribe(move |_| mark_dirty(&w2)),
        ];
        Self {
            inner,
            _subscriptions: Rc::new(subs),
        }
    }

    fn inner(compute: Box<dyn Fn() -> T>) -> Rc<RefCell<Inner<T>>> {
        Rc::new(RefCell::new(Inner {
            value: None,
            dirty: true,
            compute,
            evaluations: 0,
        }))
    }

    /// Current value, recomputing first if any source changed.
    #[must_use]
    pub fn get(&self) -> T {
        let mut inner = self.inner.borrow_mut();
        if !inner.dirty
            && let Some(value) = &inner.value
        {
            return value.clone();
        }
        let fresh = (inner.compute)();
        inner.value = Some(fresh.clone());
        inner.dirty = false;
        inner.evaluations += 1;
        fresh
    }

    /// Whether the next `get()` will recompute.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.inner.borrow().dirty
    }

    /// How many times the derivation has run.
    #[must_use]
    pub fn evaluations(&self) -> u64 {
        self.inner.borrow().evaluations
    }
}
