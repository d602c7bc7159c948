#![forbid(unsafe_code)]

//! Bindings between host-owned [`Observable`] state and widget views.
//!
//! A [`Binding<T>`] is a read-through view of one or two observables with an
//! optional transform, re-evaluated on every `get()`. Widgets use it for
//! per-frame derived data that must never be stale and is cheap to rebuild
//! (for example the per-row edit callbacks of a list editor).
//!
//! ```
//! use relist_runtime::reactive::{Observable, bind_mapped};
//!
//! let items = Observable::new(vec!["a", "b"]);
//! let count = bind_mapped(&items, |v| v.len());
//! assert_eq!(count.get(), 2);
//! items.set(vec!["a"]);
//! assert_eq!(count.get(), 1);
//! ```
//!
//! # Two-Way Bindings
//!
//! [`TwoWayBinding<T>`] keeps two observables in sync. A host that keeps its
//! own state cell can connect it to a widget's cell instead of sharing one:
//!
//! ```
//! use relist_runtime::reactive::{Observable, TwoWayBinding};
//!
//! let host = Observable::new(vec![1, 2, 3]);
//! let widget = Observable::new(Vec::new());
//! let _link = TwoWayBinding::new(&host, &widget);
//! assert_eq!(widget.get(), vec![1, 2, 3]);
//!
//! widget.set(vec![3, 2, 1]);
//! assert_eq!(host.get(), vec![3, 2, 1]);
//! ```
//!
//! # Invariants
//!
//! 1. `Binding::get()` always reflects the current source values.
//! 2. A binding's transform runs on every `get()`; use
//!    [`Computed`](super::Computed) for memoization.
//! 3. `TwoWayBinding` never loops: a re-entrancy guard stops the echo.
//! 4. Dropping a `TwoWayBinding` disconnects both directions.

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::observable::{Observable, Subscription};

/// A read-only, non-caching view over observable state.
pub struct Binding<T> {
    eval: Rc<dyn Fn() -> T>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            eval: Rc::clone(&self.eval),
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.get())
            .finish()
    }
}

impl<T: 'static> Binding<T> {
    /// Binding that evaluates `f` on each `get()`.
    pub fn new(f: impl Fn() -> T + 'static) -> Self {
        Self { eval: Rc::new(f) }
    }

    #[must_use]
    pub fn get(&self) -> T {
        (self.eval)()
    }

    /// Chain a further transform.
    pub fn then<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Binding<U> {
        Binding {
            eval: Rc::new(move || f((self.eval)())),
        }
    }
}

/// Identity binding to `source`.
pub fn bind_observable<T: Clone + PartialEq + 'static>(source: &Observable<T>) -> Binding<T> {
    let src = source.clone();
    Binding::new(move || src.get())
}

/// Binding to `source` transformed by `map` (borrowing, no clone of `S`).
pub fn bind_mapped<S: Clone + PartialEq + 'static, T: 'static>(
    source: &Observable<S>,
    map: impl Fn(&S) -> T + 'static,
) -> Binding<T> {
    let src = source.clone();
    Binding::new(move || src.with(|v| map(v)))
}

/// Binding over two sources combined by `map`.
pub fn bind_mapped2<S1, S2, T>(
    s1: &Observable<S1>,
    s2: &Observable<S2>,
    map: impl Fn(&S1, &S2) -> T + 'static,
) -> Binding<T>
where
    S1: Clone + PartialEq + 'static,
    S2: Clone + PartialEq + 'static,
    T: 'static,
{
    let (src1, src2) = (s1.clone(), s2.clone());
    Binding::new(move || src1.with(|a| src2.with(|b| map(a, b))))
}

/// Bidirectional sync between two observables of the same type.
///
/// On creation `b` takes `a`'s value. Afterwards a change on either side is
/// copied to the other.
pub struct TwoWayBinding<T: Clone + PartialEq + 'static> {
    _a_to_b: Subscription,
    _b_to_a: Subscription,
    _phantom: PhantomData<T>,
}

impl<T: Clone + PartialEq + 'static> TwoWayBinding<T> {
    pub fn new(a: &Observable<T>, b: &Observable<T>) -> Self {
        b.set(a.get());

        let syncing = Rc::new(Cell::new(false));
        let a_to_b = Self::forward(a, b, Rc::clone(&syncing));
        let b_to_a = Self::forward(b, a, syncing);

        Self {
            _a_to_b: a_to_b,
            _b_to_a: b_to_a,
            _phantom: PhantomData,
        }
    }

    fn forward(from: &Observable<T>, to: &Observable<T>, syncing: Rc<Cell<bool>>) -> Subscription {
        let to = to.clone();
        from.subscribe(move |value| {
            if syncing.replace(true) {
                return;
            }
            to.set(value.clone());
            syncing.set(false);
        })
    }
}

impl<T: Clone + PartialEq + 'static> fmt::Debug for TwoWayBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwoWayBinding").finish()
    }
}

/// Create an identity [`Binding`] to an observable.
#[macro_export]
macro_rules! bind {
    ($obs:expr) => {
        $crate::reactive::binding::bind_observable(&$obs)
    };
}

/// Create a mapped [`Binding`] from an observable.
#[macro_export]
macro_rules! bind_map {
    ($obs:expr, $f:expr) => {
        $crate::reactive::binding::bind_mapped(&$obs, $f)
    };
}

/// Owns the subscriptions of one widget instance.
///
/// Dropping the scope releases every subscription it holds, disconnecting
/// the widget from host state.
#[derive(Default)]
pub struct BindingScope {
    subscriptions: Vec<Subscription>,
}

impl BindingScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `sub` alive for the lifetime of the scope.
    pub fn hold(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }

    /// Subscribe within this scope.
    pub fn subscribe<T: Clone + PartialEq + 'static>(
        &mut self,
        source: &Observable<T>,
        callback: impl Fn(&T) + 'static,
    ) -> &mut Self {
        self.subscriptions.push(source.subscribe(callback));
        self
    }

    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release everything now; the scope stays usable.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}

impl fmt::Debug for BindingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingScope")
            .field("binding_count", &self.subscriptions.len())
            .finish()
    }
}
