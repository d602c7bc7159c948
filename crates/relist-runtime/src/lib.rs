#![forbid(unsafe_code)]

//! Single-threaded reactive runtime for relist.
//!
//! Host applications own their state in [`Observable`] cells and hand clones
//! of those cells to widgets. A widget publishes replacement values with
//! `set`, and every subscriber (including the host) observes the change
//! synchronously, within the same event turn.

pub mod reactive;

pub use reactive::{
    Binding, BindingScope, Computed, Observable, Subscription, TwoWayBinding, bind_mapped,
    bind_mapped2, bind_observable,
};
