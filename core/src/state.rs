//! State: data a node's kind computes and carries between revisions.
//!
//! State is owned by the node kind (a scroll view's content offset, for
//! instance) rather than declared by the outer layer like props. Nodes share
//! it by `Arc`; updating state means cloning the node with a new value.

use core::any::Any;
use core::fmt::Debug;
use std::sync::Arc;

/// Type-erased state of some component kind.
///
/// Implemented for every `Debug + PartialEq + Send + Sync + 'static` type.
/// Stateless kinds use `()`.
pub trait State: Debug + Send + Sync + 'static {
    /// Returns `self` as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Converts a shared pointer to `self` into a shared [`Any`].
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T> State for T
where
    T: Debug + PartialEq + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// State shared between node revisions.
pub type SharedState = Arc<dyn State>;

impl dyn State {
    /// Returns the state as `S` if that is its concrete type.
    #[must_use]
    pub fn downcast_ref<S: State>(&self) -> Option<&S> {
        self.as_any().downcast_ref()
    }
}

/// Recovers typed state from [`SharedState`], sharing the allocation.
#[must_use]
pub fn downcast_state<S: State>(state: &SharedState) -> Option<Arc<S>> {
    Arc::clone(state).into_any().downcast::<S>().ok()
}
