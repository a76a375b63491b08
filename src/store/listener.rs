//! Listener registry.
//!
//! Listeners are kept in registration order. Each registration gets a
//! monotonically increasing sequence number that doubles as its
//! [`Subscription`] handle and as its ordering key, so removal is by identity
//! and never confuses two structurally equal callbacks.

use crate::core::{Action, Context, State, TransitionKind};
use std::collections::BTreeMap;
use thiserror::Error;

/// Which transitions a listener wants to hear about.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerFilter<A> {
    /// Every dispatch, undo and redo.
    All,
    /// Dispatches of one action.
    Action(A),
    /// Undo transitions.
    Undo,
    /// Redo transitions.
    Redo,
}

impl<A: Action> ListenerFilter<A> {
    /// Check whether a transition passes this filter (pure).
    pub fn matches<P>(&self, context: &Context<A, P>) -> bool {
        match self {
            Self::All => true,
            Self::Action(action) => {
                context.kind == TransitionKind::Dispatch && context.action.as_ref() == Some(action)
            }
            Self::Undo => context.kind == TransitionKind::Undo,
            Self::Redo => context.kind == TransitionKind::Redo,
        }
    }
}

/// Failure reported by a fallible listener.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Handle identifying one registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(u64);

/// Type alias for stored listener callbacks.
pub(crate) type Listener<S, A, P> = Box<dyn FnMut(&S, &Context<A, P>) -> Result<(), ListenerError>>;

struct Entry<S, A, P> {
    filter: ListenerFilter<A>,
    callback: Listener<S, A, P>,
}

/// Ordered registry of listeners owned by one store.
pub(crate) struct ListenerRegistry<S, A, P> {
    entries: BTreeMap<u64, Entry<S, A, P>>,
    next_id: u64,
}

impl<S: State, A: Action, P> ListenerRegistry<S, A, P> {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub(crate) fn insert(
        &mut self,
        filter: ListenerFilter<A>,
        callback: Listener<S, A, P>,
    ) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(id, Entry { filter, callback });
        Subscription(id)
    }

    /// Remove a registration. Returns `false` if it was already gone.
    pub(crate) fn remove(&mut self, subscription: Subscription) -> bool {
        self.entries.remove(&subscription.0).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Call every matching listener in registration order.
    ///
    /// Each listener gets its own clone of `state`, so nothing a listener
    /// does can reach the caller's value, even through interior mutability.
    /// Stops at the first listener error. Returns how many listeners ran
    /// successfully.
    pub(crate) fn notify(
        &mut self,
        state: &S,
        context: &Context<A, P>,
    ) -> Result<usize, ListenerError> {
        let mut notified = 0;
        for entry in self.entries.values_mut() {
            if entry.filter.matches(context) {
                let snapshot = state.clone();
                (entry.callback)(&snapshot, context)?;
                notified += 1;
            }
        }
        Ok(notified)
    }
}
