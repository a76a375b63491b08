//! Mutation handlers and the fixed handler table.

use crate::core::{Action, Draft, State};
use std::collections::HashMap;
use thiserror::Error;

/// Failure reported by a handler while mutating its draft.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Type alias for handler functions.
///
/// A handler receives a draft of the current state and the dispatch payload.
/// Its edits become the next state only if it returns `Ok`.
pub(crate) type Handler<S, P> = Box<dyn Fn(&mut Draft<S>, &P) -> Result<(), HandlerError>>;

/// Mapping from action to handler, fixed once the store is built.
pub struct HandlerTable<S: State, A: Action, P> {
    handlers: HashMap<A, Handler<S, P>>,
}

impl<S: State, A: Action, P> HandlerTable<S, A, P> {
    pub(crate) fn new(handlers: HashMap<A, Handler<S, P>>) -> Self {
        Self { handlers }
    }

    pub(crate) fn get(&self, action: &A) -> Option<&Handler<S, P>> {
        self.handlers.get(action)
    }

    pub fn contains(&self, action: &A) -> bool {
        self.handlers.contains_key(action)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered actions, in no particular order.
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.handlers.keys()
    }
}
