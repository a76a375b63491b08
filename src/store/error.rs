//! Store operation errors.

use crate::core::TransitionKind;
use crate::store::handler::HandlerError;
use crate::store::listener::ListenerError;
use thiserror::Error;

/// Errors that can occur during dispatch, undo and redo.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// No handler is registered under this name. Nothing was changed.
    #[error("Unknown action '{name}'")]
    UnknownAction { name: String },

    /// The handler rejected the dispatch. Nothing was changed.
    #[error("Handler for '{action}' failed: {source}")]
    HandlerFailed {
        action: String,
        #[source]
        source: HandlerError,
    },

    /// A listener failed after the transition had already committed.
    #[error("Listener failed during {kind} notification: {source}")]
    ListenerFailed {
        kind: TransitionKind,
        #[source]
        source: ListenerError,
    },
}

impl StoreError {
    /// Whether the triggering transition took effect despite the error.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::ListenerFailed { .. })
    }
}
