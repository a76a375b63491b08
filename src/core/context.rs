//! Per-transition context records delivered to listeners.

use super::action::Action;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What caused a state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransitionKind {
    Dispatch,
    Undo,
    Redo,
}

impl TransitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dispatch => "DISPATCH",
            Self::Undo => "UNDO",
            Self::Redo => "REDO",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient description of one transition.
///
/// Built once per dispatch, undo or redo and handed by reference to every
/// matching listener. `action` and `payload` are only present for
/// [`TransitionKind::Dispatch`].
///
/// # Example
///
/// ```rust
/// use hindsight::action_enum;
/// use hindsight::core::{Context, TransitionKind};
///
/// action_enum! {
///     enum Op {
///         Increment,
///     }
/// }
///
/// let ctx = Context::dispatch(Op::Increment, 5);
/// assert_eq!(ctx.kind, TransitionKind::Dispatch);
/// assert_eq!(ctx.method_name(), Some("Increment"));
/// assert_eq!(ctx.payload, Some(5));
///
/// let undo: Context<Op, i32> = Context::undo();
/// assert!(undo.method_name().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Context<A, P> {
    pub kind: TransitionKind,
    pub action: Option<A>,
    pub payload: Option<P>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl<A: Action, P> Context<A, P> {
    pub fn dispatch(action: A, payload: P) -> Self {
        Self::at(TransitionKind::Dispatch, Some(action), Some(payload))
    }

    pub fn undo() -> Self {
        Self::at(TransitionKind::Undo, None, None)
    }

    pub fn redo() -> Self {
        Self::at(TransitionKind::Redo, None, None)
    }

    /// Name of the dispatched action, if this is a dispatch.
    pub fn method_name(&self) -> Option<&str> {
        self.action.as_ref().map(Action::name)
    }

    fn at(kind: TransitionKind, action: Option<A>, payload: Option<P>) -> Self {
        Self {
            kind,
            action,
            payload,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
