//! Scratch copies handed to handlers.

use super::state::State;
use std::ops::{Deref, DerefMut};

/// Mutable scratch copy of the current state.
///
/// A draft owns a clone taken at the start of a dispatch. Handlers edit it
/// through `DerefMut`; the store commits it with [`Draft::into_inner`] only
/// after the handler returns successfully. A draft never aliases the stored
/// state, so a failed handler leaves nothing behind.
///
/// # Example
///
/// ```rust
/// use hindsight::core::Draft;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// struct Counter { count: i64 }
///
/// let current = Counter { count: 1 };
/// let mut draft = Draft::new(&current);
/// draft.count += 1;
///
/// assert!(draft.is_modified());
/// assert_eq!(draft.into_inner(), Counter { count: 2 });
/// assert_eq!(current, Counter { count: 1 });
/// ```
#[derive(Debug)]
pub struct Draft<S: State> {
    value: S,
    modified: bool,
}

impl<S: State> Draft<S> {
    /// Start a draft from a copy of `state`.
    pub fn new(state: &S) -> Self {
        Self {
            value: state.clone(),
            modified: false,
        }
    }

    /// Whether the draft has been mutably accessed.
    ///
    /// Conservative: a mutable borrow that writes nothing still counts.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Replace the whole draft value.
    pub fn replace(&mut self, value: S) -> S {
        self.modified = true;
        std::mem::replace(&mut self.value, value)
    }

    /// Finalize the draft into the committed value.
    pub fn into_inner(self) -> S {
        self.value
    }
}

impl<S: State> Deref for Draft<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.value
    }
}

impl<S: State> DerefMut for Draft<S> {
    fn deref_mut(&mut self) -> &mut S {
        self.modified = true;
        &mut self.value
    }
}
