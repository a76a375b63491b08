//! Undo/redo history stacks.
//!
//! `History` holds snapshots of superseded states (`past`) and of states that
//! were undone (`future`). Every entry is an owned clone; nothing in either
//! stack aliases the current state or another entry.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Past and future snapshot stacks.
///
/// `past` runs oldest to most recent and ends just before the current state.
/// `future` is stored with the nearest redo target on top, and reported
/// nearest to furthest by [`History::future`].
///
/// # Example
///
/// ```rust
/// use hindsight::core::History;
///
/// let mut history: History<i32> = History::new();
/// let mut current = 0;
///
/// for next in 1..=3 {
///     history.record(current);
///     current = next;
/// }
/// assert_eq!(history.past(), vec![0, 1, 2]);
///
/// assert!(history.undo(&mut current));
/// assert_eq!(current, 2);
/// assert_eq!(history.future(), vec![3]);
///
/// assert!(history.redo(&mut current));
/// assert_eq!(current, 3);
/// assert!(history.future().is_empty());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "", from = "HistoryParts<S>")]
pub struct History<S: State> {
    past: Vec<S>,
    future: Vec<S>,
    limit: Option<usize>,
}

/// Serialized form of [`History`], re-checked against its limit on load.
#[derive(Deserialize)]
#[serde(bound = "")]
struct HistoryParts<S: State> {
    past: Vec<S>,
    future: Vec<S>,
    limit: Option<usize>,
}

impl<S: State> From<HistoryParts<S>> for History<S> {
    fn from(parts: HistoryParts<S>) -> Self {
        let mut history = Self {
            past: parts.past,
            future: parts.future,
            limit: parts.limit,
        };
        history.enforce_limit();
        history
    }
}

impl<S: State> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> History<S> {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// Create an empty history keeping at most `limit` past snapshots.
    ///
    /// `None` means unbounded. When the limit is reached the oldest
    /// snapshot is discarded first.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            limit,
        }
    }

    /// Record the state being superseded by a new dispatch.
    ///
    /// Pushes `previous` onto `past` and discards every redo entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hindsight::core::History;
    ///
    /// let mut history = History::new();
    /// let mut current = "b".to_string();
    /// history.record("a".to_string());
    /// history.undo(&mut current);
    /// assert_eq!(history.future_len(), 1);
    ///
    /// history.record(current.clone());
    /// assert_eq!(history.future_len(), 0);
    /// ```
    pub fn record(&mut self, previous: S) {
        self.future.clear();
        self.push_past(previous);
    }

    /// Step back one snapshot.
    ///
    /// Moves `current` onto the front of `future` and replaces it with the
    /// most recent `past` entry. Returns `false` without touching anything
    /// when `past` is empty.
    pub fn undo(&mut self, current: &mut S) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let undone = std::mem::replace(current, previous);
        self.future.push(undone);
        true
    }

    /// Step forward one snapshot.
    ///
    /// Moves `current` onto `past` and replaces it with the nearest `future`
    /// entry. Returns `false` without touching anything when `future` is
    /// empty.
    pub fn redo(&mut self, current: &mut S) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        let superseded = std::mem::replace(current, next);
        self.push_past(superseded);
        true
    }

    /// Copies of the past snapshots, oldest first.
    pub fn past(&self) -> Vec<S> {
        self.past.clone()
    }

    /// Copies of the future snapshots, nearest redo target first.
    pub fn future(&self) -> Vec<S> {
        self.future.iter().rev().cloned().collect()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Maximum number of past snapshots kept, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Drop every snapshot in both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    fn push_past(&mut self, state: S) {
        self.past.push(state);
        self.enforce_limit();
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            if self.past.len() > limit {
                let excess = self.past.len() - limit;
                self.past.drain(..excess);
            }
        }
    }
}
