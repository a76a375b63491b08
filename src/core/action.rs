//! Typed action identifiers.
//!
//! Actions name the mutations a store understands. They are a closed set of
//! values (usually a fieldless enum), so an unknown action is caught at the
//! boundary instead of travelling through an open string space.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for action identifiers.
///
/// Use the [`action_enum!`](crate::action_enum) macro to derive it for a
/// plain enum.
///
/// # Example
///
/// ```rust
/// use hindsight::core::Action;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum CounterAction {
///     Increment,
///     Reset,
/// }
///
/// impl Action for CounterAction {
///     fn name(&self) -> &str {
///         match self {
///             Self::Increment => "increment",
///             Self::Reset => "reset",
///         }
///     }
///
///     fn from_name(name: &str) -> Option<Self> {
///         match name {
///             "increment" => Some(Self::Increment),
///             "reset" => Some(Self::Reset),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(CounterAction::from_name("reset"), Some(CounterAction::Reset));
/// assert_eq!(CounterAction::Increment.name(), "increment");
/// ```
pub trait Action: Clone + Eq + Hash + Debug + 'static {
    /// Name reported in contexts, errors and logs.
    fn name(&self) -> &str;

    /// Resolve a name back into an action, if it denotes one.
    fn from_name(name: &str) -> Option<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TodoAction {
        Add,
        Remove,
    }

    impl Action for TodoAction {
        fn name(&self) -> &str {
            match self {
                Self::Add => "add",
                Self::Remove => "remove",
            }
        }

        fn from_name(name: &str) -> Option<Self> {
            match name {
                "add" => Some(Self::Add),
                "remove" => Some(Self::Remove),
                _ => None,
            }
        }
    }

    #[test]
    fn name_and_from_name_agree() {
        for action in [TodoAction::Add, TodoAction::Remove] {
            assert_eq!(TodoAction::from_name(action.name()), Some(action.clone()));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(TodoAction::from_name("clear"), None);
        assert_eq!(TodoAction::from_name(""), None);
    }
}
