//! Macros for ergonomic store construction.

/// Generate an `Action` implementation for a fieldless enum.
///
/// Each variant's action name defaults to the variant identifier and can be
/// overridden with `=> "name"`.
///
/// # Example
///
/// ```
/// use hindsight::action_enum;
/// use hindsight::core::Action;
///
/// action_enum! {
///     pub enum TodoAction {
///         Add => "add",
///         Toggle => "toggle",
///         ClearCompleted,
///     }
/// }
///
/// assert_eq!(TodoAction::Add.name(), "add");
/// assert_eq!(TodoAction::ClearCompleted.name(), "ClearCompleted");
/// assert_eq!(TodoAction::from_name("toggle"), Some(TodoAction::Toggle));
/// assert_eq!(TodoAction::from_name("Toggle"), None);
/// ```
#[macro_export]
macro_rules! action_enum {
    (@name $variant:ident) => {
        stringify!($variant)
    };
    (@name $variant:ident $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Action for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::action_enum!(@name $variant $($label)?)),*
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                $(
                    if name == $crate::action_enum!(@name $variant $($label)?) {
                        return Some(Self::$variant);
                    }
                )*
                None
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Action;

    action_enum! {
        enum EditorAction {
            Insert => "insert",
            Delete => "delete",
            SelectAll,
        }
    }

    #[test]
    fn action_enum_macro_generates_trait() {
        assert_eq!(EditorAction::Insert.name(), "insert");
        assert_eq!(EditorAction::Delete.name(), "delete");
        assert_eq!(EditorAction::SelectAll.name(), "SelectAll");
    }

    #[test]
    fn from_name_round_trips_labels() {
        for action in [
            EditorAction::Insert,
            EditorAction::Delete,
            EditorAction::SelectAll,
        ] {
            assert_eq!(EditorAction::from_name(action.name()), Some(action));
        }
        assert_eq!(EditorAction::from_name("Insert"), None);
    }

    #[test]
    fn action_enum_supports_visibility() {
        action_enum! {
            pub enum PublicAction {
                A,
                B,
            }
        }

        assert_eq!(PublicAction::from_name("B"), Some(PublicAction::B));
    }
}
