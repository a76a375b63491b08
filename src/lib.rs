//! Hindsight: a reactive state container with undo/redo
//!
//! Callers register handlers for a closed set of actions, dispatch actions
//! with payloads to produce new states, observe every transition through
//! subscriptions, and move backward and forward through the full history.
//!
//! # Core Concepts
//!
//! - **State**: Any cloneable, serializable record; the store never inspects it
//! - **Actions**: Typed identifiers bound to draft-mutating handlers
//! - **Drafts**: Scratch copies that become the next state only on success
//! - **History**: Past and future snapshot stacks driving undo and redo
//! - **Listeners**: Ordered callbacks filtered by action, undo, redo or all
//!
//! # Example
//!
//! ```rust
//! use hindsight::action_enum;
//! use hindsight::store::{ListenerFilter, Store};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct Counter {
//!     count: i64,
//! }
//!
//! action_enum! {
//!     enum CounterAction {
//!         Increment => "increment",
//!     }
//! }
//!
//! let mut store = Store::builder()
//!     .initial(Counter { count: 0 })
//!     .on(CounterAction::Increment, |draft, _: &()| draft.count += 1)
//!     .build()
//!     .unwrap();
//!
//! store.subscribe(ListenerFilter::Undo, |state: &Counter, _| {
//!     assert_eq!(state.count, 2);
//! });
//!
//! for _ in 0..3 {
//!     store.dispatch(CounterAction::Increment, ()).unwrap();
//! }
//! assert_eq!(store.history().past().len(), 3);
//!
//! assert!(store.undo().unwrap());
//! assert_eq!(store.history().future(), vec![Counter { count: 3 }]);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, StoreBuilder};
pub use config::StoreConfig;
pub use crate::core::{Action, Context, Draft, History, State, TransitionKind};
pub use store::{ListenerFilter, Store, StoreError, Subscription};
