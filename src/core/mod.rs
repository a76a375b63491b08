//! Core store types.
//!
//! This module contains the pure data model of the store:
//! - State and action bounds via the `State` and `Action` traits
//! - Drafts, the scratch copies handlers mutate
//! - Undo/redo history stacks
//! - Context records describing each transition
//!
//! Nothing here performs notification or holds handlers; that is the job of
//! the `store` module.

mod action;
mod context;
mod draft;
mod history;
mod state;

pub use action::Action;
pub use context::{Context, TransitionKind};
pub use draft::Draft;
pub use history::History;
pub use state::State;
