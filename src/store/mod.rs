//! The store engine.
//!
//! This module is the imperative shell around the `core` data model:
//! it owns the current state, runs handlers against drafts, keeps the
//! undo/redo stacks and notifies listeners.
//!
//! # Key Concepts
//!
//! - **Handlers**: fixed table from action to draft mutation
//! - **Listeners**: ordered registry filtered by action, undo, redo or all
//! - **Atomic dispatch**: nothing is committed until the handler succeeds

mod engine;
mod error;
mod handler;
mod listener;

pub use engine::Store;
pub use error::StoreError;
pub(crate) use handler::Handler;
pub use handler::{HandlerError, HandlerTable};
pub use listener::{ListenerError, ListenerFilter, Subscription};
