//! Builder API for ergonomic store construction.
//!
//! This module provides the fluent `StoreBuilder` and the `action_enum!`
//! macro for declaring action sets with minimal boilerplate while keeping
//! dispatch typed.

pub mod error;
pub mod macros;
pub mod store;

pub use error::{BuildError, BuildErrors};
pub use store::StoreBuilder;
