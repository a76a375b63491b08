//! Bound trait for values held by a store.
//!
//! The engine never inspects state; it only clones it, replaces it and hands
//! it to handlers and listeners. Any serializable record qualifies.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for store state values.
///
/// Implemented automatically for every type meeting the bounds, so callers
/// only need the derives.
///
/// # Required Traits
///
/// - `Clone`: snapshots for history and drafts are clones
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: history can be persisted by the caller
///
/// # Example
///
/// ```rust
/// use hindsight::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Default, Serialize, Deserialize)]
/// struct Counter {
///     count: i64,
/// }
///
/// fn assert_state<S: State>() {}
/// assert_state::<Counter>();
/// ```
pub trait State: Clone + Debug + Serialize + for<'de> Deserialize<'de> + 'static {}

impl<T> State for T where T: Clone + Debug + Serialize + for<'de> Deserialize<'de> + 'static {}
