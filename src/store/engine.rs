//! Store engine: dispatch, subscriptions and undo/redo.

use crate::builder::StoreBuilder;
use crate::config::StoreConfig;
use crate::core::{Action, Context, Draft, History, State, TransitionKind};
use crate::store::error::StoreError;
use crate::store::handler::HandlerTable;
use crate::store::listener::{ListenerError, ListenerFilter, ListenerRegistry, Subscription};
use tracing::{debug, trace};

/// Reactive state container with undo/redo history.
///
/// The store owns the only authoritative copy of the state. Callers and
/// listeners only ever see copies of it, change it only by dispatching
/// actions, and observe changes through subscriptions.
///
/// # Example
///
/// ```rust
/// use hindsight::action_enum;
/// use hindsight::store::{ListenerFilter, Store};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// struct Counter { count: i64 }
///
/// action_enum! {
///     enum CounterAction {
///         Increment => "increment",
///     }
/// }
///
/// let mut store = Store::builder()
///     .initial(Counter { count: 0 })
///     .on(CounterAction::Increment, |draft, by: &i64| draft.count += by)
///     .build()
///     .unwrap();
///
/// store.subscribe(ListenerFilter::All, |state: &Counter, ctx| {
///     println!("{:?} -> {}", ctx.kind, state.count);
/// });
///
/// store.dispatch(CounterAction::Increment, 2).unwrap();
/// assert_eq!(store.get_state(), Counter { count: 2 });
///
/// assert!(store.undo().unwrap());
/// assert_eq!(store.get_state().count, 0);
/// ```
pub struct Store<S: State, A: Action, P> {
    current: S,
    handlers: HandlerTable<S, A, P>,
    listeners: ListenerRegistry<S, A, P>,
    history: History<S>,
}

impl<S: State, A: Action, P: 'static> Store<S, A, P> {
    /// Start building a store.
    pub fn builder() -> StoreBuilder<S, A, P> {
        StoreBuilder::new()
    }

    pub(crate) fn from_parts(
        initial: S,
        handlers: HandlerTable<S, A, P>,
        config: &StoreConfig,
    ) -> Self {
        Self {
            current: initial,
            handlers,
            listeners: ListenerRegistry::new(),
            history: History::with_limit(config.history_limit),
        }
    }

    /// Independent copy of the current state.
    pub fn get_state(&self) -> S {
        self.current.clone()
    }

    /// Borrow the undo/redo history.
    ///
    /// Use [`History::past`] and [`History::future`] for owned copies.
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    pub fn handlers(&self) -> &HandlerTable<S, A, P> {
        &self.handlers
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Apply the handler registered for `action` to a draft of the state.
    ///
    /// The handler runs before anything is committed. Only when it succeeds
    /// is the previous state pushed onto `past`, `future` cleared and the
    /// draft made current. Listeners filtered on `action` or on all
    /// transitions are then notified in subscription order.
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnknownAction`] if no handler is registered; nothing changes.
    /// - [`StoreError::HandlerFailed`] if the handler fails; nothing changes.
    /// - [`StoreError::ListenerFailed`] if a listener fails; the dispatch has
    ///   already committed and later listeners are skipped.
    pub fn dispatch(&mut self, action: A, payload: P) -> Result<(), StoreError> {
        let handler = self
            .handlers
            .get(&action)
            .ok_or_else(|| StoreError::UnknownAction {
                name: action.name().to_string(),
            })?;

        let mut draft = Draft::new(&self.current);
        handler(&mut draft, &payload).map_err(|source| StoreError::HandlerFailed {
            action: action.name().to_string(),
            source,
        })?;

        let previous = std::mem::replace(&mut self.current, draft.into_inner());
        self.history.record(previous);

        debug!(
            action = action.name(),
            past = self.history.past_len(),
            "dispatched"
        );

        self.notify(Context::dispatch(action, payload))
    }

    /// Dispatch by action name.
    ///
    /// Names that do not resolve to an action, or resolve to one without a
    /// handler, fail with [`StoreError::UnknownAction`] and change nothing.
    pub fn dispatch_named(&mut self, name: &str, payload: P) -> Result<(), StoreError> {
        let action = A::from_name(name).ok_or_else(|| StoreError::UnknownAction {
            name: name.to_string(),
        })?;
        self.dispatch(action, payload)
    }

    /// Step back to the previous state.
    ///
    /// Returns `Ok(false)` with no side effects when there is nothing to
    /// undo. Otherwise notifies listeners filtered on undo or on all
    /// transitions and returns `Ok(true)`.
    pub fn undo(&mut self) -> Result<bool, StoreError> {
        if !self.history.undo(&mut self.current) {
            return Ok(false);
        }
        debug!(
            past = self.history.past_len(),
            future = self.history.future_len(),
            "undo"
        );
        self.notify(Context::undo())?;
        Ok(true)
    }

    /// Step forward to the next undone state.
    ///
    /// Returns `Ok(false)` with no side effects when there is nothing to
    /// redo. Otherwise notifies listeners filtered on redo or on all
    /// transitions and returns `Ok(true)`.
    pub fn redo(&mut self) -> Result<bool, StoreError> {
        if !self.history.redo(&mut self.current) {
            return Ok(false);
        }
        debug!(
            past = self.history.past_len(),
            future = self.history.future_len(),
            "redo"
        );
        self.notify(Context::redo())?;
        Ok(true)
    }

    /// Drop all undo/redo history, keeping the current state.
    pub fn clear_history(&mut self) {
        self.history.clear();
        debug!("history cleared");
    }

    /// Register a listener.
    ///
    /// The listener receives its own copy of the new state and the
    /// transition context. Returns a handle for [`Store::unsubscribe`].
    pub fn subscribe<F>(&mut self, filter: ListenerFilter<A>, mut listener: F) -> Subscription
    where
        F: FnMut(&S, &Context<A, P>) + 'static,
    {
        self.try_subscribe(filter, move |state: &S, context: &Context<A, P>| {
            listener(state, context);
            Ok(())
        })
    }

    /// Register a listener that can fail.
    ///
    /// A failure stops the remaining listeners of that round and is returned
    /// from the triggering operation as [`StoreError::ListenerFailed`].
    pub fn try_subscribe<F>(&mut self, filter: ListenerFilter<A>, listener: F) -> Subscription
    where
        F: FnMut(&S, &Context<A, P>) -> Result<(), ListenerError> + 'static,
    {
        let subscription = self.listeners.insert(filter, Box::new(listener));
        trace!(?subscription, listeners = self.listeners.len(), "subscribed");
        subscription
    }

    /// Remove exactly one registration.
    ///
    /// Returns `false` if it was already removed; never affects other
    /// registrations.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let removed = self.listeners.remove(subscription);
        if removed {
            trace!(?subscription, listeners = self.listeners.len(), "unsubscribed");
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, context: Context<A, P>) -> Result<(), StoreError> {
        let kind: TransitionKind = context.kind;
        let notified = self
            .listeners
            .notify(&self.current, &context)
            .map_err(|source| StoreError::ListenerFailed { kind, source })?;
        trace!(%kind, notified, "listeners notified");
        Ok(())
    }
}
