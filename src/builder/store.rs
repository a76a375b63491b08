//! Builder for constructing stores.

use crate::builder::error::{BuildError, BuildErrors};
use crate::config::StoreConfig;
use crate::core::{Action, Draft, State};
use crate::store::{Handler, HandlerError, HandlerTable, Store};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing stores with a fluent API.
///
/// Registration problems are not reported one at a time: `build()` collects
/// every problem and returns them together.
pub struct StoreBuilder<S: State, A: Action, P> {
    initial: Option<S>,
    handlers: Vec<(A, Handler<S, P>)>,
    config: StoreConfig,
}

impl<S: State, A: Action, P: 'static> StoreBuilder<S, A, P> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            handlers: Vec::new(),
            config: StoreConfig::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register an infallible handler for `action`.
    pub fn on<F>(self, action: A, handler: F) -> Self
    where
        F: Fn(&mut Draft<S>, &P) + 'static,
    {
        self.try_on(action, move |draft: &mut Draft<S>, payload: &P| {
            handler(draft, payload);
            Ok(())
        })
    }

    /// Register a handler that can reject a dispatch.
    pub fn try_on<F>(mut self, action: A, handler: F) -> Self
    where
        F: Fn(&mut Draft<S>, &P) -> Result<(), HandlerError> + 'static,
    {
        self.handlers.push((action, Box::new(handler)));
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Keep at most `limit` past snapshots.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Build the store.
    /// Returns every validation problem if any are found.
    pub fn build(self) -> Result<Store<S, A, P>, BuildErrors> {
        let mut table: HashMap<A, Handler<S, P>> = HashMap::with_capacity(self.handlers.len());
        let mut duplicates: Vec<A> = Vec::new();
        for (action, handler) in self.handlers {
            if table.contains_key(&action) {
                if !duplicates.contains(&action) {
                    duplicates.push(action);
                }
                continue;
            }
            table.insert(action, handler);
        }

        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();
        checks.push(match self.initial {
            Some(_) => Validation::success(()),
            None => Validation::fail(BuildError::MissingInitialState),
        });
        for action in &duplicates {
            checks.push(Validation::fail(BuildError::DuplicateHandler {
                action: action.name().to_string(),
            }));
        }
        checks.push(self.config.validate());

        if let Validation::Failure(errors) = Validation::all_vec(checks) {
            return Err(BuildErrors::new(errors.iter().cloned().collect()));
        }

        let initial = self
            .initial
            .ok_or_else(|| BuildErrors::new(vec![BuildError::MissingInitialState]))?;

        Ok(Store::from_parts(
            initial,
            HandlerTable::new(table),
            &self.config,
        ))
    }
}

impl<S: State, A: Action, P: 'static> Default for StoreBuilder<S, A, P> {
    fn default() -> Self {
        Self::new()
    }
}
