//! Build errors for the store builder.

use thiserror::Error;

/// A single problem found while building a store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Handler for '{action}' registered more than once")]
    DuplicateHandler { action: String },

    #[error("History limit must be at least 1. Use no limit for unbounded history")]
    InvalidHistoryLimit,
}

/// Every problem found by one `build()` call.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Store build failed: {}", join(.errors))]
pub struct BuildErrors {
    errors: Vec<BuildError>,
}

impl BuildErrors {
    pub(crate) fn new(errors: Vec<BuildError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[BuildError] {
        &self.errors
    }

    pub fn contains(&self, error: &BuildError) -> bool {
        self.errors.contains(error)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn join(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_error() {
        let errors = BuildErrors::new(vec![
            BuildError::MissingInitialState,
            BuildError::DuplicateHandler {
                action: "add".to_string(),
            },
        ]);

        let message = errors.to_string();
        assert!(message.starts_with("Store build failed: Initial state not specified"));
        assert!(message.contains("Handler for 'add' registered more than once"));
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&BuildError::MissingInitialState));
        assert!(!errors.contains(&BuildError::InvalidHistoryLimit));
    }
}
