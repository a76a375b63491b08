//! Store configuration.
//!
//! Configuration is a plain serde record so it can be embedded in an
//! application's own settings file and handed to the builder.

use crate::builder::BuildError;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Errors loading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid store configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for a store.
///
/// # Example
///
/// ```rust
/// use hindsight::config::StoreConfig;
///
/// let config = StoreConfig::from_json(r#"{ "history_limit": 50 }"#).unwrap();
/// assert_eq!(config.history_limit, Some(50));
///
/// assert_eq!(StoreConfig::default().history_limit, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of past snapshots kept. `None` keeps everything.
    pub history_limit: Option<usize>,
}

impl StoreConfig {
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history_limit: Some(limit),
        }
    }

    /// Parse a JSON configuration document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the configuration, accumulating every problem.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        match self.history_limit {
            Some(0) => Validation::fail(BuildError::InvalidHistoryLimit),
            _ => Validation::success(()),
        }
    }
}
