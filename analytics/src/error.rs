//! Analytics-specific error types
//!
//! Absence (unknown legislator, too few shared votes) is never an error here;
//! it is carried as `Option` or filtered out by the engine.

use shared::SharedError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Vote store failed during {operation}: {message}")]
    DataStore { operation: String, message: String },

    #[error("Vote store timed out during {operation} after {timeout:?}")]
    StoreTimeout { operation: String, timeout: Duration },

    #[error("Malformed vote data: {message}")]
    MalformedData { message: String },

    #[error("Configuration error: {field}: {message}")]
    ConfigurationError { field: String, message: String },

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalyticsError {
    pub fn data_store(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataStore {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedData {
            message: message.into(),
        }
    }

    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the failure came from reading vote data, as opposed to startup configuration
    pub fn is_data_store_failure(&self) -> bool {
        !matches!(self, Self::ConfigurationError { .. })
    }
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
