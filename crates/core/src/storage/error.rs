use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while storing or reading hands.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandStoreError {
    #[error("Serialization error on '{attribute}': {reason}")]
    Serialization {
        attribute: &'static str,
        reason: String,
    },
    #[error("Could not build key condition: {0}")]
    ExpressionBuild(String),
    #[error("Query failed: {message}")]
    QueryExecution { message: String, retryable: bool },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    #[error("Write failed: {message}")]
    Write { message: String, retryable: bool },
    /// The caller stopped waiting. The operation may or may not have applied.
    #[error("{operation} timed out after {}ms, outcome unknown", .timeout.as_millis())]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },
    #[error("Background task failed: {0}")]
    TaskFailed(String),
}

impl HandStoreError {
    /// Returns true for a bounded operation that ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, HandStoreError::Timeout { .. })
    }

    /// A Query failure that is not expected to clear on its own.
    pub fn query(message: impl Into<String>) -> Self {
        HandStoreError::QueryExecution {
            message: message.into(),
            retryable: false,
        }
    }

    /// A Query failure that may clear on a later attempt.
    pub fn query_retryable(message: impl Into<String>) -> Self {
        HandStoreError::QueryExecution {
            message: message.into(),
            retryable: true,
        }
    }

    /// A write failure that is not expected to clear on its own.
    pub fn write(message: impl Into<String>) -> Self {
        HandStoreError::Write {
            message: message.into(),
            retryable: false,
        }
    }

    /// A write failure that may clear on a later attempt.
    pub fn write_retryable(message: impl Into<String>) -> Self {
        HandStoreError::Write {
            message: message.into(),
            retryable: true,
        }
    }

    /// Returns true when repeating the call later may succeed.
    ///
    /// Retrying is left to callers; nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            HandStoreError::Timeout { .. } => true,
            HandStoreError::QueryExecution { retryable, .. }
            | HandStoreError::Write { retryable, .. } => *retryable,
            _ => false,
        }
    }
}

/// Result type for hand store operations.
pub type Result<T> = std::result::Result<T, HandStoreError>;
