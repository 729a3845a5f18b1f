//! Bounded storage operations.
//!
//! Every storage call runs as its own tokio task and races a timer. The caller
//! waits at most [`BoundedConfig::timeout`]. What happens to the task after the
//! timer wins is controlled by [`OnTimeout`].

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use super::{HandStoreError, Result};

/// Default wait for a single storage operation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// What to do with an operation whose caller stopped waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnTimeout {
    /// Leave the task running. A write may still land after the caller got
    /// [`HandStoreError::Timeout`].
    #[default]
    Detach,
    /// Abort the task, dropping the in-flight request. A request the backend
    /// already received may still apply.
    Abort,
}

impl FromStr for OnTimeout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "detach" => Ok(OnTimeout::Detach),
            "abort" => Ok(OnTimeout::Abort),
            other => Err(format!("expected 'detach' or 'abort', got '{other}'")),
        }
    }
}

/// Timeout settings shared by every bounded call of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedConfig {
    pub timeout: Duration,
    pub on_timeout: OnTimeout,
}

impl Default for BoundedConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            on_timeout: OnTimeout::default(),
        }
    }
}

impl BoundedConfig {
    /// Creates a config with the given timeout and the default policy.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Sets the policy applied to timed-out operations.
    pub fn with_on_timeout(mut self, on_timeout: OnTimeout) -> Self {
        self.on_timeout = on_timeout;
        self
    }
}

/// Runs `operation` on a background task and waits for it at most
/// `config.timeout`.
///
/// Returns the operation's own result when it finishes in time. Otherwise
/// returns [`HandStoreError::Timeout`], whatever the operation does later.
/// Nothing is retried.
pub async fn run_bounded<F, T>(config: BoundedConfig, operation: &'static str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    let mut handle = tokio::spawn(fut);

    match tokio::time::timeout(config.timeout, &mut handle).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => {
            tracing::error!(operation, error = %join_err, "Bounded operation task failed");
            Err(HandStoreError::TaskFailed(join_err.to_string()))
        }
        Err(_) => {
            let timeout_ms = config.timeout.as_millis() as u64;
            match config.on_timeout {
                OnTimeout::Detach => {
                    tracing::warn!(
                        operation,
                        timeout_ms,
                        "Operation timed out and was left running, it may still complete"
                    );
                }
                OnTimeout::Abort => {
                    handle.abort();
                    tracing::warn!(operation, timeout_ms, "Operation timed out and was aborted");
                }
            }
            Err(HandStoreError::Timeout {
                operation,
                timeout: config.timeout,
            })
        }
    }
}
