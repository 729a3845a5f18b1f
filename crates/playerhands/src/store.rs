//! Caller-facing hand store.
//!
//! Every call goes through [`run_bounded`], so callers never wait longer than
//! the configured timeout. A
//! [`HandStoreError::Timeout`](playerhands_core::storage::HandStoreError::Timeout) means the outcome is
//! unknown: a write may still land afterwards.

use std::sync::Arc;

use playerhands_core::hand::{self, HandRecord};
use playerhands_core::storage::{run_bounded, BoundedConfig, HandRepository, Result};

/// Bounded access to a hand repository.
#[derive(Clone)]
pub struct HandStore {
    repository: Arc<dyn HandRepository>,
    bounded: BoundedConfig,
}

impl std::fmt::Debug for HandStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandStore")
            .field("bounded", &self.bounded)
            .finish_non_exhaustive()
    }
}

impl HandStore {
    /// Creates a store over `repository` with the default 3 second timeout.
    pub fn new(repository: impl HandRepository + 'static) -> Self {
        Self::from_arc(Arc::new(repository))
    }

    /// Creates a store over a shared repository.
    pub fn from_arc(repository: Arc<dyn HandRepository>) -> Self {
        Self {
            repository,
            bounded: BoundedConfig::default(),
        }
    }

    /// Sets the timeout settings applied to every call.
    pub fn with_bounded(mut self, bounded: BoundedConfig) -> Self {
        self.bounded = bounded;
        self
    }

    /// Stores a hand, replacing any hand with the same version and player id.
    pub async fn add_hand(&self, hand: &HandRecord) -> Result<()> {
        let repository = Arc::clone(&self.repository);
        let hand = hand.clone();

        run_bounded(self.bounded, "add_hand", async move {
            repository.put_hand(&hand).await
        })
        .await
    }

    /// Returns every hand stored under `version`.
    ///
    /// An empty partition yields an empty list. On any error no hands are
    /// returned.
    pub async fn query_hands(&self, version: &str) -> Result<Vec<HandRecord>> {
        let repository = Arc::clone(&self.repository);
        let version = version.to_string();

        run_bounded(self.bounded, "query_hands", async move {
            repository.query_hands(&version).await
        })
        .await
    }

    /// Queries `version` and picks one hand uniformly at random.
    ///
    /// Returns `Ok(None)` when no hand is stored under `version`.
    pub async fn choose_hand(&self, version: &str) -> Result<Option<HandRecord>> {
        let hands = self.query_hands(version).await?;
        Ok(hand::choose_hand(&hands).cloned())
    }
}
