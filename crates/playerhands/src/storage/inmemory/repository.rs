//! In-memory repository implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use playerhands_core::hand::{validate_partition_key, CompositeKey, HandRecord};
use playerhands_core::storage::{HandRepository, Result};

/// Partition key -> (sort key -> hand). Sort keys iterate in ascending order,
/// like a DynamoDB Query.
type Partitions = HashMap<String, BTreeMap<String, HandRecord>>;

/// In-memory hand storage for testing.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHandRepository {
    partitions: Arc<RwLock<Partitions>>,
}

impl InMemoryHandRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of stored hands.
    pub async fn len(&self) -> usize {
        self.partitions.read().await.values().map(BTreeMap::len).sum()
    }

    /// Returns true when no hand is stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl HandRepository for InMemoryHandRepository {
    async fn put_hand(&self, hand: &HandRecord) -> Result<()> {
        let key = CompositeKey::from_record(hand)?;

        let mut partitions = self.partitions.write().await;
        partitions
            .entry(key.version)
            .or_default()
            .insert(key.player_id, hand.clone());
        Ok(())
    }

    async fn query_hands(&self, version: &str) -> Result<Vec<HandRecord>> {
        validate_partition_key(version)?;

        let partitions = self.partitions.read().await;
        Ok(partitions
            .get(version)
            .map(|hands| hands.values().cloned().collect())
            .unwrap_or_default())
    }
}
