use async_trait::async_trait;

use crate::hand::HandRecord;

use super::Result;

/// Storage seam for hand records.
///
/// Implementations must be safe to share between concurrent callers. They do
/// not apply timeouts themselves; callers wrap them with
/// [`run_bounded`](super::run_bounded).
#[async_trait]
pub trait HandRepository: Send + Sync {
    /// Writes a hand, replacing any stored hand with the same key.
    async fn put_hand(&self, hand: &HandRecord) -> Result<()>;

    /// Returns every hand stored under `version`.
    async fn query_hands(&self, version: &str) -> Result<Vec<HandRecord>>;
}
