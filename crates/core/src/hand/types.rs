use serde::{Deserialize, Serialize};

use crate::storage::{HandStoreError, Result};

/// Attribute name of the partition key.
pub const ATTR_VERSION: &str = "version";
/// Attribute name of the sort key.
pub const ATTR_PLAYER_ID: &str = "playerId";

/// DynamoDB limit for a partition key value, in UTF-8 bytes.
pub const MAX_PARTITION_KEY_BYTES: usize = 2048;
/// DynamoDB limit for a sort key value, in UTF-8 bytes.
pub const MAX_SORT_KEY_BYTES: usize = 1024;

/// A hand submitted by a player for a given game version.
///
/// `(version, player_id)` identifies the record. Writing a record with an
/// existing key replaces the stored one.
///
/// The payload (`player_name`, `cards`) is stored as submitted. Nothing checks
/// that the card ids exist or that the hand has a legal size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandRecord {
    pub version: String,
    pub player_id: String,
    pub player_name: String,
    pub cards: Vec<i64>,
}

impl HandRecord {
    /// Creates an empty hand for the given version and player.
    pub fn new(version: impl Into<String>, player_id: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            player_id: player_id.into(),
            player_name: String::new(),
            cards: Vec::new(),
        }
    }

    /// Sets the display name of the player.
    pub fn with_player_name(mut self, player_name: impl Into<String>) -> Self {
        self.player_name = player_name.into();
        self
    }

    /// Sets the submitted cards.
    pub fn with_cards(mut self, cards: impl Into<Vec<i64>>) -> Self {
        self.cards = cards.into();
        self
    }

    /// Builds the composite key of this record.
    pub fn key(&self) -> Result<CompositeKey> {
        CompositeKey::from_record(self)
    }
}

/// The `(version, playerId)` primary key of a stored hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey {
    pub version: String,
    pub player_id: String,
}

impl CompositeKey {
    /// Builds the key of `record`, checking each attribute on its own.
    ///
    /// Fails with [`HandStoreError::Serialization`] naming the first attribute
    /// that cannot be stored as a key value.
    pub fn from_record(record: &HandRecord) -> Result<Self> {
        Self::new(&record.version, &record.player_id)
    }

    /// Builds a key from raw attribute values.
    pub fn new(version: &str, player_id: &str) -> Result<Self> {
        validate_key_attribute(version, MAX_PARTITION_KEY_BYTES).map_err(|reason| {
            HandStoreError::Serialization {
                attribute: ATTR_VERSION,
                reason,
            }
        })?;
        validate_key_attribute(player_id, MAX_SORT_KEY_BYTES).map_err(|reason| {
            HandStoreError::Serialization {
                attribute: ATTR_PLAYER_ID,
                reason,
            }
        })?;

        Ok(Self {
            version: version.to_string(),
            player_id: player_id.to_string(),
        })
    }
}

/// Checks that `version` can be queried as a partition key value.
///
/// Fails with [`HandStoreError::ExpressionBuild`], since the value only ever
/// ends up in a key condition.
pub fn validate_partition_key(version: &str) -> Result<()> {
    validate_key_attribute(version, MAX_PARTITION_KEY_BYTES).map_err(|reason| {
        HandStoreError::ExpressionBuild(format!("invalid '{ATTR_VERSION}' value: {reason}"))
    })
}

/// Checks that `value` is usable as a string key attribute of at most
/// `max_bytes` UTF-8 bytes. Returns the reason on failure.
pub fn validate_key_attribute(value: &str, max_bytes: usize) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Err("key attributes cannot be empty".to_string());
    }
    if value.len() > max_bytes {
        return Err(format!(
            "value is {} bytes, the limit is {max_bytes}",
            value.len()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_record() {
        let hand = HandRecord::new("v1", "p1").with_player_name("Ana");
        let key = hand.key().unwrap();

        assert_eq!(key.version, "v1");
        assert_eq!(key.player_id, "p1");
    }

    #[test]
    fn test_key_rejects_empty_version() {
        let hand = HandRecord::new("", "p1");
        let err = CompositeKey::from_record(&hand).unwrap_err();

        assert!(matches!(
            err,
            HandStoreError::Serialization {
                attribute: ATTR_VERSION,
                ..
            }
        ));
    }

    #[test]
    fn test_key_rejects_empty_player_id() {
        let hand = HandRecord::new("v1", "");
        let err = CompositeKey::from_record(&hand).unwrap_err();

        assert!(matches!(
            err,
            HandStoreError::Serialization {
                attribute: ATTR_PLAYER_ID,
                ..
            }
        ));
    }

    #[test]
    fn test_key_rejects_oversize_sort_key() {
        let hand = HandRecord::new("v1", "p".repeat(MAX_SORT_KEY_BYTES + 1));
        let err = hand.key().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Serialization error on 'playerId': value is 1025 bytes, the limit is 1024"
        );
    }

    #[test]
    fn test_key_accepts_limits() {
        let hand = HandRecord::new(
            "v".repeat(MAX_PARTITION_KEY_BYTES),
            "p".repeat(MAX_SORT_KEY_BYTES),
        );
        assert!(hand.key().is_ok());
    }

    #[test]
    fn test_partition_key_validation() {
        assert_eq!(validate_partition_key("v1"), Ok(()));
        assert!(validate_partition_key(&"v".repeat(MAX_PARTITION_KEY_BYTES)).is_ok());
        assert_eq!(
            validate_partition_key(""),
            Err(HandStoreError::ExpressionBuild(
                "invalid 'version' value: key attributes cannot be empty".to_string()
            ))
        );
        assert_eq!(
            validate_partition_key(&"v".repeat(MAX_PARTITION_KEY_BYTES + 1)),
            Err(HandStoreError::ExpressionBuild(
                "invalid 'version' value: value is 2049 bytes, the limit is 2048".to_string()
            ))
        );
    }

    #[test]
    fn test_payload_is_not_validated() {
        let hand = HandRecord::new("v1", "p1").with_cards(vec![-1, 0, i64::MAX]);
        assert!(hand.key().is_ok());
    }

    #[test]
    fn test_json_uses_camel_case() {
        let hand = HandRecord::new("v1", "p1")
            .with_player_name("Ana")
            .with_cards(vec![3, 7]);
        let json = serde_json::to_value(&hand).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "version": "v1",
                "playerId": "p1",
                "playerName": "Ana",
                "cards": [3, 7]
            })
        );
    }
}
