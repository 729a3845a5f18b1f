//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and hands.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use playerhands_core::hand::{CompositeKey, HandRecord, ATTR_PLAYER_ID, ATTR_VERSION};
use playerhands_core::storage::{HandStoreError, Result};

pub const ATTR_PLAYER_NAME: &str = "playerName";
pub const ATTR_CARDS: &str = "cards";

// ============================================================================
// Key conversions
// ============================================================================

/// Convert a composite key to the attribute map DynamoDB expects in `Key`.
pub fn key_to_attributes(key: &CompositeKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            ATTR_VERSION.to_string(),
            AttributeValue::S(key.version.clone()),
        ),
        (
            ATTR_PLAYER_ID.to_string(),
            AttributeValue::S(key.player_id.clone()),
        ),
    ])
}

// ============================================================================
// Hand conversions
// ============================================================================

/// Convert a hand to a DynamoDB item.
///
/// Fails when either key attribute cannot be stored.
pub fn hand_to_item(hand: &HandRecord) -> Result<HashMap<String, AttributeValue>> {
    let mut item = key_to_attributes(&CompositeKey::from_record(hand)?);

    item.insert(
        ATTR_PLAYER_NAME.to_string(),
        AttributeValue::S(hand.player_name.clone()),
    );
    item.insert(
        ATTR_CARDS.to_string(),
        AttributeValue::L(
            hand.cards
                .iter()
                .map(|card| AttributeValue::N(card.to_string()))
                .collect(),
        ),
    );

    Ok(item)
}

/// Convert a DynamoDB item to a hand.
///
/// Missing payload attributes decode to empty values. Missing key attributes
/// are an error.
pub fn item_to_hand(item: &HashMap<String, AttributeValue>) -> Result<HandRecord> {
    Ok(HandRecord {
        version: get_string(item, ATTR_VERSION)?,
        player_id: get_string(item, ATTR_PLAYER_ID)?,
        player_name: get_optional_string(item, ATTR_PLAYER_NAME)?.unwrap_or_default(),
        cards: get_cards(item, ATTR_CARDS)?,
    })
}

/// Convert a page of DynamoDB items to hands.
///
/// Stops at the first item that fails to decode; no partial list is returned.
pub fn items_to_hands(items: &[HashMap<String, AttributeValue>]) -> Result<Vec<HandRecord>> {
    items.iter().map(item_to_hand).collect()
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| HandStoreError::Deserialization(format!("Missing or invalid field: {key}")))
}

/// Get an optional string attribute. Present with another type is an error.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Option<String>> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(s)) => Ok(Some(s.clone())),
        Some(_) => Err(HandStoreError::Deserialization(format!(
            "Invalid field {key}: expected a string"
        ))),
    }
}

/// Get the card list. Accepts a list of numbers or a number set.
fn get_cards(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Vec<i64>> {
    let raw: Vec<&str> = match item.get(key) {
        None | Some(AttributeValue::Null(_)) => return Ok(Vec::new()),
        Some(AttributeValue::L(values)) => values
            .iter()
            .map(|v| {
                v.as_n().map(String::as_str).map_err(|_| {
                    HandStoreError::Deserialization(format!(
                        "Invalid field {key}: expected a list of numbers"
                    ))
                })
            })
            .collect::<Result<_>>()?,
        Some(AttributeValue::Ns(values)) => values.iter().map(String::as_str).collect(),
        Some(_) => {
            return Err(HandStoreError::Deserialization(format!(
                "Invalid field {key}: expected a list of numbers"
            )))
        }
    };

    raw.into_iter()
        .map(|n| {
            n.parse::<i64>().map_err(|e| {
                HandStoreError::Deserialization(format!("Invalid card {n} in {key}: {e}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hand() -> HandRecord {
        HandRecord::new("v1", "p1")
            .with_player_name("Ana")
            .with_cards(vec![4, 8, 15])
    }

    #[test]
    fn test_hand_round_trip() {
        let hand = sample_hand();
        let item = hand_to_item(&hand).unwrap();
        let parsed = item_to_hand(&item).unwrap();

        assert_eq!(hand, parsed);
    }

    #[test]
    fn test_hand_item_has_correct_keys() {
        let item = hand_to_item(&sample_hand()).unwrap();

        assert_eq!(item.get("version").unwrap().as_s().unwrap(), "v1");
        assert_eq!(item.get("playerId").unwrap().as_s().unwrap(), "p1");
        assert_eq!(
            item.get("cards").unwrap().as_l().unwrap(),
            &vec![
                AttributeValue::N("4".to_string()),
                AttributeValue::N("8".to_string()),
                AttributeValue::N("15".to_string()),
            ]
        );
    }

    #[test]
    fn test_hand_to_item_rejects_empty_key() {
        let hand = HandRecord::new("v1", "");
        assert!(matches!(
            hand_to_item(&hand),
            Err(HandStoreError::Serialization {
                attribute: "playerId",
                ..
            })
        ));
    }

    #[test]
    fn test_key_to_attributes() {
        let key = CompositeKey::new("v2", "p9").unwrap();
        let attrs = key_to_attributes(&key);

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("version").unwrap().as_s().unwrap(), "v2");
        assert_eq!(attrs.get("playerId").unwrap().as_s().unwrap(), "p9");
    }

    #[test]
    fn test_item_missing_payload_decodes_empty() {
        let item = HashMap::from([
            ("version".to_string(), AttributeValue::S("v1".to_string())),
            ("playerId".to_string(), AttributeValue::S("p1".to_string())),
        ]);

        assert_eq!(item_to_hand(&item).unwrap(), HandRecord::new("v1", "p1"));
    }

    #[test]
    fn test_item_number_set_cards() {
        let item = HashMap::from([
            ("version".to_string(), AttributeValue::S("v1".to_string())),
            ("playerId".to_string(), AttributeValue::S("p1".to_string())),
            (
                "cards".to_string(),
                AttributeValue::Ns(vec!["2".to_string(), "3".to_string()]),
            ),
        ]);

        assert_eq!(item_to_hand(&item).unwrap().cards, vec![2, 3]);
    }

    #[test]
    fn test_item_missing_key_is_error() {
        let item = HashMap::from([("playerId".to_string(), AttributeValue::S("p1".to_string()))]);

        assert_eq!(
            item_to_hand(&item),
            Err(HandStoreError::Deserialization(
                "Missing or invalid field: version".to_string()
            ))
        );
    }

    #[test]
    fn test_item_bad_card_is_error() {
        let mut item = hand_to_item(&sample_hand()).unwrap();
        item.insert(
            "cards".to_string(),
            AttributeValue::L(vec![AttributeValue::S("ace".to_string())]),
        );

        assert!(matches!(
            item_to_hand(&item),
            Err(HandStoreError::Deserialization(_))
        ));
    }

    #[test]
    fn test_items_to_hands_discards_partial_results() {
        let good = hand_to_item(&sample_hand()).unwrap();
        let bad = HashMap::from([("version".to_string(), AttributeValue::S("v1".to_string()))]);

        assert!(items_to_hands(&[good.clone()]).is_ok());
        assert!(items_to_hands(&[good, bad]).is_err());
    }
}
