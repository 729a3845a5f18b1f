//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of
//! [`HandRepository`](playerhands_core::storage::HandRepository) using
//! `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod keys;
mod repository;

pub use conversions::{hand_to_item, item_to_hand, key_to_attributes};
pub use keys::KeyCondition;
pub use repository::DynamoDbHandRepository;
