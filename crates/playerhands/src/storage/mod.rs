//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! [`HandRepository`](playerhands_core::storage::HandRepository).
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always compiled; it backs the tests.
//!
//! # Examples
//!
//! Build without DynamoDB (library only):
//! ```bash
//! cargo build -p playerhands --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbHandRepository;

pub use inmemory::InMemoryHandRepository;
