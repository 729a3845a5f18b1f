//! playerhands - Store player hands in DynamoDB and pick one at random.
//!
//! [`HandStore`] is the entry point. It wraps a
//! [`HandRepository`](playerhands_core::storage::HandRepository) backend and
//! bounds every call with a timeout.

pub mod cli;
pub mod config;
pub mod output;
pub mod storage;
pub mod store;

pub use config::{Config, ConfigError};
pub use store::HandStore;
