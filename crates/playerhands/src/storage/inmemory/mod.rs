//! In-memory storage backend for testing.
//!
//! Stores hands in a map of partitions wrapped in `Arc<RwLock<_>>`. Key checks
//! follow the DynamoDB backend so both fail the same way on bad keys.
//!
//! # Example
//!
//! ```rust,ignore
//! use playerhands::storage::inmemory::InMemoryHandRepository;
//!
//! let repo = InMemoryHandRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryHandRepository;
