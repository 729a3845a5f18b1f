//! playerhands_core - Pure types, traits and helpers for the playerhands store.
//!
//! Nothing in this crate talks to a concrete storage backend. Backends live in
//! the `playerhands` crate and implement [`storage::HandRepository`].

pub mod hand;
pub mod storage;
