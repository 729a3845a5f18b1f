//! DynamoDB key and key-condition helpers.
//!
//! Pure functions, no SDK calls. The table uses `version` as partition key and
//! `playerId` as sort key, both strings.

use playerhands_core::hand::{validate_partition_key, ATTR_VERSION};
use playerhands_core::storage::Result;

// ============================================================================
// Expression placeholders
// ============================================================================

/// Placeholder for the partition key attribute name.
pub const VERSION_NAME_PLACEHOLDER: &str = "#version";
/// Placeholder for the partition key value.
pub const VERSION_VALUE_PLACEHOLDER: &str = ":version";

/// A key condition ready to be attached to a Query request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCondition {
    /// The `KeyConditionExpression` string.
    pub expression: String,
    /// `ExpressionAttributeNames` entries.
    pub names: Vec<(String, String)>,
    /// `ExpressionAttributeValues` entries, string values only.
    pub values: Vec<(String, String)>,
}

impl KeyCondition {
    /// Builds `#version = :version` for the given partition key value.
    ///
    /// Fails with [`HandStoreError::ExpressionBuild`] when `version` cannot be
    /// a partition key value.
    pub fn version_equals(version: &str) -> Result<Self> {
        validate_partition_key(version)?;

        Ok(Self {
            expression: format!("{VERSION_NAME_PLACEHOLDER} = {VERSION_VALUE_PLACEHOLDER}"),
            names: vec![(
                VERSION_NAME_PLACEHOLDER.to_string(),
                ATTR_VERSION.to_string(),
            )],
            values: vec![(VERSION_VALUE_PLACEHOLDER.to_string(), version.to_string())],
        })
    }
}
