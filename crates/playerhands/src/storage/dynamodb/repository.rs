//! DynamoDB repository implementation.
//!
//! Implements [`HandRepository`] from `playerhands_core::storage` using DynamoDB.

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use playerhands_core::hand::HandRecord;
use playerhands_core::storage::{HandRepository, Result};

use super::conversions::{hand_to_item, items_to_hands};
use super::error::{map_put_item_error, map_query_error};
use super::keys::KeyCondition;
use crate::config::DEFAULT_MAX_QUERY_PAGES;

type Item = HashMap<String, AttributeValue>;

/// DynamoDB-based hand repository.
///
/// The SDK client is cheap to clone and safe to share between tasks.
#[derive(Debug, Clone)]
pub struct DynamoDbHandRepository {
    client: Client,
    table_name: String,
    max_query_pages: usize,
}

impl DynamoDbHandRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            max_query_pages: DEFAULT_MAX_QUERY_PAGES,
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    pub async fn from_env(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }

    /// Sets how many Query pages a single `query_hands` call may read.
    pub fn with_max_query_pages(mut self, max_query_pages: usize) -> Self {
        self.max_query_pages = max_query_pages.max(1);
        self
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Hands gathered from one or more Query pages.
#[derive(Debug, Default, PartialEq, Eq)]
struct CollectedPages {
    hands: Vec<HandRecord>,
    pages: usize,
    /// More pages remained when the page cap was reached.
    truncated: bool,
}

/// Reads pages through `fetch` until the store reports no further key, or
/// until `max_pages` pages were read.
///
/// `fetch` gets the exclusive start key (`None` for the first page) and
/// returns the page items with the last evaluated key. An empty last key ends
/// the loop like a missing one. Any failed page fails the whole read.
async fn collect_pages<F, Fut>(max_pages: usize, mut fetch: F) -> Result<CollectedPages>
where
    F: FnMut(Option<Item>) -> Fut,
    Fut: Future<Output = Result<(Vec<Item>, Option<Item>)>>,
{
    let mut collected = CollectedPages::default();
    let mut start_key: Option<Item> = None;

    while collected.pages < max_pages {
        let (items, last_key) = fetch(start_key.take()).await?;
        collected.pages += 1;
        collected.hands.extend(items_to_hands(&items)?);

        match last_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => return Ok(collected),
        }
    }

    collected.truncated = true;
    Ok(collected)
}

#[async_trait]
impl HandRepository for DynamoDbHandRepository {
    async fn put_hand(&self, hand: &HandRecord) -> Result<()> {
        let item = hand_to_item(hand)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| {
                let err = map_put_item_error(e);
                tracing::error!(
                    table = %self.table_name,
                    version = %hand.version,
                    player_id = %hand.player_id,
                    error = %err,
                    "Could not add hand to table"
                );
                err
            })?;

        tracing::debug!(
            table = %self.table_name,
            version = %hand.version,
            player_id = %hand.player_id,
            "Stored hand"
        );
        Ok(())
    }

    async fn query_hands(&self, version: &str) -> Result<Vec<HandRecord>> {
        let condition = KeyCondition::version_equals(version)?;

        let collected = collect_pages(self.max_query_pages, |start_key| {
            let mut request = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression(&condition.expression)
                .set_exclusive_start_key(start_key);
            for (placeholder, name) in &condition.names {
                request = request.expression_attribute_names(placeholder, name);
            }
            for (placeholder, value) in &condition.values {
                request = request
                    .expression_attribute_values(placeholder, AttributeValue::S(value.clone()));
            }

            async move {
                let output = request.send().await.map_err(map_query_error)?;
                Ok((output.items.unwrap_or_default(), output.last_evaluated_key))
            }
        })
        .await?;

        if collected.truncated {
            tracing::warn!(
                table = %self.table_name,
                version,
                max_pages = self.max_query_pages,
                count = collected.hands.len(),
                "Query page limit reached, returning a truncated result"
            );
        } else {
            tracing::debug!(
                table = %self.table_name,
                version,
                pages = collected.pages,
                count = collected.hands.len(),
                "Queried hands"
            );
        }
        Ok(collected.hands)
    }
}
