//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `HandStoreError` from `playerhands_core::storage`.
//! Throttling, server errors and transport failures are marked retryable,
//! matching the SDK's own retry classification.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use playerhands_core::storage::HandStoreError;

/// Map a Query SDK error to HandStoreError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> HandStoreError {
    if let Some((message, retryable)) = transport_failure(&err) {
        return HandStoreError::QueryExecution { message, retryable };
    }
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => HandStoreError::query("Table not found"),
        QueryError::ProvisionedThroughputExceededException(_) => {
            HandStoreError::query_retryable("Throughput exceeded")
        }
        QueryError::RequestLimitExceeded(_) => {
            HandStoreError::query_retryable("Request limit exceeded")
        }
        QueryError::InternalServerError(_) => {
            HandStoreError::query_retryable("DynamoDB internal server error")
        }
        err => HandStoreError::query(format!("Query failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to HandStoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> HandStoreError {
    if let Some((message, retryable)) = transport_failure(&err) {
        return HandStoreError::Write { message, retryable };
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => HandStoreError::write("Table not found"),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            HandStoreError::write_retryable("Throughput exceeded")
        }
        PutItemError::RequestLimitExceeded(_) => {
            HandStoreError::write_retryable("Request limit exceeded")
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            HandStoreError::write("Item collection size limit exceeded")
        }
        PutItemError::TransactionConflictException(_) => {
            HandStoreError::write_retryable("Transaction conflict")
        }
        PutItemError::InternalServerError(_) => {
            HandStoreError::write_retryable("DynamoDB internal server error")
        }
        err => HandStoreError::write(format!("PutItem failed: {:?}", err)),
    }
}

/// Describe failures that never reached the service, with their retryability.
fn transport_failure<E, R>(err: &SdkError<E, R>) -> Option<(String, bool)> {
    match err {
        SdkError::DispatchFailure(_) => Some(("Could not reach DynamoDB".to_string(), true)),
        SdkError::TimeoutError(_) => Some(("DynamoDB request timed out".to_string(), true)),
        SdkError::ConstructionFailure(_) => Some(("Invalid DynamoDB request".to_string(), false)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::error::{
        InternalServerError, ProvisionedThroughputExceededException, ResourceNotFoundException,
    };

    use super::*;

    #[test]
    fn test_query_throttling_is_retryable() {
        let err = SdkError::service_error(
            QueryError::ProvisionedThroughputExceededException(
                ProvisionedThroughputExceededException::builder().build(),
            ),
            (),
        );

        let mapped = map_query_error(err);

        assert_eq!(mapped, HandStoreError::query_retryable("Throughput exceeded"));
        assert!(mapped.is_retryable());
    }

    #[test]
    fn test_query_missing_table_is_not_retryable() {
        let err = SdkError::service_error(
            QueryError::ResourceNotFoundException(ResourceNotFoundException::builder().build()),
            (),
        );

        assert!(!map_query_error(err).is_retryable());
    }

    #[test]
    fn test_put_internal_server_error_is_retryable() {
        let err = SdkError::service_error(
            PutItemError::InternalServerError(InternalServerError::builder().build()),
            (),
        );

        let mapped = map_put_item_error(err);

        assert_eq!(
            mapped,
            HandStoreError::write_retryable("DynamoDB internal server error")
        );
    }

    #[test]
    fn test_put_timeout_is_retryable_write() {
        let err: SdkError<PutItemError, ()> = SdkError::timeout_error("slow network");

        assert_eq!(
            map_put_item_error(err),
            HandStoreError::write_retryable("DynamoDB request timed out")
        );
    }

    #[test]
    fn test_query_construction_failure_is_not_retryable() {
        let err: SdkError<QueryError, ()> = SdkError::construction_failure("bad input");

        assert_eq!(
            map_query_error(err),
            HandStoreError::query("Invalid DynamoDB request")
        );
    }
}
