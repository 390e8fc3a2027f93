//! The seam between the mapper and the network.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Sends one GraphQL document to the upstream and yields its `data` field.
///
/// Implementations must not retry: one call is one request. The returned
/// value is not validated; callers address the sub-fields they need and must
/// tolerate their absence.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value>;
}

