//! AniList GraphQL client.

use super::executor::QueryExecutor;
use super::types::GraphqlResponse;
use crate::error::{MapperError, Result, TransportError};
use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::{json, Value};
use shared::config::AnilistConfig;
use tracing::{debug, warn};

/// GraphQL client bound to a single endpoint
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    /// HTTP client
    client: Client,
    /// GraphQL endpoint URL
    endpoint: String,
}

impl GraphqlClient {
    /// Create a new client for the given endpoint
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(TransportError::Request)?;

        Ok(Self::with_http_client(endpoint, client))
    }

    /// Create a client from the `[anilist]` config section
    pub fn from_config(config: &AnilistConfig) -> Result<Self> {
        Self::new(config.endpoint.clone(), &config.user_agent)
    }

    /// Wrap an already configured reqwest client
    pub fn with_http_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the document and decode the response envelope
    async fn post(&self, query: &str, variables: &Value) -> Result<GraphqlResponse> {
        debug!(endpoint = %self.endpoint, variables = %variables, "Sending GraphQL request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "Request error");
                TransportError::Request(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(TransportError::Request)?;

        if !status.is_success() {
            warn!(
                endpoint = %self.endpoint,
                status = %status,
                "Request failed"
            );
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let envelope: GraphqlResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "Failed to parse response");
            TransportError::Decode(e)
        })?;

        Ok(envelope)
    }
}

#[async_trait]
impl QueryExecutor for GraphqlClient {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        let envelope = self.post(query, &variables).await?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            warn!(
                endpoint = %self.endpoint,
                count = errors.len(),
                first = %errors[0].message,
                "Upstream returned GraphQL errors"
            );
            return Err(MapperError::Upstream(errors));
        }

        debug!(endpoint = %self.endpoint, "Request successful");
        Ok(envelope.data.unwrap_or(Value::Null))
    }
}
