//! Error types for the AniList mapper.

use crate::api::types::GraphqlResponse;
use serde::Deserialize;

/// Failure to obtain a decodable response from the endpoint
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One entry of a GraphQL `errors` list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamError {
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}

#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("upstream returned errors: {}", join_messages(.0))]
    Upstream(Vec<UpstreamError>),

    #[error("unexpected response shape: {0}")]
    Shape(String),

    #[error("no anime found with id {0}")]
    NotFound(i64),
}

impl MapperError {
    /// Whether the GraphQL error list reports a missing resource.
    ///
    /// AniList answers unknown ids with HTTP 404 and the error list in the
    /// body; a 404 without that list stays a transport error.
    pub fn is_upstream_not_found(&self) -> bool {
        match self {
            MapperError::Transport(TransportError::Status { status: 404, body }) => {
                serde_json::from_str::<GraphqlResponse>(body)
                    .ok()
                    .and_then(|envelope| envelope.errors)
                    .is_some_and(|errors| reports_not_found(&errors))
            }
            MapperError::Upstream(errors) => reports_not_found(errors),
            _ => false,
        }
    }
}

fn reports_not_found(errors: &[UpstreamError]) -> bool {
    errors.iter().any(|e| e.status == Some(404))
}

fn join_messages(errors: &[UpstreamError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, MapperError>;
