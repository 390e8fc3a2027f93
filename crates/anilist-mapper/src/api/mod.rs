//! AniList GraphQL API access.
//!
//! This module provides the query executor seam, the reqwest-backed client
//! implementing it, the fixed query documents and the upstream response types.

pub mod client;
pub mod executor;
pub mod queries;
pub mod types;

pub use client::GraphqlClient;
pub use executor::QueryExecutor;
pub use types::*;
