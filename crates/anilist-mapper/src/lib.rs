//! AniList mapper library.
//!
//! Queries the AniList GraphQL API and reshapes its media records into the
//! scraper-shaped results (search hits, listings, catalogs, detail records)
//! that downstream consumers of the former HTML scraper expect.

pub mod api;
pub mod error;
pub mod mapper;

pub use api::{GraphqlClient, QueryExecutor, Season};
pub use error::{MapperError, Result, TransportError, UpstreamError};
pub use mapper::AnimeMapper;
