//! Remote data client for the public character dataset.
//!
//! ```text
//! CatalogClient ── cache-first ──> QueryCache (normalized by character id)
//!       │
//!       └── GraphqlTransport (HttpTransport in production, mocks in tests)
//! ```

pub mod cache;
pub mod client;
pub mod query;
pub mod transport;
pub mod types;

pub use cache::QueryCache;
pub use client::{CatalogClient, FetchPolicy, QueryState};
pub use query::{CHARACTERS_QUERY, CHARACTER_QUERY};
pub use transport::{unwrap_response, GraphqlTransport, HttpTransport};
pub use types::{Character, CharacterPage, CharacterStatus, CharacterSummary, Episode, PageInfo};
