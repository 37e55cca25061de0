//! Cached GraphQL client for the character dataset.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::json;
use tracing::{debug, warn};

use super::cache::QueryCache;
use super::query::{CharacterData, CharactersData, CHARACTERS_QUERY, CHARACTER_QUERY};
use super::transport::{GraphqlTransport, HttpTransport};
use super::types::{Character, CharacterPage, CharacterSummary};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

/// How a read consults the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Answer from cache when possible, otherwise go to the network
    CacheFirst,
    /// Always go to the network, then update the cache
    NetworkOnly,
}

/// Render-facing state of one query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Idle,
    Loading,
    Ready {
        data: T,
        /// A background refetch is still running
        refreshing: bool,
    },
    Failed {
        message: String,
        /// Cached data for the same key, if any
        stale: Option<T>,
    },
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Idle
    }
}

impl<T> QueryState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready { data, .. } => Some(data),
            QueryState::Failed { stale, .. } => stale.as_ref(),
            QueryState::Idle | QueryState::Loading => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            QueryState::Loading | QueryState::Ready { refreshing: true, .. }
        )
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Read-only client over an injected transport.
pub struct CatalogClient {
    transport: Arc<dyn GraphqlTransport>,
    cache: Mutex<QueryCache>,
}

impl CatalogClient {
    pub fn new(transport: Arc<dyn GraphqlTransport>) -> Self {
        Self {
            transport,
            cache: Mutex::new(QueryCache::new()),
        }
    }

    /// Client talking HTTP to the configured endpoint.
    pub fn http(config: &CatalogConfig) -> CatalogResult<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    /// One page of the character list, cache-first.
    pub async fn characters(&self, page: u32) -> CatalogResult<CharacterPage> {
        if page == 0 {
            return Err(CatalogError::InvalidArgument("page must be >= 1".into()));
        }

        let cached = self.cache.lock().read_page(page);
        if let Some(hit) = cached {
            debug!(page, "Character page served from cache");
            return Ok(hit);
        }

        debug!(page, "Fetching character page");
        let data = self
            .transport
            .execute(CHARACTERS_QUERY, json!({ "page": page }))
            .await?;
        let parsed: CharactersData = serde_json::from_value(data)?;
        let result = parsed.into_page(page);

        self.cache.lock().write_page(&result);
        Ok(result)
    }

    /// Full character detail.
    pub async fn character(&self, id: &str, policy: FetchPolicy) -> CatalogResult<Character> {
        if id.trim().is_empty() {
            return Err(CatalogError::InvalidArgument("character id is empty".into()));
        }

        if policy == FetchPolicy::CacheFirst {
            if let Some(hit) = self.peek_character(id) {
                debug!(id, "Character served from cache");
                return Ok(hit);
            }
        }

        debug!(id, "Fetching character");
        let data = self
            .transport
            .execute(CHARACTER_QUERY, json!({ "id": id }))
            .await?;
        let parsed: CharacterData = serde_json::from_value(data)?;
        let character = parsed
            .into_character()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        self.cache.lock().write_character(&character);
        Ok(character)
    }

    /// Cached detail without touching the network.
    pub fn peek_character(&self, id: &str) -> Option<Character> {
        self.cache.lock().read_character(id)
    }

    /// Cached list fields for a character (from any page seen so far).
    pub fn peek_summary(&self, id: &str) -> Option<CharacterSummary> {
        self.cache.lock().read_summary(id)
    }

    /// Stale-while-revalidate read of one character.
    ///
    /// Emits the cached detail first (marked `refreshing`) or `Loading` when
    /// nothing is cached, then the network outcome. A failed refresh carries
    /// the cached value as `stale`.
    pub async fn character_swr<F>(&self, id: &str, mut on_state: F)
    where
        F: FnMut(QueryState<Character>),
    {
        let cached = self.peek_character(id);
        match &cached {
            Some(character) => on_state(QueryState::Ready {
                data: character.clone(),
                refreshing: true,
            }),
            None => on_state(QueryState::Loading),
        }

        match self.character(id, FetchPolicy::NetworkOnly).await {
            Ok(character) => on_state(QueryState::Ready {
                data: character,
                refreshing: false,
            }),
            Err(e) => {
                warn!(id, "Character fetch failed: {}", e);
                on_state(QueryState::Failed {
                    message: e.to_string(),
                    stale: cached,
                });
            }
        }
    }

    /// Drop every cached page and character.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}
