//! Character Catalog Core Library
//!
//! Headless logic behind the catalog viewer: a persisted, cross-window
//! synchronized profile gate and a cached GraphQL client for the public
//! Rick and Morty character dataset.
//!
//! ## Overview
//!
//! - [`profile::ProfileStore`]: optional `{username, jobTitle}` with
//!   write-through persistence to a [`storage::KeyValueStore`]
//! - [`remote::CatalogClient`]: cache-first list pages, stale-while-revalidate
//!   character detail
//! - [`listing`], [`details`], [`gate`]: pure view logic shared by the desktop
//!   app and the CLI
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use catalog_core::{CatalogClient, CatalogConfig, ProfileStore, Storage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CatalogConfig::default();
//!     let store = ProfileStore::open(Arc::new(Storage::new(config.database_path())?));
//!     store.save("Rick", "Scientist");
//!
//!     let client = CatalogClient::http(&config)?;
//!     for character in client.characters(1).await?.items {
//!         println!("{}: {}", character.id, character.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod details;
pub mod error;
pub mod gate;
pub mod listing;
pub mod profile;
pub mod remote;
pub mod storage;

// Re-exports
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use profile::{Profile, ProfileSnapshot, ProfileStore, SyncHandle};
pub use remote::{
    CatalogClient, Character, CharacterPage, CharacterStatus, CharacterSummary, Episode,
    FetchPolicy, GraphqlTransport, PageInfo, QueryState,
};
pub use storage::{KeyValueStore, Storage, StorageEvent};
