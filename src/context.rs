//! Shared services and hooks for the catalog UI.
//!
//! ## Usage
//!
//! ```ignore
//! // In page components
//! let profile = use_profile();
//! let client = use_catalog();
//! let decision = use_access_gate(Screen::Catalog);
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use catalog_core::gate::{decide, GateDecision, RedirectLatch, Screen};
use catalog_core::{CatalogClient, CatalogConfig, KeyValueStore, ProfileSnapshot, ProfileStore, Storage};
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::app::Route;

/// Process-wide services shared by every window.
///
/// Windows share one storage backend, which is what lets a profile edit in one
/// window reach the others.
#[derive(Clone)]
pub struct Services {
    pub storage: Arc<dyn KeyValueStore>,
    pub client: Arc<CatalogClient>,
}

impl Services {
    /// Open storage and build the GraphQL client.
    ///
    /// An unusable data directory is not fatal: the profile then lives in
    /// memory for this session only.
    pub fn bootstrap(config: &CatalogConfig) -> anyhow::Result<Self> {
        let storage: Arc<dyn KeyValueStore> = match Storage::new(config.database_path()) {
            Ok(storage) => Arc::new(storage),
            Err(e) => {
                warn!("Profile storage unavailable ({}), keeping profile in memory", e);
                Arc::new(Storage::in_memory()?)
            }
        };

        let client = CatalogClient::http(config).context("failed to build GraphQL client")?;

        Ok(Self {
            storage,
            client: Arc::new(client),
        })
    }
}

/// Hook to access the profile snapshot of this window.
///
/// Re-renders the caller whenever the profile or readiness changes.
pub fn use_profile() -> Signal<ProfileSnapshot> {
    use_context::<Signal<ProfileSnapshot>>()
}

/// Hook to access this window's profile store for `save`/`reset`.
pub fn use_profile_store() -> Arc<ProfileStore> {
    use_context::<Arc<ProfileStore>>()
}

/// Hook to access the shared GraphQL client.
pub fn use_catalog() -> Arc<CatalogClient> {
    use_context::<Arc<CatalogClient>>()
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Gate a screen on profile presence.
///
/// Returns the current decision; callers render nothing unless it is
/// [`GateDecision::Render`]. Redirects run from an effect and fire once per
/// transition.
pub fn use_access_gate(screen: Screen) -> Memo<GateDecision> {
    let snapshot = use_profile();
    let navigator = use_navigator();
    let mut latch = use_signal(RedirectLatch::default);

    let decision = use_memo(move || {
        let current = snapshot.read();
        decide(current.ready, current.profile.is_some(), screen)
    });

    use_effect(move || match decision() {
        GateDecision::Redirect(destination) => {
            let has_profile = snapshot.peek().profile.is_some();
            if latch.write().should_fire(has_profile, destination) {
                debug!(?screen, ?destination, "Access gate redirect");
                navigator.replace(Route::for_destination(destination));
            }
        }
        GateDecision::Render => latch.write().rearm(),
        GateDecision::Wait => {}
    });

    decision
}
