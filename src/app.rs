use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use catalog_core::gate::Destination;
use catalog_core::{ProfileSnapshot, ProfileStore};
use dioxus::prelude::*;
use dioxus::router::prelude::FromQuery;

use crate::components::Shell;
use crate::context::Services;
use crate::pages::{Blocker, Home, Information, NotFound};
use crate::theme::GLOBAL_STYLES;

pub const APP_NAME: &str = "Character Catalog";

/// Application routes.
///
/// - `/` - Forwards to the catalog or the profile form
/// - `/blocker` - Profile collection form
/// - `/information?page=N[&character_id=ID]` - Character grid, optional details dialog
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/blocker")]
        Blocker {},
        #[route("/information?:..query")]
        Information { query: CatalogQuery },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Catalog route for a page, with the details dialog open when `character_id` is set.
    pub fn catalog(page: u32, character_id: Option<&str>) -> Self {
        Route::Information {
            query: CatalogQuery {
                page: page.to_string(),
                character_id: character_id.map(str::to_string),
            },
        }
    }

    pub fn for_destination(destination: Destination) -> Self {
        match destination {
            Destination::Collect => Route::Blocker {},
            Destination::Catalog => Route::catalog(1, None),
        }
    }
}

/// Query string of the catalog route.
///
/// `page` is kept raw so junk values reach `parse_page`; `character_id` is
/// left out of the URL entirely when no dialog is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub page: String,
    pub character_id: Option<String>,
}

impl FromQuery for CatalogQuery {
    fn from_query(query: &str) -> Self {
        let mut parsed = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "page" => parsed.page = value.to_string(),
                "character_id" => {
                    let value = value.trim();
                    parsed.character_id = (!value.is_empty()).then(|| value.to_string());
                }
                _ => {}
            }
        }
        parsed
    }
}

impl fmt::Display for CatalogQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page={}", self.page)?;
        if let Some(id) = &self.character_id {
            write!(f, "&character_id={}", id)?;
        }
        Ok(())
    }
}

/// Root application component, one per window.
///
/// Owns this window's profile store and provides it, its snapshot signal and
/// the shared GraphQL client to every page.
#[component]
pub fn App() -> Element {
    let services = use_context::<Services>();
    let store = use_hook(|| Arc::new(ProfileStore::new(services.storage.clone())));
    let mut snapshot: Signal<ProfileSnapshot> = use_signal(ProfileSnapshot::default);

    use_context_provider(|| store.clone());
    use_context_provider(|| snapshot);
    use_context_provider(|| services.client.clone());

    // Follow profile changes made in other windows for as long as this one lives.
    let sync_store = store.clone();
    use_hook(move || Rc::new(sync_store.spawn_sync()));

    // Load the persisted profile, then mirror every store change into the signal.
    let watch_store = store.clone();
    use_future(move || {
        let store = watch_store.clone();
        async move {
            let mut changes = store.subscribe();
            store.load();
            loop {
                let current = changes.borrow_and_update().clone();
                snapshot.set(current);
                if changes.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_route_omits_empty_selection() {
        let Route::Information { query } = Route::catalog(3, None) else {
            panic!("expected catalog route");
        };
        assert_eq!(query.to_string(), "page=3");
    }

    #[test]
    fn test_catalog_route_with_selection() {
        let Route::Information { query } = Route::catalog(2, Some("17")) else {
            panic!("expected catalog route");
        };
        assert_eq!(query.to_string(), "page=2&character_id=17");
        assert_eq!(CatalogQuery::from_query(&query.to_string()), query);
    }

    #[test]
    fn test_catalog_query_parsing() {
        let query = CatalogQuery::from_query("page=abc&character_id=");
        assert_eq!(query.page, "abc");
        assert_eq!(query.character_id, None);

        let query = CatalogQuery::from_query("?character_id=4&page=9&utm=x");
        assert_eq!(query.page, "9");
        assert_eq!(query.character_id.as_deref(), Some("4"));

        assert_eq!(CatalogQuery::from_query(""), CatalogQuery::default());
    }
}
