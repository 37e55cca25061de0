//! Catalog page: character grid with URL-driven pagination and an optional
//! details dialog.
//!
//! The page number and the open character live in the route query
//! (`?page=N&character_id=ID`), so both survive reloads and history
//! navigation.

use catalog_core::gate::Screen;
use catalog_core::listing::{correct_page, parse_page, ListingState};
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::app::{CatalogQuery, Route};
use crate::components::{CharacterCard, CharacterModal, PaginationControls};
use crate::context::{use_access_gate, use_catalog};

#[component]
pub fn Information(query: CatalogQuery) -> Element {
    let decision = use_access_gate(Screen::Catalog);

    if !decision().should_render() {
        return rsx! {};
    }

    let page = parse_page(Some(&query.page));
    let selected = query.character_id.clone();

    rsx! {
        CatalogView { page, selected }
    }
}

#[component]
fn CatalogView(page: ReadOnlySignal<u32>, selected: ReadOnlySignal<Option<String>>) -> Element {
    let client = use_catalog();
    let navigator = use_navigator();

    let mut listing = use_signal(ListingState::default);

    // Fetch whenever the requested page changes. The previous page stays on
    // screen until the new one arrives; a failure clears it.
    use_effect(move || {
        let requested = page();
        let client = client.clone();
        listing.write().begin(requested);

        spawn(async move {
            let result = client.characters(requested).await;
            if !listing.peek().is_requested(requested) {
                return;
            }

            match result {
                Ok(fetched) => {
                    if let Some(last) = correct_page(requested, fetched.total_pages()) {
                        debug!(requested, last, "Page out of range, correcting");
                        navigator.replace(Route::catalog(last, selected.peek().as_deref()));
                        return;
                    }
                    listing.write().finish(requested, fetched);
                }
                Err(e) => {
                    warn!(page = requested, "Failed to load characters: {}", e);
                    listing.write().fail(requested, e.to_string());
                }
            }
        });
    });

    let state = listing.read();
    let busy = state.is_loading();
    let info = state.info();
    let characters = state.shown().map(|p| p.items.clone());
    let error = state.error().map(str::to_string);
    drop(state);
    let empty = characters.as_ref().is_some_and(|items| items.is_empty());

    let open_character = move |id: String| {
        navigator.push(Route::catalog(page(), Some(&id)));
    };

    let go_to_page = move |target: u32| {
        navigator.push(Route::catalog(target, None));
    };

    let close_details = move |_: ()| {
        navigator.push(Route::catalog(page(), None));
    };

    rsx! {
        section { class: "catalog",
            div { class: "catalog-header",
                h1 { class: "page-title", "Characters" }
            }

            if let Some(message) = error {
                div { class: "error-banner", role: "alert",
                    p { "Failed to load characters." }
                    p { class: "error-detail", "{message}" }
                }
            }

            div {
                class: if busy { "character-grid character-grid--busy" } else { "character-grid" },
                "aria-busy": if busy { "true" } else { "false" },

                if let Some(items) = characters {
                    for character in items {
                        CharacterCard {
                            key: "{character.id}",
                            character: character.clone(),
                            disabled: busy,
                            on_select: open_character,
                        }
                    }
                }
            }

            if busy && info.is_none() {
                div { class: "loading-state",
                    div { class: "loading-spinner" }
                    p { class: "loading-message", "Loading characters…" }
                }
            }

            if empty && !busy {
                p { class: "empty-state", "No characters on this page." }
            }

            PaginationControls {
                current: page(),
                info,
                loading: busy,
                on_select: go_to_page,
            }

            CharacterModal {
                id: selected(),
                on_close: close_details,
            }
        }
    }
}
