//! Character details dialog.
//!
//! Opens over the grid whenever the route carries a character id. Cached
//! detail renders immediately while a fresh copy is fetched; episodes are
//! revealed a few at a time.

use catalog_core::details::{display_fields, DetailsTracker};
use catalog_core::{Character, QueryState};
use dioxus::prelude::*;

use crate::context::use_catalog;

#[derive(Props, Clone, PartialEq)]
pub struct CharacterModalProps {
    /// Open character, `None` when the dialog is closed
    pub id: ReadOnlySignal<Option<String>>,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn CharacterModal(props: CharacterModalProps) -> Element {
    let id = props.id;
    let on_close = props.on_close;
    let client = use_catalog();
    let mut tracker = use_signal(DetailsTracker::new);
    let mut inflight: Signal<Option<Task>> = use_signal(|| None);

    let fetch_client = client.clone();
    use_effect(move || {
        let next = id();
        if !tracker.write().open(next.as_deref()) {
            return;
        }
        if let Some(task) = inflight.write().take() {
            task.cancel();
        }
        let Some(next) = next else {
            return;
        };

        let client = fetch_client.clone();
        let task = spawn(async move {
            client
                .character_swr(&next, |state| {
                    tracker.write().apply(&next, state);
                })
                .await;
        });
        inflight.set(Some(task));
    });

    let Some(current_id) = id() else {
        return rsx! {};
    };

    let view = tracker.read();
    // The tracker follows the route one effect later; until then show only
    // what is known about the new id.
    let in_sync = view.current() == Some(current_id.as_str());
    let character: Option<Character> = if in_sync { view.character().cloned() } else { None };
    let error = if in_sync { view.state().error().map(str::to_string) } else { None };
    let refreshing = in_sync && matches!(view.state(), QueryState::Ready { refreshing: true, .. });
    let episodes = if in_sync { view.visible_episodes().to_vec() } else { Vec::new() };
    let can_reveal_more = in_sync && view.can_reveal_more();
    drop(view);

    let title = character
        .as_ref()
        .map(|c| c.name.clone())
        .or_else(|| client.peek_summary(&current_id).map(|s| s.name))
        .unwrap_or_else(|| "Details".to_string());
    let fields = character.as_ref().map(display_fields).unwrap_or_default();
    let total_episodes = character.as_ref().map_or(0, |c| c.episodes.len());
    let image = character.as_ref().map(|c| c.image.clone()).filter(|src| !src.is_empty());
    let show_spinner = character.is_none() && error.is_none();

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            on_close.call(());
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "character-modal",
                role: "dialog",
                tabindex: "-1",
                // Take focus on open so Escape closes without a click first.
                onmounted: move |evt: MountedEvent| async move {
                    if let Err(e) = evt.set_focus(true).await {
                        tracing::debug!("Could not focus details dialog: {:?}", e);
                    }
                },
                onclick: move |e| e.stop_propagation(),
                onkeydown: on_keydown,

                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        r#type: "button",
                        class: "modal-close",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "modal-body",
                    if let Some(message) = error {
                        div { class: "error-banner", role: "alert",
                            p { "Failed to load details." }
                            p { class: "error-detail", "{message}" }
                        }
                    }

                    if show_spinner {
                        div { class: "loading-state",
                            div { class: "loading-spinner" }
                        }
                    }

                    if let Some(src) = image {
                        img { class: "modal-image", src: "{src}", alt: "{title}" }
                    }

                    if !fields.is_empty() {
                        dl { class: "detail-fields",
                            for field in fields {
                                div { key: "{field.label}", class: "detail-field",
                                    dt { "{field.label}" }
                                    dd { "{field.value}" }
                                }
                            }
                        }
                    }

                    if total_episodes > 0 {
                        div { class: "episode-list",
                            h3 { class: "episode-heading", "Episodes ({total_episodes})" }
                            ul {
                                for episode in episodes {
                                    li { key: "{episode.id}",
                                        span { class: "episode-code", "{episode.code}" }
                                        " {episode.name} "
                                        span { class: "episode-date", "({episode.air_date})" }
                                    }
                                }
                            }
                            if can_reveal_more {
                                button {
                                    r#type: "button",
                                    class: "btn-secondary",
                                    onclick: move |_| tracker.write().reveal_more(),
                                    "View more"
                                }
                            }
                        }
                    }

                    if refreshing {
                        p { class: "refresh-note", "Refreshing…" }
                    }
                }
            }
        }
    }
}
