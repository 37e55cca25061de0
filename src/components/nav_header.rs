//! Navigation Header Component
//!
//! App title on the left, identity menu on the right once a profile exists.

use dioxus::desktop::{window, Config, WindowBuilder};
use dioxus::prelude::*;

use crate::app::{App, Route, APP_NAME};
use crate::context::{use_profile, use_profile_store, use_services};

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Opens the profile edit dialog
    pub on_edit: EventHandler<()>,
}

/// Navigation Header component
///
/// Identity menu entries:
/// - Edit info: opens the shared profile form
/// - Open new window: another catalog window sharing this profile
/// - Sign out: clears the profile, which re-engages the gate
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let snapshot = use_profile();
    let store = use_profile_store();
    let services = use_services();
    let mut show_menu = use_signal(|| false);

    let profile = snapshot.read().profile.clone();

    let on_edit_click = move |_: MouseEvent| {
        show_menu.set(false);
        props.on_edit.call(());
    };

    let on_new_window = move |_: MouseEvent| {
        show_menu.set(false);
        let dom = VirtualDom::new(App).with_root_context(services.clone());
        let config = Config::new().with_window(WindowBuilder::new().with_title(APP_NAME));
        let _pending = window().new_window(dom, config);
        tracing::debug!("Opened catalog window");
    };

    let on_sign_out = move |_: MouseEvent| {
        show_menu.set(false);
        if store.reset() {
            tracing::info!("Signed out");
        }
    };

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                Link { class: "nav-title", to: Route::Home {}, "{APP_NAME}" }

                if let Some(profile) = profile {
                    div { class: "identity-menu",
                        button {
                            r#type: "button",
                            class: "identity-trigger",
                            onclick: move |_| show_menu.set(!show_menu()),
                            "aria-expanded": "{show_menu()}",
                            span { class: "identity-avatar", "{initial(&profile.username)}" }
                            span { class: "identity-label", "{profile.username}" }
                        }

                        if show_menu() {
                            div { class: "identity-dropdown",
                                div { class: "identity-summary",
                                    p { class: "identity-name", "{profile.username}" }
                                    p { class: "identity-job", "{profile.job_title}" }
                                }
                                hr { class: "menu-divider" }
                                button { r#type: "button", class: "menu-item", onclick: on_edit_click, "Edit info" }
                                button { r#type: "button", class: "menu-item", onclick: on_new_window, "Open new window" }
                                hr { class: "menu-divider" }
                                button { r#type: "button", class: "menu-item menu-item--danger", onclick: on_sign_out, "Sign out" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
