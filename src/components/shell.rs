//! Layout shared by every route: header, page outlet, footer, and the
//! profile edit dialog.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Footer, NavHeader, ProfileModal};
use crate::context::{use_profile, use_profile_store};

#[component]
pub fn Shell() -> Element {
    let snapshot = use_profile();
    let store = use_profile_store();
    let mut editing = use_signal(|| false);

    // Nothing renders until the persisted profile has been read, so a stored
    // profile never flashes the collection form.
    if !snapshot.read().ready {
        return rsx! {};
    }

    let profile = snapshot.read().profile.clone();
    let (username, job_title) = profile
        .map(|p| (p.username, p.job_title))
        .unwrap_or_default();

    let on_submit = move |(username, job_title): (String, String)| {
        if store.save(&username, &job_title) {
            tracing::info!("Profile updated");
        }
        editing.set(false);
    };

    rsx! {
        div { class: "app-shell",
            NavHeader { on_edit: move |_| editing.set(true) }

            main { class: "app-main",
                Outlet::<Route> {}
            }

            Footer {}

            if editing() {
                ProfileModal {
                    default_username: username,
                    default_job_title: job_title,
                    dismissable: true,
                    on_submit: on_submit,
                    on_close: move |_| editing.set(false),
                }
            }
        }
    }
}
