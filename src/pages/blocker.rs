//! Profile collection page.
//!
//! Shown until a profile exists. Saving one makes the gate move on to the
//! catalog; there is no way to dismiss the form.

use catalog_core::gate::Screen;
use dioxus::prelude::*;

use crate::components::ProfileModal;
use crate::context::{use_access_gate, use_profile_store};

#[component]
pub fn Blocker() -> Element {
    let decision = use_access_gate(Screen::Collect);
    let store = use_profile_store();

    if !decision().should_render() {
        return rsx! {};
    }

    let on_submit = move |(username, job_title): (String, String)| {
        if store.save(&username, &job_title) {
            tracing::info!("Profile created");
        }
    };

    rsx! {
        div { class: "blocker",
            ProfileModal {
                default_username: String::new(),
                default_job_title: String::new(),
                on_submit: on_submit,
                on_close: move |_| {},
            }
        }
    }
}
