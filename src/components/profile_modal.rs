//! Profile form shared by first-run collection and later editing.

use catalog_core::profile::{can_submit, clamp_input, MAX_JOB_TITLE_LEN, MAX_USERNAME_LEN};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ProfileModalProps {
    /// Pre-filled username; empty on first run
    pub default_username: ReadOnlySignal<String>,
    /// Pre-filled job title; empty on first run
    pub default_job_title: ReadOnlySignal<String>,
    /// Whether the dialog can be closed without submitting
    #[props(default = false)]
    pub dismissable: bool,
    /// Receives the raw (username, job title) pair
    pub on_submit: EventHandler<(String, String)>,
    pub on_close: EventHandler<()>,
}

/// Profile Modal
///
/// Inputs stop at the length limits and show a hint once a limit is hit.
/// Submit stays disabled until both fields have non-blank content.
///
/// Keyboard shortcuts:
/// - Enter: Submit
/// - Esc: Close (when dismissable)
#[component]
pub fn ProfileModal(props: ProfileModalProps) -> Element {
    let default_username = props.default_username;
    let default_job_title = props.default_job_title;

    let mut username = use_signal(|| default_username());
    let mut job_title = use_signal(|| default_job_title());

    // Re-seed when the stored profile changes underneath an open form
    use_effect(move || {
        username.set(default_username());
        job_title.set(default_job_title());
    });

    let editing = !default_username().is_empty() || !default_job_title().is_empty();
    let ready = can_submit(&username(), &job_title());

    let submit = move || {
        if can_submit(&username(), &job_title()) {
            props.on_submit.call((username(), job_title()));
        }
    };

    let close = move || {
        if props.dismissable {
            props.on_close.call(());
        }
    };

    let on_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::Enter => submit(),
        Key::Escape => close(),
        _ => {}
    };

    let username_full = username().chars().count() >= MAX_USERNAME_LEN;
    let job_title_full = job_title().chars().count() >= MAX_JOB_TITLE_LEN;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| close(),

            div {
                class: "profile-modal",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),
                onkeydown: on_keydown,

                h2 { class: "modal-title",
                    if editing { "Edit your info" } else { "Enter your info to continue" }
                }

                div { class: "form-group",
                    label { class: "form-label", "Username*" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        value: "{username}",
                        maxlength: "{MAX_USERNAME_LEN}",
                        placeholder: "Username",
                        autofocus: true,
                        oninput: move |e| username.set(clamp_input(&e.value(), MAX_USERNAME_LEN)),
                    }
                    if username_full {
                        p { class: "form-hint", "Maximum {MAX_USERNAME_LEN} characters reached" }
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", "Job title*" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        value: "{job_title}",
                        maxlength: "{MAX_JOB_TITLE_LEN}",
                        placeholder: "Job title",
                        oninput: move |e| job_title.set(clamp_input(&e.value(), MAX_JOB_TITLE_LEN)),
                    }
                    if job_title_full {
                        p { class: "form-hint", "Maximum {MAX_JOB_TITLE_LEN} characters reached" }
                    }
                }

                div { class: "modal-actions",
                    if props.dismissable {
                        button {
                            r#type: "button",
                            class: "btn-secondary",
                            onclick: move |_| close(),
                            "Cancel"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "btn-primary",
                        disabled: !ready,
                        onclick: move |_| submit(),
                        if editing { "Save" } else { "Continue" }
                    }
                }
            }
        }
    }
}
