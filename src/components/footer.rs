use chrono::Datelike;
use dioxus::prelude::*;

use crate::app::APP_NAME;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "app-footer",
            p { "© {year} {APP_NAME}" }
        }
    }
}
