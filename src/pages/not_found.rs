use dioxus::prelude::*;

use crate::app::Route;

/// Unknown paths go back to the root route.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        navigator.replace(Route::Home {});
    });

    tracing::debug!("Unknown route /{}", segments.join("/"));
    rsx! {}
}
