//! Root route. Renders nothing; the gate forwards to the catalog or to the
//! profile form depending on whether a profile exists.

use catalog_core::gate::Screen;
use dioxus::prelude::*;

use crate::context::use_access_gate;

#[component]
pub fn Home() -> Element {
    let _decision = use_access_gate(Screen::Root);
    rsx! {}
}
