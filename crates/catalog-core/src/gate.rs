//! Access-gate decisions.
//!
//! Routing is the UI's business; this module only answers "render, wait, or
//! go elsewhere" for a screen given the profile store state.

/// Screens the gate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Root route, always forwards somewhere
    Root,
    /// Profile collection form
    Collect,
    /// Character listing
    Catalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Collect,
    Catalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Store not ready; render nothing
    Wait,
    Render,
    /// Render nothing and navigate
    Redirect(Destination),
}

impl GateDecision {
    pub fn should_render(self) -> bool {
        self == GateDecision::Render
    }
}

pub fn decide(ready: bool, has_profile: bool, screen: Screen) -> GateDecision {
    if !ready {
        return GateDecision::Wait;
    }
    match (screen, has_profile) {
        (Screen::Root, true) | (Screen::Collect, true) => GateDecision::Redirect(Destination::Catalog),
        (Screen::Root, false) | (Screen::Catalog, false) => {
            GateDecision::Redirect(Destination::Collect)
        }
        (Screen::Collect, false) | (Screen::Catalog, true) => GateDecision::Render,
    }
}

/// Lets a redirect fire once per `(has_profile, destination)` transition.
///
/// Effects can re-run for unrelated reasons; the latch keeps them from
/// issuing the same navigation twice. It re-arms when the screen renders or
/// when the profile state flips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedirectLatch {
    fired: Option<(bool, Destination)>,
}

impl RedirectLatch {
    pub fn should_fire(&mut self, has_profile: bool, destination: Destination) -> bool {
        let key = (has_profile, destination);
        if self.fired == Some(key) {
            return false;
        }
        self.fired = Some(key);
        true
    }

    pub fn rearm(&mut self) {
        self.fired = None;
    }
}
