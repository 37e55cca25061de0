//! Page components for the Character Catalog.

mod blocker;
mod home;
mod information;
mod not_found;

pub use blocker::Blocker;
pub use home::Home;
pub use information::Information;
pub use not_found::NotFound;
