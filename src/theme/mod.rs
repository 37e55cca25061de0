//! Visual theme for the Character Catalog.

mod styles;

pub use styles::GLOBAL_STYLES;
