//! UI Components for the Character Catalog.

mod character_card;
mod character_modal;
mod footer;
mod nav_header;
mod pagination_controls;
mod profile_modal;
mod shell;

pub use character_card::CharacterCard;
pub use character_modal::CharacterModal;
pub use footer::Footer;
pub use nav_header::NavHeader;
pub use pagination_controls::PaginationControls;
pub use profile_modal::ProfileModal;
pub use shell::Shell;
