mod contact;
mod nav;
mod parallax;
mod reveal;
mod scroll;
mod theme;

pub use contact::{ContactDraft, ContactField};
pub use nav::{MobileMenu, NAV_ITEMS};
pub use parallax::{parallax_offset, PointerParallax, PARALLAX_RANGE};
pub use reveal::{Reveal, SECTION_THRESHOLD};
pub use scroll::scroll_progress;
pub use theme::{Theme, ThemeController, DARK_CLASS};
