// UI Components
// Reusable pieces of the viewer page

pub mod icons;
pub mod username_form;
pub mod profile_card;
pub mod media_tabs;
pub mod highlight_strip;
pub mod media_card;

pub use username_form::UsernameForm;
pub use profile_card::ProfileCard;
pub use media_tabs::MediaTabs;
pub use highlight_strip::HighlightStrip;
pub use media_card::{MediaCard, MediaGrid};
