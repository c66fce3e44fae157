//! Reusable UI components.

mod about_section;
mod banner;
mod footer;
mod icon;
mod outline_button;
mod popup_password;
mod practice_section;
mod sidebar;
mod tools_section;
mod topbar;

pub use about_section::AboutSection;
pub use banner::Banner;
pub use footer::Footer;
pub use icon::{Icon, IconKind};
pub use outline_button::OutlineButton;
pub use popup_password::PopupPassword;
pub use practice_section::PracticeSection;
pub use sidebar::Sidebar;
pub use tools_section::ToolsSection;
pub use topbar::Topbar;
