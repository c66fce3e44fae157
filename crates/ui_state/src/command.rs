//! UI command vocabulary.
//!
//! Buttons never act on their own; they emit a [`Command`] through a
//! callback supplied by the composition root. Today the root answers every
//! command with a placeholder notification; a future router or action
//! system replaces that one handler without touching the components.

/// A navigation destination named by a sidebar entry, tool tile, or
/// section button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Home,
    MyLists,
    EnterNewWords,
    References,
    UserProfile,
    /// "Reference" tile on the tools grid (singular in the original copy).
    Reference,
    /// "Details" button on the about section.
    AboutDetails,
    /// "Check My Lists" button on the practice section.
    CheckMyLists,
}

impl Target {
    /// The caption shown on the button that emits this target.
    pub fn label(&self) -> &'static str {
        match self {
            Target::Home => "Home Page",
            Target::MyLists => "My Lists",
            Target::EnterNewWords => "Enter new words",
            Target::References => "References",
            Target::UserProfile => "User Profile",
            Target::Reference => "Reference",
            Target::AboutDetails => "Details",
            Target::CheckMyLists => "Check My Lists",
        }
    }
}

/// A topbar icon panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Cart,
    Messages,
    Notifications,
}

impl Panel {
    pub fn label(&self) -> &'static str {
        match self {
            Panel::Cart => "Cart",
            Panel::Messages => "Messages",
            Panel::Notifications => "Notifications",
        }
    }
}

/// A user intention emitted by a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Target),
    OpenPanel(Panel),
    Login,
}

impl Command {
    /// Human-readable label for the placeholder notification handler.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Navigate(target) => target.label(),
            Command::OpenPanel(panel) => panel.label(),
            Command::Login => "Login",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_original_captions() {
        assert_eq!(Target::Home.label(), "Home Page");
        assert_eq!(Target::MyLists.label(), "My Lists");
        assert_eq!(Target::EnterNewWords.label(), "Enter new words");
        assert_eq!(Target::References.label(), "References");
        assert_eq!(Target::UserProfile.label(), "User Profile");
        assert_eq!(Target::AboutDetails.label(), "Details");
        assert_eq!(Target::CheckMyLists.label(), "Check My Lists");
    }

    #[test]
    fn test_command_label_delegates() {
        assert_eq!(Command::Navigate(Target::MyLists).label(), "My Lists");
        assert_eq!(Command::OpenPanel(Panel::Cart).label(), "Cart");
        assert_eq!(Command::Login.label(), "Login");
    }

    #[test]
    fn test_commands_compare_structurally() {
        assert_eq!(
            Command::Navigate(Target::Home),
            Command::Navigate(Target::Home)
        );
        assert_ne!(Command::Login, Command::OpenPanel(Panel::Messages));
    }
}
