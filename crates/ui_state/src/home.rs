//! Page-root state for the home page.

/// State owned by the home page composition root.
///
/// The popup starts visible and can only be dismissed; nothing re-opens it
/// within a mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeState {
    popup_visible: bool,
}

impl HomeState {
    pub fn new() -> Self {
        Self { popup_visible: true }
    }

    pub fn popup_visible(&self) -> bool {
        self.popup_visible
    }

    /// Hide the popup. Idempotent.
    pub fn dismiss_popup(&mut self) {
        self.popup_visible = false;
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_starts_visible() {
        assert!(HomeState::new().popup_visible());
    }

    #[test]
    fn test_dismiss_hides_popup() {
        let mut state = HomeState::new();
        state.dismiss_popup();
        assert!(!state.popup_visible());
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut state = HomeState::new();
        state.dismiss_popup();
        state.dismiss_popup();
        state.dismiss_popup();
        assert!(!state.popup_visible());
    }
}
