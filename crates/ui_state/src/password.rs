//! Password draft held by the password popup.

/// The popup's single text field.
///
/// Replaced wholesale on every input event; no validation, never
/// persisted. The save action reads the draft and the popup is dismissed,
/// discarding it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordDraft {
    value: String,
}

impl PasswordDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft with the field's current contents.
    pub fn set(&mut self, value: String) {
        self.value = value;
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert_eq!(PasswordDraft::new().value(), "");
    }

    #[test]
    fn test_tracks_typed_text() {
        let mut draft = PasswordDraft::new();
        // Each keystroke delivers the whole field value, as input events do.
        let mut typed = String::new();
        for ch in "hunter2".chars() {
            typed.push(ch);
            draft.set(typed.clone());
            assert_eq!(draft.value(), typed);
        }
        assert_eq!(draft.value(), "hunter2");
    }

    #[test]
    fn test_set_replaces_rather_than_appends() {
        let mut draft = PasswordDraft::new();
        draft.set("first".to_string());
        draft.set("second".to_string());
        assert_eq!(draft.value(), "second");
    }
}
