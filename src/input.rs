//! Pending input buffer
//!
//! Holds the text of an item that has been entered but not yet submitted.
//! The session fills it, submits it through `add`, and clears it once the
//! item is in the list.

/// Not-yet-submitted item text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingInput {
    content: String,
}

impl PendingInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffered text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the buffered text
    pub fn set(&mut self, content: &str) {
        self.content.clear();
        self.content.push_str(content);
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        assert_eq!(PendingInput::new().content(), "");
    }

    #[test]
    fn test_set_replaces_content() {
        let mut input = PendingInput::new();
        input.set("buy milk");
        input.set(" walk dog ");
        assert_eq!(input.content(), " walk dog ");
    }

    #[test]
    fn test_clear() {
        let mut input = PendingInput::new();
        input.set("buy milk");
        input.clear();
        assert_eq!(input, PendingInput::new());
    }
}
