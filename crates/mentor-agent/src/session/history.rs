//! Owned message history for one session.

use crate::Message;

/// Ordered record of one conversation.
///
/// Append-only: messages are never removed except by a full [`clear`].
/// Agents hold this only through a store lookup, never a private copy.
///
/// [`clear`]: SessionHistory::clear
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    messages: Vec<Message>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Remove every message, keeping the history's identity.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Owned copy of the messages, for building a backend request
    /// without holding borrows into the history.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn append_preserves_insertion_order() {
        let mut history = SessionHistory::new();
        history.append(Message::user("first"));
        history.append(Message::assistant("second"));
        history.append(Message::user("third"));

        let contents: Vec<&str> = history
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, ["first", "second", "third"]);
        assert_eq!(history.messages()[1].role, Role::Assistant);
    }

    #[test]
    fn clear_empties_in_place() {
        let mut history = SessionHistory::new();
        history.append(Message::user("hello"));
        assert_eq!(history.len(), 1);

        history.clear();
        assert!(history.is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn snapshot_is_detached() {
        let mut history = SessionHistory::new();
        history.append(Message::user("hello"));

        let snapshot = history.snapshot();
        history.append(Message::assistant("world"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(history.len(), 2);
    }
}
