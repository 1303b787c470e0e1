use serde::{Deserialize, Serialize};

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One role-tagged message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// An append-only, ordered log of chat turns.
///
/// A conversation is owned by exactly one generation run. It only ever grows:
/// turns are appended, never mutated in place, so every model call sees the
/// full history of prior attempts and their errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn {
            role: Role::User,
            content: content.into(),
        });
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(Turn {
            role: Role::Assistant,
            content: content.into(),
        });
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent turn together with everything that came before it.
    pub fn split_last(&self) -> Option<(&Turn, &[Turn])> {
        self.turns.split_last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_append_in_order() {
        let mut conversation = Conversation::new();
        conversation.push_user("first");
        conversation.push_assistant("second");
        conversation.push_user("third");

        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation.turns()[0].role, Role::User);
        assert_eq!(conversation.turns()[1].role, Role::Assistant);
        assert_eq!(conversation.turns()[2].content, "third");
    }

    #[test]
    fn test_split_last() {
        let mut conversation = Conversation::new();
        assert!(conversation.split_last().is_none());

        conversation.push_user("prompt");
        conversation.push_assistant("reply");
        conversation.push_user("error report");

        let (last, history) = conversation.split_last().unwrap();
        assert_eq!(last.content, "error report");
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].content, "reply");
    }

    #[test]
    fn test_empty() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert_eq!(conversation.len(), 0);
    }
}
