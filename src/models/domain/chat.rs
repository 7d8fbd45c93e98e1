use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// A tutoring conversation. The priming context is an explicit constructor
/// parameter held apart from the transcript, so the visible message list
/// contains only what the user and the tutor actually exchanged.
#[derive(Clone, Debug)]
pub struct ChatSession {
    id: Uuid,
    initial_context: String,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(initial_context: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            initial_context: initial_context.to_string(),
            messages: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn initial_context(&self) -> &str {
        &self.initial_context
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, content: &str) {
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: content.to_string(),
        });
    }

    pub fn push_assistant(&mut self, content: &str) {
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: content.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_context_never_appears_in_the_transcript() {
        let mut session = ChatSession::new("Explain the topic \"Pointers\" in detail.");
        session.push_user("What is a dangling pointer?");
        session.push_assistant("A pointer to freed memory.");

        assert_eq!(session.messages().len(), 2);
        assert!(session
            .messages()
            .iter()
            .all(|m| !m.content.contains("Pointers\" in detail")));
        assert_eq!(session.initial_context(), "Explain the topic \"Pointers\" in detail.");
    }

    #[test]
    fn transcript_preserves_order_and_roles() {
        let mut session = ChatSession::new("seed");
        session.push_user("first");
        session.push_assistant("second");
        session.push_user("third");

        let roles: Vec<ChatRole> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::User, ChatRole::Assistant, ChatRole::User]
        );
    }
}
