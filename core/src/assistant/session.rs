use crate::answer;
use crate::knowledge::GREETING;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// In-memory chat transcript. Lives for one session and is never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// A new session opens with the assistant's greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::Bot,
                text: GREETING.to_owned(),
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record a user message. Blank input is ignored and returns `false`.
    pub fn submit(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            role: Role::User,
            text: input.to_owned(),
        });
        true
    }

    pub fn reply(&mut self, text: &str) {
        self.messages.push(ChatMessage {
            role: Role::Bot,
            text: text.to_owned(),
        });
    }

    /// Submit a question and answer it immediately.
    pub fn ask(&mut self, question: &str) -> Option<&'static str> {
        if !self.submit(question) {
            return None;
        }
        let response = answer::resolve(question);
        self.reply(response);
        Some(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Bot);
        assert_eq!(session.messages()[0].text, GREETING);
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut session = ChatSession::new();
        assert_eq!(session.ask("   \t"), None);
        assert!(!session.submit(""));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_ask_records_pair() {
        let mut session = ChatSession::new();
        let response = session.ask("How should a ladder be positioned?").unwrap();
        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[2].role, Role::Bot);
        assert_eq!(messages[2].text, response);
    }

    #[test]
    fn test_transcript_serializes_roles() {
        let mut session = ChatSession::new();
        session.ask("ladder");
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["messages"][0]["role"], "bot");
        assert_eq!(json["messages"][1]["role"], "user");
    }
}
