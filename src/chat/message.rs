use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const WELCOME_ID: &str = "welcome-message";
pub const WELCOME_TEXT: &str = "Welcome to the chat! How can I help you with your design?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: format!("msg-{}", Uuid::new_v4().simple()),
            text: text.into(),
            sender,
            timestamp: now_millis(),
        }
    }

    pub fn welcome() -> Self {
        Self {
            id: WELCOME_ID.to_string(),
            ..Self::new(WELCOME_TEXT, Sender::Assistant)
        }
    }

    /// Text of the simulated assistant reply to `text`.
    pub fn reply_text(text: &str) -> String {
        format!("I received your message: \"{text}\". This is a simulated response.")
    }
}

/// Append-only, ordered chat history of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// A log holding only the assistant welcome message.
    pub fn seeded() -> Self {
        Self {
            messages: vec![ChatMessage::welcome()],
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
