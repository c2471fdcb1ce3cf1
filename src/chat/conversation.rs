use chrono::{DateTime, Local};
use uuid::Uuid;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single message in the conversation. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn user(text: &str) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: &str) -> Self {
        Self::new(text, Sender::Bot)
    }

    fn new(text: &str, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.to_string(),
            sender,
            timestamp: Local::now(),
        }
    }
}

/// Insertion-ordered conversation history.
///
/// Append-only: there is no trimming, reordering or removal.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a conversation with a bot greeting already in place.
    pub fn with_greeting(greeting: &str) -> Self {
        let mut c = Self::new();
        c.add_bot_message(greeting);
        c
    }

    pub fn add_user_message(&mut self, text: &str) {
        self.messages.push(Message::user(text));
    }

    pub fn add_bot_message(&mut self, text: &str) {
        self.messages.push(Message::bot(text));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
