use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// What the assistant page renders.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatSnapshot {
    pub greeting: String,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub typing: bool,
}

/// Append-only conversation. Ids start at 1 and are handed out at append
/// time, so they increase strictly in log order.
#[derive(Debug)]
pub struct ChatLog {
    greeting: String,
    messages: Vec<ChatMessage>,
    next_id: u64,
    input: String,
    pending_replies: usize,
}

impl ChatLog {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
            messages: Vec::new(),
            next_id: 1,
            input: String::new(),
            pending_replies: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn append(&mut self, role: ChatRole, content: String, timestamp: DateTime<Utc>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content,
            timestamp,
        });
        id
    }

    /// Records a user turn and marks one assistant reply as owed.
    pub fn open_turn(&mut self, content: String, timestamp: DateTime<Utc>) -> u64 {
        let id = self.append(ChatRole::User, content, timestamp);
        self.input.clear();
        self.pending_replies += 1;
        id
    }

    /// Settles one owed reply.
    pub fn close_turn(&mut self, reply: String, timestamp: DateTime<Utc>) -> u64 {
        let id = self.append(ChatRole::Assistant, reply, timestamp);
        self.pending_replies = self.pending_replies.saturating_sub(1);
        id
    }

    /// Forgets every owed reply; used on teardown.
    pub fn drop_pending(&mut self) {
        self.pending_replies = 0;
    }

    pub fn snapshot(&self) -> ChatSnapshot {
        ChatSnapshot {
            greeting: self.greeting.clone(),
            messages: self.messages.clone(),
            input: self.input.clone(),
            typing: self.is_typing(),
        }
    }
}
