//! Direct Message Data Structure
//!
//! Messages carry a sender id and a receiver id; conversations are not
//! first-class records. The store files each message into the bucket keyed by
//! the participant who is not the session user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reserved sender/receiver id for the AI assistant account.
pub const ASSISTANT_USER_ID: &str = "gemini";

/// Represents a direct message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Unique message ID
    pub id: String,
    /// Id of the sending user ([`ASSISTANT_USER_ID`] for assistant replies)
    pub sender_id: String,
    /// Id of the receiving user
    pub receiver_id: String,
    /// Message text
    pub text: String,
    /// When the message was sent
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new message with a generated id, stamped now
    pub fn new(
        sender_id: impl Into<String>,
        receiver_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Whether this message was sent by the assistant
    pub fn is_from_assistant(&self) -> bool {
        self.sender_id == ASSISTANT_USER_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_detection() {
        let reply = Message::new(ASSISTANT_USER_ID, "user1", "hello");
        let dm = Message::new("user1", "user2", "hello");

        assert!(reply.is_from_assistant());
        assert!(!dm.is_from_assistant());
    }
}
