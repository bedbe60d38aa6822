use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the chat log. Never mutated after it is pushed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_user: true,
            timestamp: Utc::now(),
        }
    }

    pub fn bot(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_user: false,
            timestamp: Utc::now(),
        }
    }

    /// `HH:MM` in UTC, as shown under each bubble
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Request body for `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Normalised outcome of one backend call.
/// `response` always carries displayable text, even when `success` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub success: bool,
    pub response: String,
}

impl ChatReply {
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            success: true,
            response: response.into(),
        }
    }

    pub fn failed(response: impl Into<String>) -> Self {
        Self {
            success: false,
            response: response.into(),
        }
    }
}
