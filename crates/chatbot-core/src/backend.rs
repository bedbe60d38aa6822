//! Normalisation of raw backend outcomes into [`ChatReply`].
//!
//! Adapters hand over whatever the transport produced; these functions decide
//! what the user will eventually read.

use serde_json::Value;
use chatbot_types::{ChatbotError, message::ChatReply};

pub const NO_RESPONSE_PLACEHOLDER: &str = "No response received";

/// Interpret a completed HTTP exchange.
pub fn reply_from_response(status: u16, body: &str) -> ChatReply {
    if !(200..300).contains(&status) {
        return reply_from_error(&ChatbotError::Http(status));
    }

    match serde_json::from_str::<Value>(body) {
        Ok(data) => ChatReply::ok(extract_text(&data)),
        Err(e) => reply_from_error(&e.into()),
    }
}

/// Failure reply embedding the underlying error message.
pub fn reply_from_error(err: &ChatbotError) -> ChatReply {
    ChatReply::failed(format!("Error connecting to chatbot: {}", err))
}

/// `response`, else `message`, else the placeholder. Empty strings don't count.
fn extract_text(data: &Value) -> String {
    ["response", "message"]
        .iter()
        .filter_map(|key| data.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .unwrap_or(NO_RESPONSE_PLACEHOLDER)
        .to_string()
}
