use serde::{Deserialize, Serialize};

use crate::message::ChatReply;

/// Events produced by async work (backend calls, speech sessions).
/// The session drains these from the bus on each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WidgetEvent {
    /// The backend call resolved (successfully or with a normalised failure)
    ReplyReceived { request_id: u64, reply: ChatReply },

    /// The backend call itself was rejected
    ReplyFailed { request_id: u64, message: String },

    /// Final transcript from a speech session
    Transcript { text: String },

    /// Recognition session reported a runtime error
    SpeechError { message: String },

    /// Recognition session ended (after result, error or explicit stop)
    SpeechEnded,

    /// Result of the startup health probe
    HealthChecked { healthy: bool },
}

/// Messages posted to the embedding page when running inside a frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostMessage {
    #[serde(rename = "CHATBOT_READY")]
    ChatbotReady,
}
