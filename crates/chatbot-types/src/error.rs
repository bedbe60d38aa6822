use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ChatbotError {
    #[error("{0}")]
    Network(String),

    /// Non-success status from the chat backend
    #[error("HTTP error! status: {0}")]
    Http(u16),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Speech recognition is not available")]
    SpeechUnavailable,

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for ChatbotError {
    fn from(e: serde_json::Error) -> Self {
        ChatbotError::Serialization(e.to_string())
    }
}
