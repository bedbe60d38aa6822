//! Browser adapters for the chatbot-core ports.

pub mod backend;
pub mod host;
pub mod speech;

pub use backend::HttpChatBackend;
pub use host::BrowserHostFrame;
pub use speech::BrowserSpeech;

use chatbot_types::ChatbotError;
use wasm_bindgen::JsValue;

pub(crate) fn js_err(e: JsValue) -> ChatbotError {
    ChatbotError::JsInterop(format!("{:?}", e))
}
