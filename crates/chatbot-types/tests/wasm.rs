//! WASM-target tests for chatbot-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use chatbot_types::config::*;
use chatbot_types::error::*;
use chatbot_types::event::*;
use chatbot_types::message::*;

#[wasm_bindgen_test]
fn message_constructors() {
    let user = ChatMessage::user(1, "Hello");
    let bot = ChatMessage::bot(2, "Hi there");
    assert!(user.is_user);
    assert!(!bot.is_user);
    assert_eq!(bot.id, 2);
}

#[wasm_bindgen_test]
fn message_timestamp_uses_js_clock() {
    let msg = ChatMessage::bot(1, "hi");
    assert_eq!(msg.time_label().len(), 5);
}

#[wasm_bindgen_test]
fn host_message_wire_format() {
    let json = serde_json::to_string(&HostMessage::ChatbotReady).unwrap();
    assert_eq!(json, r#"{"type":"CHATBOT_READY"}"#);
}

#[wasm_bindgen_test]
fn default_config() {
    let config = WidgetConfig::default();
    assert_eq!(config.api_base_url, "http://localhost:4000");
    assert_eq!(config.display_name, "Sage");
}

#[wasm_bindgen_test]
fn error_display() {
    assert_eq!(ChatbotError::Http(404).to_string(), "HTTP error! status: 404");
}
