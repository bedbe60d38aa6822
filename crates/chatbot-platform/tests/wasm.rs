//! WASM-target tests for chatbot-platform (Node.js runtime).
//!
//! Node has no `window`, so these cover the adapters' behaviour when the
//! browser capabilities are missing. Network tests require a browser and
//! live in browser.rs.

use wasm_bindgen_test::*;

use chatbot_core::ports::{HostFramePort, SpeechHandlers, SpeechPort};
use chatbot_platform::{BrowserHostFrame, BrowserSpeech, HttpChatBackend};
use chatbot_types::config::WidgetConfig;
use chatbot_types::ChatbotError;

fn noop_handlers() -> SpeechHandlers {
    SpeechHandlers {
        on_result: Box::new(|_| {}),
        on_error: Box::new(|_| {}),
        on_end: Box::new(|| {}),
    }
}

#[wasm_bindgen_test]
fn backend_urls_from_config() {
    let backend = HttpChatBackend::new(&WidgetConfig::default());
    assert_eq!(backend.chat_url(), "http://localhost:4000/api/chat");
    assert_eq!(backend.health_url(), "http://localhost:4000/health");
}

#[wasm_bindgen_test]
fn speech_unavailable_without_window() {
    let speech = BrowserSpeech::new("en-US");
    assert_eq!(speech.lang(), "en-US");
    assert!(!speech.is_available());
    let result = speech.start_session(noop_handlers());
    assert!(matches!(result, Err(ChatbotError::SpeechUnavailable)));
    // no active session: must not panic
    speech.stop_session();
}

#[wasm_bindgen_test]
fn host_frame_not_embedded_without_window() {
    assert!(!BrowserHostFrame.is_embedded());
}
