//! Browser-only tests for chatbot-platform.
//!
//! Run with `wasm-pack test --headless --chrome`.

use wasm_bindgen_test::*;

use chatbot_core::ports::ChatBackendPort;
use chatbot_platform::HttpChatBackend;
use chatbot_types::config::WidgetConfig;

wasm_bindgen_test_configure!(run_in_browser);

/// Nothing listens on the discard port
fn unreachable_backend() -> HttpChatBackend {
    HttpChatBackend::new(&WidgetConfig::from_values(Some("http://127.0.0.1:9"), None))
}

#[wasm_bindgen_test]
async fn health_check_unreachable_is_false() {
    assert!(!unreachable_backend().health_check().await);
}

#[wasm_bindgen_test]
async fn send_message_unreachable_is_normalised() {
    let reply = unreachable_backend()
        .send_message("What is FED?")
        .await
        .expect("adapter never returns Err");
    assert!(!reply.success);
    assert!(reply.response.starts_with("Error connecting to chatbot: "));
}

