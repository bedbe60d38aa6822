//! WASM-target tests for chatbot-core.
//!
//! Runs the renderer, EventBus and session flow under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use async_trait::async_trait;
use chatbot_core::event_bus::EventBus;
use chatbot_core::ports::ChatBackendPort;
use chatbot_core::render::{render, to_html, Segment};
use chatbot_core::session::{deliver, ChatSession, GENERIC_ERROR_REPLY};
use chatbot_types::config::WidgetConfig;
use chatbot_types::message::ChatReply;

struct FixedBackend(ChatReply);

#[async_trait(?Send)]
impl ChatBackendPort for FixedBackend {
    async fn send_message(&self, _message: &str) -> chatbot_types::Result<ChatReply> {
        Ok(self.0.clone())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

// ─── Renderer ────────────────────────────────────────────

#[wasm_bindgen_test]
fn render_plain_text() {
    assert_eq!(render("plain text"), vec![Segment::Text("plain text".to_string())]);
}

#[wasm_bindgen_test]
fn render_to_html_breaks() {
    assert_eq!(to_html(&render("a\nb")), "a<br/>b");
}

// ─── Session ─────────────────────────────────────────────

#[wasm_bindgen_test]
async fn session_success_reply() {
    let mut session = ChatSession::new(&WidgetConfig::default());
    let bus = EventBus::new();
    let backend = FixedBackend(ChatReply::ok("FED is a club."));

    let submission = session.begin_submission(Some("What is FED?")).unwrap();
    deliver(&backend, submission, &bus).await;
    session.process_events(bus.drain());

    assert_eq!(session.messages().len(), 3);
    assert_eq!(session.messages()[2].text, "FED is a club.");
    assert!(!session.is_typing());
}

#[wasm_bindgen_test]
async fn session_failed_reply() {
    let mut session = ChatSession::new(&WidgetConfig::default());
    let bus = EventBus::new();
    let backend = FixedBackend(ChatReply::failed("Error connecting to chatbot: HTTP error! status: 500"));

    let submission = session.begin_submission(Some("hi")).unwrap();
    deliver(&backend, submission, &bus).await;
    session.process_events(bus.drain());

    assert_eq!(session.messages()[2].text, GENERIC_ERROR_REPLY);
    assert!(!session.is_typing());
}
