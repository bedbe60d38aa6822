//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `chatbot-core` (pure Rust).
//! Implementations live in `chatbot-platform` (browser adapters).

use async_trait::async_trait;
use chatbot_types::{
    Result,
    event::{HostMessage, WidgetEvent},
    message::ChatReply,
};
use crate::event_bus::EventBus;

// ─── Chat Backend Port ───────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatBackendPort {
    /// Send one user message. Transport and HTTP failures come back as
    /// `Ok(ChatReply { success: false, .. })`; `Err` means the call itself
    /// was rejected.
    async fn send_message(&self, message: &str) -> Result<ChatReply>;

    /// `true` only when the backend answers its health endpoint with success.
    async fn health_check(&self) -> bool;
}

// ─── Speech Port ─────────────────────────────────────────────

/// Callbacks for one recognition session
pub struct SpeechHandlers {
    pub on_result: Box<dyn FnMut(String)>,
    pub on_error: Box<dyn FnMut(String)>,
    pub on_end: Box<dyn FnMut()>,
}

impl SpeechHandlers {
    /// Handlers that turn every callback into a [`WidgetEvent`] on `bus`.
    pub fn forward_to(bus: EventBus) -> Self {
        let result_bus = bus.clone();
        let error_bus = bus.clone();
        Self {
            on_result: Box::new(move |text| {
                result_bus.emit(WidgetEvent::Transcript { text });
            }),
            on_error: Box::new(move |message| {
                error_bus.emit(WidgetEvent::SpeechError { message });
            }),
            on_end: Box::new(move || {
                bus.emit(WidgetEvent::SpeechEnded);
            }),
        }
    }
}

/// Speech-to-text capability. Sessions are single-shot and final-result-only.
pub trait SpeechPort {
    fn is_available(&self) -> bool;

    fn start_session(&self, handlers: SpeechHandlers) -> Result<()>;

    /// Stop the active session, if any
    fn stop_session(&self);
}

// ─── Host Frame Port ─────────────────────────────────────────

pub trait HostFramePort {
    /// Whether the widget runs inside a parent frame
    fn is_embedded(&self) -> bool;

    fn post_to_parent(&self, message: &HostMessage) -> Result<()>;
}
