//! Chat session controller.
//!
//! Owns the message log and the widget flags. User input goes in through
//! [`ChatSession::begin_submission`]; the backend call runs as a detached
//! future ([`deliver`]) that reports back through the [`EventBus`], and the
//! app feeds drained events to [`ChatSession::process_events`] each frame.
//!
//! Submissions are not serialised: several can be in flight at once, each
//! completion appends one bot message and clears the typing flag, and
//! completions may arrive out of order. Closing the window does not cancel
//! anything.

use chatbot_types::{
    ChatbotError, Result,
    config::WidgetConfig,
    event::WidgetEvent,
    message::ChatMessage,
};
use crate::event_bus::EventBus;
use crate::ports::{ChatBackendPort, SpeechHandlers, SpeechPort};

pub const GENERIC_ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";
pub const CONNECTIVITY_ERROR_REPLY: &str =
    "Sorry, I'm having trouble connecting. Please make sure the backend is running on port 4000.";

/// A user message accepted for sending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub request_id: u64,
    pub text: String,
}

pub struct ChatSession {
    /// Text field content, edited directly by the UI
    pub pending_input: String,
    messages: Vec<ChatMessage>,
    is_open: bool,
    is_typing: bool,
    is_listening: bool,
    backend_healthy: Option<bool>,
    next_message_id: u64,
    next_request_id: u64,
}

impl ChatSession {
    /// New closed session holding only the greeting.
    pub fn new(config: &WidgetConfig) -> Self {
        let mut session = Self {
            pending_input: String::new(),
            messages: Vec::new(),
            is_open: false,
            is_typing: false,
            is_listening: false,
            backend_healthy: None,
            next_message_id: 1,
            next_request_id: 1,
        };
        session.push_bot(config.greeting());
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn is_listening(&self) -> bool {
        self.is_listening
    }

    /// `None` until the startup health probe reports back
    pub fn backend_healthy(&self) -> Option<bool> {
        self.backend_healthy
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn can_send(&self) -> bool {
        !self.pending_input.trim().is_empty()
    }

    /// Quick actions are offered until the first exchange starts.
    pub fn shows_suggestions(&self) -> bool {
        self.messages.len() == 1 && !self.is_typing
    }

    /// Accept `text` (a suggested prompt) or else the pending input.
    ///
    /// Blank input is ignored. Otherwise the user message is logged,
    /// the input cleared and the typing flag raised; the caller must
    /// hand the returned submission to [`deliver`].
    pub fn begin_submission(&mut self, text: Option<&str>) -> Option<Submission> {
        let text = match text.filter(|t| !t.is_empty()) {
            Some(t) => t.to_string(),
            None => self.pending_input.clone(),
        };
        if text.trim().is_empty() {
            return None;
        }

        self.push_user(text.clone());
        self.pending_input.clear();
        self.is_typing = true;

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        log::debug!("Submitting request {}", request_id);
        Some(Submission { request_id, text })
    }

    /// Apply events drained from the bus
    pub fn process_events(&mut self, events: Vec<WidgetEvent>) {
        for event in events {
            match event {
                WidgetEvent::ReplyReceived { request_id, reply } => {
                    if reply.success {
                        self.push_bot(reply.response);
                    } else {
                        log::warn!("Request {} failed: {}", request_id, reply.response);
                        self.push_bot(GENERIC_ERROR_REPLY);
                    }
                    self.is_typing = false;
                }
                WidgetEvent::ReplyFailed { request_id, message } => {
                    log::error!("Error sending message {}: {}", request_id, message);
                    self.push_bot(CONNECTIVITY_ERROR_REPLY);
                    self.is_typing = false;
                }
                WidgetEvent::Transcript { text } => {
                    self.pending_input = text;
                }
                WidgetEvent::SpeechError { message } => {
                    log::error!("Speech recognition error: {}", message);
                    self.is_listening = false;
                }
                WidgetEvent::SpeechEnded => {
                    self.is_listening = false;
                }
                WidgetEvent::HealthChecked { healthy } => {
                    self.backend_healthy = Some(healthy);
                }
            }
        }
    }

    /// Start or stop voice capture.
    ///
    /// Fails with [`ChatbotError::SpeechUnavailable`] when the browser has no
    /// recognition support; state is untouched in that case.
    pub fn toggle_listening(&mut self, speech: &dyn SpeechPort, bus: &EventBus) -> Result<()> {
        if self.is_listening {
            speech.stop_session();
            self.is_listening = false;
            return Ok(());
        }

        if !speech.is_available() {
            return Err(ChatbotError::SpeechUnavailable);
        }

        speech.start_session(SpeechHandlers::forward_to(bus.clone()))?;
        self.is_listening = true;
        Ok(())
    }

    fn push_user(&mut self, text: String) {
        let id = self.allocate_id();
        self.messages.push(ChatMessage::user(id, text));
    }

    fn push_bot(&mut self, text: impl Into<String>) {
        let id = self.allocate_id();
        self.messages.push(ChatMessage::bot(id, text));
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }
}

/// Run one backend call and post exactly one completion event.
///
/// Must be spawned (e.g. `wasm_bindgen_futures::spawn_local`); it holds no
/// borrow of the session.
pub async fn deliver(backend: &dyn ChatBackendPort, submission: Submission, bus: &EventBus) {
    let Submission { request_id, text } = submission;
    let event = match backend.send_message(&text).await {
        Ok(reply) => WidgetEvent::ReplyReceived { request_id, reply },
        Err(e) => WidgetEvent::ReplyFailed {
            request_id,
            message: e.to_string(),
        },
    };
    bus.emit(event);
}

/// Probe the backend once and post the outcome.
pub async fn probe_health(backend: &dyn ChatBackendPort, bus: &EventBus) {
    let healthy = backend.health_check().await;
    log::info!("Chat backend healthy: {}", healthy);
    bus.emit(WidgetEvent::HealthChecked { healthy });
}
