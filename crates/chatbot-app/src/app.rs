//! Main egui application — owns the session and routes UI actions to it.

use std::rc::Rc;
use std::time::Duration;

use chatbot_core::event_bus::EventBus;
use chatbot_core::host::announce_ready;
use chatbot_core::ports::{ChatBackendPort, HostFramePort, SpeechPort};
use chatbot_core::session::{deliver, probe_health, ChatSession, Submission};
use chatbot_platform::host::alert_user;
use chatbot_platform::{BrowserHostFrame, BrowserSpeech, HttpChatBackend};
use chatbot_types::{ChatbotError, config::WidgetConfig};
use chatbot_ui::{show_widget, theme, ChatAction};

const VOICE_UNSUPPORTED: &str =
    "Voice recognition is not supported in your browser. Please use Chrome or Edge.";

/// Poll interval while a speech session may deliver events
const LISTENING_REPAINT: Duration = Duration::from_millis(200);

pub struct WidgetApp {
    config: WidgetConfig,
    session: ChatSession,
    event_bus: EventBus,
    backend: Rc<dyn ChatBackendPort>,
    speech: Rc<dyn SpeechPort>,
    host: Rc<dyn HostFramePort>,
    first_frame: bool,
}

impl WidgetApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = WidgetConfig::from_env();
        log::info!(
            "Widget '{}' using backend {}",
            config.display_name,
            config.api_base_url
        );

        Self {
            session: ChatSession::new(&config),
            event_bus: EventBus::new(),
            backend: Rc::new(HttpChatBackend::new(&config)),
            speech: Rc::new(BrowserSpeech::new(config.speech_lang.clone())),
            host: Rc::new(BrowserHostFrame),
            config,
            first_frame: true,
        }
    }

    /// Probe backend health once (async)
    fn spawn_health_probe(&self, ctx: &egui::Context) {
        let backend = self.backend.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            probe_health(backend.as_ref(), &bus).await;
            ctx.request_repaint();
        });
    }

    /// Send a submission to the backend (async). Never awaited by the frame.
    fn dispatch(&self, submission: Submission, ctx: &egui::Context) {
        let backend = self.backend.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            deliver(backend.as_ref(), submission, &bus).await;
            ctx.request_repaint();
        });
    }

    fn apply(&mut self, action: ChatAction, ctx: &egui::Context) {
        match action {
            ChatAction::Toggle => self.session.toggle(),
            ChatAction::Submit(text) => {
                if let Some(submission) = self.session.begin_submission(text.as_deref()) {
                    self.dispatch(submission, ctx);
                }
            }
            ChatAction::ToggleVoice => {
                match self
                    .session
                    .toggle_listening(self.speech.as_ref(), &self.event_bus)
                {
                    Ok(()) => {}
                    Err(ChatbotError::SpeechUnavailable) => {
                        log::warn!("Speech recognition unavailable");
                        alert_user(VOICE_UNSUPPORTED);
                    }
                    Err(e) => log::error!("Could not start voice input: {}", e),
                }
            }
        }
    }
}

impl eframe::App for WidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            announce_ready(self.host.as_ref());
            self.spawn_health_probe(ctx);
            self.first_frame = false;
        }

        // Drain replies and speech events
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.session.process_events(events);
            ctx.request_repaint();
        }

        if self.session.is_listening() {
            ctx.request_repaint_after(LISTENING_REPAINT);
        }

        for action in show_widget(ctx, &mut self.session, &self.config) {
            self.apply(action, ctx);
        }
    }

    /// Transparent canvas so the host page shows around the widget
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }
}
