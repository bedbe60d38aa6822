//! egui rendering of the chat widget.
//!
//! Panels only read the session (plus the input buffer they edit) and report
//! what the user did as [`ChatAction`]s; the app applies them.

pub mod panels;
pub mod theme;

#[cfg(test)]
mod tests;

use chatbot_core::session::ChatSession;
use chatbot_types::config::WidgetConfig;

/// User intent collected during one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    /// Open or close the chat window
    Toggle,
    /// Send a suggested prompt, or the input field when `None`
    Submit(Option<String>),
    /// Start or stop voice capture
    ToggleVoice,
}

/// Draw the whole widget for this frame.
pub fn show_widget(
    ctx: &egui::Context,
    session: &mut ChatSession,
    config: &WidgetConfig,
) -> Vec<ChatAction> {
    let mut actions = Vec::new();

    if !session.is_open() {
        if panels::launcher::launcher_button(ctx) {
            actions.push(ChatAction::Toggle);
        }
        return actions;
    }

    if panels::launcher::backdrop(ctx) {
        actions.push(ChatAction::Toggle);
    }

    egui::Area::new(egui::Id::new("chat_window"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .show(ctx, |ui| {
            panels::chat::chat_window(ui, session, config, &mut actions);
        });

    actions
}
