//! Chat window — header, message log, quick actions and input row.

use egui::{self, Align, Color32, Layout, RichText, ScrollArea, Sense, Vec2};
use chatbot_core::render::{plain_text, render, Segment};
use chatbot_core::session::ChatSession;
use chatbot_types::config::WidgetConfig;
use chatbot_types::message::ChatMessage;
use crate::panels::markup::show_segments;
use crate::theme::*;
use crate::ChatAction;

const INPUT_ROW_HEIGHT: f32 = 44.0;

/// Render the open chat window, pushing user intents onto `actions`.
pub fn chat_window(
    ui: &mut egui::Ui,
    session: &mut ChatSession,
    config: &WidgetConfig,
    actions: &mut Vec<ChatAction>,
) {
    egui::Frame::default()
        .fill(BG_PRIMARY)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(WINDOW_SIZE.x);
            ui.set_height(WINDOW_SIZE.y);

            ui.vertical(|ui| {
                header(ui, session, config, actions);
                ui.separator();

                let log_height = ui.available_height() - INPUT_ROW_HEIGHT;
                ScrollArea::vertical()
                    .max_height(log_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in session.messages() {
                            render_message(ui, message);
                            ui.add_space(6.0);
                        }

                        if session.is_typing() {
                            typing_indicator(ui);
                        }

                        if session.shows_suggestions() {
                            suggested_prompts(ui, config, actions);
                        }
                    });

                ui.add_space(6.0);
                input_row(ui, session, actions);
            });
        });
}

fn header(
    ui: &mut egui::Ui,
    session: &ChatSession,
    config: &WidgetConfig,
    actions: &mut Vec<ChatAction>,
) {
    ui.horizontal(|ui| {
        avatar(ui, 18.0, Some(health_color(session.backend_healthy())));
        ui.vertical(|ui| {
            ui.label(
                RichText::new(&config.display_name)
                    .color(TEXT_PRIMARY)
                    .strong()
                    .size(17.0),
            );
            ui.label(RichText::new("✨ AI Assistant").color(TEXT_SECONDARY).small());
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let close = ui
                .add(egui::Button::new(RichText::new("✕").size(18.0)).frame(false))
                .on_hover_text("Close Chat");
            if close.clicked() {
                actions.push(ChatAction::Toggle);
            }
        });
    });
}

/// Round bot avatar, optionally with a status dot
fn avatar(ui: &mut egui::Ui, radius: f32, status: Option<Color32>) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(radius * 2.0), Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), radius, ACCENT);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "F",
        egui::FontId::proportional(radius),
        TEXT_PRIMARY,
    );
    if let Some(color) = status {
        let dot = rect.right_bottom() - Vec2::splat(radius * 0.25);
        painter.circle_filled(dot, radius * 0.3, color);
    }
}

/// Bubble content. Only bot replies go through the renderer; user text is
/// one verbatim run.
pub fn message_segments(message: &ChatMessage) -> Vec<Segment> {
    if message.is_user {
        vec![Segment::Text(message.text.clone())]
    } else {
        render(&message.text)
    }
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let segments = message_segments(message);
    if message.is_user {
        ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
            ui.vertical(|ui| {
                bubble(USER_BUBBLE).show(ui, |ui| {
                    ui.set_max_width(BUBBLE_MAX_WIDTH);
                    ui.label(RichText::new(plain_text(&segments)).color(TEXT_PRIMARY));
                });
                time_label(ui, message);
            });
        });
    } else {
        ui.horizontal_top(|ui| {
            avatar(ui, 12.0, None);
            ui.vertical(|ui| {
                bubble(BG_SECONDARY).show(ui, |ui| {
                    ui.set_max_width(BUBBLE_MAX_WIDTH);
                    show_segments(ui, &segments);
                });
                time_label(ui, message);
            });
        });
    }
}

fn bubble(fill: Color32) -> egui::Frame {
    egui::Frame::default()
        .fill(fill)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(8.0)
}

fn time_label(ui: &mut egui::Ui, message: &ChatMessage) {
    ui.label(
        RichText::new(message.time_label())
            .color(TEXT_SECONDARY)
            .small(),
    );
}

fn typing_indicator(ui: &mut egui::Ui) {
    let time = ui.input(|i| i.time);
    let lit = (time * 3.0) as usize % 3;

    ui.horizontal_top(|ui| {
        avatar(ui, 12.0, None);
        bubble(BG_SECONDARY).show(ui, |ui| {
            ui.horizontal(|ui| {
                for i in 0..3 {
                    let color = if i == lit { TEXT_PRIMARY } else { TEXT_SECONDARY };
                    ui.label(RichText::new("●").color(color));
                }
            });
        });
    });
    ui.ctx().request_repaint_after(std::time::Duration::from_millis(120));
}

fn suggested_prompts(ui: &mut egui::Ui, config: &WidgetConfig, actions: &mut Vec<ChatAction>) {
    ui.add_space(4.0);
    ui.label(RichText::new("Quick actions:").color(TEXT_SECONDARY).small());
    ui.horizontal_wrapped(|ui| {
        for prompt in &config.suggested_prompts {
            let button = egui::Button::new(RichText::new(prompt).color(TEXT_PRIMARY))
                .fill(BG_SURFACE)
                .corner_radius(PANEL_ROUNDING);
            if ui.add(button).clicked() {
                actions.push(ChatAction::Submit(Some(prompt.clone())));
            }
        }
    });
}

fn input_row(ui: &mut egui::Ui, session: &mut ChatSession, actions: &mut Vec<ChatAction>) {
    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut session.pending_input)
            .hint_text("Ask me anything about FED...")
            .desired_width(ui.available_width() - 96.0)
            .font(egui::FontId::proportional(14.0));
        let response = ui.add(input);

        let (mic_icon, mic_hint) = if session.is_listening() {
            ("⏹", "Stop Recording")
        } else {
            ("🎤", "Start Voice Input")
        };
        let mic_fill = if session.is_listening() { ERROR } else { BG_SURFACE };
        let mic = ui
            .add(
                egui::Button::new(RichText::new(mic_icon).color(TEXT_PRIMARY))
                    .fill(mic_fill)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(36.0, 0.0)),
            )
            .on_hover_text(mic_hint);
        if mic.clicked() {
            actions.push(ChatAction::ToggleVoice);
        }

        let send_enabled = session.can_send();
        let send = ui
            .add_enabled(
                send_enabled,
                egui::Button::new(RichText::new("➤").color(TEXT_PRIMARY))
                    .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(44.0, 0.0)),
            )
            .on_hover_text("Send Message");

        let enter_pressed = response.lost_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);

        if (enter_pressed && send_enabled) || send.clicked() {
            actions.push(ChatAction::Submit(None));
            response.request_focus();
        }
    });
}
