#[cfg(test)]
mod tests {
    use crate::panels::chat::message_segments;
    use crate::panels::markup::show_segments;
    use crate::theme::*;
    use crate::{show_widget, ChatAction};
    use chatbot_core::render::{render, Segment};
    use chatbot_core::session::ChatSession;
    use chatbot_types::config::WidgetConfig;
    use chatbot_types::message::ChatMessage;

    /// Run one headless frame and return the collected actions
    fn run_frame(ctx: &egui::Context, session: &mut ChatSession, config: &WidgetConfig) -> Vec<ChatAction> {
        let mut actions = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            actions = show_widget(ctx, session, config);
        });
        actions
    }

    // ─── Widget Tests ────────────────────────────────────────

    #[test]
    fn test_closed_widget_idle_frame_has_no_actions() {
        let ctx = egui::Context::default();
        let config = WidgetConfig::default();
        let mut session = ChatSession::new(&config);
        assert!(run_frame(&ctx, &mut session, &config).is_empty());
    }

    #[test]
    fn test_open_widget_idle_frame_has_no_actions() {
        let ctx = egui::Context::default();
        apply_theme(&ctx);
        let config = WidgetConfig::default();
        let mut session = ChatSession::new(&config);
        session.toggle();

        assert!(run_frame(&ctx, &mut session, &config).is_empty());
        assert!(session.is_open());
    }

    #[test]
    fn test_open_widget_with_pending_reply_draws() {
        let ctx = egui::Context::default();
        let config = WidgetConfig::default();
        let mut session = ChatSession::new(&config);
        session.toggle();
        session.begin_submission(Some("What is FED?")).unwrap();
        assert!(session.is_typing());

        assert!(run_frame(&ctx, &mut session, &config).is_empty());
        // input untouched by drawing
        assert!(session.pending_input.is_empty());
    }

    #[test]
    fn test_show_segments_handles_nested_markup() {
        let ctx = egui::Context::default();
        let segments = render("**@fedkiit** visit https://x.com\n\n[bad](javascript:x)");
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                show_segments(ui, &segments);
            });
        });
    }

    // ─── Message Content Tests ───────────────────────────────

    #[test]
    fn test_user_message_is_verbatim() {
        let text = "**urgent** see https://fed.example and [me](https://x.com) @fedkiit";
        let message = ChatMessage::user(2, text);
        assert_eq!(message_segments(&message), vec![Segment::Text(text.to_string())]);
    }

    #[test]
    fn test_user_message_keeps_newlines_as_text() {
        let message = ChatMessage::user(2, "line one\nline two");
        assert_eq!(
            message_segments(&message),
            vec![Segment::Text("line one\nline two".to_string())]
        );
    }

    #[test]
    fn test_bot_message_is_rendered() {
        let message = ChatMessage::bot(3, "**Hi** https://fed.example");
        let segments = message_segments(&message);
        assert_eq!(segments, render("**Hi** https://fed.example"));
        assert!(matches!(segments[0], Segment::Bold(_)));
        assert!(matches!(segments.last(), Some(Segment::Link { .. })));
    }

    // ─── Theme Tests ─────────────────────────────────────────

    #[test]
    fn test_health_color() {
        assert_eq!(health_color(Some(true)), SUCCESS);
        assert_eq!(health_color(Some(false)), ERROR);
        assert_eq!(health_color(None), WARNING);
    }

    #[test]
    fn test_apply_theme_sets_dark_mode() {
        let ctx = egui::Context::default();
        apply_theme(&ctx);
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.hyperlink_color, LINK);
    }
}
