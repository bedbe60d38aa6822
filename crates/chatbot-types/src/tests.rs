#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::event::*;
    use crate::config::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = ChatMessage::user(2, "Hello");
        assert_eq!(msg.id, 2);
        assert_eq!(msg.text, "Hello");
        assert!(msg.is_user);
    }

    #[test]
    fn test_message_bot() {
        let msg = ChatMessage::bot(3, "I can help");
        assert_eq!(msg.id, 3);
        assert!(!msg.is_user);
    }

    #[test]
    fn test_message_time_label_format() {
        let mut msg = ChatMessage::bot(1, "hi");
        msg.timestamp = chrono::DateTime::parse_from_rfc3339("2026-01-01T09:05:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert_eq!(msg.time_label(), "09:05");
    }

    #[test]
    fn test_message_timestamp_serializes() {
        let msg = ChatMessage::user(1, "test input");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"timestamp\""));
        let deserialized: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, msg);
    }

    #[test]
    fn test_chat_request_body_shape() {
        let req = ChatRequest { message: "What is FED?".to_string() };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"message":"What is FED?"}"#);
    }

    #[test]
    fn test_chat_reply_constructors() {
        assert_eq!(
            ChatReply::ok("FED is a club."),
            ChatReply { success: true, response: "FED is a club.".to_string() }
        );
        assert!(!ChatReply::failed("nope").success);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_host_message_wire_format() {
        let json = serde_json::to_string(&HostMessage::ChatbotReady).unwrap();
        assert_eq!(json, r#"{"type":"CHATBOT_READY"}"#);
    }

    #[test]
    fn test_widget_event_reply_received() {
        let event = WidgetEvent::ReplyReceived {
            request_id: 7,
            reply: ChatReply::ok("hello"),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("ReplyReceived"));
        let deserialized: WidgetEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = WidgetConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:4000");
        assert_eq!(config.display_name, "Sage");
        assert_eq!(config.speech_lang, "en-US");
        assert_eq!(config.suggested_prompts.len(), 4);
        assert_eq!(config.suggested_prompts[0], "What is FED?");
    }

    #[test]
    fn test_config_overrides() {
        let config = WidgetConfig::from_values(Some("https://bot.example.com/"), Some("Nova"));
        assert_eq!(config.api_base_url, "https://bot.example.com");
        assert_eq!(config.display_name, "Nova");
        assert_eq!(config.chat_url(), "https://bot.example.com/api/chat");
        assert_eq!(config.health_url(), "https://bot.example.com/health");
    }

    #[test]
    fn test_config_blank_values_fall_back() {
        let config = WidgetConfig::from_values(Some("   "), Some(""));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.display_name, DEFAULT_DISPLAY_NAME);
    }

    #[test]
    fn test_greeting_mentions_name() {
        let config = WidgetConfig::default();
        let greeting = config.greeting();
        assert!(greeting.starts_with("Hello! I'm **Sage**"));
        assert!(greeting.contains("\n\nAsk me about"));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(ChatbotError::Http(500).to_string(), "HTTP error! status: 500");
        assert_eq!(
            ChatbotError::Network("Failed to fetch".to_string()).to_string(),
            "Failed to fetch"
        );
        assert_eq!(
            ChatbotError::SpeechUnavailable.to_string(),
            "Speech recognition is not available"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: ChatbotError = serde_err.into();
        assert!(matches!(err, ChatbotError::Serialization(_)));
    }
}
