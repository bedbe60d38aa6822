use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_DISPLAY_NAME: &str = "Sage";
pub const DEFAULT_SPEECH_LANG: &str = "en-US";

/// Widget configuration, fixed at build time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Base URL of the chat backend, without trailing slash
    pub api_base_url: String,
    /// Bot name shown in the header and greeting
    pub display_name: String,
    pub speech_lang: String,
    /// Quick actions offered before the first exchange
    pub suggested_prompts: Vec<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            speech_lang: DEFAULT_SPEECH_LANG.to_string(),
            suggested_prompts: DEFAULT_PROMPTS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl WidgetConfig {
    /// Read `CHATBOT_API_URL` and `CHATBOT_NAME` as captured at compile time.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("CHATBOT_API_URL"), option_env!("CHATBOT_NAME"))
    }

    /// Build from optional overrides; unset or blank values keep the defaults.
    pub fn from_values(api_base_url: Option<&str>, display_name: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_base_url.map(str::trim).filter(|s| !s.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(name) = display_name.map(str::trim).filter(|s| !s.is_empty()) {
            config.display_name = name.to_string();
        }
        config
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.api_base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.api_base_url)
    }

    pub fn greeting(&self) -> String {
        format!(
            "Hello! I'm **{}**, your personal assistant for FED KIIT. 🚀\n\n\
             Ask me about our team, upcoming events, or how to join the society!",
            self.display_name
        )
    }
}

const DEFAULT_PROMPTS: &[&str] = &[
    "What is FED?",
    "Who is the president?",
    "Tell me about FED events",
    "How can I join FED?",
];
