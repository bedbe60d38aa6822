//! HTTP chat backend adapter.
//!
//! Uses browser `fetch()` via gloo-net. Every failure is folded into a
//! `ChatReply` with `success: false`; nothing escapes as `Err`.

use async_trait::async_trait;
use gloo_net::http::Request;

use chatbot_core::backend::{reply_from_error, reply_from_response};
use chatbot_core::ports::ChatBackendPort;
use chatbot_types::{
    ChatbotError, Result,
    config::WidgetConfig,
    message::{ChatReply, ChatRequest},
};

pub struct HttpChatBackend {
    chat_url: String,
    health_url: String,
}

impl HttpChatBackend {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            chat_url: config.chat_url(),
            health_url: config.health_url(),
        }
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    pub fn health_url(&self) -> &str {
        &self.health_url
    }

    /// POST the message; returns status and body text.
    /// The body is only read for success statuses.
    async fn post_chat(&self, body: &ChatRequest) -> Result<(u16, String)> {
        let response = Request::post(&self.chat_url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ChatbotError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatbotError::Network(e.to_string()))?;

        let status = response.status();
        if !response.ok() {
            return Ok((status, String::new()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ChatbotError::Network(e.to_string()))?;
        Ok((status, text))
    }
}

#[async_trait(?Send)]
impl ChatBackendPort for HttpChatBackend {
    async fn send_message(&self, message: &str) -> Result<ChatReply> {
        let body = ChatRequest {
            message: message.to_string(),
        };

        let reply = match self.post_chat(&body).await {
            Ok((status, text)) => reply_from_response(status, &text),
            Err(e) => reply_from_error(&e),
        };

        if !reply.success {
            log::error!("Chatbot API error: {}", reply.response);
        }
        Ok(reply)
    }

    async fn health_check(&self) -> bool {
        match Request::get(&self.health_url).send().await {
            Ok(response) => response.ok(),
            Err(e) => {
                log::error!("Health check failed: {}", e);
                false
            }
        }
    }
}
