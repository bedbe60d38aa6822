//! Embedding page integration.

use gloo_utils::format::JsValueSerdeExt;
use wasm_bindgen::JsValue;

use chatbot_core::ports::HostFramePort;
use chatbot_types::{ChatbotError, Result, event::HostMessage};
use crate::js_err;

/// Talks to `window.parent` when the widget is loaded in an iframe.
pub struct BrowserHostFrame;

impl HostFramePort for BrowserHostFrame {
    fn is_embedded(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.parent() {
            Ok(Some(parent)) => !js_sys::Object::is(parent.as_ref(), window.as_ref()),
            _ => false,
        }
    }

    fn post_to_parent(&self, message: &HostMessage) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| ChatbotError::JsInterop("No window".to_string()))?;
        let parent = window
            .parent()
            .map_err(js_err)?
            .ok_or_else(|| ChatbotError::JsInterop("No parent frame".to_string()))?;
        let payload = JsValue::from_serde(message)?;
        parent.post_message(&payload, "*").map_err(js_err)
    }
}

/// Blocking browser alert; logs instead when there is no window.
pub fn alert_user(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert() failed: {:?}", e);
            }
        }
        None => log::warn!("{}", message),
    }
}
