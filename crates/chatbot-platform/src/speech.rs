//! Speech-to-text adapter over the Web Speech API.
//!
//! Chrome and Edge only expose the prefixed `webkitSpeechRecognition`, so the
//! constructor is looked up by name on `window` instead of going through
//! web-sys bindings.

use std::cell::RefCell;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use chatbot_core::ports::{SpeechHandlers, SpeechPort};
use chatbot_types::{ChatbotError, Result};
use crate::js_err;

const CONSTRUCTOR_NAMES: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

/// Single-shot, final-result-only recognition sessions.
pub struct BrowserSpeech {
    lang: String,
    active: RefCell<Option<ActiveSession>>,
}

/// A started recognition object plus the closures it calls back into.
/// The closures must outlive every event the object can still fire.
struct ActiveSession {
    recognition: JsValue,
    _on_result: Closure<dyn FnMut(JsValue)>,
    _on_error: Closure<dyn FnMut(JsValue)>,
    _on_end: Closure<dyn FnMut(JsValue)>,
}

impl ActiveSession {
    fn call(&self, method: &str) -> Result<()> {
        let f = Reflect::get(&self.recognition, &JsValue::from_str(method))
            .map_err(js_err)?
            .dyn_into::<Function>()
            .map_err(js_err)?;
        f.call0(&self.recognition).map_err(js_err)?;
        Ok(())
    }

    /// Detach handlers and abort, so nothing fires into dropped closures.
    fn dispose(self) {
        for handler in ["onresult", "onerror", "onend"] {
            let _ = Reflect::set(&self.recognition, &JsValue::from_str(handler), &JsValue::NULL);
        }
        if let Err(e) = self.call("abort") {
            log::debug!("abort on stale recognition failed: {}", e);
        }
    }
}

impl BrowserSpeech {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            active: RefCell::new(None),
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }
}

impl SpeechPort for BrowserSpeech {
    fn is_available(&self) -> bool {
        recognition_constructor().is_some()
    }

    fn start_session(&self, handlers: SpeechHandlers) -> Result<()> {
        let ctor = recognition_constructor().ok_or(ChatbotError::SpeechUnavailable)?;
        let recognition: JsValue = Reflect::construct(&ctor, &Array::new())
            .map_err(js_err)?
            .into();

        set_prop(&recognition, "continuous", &JsValue::from_bool(false))?;
        set_prop(&recognition, "interimResults", &JsValue::from_bool(false))?;
        set_prop(&recognition, "lang", &JsValue::from_str(&self.lang))?;

        let SpeechHandlers {
            mut on_result,
            mut on_error,
            mut on_end,
        } = handlers;

        let result_cb = Closure::wrap(Box::new(move |event: JsValue| {
            match first_transcript(&event) {
                Some(text) => on_result(text),
                None => log::warn!("Speech result event carried no transcript"),
            }
        }) as Box<dyn FnMut(JsValue)>);

        let error_cb = Closure::wrap(Box::new(move |event: JsValue| {
            let code = Reflect::get(&event, &JsValue::from_str("error"))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| "unknown".to_string());
            on_error(code);
        }) as Box<dyn FnMut(JsValue)>);

        let end_cb = Closure::wrap(Box::new(move |_event: JsValue| {
            on_end();
        }) as Box<dyn FnMut(JsValue)>);

        set_prop(&recognition, "onresult", result_cb.as_ref())?;
        set_prop(&recognition, "onerror", error_cb.as_ref())?;
        set_prop(&recognition, "onend", end_cb.as_ref())?;

        let session = ActiveSession {
            recognition,
            _on_result: result_cb,
            _on_error: error_cb,
            _on_end: end_cb,
        };
        session.call("start")?;

        if let Some(previous) = self.active.replace(Some(session)) {
            previous.dispose();
        }
        log::info!("Speech recognition started ({})", self.lang);
        Ok(())
    }

    fn stop_session(&self) {
        if let Some(session) = self.active.borrow().as_ref() {
            if let Err(e) = session.call("stop") {
                log::warn!("Failed to stop speech recognition: {}", e);
            }
        }
    }
}

fn recognition_constructor() -> Option<Function> {
    let window = web_sys::window()?;
    CONSTRUCTOR_NAMES.iter().find_map(|name| {
        Reflect::get(&window, &JsValue::from_str(name))
            .ok()
            .filter(|v| v.is_function())
            .map(|v| v.unchecked_into::<Function>())
    })
}

/// `event.results[0][0].transcript`
fn first_transcript(event: &JsValue) -> Option<String> {
    let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let result = Reflect::get_u32(&results, 0).ok()?;
    let alternative = Reflect::get_u32(&result, 0).ok()?;
    Reflect::get(&alternative, &JsValue::from_str("transcript"))
        .ok()?
        .as_string()
}

fn set_prop(target: &JsValue, key: &str, value: &JsValue) -> Result<()> {
    Reflect::set(target, &JsValue::from_str(key), value).map_err(js_err)?;
    Ok(())
}
