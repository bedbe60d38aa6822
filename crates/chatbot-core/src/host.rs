use chatbot_types::event::HostMessage;
use crate::ports::HostFramePort;

/// Tell the embedding page the widget is up. Returns whether a message was posted.
pub fn announce_ready(host: &dyn HostFramePort) -> bool {
    if !host.is_embedded() {
        return false;
    }
    match host.post_to_parent(&HostMessage::ChatbotReady) {
        Ok(()) => {
            log::info!("Posted CHATBOT_READY to parent frame");
            true
        }
        Err(e) => {
            log::warn!("Could not notify parent frame: {}", e);
            false
        }
    }
}
