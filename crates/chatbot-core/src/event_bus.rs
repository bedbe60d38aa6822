//! Queue of [`WidgetEvent`]s between detached work and the session.
//!
//! Reply futures and speech callbacks run outside the egui frame and cannot
//! borrow the session, so they post here; the app drains the queue at the
//! top of every frame. Single-threaded, shared through `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use chatbot_types::event::WidgetEvent;

/// Handle to the shared queue; clones post to the same queue.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<WidgetEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Queue an event for the next frame.
    pub fn emit(&self, event: WidgetEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&self) -> Vec<WidgetEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
