//! In-memory event capture and JSON traces.
//!
//! A [`Recorder`] is a listener that keeps every event it receives. Clones share one
//! buffer, so a clone can be registered on an [`EventBus`](crate::eventbus::EventBus)
//! while the original is kept for inspection.
//!
//! Traces are a JSON array of events:
//! ```json
//! [{"type": "click", "phase": "pressed", "x": 10, "y": 20, "force": 0}]
//! ```

use crate::error::Result;
use crate::event::Event;
use crate::eventbus::EventListener;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&*self.events.borrow())?)
    }

    pub fn from_json(s: &str) -> Result<Vec<Event>> {
        Ok(serde_json::from_str(s)?)
    }
}

impl EventListener for Recorder {
    fn handle_event(&mut self, event: &Event) {
        self.events.borrow_mut().push(*event);
    }
}
