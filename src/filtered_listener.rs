use crate::event::Event;
use crate::eventbus::EventListener;

/// Wraps a listener and forwards only events accepted by a predicate.
pub struct FilteredListener {
    predicate: Box<dyn Fn(&Event) -> bool>,
    inner: Box<dyn EventListener>,
}

impl FilteredListener {
    pub fn new(
        predicate: impl Fn(&Event) -> bool + 'static,
        inner: impl EventListener + 'static,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            inner: Box::new(inner),
        }
    }
}

impl EventListener for FilteredListener {
    fn handle_event(&mut self, event: &Event) {
        if (self.predicate)(event) {
            self.inner.handle_event(event);
        }
    }
}
