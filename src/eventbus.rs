//! Consumer-side dispatch.
//!
//! Consumers implement [`EventListener`], overriding the handlers for the kinds they
//! care about. [`dispatch`] routes an [`Event`] to the matching handler with an
//! exhaustive `match`, so a new kind cannot be silently dropped.
//!
//! [`EventBus`] fans events out to many listeners, each with an [`EventFilter`], an
//! optional source tag and an enabled flag.

use crate::event::{ClickEvent, DragEvent, Event, GestureEvent};
use std::collections::BTreeMap;

/// Reacts to input events. All handlers default to doing nothing.
pub trait EventListener {
    fn handle_click_event(&mut self, _event: &ClickEvent) {}
    fn handle_drag_event(&mut self, _event: &DragEvent) {}
    fn handle_gesture_event(&mut self, _event: &GestureEvent) {}

    /// Entry point used by [`EventBus`]. Override to see every event before (or
    /// instead of) per-kind routing.
    fn handle_event(&mut self, event: &Event) {
        dispatch(self, event);
    }
}

/// Routes `event` to the handler for its kind.
pub fn dispatch<L: EventListener + ?Sized>(listener: &mut L, event: &Event) {
    match event {
        Event::Click(e) => listener.handle_click_event(e),
        Event::Drag(e) => listener.handle_drag_event(e),
        Event::Gesture(e) => listener.handle_gesture_event(e),
    }
}

/// Determines which events a listener wants to receive.
#[derive(Debug, Clone, Copy)]
pub enum EventFilter {
    All,
    ClicksOnly,
    DragsOnly,
    GesturesOnly,
    Custom(fn(&Event) -> bool),
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::ClicksOnly => matches!(event, Event::Click(_)),
            EventFilter::DragsOnly => matches!(event, Event::Drag(_)),
            EventFilter::GesturesOnly => matches!(event, Event::Gesture(_)),
            EventFilter::Custom(f) => f(event),
        }
    }
}

/// Handle returned by [`EventBus::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Metadata-wrapped listener with filter and control flags.
struct ListenerEntry {
    listener: Box<dyn EventListener>,
    enabled: bool,
    filter: EventFilter,
    tag: Option<String>, // source id this listener is restricted to
}

/// Ordered set of listeners. Events reach listeners in registration order.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: BTreeMap<ListenerId, ListenerEntry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener with a filter and an optional source tag.
    pub fn add_listener(
        &mut self,
        listener: impl EventListener + 'static,
        filter: EventFilter,
        tag: Option<String>,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
                tag,
            },
        );
        id
    }

    /// Enables a previously registered listener.
    pub fn enable(&mut self, id: ListenerId) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Mutes a listener without removing it.
    pub fn disable(&mut self, id: ListenerId) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Emits one event from `source` to all active, matching listeners. Returns how
    /// many listeners received it.
    pub fn emit(&mut self, source: &str, event: &Event) -> usize {
        let mut reached = 0;
        for entry in self.listeners.values_mut() {
            if !entry.enabled {
                continue;
            }

            if let Some(ref wanted) = entry.tag {
                if wanted != source {
                    continue;
                }
            }

            if entry.filter.matches(event) {
                entry.listener.handle_event(event);
                reached += 1;
            }
        }
        log::trace!("{source}: {event:?} -> {reached} listener(s)");
        reached
    }

    /// Emits a batch of events from `source`.
    pub fn emit_all(&mut self, source: &str, events: &[Event]) -> usize {
        events.iter().map(|e| self.emit(source, e)).sum()
    }
}
