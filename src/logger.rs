use crate::event::Event;
use crate::eventbus::EventListener;

/// A listener that logs every event through the `log` facade.
pub struct Logger {
    level: log::Level,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_level(log::Level::Info)
    }

    pub fn with_level(level: log::Level) -> Self {
        Logger { level }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl EventListener for Logger {
    fn handle_event(&mut self, event: &Event) {
        log::log!(self.level, "[Input] {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{ClickEvent, ClickPhase, GestureEvent, GesturePhase};
    use std::cell::RefCell;

    thread_local! {
        static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    // Records are kept per thread so parallel tests never see each other's output.
    struct Capture;

    impl log::Log for Capture {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if record.target() == "tapwire::logger" {
                RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture;

    fn captured(f: impl FnOnce()) -> Vec<(log::Level, String)> {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Trace);
        RECORDS.with(|r| r.borrow_mut().clear());
        f();
        RECORDS.with(|r| r.borrow_mut().drain(..).collect())
    }

    #[test]
    fn logs_at_configured_level() {
        let ev = Event::Gesture(GestureEvent::new(GesturePhase::SwipeVertical, -40, 10, 10));
        let records = captured(|| Logger::with_level(log::Level::Debug).handle_event(&ev));
        assert_eq!(records, vec![(log::Level::Debug, format!("[Input] {ev:?}"))]);
    }

    #[test]
    fn default_level_is_info() {
        let ev = Event::Click(ClickEvent::new(ClickPhase::Cancel, -5, -5));
        let records = captured(|| Logger::default().handle_event(&ev));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, log::Level::Info);
        assert!(records[0].1.starts_with("[Input] Click("));
        assert!(records[0].1.contains("Cancel"));
    }
}
