//! Sample → dispatch loop.
//!
//! [`InputManager`] owns the touch sources, one [`TouchTracker`] per source, the
//! display transform and the [`EventBus`]. Each [`InputManager::poll`] takes exactly
//! one sample from every source and dispatches the resulting events synchronously
//! before returning.

use crate::config::Config;
use crate::device::TouchSource;
use crate::event::Event;
use crate::eventbus::EventBus;
use crate::tracker::TouchTracker;
use crate::transform::DisplayTransform;

struct SourceEntry {
    source: Box<dyn TouchSource>,
    tracker: TouchTracker,
}

/// Lightweight description of a registered source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceInfo {
    pub id: String,
    pub name: String,
}

pub struct InputManager {
    config: Config,
    transform: DisplayTransform,
    sources: Vec<SourceEntry>,
    bus: EventBus,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl InputManager {
    pub fn new(config: Config) -> Self {
        Self {
            transform: DisplayTransform::from_config(&config.display),
            config,
            sources: Vec::new(),
            bus: EventBus::new(),
        }
    }

    /// Discovers HID digitizers and registers them with the default report layout.
    #[cfg(feature = "hid")]
    #[cfg_attr(docsrs, doc(cfg(feature = "hid")))]
    pub fn discover(config: Config) -> crate::Result<Self> {
        use crate::backends::hid::{probe_digitizers, ReportLayout};

        let api = hidapi::HidApi::new()?;
        let mut manager = Self::new(config);
        let found = probe_digitizers(&api, &ReportLayout::default());
        log::debug!("discovered {} HID digitizer(s)", found.len());
        for dev in found {
            manager.add_source(dev);
        }
        Ok(manager)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn add_source<S: TouchSource + 'static>(&mut self, source: S) {
        log::debug!("registered touch source {} ({})", source.name(), source.id());
        self.sources.push(SourceEntry {
            source: Box::new(source),
            tracker: TouchTracker::new(&self.config.touch),
        });
    }

    pub fn sources(&self) -> Vec<SourceInfo> {
        self.sources
            .iter()
            .map(|e| SourceInfo {
                id: e.source.id().to_string(),
                name: e.source.name().to_string(),
            })
            .collect()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Samples every source once and dispatches what changed. Returns the number of
    /// events dispatched.
    pub fn poll(&mut self) -> usize {
        let transform = &self.transform;
        let bus = &mut self.bus;
        let mut dispatched = 0;

        for entry in self.sources.iter_mut() {
            let sample = entry.source.sample_touch();
            let source_id = entry.source.id();
            dispatched += entry.tracker.update(sample, |ev: &mut Event| {
                transform.apply(ev);
                bus.emit(source_id, ev);
            });
        }
        dispatched
    }

    /// Cancels every press in progress, e.g. when the system takes focus away.
    /// Returns the number of cancel events dispatched.
    pub fn cancel_all(&mut self) -> usize {
        let transform = &self.transform;
        let bus = &mut self.bus;
        let mut dispatched = 0;

        for entry in self.sources.iter_mut() {
            let source_id = entry.source.id();
            let n = entry.tracker.cancel(|ev: &mut Event| {
                transform.apply(ev);
                bus.emit(source_id, ev);
            });
            if n > 0 {
                log::debug!("cancelled press on {source_id}");
            }
            dispatched += n;
        }
        dispatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::virtual_input::VirtualTouch;
    use crate::config::{DisplayConfig, Rotation};
    use crate::event::{ClickEvent, ClickPhase, DragEvent, DragPhase};
    use crate::eventbus::EventFilter;
    use crate::recorder::Recorder;

    #[test]
    fn poll_runs_press_drag_release() {
        let mut mgr = InputManager::default();
        let rec = Recorder::new();
        mgr.bus_mut().add_listener(rec.clone(), EventFilter::All, None);

        let mut dev = VirtualTouch::new("virtual:0", "Panel");
        dev.press(10, 20);
        dev.press(15, 25);
        dev.release();
        mgr.add_source(dev);

        let total: usize = (0..4).map(|_| mgr.poll()).sum();
        assert_eq!(total, 3);
        assert_eq!(
            rec.events(),
            vec![
                Event::Click(ClickEvent::new(ClickPhase::Pressed, 10, 20)),
                Event::Drag(DragEvent::new(DragPhase::Dragged, 10, 20, 15, 25)),
                Event::Click(ClickEvent::new(ClickPhase::Released, 15, 25)),
            ]
        );
    }

    #[test]
    fn transform_applies_before_dispatch() {
        let cfg = Config {
            display: DisplayConfig {
                width: 100,
                height: 50,
                rotation: Rotation::Cw180,
                ..DisplayConfig::default()
            },
            ..Config::default()
        };
        let mut mgr = InputManager::new(cfg);
        let rec = Recorder::new();
        mgr.bus_mut().add_listener(rec.clone(), EventFilter::ClicksOnly, None);

        let mut dev = VirtualTouch::new("virtual:0", "Panel");
        dev.press(0, 0);
        mgr.add_source(dev);
        mgr.poll();

        assert_eq!(rec.events(), vec![Event::Click(ClickEvent::new(ClickPhase::Pressed, 99, 49))]);
    }

    #[test]
    fn sources_are_tagged_and_cancelled_independently() {
        let mut mgr = InputManager::default();
        let left = Recorder::new();
        mgr.bus_mut()
            .add_listener(left.clone(), EventFilter::All, Some("left".into()));

        let mut a = VirtualTouch::new("left", "Left panel");
        a.press(1, 1);
        let mut b = VirtualTouch::new("right", "Right panel");
        b.press(2, 2);
        mgr.add_source(a);
        mgr.add_source(b);
        assert_eq!(mgr.sources().len(), 2);
        assert_eq!(mgr.sources()[1].name, "Right panel");

        assert_eq!(mgr.poll(), 2);
        assert_eq!(mgr.cancel_all(), 2);
        assert_eq!(mgr.cancel_all(), 0);

        assert_eq!(
            left.events(),
            vec![
                Event::Click(ClickEvent::new(ClickPhase::Pressed, 1, 1)),
                Event::Click(ClickEvent::new(ClickPhase::Cancel, 1, 1)),
            ]
        );

        // Fingers still down after a cancel stay ignored until they lift.
        assert_eq!(mgr.poll(), 0);
        assert_eq!(left.len(), 2);
    }
}
