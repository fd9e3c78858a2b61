//! Turns raw touch samples into click and drag events.
//!
//! | previous | current | emitted                                   |
//! |----------|---------|-------------------------------------------|
//! | idle     | touched | `Click(Pressed)` at the sample            |
//! | touched  | touched | `Drag` once movement reaches the threshold |
//! | touched  | idle    | `Click(Released)` at the last point       |
//! | idle     | idle    | nothing                                   |
//!
//! [`TouchTracker::cancel`] ends a press with `Click(Cancel)` instead of `Released`.
//! A cancelled contact stays dead: touched samples are ignored until the finger
//! lifts, so it can never turn into a new press.
//!
//! The tracker keeps a single [`ClickEvent`] for the whole press and rewrites its phase
//! and coordinates in place. Each emitted event is a stack copy, so a sink may remap
//! coordinates without disturbing the tracker's own (panel-space) state.

use crate::config::TouchConfig;
use crate::device::TouchSample;
use crate::event::{ClickEvent, ClickPhase, DragEvent, DragPhase, Event};

#[derive(Clone, Debug)]
pub struct TouchTracker {
    drag_threshold: u32,
    pressed: bool,
    cancelled: bool,
    click: ClickEvent,
}

impl Default for TouchTracker {
    fn default() -> Self {
        Self::new(&TouchConfig::default())
    }
}

impl TouchTracker {
    pub fn new(cfg: &TouchConfig) -> Self {
        Self {
            drag_threshold: u32::try_from(cfg.drag_threshold).unwrap_or(0),
            pressed: false,
            cancelled: false,
            click: ClickEvent::new(ClickPhase::Released, 0, 0),
        }
    }

    /// Whether a press is in progress.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Last reported point of the current (or most recent) press.
    pub fn last_point(&self) -> (i16, i16) {
        (self.click.x(), self.click.y())
    }

    /// Feeds one sample and hands any resulting event to `sink`. Returns the number of
    /// events emitted (0 or 1).
    pub fn update(&mut self, sample: Option<TouchSample>, mut sink: impl FnMut(&mut Event)) -> usize {
        if self.cancelled {
            if sample.is_none() {
                self.cancelled = false;
            }
            return 0;
        }
        match (self.pressed, sample) {
            (false, Some(s)) => {
                self.click = ClickEvent::with_force(ClickPhase::Pressed, s.x, s.y, s.force);
                self.pressed = true;
                let mut ev = Event::Click(self.click);
                sink(&mut ev);
                1
            }
            (true, Some(s)) => {
                let (old_x, old_y) = self.last_point();
                let dx = (i32::from(s.x) - i32::from(old_x)).unsigned_abs();
                let dy = (i32::from(s.y) - i32::from(old_y)).unsigned_abs();
                if (dx == 0 && dy == 0) || (dx < self.drag_threshold && dy < self.drag_threshold) {
                    return 0;
                }
                self.click.set_x(s.x);
                self.click.set_y(s.y);
                let mut ev = Event::Drag(DragEvent::new(DragPhase::Dragged, old_x, old_y, s.x, s.y));
                sink(&mut ev);
                1
            }
            (true, None) => self.finish(ClickPhase::Released, sink),
            (false, None) => 0,
        }
    }

    /// Aborts a press in progress with `Click(Cancel)` at the last point. The contact
    /// is ignored until the next untouched sample.
    pub fn cancel(&mut self, sink: impl FnMut(&mut Event)) -> usize {
        if !self.pressed {
            return 0;
        }
        self.cancelled = true;
        self.finish(ClickPhase::Cancel, sink)
    }

    fn finish(&mut self, phase: ClickPhase, mut sink: impl FnMut(&mut Event)) -> usize {
        self.click.set_phase(phase);
        self.pressed = false;
        let mut ev = Event::Click(self.click);
        sink(&mut ev);
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(tracker: &mut TouchTracker, sample: Option<TouchSample>) -> Vec<Event> {
        let mut out = Vec::new();
        tracker.update(sample, |e| out.push(*e));
        out
    }

    #[test]
    fn press_drag_release() {
        let mut t = TouchTracker::default();

        assert_eq!(
            feed(&mut t, Some(TouchSample::with_force(10, 20, 4))),
            vec![Event::Click(ClickEvent::with_force(ClickPhase::Pressed, 10, 20, 4))]
        );
        assert!(t.is_pressed());

        assert_eq!(
            feed(&mut t, Some(TouchSample::new(12, 18))),
            vec![Event::Drag(DragEvent::new(DragPhase::Dragged, 10, 20, 12, 18))]
        );

        assert_eq!(
            feed(&mut t, None),
            vec![Event::Click(ClickEvent::with_force(ClickPhase::Released, 12, 18, 4))]
        );
        assert!(!t.is_pressed());
        assert!(feed(&mut t, None).is_empty());
    }

    #[test]
    fn stationary_touch_is_silent() {
        let mut t = TouchTracker::default();
        feed(&mut t, Some(TouchSample::new(5, 5)));
        assert!(feed(&mut t, Some(TouchSample::new(5, 5))).is_empty());
    }

    #[test]
    fn small_moves_below_threshold_are_absorbed() {
        let mut t = TouchTracker::new(&TouchConfig { drag_threshold: 3 });
        feed(&mut t, Some(TouchSample::new(0, 0)));
        assert!(feed(&mut t, Some(TouchSample::new(2, -2))).is_empty());
        assert_eq!(t.last_point(), (0, 0));

        let evs = feed(&mut t, Some(TouchSample::new(3, 1)));
        assert_eq!(evs, vec![Event::Drag(DragEvent::new(DragPhase::Dragged, 0, 0, 3, 1))]);
        assert_eq!(t.last_point(), (3, 1));
    }

    #[test]
    fn cancel_ends_press_once() {
        let mut t = TouchTracker::default();
        let mut out = Vec::new();
        assert_eq!(t.cancel(|e| out.push(*e)), 0);

        feed(&mut t, Some(TouchSample::new(-5, -5)));
        assert_eq!(t.cancel(|e| out.push(*e)), 1);
        assert_eq!(out, vec![Event::Click(ClickEvent::new(ClickPhase::Cancel, -5, -5))]);
        assert!(!t.is_pressed());

        // The finger lifting afterwards is not a second release.
        assert!(feed(&mut t, None).is_empty());
    }

    #[test]
    fn cancelled_contact_does_not_press_again() {
        let mut t = TouchTracker::default();
        feed(&mut t, Some(TouchSample::new(5, 5)));
        assert_eq!(t.cancel(|_| {}), 1);

        assert!(feed(&mut t, Some(TouchSample::new(5, 5))).is_empty());
        assert!(feed(&mut t, Some(TouchSample::new(40, 9))).is_empty());
        assert!(!t.is_pressed());
        assert!(feed(&mut t, None).is_empty());

        // A fresh touch after the lift is a new interaction.
        assert_eq!(
            feed(&mut t, Some(TouchSample::new(7, 7))),
            vec![Event::Click(ClickEvent::new(ClickPhase::Pressed, 7, 7))]
        );
    }

    #[test]
    fn full_range_jump_is_a_drag() {
        let mut t = TouchTracker::new(&TouchConfig { drag_threshold: 2 });
        feed(&mut t, Some(TouchSample::new(i16::MIN, 0)));

        assert_eq!(
            feed(&mut t, Some(TouchSample::new(i16::MAX, 0))),
            vec![Event::Drag(DragEvent::new(DragPhase::Dragged, i16::MIN, 0, i16::MAX, 0))]
        );
        assert_eq!(t.last_point(), (i16::MAX, 0));
        assert_eq!(
            feed(&mut t, None),
            vec![Event::Click(ClickEvent::new(ClickPhase::Released, i16::MAX, 0))]
        );
    }

    #[test]
    fn negative_threshold_acts_as_zero() {
        let mut t = TouchTracker::new(&TouchConfig { drag_threshold: -4 });
        feed(&mut t, Some(TouchSample::new(0, 0)));
        assert!(feed(&mut t, Some(TouchSample::new(0, 0))).is_empty());
        assert_eq!(feed(&mut t, Some(TouchSample::new(0, 1))).len(), 1);
    }

    #[test]
    fn sink_mutation_does_not_leak_into_tracker() {
        let mut t = TouchTracker::default();
        t.update(Some(TouchSample::new(1, 1)), |e| {
            if let Some(c) = e.as_click_mut() {
                c.set_x(500);
            }
        });
        assert_eq!(t.last_point(), (1, 1));
    }
}
