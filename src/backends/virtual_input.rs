use crate::device::{TouchSample, TouchSource};
use std::collections::VecDeque;

/// Scripted in-memory touch panel.
///
/// Each call to [`TouchSource::sample_touch`] consumes one queued sample. Once the
/// script runs dry the last state is repeated, like a real panel that has not changed.
#[derive(Default)]
pub struct VirtualTouch {
    id: String,
    name: String,
    script: VecDeque<Option<TouchSample>>,
    current: Option<TouchSample>,
}

impl VirtualTouch {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Queue a raw sample (`None` = not touched).
    pub fn queue(&mut self, sample: Option<TouchSample>) {
        self.script.push_back(sample);
    }

    pub fn press(&mut self, x: i16, y: i16) {
        self.queue(Some(TouchSample::new(x, y)));
    }

    pub fn press_with_force(&mut self, x: i16, y: i16, force: i16) {
        self.queue(Some(TouchSample::with_force(x, y, force)));
    }

    pub fn release(&mut self) {
        self.queue(None);
    }

    /// Samples still waiting to be read.
    pub fn pending(&self) -> usize {
        self.script.len()
    }
}

impl TouchSource for VirtualTouch {
    fn sample_touch(&mut self) -> Option<TouchSample> {
        if let Some(next) = self.script.pop_front() {
            self.current = next;
        }
        self.current
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_plays_then_holds() {
        let mut dev = VirtualTouch::new("virtual:0", "Virtual Touch 0");
        dev.press_with_force(1, 2, 3);
        dev.release();
        assert_eq!(dev.pending(), 2);

        assert_eq!(dev.sample_touch(), Some(TouchSample::with_force(1, 2, 3)));
        assert_eq!(dev.sample_touch(), None);
        assert_eq!(dev.sample_touch(), None);

        dev.press(4, 4);
        assert_eq!(dev.sample_touch(), Some(TouchSample::new(4, 4)));
        assert_eq!(dev.sample_touch(), Some(TouchSample::new(4, 4)));
        assert_eq!(dev.id(), "virtual:0");
        assert_eq!(dev.name(), "Virtual Touch 0");
    }
}
