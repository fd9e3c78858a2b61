//! Raw touch sources.
//!
//! A [`TouchSource`] is the hardware-facing half of the producer: it reports whether
//! the panel is touched right now and where. Turning those samples into events is
//! the job of [`TouchTracker`](crate::tracker::TouchTracker).

/// One raw reading from a touch panel, in panel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TouchSample {
    pub x: i16,
    pub y: i16,
    /// Pressure, or `0` when the panel does not report it.
    pub force: i16,
}

impl TouchSample {
    #[inline]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y, force: 0 }
    }

    #[inline]
    pub const fn with_force(x: i16, y: i16, force: i16) -> Self {
        Self { x, y, force }
    }
}

pub trait TouchSource {
    /// Current touch state: `Some` while touched, `None` otherwise.
    ///
    /// Must not block; sources that have nothing new should repeat their last state.
    fn sample_touch(&mut self) -> Option<TouchSample>;
    fn name(&self) -> &str;
    fn id(&self) -> &str;
}
