//! Coordinate remapping from touch-panel space to display space.
//!
//! Events are rewritten in place through their setters; phase, force and velocity
//! are left alone. The mapping is mirror, then rotate, then offset. Arithmetic wraps
//! and nothing is clamped: points outside the panel stay outside.

use crate::config::{DisplayConfig, Rotation};
use crate::event::Event;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayTransform {
    width: i16,
    height: i16,
    rotation: Rotation,
    mirror_x: bool,
    mirror_y: bool,
    offset_x: i16,
    offset_y: i16,
}

impl Default for DisplayTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl DisplayTransform {
    /// A transform that leaves every point where it is.
    pub fn identity() -> Self {
        Self {
            width: 0,
            height: 0,
            rotation: Rotation::None,
            mirror_x: false,
            mirror_y: false,
            offset_x: 0,
            offset_y: 0,
        }
    }

    pub fn from_config(cfg: &DisplayConfig) -> Self {
        Self {
            width: cfg.width,
            height: cfg.height,
            rotation: cfg.rotation,
            mirror_x: cfg.mirror_x,
            mirror_y: cfg.mirror_y,
            offset_x: cfg.offset_x,
            offset_y: cfg.offset_y,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rotation == Rotation::None
            && !self.mirror_x
            && !self.mirror_y
            && self.offset_x == 0
            && self.offset_y == 0
    }

    /// Maps one panel point into display space.
    pub fn map_point(&self, x: i16, y: i16) -> (i16, i16) {
        let max_x = self.width.wrapping_sub(1);
        let max_y = self.height.wrapping_sub(1);

        let x = if self.mirror_x { max_x.wrapping_sub(x) } else { x };
        let y = if self.mirror_y { max_y.wrapping_sub(y) } else { y };

        let (x, y) = match self.rotation {
            Rotation::None => (x, y),
            Rotation::Cw90 => (max_y.wrapping_sub(y), x),
            Rotation::Cw180 => (max_x.wrapping_sub(x), max_y.wrapping_sub(y)),
            Rotation::Cw270 => (y, max_x.wrapping_sub(x)),
        };

        (x.wrapping_add(self.offset_x), y.wrapping_add(self.offset_y))
    }

    /// Rewrites every coordinate carried by `event`.
    pub fn apply(&self, event: &mut Event) {
        if self.is_identity() {
            return;
        }
        match event {
            Event::Click(e) => {
                let (x, y) = self.map_point(e.x(), e.y());
                e.set_x(x);
                e.set_y(y);
            }
            Event::Drag(e) => {
                let (ox, oy) = self.map_point(e.old_x(), e.old_y());
                let (nx, ny) = self.map_point(e.new_x(), e.new_y());
                e.set_old_x(ox);
                e.set_old_y(oy);
                e.set_new_x(nx);
                e.set_new_y(ny);
            }
            Event::Gesture(e) => {
                let (x, y) = self.map_point(e.x(), e.y());
                e.set_x(x);
                e.set_y(y);
            }
        }
    }
}
