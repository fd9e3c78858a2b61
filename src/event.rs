//! Input events.
//!
//! tapwire represents every hardware-originated input change as one variant of the
//! closed [`Event`] sum type. Each variant wraps a small, `Copy`, heap-free value
//! ([`ClickEvent`], [`DragEvent`], [`GestureEvent`]) that producers build on their own
//! stack frame and hand to consumers by reference.
//!
//! ## Kind vs. phase
//! - The **kind** ([`EventType`]) says which payload is present and which variant a
//!   consumer may narrow to. It is derived from the variant and never stored.
//! - The **phase** ([`ClickPhase`], [`DragPhase`], [`GesturePhase`]) is payload: it says
//!   where in its lifecycle the event currently sits. Changing the phase never changes
//!   the kind.
//!
//! ## Value conventions
//! - Coordinates, force and velocity are plain `i16` in the producer's coordinate space.
//! - No clamping, range checks or unit conversion happen here. Negative values are
//!   legal (off-surface or edge samples) and are preserved exactly.
//! - `force` is `0` when the input device does not report pressure.
//!
//! ## Adding a kind
//! Append a value to [`EventType`] and a variant to [`Event`]. Existing discriminants
//! must never be renumbered; every exhaustive consumer `match` then fails to compile
//! until it handles the new kind.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Closed enumeration of event kinds.
///
/// Discriminants are stable and additive: they may be persisted or sent over a wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum EventType {
    /// A press/release/cancel transition ([`ClickEvent`]).
    Click = 0,
    /// Pointer movement while pressed ([`DragEvent`]).
    Drag = 1,
    /// A recognised swipe ([`GestureEvent`]).
    Gesture = 2,
}

impl EventType {
    /// Every kind, in discriminant order.
    pub const ALL: [EventType; 3] = [EventType::Click, EventType::Drag, EventType::Gesture];
}

impl TryFrom<u8> for EventType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EventType::Click),
            1 => Ok(EventType::Drag),
            2 => Ok(EventType::Gesture),
            _ => Err(Error::InvalidDiscriminant {
                what: "event type",
                value,
            }),
        }
    }
}

/// Implemented by every concrete event and by [`Event`] itself.
///
/// No default implementation: every event names its own kind.
pub trait EventKind {
    /// The kind of this event. Pure and total.
    fn event_type(&self) -> EventType;
}

/// Any input event.
///
/// Match on the variant (or call [`EventKind::event_type`]) before reading payload.
/// Narrowing through [`Event::as_click`] and friends returns `None` on a kind mismatch,
/// so there is no unchecked downcast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Click(ClickEvent),
    Drag(DragEvent),
    Gesture(GestureEvent),
}

impl EventKind for Event {
    #[inline]
    fn event_type(&self) -> EventType {
        match self {
            Event::Click(e) => e.event_type(),
            Event::Drag(e) => e.event_type(),
            Event::Gesture(e) => e.event_type(),
        }
    }
}

impl Event {
    /// Shorthand for [`EventKind::event_type`].
    #[inline]
    pub fn event_type(&self) -> EventType {
        EventKind::event_type(self)
    }

    #[inline]
    pub fn as_click(&self) -> Option<&ClickEvent> {
        match self {
            Event::Click(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_click_mut(&mut self) -> Option<&mut ClickEvent> {
        match self {
            Event::Click(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_drag(&self) -> Option<&DragEvent> {
        match self {
            Event::Drag(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_drag_mut(&mut self) -> Option<&mut DragEvent> {
        match self {
            Event::Drag(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_gesture(&self) -> Option<&GestureEvent> {
        match self {
            Event::Gesture(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_gesture_mut(&mut self) -> Option<&mut GestureEvent> {
        match self {
            Event::Gesture(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ClickEvent> for Event {
    fn from(e: ClickEvent) -> Self {
        Event::Click(e)
    }
}

impl From<DragEvent> for Event {
    fn from(e: DragEvent) -> Self {
        Event::Drag(e)
    }
}

impl From<GestureEvent> for Event {
    fn from(e: GestureEvent) -> Self {
        Event::Gesture(e)
    }
}

/// Lifecycle phase of a click.
///
/// By convention `Pressed` starts an interaction, `Released` ends a completed one and
/// `Cancel` ends an aborted one (e.g. focus taken by the system). The type itself
/// accepts any phase at any time; sequencing is the producer's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ClickPhase {
    Pressed = 0,
    Released = 1,
    Cancel = 2,
}

impl TryFrom<u8> for ClickPhase {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ClickPhase::Pressed),
            1 => Ok(ClickPhase::Released),
            2 => Ok(ClickPhase::Cancel),
            _ => Err(Error::InvalidDiscriminant {
                what: "click phase",
                value,
            }),
        }
    }
}

/// One discrete press/release/cancel transition at a point.
///
/// `x`, `y` and the phase may be rewritten in place so a producer can reuse one value
/// across a whole press lifecycle, and so coordinate remapping needs no new value.
/// `force` is fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClickEvent {
    phase: ClickPhase,
    x: i16,
    y: i16,
    #[serde(default)]
    force: i16,
}

impl ClickEvent {
    /// A click without pressure information (`force() == 0`).
    #[inline]
    pub const fn new(phase: ClickPhase, x: i16, y: i16) -> Self {
        Self::with_force(phase, x, y, 0)
    }

    /// A click with a device-reported pressure.
    ///
    /// On touch displays `force` is usually how hard the user pressed; desktop
    /// simulators report `0`.
    #[inline]
    pub const fn with_force(phase: ClickPhase, x: i16, y: i16, force: i16) -> Self {
        Self { phase, x, y, force }
    }

    #[inline]
    pub const fn x(&self) -> i16 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i16 {
        self.y
    }

    #[inline]
    pub fn set_x(&mut self, x: i16) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: i16) {
        self.y = y;
    }

    #[inline]
    pub const fn phase(&self) -> ClickPhase {
        self.phase
    }

    #[inline]
    pub fn set_phase(&mut self, phase: ClickPhase) {
        self.phase = phase;
    }

    #[inline]
    pub const fn force(&self) -> i16 {
        self.force
    }
}

impl EventKind for ClickEvent {
    /// Always [`EventType::Click`], whatever the phase.
    #[inline]
    fn event_type(&self) -> EventType {
        EventType::Click
    }
}

/// Phase of a drag. Drags have a single phase today; the enum keeps room for more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DragPhase {
    Dragged = 0,
}

impl TryFrom<u8> for DragPhase {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DragPhase::Dragged),
            _ => Err(Error::InvalidDiscriminant {
                what: "drag phase",
                value,
            }),
        }
    }
}

/// Pointer movement from `(old_x, old_y)` to `(new_x, new_y)` while pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragEvent {
    phase: DragPhase,
    old_x: i16,
    old_y: i16,
    new_x: i16,
    new_y: i16,
}

impl DragEvent {
    #[inline]
    pub const fn new(phase: DragPhase, old_x: i16, old_y: i16, new_x: i16, new_y: i16) -> Self {
        Self {
            phase,
            old_x,
            old_y,
            new_x,
            new_y,
        }
    }

    #[inline]
    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    #[inline]
    pub const fn old_x(&self) -> i16 {
        self.old_x
    }

    #[inline]
    pub const fn old_y(&self) -> i16 {
        self.old_y
    }

    #[inline]
    pub const fn new_x(&self) -> i16 {
        self.new_x
    }

    #[inline]
    pub const fn new_y(&self) -> i16 {
        self.new_y
    }

    #[inline]
    pub fn set_old_x(&mut self, x: i16) {
        self.old_x = x;
    }

    #[inline]
    pub fn set_old_y(&mut self, y: i16) {
        self.old_y = y;
    }

    #[inline]
    pub fn set_new_x(&mut self, x: i16) {
        self.new_x = x;
    }

    #[inline]
    pub fn set_new_y(&mut self, y: i16) {
        self.new_y = y;
    }

    /// Horizontal movement, `new_x - old_x` (wrapping).
    #[inline]
    pub const fn delta_x(&self) -> i16 {
        self.new_x.wrapping_sub(self.old_x)
    }

    /// Vertical movement, `new_y - old_y` (wrapping).
    #[inline]
    pub const fn delta_y(&self) -> i16 {
        self.new_y.wrapping_sub(self.old_y)
    }
}

impl EventKind for DragEvent {
    #[inline]
    fn event_type(&self) -> EventType {
        EventType::Drag
    }
}

/// Direction of a swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum GesturePhase {
    SwipeHorizontal = 0,
    SwipeVertical = 1,
}

impl TryFrom<u8> for GesturePhase {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GesturePhase::SwipeHorizontal),
            1 => Ok(GesturePhase::SwipeVertical),
            _ => Err(Error::InvalidDiscriminant {
                what: "gesture phase",
                value,
            }),
        }
    }
}

/// A swipe reported at `(x, y)` with a signed velocity along the swipe axis.
///
/// tapwire only carries gestures; recognising them is up to the producer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GestureEvent {
    phase: GesturePhase,
    velocity: i16,
    x: i16,
    y: i16,
}

impl GestureEvent {
    #[inline]
    pub const fn new(phase: GesturePhase, velocity: i16, x: i16, y: i16) -> Self {
        Self {
            phase,
            velocity,
            x,
            y,
        }
    }

    #[inline]
    pub const fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[inline]
    pub const fn velocity(&self) -> i16 {
        self.velocity
    }

    #[inline]
    pub const fn x(&self) -> i16 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i16 {
        self.y
    }

    #[inline]
    pub fn set_x(&mut self, x: i16) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: i16) {
        self.y = y;
    }
}

impl EventKind for GestureEvent {
    #[inline]
    fn event_type(&self) -> EventType {
        EventType::Gesture
    }
}
