//! Touch sources for `tapwire`.
//!
//! Implementations of [`TouchSource`](crate::device::TouchSource).
//!
//! # Feature flags
//! - **`hid`**: HID digitizer backend via `hidapi`.
//!
//! [`virtual_input`] is always available and is what tests and demos drive.

pub mod virtual_input;

#[cfg(feature = "hid")]
#[cfg_attr(docsrs, doc(cfg(feature = "hid")))]
pub mod hid;
