//! tapwire: touch and pointer input events for embedded UI toolkits.
//!
//! Hardware-facing producers sample a touch panel, build small, `Copy`, heap-free
//! [`Event`] values on their own stack frame and hand them by reference to consumers,
//! which route them by kind with an exhaustive `match`.
//!
//! ```
//! use tapwire::backends::virtual_input::VirtualTouch;
//! use tapwire::{ClickEvent, EventFilter, EventListener, InputManager};
//!
//! struct PrintClicks;
//!
//! impl EventListener for PrintClicks {
//!     fn handle_click_event(&mut self, e: &ClickEvent) {
//!         println!("{:?} at ({}, {})", e.phase(), e.x(), e.y());
//!     }
//! }
//!
//! let mut mgr = InputManager::default();
//! mgr.bus_mut().add_listener(PrintClicks, EventFilter::ClicksOnly, None);
//!
//! let mut panel = VirtualTouch::new("virtual:0", "Virtual panel");
//! panel.press(10, 20);
//! panel.release();
//! mgr.add_source(panel);
//!
//! assert_eq!(mgr.poll(), 1); // pressed
//! assert_eq!(mgr.poll(), 1); // released
//! ```

pub mod backends;
pub mod config;
pub mod device;
pub mod error;
pub mod event;
pub mod eventbus;
pub mod filtered_listener;
pub mod logger;
pub mod manager;
pub mod recorder;
pub mod tracker;
pub mod transform;

pub use config::*;
pub use device::*;
pub use error::{Error, Result};
pub use event::*;
pub use eventbus::*;
pub use manager::*;
pub use tracker::TouchTracker;
pub use transform::DisplayTransform;
