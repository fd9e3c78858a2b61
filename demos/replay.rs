//! Replays a JSON event trace (see `tapwire::recorder`) through an event bus.
//!
//! Usage: `cargo run --example replay -- trace.json`. Without an argument a short
//! built-in trace is used.

use tapwire::recorder::Recorder;
use tapwire::{dispatch, ClickEvent, DragEvent, EventListener, GestureEvent};

struct Print;

impl EventListener for Print {
    fn handle_click_event(&mut self, e: &ClickEvent) {
        println!("click {:?} ({}, {}) force={}", e.phase(), e.x(), e.y(), e.force());
    }

    fn handle_drag_event(&mut self, e: &DragEvent) {
        println!("drag ({}, {}) -> ({}, {})", e.old_x(), e.old_y(), e.new_x(), e.new_y());
    }

    fn handle_gesture_event(&mut self, e: &GestureEvent) {
        println!("swipe {:?} v={} at ({}, {})", e.phase(), e.velocity(), e.x(), e.y());
    }
}

const BUILTIN: &str = r#"[
  {"type": "click", "phase": "pressed", "x": 10, "y": 20, "force": 0},
  {"type": "drag", "phase": "dragged", "old_x": 10, "old_y": 20, "new_x": 40, "new_y": 22},
  {"type": "gesture", "phase": "swipe_horizontal", "velocity": 35, "x": 40, "y": 22},
  {"type": "click", "phase": "released", "x": 40, "y": 22, "force": 0}
]"#;

fn main() -> tapwire::Result<()> {
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUILTIN.to_string(),
    };

    let mut printer = Print;
    for event in Recorder::from_json(&text)? {
        dispatch(&mut printer, &event);
    }
    Ok(())
}
