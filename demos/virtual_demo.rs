use tapwire::backends::virtual_input::VirtualTouch;
use tapwire::logger::Logger;
use tapwire::{
    ClickEvent, ClickPhase, Config, DragEvent, EventFilter, EventListener, InputManager,
};

/// Toy widget: a 100x40 button at the origin.
struct Button {
    pressed: bool,
}

impl EventListener for Button {
    fn handle_click_event(&mut self, e: &ClickEvent) {
        let inside = (0..100).contains(&e.x()) && (0..40).contains(&e.y());
        match e.phase() {
            ClickPhase::Pressed if inside => self.pressed = true,
            ClickPhase::Released if self.pressed && inside => {
                println!("button clicked");
                self.pressed = false;
            }
            ClickPhase::Released | ClickPhase::Cancel => self.pressed = false,
            ClickPhase::Pressed => {}
        }
    }

    fn handle_drag_event(&mut self, e: &DragEvent) {
        println!("drag by ({}, {})", e.delta_x(), e.delta_y());
    }
}

fn main() {
    env_logger::init();

    let config = Config::from_toml_str("[touch]\ndrag_threshold = 2\n").expect("config");
    let mut mgr = InputManager::new(config);
    mgr.bus_mut().add_listener(Logger::new(), EventFilter::All, None);
    mgr.bus_mut()
        .add_listener(Button { pressed: false }, EventFilter::All, None);

    // Press, wiggle, drag, release
    let mut panel = VirtualTouch::new("virtual:demo", "Demo panel");
    panel.press_with_force(20, 10, 180);
    panel.press(21, 10);
    panel.press(30, 12);
    panel.release();
    mgr.add_source(panel);

    for info in mgr.sources() {
        println!("- {} ({})", info.name, info.id);
    }
    for tick in 0..5 {
        let n = mgr.poll();
        println!("tick {tick}: {n} event(s)");
    }
}
