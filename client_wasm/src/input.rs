//! Keyboard and pointer input handling

#[cfg(target_arch = "wasm32")]
use web_sys::{KeyboardEvent, TouchEvent};

/// Game commands bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    TogglePause,
    ToggleSound,
}

/// Map a `KeyboardEvent.key` value to a command
pub fn key_command(key: &str) -> Option<KeyCommand> {
    match key {
        "p" | "P" | " " => Some(KeyCommand::TogglePause),
        "m" | "M" => Some(KeyCommand::ToggleSound),
        _ => None,
    }
}

/// Convert a page y coordinate into play-field y
pub fn field_y(page_y: f64, canvas_top: f64) -> f32 {
    (page_y - canvas_top) as f32
}

/// Extract key from keyboard event
#[cfg(target_arch = "wasm32")]
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}

/// Page y of the first changed touch, if any
#[cfg(target_arch = "wasm32")]
pub fn first_changed_touch_y(event: &TouchEvent) -> Option<f64> {
    event.changed_touches().get(0).map(|touch| touch.page_y() as f64)
}
