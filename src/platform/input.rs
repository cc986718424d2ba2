//! Keyboard and mouse mapping
//!
//! Codes follow the DOM `KeyboardEvent.code` names, which are layout
//! independent (`KeyW` is the same physical key on AZERTY).

use crate::sim::{InputAction, InputEvent};

/// Map a physical key code to an action. Unbound keys map to `None`.
pub fn action_for_key_code(code: &str) -> Option<InputAction> {
    match code {
        "KeyW" | "ArrowUp" => Some(InputAction::Up),
        "KeyS" | "ArrowDown" => Some(InputAction::Down),
        "KeyA" | "ArrowLeft" => Some(InputAction::Left),
        "KeyD" | "ArrowRight" => Some(InputAction::Right),
        "Space" => Some(InputAction::PauseToggle),
        _ => None,
    }
}

/// Map a mouse button index (`MouseEvent.button`) to an action
pub fn action_for_mouse_button(button: i16) -> Option<InputAction> {
    match button {
        0 => Some(InputAction::Shoot),
        _ => None,
    }
}

/// Build the key event for a code, if the code is bound
pub fn event_for_key(code: &str, pressed: bool) -> Option<InputEvent> {
    action_for_key_code(code).map(|action| {
        if pressed {
            InputEvent::KeyDown(action)
        } else {
            InputEvent::KeyUp(action)
        }
    })
}
