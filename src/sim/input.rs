//! Device-independent input
//!
//! Raw key codes and mouse buttons are resolved to [`InputAction`]s at the
//! platform boundary (see `platform::input`); the simulation only sees these.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    Up,
    Down,
    Left,
    Right,
    Shoot,
    PauseToggle,
}

impl InputAction {
    /// Unit direction for movement actions (screen space, +y is down)
    pub fn direction(self) -> Option<Vec2> {
        match self {
            InputAction::Up => Some(Vec2::new(0.0, -1.0)),
            InputAction::Down => Some(Vec2::new(0.0, 1.0)),
            InputAction::Left => Some(Vec2::new(-1.0, 0.0)),
            InputAction::Right => Some(Vec2::new(1.0, 0.0)),
            InputAction::Shoot | InputAction::PauseToggle => None,
        }
    }
}

/// A discrete input event from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(InputAction),
    KeyUp(InputAction),
    /// Pointer moved (aim point, world coordinates)
    PointerMove(Vec2),
    /// Primary button pressed at a point
    PointerDown(Vec2),
}

/// Actions currently held down
#[derive(Debug, Clone, Default)]
pub struct HeldActions {
    held: HashSet<InputAction>,
}

impl HeldActions {
    pub fn press(&mut self, action: InputAction) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: InputAction) {
        self.held.remove(&action);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Sum of held movement directions scaled by `speed`, and whether any
    /// movement action was held. Opposite keys cancel but still count as
    /// movement.
    pub fn velocity(&self, speed: f32) -> (Vec2, bool) {
        self.held
            .iter()
            .filter_map(|action| action.direction())
            .fold((Vec2::ZERO, false), |(vel, _), dir| (vel + dir * speed, true))
    }
}
