//! Platform abstraction layer
//!
//! Adapts what the host delivers into what the simulation consumes:
//! - Key codes → [`crate::sim::InputAction`]
//! - Frame timestamps → per-tick `dt`

pub mod input;
pub mod time;

pub use input::{action_for_key_code, action_for_mouse_button, event_for_key};
pub use time::FrameClock;
