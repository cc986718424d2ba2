//! Frame-driven simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep supplied by the host, one `tick` per frame
//! - Seeded RNG only, so equal seeds and inputs replay identically
//! - Stable iteration order (insertion order of each collection)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod tutorial;

pub use collision::{CombatOutcome, circles_overlap, particle_burst, resolve_combat};
pub use input::{HeldActions, InputAction, InputEvent};
pub use spawn::SpawnDirector;
pub use state::{Bullet, Enemy, GameEvent, Particle, Player};
pub use tick::Game;
pub use tutorial::{
    Fade, FadeEvent, Popup, PopupCommand, Tutorial, TutorialState, TutorialTrigger,
};
