//! Circle Shooter - a top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, collisions, tutorial, spawning)
//! - `render`: Read-only frame snapshots handed to a drawing layer
//! - `platform`: Browser/native input and clock adaptation
//! - `persistence`: Best score storage
//! - `tuning`: Data-driven game balance

pub mod color;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod sim;
pub mod tuning;

pub use color::Color;
pub use error::{FormatError, StorageError, TuningError};
pub use tuning::Tuning;

use glam::Vec2;

/// Default game balance (see [`Tuning`] for the runtime-configurable copy)
pub mod consts {
    use crate::Color;

    /// Longest frame step the clock will hand to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 69.0;
    pub const PLAYER_SPEED: f32 = 750.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    pub const PLAYER_COLOR: Color = Color::from_rgb8(0xf4, 0x38, 0x41);

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 42.0;
    pub const BULLET_SPEED: f32 = 1500.0;
    pub const BULLET_LIFETIME: f32 = 5.0;

    /// Enemy defaults - a third of the player's speed, same size
    pub const ENEMY_SPEED: f32 = PLAYER_SPEED / 3.0;
    pub const ENEMY_RADIUS: f32 = PLAYER_RADIUS;
    pub const ENEMY_COLOR: Color = Color::from_rgb8(0x9e, 0x95, 0xc7);
    pub const ENEMY_DAMAGE: f32 = PLAYER_MAX_HEALTH / 5.0;
    pub const ENEMY_KILL_SCORE: u64 = 100;
    /// Fraction of max health restored per kill
    pub const LIFE_STEAL_FRACTION: f32 = 0.1;

    /// Spawn ramp
    pub const ENEMY_SPAWN_INTERVAL: f32 = 1.0;
    pub const ENEMY_SPAWN_INTERVAL_STEP: f32 = 0.01;
    pub const ENEMY_SPAWN_INTERVAL_MIN: f32 = 0.01;
    pub const ENEMY_SPAWN_DISTANCE: f32 = 1500.0;

    /// Particle bursts
    pub const PARTICLES_COUNT: u32 = 50;
    pub const PARTICLE_RADIUS: f32 = 10.0;
    pub const PARTICLE_MIN_RADIUS: f32 = 10.0;
    pub const PARTICLE_SPEED: f32 = BULLET_SPEED;
    pub const PARTICLE_LIFETIME: f32 = 1.0;

    /// Tutorial popup fade rate (alpha per second)
    pub const TUTORIAL_POPUP_SPEED: f32 = 1.7;
    pub const MESSAGE_COLOR: Color = Color::from_rgb8(0xff, 0xff, 0xff);
    pub const PAUSE_MESSAGE: &str = "GAME IS PAUSED (press SPACE to resume)";

    /// Time runs this many times slower once the player is defeated
    pub const DEATH_SLOWDOWN: f32 = 50.0;
}

/// Convert polar (magnitude, angle) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(mag: f32, angle: f32) -> Vec2 {
    Vec2::new(mag * angle.cos(), mag * angle.sin())
}

/// Unit vector pointing from `from` to `to`, or zero when the points coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Install the platform logger. Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Install the platform logger. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
