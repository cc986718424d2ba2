//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here. Defaults match
//! [`crate::consts`]; a JSON file only needs the fields it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Color;
use crate::consts::*;
use crate::error::TuningError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_radius: f32,
    /// Units per second per held direction
    pub player_speed: f32,
    pub player_max_health: f32,
    pub player_color: Color,

    // === Bullets ===
    pub bullet_radius: f32,
    pub bullet_speed: f32,
    /// Seconds before a bullet expires
    pub bullet_lifetime: f32,

    // === Enemies ===
    pub enemy_radius: f32,
    pub enemy_speed: f32,
    pub enemy_color: Color,
    /// Health removed when an enemy reaches the player
    pub enemy_damage: f32,
    /// Score awarded per enemy shot down
    pub enemy_kill_score: u64,
    /// Fraction of max health restored per kill
    pub life_steal_fraction: f32,

    // === Spawn ramp ===
    /// Seconds between spawns at the start of a session
    pub spawn_interval: f32,
    /// Interval reduction applied after every spawn
    pub spawn_interval_step: f32,
    /// Floor for the interval
    pub spawn_interval_min: f32,
    /// Spawn ring radius around the player
    pub spawn_distance: f32,

    // === Particles ===
    /// Upper bound for particles per burst
    pub particle_count: u32,
    /// Random radius spread added on top of `particle_min_radius`
    pub particle_radius: f32,
    pub particle_min_radius: f32,
    pub particle_speed: f32,
    pub particle_lifetime: f32,

    // === Presentation ===
    /// Tutorial popup alpha change per second
    pub popup_fade_speed: f32,
    pub message_color: Color,
    /// Time divisor once the player is defeated
    pub death_slowdown: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_max_health: PLAYER_MAX_HEALTH,
            player_color: PLAYER_COLOR,

            bullet_radius: BULLET_RADIUS,
            bullet_speed: BULLET_SPEED,
            bullet_lifetime: BULLET_LIFETIME,

            enemy_radius: ENEMY_RADIUS,
            enemy_speed: ENEMY_SPEED,
            enemy_color: ENEMY_COLOR,
            enemy_damage: ENEMY_DAMAGE,
            enemy_kill_score: ENEMY_KILL_SCORE,
            life_steal_fraction: LIFE_STEAL_FRACTION,

            spawn_interval: ENEMY_SPAWN_INTERVAL,
            spawn_interval_step: ENEMY_SPAWN_INTERVAL_STEP,
            spawn_interval_min: ENEMY_SPAWN_INTERVAL_MIN,
            spawn_distance: ENEMY_SPAWN_DISTANCE,

            particle_count: PARTICLES_COUNT,
            particle_radius: PARTICLE_RADIUS,
            particle_min_radius: PARTICLE_MIN_RADIUS,
            particle_speed: PARTICLE_SPEED,
            particle_lifetime: PARTICLE_LIFETIME,

            popup_fade_speed: TUTORIAL_POPUP_SPEED,
            message_color: MESSAGE_COLOR,
            death_slowdown: DEATH_SLOWDOWN,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Health restored per kill
    pub fn life_steal(&self) -> f32 {
        self.player_max_health * self.life_steal_fraction
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("player_radius", self.player_radius),
            ("player_speed", self.player_speed),
            ("player_max_health", self.player_max_health),
            ("bullet_radius", self.bullet_radius),
            ("bullet_speed", self.bullet_speed),
            ("bullet_lifetime", self.bullet_lifetime),
            ("enemy_radius", self.enemy_radius),
            ("enemy_speed", self.enemy_speed),
            ("spawn_interval", self.spawn_interval),
            ("spawn_interval_min", self.spawn_interval_min),
            ("spawn_distance", self.spawn_distance),
            ("particle_lifetime", self.particle_lifetime),
            ("popup_fade_speed", self.popup_fade_speed),
            ("death_slowdown", self.death_slowdown),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("enemy_damage", self.enemy_damage),
            ("spawn_interval_step", self.spawn_interval_step),
            ("particle_radius", self.particle_radius),
            ("particle_min_radius", self.particle_min_radius),
            ("particle_speed", self.particle_speed),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, format!("must not be negative, got {value}")));
            }
        }

        if !(0.0..=1.0).contains(&self.life_steal_fraction) {
            return Err(invalid(
                "life_steal_fraction",
                format!("must be within [0, 1], got {}", self.life_steal_fraction),
            ));
        }
        if self.spawn_interval_min > self.spawn_interval {
            return Err(invalid(
                "spawn_interval_min",
                format!(
                    "{} exceeds the starting interval {}",
                    self.spawn_interval_min, self.spawn_interval
                ),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> TuningError {
    TuningError::Invalid { field, reason }
}
