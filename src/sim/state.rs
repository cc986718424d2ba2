//! Entity types advanced by the simulation
//!
//! Entities only know how to move themselves. Anything that involves two
//! entities (kills, damage, bursts) is decided by the engine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tutorial::TutorialState;
use crate::{Color, Tuning, direction_to};

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub radius: f32,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            health: tuning.player_max_health,
            max_health: tuning.player_max_health,
            radius: tuning.player_radius,
        }
    }

    /// Advance by `vel` over `dt`. The field is unbounded, nothing is clamped.
    pub fn move_by(&mut self, dt: f32, vel: Vec2) {
        self.pos += vel * dt;
    }

    /// Fire toward `target`. The bullet starts just outside the player's
    /// circle so it never overlaps its shooter.
    pub fn shoot_at(&self, target: Vec2, tuning: &Tuning) -> Bullet {
        let dir = direction_to(self.pos, target);
        let pos = self.pos + dir * (self.radius + tuning.bullet_radius);
        Bullet::new(pos, dir * tuning.bullet_speed, tuning)
    }

    pub fn damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Health as a fraction of max, in [0, 1]
    pub fn health_fraction(&self) -> f32 {
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

/// A player projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left before the bullet is pruned
    pub lifetime: f32,
    pub radius: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel,
            lifetime: tuning.bullet_lifetime,
            radius: tuning.bullet_radius,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.lifetime -= dt;
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime <= 0.0
    }
}

/// A chaser that homes in on the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    /// Sticky: once set the enemy is removed at the end of the tick
    pub dead: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            radius: tuning.enemy_radius,
            dead: false,
        }
    }

    /// Step toward `target` at `speed`. An enemy sitting exactly on the
    /// target stays put.
    pub fn update(&mut self, dt: f32, target: Vec2, speed: f32) {
        self.pos += direction_to(self.pos, target) * speed * dt;
    }

    pub fn kill(&mut self) {
        self.dead = true;
    }
}

/// Cosmetic debris from a burst
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub lifetime: f32,
    pub radius: f32,
    pub color: Color,
}

impl Particle {
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.lifetime -= dt;
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime <= 0.0
    }
}

/// Notable things that happened during a tick, drained by the host
/// (sound cues, HUD flashes, analytics)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    EnemySpawned { pos: Vec2 },
    EnemyKilled { pos: Vec2 },
    PlayerHit { health: f32 },
    PlayerDefeated,
    TutorialAdvanced(TutorialState),
    NewBestScore(u64),
    Paused(bool),
}
