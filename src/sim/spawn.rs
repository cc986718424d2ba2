//! Enemy spawning and the difficulty ramp
//!
//! A cooldown counts down each tick. When it runs out one enemy is requested,
//! the cooldown restarts from the current interval, and the interval shrinks
//! by a fixed step down to a floor. That shrinking interval is the only
//! difficulty curve.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Tuning, polar_to_cartesian};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnDirector {
    /// Seconds until the next spawn
    cooldown: f32,
    /// Seconds between spawns (non-increasing)
    interval: f32,
    step: f32,
    min_interval: f32,
    distance: f32,
}

impl SpawnDirector {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            cooldown: tuning.spawn_interval,
            interval: tuning.spawn_interval,
            step: tuning.spawn_interval_step,
            min_interval: tuning.spawn_interval_min,
            distance: tuning.spawn_distance,
        }
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Count down by `dt`. Returns `true` when a spawn is due, at most once
    /// per call.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.cooldown -= dt;
        if self.cooldown > 0.0 {
            return false;
        }
        self.cooldown = self.interval;
        self.interval = (self.interval - self.step).max(self.min_interval);
        true
    }

    /// A point on the spawn ring around `center`, at a uniformly random angle
    pub fn spawn_point(&self, center: Vec2, rng: &mut impl Rng) -> Vec2 {
        let angle = rng.random_range(0.0..TAU);
        center + polar_to_cartesian(self.distance, angle)
    }
}
