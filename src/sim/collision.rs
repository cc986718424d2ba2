//! Collision detection and combat resolution
//!
//! Everything is a circle, so overlap is a center-distance check. Counts stay
//! in the tens, so the enemy x bullet scan is a plain nested loop.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Bullet, Enemy, Particle, Player};
use crate::{Color, Tuning, polar_to_cartesian};

/// True if two circles touch or overlap
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) <= a_radius + b_radius
}

/// Scatter a random number of particles (0 up to the configured cap) out of
/// `center`, each with random heading, speed, lifetime and size
pub fn particle_burst(
    particles: &mut Vec<Particle>,
    center: Vec2,
    color: Color,
    tuning: &Tuning,
    rng: &mut impl Rng,
) {
    let count = rng.random_range(0..=tuning.particle_count);
    particles.reserve(count as usize);
    for _ in 0..count {
        let speed = rng.random::<f32>() * tuning.particle_speed;
        let heading = rng.random_range(0.0..TAU);
        particles.push(Particle {
            pos: center,
            vel: polar_to_cartesian(speed, heading),
            lifetime: rng.random::<f32>() * tuning.particle_lifetime,
            radius: rng.random::<f32>() * tuning.particle_radius + tuning.particle_min_radius,
            color,
        });
    }
}

/// What one combat pass did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatOutcome {
    /// Positions of enemies shot down this pass
    pub kills: Vec<Vec2>,
    /// Number of enemies that reached the player
    pub player_hits: u32,
}

/// Resolve bullet/enemy and enemy/player contacts for one tick.
///
/// A shot-down enemy is marked dead, the bullet's lifetime is zeroed, the
/// player is healed by the life-steal amount and a burst in the enemy color
/// is emitted. A bullet keeps hitting for the rest of the pass, so it can
/// take out every enemy it overlaps. An enemy touching a living player deals
/// damage, dies, and bursts in the player color.
pub fn resolve_combat(
    player: &mut Player,
    enemies: &mut [Enemy],
    bullets: &mut [Bullet],
    particles: &mut Vec<Particle>,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> CombatOutcome {
    let mut outcome = CombatOutcome::default();

    for enemy in enemies.iter_mut() {
        for bullet in bullets.iter_mut() {
            if enemy.dead {
                break;
            }
            if circles_overlap(enemy.pos, enemy.radius, bullet.pos, bullet.radius) {
                enemy.kill();
                bullet.lifetime = 0.0;
                player.heal(tuning.life_steal());
                particle_burst(particles, enemy.pos, tuning.enemy_color, tuning, rng);
                outcome.kills.push(enemy.pos);
            }
        }

        if !enemy.dead
            && player.is_alive()
            && circles_overlap(enemy.pos, enemy.radius, player.pos, player.radius)
        {
            player.damage(tuning.enemy_damage);
            enemy.kill();
            particle_burst(particles, enemy.pos, tuning.player_color, tuning, rng);
            outcome.player_hits += 1;
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_circles_overlap_boundary() {
        assert!(circles_overlap(Vec2::ZERO, 1.0, Vec2::new(2.0, 0.0), 1.0));
        assert!(!circles_overlap(Vec2::ZERO, 1.0, Vec2::new(2.01, 0.0), 1.0));
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::ZERO, 0.0));
    }

    #[test]
    fn test_particle_burst_bounds() {
        let tuning = Tuning::default();
        let mut rng = rng();
        let mut particles = Vec::new();
        for _ in 0..20 {
            particles.clear();
            particle_burst(
                &mut particles,
                Vec2::new(5.0, 5.0),
                tuning.enemy_color,
                &tuning,
                &mut rng,
            );
            assert!(particles.len() <= tuning.particle_count as usize);
            for p in &particles {
                assert_eq!(p.pos, Vec2::new(5.0, 5.0));
                assert!(p.vel.length() <= tuning.particle_speed + 1e-2);
                assert!((0.0..=tuning.particle_lifetime).contains(&p.lifetime));
                assert!(p.radius >= tuning.particle_min_radius);
                assert!(p.radius <= tuning.particle_min_radius + tuning.particle_radius);
                assert_eq!(p.color, tuning.enemy_color);
            }
        }
    }

    #[test]
    fn test_bullet_kills_enemy_and_heals() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::ZERO, &tuning);
        player.damage(50.0);
        let mut enemies = vec![Enemy::new(Vec2::new(1000.0, 0.0), &tuning)];
        let mut bullets = vec![Bullet::new(Vec2::new(1050.0, 0.0), Vec2::ZERO, &tuning)];
        let mut particles = Vec::new();

        let outcome = resolve_combat(
            &mut player,
            &mut enemies,
            &mut bullets,
            &mut particles,
            &tuning,
            &mut rng(),
        );

        assert_eq!(outcome.kills, vec![Vec2::new(1000.0, 0.0)]);
        assert_eq!(outcome.player_hits, 0);
        assert!(enemies[0].dead);
        assert_eq!(bullets[0].lifetime, 0.0);
        assert!((player.health - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_one_bullet_kills_every_overlapping_enemy() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::ZERO, &tuning);
        let mut enemies = vec![
            Enemy::new(Vec2::new(960.0, 0.0), &tuning),
            Enemy::new(Vec2::new(1040.0, 0.0), &tuning),
            Enemy::new(Vec2::new(3000.0, 0.0), &tuning),
        ];
        let mut bullets = vec![Bullet::new(Vec2::new(1000.0, 0.0), Vec2::ZERO, &tuning)];
        let mut particles = Vec::new();

        let outcome = resolve_combat(
            &mut player,
            &mut enemies,
            &mut bullets,
            &mut particles,
            &tuning,
            &mut rng(),
        );

        assert_eq!(outcome.kills.len(), 2);
        assert!(enemies[0].dead && enemies[1].dead);
        assert!(!enemies[2].dead);
    }

    #[test]
    fn test_enemy_in_range_of_two_bullets_dies_once() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::ZERO, &tuning);
        let mut enemies = vec![Enemy::new(Vec2::new(1000.0, 0.0), &tuning)];
        let mut bullets = vec![
            Bullet::new(Vec2::new(990.0, 0.0), Vec2::ZERO, &tuning),
            Bullet::new(Vec2::new(1010.0, 0.0), Vec2::ZERO, &tuning),
        ];
        let mut particles = Vec::new();

        let outcome = resolve_combat(
            &mut player,
            &mut enemies,
            &mut bullets,
            &mut particles,
            &tuning,
            &mut rng(),
        );

        assert_eq!(outcome.kills.len(), 1);
        assert_eq!(bullets[0].lifetime, 0.0);
        assert_eq!(bullets[1].lifetime, tuning.bullet_lifetime);
    }

    #[test]
    fn test_enemy_touching_player_deals_damage() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::ZERO, &tuning);
        let mut enemies = vec![Enemy::new(Vec2::new(100.0, 0.0), &tuning)];
        let mut particles = Vec::new();

        let outcome = resolve_combat(
            &mut player,
            &mut enemies,
            &mut [],
            &mut particles,
            &tuning,
            &mut rng(),
        );

        assert_eq!(outcome.player_hits, 1);
        assert!(outcome.kills.is_empty());
        assert!(enemies[0].dead);
        assert_eq!(player.health, tuning.player_max_health - tuning.enemy_damage);
        assert!(particles.iter().all(|p| p.color == tuning.player_color));
    }

    #[test]
    fn test_defeated_player_is_not_hit() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::ZERO, &tuning);
        player.damage(tuning.player_max_health);
        let mut enemies = vec![Enemy::new(Vec2::ZERO, &tuning)];
        let mut particles = Vec::new();

        let outcome = resolve_combat(
            &mut player,
            &mut enemies,
            &mut [],
            &mut particles,
            &tuning,
            &mut rng(),
        );

        assert_eq!(outcome.player_hits, 0);
        assert!(!enemies[0].dead);
    }

    #[test]
    fn test_shot_enemy_does_not_also_hit_player() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::ZERO, &tuning);
        let mut enemies = vec![Enemy::new(Vec2::new(100.0, 0.0), &tuning)];
        let mut bullets = vec![Bullet::new(Vec2::new(150.0, 0.0), Vec2::ZERO, &tuning)];
        let mut particles = Vec::new();

        let outcome = resolve_combat(
            &mut player,
            &mut enemies,
            &mut bullets,
            &mut particles,
            &tuning,
            &mut rng(),
        );

        assert_eq!(outcome.kills.len(), 1);
        assert_eq!(outcome.player_hits, 0);
        assert_eq!(player.health, tuning.player_max_health);
    }
}
