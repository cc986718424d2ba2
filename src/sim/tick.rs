//! The simulation engine
//!
//! [`Game`] owns every entity collection and advances them once per frame in
//! a fixed order. Input handlers mutate held keys, pause and bullets between
//! ticks; the host serializes both on its event loop.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::resolve_combat;
use super::input::{HeldActions, InputAction, InputEvent};
use super::spawn::SpawnDirector;
use super::state::{Bullet, Enemy, GameEvent, Particle, Player};
use super::tutorial::{Tutorial, TutorialState, TutorialTrigger};
use crate::Tuning;
use crate::consts::PAUSE_MESSAGE;
use crate::persistence::{BestScoreStore, MemoryStore};
use crate::render::{CircleView, PlayerView, PopupView, RenderFrame};

pub struct Game {
    tuning: Tuning,
    seed: u64,
    rng: Pcg32,
    player: Player,
    bullets: Vec<Bullet>,
    enemies: Vec<Enemy>,
    particles: Vec<Particle>,
    tutorial: Tutorial,
    spawner: SpawnDirector,
    held: HeldActions,
    /// Last known pointer position
    aim: Vec2,
    paused: bool,
    score: u64,
    best_score: u64,
    store: Box<dyn BestScoreStore>,
    events: Vec<GameEvent>,
}

impl Game {
    /// New session with an in-memory best score.
    ///
    /// `tuning` is used as given; run [`Tuning::validate`] on anything not
    /// loaded through [`Tuning::from_json`] or [`Tuning::load`].
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_store(tuning, seed, Box::new(MemoryStore::new()))
    }

    /// New session backed by `store` for the best score
    pub fn with_store(tuning: Tuning, seed: u64, store: Box<dyn BestScoreStore>) -> Self {
        debug_assert!(
            tuning.death_slowdown > 0.0,
            "death_slowdown must be positive, got {}",
            tuning.death_slowdown
        );
        let best_score = store.get_best_score().unwrap_or(0);
        log::info!("New game (seed {}, best score {})", seed, best_score);
        Self {
            player: Player::new(start_position(&tuning), &tuning),
            tutorial: Tutorial::new(tuning.popup_fade_speed),
            spawner: SpawnDirector::new(&tuning),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            tuning,
            bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            held: HeldActions::default(),
            aim: Vec2::ZERO,
            paused: false,
            score: 0,
            best_score,
            store,
            events: Vec::new(),
        }
    }

    /// Start a new session. The best score carries over; a tutorial that was
    /// already completed is not shown again.
    pub fn restart(&mut self) {
        self.player = Player::new(start_position(&self.tuning), &self.tuning);
        self.bullets.clear();
        self.enemies.clear();
        self.particles.clear();
        self.spawner = SpawnDirector::new(&self.tuning);
        self.tutorial = if self.tutorial.is_finished() {
            Tutorial::finished(self.tuning.popup_fade_speed)
        } else {
            Tutorial::new(self.tuning.popup_fade_speed)
        };
        self.held.clear();
        self.paused = false;
        self.score = 0;
        log::info!("Session restarted (best score {})", self.best_score);
    }

    /// Advance the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if self.paused {
            return;
        }

        // Slow-motion once defeated
        let dt = if self.player.is_alive() {
            dt
        } else {
            dt / self.tuning.death_slowdown
        };

        let (vel, moved) = self.held.velocity(self.tuning.player_speed);
        if moved {
            self.advance_tutorial(TutorialTrigger::PlayerMoved);
        }
        self.player.move_by(dt, vel);

        self.tutorial.update(dt);

        self.resolve_combat();

        for bullet in &mut self.bullets {
            bullet.update(dt);
        }
        self.bullets.retain(|b| !b.is_expired());

        for particle in &mut self.particles {
            particle.update(dt);
        }
        self.particles.retain(|p| !p.is_expired());

        let target = self.player.pos;
        for enemy in &mut self.enemies {
            enemy.update(dt, target, self.tuning.enemy_speed);
        }
        self.enemies.retain(|e| !e.dead);

        if self.tutorial.is_finished() && self.spawner.tick(dt) {
            let pos = self.spawner.spawn_point(self.player.pos, &mut self.rng);
            log::debug!("Enemy spawned at ({:.0}, {:.0})", pos.x, pos.y);
            self.enemies.push(Enemy::new(pos, &self.tuning));
            self.events.push(GameEvent::EnemySpawned { pos });
        }
    }

    fn resolve_combat(&mut self) {
        let was_alive = self.player.is_alive();
        let outcome = resolve_combat(
            &mut self.player,
            &mut self.enemies,
            &mut self.bullets,
            &mut self.particles,
            &self.tuning,
            &mut self.rng,
        );

        for pos in outcome.kills {
            log::debug!("Enemy killed at ({:.0}, {:.0})", pos.x, pos.y);
            self.events.push(GameEvent::EnemyKilled { pos });
            self.award_kill();
        }

        if outcome.player_hits > 0 {
            self.events.push(GameEvent::PlayerHit {
                health: self.player.health,
            });
        }
        if was_alive && !self.player.is_alive() {
            log::info!("Player defeated with score {}", self.score);
            self.events.push(GameEvent::PlayerDefeated);
        }
    }

    fn award_kill(&mut self) {
        self.score += self.tuning.enemy_kill_score;
        if self.score > self.best_score {
            self.best_score = self.score;
            self.store.set_best_score(self.score);
            log::debug!("New best score {}", self.score);
            self.events.push(GameEvent::NewBestScore(self.score));
        }
    }

    fn advance_tutorial(&mut self, trigger: TutorialTrigger) {
        if let Some(state) = self.tutorial.trigger(trigger) {
            log::info!("Tutorial advanced to {:?}", state);
            self.events.push(GameEvent::TutorialAdvanced(state));
        }
    }

    // === Input ===

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(action) => self.key_down(action),
            InputEvent::KeyUp(action) => self.key_up(action),
            InputEvent::PointerMove(pos) => self.aim = pos,
            InputEvent::PointerDown(pos) => {
                self.pointer_down(pos);
            }
        }
    }

    pub fn key_down(&mut self, action: InputAction) {
        match action {
            InputAction::PauseToggle => self.toggle_pause(),
            InputAction::Shoot => {
                self.shoot_at(self.aim);
            }
            _ => self.held.press(action),
        }
    }

    pub fn key_up(&mut self, action: InputAction) {
        self.held.release(action);
    }

    /// Aim at `pos` and fire. Returns whether a bullet was fired.
    pub fn pointer_down(&mut self, pos: Vec2) -> bool {
        self.aim = pos;
        self.shoot_at(pos)
    }

    /// Fire at `target` unless paused or defeated
    pub fn shoot_at(&mut self, target: Vec2) -> bool {
        if self.paused || !self.player.is_alive() {
            return false;
        }
        self.advance_tutorial(TutorialTrigger::PlayerShot);
        self.bullets.push(self.player.shoot_at(target, &self.tuning));
        true
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
        self.events.push(GameEvent::Paused(self.paused));
    }

    // === Queries ===

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn tutorial(&self) -> &Tutorial {
        &self.tutorial
    }

    pub fn tutorial_state(&self) -> TutorialState {
        self.tutorial.state()
    }

    pub fn spawner(&self) -> &SpawnDirector {
        &self.spawner
    }

    pub fn aim(&self) -> Vec2 {
        self.aim
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn store(&self) -> &dyn BestScoreStore {
        self.store.as_ref()
    }

    /// Take the events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Desaturation for this frame: full while paused, otherwise rising as
    /// health drops
    pub fn grayness(&self) -> f32 {
        if self.paused {
            1.0
        } else {
            1.0 - self.player.health_fraction()
        }
    }

    /// Read-only view of everything the drawing layer needs
    pub fn snapshot(&self) -> RenderFrame {
        let tuning = &self.tuning;
        let bullets = self
            .bullets
            .iter()
            .map(|b| CircleView {
                pos: b.pos,
                radius: b.radius,
                color: tuning.player_color,
            })
            .collect();
        let particles = self
            .particles
            .iter()
            .map(|p| CircleView {
                pos: p.pos,
                radius: p.radius,
                color: p
                    .color
                    .with_alpha((p.lifetime / tuning.particle_lifetime).clamp(0.0, 1.0)),
            })
            .collect();
        let enemies = self
            .enemies
            .iter()
            .map(|e| CircleView {
                pos: e.pos,
                radius: e.radius,
                color: tuning.enemy_color,
            })
            .collect();

        let popup = if self.paused {
            PopupView {
                text: PAUSE_MESSAGE,
                color: tuning.message_color,
            }
        } else {
            let popup = self.tutorial.popup();
            PopupView {
                text: popup.text,
                color: tuning.message_color.with_alpha(popup.alpha),
            }
        };

        RenderFrame {
            player: PlayerView {
                circle: CircleView {
                    pos: self.player.pos,
                    radius: self.player.radius,
                    color: tuning.player_color,
                },
                health: self.player.health,
                max_health: self.player.max_health,
                alive: self.player.is_alive(),
            },
            bullets,
            particles,
            enemies,
            popup,
            paused: self.paused,
            score: self.score,
            best_score: self.best_score,
            grayness: self.grayness(),
        }
    }
}

fn start_position(tuning: &Tuning) -> Vec2 {
    Vec2::splat(tuning.player_radius + 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn game() -> Game {
        Game::new(Tuning::default(), 12345)
    }

    /// Walk the tutorial to Finished
    fn finish_tutorial(game: &mut Game) {
        game.key_down(InputAction::Right);
        game.tick(DT);
        game.key_up(InputAction::Right);
        assert!(game.pointer_down(game.player().pos + Vec2::new(0.0, -500.0)));
        assert_eq!(game.tutorial_state(), TutorialState::Finished);
    }

    #[test]
    fn test_fresh_game() {
        let game = game();
        assert_eq!(game.tutorial_state(), TutorialState::LearningMovement);
        assert_eq!(game.player().pos, Vec2::splat(79.0));
        assert_eq!(game.player().health, 100.0);
        assert_eq!(game.score(), 0);
        assert!(game.enemies().is_empty());
        assert!(!game.is_paused());
    }

    #[test]
    fn test_move_one_second_right() {
        let mut game = game();
        let x0 = game.player().pos.x;
        game.handle_input(InputEvent::KeyDown(InputAction::Right));
        game.tick(1.0);
        assert_eq!(game.player().pos.x, x0 + 750.0);
        assert_eq!(game.player().pos.y, 79.0);
        assert_eq!(game.tutorial_state(), TutorialState::LearningShooting);
    }

    #[test]
    fn test_repeated_movement_does_not_skip_tutorial() {
        let mut game = game();
        game.key_down(InputAction::Up);
        for _ in 0..120 {
            game.tick(DT);
        }
        assert_eq!(game.tutorial_state(), TutorialState::LearningShooting);
        let advances = game
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::TutorialAdvanced(_)))
            .count();
        assert_eq!(advances, 1);
    }

    #[test]
    fn test_bullet_lifetime_and_pruning() {
        let mut game = game();
        game.pointer_down(Vec2::new(5000.0, 79.0));
        assert_eq!(game.bullets().len(), 1);

        for _ in 0..10 {
            game.tick(0.25);
        }
        let expected = game.tuning().bullet_lifetime - 2.5;
        assert!((game.bullets()[0].lifetime - expected).abs() < 1e-4);

        for _ in 0..10 {
            game.tick(0.25);
        }
        assert!(game.bullets().is_empty());
    }

    #[test]
    fn test_enemy_hits_player() {
        let mut game = game();
        let pos = game.player().pos + Vec2::new(50.0, 0.0);
        game.enemies.push(Enemy::new(pos, &game.tuning));

        game.tick(DT);

        assert_eq!(game.player().health, 80.0);
        assert!(game.enemies().is_empty());
        assert_eq!(game.score(), 0);
        assert!(
            game.drain_events()
                .contains(&GameEvent::PlayerHit { health: 80.0 })
        );
    }

    #[test]
    fn test_enemy_hit_clamps_health_at_zero() {
        let mut game = game();
        game.player.health = 5.0;
        let pos = game.player().pos;
        game.enemies.push(Enemy::new(pos + Vec2::new(10.0, 0.0), &game.tuning));

        game.tick(DT);

        assert_eq!(game.player().health, 0.0);
        assert!(!game.player().is_alive());
        assert!(game.drain_events().contains(&GameEvent::PlayerDefeated));
    }

    #[test]
    fn test_kill_scores_and_heals() {
        let mut game = game();
        game.player.damage(50.0);
        let pos = Vec2::new(1000.0, 1000.0);
        game.enemies.push(Enemy::new(pos, &game.tuning));
        game.bullets.push(Bullet::new(pos, Vec2::ZERO, &game.tuning));

        game.tick(DT);

        assert!(game.enemies().is_empty());
        assert!(game.bullets().is_empty());
        assert_eq!(game.score(), 100);
        assert!((game.player().health - 60.0).abs() < 1e-4);
        assert_eq!(game.best_score(), 100);
        assert_eq!(game.store().get_best_score(), Some(100));
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut game = game();
        let pos = Vec2::new(1000.0, 1000.0);
        game.enemies.push(Enemy::new(pos, &game.tuning));
        game.bullets.push(Bullet::new(pos, Vec2::ZERO, &game.tuning));
        game.tick(DT);
        assert_eq!(game.player().health, game.player().max_health);
    }

    #[test]
    fn test_shot_reaches_stationary_enemy() {
        let tuning = Tuning {
            enemy_speed: 0.0,
            ..Tuning::default()
        };
        let mut game = Game::new(tuning, 7);
        let distance = 1000.0;
        let enemy_pos = game.player().pos + Vec2::new(distance, 0.0);
        game.enemies.push(Enemy::new(enemy_pos, &game.tuning));

        assert!(game.pointer_down(enemy_pos));
        let ticks = (distance / game.tuning().bullet_speed / DT).ceil() as usize;
        for _ in 0..ticks {
            game.tick(DT);
        }

        assert!(game.enemies().is_empty());
        assert_eq!(game.score(), game.tuning().enemy_kill_score);
        assert!(game.particles().len() <= game.tuning().particle_count as usize);
        assert!(
            game.drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::EnemyKilled { .. }))
        );
    }

    #[test]
    fn test_no_spawns_before_tutorial_finishes() {
        let mut game = game();
        game.key_down(InputAction::Left);
        for _ in 0..600 {
            game.tick(DT);
        }
        assert_eq!(game.tutorial_state(), TutorialState::LearningShooting);
        assert!(game.enemies().is_empty());
    }

    #[test]
    fn test_spawns_after_tutorial_finishes() {
        let mut game = game();
        finish_tutorial(&mut game);

        game.tick(1.0);
        assert_eq!(game.enemies().len(), 1);
        let dist = game.enemies()[0].pos.distance(game.player().pos);
        assert!((dist - game.tuning().spawn_distance).abs() < 0.5);

        let mut last = game.spawner().interval();
        for _ in 0..300 {
            game.tick(DT);
            assert!(game.spawner().interval() <= last);
            assert!(game.spawner().interval() >= game.tuning().spawn_interval_min);
            last = game.spawner().interval();
        }
        assert!(game.enemies().len() > 1);
    }

    #[test]
    fn test_enemies_chase_player() {
        let mut game = game();
        let start = game.player().pos + Vec2::new(1000.0, 0.0);
        game.enemies.push(Enemy::new(start, &game.tuning));
        game.tick(1.0);
        let moved = start.x - game.enemies()[0].pos.x;
        assert!((moved - game.tuning().enemy_speed).abs() < 1e-2);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut game = game();
        game.pointer_down(Vec2::new(5000.0, 79.0));
        game.key_down(InputAction::Right);
        game.handle_input(InputEvent::KeyDown(InputAction::PauseToggle));
        assert!(game.is_paused());

        let before = game.player().pos;
        let lifetime = game.bullets()[0].lifetime;
        game.tick(1.0);
        assert_eq!(game.player().pos, before);
        assert_eq!(game.bullets()[0].lifetime, lifetime);

        assert!(!game.pointer_down(Vec2::ZERO));
        assert_eq!(game.bullets().len(), 1);

        game.key_down(InputAction::PauseToggle);
        assert!(!game.is_paused());
        game.tick(1.0);
        assert_eq!(game.player().pos.x, before.x + 750.0);
    }

    #[test]
    fn test_defeat_slows_time_and_blocks_shooting() {
        let mut game = game();
        game.pointer_down(Vec2::new(5000.0, 79.0));
        game.player.damage(1000.0);

        game.tick(1.0);
        let expected = game.tuning().bullet_lifetime - 1.0 / game.tuning().death_slowdown;
        assert!((game.bullets()[0].lifetime - expected).abs() < 1e-5);

        assert!(!game.pointer_down(Vec2::ZERO));
        assert_eq!(game.bullets().len(), 1);
    }

    #[test]
    fn test_shoot_key_uses_last_pointer_position() {
        let mut game = game();
        game.handle_input(InputEvent::PointerMove(Vec2::new(79.0, 2000.0)));
        game.handle_input(InputEvent::KeyDown(InputAction::Shoot));
        assert_eq!(game.bullets().len(), 1);
        assert!(game.bullets()[0].vel.y > 0.0);
        assert!(game.bullets()[0].vel.x.abs() < 1e-3);
    }

    #[test]
    fn test_best_score_from_store() {
        let store = MemoryStore::with_best(150);
        let mut game = Game::with_store(Tuning::default(), 1, Box::new(store));
        assert_eq!(game.best_score(), 150);

        for i in 0..2 {
            let pos = Vec2::new(1000.0 + i as f32 * 1000.0, 1000.0);
            game.enemies.push(Enemy::new(pos, &game.tuning));
            game.bullets.push(Bullet::new(pos, Vec2::ZERO, &game.tuning));
        }
        game.tick(DT);

        assert_eq!(game.score(), 200);
        assert_eq!(game.best_score(), 200);
        assert_eq!(game.store().get_best_score(), Some(200));
        let bests: Vec<_> = game
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::NewBestScore(s) => Some(s),
                _ => None,
            })
            .collect();
        assert_eq!(bests, vec![200]);
    }

    #[test]
    fn test_restart_keeps_best_score() {
        let mut game = game();
        finish_tutorial(&mut game);
        let pos = Vec2::new(1000.0, 1000.0);
        game.enemies.push(Enemy::new(pos, &game.tuning));
        game.bullets.push(Bullet::new(pos, Vec2::ZERO, &game.tuning));
        game.tick(DT);
        game.player.damage(1000.0);

        game.restart();

        assert_eq!(game.score(), 0);
        assert_eq!(game.best_score(), 100);
        assert_eq!(game.player().health, game.player().max_health);
        assert!(game.bullets().is_empty() && game.enemies().is_empty());
        assert_eq!(game.tutorial_state(), TutorialState::Finished);
    }

    #[test]
    fn test_restart_mid_tutorial_starts_over() {
        let mut game = game();
        game.key_down(InputAction::Right);
        game.tick(DT);
        assert_eq!(game.tutorial_state(), TutorialState::LearningShooting);
        game.toggle_pause();
        assert!(game.is_paused());

        game.restart();

        assert_eq!(game.tutorial_state(), TutorialState::LearningMovement);
        assert!(!game.is_paused());
        let start = game.player().pos;
        assert_eq!(start, Vec2::splat(79.0));

        game.drain_events();
        game.tick(DT);
        assert_eq!(game.player().pos, start);
        assert_eq!(game.tutorial_state(), TutorialState::LearningMovement);
        assert!(game.drain_events().is_empty());
    }

    fn spark(lifetime: f32) -> Particle {
        Particle {
            pos: Vec2::new(-3000.0, -3000.0),
            vel: Vec2::new(10.0, 0.0),
            lifetime,
            radius: 12.0,
            color: Tuning::default().enemy_color,
        }
    }

    #[test]
    fn test_particle_lifetime_and_pruning() {
        let mut game = game();
        game.particles.push(spark(1.0));

        for _ in 0..2 {
            game.tick(0.25);
        }
        assert_eq!(game.particles().len(), 1);
        assert!((game.particles()[0].lifetime - 0.5).abs() < 1e-6);
        assert!((game.particles()[0].pos.x - (-2995.0)).abs() < 1e-3);

        for _ in 0..2 {
            game.tick(0.25);
        }
        assert!(game.particles().is_empty());
    }

    #[test]
    fn test_particle_lifetime_in_slow_motion() {
        let mut game = game();
        game.player.damage(1000.0);
        game.particles.push(spark(1.0));

        game.tick(1.0);
        let expected = 1.0 - 1.0 / game.tuning().death_slowdown;
        assert!((game.particles()[0].lifetime - expected).abs() < 1e-6);

        game.tick(game.tuning().death_slowdown);
        assert!(game.particles().is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "death_slowdown")]
    fn test_zero_death_slowdown_rejected() {
        let tuning = Tuning {
            death_slowdown: 0.0,
            ..Tuning::default()
        };
        Game::new(tuning, 1);
    }

    #[test]
    fn test_grayness() {
        let mut game = game();
        assert_eq!(game.grayness(), 0.0);
        game.player.damage(50.0);
        assert!((game.grayness() - 0.5).abs() < 1e-6);
        game.toggle_pause();
        assert_eq!(game.grayness(), 1.0);
        game.toggle_pause();
        game.player.damage(100.0);
        assert_eq!(game.grayness(), 1.0);
    }

    #[test]
    fn test_snapshot() {
        let mut game = game();
        game.tick(0.1);
        game.pointer_down(Vec2::new(5000.0, 79.0));
        game.particles.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            lifetime: 0.25,
            radius: 12.0,
            color: game.tuning.enemy_color,
        });

        let frame = game.snapshot();
        assert!(frame.player.alive);
        assert_eq!(frame.bullets.len(), 1);
        assert_eq!(frame.particles[0].color.a, 0.25);
        assert_eq!(frame.popup.text, "WASD to move");
        assert!((frame.popup.color.a - 0.17).abs() < 1e-5);
        assert!(!frame.paused);

        game.toggle_pause();
        let frame = game.snapshot();
        assert_eq!(frame.popup.text, PAUSE_MESSAGE);
        assert_eq!(frame.popup.color.a, 1.0);
        assert_eq!(frame.grayness, 1.0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let run = |seed| {
            let mut game = Game::new(Tuning::default(), seed);
            finish_tutorial(&mut game);
            for _ in 0..600 {
                game.tick(DT);
            }
            game.enemies().iter().map(|e| e.pos).collect::<Vec<_>>()
        };
        let a = run(99);
        assert!(!a.is_empty());
        assert_eq!(a, run(99));
        assert_ne!(a, run(100));
    }

    #[test]
    fn test_no_nan_in_state() {
        let mut game = game();
        let center = game.player().pos;
        game.pointer_down(center);
        game.enemies.push(Enemy::new(center + Vec2::new(5000.0, 0.0), &game.tuning));
        for _ in 0..60 {
            game.tick(DT);
        }
        assert!(game.player().pos.is_finite());
        assert!(game.bullets().iter().all(|b| b.pos.is_finite()));
        assert!(game.enemies().iter().all(|e| e.pos.is_finite()));
    }
}
