//! Circle Shooter entry point
//!
//! Native builds run a headless, scripted session: a simple autopilot moves,
//! clears the tutorial and then fights, while a log-only renderer reports
//! what a drawing layer would receive. Browser hosts use the library
//! directly.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use glam::Vec2;

    use circle_shooter::persistence::JsonFileStore;
    use circle_shooter::platform::{FrameClock, action_for_mouse_button, event_for_key};
    use circle_shooter::render::{RenderFrame, Renderer};
    use circle_shooter::sim::{Game, GameEvent, InputEvent, TutorialState};
    use circle_shooter::{Tuning, TuningError};

    /// Host frame rate for the scripted run
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Frames between autopilot shots
    const SHOT_EVERY: u64 = 12;
    /// Frames of slow-motion to watch before restarting after a defeat
    const DEFEAT_FRAMES: u64 = 180;

    /// Logs a one-line summary of every `every`th frame
    struct LogRenderer {
        every: u64,
        frames: u64,
    }

    impl Renderer for LogRenderer {
        fn draw_frame(&mut self, frame: &RenderFrame) {
            self.frames += 1;
            if self.frames % self.every != 0 {
                return;
            }
            let player = &frame.player;
            log::info!(
                "frame {:>5} | pos ({:>6.0}, {:>6.0}) hp {:>3.0}/{:.0} | enemies {:>3} bullets {:>2} particles {:>3} | score {} (best {}) | gray {:.2}{}",
                self.frames,
                player.circle.pos.x,
                player.circle.pos.y,
                player.health,
                player.max_health,
                frame.enemies.len(),
                frame.bullets.len(),
                frame.particles.len(),
                frame.score,
                frame.best_score,
                frame.grayness,
                if frame.popup.text.is_empty() {
                    String::new()
                } else {
                    format!(" | \"{}\" @ {:.2}", frame.popup.text, frame.popup.color.a)
                },
            );
        }
    }

    struct Args {
        seconds: f64,
        tuning: Option<PathBuf>,
    }

    fn parse_args() -> Args {
        let mut args = std::env::args().skip(1);
        let seconds = args
            .next()
            .and_then(|s| s.parse().ok())
            .filter(|s: &f64| *s > 0.0)
            .unwrap_or(30.0);
        let tuning = args.next().map(PathBuf::from);
        Args { seconds, tuning }
    }

    /// Queue the event for a DOM key code, as a browser host would
    fn key(events: &mut Vec<InputEvent>, code: &str, pressed: bool) {
        events.extend(event_for_key(code, pressed));
    }

    /// Scripted input for frame `frame`: walk right, click, then strafe and
    /// shoot the nearest enemy
    fn autopilot(game: &Game, frame: u64) -> Vec<InputEvent> {
        let mut events = Vec::new();
        match game.tutorial_state() {
            TutorialState::LearningMovement => {
                if frame > 30 {
                    key(&mut events, "KeyD", true);
                }
            }
            TutorialState::LearningShooting => {
                key(&mut events, "KeyD", false);
                if frame % 60 == 0 {
                    let target = game.player().pos + Vec2::new(0.0, -400.0);
                    events.push(InputEvent::PointerDown(target));
                }
            }
            TutorialState::Finished => {
                // Strafe up and down in two-second legs
                let (hold, release) = if (frame / 120) % 2 == 0 {
                    ("KeyW", "KeyS")
                } else {
                    ("ArrowDown", "ArrowUp")
                };
                key(&mut events, release, false);
                key(&mut events, hold, true);

                let player = game.player().pos;
                let nearest = game
                    .enemies()
                    .iter()
                    .map(|e| e.pos)
                    .min_by(|a, b| a.distance(player).total_cmp(&b.distance(player)));
                if let Some(target) = nearest {
                    events.push(InputEvent::PointerMove(target));
                    if frame % SHOT_EVERY == 0 {
                        events.extend(action_for_mouse_button(0).map(InputEvent::KeyDown));
                    }
                }
            }
        }
        events
    }

    pub fn run() -> Result<(), TuningError> {
        circle_shooter::init_logging();
        let args = parse_args();

        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };

        let store_path = std::env::temp_dir()
            .join("circle-shooter")
            .join("best_score.json");
        let store = JsonFileStore::new(&store_path);
        let seed: u64 = rand::random();
        let mut game = Game::with_store(tuning, seed, Box::new(store));
        log::info!(
            "Running {:.0}s headless session (best score file: {})",
            args.seconds,
            store_path.display()
        );

        let mut clock = FrameClock::new();
        let mut renderer = LogRenderer {
            every: 60,
            frames: 0,
        };
        let total_frames = (args.seconds * 1000.0 / FRAME_MS).ceil() as u64;
        let mut defeated_at = None;

        for frame in 0..total_frames {
            for event in autopilot(&game, frame) {
                game.handle_input(event);
            }

            let dt = clock.dt(frame as f64 * FRAME_MS);
            game.tick(dt);
            renderer.draw_frame(&game.snapshot());

            for event in game.drain_events() {
                match event {
                    GameEvent::PlayerDefeated => {
                        log::info!("Defeated at frame {} with score {}", frame, game.score());
                        defeated_at = Some(frame);
                    }
                    GameEvent::TutorialAdvanced(state) => log::info!("Tutorial: {:?}", state),
                    other => log::debug!("{:?}", other),
                }
            }

            if defeated_at.is_some_and(|at| frame - at >= DEFEAT_FRAMES) {
                game.restart();
                defeated_at = None;
            }
        }

        log::info!(
            "Session over: score {}, best {}",
            game.score(),
            game.best_score()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = headless::run() {
        log::error!("{}", e);
        eprintln!("circle-shooter: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds are driven from JS through the library API
}
