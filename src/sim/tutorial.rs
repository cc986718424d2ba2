//! Tutorial sequencer
//!
//! Three states, advanced by player actions:
//! `LearningMovement --moved--> LearningShooting --shot--> Finished`.
//!
//! Each advance fades the current hint out. When the fade-out completes the
//! popup swaps in the new state's hint and fades back in. Transitions are
//! plain functions returning the next state or a [`PopupCommand`]; the
//! engine drives them from its tick.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TutorialState {
    LearningMovement,
    LearningShooting,
    Finished,
}

/// Player actions the tutorial listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialTrigger {
    PlayerMoved,
    PlayerShot,
}

impl TutorialState {
    /// Hint shown while in this state
    pub fn message(self) -> &'static str {
        match self {
            TutorialState::LearningMovement => "WASD to move",
            TutorialState::LearningShooting => "Left Mouse Click to shoot",
            TutorialState::Finished => "",
        }
    }

    /// Next state for `trigger`, or `None` if the trigger does not apply here
    pub fn on_trigger(self, trigger: TutorialTrigger) -> Option<TutorialState> {
        match (self, trigger) {
            (TutorialState::LearningMovement, TutorialTrigger::PlayerMoved) => {
                Some(TutorialState::LearningShooting)
            }
            (TutorialState::LearningShooting, TutorialTrigger::PlayerShot) => {
                Some(TutorialState::Finished)
            }
            _ => None,
        }
    }
}

/// Direction the popup alpha is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    Idle,
    In,
    Out,
}

/// One-shot notification when a fade reaches its bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeEvent {
    FadedIn,
    FadedOut,
}

/// Side effect requested by a tutorial transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupCommand {
    FadeOut,
    FadeIn(&'static str),
}

/// A centered, fading text message
#[derive(Debug, Clone)]
pub struct Popup {
    pub text: &'static str,
    /// Opacity in [0, 1]
    pub alpha: f32,
    fade: Fade,
    /// Alpha change per second
    speed: f32,
}

impl Popup {
    pub fn new(text: &'static str, speed: f32) -> Self {
        Self {
            text,
            alpha: 0.0,
            fade: Fade::Idle,
            speed,
        }
    }

    pub fn fade(&self) -> Fade {
        self.fade
    }

    pub fn apply(&mut self, command: PopupCommand) {
        match command {
            PopupCommand::FadeOut => self.fade = Fade::Out,
            PopupCommand::FadeIn(text) => {
                self.text = text;
                self.fade = Fade::In;
            }
        }
    }

    /// Integrate alpha; reports once when a bound is reached
    pub fn update(&mut self, dt: f32) -> Option<FadeEvent> {
        match self.fade {
            Fade::Idle => None,
            Fade::In => {
                self.alpha += self.speed * dt;
                if self.alpha >= 1.0 {
                    self.alpha = 1.0;
                    self.fade = Fade::Idle;
                    Some(FadeEvent::FadedIn)
                } else {
                    None
                }
            }
            Fade::Out => {
                self.alpha -= self.speed * dt;
                if self.alpha <= 0.0 {
                    self.alpha = 0.0;
                    self.fade = Fade::Idle;
                    Some(FadeEvent::FadedOut)
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tutorial {
    state: TutorialState,
    popup: Popup,
}

impl Tutorial {
    /// Fresh tutorial: movement hint fading in
    pub fn new(fade_speed: f32) -> Self {
        let state = TutorialState::LearningMovement;
        let mut popup = Popup::new("", fade_speed);
        popup.apply(PopupCommand::FadeIn(state.message()));
        Self { state, popup }
    }

    /// A tutorial that has already been completed (no popup)
    pub fn finished(fade_speed: f32) -> Self {
        Self {
            state: TutorialState::Finished,
            popup: Popup::new(TutorialState::Finished.message(), fade_speed),
        }
    }

    pub fn state(&self) -> TutorialState {
        self.state
    }

    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    pub fn is_finished(&self) -> bool {
        self.state == TutorialState::Finished
    }

    /// Advance on `trigger` if it matches the current state. Returns the new
    /// state, or `None` when the trigger is stale.
    pub fn trigger(&mut self, trigger: TutorialTrigger) -> Option<TutorialState> {
        let next = self.state.on_trigger(trigger)?;
        self.state = next;
        self.popup.apply(PopupCommand::FadeOut);
        Some(next)
    }

    pub fn player_moved(&mut self) -> Option<TutorialState> {
        self.trigger(TutorialTrigger::PlayerMoved)
    }

    pub fn player_shot(&mut self) -> Option<TutorialState> {
        self.trigger(TutorialTrigger::PlayerShot)
    }

    /// Response to a finished fade
    fn on_fade(&self, event: FadeEvent) -> Option<PopupCommand> {
        match event {
            FadeEvent::FadedOut => Some(PopupCommand::FadeIn(self.state.message())),
            FadeEvent::FadedIn => None,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(command) = self.popup.update(dt).and_then(|event| self.on_fade(event)) {
            self.popup.apply(command);
        }
    }
}
