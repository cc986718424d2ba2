//! Render frame snapshots
//!
//! The simulation never draws. Once per frame the host asks the engine for a
//! [`RenderFrame`] and hands it to whatever [`Renderer`] it owns (canvas,
//! GPU, terminal). Colors are raw; apply [`RenderFrame::shade`] to get the
//! desaturated color for the current grayness.

use glam::Vec2;

use crate::Color;

/// A filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub circle: CircleView,
    pub health: f32,
    pub max_health: f32,
    /// Dead players are not drawn
    pub alive: bool,
}

/// Centered message text
#[derive(Debug, Clone, PartialEq)]
pub struct PopupView {
    pub text: &'static str,
    /// Color with the fade alpha applied
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub player: PlayerView,
    pub bullets: Vec<CircleView>,
    pub particles: Vec<CircleView>,
    pub enemies: Vec<CircleView>,
    pub popup: PopupView,
    pub paused: bool,
    pub score: u64,
    pub best_score: u64,
    /// Desaturation in [0, 1]
    pub grayness: f32,
}

impl RenderFrame {
    /// `color` as it should be drawn this frame
    pub fn shade(&self, color: Color) -> Color {
        color.desaturate(self.grayness)
    }

    /// Every circle in draw order: player (if alive), bullets, particles, enemies
    pub fn circles(&self) -> impl Iterator<Item = &CircleView> {
        let player = self.player.alive.then_some(&self.player.circle);
        player
            .into_iter()
            .chain(&self.bullets)
            .chain(&self.particles)
            .chain(&self.enemies)
    }
}

/// The drawing side of the host
pub trait Renderer {
    fn draw_frame(&mut self, frame: &RenderFrame);
}
