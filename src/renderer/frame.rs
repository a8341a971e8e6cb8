//! Per-frame render request
//!
//! Everything a presentation layer needs to draw one frame, copied out of the
//! simulation so the frontend never touches `GameState` directly.

use glam::Vec2;

use crate::sim::{Arena, GameState, Snapshot};

/// Ball as drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Paddle band as drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleView {
    pub angle: f32,
    pub half_width: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

/// The three HUD strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub hits: String,
    pub fastest_speed: String,
    pub time: String,
}

impl HudText {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            hits: format!("Hits: {}", snapshot.hits),
            fastest_speed: format!("Fastest Speed: {:.2}", snapshot.fastest_speed),
            time: format!("Time: {}s", snapshot.elapsed.as_secs()),
        }
    }
}

/// One frame's worth of drawing
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub arena: Arena,
    pub ball: BallView,
    pub paddle: PaddleView,
    pub hud: HudText,
}

impl RenderRequest {
    pub fn from_state(state: &GameState) -> Self {
        let arena = state.arena;
        let paddle = &state.paddle;
        Self {
            arena,
            ball: BallView {
                pos: state.ball.pos,
                radius: state.ball.radius,
            },
            paddle: PaddleView {
                angle: paddle.angle,
                half_width: paddle.half_width,
                inner_radius: arena.radius - paddle.radial_offset,
                outer_radius: arena.radius + paddle.radial_offset,
            },
            hud: HudText::from_snapshot(&state.snapshot()),
        }
    }
}
