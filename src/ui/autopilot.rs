//! Autopilot for demo and headless runs
//!
//! Tracks where the ball will meet the wall and turns the paddle toward it.

use glam::Vec2;

use crate::normalize_angle;
use crate::sim::{GameState, RotateDirection, boundary_threshold};

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    /// Rotation that brings the paddle toward the predicted contact angle
    pub fn steer(&self, state: &GameState) -> RotateDirection {
        let target = predicted_contact_angle(state);
        let delta = normalize_angle(target - normalize_angle(state.paddle.angle));

        // Dead zone of one rotation step so it settles instead of jittering
        if delta.abs() <= state.paddle.angular_speed {
            RotateDirection::Hold
        } else if delta > 0.0 {
            RotateDirection::Clockwise
        } else {
            RotateDirection::CounterClockwise
        }
    }
}

/// Angle where the ball's straight path crosses the contact circle
///
/// Falls back to the ball's current angle when the path does not cross it.
fn predicted_contact_angle(state: &GameState) -> f32 {
    let d = state.ball.pos - state.arena.center;
    let v = state.ball.vel;
    let r = boundary_threshold(&state.arena, state.ball.radius);

    let a = v.length_squared();
    let b = 2.0 * d.dot(v);
    let c = d.length_squared() - r * r;
    let disc = b * b - 4.0 * a * c;

    let hit = if a > f32::EPSILON && disc >= 0.0 {
        let t = (-b + disc.sqrt()) / (2.0 * a);
        if t >= 0.0 { d + v * t } else { d }
    } else {
        d
    };

    if hit.length_squared() < f32::EPSILON {
        return state.paddle.angle;
    }
    angle_of(hit)
}

#[inline]
fn angle_of(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
