//! Boundary contact detection for the circular arena
//!
//! The ball only ever touches one surface: the arena wall. A contact counts
//! as a paddle hit when its angle falls inside the paddle's window.

use std::f32::consts::TAU;

use glam::Vec2;

use super::state::Arena;
use crate::cartesian_to_polar;

/// What happened during one contact check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Ball strictly inside the playable area
    None,
    /// Ball reached the wall away from the paddle and bounced back
    Wall,
    /// Ball reached the wall inside the paddle window
    PaddleHit,
}

/// Distance from the center at which the ball touches the wall
#[inline]
pub fn boundary_threshold(arena: &Arena, ball_radius: f32) -> f32 {
    arena.radius - ball_radius
}

/// Angle of the contact point if the ball has reached the wall
///
/// Returns `None` while the ball is strictly inside the playable boundary.
pub fn boundary_contact(arena: &Arena, ball_pos: Vec2, ball_radius: f32) -> Option<f32> {
    let (dist, theta) = cartesian_to_polar(arena.center, ball_pos);
    (dist >= boundary_threshold(arena, ball_radius)).then_some(theta)
}

/// Check whether a contact at `contact_angle` lands on the paddle
///
/// The difference is taken modulo 2π, so both ends of the 0/2π seam count.
#[inline]
pub fn is_paddle_hit(contact_angle: f32, paddle_angle: f32, tolerance: f32) -> bool {
    let diff = (contact_angle - paddle_angle).abs() % TAU;
    diff < tolerance || diff > TAU - tolerance
}

/// Velocity of magnitude `speed` along the radius at `theta`
#[inline]
pub fn radial_velocity(theta: f32, speed: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin()) * speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn arena() -> Arena {
        Arena {
            center: Vec2::new(300.0, 300.0),
            radius: 200.0,
        }
    }

    #[test]
    fn test_boundary_contact_inside() {
        assert_eq!(boundary_contact(&arena(), Vec2::new(300.0, 300.0), 10.0), None);
        assert_eq!(boundary_contact(&arena(), Vec2::new(489.0, 300.0), 10.0), None);
    }

    #[test]
    fn test_boundary_contact_at_and_past_wall() {
        let at = boundary_contact(&arena(), Vec2::new(490.0, 300.0), 10.0);
        assert_eq!(at, Some(0.0));

        // Below center in screen space is +y, so the angle is positive
        let past = boundary_contact(&arena(), Vec2::new(300.0, 520.0), 10.0).unwrap();
        assert!((past - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_paddle_hit_direct() {
        assert!(is_paddle_hit(1.0, 1.0, 0.2));
        assert!(is_paddle_hit(1.0, 1.19, 0.2));
        assert!(!is_paddle_hit(1.0, 1.21, 0.2));
    }

    #[test]
    fn test_paddle_hit_opposite_side_misses() {
        assert!(!is_paddle_hit(0.5, 0.5 + PI, 0.2));
        assert!(!is_paddle_hit(0.5 + PI, 0.5, 0.2));
    }

    #[test]
    fn test_paddle_hit_wraparound() {
        // Upper branch: |2π - 0.1 - 0| lands just under 2π
        assert!(is_paddle_hit(TAU - 0.1, 0.0, 0.2));
        // Paddle wound several turns past the contact
        assert!(is_paddle_hit(0.05, 3.0 * TAU, 0.2));
        assert!(is_paddle_hit(-3.0, -3.0 - 2.0 * TAU + 0.1, 0.2));
    }

    #[test]
    fn test_radial_velocity() {
        let v = radial_velocity(PI / 2.0, 3.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 3.0).abs() < 1e-6);
        assert!((radial_velocity(0.4, 7.5).length() - 7.5).abs() < 1e-5);
    }
}
