//! Pong Circle - A circular arena arcade demo
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ball, paddle, boundary contact, session stats)
//! - `renderer`: Per-frame render requests and drawable geometry
//! - `ui`: Frontends (terminal, headless), frame clocks and the session loop
//! - `results`: Append-only CSV record of finished sessions
//! - `settings`: Data-driven tuning loaded from JSON

pub mod error;
pub mod renderer;
pub mod results;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{ExportError, FrontendError, SettingsError};
pub use results::{Player, SessionRecord};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Integration step per rendered frame (velocities are in pixels per frame)
    pub const FRAME_STEP: f32 = 1.0;
    /// Target frame rate of the external clock
    pub const TARGET_FPS: u32 = 60;

    /// Arena dimensions (screen space, y down)
    pub const ARENA_CENTER: (f32, f32) = (300.0, 300.0);
    pub const ARENA_RADIUS: f32 = 200.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 3.0;

    /// Paddle angular speed (radians per frame)
    pub const PADDLE_SPEED: f32 = 0.05;
    /// Angular window around the paddle that counts as a hit (radians)
    pub const HIT_TOLERANCE: f32 = 0.2;
    /// Radial extent of the drawn paddle on either side of the arena wall
    pub const PADDLE_RADIAL_OFFSET: f32 = 10.0;

    /// Speed multiplier applied on every paddle hit
    pub const SPEED_GROWTH: f32 = 1.05;

    /// Default results file
    pub const RESULTS_PATH: &str = "game_results.csv";
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) around `center` to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta) around `center`
#[inline]
pub fn cartesian_to_polar(center: Vec2, pos: Vec2) -> (f32, f32) {
    let d = pos - center;
    (d.length(), d.y.atan2(d.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(3.0 * PI).abs() - PI).abs() < 1e-5);
        assert!((normalize_angle(-0.5) - (-0.5)).abs() < 1e-6);
        assert!((normalize_angle(2.0 * PI - 0.1) - (-0.1)).abs() < 1e-5);
    }

    #[test]
    fn test_polar_roundtrip_offset_center() {
        let center = Vec2::new(300.0, 300.0);
        let p = polar_to_cartesian(center, 190.0, PI / 3.0);
        let (r, theta) = cartesian_to_polar(center, p);
        assert!((r - 190.0).abs() < 1e-3);
        assert!((theta - PI / 3.0).abs() < 1e-5);
    }
}
