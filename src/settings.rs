//! Game settings and tuning
//!
//! Loaded once at startup from an optional JSON file. Missing keys fall back
//! to the defaults in [`crate::consts`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Simulation tuning and output location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    /// Arena center in screen space
    pub arena_center: Vec2,
    /// Arena radius
    pub arena_radius: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Launch speed (pixels per frame)
    pub ball_start_speed: f32,
    /// Multiplier applied on every paddle hit
    pub speed_growth: f32,

    // === Paddle ===
    /// Angular speed (radians per frame)
    pub paddle_speed: f32,
    /// Angular half-width of the hit window (radians)
    pub hit_tolerance: f32,
    /// How far the drawn paddle extends inside and outside the wall
    pub paddle_radial_offset: f32,

    // === Loop ===
    pub target_fps: u32,

    // === Output ===
    /// Results CSV appended to at session end
    pub results_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_center: Vec2::new(ARENA_CENTER.0, ARENA_CENTER.1),
            arena_radius: ARENA_RADIUS,

            ball_radius: BALL_RADIUS,
            ball_start_speed: BALL_START_SPEED,
            speed_growth: SPEED_GROWTH,

            paddle_speed: PADDLE_SPEED,
            hit_tolerance: HIT_TOLERANCE,
            paddle_radial_offset: PADDLE_RADIAL_OFFSET,

            target_fps: TARGET_FPS,

            results_path: PathBuf::from(RESULTS_PATH),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string, then validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Check the constraints the physics relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: &str| Err(SettingsError::Invalid(msg.to_string()));

        if !self.arena_center.is_finite() {
            return invalid("arena_center must be finite");
        }
        if !(self.ball_radius > 0.0) {
            return invalid("ball_radius must be > 0");
        }
        if !(self.arena_radius > self.ball_radius) {
            return invalid("arena_radius must be greater than ball_radius");
        }
        if !(self.ball_start_speed > 0.0) {
            return invalid("ball_start_speed must be > 0");
        }
        if !(self.speed_growth >= 1.0) {
            return invalid("speed_growth must be >= 1");
        }
        if !(self.paddle_speed >= 0.0) {
            return invalid("paddle_speed must be >= 0");
        }
        if !(self.hit_tolerance > 0.0 && self.hit_tolerance < std::f32::consts::PI) {
            return invalid("hit_tolerance must be in (0, π)");
        }
        if !(self.paddle_radial_offset >= 0.0) {
            return invalid("paddle_radial_offset must be >= 0");
        }
        if self.target_fps == 0 {
            return invalid("target_fps must be > 0");
        }
        Ok(())
    }

    /// Wall-clock length of one frame at the target rate
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.arena_radius, 200.0);
        assert_eq!(settings.results_path, PathBuf::from("game_results.csv"));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "arena_radius": 250.0, "target_fps": 30 }"#)
            .expect("partial settings should parse");
        assert_eq!(settings.arena_radius, 250.0);
        assert_eq!(settings.target_fps, 30);
        assert_eq!(settings.ball_radius, BALL_RADIUS);
        assert_eq!(settings.hit_tolerance, HIT_TOLERANCE);
    }

    #[test]
    fn test_arena_center_as_array() {
        let settings = Settings::from_json(r#"{ "arena_center": [10.0, 20.0] }"#).unwrap();
        assert_eq!(settings.arena_center, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_rejects_ball_larger_than_arena() {
        let err = Settings::from_json(r#"{ "arena_radius": 5.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_wide_tolerance() {
        let err = Settings::from_json(r#"{ "hit_tolerance": 3.5 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_nan_speed() {
        let settings = Settings {
            ball_start_speed: f32::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_frame_duration() {
        let settings = Settings::default();
        let frame = settings.frame_duration();
        assert!((frame.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }
}
