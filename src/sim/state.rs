//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`], owned by the loop
//! and passed explicitly to each operation.

use std::path::Path;
use std::time::{Duration, Instant};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{ContactOutcome, boundary_contact, is_paddle_hit, radial_velocity};
use crate::error::ExportError;
use crate::results::{self, Player, SessionRecord};
use crate::settings::Settings;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Frames are being simulated
    Running,
    /// Quit signal received; the state is waiting to be exported
    Terminated,
}

/// Held-key rotation for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotateDirection {
    /// Decreasing angle (left key)
    CounterClockwise,
    #[default]
    Hold,
    /// Increasing angle (right key)
    Clockwise,
}

impl RotateDirection {
    /// Combine two held keys; both held cancel out
    pub fn from_keys(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => RotateDirection::CounterClockwise,
            (false, true) => RotateDirection::Clockwise,
            _ => RotateDirection::Hold,
        }
    }

    /// -1, 0 or +1
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            RotateDirection::CounterClockwise => -1.0,
            RotateDirection::Hold => 0.0,
            RotateDirection::Clockwise => 1.0,
        }
    }
}

/// The fixed circular boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub center: Vec2,
    pub radius: f32,
}

/// The single ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Scalar speed, kept equal to `vel.length()` after every change
    pub speed: f32,
    pub radius: f32,
}

impl Ball {
    /// Ball at `pos` moving along `heading` at `speed`
    pub fn launched(pos: Vec2, heading: f32, speed: f32, radius: f32) -> Self {
        Self {
            pos,
            vel: radial_velocity(heading, speed),
            speed,
            radius,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Angular position along the wall (radians, never normalized)
    pub angle: f32,
    /// Angular half-width of the hit window
    pub half_width: f32,
    /// Radians per frame step
    pub angular_speed: f32,
    /// Drawn extent inside and outside the wall
    pub radial_offset: f32,
}

/// Cumulative score state for the session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStats {
    pub hits: u32,
    pub fastest_speed: f32,
    pub started_at: Instant,
    /// Timestamp of the most recent frame
    pub last_frame_at: Instant,
}

impl SessionStats {
    fn new(started_at: Instant) -> Self {
        Self {
            hits: 0,
            fastest_speed: 0.0,
            started_at,
            last_frame_at: started_at,
        }
    }

    /// Time from session start to the most recent frame
    pub fn elapsed(&self) -> Duration {
        self.last_frame_at.saturating_duration_since(self.started_at)
    }
}

/// Read-only view of the score for presentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub hits: u32,
    pub fastest_speed: f32,
    pub elapsed: Duration,
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed used for the launch heading
    pub seed: u64,
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    pub stats: SessionStats,
    pub phase: SessionPhase,
    /// Speed multiplier per paddle hit
    pub speed_growth: f32,
    /// Frames simulated so far
    pub time_ticks: u64,
}

impl GameState {
    /// New session with a launch heading drawn from `seed`
    pub fn new(settings: &Settings, seed: u64, started_at: Instant) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let heading = rng.random_range(0.0..std::f32::consts::TAU);
        let mut state = Self::with_heading(settings, heading, started_at);
        state.seed = seed;
        state
    }

    /// New session with the ball at the arena center moving along `heading`
    ///
    /// The ball starts at the center, not on the wall. A ball launched outward
    /// from the wall is already in contact and would be reflected back and
    /// forth on the rim every frame.
    pub fn with_heading(settings: &Settings, heading: f32, started_at: Instant) -> Self {
        let arena = Arena {
            center: settings.arena_center,
            radius: settings.arena_radius,
        };
        Self {
            seed: 0,
            arena,
            ball: Ball::launched(
                arena.center,
                heading,
                settings.ball_start_speed,
                settings.ball_radius,
            ),
            paddle: Paddle {
                angle: 0.0,
                half_width: settings.hit_tolerance,
                angular_speed: settings.paddle_speed,
                radial_offset: settings.paddle_radial_offset,
            },
            stats: SessionStats::new(started_at),
            phase: SessionPhase::Running,
            speed_growth: settings.speed_growth,
            time_ticks: 0,
        }
    }

    /// Translate the ball by one velocity step
    pub fn advance(&mut self, dt_frame: f32) {
        self.ball.pos += self.ball.vel * dt_frame;
    }

    /// Turn the paddle by its angular speed in `direction`
    pub fn rotate_paddle(&mut self, direction: RotateDirection, dt_frame: f32) {
        self.paddle.angle += direction.sign() * self.paddle.angular_speed * dt_frame;
    }

    /// Resolve a wall contact, if the ball has reached the playable boundary.
    ///
    /// The velocity is always inverted first. A paddle hit then overwrites it
    /// with the sped-up velocity along the contact radius.
    pub fn check_boundary_and_reflect(&mut self) -> ContactOutcome {
        let Some(angle_to_center) = boundary_contact(&self.arena, self.ball.pos, self.ball.radius)
        else {
            return ContactOutcome::None;
        };

        self.ball.vel = -self.ball.vel;

        if !is_paddle_hit(angle_to_center, self.paddle.angle, self.paddle.half_width) {
            return ContactOutcome::Wall;
        }

        self.stats.hits += 1;
        self.ball.speed *= self.speed_growth;
        self.stats.fastest_speed = self.stats.fastest_speed.max(self.ball.speed);
        self.ball.vel = radial_velocity(angle_to_center, self.ball.speed);
        log::debug!(
            "Paddle hit #{} at {:.3} rad, speed {:.3}",
            self.stats.hits,
            angle_to_center,
            self.ball.speed
        );
        ContactOutcome::PaddleHit
    }

    /// Record `now` as the latest frame time
    pub fn mark_frame(&mut self, now: Instant) {
        if now > self.stats.last_frame_at {
            self.stats.last_frame_at = now;
        }
    }

    /// Current score for presentation
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            hits: self.stats.hits,
            fastest_speed: self.stats.fastest_speed,
            elapsed: self.stats.elapsed(),
        }
    }

    /// Close the session at `now` and produce its result row
    pub fn finalize(self, player: &Player, now: Instant) -> SessionRecord {
        let elapsed = now.saturating_duration_since(self.stats.started_at);
        SessionRecord::new(player, self.stats.hits, self.stats.fastest_speed, elapsed)
    }

    /// Close the session and append its row to `path`
    pub fn finalize_and_export(
        self,
        player: &Player,
        path: &Path,
        now: Instant,
    ) -> Result<SessionRecord, ExportError> {
        let record = self.finalize(player, now);
        results::append_record(path, &record)?;
        Ok(record)
    }
}
