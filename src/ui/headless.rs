//! Display-less frontend
//!
//! Steers with the autopilot and sends the quit signal after a fixed number
//! of frames.

use std::time::Instant;

use super::Frontend;
use super::autopilot::Autopilot;
use crate::error::FrontendError;
use crate::renderer::RenderRequest;
use crate::sim::{GameState, TickInput};

/// Frames between progress log lines
const LOG_INTERVAL: u64 = 600;

#[derive(Debug, Clone)]
pub struct HeadlessFrontend {
    frame_limit: u64,
    frames: u64,
    autopilot: Autopilot,
}

impl HeadlessFrontend {
    pub fn new(frame_limit: u64) -> Self {
        Self {
            frame_limit,
            frames: 0,
            autopilot: Autopilot,
        }
    }

    /// Frames handed out so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Frontend for HeadlessFrontend {
    fn poll_input(&mut self, state: &GameState, _now: Instant) -> Result<TickInput, FrontendError> {
        if self.frames >= self.frame_limit {
            return Ok(TickInput {
                quit: true,
                ..Default::default()
            });
        }
        self.frames += 1;
        Ok(TickInput {
            rotation: self.autopilot.steer(state),
            quit: false,
        })
    }

    fn present(&mut self, request: &RenderRequest) -> Result<(), FrontendError> {
        if self.frames % LOG_INTERVAL == 0 {
            log::info!(
                "frame {}: {} | {} | {}",
                self.frames,
                request.hud.hits,
                request.hud.fastest_speed,
                request.hud.time
            );
        }
        Ok(())
    }
}
