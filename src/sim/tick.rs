//! Fixed-step simulation tick
//!
//! One call per rendered frame: rotate paddle, move ball, resolve contact,
//! then hand back what the presentation layer should draw.

use std::time::Instant;

use super::state::{GameState, RotateDirection, SessionPhase};
use crate::consts::FRAME_STEP;
use crate::renderer::RenderRequest;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Paddle rotation from held keys
    pub rotation: RotateDirection,
    /// Quit signal seen at this frame boundary
    pub quit: bool,
}

/// Advance the game state by one frame taken at `now`
pub fn tick(state: &mut GameState, input: &TickInput, now: Instant) -> RenderRequest {
    if state.phase == SessionPhase::Terminated {
        return RenderRequest::from_state(state);
    }

    if input.quit {
        state.phase = SessionPhase::Terminated;
        state.mark_frame(now);
        log::info!(
            "Session terminated after {} frames ({} hits)",
            state.time_ticks,
            state.stats.hits
        );
        return RenderRequest::from_state(state);
    }

    state.time_ticks += 1;

    state.rotate_paddle(input.rotation, FRAME_STEP);
    state.advance(FRAME_STEP);
    state.check_boundary_and_reflect();
    state.mark_frame(now);

    RenderRequest::from_state(state)
}
