//! Presentation and input side of the game
//!
//! The loop itself is backend-agnostic: a [`Frontend`] supplies input and
//! draws render requests, a [`FrameClock`] paces frames.

pub mod autopilot;
pub mod clock;
pub mod headless;
pub mod input;
pub mod terminal;

pub use autopilot::Autopilot;
pub use clock::{FrameClock, RealtimeClock, SteppedClock};
pub use headless::HeadlessFrontend;
pub use input::{Key, KeyState};
pub use terminal::TerminalFrontend;

use std::time::Instant;

use crate::error::FrontendError;
use crate::renderer::RenderRequest;
use crate::sim::{GameState, SessionPhase, TickInput, tick};

/// Input source and drawing surface for one session
pub trait Frontend {
    /// Gather the input for the frame starting at `now`
    fn poll_input(&mut self, state: &GameState, now: Instant) -> Result<TickInput, FrontendError>;

    /// Draw one frame
    fn present(&mut self, request: &RenderRequest) -> Result<(), FrontendError>;
}

/// Run frames until the quit signal, then hand the state back for export
pub fn run_session<F, C>(
    mut state: GameState,
    frontend: &mut F,
    clock: &mut C,
) -> Result<GameState, FrontendError>
where
    F: Frontend + ?Sized,
    C: FrameClock + ?Sized,
{
    log::info!("Session started (seed {})", state.seed);

    loop {
        let now = clock.now();
        let input = frontend.poll_input(&state, now)?;
        let request = tick(&mut state, &input, now);
        if state.phase == SessionPhase::Terminated {
            break;
        }
        frontend.present(&request)?;
        clock.wait_next_frame();
    }

    Ok(state)
}
