//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Fixed step per frame only
//! - Seeded RNG only
//! - Time enters as explicit frame timestamps
//! - No rendering or terminal dependencies

pub mod arc;
pub mod collision;
pub mod state;
pub mod tick;

pub use arc::ArcSegment;
pub use collision::{ContactOutcome, boundary_contact, boundary_threshold, is_paddle_hit};
pub use state::{
    Arena, Ball, GameState, Paddle, RotateDirection, SessionPhase, SessionStats, Snapshot,
};
pub use tick::{TickInput, tick};
