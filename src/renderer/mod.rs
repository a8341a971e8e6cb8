//! Rendering module
//!
//! Backend-agnostic: produces a [`RenderRequest`] per frame plus the line
//! geometry a frontend draws from it.

pub mod frame;
pub mod shapes;

pub use frame::{BallView, HudText, PaddleView, RenderRequest};
