//! Bouncing Balls - a discrete-time 2D ball simulator
//!
//! Core modules:
//! - `sim`: Per-axis motion, balls and the world that drives them
//! - `settings`: JSON-backed configuration
//! - `error`: Crate-wide error type

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::{Playfield, Settings};
pub use sim::{Ball, BallView, Motion, World};

/// Simulation constants
pub mod consts {
    /// Share of speed a new ball keeps after hitting a wall
    pub const DEFAULT_BOUNCE_FACTOR: f64 = 0.99;
    /// Number of fragments one explosion produces
    pub const EXPLOSION_FRAGMENTS: usize = 8;
}
