//! Simulation module
//!
//! Everything that moves lives here. No rendering or platform code:
//! - Discrete steps only
//! - Randomness is always injected or seeded
//! - Balls are stepped in index order

pub mod ball;
pub mod motion;
pub mod world;

pub use ball::Ball;
pub use motion::Motion;
pub use world::{BallView, World};
