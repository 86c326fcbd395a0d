//! Bouncing balls
//!
//! A ball is two independent `Motion`s (x and y) plus a radius, a color token
//! and a step counter. The color is never interpreted here; whatever draws
//! the ball decides what it means.

use glam::DVec2;
use rand::Rng;

use super::motion::Motion;
use crate::consts::{DEFAULT_BOUNCE_FACTOR, EXPLOSION_FRAGMENTS};
use crate::error::{Error, Result};

/// A ball moving in the plane, optionally boxed in by per-axis limits
#[derive(Debug, Clone, PartialEq)]
pub struct Ball<C> {
    color: C,
    radius: f64,
    x: Motion,
    y: Motion,
    /// Completed calls to `step`
    steps: u64,
    /// Share of speed kept after hitting a limit; expected in (0, 1)
    bounce_factor: f64,
}

impl<C> Ball<C> {
    /// Create a ball at rest at the origin.
    ///
    /// Errors:
    /// - `Error::InvalidArgument` if `radius` is negative
    pub fn new(color: C, radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "radius should not be negative, got {radius}"
            )));
        }
        Ok(Self::at_rest(color, radius))
    }

    fn at_rest(color: C, radius: f64) -> Self {
        Self {
            color,
            radius,
            x: Motion::new(),
            y: Motion::new(),
            steps: 0,
            bounce_factor: DEFAULT_BOUNCE_FACTOR,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x.position()
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y.position()
    }

    /// Current position as a vector
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x(), self.y())
    }

    /// Current per-step displacement as a vector
    pub fn velocity(&self) -> DVec2 {
        DVec2::new(self.delta_x(), self.delta_y())
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn width(&self) -> f64 {
        2.0 * self.radius
    }

    pub fn height(&self) -> f64 {
        2.0 * self.radius
    }

    pub fn color(&self) -> &C {
        &self.color
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn bounce_factor(&self) -> f64 {
        self.bounce_factor
    }

    /// Used by both axes on their next reflection. Not range-checked.
    pub fn set_bounce_factor(&mut self, bounce_factor: f64) {
        self.bounce_factor = bounce_factor;
    }

    pub fn x_motion(&self) -> &Motion {
        &self.x
    }

    pub fn y_motion(&self) -> &Motion {
        &self.y
    }

    /// Teleport the ball. Limits are not consulted.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x.set_position(x);
        self.y.set_position(y);
    }

    /// Speed along x, in units per step
    #[inline]
    pub fn delta_x(&self) -> f64 {
        self.x.speed()
    }

    /// Speed along y, in units per step
    #[inline]
    pub fn delta_y(&self) -> f64 {
        self.y.speed()
    }

    pub fn acceleration_x(&self) -> f64 {
        self.x.acceleration()
    }

    pub fn acceleration_y(&self) -> f64 {
        self.y.acceleration()
    }

    /// Perform one time step on both axes
    pub fn step(&mut self) {
        self.x.step(self.bounce_factor);
        self.y.step(self.bounce_factor);
        self.steps += 1;
    }

    /// Set the acceleration added to the speed on every step
    pub fn set_acceleration(&mut self, ax: f64, ay: f64) {
        self.x.set_acceleration(ax);
        self.y.set_acceleration(ay);
    }

    /// One-time boost to the speed; acceleration is unchanged
    pub fn accelerate(&mut self, dx: f64, dy: f64) {
        self.x.accelerate(dx);
        self.y.accelerate(dy);
    }

    /// Zero speed and acceleration on both axes
    pub fn halt(&mut self) {
        self.x.halt();
        self.y.halt();
    }

    /// Positive y speed moves the ball towards larger y (down on most screens)
    pub fn set_speed(&mut self, sx: f64, sy: f64) {
        self.x.set_speed(sx);
        self.y.set_speed(sy);
    }

    pub fn set_lower_limit_x(&mut self, limit: f64) {
        self.x.set_lower_limit(limit);
    }

    pub fn set_lower_limit_y(&mut self, limit: f64) {
        self.y.set_lower_limit(limit);
    }

    pub fn set_upper_limit_x(&mut self, limit: f64) {
        self.x.set_upper_limit(limit);
    }

    pub fn set_upper_limit_y(&mut self, limit: f64) {
        self.y.set_upper_limit(limit);
    }
}

impl<C: Clone> Ball<C> {
    /// Break the ball into eight fragments of half its radius.
    ///
    /// Every fragment starts at this ball's position. Its speed and
    /// acceleration on each axis are this ball's value plus a fresh draw from
    /// `[0, 1)`, drawn in the order speed x, speed y, acceleration x,
    /// acceleration y. Fragments get the default bounce factor and no limits.
    /// `self` is left untouched.
    pub fn explode<R: Rng + ?Sized>(&self, rng: &mut R) -> [Ball<C>; EXPLOSION_FRAGMENTS] {
        let radius = self.radius / 2.0;

        let fragments = std::array::from_fn(|_| {
            let mut fragment = Ball::at_rest(self.color.clone(), radius);
            fragment.move_to(self.x(), self.y());

            let sx = rng.random::<f64>() + self.delta_x();
            let sy = rng.random::<f64>() + self.delta_y();
            let ax = rng.random::<f64>() + self.acceleration_x();
            let ay = rng.random::<f64>() + self.acceleration_y();

            fragment.set_acceleration(ax, ay);
            fragment.set_speed(sx, sy);
            fragment
        });

        log::debug!(
            "Ball (r={}) exploded at ({:.1}, {:.1}) into {} fragments",
            self.radius,
            self.x(),
            self.y(),
            EXPLOSION_FRAGMENTS
        );

        fragments
    }
}
