//! Single-axis bounded motion
//!
//! A `Motion` tracks position, speed and acceleration along one axis and
//! advances them one discrete step at a time. Optional limits act as walls:
//! crossing one clamps the position to it and reflects the speed.

/// Kinematic state of one axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    position: f64,
    /// Displacement applied per step
    speed: f64,
    /// Added to speed every step
    acceleration: f64,
    lower_limit: Option<f64>,
    upper_limit: Option<f64>,
}

impl Motion {
    /// At rest at the origin, unbounded on both sides
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: f64) {
        self.position = position;
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Overwrite the per-step displacement
    #[inline]
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    #[inline]
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// Overwrite the persistent per-step speed increment
    #[inline]
    pub fn set_acceleration(&mut self, acceleration: f64) {
        self.acceleration = acceleration;
    }

    /// One-time boost to speed; acceleration is left alone
    #[inline]
    pub fn accelerate(&mut self, delta: f64) {
        self.speed += delta;
    }

    pub fn lower_limit(&self) -> Option<f64> {
        self.lower_limit
    }

    pub fn upper_limit(&self) -> Option<f64> {
        self.upper_limit
    }

    /// Activate the lower wall. Not checked against the upper one.
    pub fn set_lower_limit(&mut self, limit: f64) {
        self.lower_limit = Some(limit);
    }

    /// Activate the upper wall. Not checked against the lower one.
    pub fn set_upper_limit(&mut self, limit: f64) {
        self.upper_limit = Some(limit);
    }

    /// Make the axis unbounded again
    pub fn clear_limits(&mut self) {
        self.lower_limit = None;
        self.upper_limit = None;
    }

    /// Stop dead: speed and acceleration go to zero, position stays
    pub fn halt(&mut self) {
        self.speed = 0.0;
        self.acceleration = 0.0;
    }

    /// Advance one step, bouncing off at most one active limit.
    ///
    /// After a bounce the speed is reversed and scaled by `bounce_factor`.
    /// The lower limit is checked first; with sane limits a single step can
    /// only cross one of them.
    pub fn step(&mut self, bounce_factor: f64) {
        self.speed += self.acceleration;
        self.position += self.speed;

        if let Some(lower) = self.lower_limit.filter(|&l| self.position < l) {
            self.position = lower;
            self.speed = -self.speed * bounce_factor;
        } else if let Some(upper) = self.upper_limit.filter(|&u| self.position > u) {
            self.position = upper;
            self.speed = -self.speed * bounce_factor;
        }
    }
}
