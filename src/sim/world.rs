//! A playfield full of balls
//!
//! The world owns every ball, the walls they bounce between and the seeded
//! RNG that drives spawning and explosions. Balls are stepped in index order
//! so a run is reproducible from its seed.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ball::Ball;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// What a renderer needs to draw one ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView<'a, C> {
    pub position: DVec2,
    pub radius: f64,
    pub color: &'a C,
}

#[derive(Debug, Clone)]
pub struct World<C> {
    width: f64,
    height: f64,
    gravity: f64,
    bounce_factor: f64,
    max_launch_speed: f64,
    min_explode_radius: f64,
    balls: Vec<Ball<C>>,
    rng: Pcg32,
    /// Completed calls to `tick`
    ticks: u64,
}

impl<C: Clone> World<C> {
    /// Create an empty world using the playfield and physics from `settings`
    pub fn new(settings: &Settings, seed: u64) -> Self {
        log::info!(
            "World {}x{} created with seed {}",
            settings.width,
            settings.height,
            seed
        );
        Self {
            width: settings.width,
            height: settings.height,
            gravity: settings.gravity,
            bounce_factor: settings.bounce_factor,
            max_launch_speed: settings.max_launch_speed,
            min_explode_radius: settings.min_explode_radius,
            balls: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            ticks: 0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn balls(&self) -> &[Ball<C>] {
        &self.balls
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Resize the playfield and move every ball's walls to match
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        for ball in &mut self.balls {
            confine(ball, width, height);
        }
        log::debug!("Bounds set to {}x{} for {} balls", width, height, self.balls.len());
    }

    /// Spawn a ball at the centre of the playfield with a random launch speed.
    ///
    /// Returns the new ball's index.
    ///
    /// Errors:
    /// - `Error::InvalidArgument` if `radius` is negative or the world's
    ///   maximum launch speed is not finite
    pub fn spawn(&mut self, color: C, radius: f64) -> Result<usize> {
        let max = self.max_launch_speed;
        if !max.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "max launch speed must be finite, got {max}"
            )));
        }
        let mut ball = Ball::new(color, radius)?;
        ball.move_to(self.width / 2.0, self.height / 2.0);

        // Scaled by hand: the width of [-max, max) overflows for huge `max`
        let (sx, sy) = if max > 0.0 {
            (
                max * (2.0 * self.rng.random::<f64>() - 1.0),
                max * (2.0 * self.rng.random::<f64>() - 1.0),
            )
        } else {
            (0.0, 0.0)
        };
        ball.set_speed(sx, sy);
        ball.set_acceleration(0.0, self.gravity);

        Ok(self.insert(ball))
    }

    /// Adopt a ball built elsewhere. Its walls and bounce factor are replaced
    /// with the world's.
    pub fn insert(&mut self, mut ball: Ball<C>) -> usize {
        self.adopt(&mut ball);
        self.balls.push(ball);
        self.balls.len() - 1
    }

    /// Step every ball once
    pub fn tick(&mut self) {
        for ball in &mut self.balls {
            ball.step();
        }
        self.ticks += 1;
    }

    /// Replace the ball at `index` with its explosion fragments.
    ///
    /// Fragments are appended at the end; the ball that used to be last
    /// takes over `index`. Returns the number of balls afterwards.
    ///
    /// Errors:
    /// - `Error::NoSuchBall` if `index` is out of range
    pub fn explode(&mut self, index: usize) -> Result<usize> {
        if index >= self.balls.len() {
            return Err(Error::NoSuchBall {
                index,
                len: self.balls.len(),
            });
        }
        let ball = self.balls.swap_remove(index);
        for mut fragment in ball.explode(&mut self.rng) {
            self.adopt(&mut fragment);
            self.balls.push(fragment);
        }
        log::debug!("Tick {}: ball {} exploded, {} balls", self.ticks, index, self.balls.len());
        Ok(self.balls.len())
    }

    /// Explode the largest ball if it is big enough.
    ///
    /// Ties go to the lowest index. Returns the new ball count, or `None` if
    /// nothing was exploded.
    pub fn explode_largest(&mut self) -> Option<usize> {
        let index = self
            .balls
            .iter()
            .enumerate()
            .filter(|(_, b)| b.radius() >= self.min_explode_radius)
            .fold(None::<(usize, f64)>, |best, (i, b)| match best {
                Some((_, r)) if r >= b.radius() => best,
                _ => Some((i, b.radius())),
            })
            .map(|(i, _)| i)?;
        self.explode(index).ok()
    }

    /// Per-ball draw data, in index order
    pub fn views(&self) -> impl Iterator<Item = BallView<'_, C>> {
        self.balls.iter().map(|b| BallView {
            position: b.position(),
            radius: b.radius(),
            color: b.color(),
        })
    }

    fn adopt(&self, ball: &mut Ball<C>) {
        ball.set_bounce_factor(self.bounce_factor);
        confine(ball, self.width, self.height);
    }
}

/// Keep the ball's edge, not its centre, inside the playfield
fn confine<C>(ball: &mut Ball<C>, width: f64, height: f64) {
    let r = ball.radius();
    ball.set_lower_limit_x(r);
    ball.set_upper_limit_x(width - r);
    ball.set_lower_limit_y(r);
    ball.set_upper_limit_y(height - r);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            width: 200.0,
            height: 100.0,
            gravity: 0.5,
            bounce_factor: 0.5,
            max_launch_speed: 4.0,
            min_explode_radius: 2.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_spawn_at_centre_within_bounds() {
        let mut world = World::new(&settings(), 1);
        let i = world.spawn("red", 10.0).unwrap();
        assert_eq!(i, 0);

        let ball = &world.balls()[0];
        assert_eq!(ball.position(), DVec2::new(100.0, 50.0));
        assert!(ball.delta_x().abs() <= 4.0);
        assert!(ball.delta_y().abs() <= 4.0);
        assert_eq!(ball.acceleration_y(), 0.5);
        assert_eq!(ball.bounce_factor(), 0.5);
        assert_eq!(ball.x_motion().lower_limit(), Some(10.0));
        assert_eq!(ball.x_motion().upper_limit(), Some(190.0));
        assert_eq!(ball.y_motion().upper_limit(), Some(90.0));
    }

    #[test]
    fn test_spawn_rejects_negative_radius() {
        let mut world = World::new(&settings(), 1);
        assert!(matches!(
            world.spawn("red", -1.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(world.is_empty());
    }

    #[test]
    fn test_spawn_with_huge_launch_speed() {
        let mut world = World::new(
            &Settings {
                max_launch_speed: 1.0e308,
                ..settings()
            },
            11,
        );
        world.spawn("red", 1.0).unwrap();
        let ball = &world.balls()[0];
        assert!(ball.delta_x().is_finite() && ball.delta_x().abs() <= 1.0e308);
        assert!(ball.delta_y().is_finite() && ball.delta_y().abs() <= 1.0e308);

        world.tick();
        let v = world.views().next().unwrap();
        assert!(v.position.x >= 1.0 && v.position.x <= 199.0);
    }

    #[test]
    fn test_spawn_rejects_infinite_launch_speed() {
        for max in [f64::INFINITY, f64::NAN] {
            let mut world = World::new(
                &Settings {
                    max_launch_speed: max,
                    ..settings()
                },
                11,
            );
            assert!(matches!(
                world.spawn("red", 1.0),
                Err(Error::InvalidArgument(_))
            ));
            assert!(world.is_empty());
        }
    }

    #[test]
    fn test_views_mirror_balls() {
        let mut world = World::new(&settings(), 21);
        world.spawn("red", 10.0).unwrap();
        world.spawn("green", 6.0).unwrap();
        world.tick();

        let views: Vec<_> = world.views().collect();
        assert_eq!(views.len(), 2);
        for (view, ball) in views.iter().zip(world.balls()) {
            assert_eq!(view.radius, ball.radius());
            assert_eq!(view.color, ball.color());
            assert_eq!(view.position, ball.position());
        }
        assert_eq!(views[0].radius, 10.0);
        assert_eq!(*views[1].color, "green");
    }

    #[test]
    fn test_balls_stay_inside_playfield() {
        let mut world = World::new(&settings(), 99);
        for _ in 0..5 {
            world.spawn("blue", 5.0).unwrap();
        }
        for _ in 0..1000 {
            world.tick();
            for v in world.views() {
                assert!(v.position.x >= 5.0 && v.position.x <= 195.0);
                assert!(v.position.y >= 5.0 && v.position.y <= 95.0);
            }
        }
        assert_eq!(world.ticks(), 1000);
        assert!(world.balls().iter().all(|b| b.steps() == 1000));
    }

    #[test]
    fn test_explode_replaces_ball_with_fragments() {
        let mut world = World::new(&settings(), 5);
        world.spawn("red", 8.0).unwrap();
        world.spawn("green", 6.0).unwrap();

        let count = world.explode(0).unwrap();
        assert_eq!(count, 9);
        assert_eq!(*world.balls()[0].color(), "green");
        for f in &world.balls()[1..] {
            assert_eq!(f.radius(), 4.0);
            assert_eq!(*f.color(), "red");
            assert_eq!(f.bounce_factor(), 0.5);
            assert_eq!(f.x_motion().upper_limit(), Some(196.0));
        }
    }

    #[test]
    fn test_explode_out_of_range() {
        let mut world: World<&str> = World::new(&settings(), 5);
        let err = world.explode(3).unwrap_err();
        assert!(matches!(err, Error::NoSuchBall { index: 3, len: 0 }));
    }

    #[test]
    fn test_explode_largest_respects_minimum() {
        let mut world = World::new(&settings(), 3);
        world.spawn("a", 3.0).unwrap();
        world.spawn("b", 8.0).unwrap();

        assert_eq!(world.explode_largest(), Some(9));
        assert_eq!(*world.balls()[0].color(), "a");

        // 8 -> 4 -> 2 -> 1, and 3 -> 1.5: 74 explosions in total
        let mut explosions = 1;
        while world.explode_largest().is_some() {
            explosions += 1;
        }
        assert_eq!(explosions, 74);
        assert_eq!(world.len(), 2 + 74 * 7);
        let biggest = world.balls().iter().map(|b| b.radius()).fold(0.0, f64::max);
        assert_eq!(biggest, 1.5);
    }

    #[test]
    fn test_set_bounds_updates_existing_balls() {
        let mut world = World::new(&settings(), 8);
        world.spawn("red", 10.0).unwrap();
        world.set_bounds(50.0, 40.0);
        let ball = &world.balls()[0];
        assert_eq!(ball.x_motion().upper_limit(), Some(40.0));
        assert_eq!(ball.y_motion().upper_limit(), Some(30.0));
        assert_eq!(world.width(), 50.0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let run = |seed| {
            let mut world = World::new(&settings(), seed);
            world.spawn("red", 8.0).unwrap();
            for t in 0..300 {
                if t == 100 {
                    world.explode(0).unwrap();
                }
                world.tick();
            }
            world.views().map(|v| v.position).collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }
}
