//! Movement execution along a smoothed curve
//!
//! Each tick advances progress by speed * dt, writes the agent's position
//! through the body adapter, and reports arrival.

use glam::Vec2;

use crate::core::constants::GEOM_EPSILON;
use crate::movement::progress::ProgressTracker;
use crate::smoothing::curve::SmoothCurve;

/// Adapter to whatever owns the agent's transform
///
/// The core reads the current position, writes positions during execution,
/// and pushes facing updates for animation.
pub trait AgentBody {
    fn world_position(&self) -> Vec2;
    fn set_world_position(&mut self, position: Vec2);
    fn set_facing(&mut self, direction: Vec2);
}

/// Result of one execution tick
#[derive(Debug, Clone, Copy)]
pub struct ExecutionTick {
    pub position: Vec2,
    pub direction: Vec2,
    pub progress: f32,
    pub completed: bool,
}

/// Drives an agent along one confirmed curve
#[derive(Debug, Clone)]
pub struct MovementExecutor {
    tracker: ProgressTracker,
    speed: f32,
    arrival_threshold: f32,
    near_finish_threshold: f32,
}

impl MovementExecutor {
    pub fn new(
        curve: &SmoothCurve,
        speed: f32,
        arrival_threshold: f32,
        near_finish_threshold: f32,
    ) -> Self {
        Self {
            tracker: ProgressTracker::new(curve),
            speed,
            arrival_threshold,
            near_finish_threshold,
        }
    }

    pub fn progress(&self) -> f32 {
        self.tracker.progress()
    }

    /// Advance by `dt` seconds and move the body
    ///
    /// Completion snaps the body to the final curve point, either when the
    /// target comes within the arrival threshold of the endpoint or when
    /// progress passes the near-finish threshold.
    pub fn tick(&mut self, dt: f32, body: &mut dyn AgentBody) -> ExecutionTick {
        let Some(final_point) = self.tracker.final_point() else {
            return ExecutionTick {
                position: body.world_position(),
                direction: Vec2::ZERO,
                progress: 1.0,
                completed: true,
            };
        };

        let progress = self.tracker.advance(self.speed * dt.max(0.0));
        let target = self.tracker.position();

        let from = body.world_position();
        let to_target = target - from;
        let direction = if to_target.length() > GEOM_EPSILON {
            to_target.normalize()
        } else {
            Vec2::ZERO
        };

        let arrived = (target - final_point).length() <= self.arrival_threshold
            || progress >= self.near_finish_threshold;

        let position = if arrived { final_point } else { target };
        body.set_world_position(position);
        if direction != Vec2::ZERO {
            body.set_facing(direction);
        }

        ExecutionTick {
            position,
            direction,
            progress: if arrived { 1.0 } else { progress },
            completed: arrived,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestBody {
        position: Vec2,
        facing: Vec2,
    }

    impl TestBody {
        fn at(position: Vec2) -> Self {
            Self {
                position,
                facing: Vec2::ZERO,
            }
        }
    }

    impl AgentBody for TestBody {
        fn world_position(&self) -> Vec2 {
            self.position
        }

        fn set_world_position(&mut self, position: Vec2) {
            self.position = position;
        }

        fn set_facing(&mut self, direction: Vec2) {
            self.facing = direction;
        }
    }

    fn curve() -> SmoothCurve {
        SmoothCurve::open(vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)])
    }

    #[test]
    fn test_tick_moves_body_forward() {
        let mut executor = MovementExecutor::new(&curve(), 10.0, 0.5, 0.99);
        let mut body = TestBody::at(Vec2::ZERO);

        let result = executor.tick(1.0, &mut body);

        assert!(!result.completed);
        assert!((body.position.x - 10.0).abs() < 0.001);
        assert!((result.progress - 0.1).abs() < 0.001);
    }

    #[test]
    fn test_facing_points_toward_target() {
        let mut executor = MovementExecutor::new(&curve(), 10.0, 0.5, 0.99);
        let mut body = TestBody::at(Vec2::ZERO);

        executor.tick(1.0, &mut body);

        assert!((body.facing - Vec2::new(1.0, 0.0)).length() < 0.001);
    }

    #[test]
    fn test_completes_and_snaps_to_endpoint() {
        let mut executor = MovementExecutor::new(&curve(), 10.0, 0.5, 0.99);
        let mut body = TestBody::at(Vec2::ZERO);

        let mut completed = false;
        for _ in 0..20 {
            if executor.tick(1.0, &mut body).completed {
                completed = true;
                break;
            }
        }

        assert!(completed);
        assert_eq!(body.position, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_near_finish_threshold_triggers_snap() {
        // Low threshold completes well before the endpoint
        let mut executor = MovementExecutor::new(&curve(), 10.0, 0.0, 0.5);
        let mut body = TestBody::at(Vec2::ZERO);

        let mut ticks = 0;
        loop {
            ticks += 1;
            if executor.tick(1.0, &mut body).completed {
                break;
            }
            assert!(ticks < 100, "executor never completed");
        }

        assert_eq!(ticks, 5);
        assert_eq!(body.position, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_progress_monotonic_over_ticks() {
        let mut executor = MovementExecutor::new(&curve(), 7.0, 0.5, 0.99);
        let mut body = TestBody::at(Vec2::ZERO);

        let mut last = 0.0;
        for _ in 0..10 {
            let result = executor.tick(0.5, &mut body);
            assert!(result.progress >= last);
            last = result.progress;
        }
    }

    #[test]
    fn test_empty_curve_completes_immediately() {
        let empty = SmoothCurve::open(Vec::new());
        let mut executor = MovementExecutor::new(&empty, 10.0, 0.5, 0.99);
        let mut body = TestBody::at(Vec2::new(5.0, 5.0));

        let result = executor.tick(0.016, &mut body);
        assert!(result.completed);
        assert_eq!(body.position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_single_point_curve_snaps() {
        let point = SmoothCurve::open(vec![Vec2::new(3.0, 4.0)]);
        let mut executor = MovementExecutor::new(&point, 10.0, 0.5, 0.99);
        let mut body = TestBody::at(Vec2::ZERO);

        let result = executor.tick(0.016, &mut body);
        assert!(result.completed);
        assert_eq!(body.position, Vec2::new(3.0, 4.0));
    }
}
