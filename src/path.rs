//! Deterministic waypoint motion for moving hazards and platforms.

use crate::error::SimError;
use crate::float::Float;
use crate::vec2::Vec2;
use alloc::vec::Vec;

/// Direction a circle path is generated in, in screen coordinates (+y down).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Moves along a fixed waypoint sequence at per-segment speeds, without
/// numeric integration.
///
/// Overshooting a waypoint within one step is converted into "overrun"
/// seconds and carried into the next update, so fast movers stay in sync
/// with elapsed time instead of snapping or drifting. An optional constant
/// rotation accumulates into [`PathMover::angle`] independently of the
/// translation state.
#[derive(Clone, Debug)]
pub struct PathMover<F: Float> {
    waypoints: Vec<Vec2<F>>,
    /// Speed used for the segment ending at the same-index waypoint.
    speeds: Vec<F>,
    default_speed: F,
    pub pos: Vec2<F>,
    target_index: usize,
    /// Unit direction toward the current target, scaled by segment speed.
    offset: Vec2<F>,
    /// Leftover seconds from overshooting a waypoint last update.
    overrun: F,
    reverse: bool,
    paused: bool,
    started: bool,
    rotation_speed: F,
    angle: F,
}

impl<F: Float> PathMover<F> {
    /// Empty mover. Add waypoints before calling [`PathMover::start`].
    pub fn new(default_speed: F) -> Self {
        PathMover {
            waypoints: Vec::new(),
            speeds: Vec::new(),
            default_speed,
            pos: Vec2::zero(),
            target_index: 0,
            offset: Vec2::zero(),
            overrun: F::zero(),
            reverse: false,
            paused: false,
            started: false,
            rotation_speed: F::zero(),
            angle: F::zero(),
        }
    }

    /// Polyline path: a start point followed by relative offsets.
    pub fn polyline(start: Vec2<F>, offsets: &[Vec2<F>], default_speed: F) -> Self {
        let mut mover = Self::new(default_speed);
        mover.push_waypoint(start);
        let mut cursor = start;
        for &off in offsets {
            cursor += off;
            mover.push_waypoint(cursor);
        }
        mover
    }

    /// Closed circular path: `points` waypoints evenly spaced at `radius`
    /// around `center`.
    pub fn circle(
        center: Vec2<F>,
        radius: F,
        points: usize,
        winding: Winding,
        default_speed: F,
    ) -> Result<Self, SimError> {
        if !(radius > F::zero()) || !radius.is_finite() {
            return Err(SimError::InvalidRadius);
        }
        if points < 2 {
            return Err(SimError::InsufficientWaypoints { got: points });
        }
        let mut mover = Self::new(default_speed);
        for i in 0..points {
            let angle = F::tau() * F::from_usize(i) / F::from_usize(points);
            // +y is down, so a positive-sine sweep reads clockwise on screen.
            let y = match winding {
                Winding::Clockwise => angle.sin(),
                Winding::CounterClockwise => -angle.sin(),
            };
            mover.push_waypoint(center + Vec2::new(angle.cos(), y) * radius);
        }
        Ok(mover)
    }

    /// Append a waypoint, moving at the default speed.
    pub fn push_waypoint(&mut self, point: Vec2<F>) {
        self.waypoints.push(point);
        self.speeds.push(self.default_speed);
    }

    /// Set the speed for the segment ending at waypoint `index`.
    pub fn set_segment_speed(&mut self, index: usize, speed: F) -> Result<(), SimError> {
        let count = self.speeds.len();
        let slot = self
            .speeds
            .get_mut(index)
            .ok_or(SimError::PointOutOfBounds { index, count })?;
        *slot = speed;
        Ok(())
    }

    /// Snap to the first waypoint, aim at the second, and begin moving.
    /// The only transition out of the not-started state.
    pub fn start(&mut self) {
        if self.waypoints.is_empty() {
            return;
        }
        self.pos = self.waypoints[0];
        self.target_index = if self.waypoints.len() > 1 { 1 } else { 0 };
        self.overrun = F::zero();
        self.recompute_offset();
        self.started = true;
    }

    /// Teleport to waypoint `index` and retarget, without animating.
    pub fn jump_to_point(&mut self, index: usize) -> Result<(), SimError> {
        let count = self.waypoints.len();
        if index >= count {
            return Err(SimError::PointOutOfBounds { index, count });
        }
        self.pos = self.waypoints[index];
        self.target_index = index;
        self.overrun = F::zero();
        self.step_target_index();
        self.recompute_offset();
        Ok(())
    }

    /// Advance by `delta` seconds.
    ///
    /// Rotation accrues on every call; translation requires the mover to be
    /// started, unpaused, and on a path of at least 2 waypoints.
    pub fn update(&mut self, delta: F) {
        if self.rotation_speed != F::zero() {
            self.angle = self.angle + self.rotation_speed * delta;
        }
        if self.paused || !self.started || self.waypoints.len() < 2 {
            return;
        }

        let step = delta + self.overrun;
        self.overrun = F::zero();
        let target = self.waypoints[self.target_index];

        if self.offset.is_zero() {
            // Coincident consecutive waypoints: arrive immediately and keep
            // the unconsumed time on the clock.
            self.pos = target;
            self.overrun = step;
            self.step_target_index();
            self.recompute_offset();
            return;
        }

        self.pos.add_scaled(self.offset, step);

        if self.crossed(target) {
            let overshoot = self.pos.distance(target);
            self.overrun = overshoot / self.offset.length();
            self.pos = target;
            self.step_target_index();
            self.recompute_offset();
        }
    }

    /// Axis-wise crossing test: the target counts as crossed once the sign
    /// of the remaining distance no longer matches the direction of travel
    /// on either axis. Not a geometric overshoot test.
    fn crossed(&self, target: Vec2<F>) -> bool {
        let zero = F::zero();
        (self.offset.x > zero && self.pos.x >= target.x)
            || (self.offset.x < zero && self.pos.x <= target.x)
            || (self.offset.y > zero && self.pos.y >= target.y)
            || (self.offset.y < zero && self.pos.y <= target.y)
    }

    fn step_target_index(&mut self) {
        let len = self.waypoints.len();
        if len == 0 {
            return;
        }
        self.target_index = if self.reverse {
            if self.target_index == 0 { len - 1 } else { self.target_index - 1 }
        } else {
            (self.target_index + 1) % len
        };
    }

    fn recompute_offset(&mut self) {
        if self.waypoints.is_empty() {
            self.offset = Vec2::zero();
            return;
        }
        let target = self.waypoints[self.target_index];
        let dir = (target - self.pos).normalize();
        self.offset = dir * self.speeds[self.target_index];
    }

    /// Pause translation. Rotation keeps accruing.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume translation.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Walk the waypoint list backwards instead of forwards.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    pub fn set_rotation_speed(&mut self, speed: F) {
        self.rotation_speed = speed;
    }

    /// Accumulated rotation in radians.
    pub fn angle(&self) -> F {
        self.angle
    }

    /// Index of the waypoint currently moved toward.
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// Overrun seconds pending for the next update.
    pub fn overrun(&self) -> F {
        self.overrun
    }

    pub fn waypoints(&self) -> &[Vec2<F>] {
        &self.waypoints
    }
}
