//! Camera-style interpolation toward a moving target.

use crate::float::Float;
use crate::vec2::Vec2;

/// How a [`Follower`] closes on its target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FollowMode<F: Float> {
    /// Close a `rate`-proportional fraction of the gap per second.
    Proportional(F),
    /// Move at a constant speed, snapping exactly onto the target on arrival.
    FixedSpeed(F),
}

/// Simple interpolator for cameras and secondary visuals.
pub struct Follower<F: Float> {
    pub pos: Vec2<F>,
    pub target: Vec2<F>,
    mode: FollowMode<F>,
}

impl<F: Float> Follower<F> {
    pub fn new(pos: Vec2<F>, mode: FollowMode<F>) -> Self {
        Follower { pos, target: pos, mode }
    }

    /// Move toward the target. Never overshoots.
    pub fn update(&mut self, delta: F) {
        match self.mode {
            FollowMode::Proportional(rate) => {
                let t = (rate * delta).min(F::one());
                self.pos = self.pos.lerp(self.target, t);
            }
            FollowMode::FixedSpeed(speed) => {
                let gap = self.target - self.pos;
                let dist = gap.length();
                let step = speed * delta;
                if step >= dist {
                    self.pos = self.target;
                } else {
                    self.pos.add_scaled(gap.normalize(), step);
                }
            }
        }
    }

    /// True once the follower sits exactly on its target.
    pub fn arrived(&self) -> bool {
        self.pos == self.target
    }
}
