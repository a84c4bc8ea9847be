//! Per-tick physics context and the integration capability trait.

use crate::float::Float;
use crate::vec2::Vec2;

/// Context passed into every integration call.
///
/// Carries the optional world-level gravity override and the global time
/// scale. Levels set the override once at load; it must not change inside a
/// tick (callers sequence integrate-then-relax, see [`crate::graph`]).
///
/// # Builder Pattern
/// ```
/// use taut::{PhysicsContext, Vec2};
///
/// let ctx: PhysicsContext<f64> = PhysicsContext::new()
///     .with_gravity_override(Vec2::new(0.0, -980.0))
///     .with_time_scale(1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicsContext<F: Float> {
    /// When `Some`, this acceleration supersedes every point's per-instance
    /// gravity for the tick. `None` means each point uses its own.
    pub gravity_override: Option<Vec2<F>>,
    /// Divisor applied to `delta` before it reaches velocity and position
    /// updates. Default: 1.
    pub time_scale: F,
}

impl<F: Float> PhysicsContext<F> {
    /// Context with no gravity override and time scale 1.
    pub fn new() -> Self {
        PhysicsContext {
            gravity_override: None,
            time_scale: F::one(),
        }
    }

    /// Set the world-level gravity override (an acceleration, +y down).
    pub fn with_gravity_override(mut self, gravity: Vec2<F>) -> Self {
        self.gravity_override = Some(gravity);
        self
    }

    /// Clear the gravity override.
    pub fn without_gravity_override(mut self) -> Self {
        self.gravity_override = None;
        self
    }

    /// Set the time scale divisor.
    pub fn with_time_scale(mut self, time_scale: F) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// The per-step time factor: `delta / time_scale`.
    pub fn step_time(&self, delta: F) -> F {
        delta / self.time_scale
    }
}

impl<F: Float> Default for PhysicsContext<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability trait for anything advanced by numeric integration.
///
/// Game entities own their physics parts and implement this selectively;
/// there is no base-entity hierarchy.
pub trait Integrable<F: Float> {
    /// Advance by `delta` seconds under the given context.
    fn update(&mut self, delta: F, ctx: &PhysicsContext<F>);
}
