//! Point masses advanced by semi-implicit Euler integration.

use crate::context::{Integrable, PhysicsContext};
use crate::error::SimError;
use crate::float::Float;
use crate::vec2::Vec2;

/// Default downward gravity in screen units (pixels/s^2): 9.81 m/s^2 at
/// 80 px/m, +y down.
pub const EARTH_GRAVITY: f32 = 784.8;

/// A single point mass.
///
/// Integration is semi-implicit Euler: velocity is updated from force first,
/// then position from the updated velocity, within the same step. Forces
/// queued through [`MaterialPoint::apply_force`] are consumed by the next
/// [`MaterialPoint::update`] and cleared.
#[derive(Clone, Debug)]
pub struct MaterialPoint<F: Float> {
    pub pos: Vec2<F>,
    pub velocity: Vec2<F>,
    pub acceleration: Vec2<F>,
    pending_force: Vec2<F>,
    weight: F,
    inv_weight: F,
    /// Per-instance gravity force, `(0, EARTH_GRAVITY * weight)` by default.
    gravity: Vec2<F>,
    gravity_disabled: bool,
}

impl<F: Float> MaterialPoint<F> {
    /// Point mass with weight 1 at the origin, at rest.
    pub fn new() -> Self {
        MaterialPoint {
            pos: Vec2::zero(),
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            pending_force: Vec2::zero(),
            weight: F::one(),
            inv_weight: F::one(),
            gravity: Vec2::new(F::zero(), F::from_f32(EARTH_GRAVITY)),
            gravity_disabled: false,
        }
    }

    /// Point mass with the given weight at the given position.
    pub fn with_weight(pos: Vec2<F>, weight: F) -> Result<Self, SimError> {
        let mut point = Self::new();
        point.pos = pos;
        point.set_weight(weight)?;
        Ok(point)
    }

    /// An immovable point: zero inverse weight, so force application is
    /// skipped entirely. Position only changes through direct writes,
    /// impulses, or an existing velocity.
    pub fn immovable(pos: Vec2<F>) -> Self {
        MaterialPoint {
            pos,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            pending_force: Vec2::zero(),
            weight: F::zero(),
            inv_weight: F::zero(),
            gravity: Vec2::zero(),
            gravity_disabled: false,
        }
    }

    /// Set the weight, recomputing the cached inverse and the per-instance
    /// gravity force.
    pub fn set_weight(&mut self, weight: F) -> Result<(), SimError> {
        if !(weight > F::zero()) || !weight.is_finite() {
            return Err(SimError::InvalidWeight);
        }
        self.weight = weight;
        self.inv_weight = F::one() / weight;
        self.gravity = Vec2::new(F::zero(), F::from_f32(EARTH_GRAVITY) * weight);
        Ok(())
    }

    /// Current weight.
    pub fn weight(&self) -> F {
        self.weight
    }

    /// Cached `1 / weight`.
    pub fn inv_weight(&self) -> F {
        self.inv_weight
    }

    /// Zero all motion state. Weight and gravity settings are untouched.
    pub fn reset_all(&mut self) {
        self.velocity = Vec2::zero();
        self.acceleration = Vec2::zero();
        self.pending_force = Vec2::zero();
    }

    /// Stop applying gravity to this point.
    pub fn disable_gravity(&mut self) {
        self.gravity_disabled = true;
    }

    /// Resume applying gravity to this point.
    pub fn enable_gravity(&mut self) {
        self.gravity_disabled = false;
    }

    /// Queue a force for the next update.
    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.pending_force += force;
    }

    /// Displace the position directly without touching velocity.
    pub fn apply_impulse(&mut self, impulse: Vec2<F>, delta: F, ctx: &PhysicsContext<F>) {
        self.pos.add_scaled(impulse, ctx.step_time(delta));
    }

    /// Subdivide `delta` into `floor(delta / precision) + 1` equal sub-steps,
    /// each run through [`MaterialPoint::update`]. Bounds per-step error for
    /// fast-moving bodies; with `precision >= delta` this is a single step.
    pub fn update_with_precision(&mut self, delta: F, precision: F, ctx: &PhysicsContext<F>) {
        // precision >= delta collapses to exactly one step, so coarse calls
        // are bit-identical to a plain update.
        let count = if precision >= delta {
            1
        } else {
            (delta / precision).floor().max(F::zero()).to_usize() + 1
        };
        let sub = delta / F::from_usize(count);
        for _ in 0..count {
            self.update(sub, ctx);
        }
    }

    /// Advance one semi-implicit Euler step.
    ///
    /// Total force is the queued pending force plus the gravity term (the
    /// context override when set and non-zero, else the cached per-instance
    /// vector). A zero inverse weight skips force application entirely;
    /// position still advances by the existing velocity.
    pub fn update(&mut self, delta: F, ctx: &PhysicsContext<F>) {
        let dt = ctx.step_time(delta);
        if self.inv_weight != F::zero() {
            let total = self.total_force(ctx);
            self.acceleration = total * self.inv_weight;
            self.velocity.add_scaled(self.acceleration, dt);
            self.pending_force = Vec2::zero();
        }
        self.pos.add_scaled(self.velocity, dt);
    }

    fn total_force(&self, ctx: &PhysicsContext<F>) -> Vec2<F> {
        let mut total = self.pending_force;
        if !self.gravity_disabled {
            match ctx.gravity_override {
                // The override is an acceleration; scale by weight so it acts
                // uniformly on mixed-weight points.
                Some(g) if !g.is_zero() && self.weight != F::zero() => {
                    total.add_scaled(g, self.weight);
                }
                _ => total += self.gravity,
            }
        }
        total
    }
}

impl<F: Float> Integrable<F> for MaterialPoint<F> {
    fn update(&mut self, delta: F, ctx: &PhysicsContext<F>) {
        MaterialPoint::update(self, delta, ctx);
    }
}

impl<F: Float> Default for MaterialPoint<F> {
    fn default() -> Self {
        Self::new()
    }
}
