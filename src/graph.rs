//! Iterative relaxation over a graph of linked points.

use crate::constraint::{Constraint, ConstraintKind, Pin};
use crate::error::SimError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::vec2::Vec2;
use alloc::vec::Vec;

/// A node in the constraint graph: a position, an inverse weight, an
/// optional pin, and the node's outgoing constraint edges in registration
/// order.
///
/// `inv_weight == 0` makes the node immovable even without a pin.
#[derive(Clone, Debug)]
pub struct LinkedPoint<F: Float> {
    pub pos: Vec2<F>,
    pub inv_weight: F,
    pub pin: Pin<F>,
    constraints: Vec<Constraint<F>>,
}

impl<F: Float> LinkedPoint<F> {
    pub fn new(pos: Vec2<F>, inv_weight: F) -> Self {
        LinkedPoint {
            pos,
            inv_weight,
            pin: Pin::None,
            constraints: Vec::new(),
        }
    }

    /// The node's outgoing constraints, in registration order.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }
}

/// Graph of linked points resolved by fixed-count relaxation sweeps.
///
/// The solver never fails and never loops until convergence: callers choose
/// a pass count (2-4 per tick reads well for ropes) and accept slow
/// convergence or jitter on ill-posed graphs.
#[derive(Debug)]
pub struct ConstraintGraph<F: Float> {
    points: Vec<LinkedPoint<F>>,
}

impl<F: Float> ConstraintGraph<F> {
    pub fn new() -> Self {
        ConstraintGraph { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ConstraintGraph {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Add a node and return its index.
    pub fn add_point(&mut self, point: LinkedPoint<F>) -> usize {
        let idx = self.points.len();
        self.points.push(point);
        idx
    }

    /// Register a constraint from `from` toward `to`. Edges resolve in
    /// registration order within each node.
    pub fn add_constraint(
        &mut self,
        from: usize,
        to: usize,
        rest_length: F,
        kind: ConstraintKind,
    ) -> Result<(), SimError> {
        let count = self.points.len();
        if from >= count {
            return Err(SimError::PointOutOfBounds { index: from, count });
        }
        if to >= count {
            return Err(SimError::PointOutOfBounds { index: to, count });
        }
        self.points[from]
            .constraints
            .push(Constraint::new(to, rest_length, kind));
        Ok(())
    }

    /// Remove every constraint between `from` and `to`, in both directions.
    /// Cutting a rope segment goes through here. Returns how many edges were
    /// removed.
    pub fn remove_constraint(&mut self, from: usize, to: usize) -> usize {
        let mut removed = 0;
        if let Some(p) = self.points.get_mut(from) {
            let before = p.constraints.len();
            p.constraints.retain(|c| c.target != to);
            removed += before - p.constraints.len();
        }
        if let Some(p) = self.points.get_mut(to) {
            let before = p.constraints.len();
            p.constraints.retain(|c| c.target != from);
            removed += before - p.constraints.len();
        }
        removed
    }

    /// Pin a node to a fixed position.
    pub fn pin(&mut self, index: usize, pos: Vec2<F>) -> Result<(), SimError> {
        let count = self.points.len();
        let p = self
            .points
            .get_mut(index)
            .ok_or(SimError::PointOutOfBounds { index, count })?;
        p.pin = Pin::At(pos);
        Ok(())
    }

    /// Release a node's pin.
    pub fn unpin(&mut self, index: usize) -> Result<(), SimError> {
        let count = self.points.len();
        let p = self
            .points
            .get_mut(index)
            .ok_or(SimError::PointOutOfBounds { index, count })?;
        p.pin = Pin::None;
        Ok(())
    }

    pub fn point(&self, index: usize) -> &LinkedPoint<F> {
        &self.points[index]
    }

    pub fn point_mut(&mut self, index: usize) -> &mut LinkedPoint<F> {
        &mut self.points[index]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Run `passes` relaxation sweeps.
    pub fn satisfy(&mut self, passes: usize) {
        self.satisfy_observed(passes, &mut NoOpStepObserver);
    }

    /// Run `passes` relaxation sweeps, reporting each through the observer.
    ///
    /// One sweep visits every node in registration order. A pinned node is
    /// snapped to its pin and skipped. Otherwise each of the node's edges is
    /// resolved in turn: positions move toward satisfying the rest length,
    /// split between the endpoints in proportion to inverse weight, and the
    /// far endpoint is left alone when pinned. Intra-pass ordering affects
    /// convergence rate only; callers must not rely on it for correctness.
    pub fn satisfy_observed<O: StepObserver>(&mut self, passes: usize, observer: &mut O) {
        for pass in 0..passes {
            for i in 0..self.points.len() {
                if let Pin::At(pin) = self.points[i].pin {
                    self.points[i].pos = pin;
                    continue;
                }
                for k in 0..self.points[i].constraints.len() {
                    let edge = self.points[i].constraints[k];
                    self.resolve_edge(i, edge);
                }
            }
            observer.on_relax_pass(pass);
        }
    }

    fn resolve_edge(&mut self, i: usize, edge: Constraint<F>) {
        let self_pos = self.points[i].pos;
        let self_w = self.points[i].inv_weight;
        let other = &self.points[edge.target];
        let other_pos = other.pos;
        let other_w = other.inv_weight;
        let other_pinned = other.pin.is_pinned();

        let mut delta = other_pos - self_pos;
        // Exactly coincident endpoints have no direction to correct along;
        // (1, 1) is the engine's long-standing stand-in. The diagonal bias is
        // intended behavior, kept for parity with level content tuned to it.
        if delta.is_zero() {
            delta = Vec2::new(F::one(), F::one());
        }

        let dist_sq = delta.length_sq();
        let rest_sq = edge.rest_length * edge.rest_length;
        match edge.kind {
            ConstraintKind::AtMost if dist_sq <= rest_sq => return,
            ConstraintKind::AtLeast if dist_sq >= rest_sq => return,
            _ => {}
        }

        let w_total = self_w + other_w;
        if w_total == F::zero() {
            return; // both immovable
        }

        let dist = dist_sq.sqrt();
        // max(dist, 1) keeps the correction bounded near zero separation, at
        // the cost of damped corrections below unit distance.
        let correction = (dist - edge.rest_length) / (dist.max(F::one()) * w_total);

        self.points[i].pos.add_scaled(delta, correction * self_w);
        if !other_pinned {
            self.points[edge.target]
                .pos
                .add_scaled(delta, -(correction * other_w));
        }
    }
}

impl<F: Float> Default for ConstraintGraph<F> {
    fn default() -> Self {
        Self::new()
    }
}
