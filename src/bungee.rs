//! Elastic rope built from point masses and a constraint graph.

use crate::constraint::ConstraintKind;
use crate::context::{Integrable, PhysicsContext};
use crate::error::SimError;
use crate::float::Float;
use crate::graph::{ConstraintGraph, LinkedPoint};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::point::MaterialPoint;
use crate::vec2::Vec2;
use alloc::vec::Vec;

/// Configuration for creating a bungee.
pub struct BungeeConfig<F: Float> {
    /// Weight of each rope node.
    pub segment_weight: F,
    /// Relaxation passes per step. 2-4 reads well for ropes.
    pub relax_passes: usize,
    /// Rest-length factor; above 1 the rope hangs loose.
    pub slack: F,
}

impl<F: Float> Default for BungeeConfig<F> {
    fn default() -> Self {
        BungeeConfig {
            segment_weight: F::one(),
            relax_passes: 3,
            slack: F::one(),
        }
    }
}

/// An elastic rope: a chain of [`MaterialPoint`]s whose spacing is enforced
/// by maximum-length constraints in a [`ConstraintGraph`].
///
/// The head is pinned to the anchor. Each step integrates every point,
/// relaxes the graph, and reads the resolved positions back. Cutting a
/// segment removes its constraint; everything below it falls freely.
#[derive(Debug)]
pub struct Bungee<F: Float> {
    points: Vec<MaterialPoint<F>>,
    graph: ConstraintGraph<F>,
    relax_passes: usize,
    segment_rest: F,
    segments: usize,
}

impl<F: Float> Bungee<F> {
    /// Build a rope from `anchor` to `tail` over `segments` segments, with
    /// the head pinned at the anchor.
    pub fn new(
        anchor: Vec2<F>,
        tail: Vec2<F>,
        segments: usize,
        config: BungeeConfig<F>,
    ) -> Result<Self, SimError> {
        if segments == 0 {
            return Err(SimError::InsufficientSegments);
        }

        let segment_rest = anchor.distance(tail) / F::from_usize(segments) * config.slack;
        let mut points = Vec::with_capacity(segments + 1);
        let mut graph = ConstraintGraph::with_capacity(segments + 1);

        points.push(MaterialPoint::immovable(anchor));
        for i in 1..=segments {
            let t = F::from_usize(i) / F::from_usize(segments);
            let pos = anchor.lerp(tail, t);
            points.push(MaterialPoint::with_weight(pos, config.segment_weight)?);
        }

        for p in &points {
            graph.add_point(LinkedPoint::new(p.pos, p.inv_weight()));
        }
        graph.pin(0, anchor)?;

        // Edges point child -> parent: a pinned head skips its own constraint
        // list, so the first segment must live on the unpinned side.
        for i in 0..segments {
            graph.add_constraint(i + 1, i, segment_rest, ConstraintKind::AtMost)?;
        }

        Ok(Bungee {
            points,
            graph,
            relax_passes: config.relax_passes.max(1),
            segment_rest,
            segments,
        })
    }

    /// One full tick: integrate every point, relax the graph, read positions
    /// back. Callers sequence this once per frame.
    pub fn step<O: StepObserver>(&mut self, delta: F, ctx: &PhysicsContext<F>, observer: &mut O) {
        for p in self.points.iter_mut() {
            p.update(delta, ctx);
        }
        observer.on_integrate();

        for (i, p) in self.points.iter().enumerate() {
            self.graph.point_mut(i).pos = p.pos;
        }
        self.graph.satisfy_observed(self.relax_passes, observer);
        for (i, p) in self.points.iter_mut().enumerate() {
            p.pos = self.graph.point(i).pos;
        }

        observer.on_step_complete();
    }

    /// Remove the constraint holding segment `index` (between nodes `index`
    /// and `index + 1`).
    pub fn cut(&mut self, index: usize) -> Result<(), SimError> {
        if index >= self.segments {
            return Err(SimError::PointOutOfBounds { index, count: self.segments });
        }
        self.graph.remove_constraint(index, index + 1);
        Ok(())
    }

    /// Move the pinned head (e.g. the anchor rides a [`crate::PathMover`]).
    pub fn move_head(&mut self, pos: Vec2<F>) -> Result<(), SimError> {
        self.points[0].pos = pos;
        self.graph.pin(0, pos)
    }

    /// Release the head, giving it the given weight so it falls with the rest.
    pub fn unpin_head(&mut self, weight: F) -> Result<(), SimError> {
        self.points[0].set_weight(weight)?;
        self.graph.unpin(0)?;
        self.graph.point_mut(0).inv_weight = self.points[0].inv_weight();
        Ok(())
    }

    /// Displace one node without touching its velocity.
    pub fn apply_impulse(
        &mut self,
        index: usize,
        impulse: Vec2<F>,
        delta: F,
        ctx: &PhysicsContext<F>,
    ) -> Result<(), SimError> {
        let count = self.points.len();
        let p = self
            .points
            .get_mut(index)
            .ok_or(SimError::PointOutOfBounds { index, count })?;
        p.apply_impulse(impulse, delta, ctx);
        Ok(())
    }

    /// Length of the rope polyline right now.
    pub fn current_length(&self) -> F {
        let mut total = F::zero();
        for pair in self.points.windows(2) {
            total = total + pair[0].pos.distance(pair[1].pos);
        }
        total
    }

    /// Sum of the segment rest lengths.
    pub fn rest_length(&self) -> F {
        self.segment_rest * F::from_usize(self.segments)
    }

    /// True while the rope is stretched to (or past) its rest length.
    pub fn is_taut(&self, tolerance: F) -> bool {
        self.current_length() + tolerance >= self.rest_length()
    }

    /// Current node positions, head first.
    pub fn positions(&self) -> Vec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.segments
    }

    pub fn point(&self, index: usize) -> &MaterialPoint<F> {
        &self.points[index]
    }

    pub fn point_mut(&mut self, index: usize) -> &mut MaterialPoint<F> {
        &mut self.points[index]
    }
}

impl<F: Float> Integrable<F> for Bungee<F> {
    fn update(&mut self, delta: F, ctx: &PhysicsContext<F>) {
        self.step(delta, ctx, &mut NoOpStepObserver);
    }
}
