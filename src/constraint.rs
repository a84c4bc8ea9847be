//! Distance constraints and pinning for the relaxation solver.

use crate::float::Float;
use crate::vec2::Vec2;

/// How a constraint's rest length binds the two endpoints.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Always resolved toward the rest length (spring-like).
    Exact,
    /// Maximum length: satisfied while actual <= rest (rope/rod slack).
    AtMost,
    /// Minimum length: satisfied while actual >= rest (anti-collapse).
    AtLeast,
}

/// A directed constraint edge toward another node in the same graph.
///
/// Directed for iteration only; resolving an edge moves both endpoints
/// (weighted by inverse weight) unless the far side is pinned.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constraint<F: Float> {
    /// Index of the far endpoint in the owning graph.
    pub target: usize,
    /// Rest length the kind is measured against.
    pub rest_length: F,
    pub kind: ConstraintKind,
}

impl<F: Float> Constraint<F> {
    pub fn new(target: usize, rest_length: F, kind: ConstraintKind) -> Self {
        Constraint { target, rest_length, kind }
    }
}

/// Fixed-position override for a node.
///
/// A pinned node snaps to its pin at the top of every relaxation pass and
/// takes no part in constraint-driven movement; only the external driver
/// that owns the pin moves it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Pin<F: Float> {
    None,
    At(Vec2<F>),
}

impl<F: Float> Pin<F> {
    /// True when a pin position is set.
    pub fn is_pinned(&self) -> bool {
        matches!(self, Pin::At(_))
    }
}
