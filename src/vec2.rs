//! Planar vector type used throughout the engine.

use crate::float::Float;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector. Value-semantic and `Copy`; the hot loops mutate in place
/// through the `*Assign` ops and [`Vec2::add_scaled`] so steady-state
/// simulation allocates nothing.
///
/// Screen-space convention: +y points down.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new vector.
    pub fn new(x: F, y: F) -> Self {
        Vec2 { x, y }
    }

    /// Zero vector.
    pub fn zero() -> Self {
        Vec2 { x: F::zero(), y: F::zero() }
    }

    /// True if both components are exactly zero.
    pub fn is_zero(self) -> bool {
        self.x == F::zero() && self.y == F::zero()
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (returns scalar): `self.x * other.y - self.y * other.x`.
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Perpendicular vector (rotated 90 degrees counter-clockwise).
    pub fn perp(self) -> Self {
        Vec2 { x: -self.y, y: self.x }
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F {
        (self - other).length_sq()
    }

    /// Normalize to unit length. Returns the zero vector if length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(1e-10)) {
            Self::zero()
        } else {
            self * (F::one() / len)
        }
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    /// In-place `self += other * s`. Fused form used by the integration loops.
    pub fn add_scaled(&mut self, other: Self, s: F) {
        self.x = self.x + other.x * s;
        self.y = self.y + other.y * s;
    }

    /// Overwrite both components.
    pub fn set(&mut self, x: F, y: F) {
        self.x = x;
        self.y = y;
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Vec2 { x: -self.x, y: -self.y }
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
    }
}

impl<F: Float> MulAssign<F> for Vec2<F> {
    fn mul_assign(&mut self, s: F) {
        self.x = self.x * s;
        self.y = self.y * s;
    }
}
