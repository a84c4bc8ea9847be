//! Point-mass physics, rope constraints, and waypoint motion for 2D games.
//!
//! `taut` is the simulation core of a rope-cutting puzzle game: elastic
//! ropes suspend an object, the player cuts them, and the object swings and
//! falls under gravity. The crate supplies the three pieces that mechanic
//! needs and nothing else:
//!
//! - **Integration**: [`MaterialPoint`], a semi-implicit Euler point mass
//!   with per-instance gravity, impulses, and error-bounding sub-steps.
//! - **Constraints**: [`ConstraintGraph`], fixed-count relaxation over
//!   linked points with exact, maximum-length, and minimum-length edges and
//!   hard pins.
//! - **Waypoint motion**: [`PathMover`], deterministic polyline/circle
//!   movers with per-segment speeds and overrun carry for hazards and
//!   platforms.
//!
//! [`Bungee`] composes the first two into the rope itself. Rendering,
//! hit-testing, input, and the game loop live with the caller: each frame,
//! update the movers and bodies, then read positions back.
//!
//! Everything is single-threaded, synchronous, and allocation-free at steady
//! state. `no_std` compatible for WASM game builds.

#![no_std]

extern crate alloc;

pub mod bungee;
pub mod constraint;
pub mod context;
pub mod error;
pub mod float;
pub mod follow;
pub mod graph;
pub mod observer;
pub mod path;
pub mod point;
pub mod vec2;

// Re-export primary API
pub use bungee::{Bungee, BungeeConfig};
pub use constraint::{Constraint, ConstraintKind, Pin};
pub use context::{Integrable, PhysicsContext};
pub use error::SimError;
pub use float::Float;
pub use follow::{FollowMode, Follower};
pub use graph::{ConstraintGraph, LinkedPoint};
pub use observer::{NoOpStepObserver, StepObserver};
pub use path::{PathMover, Winding};
pub use point::{MaterialPoint, EARTH_GRAVITY};
pub use vec2::Vec2;
