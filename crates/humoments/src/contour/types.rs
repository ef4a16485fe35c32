//! Basic boundary types and tolerances for the moment engine.
//!
//! - `Ring` / `Polygon`: ordered closed point sequences, outer ring plus
//!   oppositely wound holes.
//! - `Edge`: derived directed segment with distinct endpoints.
//! - `MomentCfg`: centralizes the degeneracy threshold used by the engine.

use nalgebra::Vector2;

/// 2D point/vector type used throughout the crate.
pub type Vec2 = Vector2<f64>;

/// Moment engine configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct MomentCfg {
    /// `|m00|` at or below this threshold counts as a degenerate boundary.
    pub eps_m00: f64,
}

impl Default for MomentCfg {
    fn default() -> Self {
        Self { eps_m00: 1e-12 }
    }
}

/// One closed boundary component.
///
/// Points are ordered; the last point connects back to the first. A ring that
/// repeats its first point at the end is accepted as-is: the duplicate closing
/// point collapses into a zero-length edge, which the boundary builder drops.
/// Winding is significant and is never corrected downstream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ring {
    pub points: Vec<Vec2>,
}

impl Ring {
    #[inline]
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    pub fn from_coords(coords: &[[f64; 2]]) -> Self {
        Self {
            points: coords.iter().map(|&[x, y]| Vec2::new(x, y)).collect(),
        }
    }
}

/// A polygon: one outer ring plus zero or more hole rings, holes wound
/// oppositely to the outer ring by convention.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub outer: Ring,
    pub holes: Vec<Ring>,
}

impl Polygon {
    #[inline]
    pub fn new(outer: Ring) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    #[inline]
    pub fn with_holes(outer: Ring, holes: Vec<Ring>) -> Self {
        Self { outer, holes }
    }

    /// Outer ring first, then holes in insertion order.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }
}

/// Directed boundary segment with `start ≠ end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub start: Vec2,
    pub end: Vec2,
}

impl Edge {
    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// Exact coordinate equality, the criterion for dropping zero-length edges.
#[inline]
pub(crate) fn same_point(a: Vec2, b: Vec2) -> bool {
    a.x == b.x && a.y == b.y
}
